//! `Month`: month of the year and its English abbreviations.

/// Month of the year, numbered 1–12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    /// January (1).
    January = 1,
    /// February (2).
    February = 2,
    /// March (3).
    March = 3,
    /// April (4).
    April = 4,
    /// May (5).
    May = 5,
    /// June (6).
    June = 6,
    /// July (7).
    July = 7,
    /// August (8).
    August = 8,
    /// September (9).
    September = 9,
    /// October (10).
    October = 10,
    /// November (11).
    November = 11,
    /// December (12).
    December = 12,
}

/// English three-letter abbreviations, capitalized, in calendar order.
pub const ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Construct from a number (1 = January … 12 = December).
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Look up a three-letter English abbreviation, ignoring case.
    ///
    /// Only the abbreviation itself is accepted: `"mar"` and `"MAR"` match,
    /// `"March"` does not.
    pub fn from_abbreviation(s: &str) -> Option<Self> {
        ABBREVIATIONS
            .iter()
            .position(|abbr| abbr.eq_ignore_ascii_case(s))
            .map(|i| Self::ALL[i])
    }

    /// Look up an abbreviation using its exact capitalized spelling
    /// (`"Mar"` matches, `"mar"` does not).
    pub fn from_exact_abbreviation(s: &str) -> Option<Self> {
        ABBREVIATIONS
            .iter()
            .position(|abbr| *abbr == s)
            .map(|i| Self::ALL[i])
    }

    /// Return the 1-based month number.
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Return the three-letter abbreviation (`"Jan"`, `"Feb"`, …).
    pub fn short_name(self) -> &'static str {
        ABBREVIATIONS[usize::from(self.number() - 1)]
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

impl From<Month> for u8 {
    fn from(m: Month) -> u8 {
        m as u8
    }
}
