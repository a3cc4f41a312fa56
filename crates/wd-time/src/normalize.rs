//! Loose date normalization.
//!
//! [`normalize`] turns a [`DateInput`] into a [`DateTime`].  With the epoch
//! flag set the input is milliseconds since the Unix epoch, read in UTC.
//! Otherwise the input is treated as text and goes through a fixed sequence
//! of heuristics:
//!
//! 1. Text starting with `DD.DD.DDDD` is read as day.month.year; a later
//!    `HH:MM:SS` token supplies the time.
//! 2. Anything else has a date glued to a following time split apart
//!    (`2020-02-2812:30:00`), its first two separator characters unified to
//!    `-`, and is cut into tokens of word characters, `'`, `:` and `.`:
//!    * a single token is a fixed-width `YYYYMMDDHHMMSS` digit string,
//!      right-padded with zeros;
//!    * several tokens are classified one at a time by an ordered rule table,
//!      first match wins.
//!
//! Rule order decides ambiguous inputs: in `2020-02-05` the first token in
//! `1..=12` becomes the month and the second the day.
//!
//! Any field combination that is not a real date-time, and any token that
//! has to be read as a number but is not one, ends in
//! [`Error::InvalidDate`] carrying the raw input and the fields resolved so
//! far.

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, trace};
use wd_core::errors::{Error, ResolvedFields, Result};

use crate::datetime::DateTime;
use crate::input::DateInput;
use crate::month::Month;

macro_rules! regex {
    ($pattern:literal) => {{
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new($pattern).expect("hard-coded pattern compiles"))
    }};
}

/// Width of the fixed `YYYYMMDDHHMMSS` layout used for single-token input.
const FIXED_WIDTH: usize = 14;

/// Normalize a raw value into a canonical date-time.
///
/// With `epoch` set, the value must be an integer count of milliseconds
/// since 1970-01-01T00:00:00Z.  Without it, integers are read as their
/// decimal digit string (`20200408` behaves like `"20200408"`).
pub fn normalize(input: &DateInput, epoch: bool) -> Result<DateTime> {
    if epoch {
        return normalize_epoch(input);
    }
    match input {
        DateInput::Text(s) => normalize_str(s),
        DateInput::Integer(n) => normalize_str(&n.to_string()),
    }
}

/// Normalize a date string (epoch flag off).
pub fn normalize_str(raw: &str) -> Result<DateTime> {
    let mut resolver = Resolver::new(raw);
    if regex!(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}").is_match(raw) {
        resolver.day_month_year()?;
    } else {
        resolver.loose()?;
    }
    let dt = resolver.assemble()?;
    debug!(raw, normalized = %dt, "normalized date");
    Ok(dt)
}

fn normalize_epoch(input: &DateInput) -> Result<DateTime> {
    let resolver = Resolver::new(&input.to_string());
    let millis = match input {
        DateInput::Integer(ms) => *ms,
        DateInput::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| resolver.fail("epoch input is not an integer count of milliseconds"))?,
    };
    DateTime::from_epoch_millis(millis).map_err(|e| resolver.fail(reason_of(e)))
}

// ── Token classification ──────────────────────────────────────────────────────

/// One classification rule: a shape test plus the field extractor run when
/// the shape matches.
struct TokenRule {
    name: &'static str,
    matches: fn(&str) -> bool,
    apply: fn(&mut Resolver, &str) -> Result<()>,
}

/// Classification rules for multi-token input, in priority order.
static TOKEN_RULES: [TokenRule; 7] = [
    TokenRule {
        name: "month name",
        matches: is_alphabetic,
        apply: apply_month_name,
    },
    TokenRule {
        name: "designated clock",
        matches: is_designated_clock,
        apply: apply_offset_clock,
    },
    TokenRule {
        name: "bare clock",
        matches: is_bare_clock,
        apply: apply_bare_clock,
    },
    TokenRule {
        name: "wrapped clock",
        matches: is_wrapped_clock,
        apply: apply_offset_clock,
    },
    TokenRule {
        name: "year",
        matches: is_four_chars,
        apply: apply_year,
    },
    TokenRule {
        name: "day",
        matches: is_unambiguous_day,
        apply: apply_day,
    },
    TokenRule {
        name: "month or day",
        matches: is_month_or_day,
        apply: apply_month_or_day,
    },
];

fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// A letter directly followed by a clock, e.g. the `T10:58:51Z` of ISO input.
fn is_designated_clock(token: &str) -> bool {
    regex!(r"^[a-zA-Z][0-9]{2}:.").is_match(token)
}

fn is_bare_clock(token: &str) -> bool {
    regex!(r"^[0-9]{2}:[0-9]{2}:[0-9]").is_match(token)
}

/// A full `HH:MM:SS` with one word character on each side.
fn is_wrapped_clock(token: &str) -> bool {
    regex!(r"^\w[0-9]{2}:[0-9]{2}:[0-9]{2}\w").is_match(token)
}

fn is_four_chars(token: &str) -> bool {
    token.chars().count() == 4
}

fn is_unambiguous_day(token: &str) -> bool {
    token.parse::<i64>().is_ok_and(|v| (13..=31).contains(&v))
}

fn is_month_or_day(token: &str) -> bool {
    token.parse::<i64>().is_ok_and(|v| (1..=12).contains(&v))
}

fn apply_month_name(r: &mut Resolver, token: &str) -> Result<()> {
    let prefix: String = token.chars().take(3).collect();
    let month = Month::from_abbreviation(&prefix)
        .ok_or_else(|| r.fail(format!("{token:?} is not an English month name")))?;
    r.fields.month = Some(i64::from(month.number()));
    Ok(())
}

fn apply_offset_clock(r: &mut Resolver, token: &str) -> Result<()> {
    r.clock(token, 1)
}

fn apply_bare_clock(r: &mut Resolver, token: &str) -> Result<()> {
    r.clock(token, 0)
}

fn apply_year(r: &mut Resolver, token: &str) -> Result<()> {
    r.fields.year = Some(r.number(token)?);
    Ok(())
}

fn apply_day(r: &mut Resolver, token: &str) -> Result<()> {
    r.fields.day = Some(r.number(token)?);
    Ok(())
}

fn apply_month_or_day(r: &mut Resolver, token: &str) -> Result<()> {
    let value = r.number(token)?;
    if r.fields.month.is_none() {
        r.fields.month = Some(value);
    } else {
        r.fields.day = Some(value);
    }
    Ok(())
}

// ── Resolver ──────────────────────────────────────────────────────────────────

/// Accumulates fields for one raw input.
struct Resolver {
    raw: String,
    fields: ResolvedFields,
}

impl Resolver {
    fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_owned(),
            fields: ResolvedFields::default(),
        }
    }

    fn fail(&self, reason: impl Into<String>) -> Error {
        Error::InvalidDate {
            raw: self.raw.clone(),
            fields: self.fields,
            reason: reason.into(),
        }
    }

    fn number(&self, text: &str) -> Result<i64> {
        text.parse()
            .map_err(|_| self.fail(format!("{text:?} is not a number")))
    }

    /// Read `HH:MM:SS` starting `offset` characters into `token`.
    fn clock(&mut self, token: &str, offset: usize) -> Result<()> {
        self.fields.hour = self.number(&chars_between(token, offset, offset + 2))?;
        self.fields.minute = self.number(&chars_between(token, offset + 3, offset + 5))?;
        self.fields.second = self.number(&chars_between(token, offset + 6, offset + 8))?;
        Ok(())
    }

    /// `DD.DD.DDDD` followed by anything, optionally an `HH:MM:SS` token.
    fn day_month_year(&mut self) -> Result<()> {
        let raw = self.raw.clone();
        let tokens: Vec<&str> = regex!(r"[\w':]+")
            .find_iter(&raw)
            .map(|m| m.as_str())
            .collect();
        let token = |i: usize| tokens.get(i).copied().unwrap_or("");
        self.fields.day = Some(self.number(token(0))?);
        self.fields.month = Some(self.number(token(1))?);
        self.fields.year = Some(self.number(token(2))?);
        for t in tokens.iter().filter(|t| is_bare_clock(t)) {
            self.clock(t, 0)?;
        }
        Ok(())
    }

    fn loose(&mut self) -> Result<()> {
        let text = unify_separators(&split_glued_time(&self.raw));
        let tokens: Vec<&str> = regex!(r"[\w':.]+")
            .find_iter(&text)
            .map(|m| m.as_str())
            .collect();
        trace!(raw = %self.raw, cleaned = %text, ?tokens, "tokenized date");
        match tokens.len() {
            0 => Err(self.fail("no date components found")),
            1 => self.fixed_width(&text),
            _ => tokens.iter().try_for_each(|t| self.classify(t)),
        }
    }

    /// Slice `YYYYMMDDHHMMSS` out of the zero-padded text.
    fn fixed_width(&mut self, text: &str) -> Result<()> {
        let mut padded = text.to_owned();
        let len = padded.chars().count();
        if len < FIXED_WIDTH {
            padded.extend(std::iter::repeat('0').take(FIXED_WIDTH - len));
        }
        let field = |from: usize, to: usize| chars_between(&padded, from, to);
        self.fields.year = Some(self.number(&field(0, 4))?);
        self.fields.month = Some(self.number(&field(4, 6))?);
        self.fields.day = Some(self.number(&field(6, 8))?);
        self.fields.hour = self.number(&field(8, 10))?;
        self.fields.minute = self.number(&field(10, 12))?;
        self.fields.second = self.number(&field(12, 14))?;
        Ok(())
    }

    fn classify(&mut self, token: &str) -> Result<()> {
        if let Some(rule) = TOKEN_RULES.iter().find(|rule| (rule.matches)(token)) {
            debug!(token, rule = rule.name, "classified date token");
            return (rule.apply)(self, token);
        }
        // Numbers outside 1..=31 are dropped; anything else had to be a number.
        self.number(token)?;
        debug!(token, "ignored out-of-range date token");
        Ok(())
    }

    fn assemble(&self) -> Result<DateTime> {
        let f = self.fields;
        let year = f.year.ok_or_else(|| self.fail("no year found"))?;
        let month = f.month.ok_or_else(|| self.fail("no month found"))?;
        let day = f.day.ok_or_else(|| self.fail("no day found"))?;
        let year = u16::try_from(year)
            .map_err(|_| self.fail(format!("year {year} out of range [1, 9999]")))?;
        let narrow = |value: i64, what: &str| {
            u8::try_from(value).map_err(|_| self.fail(format!("{what} {value} out of range")))
        };
        DateTime::from_ymd_hms(
            year,
            narrow(month, "month")?,
            narrow(day, "day")?,
            narrow(f.hour, "hour")?,
            narrow(f.minute, "minute")?,
            narrow(f.second, "second")?,
        )
        .map_err(|e| self.fail(reason_of(e)))
    }
}

// ── Text helpers ──────────────────────────────────────────────────────────────

fn reason_of(err: Error) -> String {
    match err {
        Error::Date(msg) | Error::Precondition(msg) => msg,
        other => other.to_string(),
    }
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Characters `from..to` of `text`, counted in chars; short text yields a
/// shorter (possibly empty) string.
fn chars_between(text: &str, from: usize, to: usize) -> String {
    text.chars().skip(from).take(to.saturating_sub(from)).collect()
}

/// `DDDD?DD?DD` where each `?` is a single non-word character.
fn is_date_prefix(window: &[char]) -> bool {
    let digits = |range: std::ops::Range<usize>| range.into_iter().all(|i| window[i].is_ascii_digit());
    window.len() == 10
        && digits(0..4)
        && !is_word(window[4])
        && digits(5..7)
        && !is_word(window[7])
        && digits(8..10)
}

/// Insert a space wherever a `DDDD?DD?DD` date is immediately followed by
/// something other than whitespace or `:`.
///
/// `regex` has no look-behind, so the ten-character window is checked by
/// hand at every position.
fn split_glued_time(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 2);
    for (i, &c) in chars.iter().enumerate() {
        if i >= 10 && !c.is_whitespace() && c != ':' && is_date_prefix(&chars[i - 10..i]) {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Replace the first two non-word characters with `-`.
fn unify_separators(text: &str) -> String {
    let mut remaining = 2;
    text.chars()
        .map(|c| {
            if remaining > 0 && !is_word(c) {
                remaining -= 1;
                '-'
            } else {
                c
            }
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
