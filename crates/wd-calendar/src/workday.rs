//! Business-day offsetting, forward ([`workday`]) and backward
//! ([`workday_start`]).
//!
//! Both walk one calendar day per step until `offset` steps have been
//! *counted*.  A step is not counted when the day stepped onto is a holiday,
//! or when the day being left fails the direction's weekday table:
//!
//! | day left  | Mon | Tue | Wed | Thu | Fri | Sat | Sun |
//! |-----------|-----|-----|-----|-----|-----|-----|-----|
//! | forward   |  ✓  |  ✓  |  ✓  |  ✓  |     |     |  ✓  |
//! | backward  |     |  ✓  |  ✓  |  ✓  |  ✓  |  ✓  |     |
//!
//! In both directions this amounts to "the day arrived at is Mon–Fri".  The
//! two tables are kept apart rather than derived from one weekend rule.

use tracing::trace;
use wd_core::errors::Result;
use wd_time::{Date, Weekday};

use crate::holidays::HolidaySet;

/// Forward steps leaving these days count (ISO weekday `< 5` or `== 7`).
const FORWARD_COUNTED: [bool; 7] = [true, true, true, true, false, false, true];

/// Backward steps leaving these days count (ISO weekday in `2..=6`).
const BACKWARD_COUNTED: [bool; 7] = [false, true, true, true, true, true, false];

/// Walking direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards later dates.
    Forward,
    /// Towards earlier dates.
    Backward,
}

impl Direction {
    fn step(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    /// Whether a step that leaves `from` counts as a business day.
    pub fn counts_step_from(self, from: Weekday) -> bool {
        match self {
            Direction::Forward => FORWARD_COUNTED[from.index()],
            Direction::Backward => BACKWARD_COUNTED[from.index()],
        }
    }
}

/// The date `offset` business days after `start`.
pub fn workday(start: Date, offset: u32, holidays: &HolidaySet) -> Result<Date> {
    offset_business_days(start, offset, holidays, Direction::Forward)
}

/// The date `offset` business days before `start`.
pub fn workday_start(start: Date, offset: u32, holidays: &HolidaySet) -> Result<Date> {
    offset_business_days(start, offset, holidays, Direction::Backward)
}

/// Walk `offset` counted steps from `start` in `direction`.
pub fn offset_business_days(
    start: Date,
    offset: u32,
    holidays: &HolidaySet,
    direction: Direction,
) -> Result<Date> {
    let mut current = start;
    let mut counted = 0;
    while counted < offset {
        let next = current.add_days(direction.step())?;
        if holidays.contains(next) {
            trace!(date = %next, "holiday skipped");
        } else if direction.counts_step_from(current.weekday()) {
            counted += 1;
        } else {
            trace!(date = %next, "weekend skipped");
        }
        current = next;
    }
    Ok(current)
}
