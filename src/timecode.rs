use crate::error::ParseError;
use crate::parser;

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

pub const MILLISECONDS_PER_SECOND: i64 = 1000;
pub const MILLISECONDS_PER_MINUTE: i64 = 60 * MILLISECONDS_PER_SECOND;
pub const MILLISECONDS_PER_HOUR: i64 = 60 * MILLISECONDS_PER_MINUTE;

/// The literal separating the two endpoints of a time range.
pub(crate) const RANGE_DELIMITER: &str = " --> ";

/// A single zero-padded decimal positional value with a fixed numeral base
/// and a fixed display width.
///
/// Construction never fails: out-of-range input is clamped into
/// `[0, BASE - 1]` and an unparsable token becomes 0. Structural
/// validation of the surrounding text is not this type's job; it lives one
/// layer up, in the timecode parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeField<const BASE: i64, const WIDTH: usize> {
    value: i64,
}

/// Hour field, base 24, two digits.
pub type Hours = TimeField<24, 2>;
/// Minute or second field, base 60, two digits.
pub type MinSec = TimeField<60, 2>;
/// Millisecond field, base 1000, three digits.
pub type Millis = TimeField<1000, 3>;

impl<const BASE: i64, const WIDTH: usize> TimeField<BASE, WIDTH> {
    /// Clamps `value` into `[0, BASE - 1]`.
    pub fn clamped(value: i64) -> Self {
        Self {
            value: value.clamp(0, BASE - 1),
        }
    }

    /// Builds a field from a decimal token. A token that does not parse as
    /// an integer becomes 0; everything else is clamped.
    pub fn from_token(token: &str) -> Self {
        Self::clamped(token.parse().unwrap_or(0))
    }

    /// Stores `value` as-is, without clamping.
    ///
    /// Only the millisecond decomposition uses this; it keeps hour counts
    /// beyond one day instead of wrapping them.
    pub(crate) fn raw(value: i64) -> Self {
        Self { value }
    }

    pub fn value(self) -> i64 {
        self.value
    }
}

impl<const BASE: i64, const WIDTH: usize> fmt::Display for TimeField<BASE, WIDTH> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:0width$}", self.value, width = WIDTH)
    }
}

/// An absolute point in time within a day, at millisecond precision.
///
/// Rendered as `HH:MM:SS,mmm`. Two construction paths exist with different
/// guarantees: parsing a string validates the structure first (and fails on
/// any structural mismatch), while [`Timecode::from_milliseconds`] accepts
/// any non-negative offset and keeps hour counts beyond 23 as-is.
#[derive(Debug, Clone, Copy)]
pub struct Timecode {
    pub(crate) hours: Hours,
    pub(crate) minutes: MinSec,
    pub(crate) seconds: MinSec,
    pub(crate) milliseconds: Millis,
}

impl Timecode {
    /// Decomposes a millisecond offset into timecode fields.
    ///
    /// Negative input is floored at 0. The hour count is not wrapped modulo
    /// 24, so offsets of a day or more render with an hour field above 23.
    pub fn from_milliseconds(ms: i64) -> Self {
        let mut rest = ms.max(0);

        let hours = rest / MILLISECONDS_PER_HOUR;
        rest -= hours * MILLISECONDS_PER_HOUR;
        let minutes = rest / MILLISECONDS_PER_MINUTE;
        rest -= minutes * MILLISECONDS_PER_MINUTE;
        let seconds = rest / MILLISECONDS_PER_SECOND;
        rest -= seconds * MILLISECONDS_PER_SECOND;

        Timecode {
            hours: Hours::raw(hours),
            minutes: MinSec::raw(minutes),
            seconds: MinSec::raw(seconds),
            milliseconds: Millis::raw(rest),
        }
    }

    pub fn as_milliseconds(self) -> i64 {
        self.hours.value() * MILLISECONDS_PER_HOUR
            + self.minutes.value() * MILLISECONDS_PER_MINUTE
            + self.seconds.value() * MILLISECONDS_PER_SECOND
            + self.milliseconds.value()
    }

    /// Returns this timecode moved by `delta_ms`, flooring at 0.
    pub fn shift(self, delta_ms: i64) -> Self {
        Self::from_milliseconds(self.as_milliseconds() + delta_ms)
    }
}

impl PartialEq for Timecode {
    fn eq(&self, other: &Self) -> bool {
        self.as_milliseconds() == other.as_milliseconds()
    }
}

impl Eq for Timecode {}

impl Add<i64> for Timecode {
    type Output = Timecode;

    fn add(self, rhs: i64) -> Timecode {
        self.shift(rhs)
    }
}

impl Sub<i64> for Timecode {
    type Output = Timecode;

    fn sub(self, rhs: i64) -> Timecode {
        self.shift(-rhs)
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}:{}:{},{}",
            self.hours, self.minutes, self.seconds, self.milliseconds
        )
    }
}

impl FromStr for Timecode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::timecode(s)
    }
}

/// The time window of a cue: a start and an end timecode joined by
/// `" --> "`.
///
/// An inverted range (`end` before `start`) is representable and not
/// rejected; [`TimeDuration::duration_ms`] is negative in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeDuration {
    pub start: Timecode,
    pub end: Timecode,
}

impl TimeDuration {
    pub fn new(start: Timecode, end: Timecode) -> Self {
        TimeDuration { start, end }
    }

    /// Length of the window in milliseconds. May be negative.
    pub fn duration_ms(self) -> i64 {
        self.end.as_milliseconds() - self.start.as_milliseconds()
    }

    /// Returns this window with both endpoints moved by `delta_ms`.
    pub fn shift(self, delta_ms: i64) -> Self {
        TimeDuration {
            start: self.start.shift(delta_ms),
            end: self.end.shift(delta_ms),
        }
    }
}

impl Add<i64> for TimeDuration {
    type Output = TimeDuration;

    fn add(self, rhs: i64) -> TimeDuration {
        self.shift(rhs)
    }
}

impl Sub<i64> for TimeDuration {
    type Output = TimeDuration;

    fn sub(self, rhs: i64) -> TimeDuration {
        self.shift(-rhs)
    }
}

impl fmt::Display for TimeDuration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.start, RANGE_DELIMITER, self.end)
    }
}

impl FromStr for TimeDuration {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::time_duration(s)
    }
}
