//! Compact `XhYmZs` duration strings and their total-seconds values.
//!
//! Parsing is two-phase: an anchored grammar gate decides whether the input is
//! acceptable at all, then an order-tolerant pass sums every `<digits><unit>`
//! component it finds. On input that passed the gate both phases agree.

use crate::error::{Result, TimeCalcError};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_MINUTE: u64 = 60;

// ASCII digit classes only: `\d` would also admit non-ASCII decimal digits.
static GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]+h)?(?:[0-9]+m)?(?:[0-9]+s)?$").expect("grammar pattern is valid")
});

static COMPONENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)h|([0-9]+)m|([0-9]+)s").expect("component pattern is valid")
});

/// A non-negative count of total seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(u64);

impl Duration {
    pub const ZERO: Duration = Duration(0);

    pub fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    pub fn as_secs(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / SECS_PER_HOUR;
        let minutes = (self.0 % SECS_PER_HOUR) / SECS_PER_MINUTE;
        let seconds = self.0 % SECS_PER_MINUTE;

        if hours == 0 && minutes == 0 && seconds == 0 {
            return f.write_str("0s");
        }
        if hours > 0 {
            write!(f, "{}h", hours)?;
        }
        if minutes > 0 {
            write!(f, "{}m", minutes)?;
        }
        if seconds > 0 {
            write!(f, "{}s", seconds)?;
        }
        Ok(())
    }
}

impl FromStr for Duration {
    type Err = TimeCalcError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

/// The possibly negative result of adding or subtracting two durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SignedDuration(i64);

impl SignedDuration {
    pub fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    pub fn as_secs(self) -> i64 {
        self.0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn unsigned_abs(self) -> Duration {
        Duration(self.0.unsigned_abs())
    }
}

impl fmt::Display for SignedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        write!(f, "{}", self.unsigned_abs())
    }
}

/// Strict grammar gate: optional `h`, `m`, `s` components in that order, each
/// at most once, digits only. The empty string passes.
pub fn is_valid_format(input: &str) -> bool {
    GRAMMAR.is_match(input)
}

/// Parse a duration string into total seconds.
///
/// The result always fits in an `i64` so it can take part in signed
/// arithmetic; anything larger fails with [`TimeCalcError::Overflow`].
pub fn parse(input: &str) -> Result<Duration> {
    if !is_valid_format(input) {
        tracing::debug!(input, "rejected by duration grammar");
        return Err(TimeCalcError::InvalidFormat);
    }

    let total = accumulate(input)?;
    if i64::try_from(total).is_err() {
        return Err(TimeCalcError::Overflow);
    }

    tracing::trace!(input, total, "parsed duration");
    Ok(Duration(total))
}

/// Sum every component match regardless of order or repetition.
fn accumulate(input: &str) -> Result<u64> {
    let mut total: u64 = 0;

    for caps in COMPONENT.captures_iter(input) {
        let (digits, unit_secs) = if let Some(m) = caps.get(1) {
            (m.as_str(), SECS_PER_HOUR)
        } else if let Some(m) = caps.get(2) {
            (m.as_str(), SECS_PER_MINUTE)
        } else if let Some(m) = caps.get(3) {
            (m.as_str(), 1)
        } else {
            continue;
        };

        // Digit runs are ASCII-only, so the only parse failure left is overflow.
        let value: u64 = digits.parse().map_err(|_| TimeCalcError::Overflow)?;
        total = value
            .checked_mul(unit_secs)
            .and_then(|secs| total.checked_add(secs))
            .ok_or(TimeCalcError::Overflow)?;
    }

    Ok(total)
}

/// Render a non-negative second count as `XhYmZs`, `0s` for zero.
pub fn format(total_secs: u64) -> String {
    Duration(total_secs).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_accepts_ordered_components() {
        for input in ["1h30m", "45s", "2h", "0s", "", "1h2m3s", "007m"] {
            assert!(is_valid_format(input), "{input:?} should be accepted");
        }
    }

    #[test]
    fn test_grammar_rejects_malformed_input() {
        for input in [
            "30m1h", "1h1h", "1x", "-5s", "h", "1h 30m", " 1h", "1h\n", "1.5h", "1d", "١h",
        ] {
            assert!(!is_valid_format(input), "{input:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_sums_components() {
        assert_eq!(parse("1h30m").unwrap().as_secs(), 5400);
        assert_eq!(parse("1h2m3s").unwrap().as_secs(), 3723);
        assert_eq!(parse("90m").unwrap().as_secs(), 5400);
        assert_eq!(parse("0s").unwrap(), Duration::ZERO);
        assert_eq!(parse("").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_accumulate_is_order_tolerant() {
        // Only reachable through the gate for well-formed input, but the
        // summing pass itself does not care about order or repeats.
        assert_eq!(accumulate("30m1h").unwrap(), 5400);
        assert_eq!(accumulate("1h1h").unwrap(), 7200);
    }

    #[test]
    fn test_parse_overflow_fails_closed() {
        assert_eq!(
            parse("99999999999999999999999s"),
            Err(TimeCalcError::Overflow)
        );
        // Fits u64 seconds but not once scaled to hours.
        assert_eq!(parse("18446744073709551615h"), Err(TimeCalcError::Overflow));
        // Fits u64 but not i64.
        assert_eq!(parse("9223372036854775808s"), Err(TimeCalcError::Overflow));
        assert_eq!(
            parse("9223372036854775807s").unwrap().as_secs(),
            i64::MAX as u64
        );
    }

    #[test]
    fn test_format_suppresses_zero_components() {
        assert_eq!(format(0), "0s");
        assert_eq!(format(3661), "1h1m1s");
        assert_eq!(format(3600), "1h");
        assert_eq!(format(61), "1m1s");
        assert_eq!(format(3601), "1h1s");
        assert_eq!(format(90000), "25h");
    }

    #[test]
    fn test_signed_duration_display() {
        assert_eq!(SignedDuration::from_secs(-1800).to_string(), "-30m");
        assert_eq!(SignedDuration::from_secs(0).to_string(), "0s");
        assert_eq!(SignedDuration::from_secs(8100).to_string(), "2h15m");
        assert_eq!(
            SignedDuration::from_secs(i64::MIN).unsigned_abs().as_secs(),
            1u64 << 63
        );
    }

    #[test]
    fn test_round_trip() {
        for n in (0..20_000).step_by(7).chain([86_399, 86_400, i64::MAX as u64]) {
            assert_eq!(parse(&format(n)).unwrap().as_secs(), n);
        }
    }

    #[test]
    fn test_from_str() {
        let d: Duration = "2h".parse().unwrap();
        assert_eq!(d.as_secs(), 7200);
        assert!("2x".parse::<Duration>().is_err());
    }
}
