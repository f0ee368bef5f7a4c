use crate::duration::{self, SignedDuration};
use crate::error::{Result, TimeCalcError};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Arithmetic applied to two parsed durations.
#[derive(Clone, Copy, ValueEnum, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    #[value(alias = "sub")]
    Subtract,
}

impl Operation {
    /// Operator sign shown between the operands.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
        }
    }

    fn apply(self, first: i64, second: i64) -> Option<i64> {
        match self {
            Operation::Add => first.checked_add(second),
            Operation::Subtract => first.checked_sub(second),
        }
    }
}

/// Outcome of one calculation, as reported by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calculation {
    pub first: String,
    pub second: String,
    pub operation: Operation,
    pub seconds: i64,
    pub result: String,
}

impl Calculation {
    /// `1h30m + 45m = 2h15m`
    pub fn expression(&self) -> String {
        format!(
            "{} {} {} = {}",
            self.first,
            self.operation.symbol(),
            self.second,
            self.result
        )
    }
}

/// Parse both operands, apply `op` and render the signed result.
///
/// Empty operands are rejected even though the grammar accepts them.
pub fn evaluate(first: &str, second: &str, op: Operation) -> Result<Calculation> {
    if first.is_empty()
        || !duration::is_valid_format(first)
        || second.is_empty()
        || !duration::is_valid_format(second)
    {
        return Err(TimeCalcError::InvalidFormat);
    }

    let first_secs = to_signed(duration::parse(first)?.as_secs())?;
    let second_secs = to_signed(duration::parse(second)?.as_secs())?;

    let delta = op
        .apply(first_secs, second_secs)
        .map(SignedDuration::from_secs)
        .ok_or(TimeCalcError::Overflow)?;

    tracing::debug!(
        first,
        second,
        op = ?op,
        seconds = delta.as_secs(),
        "computed duration"
    );

    Ok(Calculation {
        first: first.to_string(),
        second: second.to_string(),
        operation: op,
        seconds: delta.as_secs(),
        result: delta.to_string(),
    })
}

/// Compute `first op second` and return the formatted result, e.g. `-30m`.
pub fn compute(first: &str, second: &str, op: Operation) -> Result<String> {
    evaluate(first, second, op).map(|calc| calc.result)
}

fn to_signed(secs: u64) -> Result<i64> {
    i64::try_from(secs).map_err(|_| TimeCalcError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(compute("1h30m", "45m", Operation::Add).unwrap(), "2h15m");
    }

    #[test]
    fn test_subtract_negative() {
        assert_eq!(
            compute("1h", "1h30m", Operation::Subtract).unwrap(),
            "-30m"
        );
    }

    #[test]
    fn test_subtract_to_zero_has_no_sign() {
        assert_eq!(compute("1h", "1h", Operation::Subtract).unwrap(), "0s");
    }

    #[test]
    fn test_empty_operand_is_invalid() {
        assert_eq!(
            compute("", "10m", Operation::Add),
            Err(TimeCalcError::InvalidFormat)
        );
        assert_eq!(
            compute("10m", "", Operation::Subtract),
            Err(TimeCalcError::InvalidFormat)
        );
    }

    #[test]
    fn test_malformed_operand_is_invalid() {
        assert_eq!(
            compute("10x", "10m", Operation::Add),
            Err(TimeCalcError::InvalidFormat)
        );
        assert_eq!(
            compute("10m", "5m10m", Operation::Add),
            Err(TimeCalcError::InvalidFormat)
        );
    }

    #[test]
    fn test_sum_overflow() {
        let max = format!("{}s", i64::MAX);
        assert_eq!(
            compute(&max, "1s", Operation::Add),
            Err(TimeCalcError::Overflow)
        );
        assert_eq!(compute(&max, &max, Operation::Subtract).unwrap(), "0s");
    }

    #[test]
    fn test_evaluate_record() {
        let calc = evaluate("1h", "1h30m", Operation::Subtract).unwrap();
        assert_eq!(calc.seconds, -1800);
        assert_eq!(calc.result, "-30m");
        assert_eq!(calc.expression(), "1h - 1h30m = -30m");
    }

    #[test]
    fn test_operation_symbol() {
        assert_eq!(Operation::Add.symbol(), "+");
        assert_eq!(Operation::Subtract.symbol(), "-");
    }
}
