//! The options for configuring time field handling.

use core::fmt;
use core::str::FromStr;

/// `ArithmeticOverflow` is the overflow policy applied when raw time
/// fields land outside their canonical ranges: "constrain" clamps each
/// field independently, while "reject" fails with a `RangeError`.
///
/// The set of recognized policies is closed; an unrecognized configuration
/// string is a caller defect surfaced at the parsing boundary by
/// [`ParseArithmeticOverflowError`], never silently coerced to a default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOverflow {
    /// Constrain option
    #[default]
    Constrain,
    /// Reject option
    Reject,
}

/// A parsing error for `ArithmeticOverflow`
#[derive(Debug, Clone, Copy)]
pub struct ParseArithmeticOverflowError;

impl fmt::Display for ParseArithmeticOverflowError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("provided string was not a valid overflow value")
    }
}

impl FromStr for ArithmeticOverflow {
    type Err = ParseArithmeticOverflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "constrain" => Ok(Self::Constrain),
            "reject" => Ok(Self::Reject),
            _ => Err(ParseArithmeticOverflowError),
        }
    }
}

impl fmt::Display for ArithmeticOverflow {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Constrain => "constrain",
            Self::Reject => "reject",
        }
        .fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::ArithmeticOverflow;
    use alloc::string::ToString;
    use core::str::FromStr;

    #[test]
    fn overflow_from_str() {
        assert_eq!(
            ArithmeticOverflow::from_str("constrain").unwrap(),
            ArithmeticOverflow::Constrain
        );
        assert_eq!(
            ArithmeticOverflow::from_str("reject").unwrap(),
            ArithmeticOverflow::Reject
        );
        assert!(ArithmeticOverflow::from_str("balance").is_err());
        assert!(ArithmeticOverflow::from_str("Constrain").is_err());
    }

    #[test]
    fn overflow_display_round_trips() {
        for overflow in [ArithmeticOverflow::Constrain, ArithmeticOverflow::Reject] {
            let parsed = ArithmeticOverflow::from_str(&overflow.to_string()).unwrap();
            assert_eq!(parsed, overflow);
        }
    }
}
