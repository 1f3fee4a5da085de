//! Call/put discriminator.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::error::OptionKindError;

/// Kind of European option.
///
/// The Black-Scholes delta and theta formulas are written once with a
/// sign factor; [`OptionKind::sign`] supplies it.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionKind;
///
/// assert_eq!(OptionKind::Call.sign::<f64>(), 1.0);
/// assert_eq!(OptionKind::Put.sign::<f64>(), -1.0);
///
/// let put: OptionKind = "P".parse().unwrap();
/// assert!(put.is_put());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    /// Right to buy at the strike
    Call,
    /// Right to sell at the strike
    Put,
}

impl OptionKind {
    /// Returns +1 for a call and -1 for a put.
    #[inline]
    pub fn sign<T: Float>(&self) -> T {
        match self {
            OptionKind::Call => T::one(),
            OptionKind::Put => -T::one(),
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionKind::Put)
    }
}

impl FromStr for OptionKind {
    type Err = OptionKindError;

    /// Parses `c`/`call` or `p`/`put` (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, OptionKindError> {
        match s.trim().to_lowercase().as_str() {
            "c" | "call" => Ok(OptionKind::Call),
            "p" | "put" => Ok(OptionKind::Put),
            _ => Err(OptionKindError::Unknown(s.trim().to_string())),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => write!(f, "call"),
            OptionKind::Put => write!(f, "put"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign() {
        assert_eq!(OptionKind::Call.sign::<f64>(), 1.0);
        assert_eq!(OptionKind::Put.sign::<f64>(), -1.0);
        assert_eq!(OptionKind::Put.sign::<f32>(), -1.0_f32);
    }

    #[test]
    fn test_predicates() {
        assert!(OptionKind::Call.is_call());
        assert!(!OptionKind::Call.is_put());
        assert!(OptionKind::Put.is_put());
        assert!(!OptionKind::Put.is_call());
    }

    #[test]
    fn test_from_str_short_and_long_forms() {
        assert_eq!("c".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!("C".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!("call".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!(" Call\n".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!("p".parse::<OptionKind>().unwrap(), OptionKind::Put);
        assert_eq!("PUT".parse::<OptionKind>().unwrap(), OptionKind::Put);
    }

    #[test]
    fn test_from_str_rejects_other_input() {
        for bad in ["", "x", "cp", "calls", "1"] {
            let result = bad.parse::<OptionKind>();
            assert!(
                matches!(result, Err(OptionKindError::Unknown(_))),
                "'{}' should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_display_roundtrip() {
        for kind in [OptionKind::Call, OptionKind::Put] {
            let parsed: OptionKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_option_kind_serde_lowercase() {
            let json = serde_json::to_string(&OptionKind::Put).unwrap();
            assert_eq!(json, "\"put\"");

            let parsed: OptionKind = serde_json::from_str("\"call\"").unwrap();
            assert_eq!(parsed, OptionKind::Call);
        }
    }
}
