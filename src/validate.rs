//! Self-correcting integer input validation.
//!
//! Strict numeric validators reject any text that is not a valid in-range
//! number, which makes them hostile while a value is still being typed:
//! with an upper bound of 50, "9" has to be allowed even though the user may
//! be on their way to "99". The validator here classifies text three ways
//! instead (accept / still editable / reject) and defers correction to
//! commit time, where an out-of-range value snaps to the nearest boundary
//! rather than being thrown away.
//!
//! [`IntValidator`] is a plain value type with no toolkit dependency. The
//! matching input widget lives in [`crate::widgets::IntInput`].

use thiserror::Error;

/// Error returned when constructing a validator from a reversed range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid range: bottom ({bottom}) is greater than top ({top})")]
pub struct RangeError {
    /// The offending lower bound.
    pub bottom: i64,
    /// The offending upper bound.
    pub top: i64,
}

/// Three-way classification of in-progress text input.
///
/// The host widget asks for a verdict on every edit: `Acceptable` and
/// `Intermediate` edits are kept, `Invalid` edits are reverted. Only at
/// commit time (focus loss or Return) is an `Intermediate` value corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// A complete in-range integer.
    Acceptable,
    /// Not (yet) in range, but further editing could get there.
    Intermediate,
    /// No amount of further typing can turn this into a valid value.
    Invalid,
}

/// Integer validator that fixes input beyond its boundaries.
///
/// The range is fixed at construction; [`validate`](Self::validate) and
/// [`fixup`](Self::fixup) are pure functions of the text and that range.
///
/// Out-of-range integers are deliberately classified `Intermediate`, not
/// `Invalid`: blocking keystrokes mid-edit just because the current
/// magnitude overshoots would make many valid values untypeable. The
/// correction happens in `fixup` once editing ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntValidator {
    bottom: i64,
    top: i64,
}

impl IntValidator {
    /// Create a validator for the closed range `[bottom, top]`.
    ///
    /// Fails if `bottom > top`; an empty range cannot produce a value to
    /// correct towards.
    pub fn new(bottom: i64, top: i64) -> Result<Self, RangeError> {
        if bottom > top {
            return Err(RangeError { bottom, top });
        }
        Ok(Self { bottom, top })
    }

    /// Lower boundary of the accepted range.
    pub fn bottom(&self) -> i64 {
        self.bottom
    }

    /// Upper boundary of the accepted range.
    pub fn top(&self) -> i64 {
        self.top
    }

    /// Classify text as it is being typed.
    ///
    /// Empty text and a lone sign that some in-range value carries are
    /// `Intermediate`. Integers are `Acceptable` in range and
    /// `Intermediate` outside it. Everything else is `Invalid`.
    pub fn validate(&self, text: &str) -> Verdict {
        match text {
            "" => Verdict::Intermediate,
            "-" => {
                if self.bottom < 0 {
                    Verdict::Intermediate
                } else {
                    Verdict::Invalid
                }
            }
            "+" => {
                if self.top >= 0 {
                    Verdict::Intermediate
                } else {
                    Verdict::Invalid
                }
            }
            _ => {
                if !is_integer_literal(text) {
                    return Verdict::Invalid;
                }
                match text.parse::<i64>() {
                    Ok(value) if value >= self.bottom && value <= self.top => Verdict::Acceptable,
                    // Parseable but out of range: still editable towards a
                    // valid value, so keep the keystroke.
                    Ok(_) => Verdict::Intermediate,
                    // All digits but beyond i64: out of range by definition.
                    Err(_) => Verdict::Intermediate,
                }
            }
        }
    }

    /// Correct text at commit time, returning the value the field should hold.
    ///
    /// Unparseable or empty text falls back to the lower boundary, so a
    /// field never ends up in a non-numeric state. Out-of-range values snap
    /// to the nearest boundary. Re-applying `fixup` to its own result is a
    /// no-op.
    pub fn fixup(&self, text: &str) -> i64 {
        match text.parse::<i64>() {
            Ok(value) => value.clamp(self.bottom, self.top),
            Err(_) => {
                if is_integer_literal(text) {
                    // Digit string overflowing i64: clamp to the boundary on
                    // the side of its sign.
                    if text.starts_with('-') {
                        self.bottom
                    } else {
                        self.top
                    }
                } else {
                    self.bottom
                }
            }
        }
    }
}

/// Whether `text` is an optionally signed, non-empty run of ASCII digits.
fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_range_is_an_error() {
        let err = IntValidator::new(5, -5).unwrap_err();
        assert_eq!(err.bottom, 5);
        assert_eq!(err.top, -5);
        // A single-value range is fine.
        assert!(IntValidator::new(7, 7).is_ok());
    }

    #[test]
    fn test_in_range_integers_are_acceptable() {
        let validator = IntValidator::new(-10, 10).unwrap();
        for value in -10..=10 {
            assert_eq!(
                validator.validate(&value.to_string()),
                Verdict::Acceptable,
                "value {}",
                value
            );
        }
        assert_eq!(validator.validate("+7"), Verdict::Acceptable);
    }

    #[test]
    fn test_out_of_range_integers_are_intermediate() {
        let validator = IntValidator::new(0, 5).unwrap();
        // "9" overshoots but must not be blocked mid-edit.
        assert_eq!(validator.validate("9"), Verdict::Intermediate);
        assert_eq!(validator.validate("99"), Verdict::Intermediate);
        assert_eq!(validator.validate("-1"), Verdict::Intermediate);
    }

    #[test]
    fn test_empty_and_signs() {
        let signed = IntValidator::new(-10, 10).unwrap();
        assert_eq!(signed.validate(""), Verdict::Intermediate);
        assert_eq!(signed.validate("-"), Verdict::Intermediate);
        assert_eq!(signed.validate("+"), Verdict::Intermediate);

        let unsigned = IntValidator::new(0, 50).unwrap();
        assert_eq!(unsigned.validate(""), Verdict::Intermediate);
        assert_eq!(unsigned.validate("-"), Verdict::Invalid);
        assert_eq!(unsigned.validate("+"), Verdict::Intermediate);

        let negative = IntValidator::new(-20, -10).unwrap();
        assert_eq!(negative.validate("-"), Verdict::Intermediate);
        assert_eq!(negative.validate("+"), Verdict::Invalid);
    }

    #[test]
    fn test_garbage_is_invalid() {
        let validator = IntValidator::new(0, 100).unwrap();
        assert_eq!(validator.validate("12a"), Verdict::Invalid);
        assert_eq!(validator.validate("abc"), Verdict::Invalid);
        assert_eq!(validator.validate("1.5"), Verdict::Invalid);
        assert_eq!(validator.validate("--5"), Verdict::Invalid);
        assert_eq!(validator.validate("+-1"), Verdict::Invalid);
        assert_eq!(validator.validate(" 5"), Verdict::Invalid);
    }

    #[test]
    fn test_fixup_clamps_to_boundaries() {
        let validator = IntValidator::new(-10, 10).unwrap();
        assert_eq!(validator.fixup("100"), 10);
        assert_eq!(validator.fixup("-100"), -10);
        assert_eq!(validator.fixup("7"), 7);
        assert_eq!(validator.fixup("-10"), -10);
        assert_eq!(validator.fixup("10"), 10);
    }

    #[test]
    fn test_fixup_falls_back_to_bottom() {
        let validator = IntValidator::new(-10, 10).unwrap();
        assert_eq!(validator.fixup(""), -10);
        assert_eq!(validator.fixup("abc"), -10);
        assert_eq!(validator.fixup("-"), -10);
    }

    #[test]
    fn test_fixup_is_idempotent() {
        let validator = IntValidator::new(0, 5).unwrap();
        for text in ["9", "-3", "", "abc", "4", "99999999999999999999"] {
            let once = validator.fixup(text);
            let twice = validator.fixup(&once.to_string());
            assert_eq!(once, twice, "input {:?}", text);
        }
    }

    #[test]
    fn test_fixup_overshooting_range_zero_five() {
        let validator = IntValidator::new(0, 5).unwrap();
        assert_eq!(validator.fixup("9"), 5);
    }

    #[test]
    fn test_overflowing_digit_strings() {
        let validator = IntValidator::new(-10, 10).unwrap();
        // Too large for i64 in either direction, still just "out of range".
        assert_eq!(
            validator.validate("99999999999999999999"),
            Verdict::Intermediate
        );
        assert_eq!(
            validator.validate("-99999999999999999999"),
            Verdict::Intermediate
        );
        assert_eq!(validator.fixup("99999999999999999999"), 10);
        assert_eq!(validator.fixup("-99999999999999999999"), -10);
    }

    #[test]
    fn test_verdicts_after_fixup_are_acceptable() {
        let validator = IntValidator::new(-3, 17).unwrap();
        for text in ["100", "-100", "", "x", "5"] {
            let fixed = validator.fixup(text);
            assert_eq!(validator.validate(&fixed.to_string()), Verdict::Acceptable);
        }
    }
}
