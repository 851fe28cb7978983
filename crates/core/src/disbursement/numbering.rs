//! Disbursement voucher numbering.
//!
//! Voucher numbers follow `DV-YYYY-NNNNNN`: a yearly series with a
//! zero-padded sequence, e.g. `DV-2026-000142`. The sequence restarts at
//! 1 each year; uniqueness is additionally enforced by the database.

use thiserror::Error;

/// Width of the zero-padded sequence part.
const SEQ_WIDTH: usize = 6;

/// Errors from parsing a disbursement number.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NumberingError {
    /// The string does not match `DV-YYYY-NNNNNN`.
    #[error("malformed disbursement number: {0}")]
    Malformed(String),

    /// The sequence part is zero; series start at 1.
    #[error("disbursement sequence must be positive")]
    ZeroSequence,
}

/// Formats a disbursement number from year and sequence.
#[must_use]
pub fn format_disbursement_no(year: i32, seq: u32) -> String {
    format!("DV-{year:04}-{seq:06}")
}

/// Parses a disbursement number into `(year, sequence)`.
///
/// # Errors
///
/// Returns `NumberingError::Malformed` for anything that does not match
/// the `DV-YYYY-NNNNNN` shape, and `NumberingError::ZeroSequence` when the
/// sequence part is all zeros.
pub fn parse_disbursement_no(value: &str) -> Result<(i32, u32), NumberingError> {
    let malformed = || NumberingError::Malformed(value.to_string());

    let rest = value.strip_prefix("DV-").ok_or_else(malformed)?;
    let (year_part, seq_part) = rest.split_once('-').ok_or_else(malformed)?;

    if year_part.len() != 4 || seq_part.len() != SEQ_WIDTH {
        return Err(malformed());
    }
    if !year_part.bytes().all(|b| b.is_ascii_digit())
        || !seq_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(malformed());
    }

    let year: i32 = year_part.parse().map_err(|_| malformed())?;
    let seq: u32 = seq_part.parse().map_err(|_| malformed())?;

    if seq == 0 {
        return Err(NumberingError::ZeroSequence);
    }

    Ok((year, seq))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_format() {
        assert_eq!(format_disbursement_no(2026, 1), "DV-2026-000001");
        assert_eq!(format_disbursement_no(2026, 142), "DV-2026-000142");
        assert_eq!(format_disbursement_no(2026, 999_999), "DV-2026-999999");
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!(parse_disbursement_no("DV-2026-000142"), Ok((2026, 142)));
    }

    #[rstest]
    #[case("DV-2026-142")] // sequence too short
    #[case("DV-26-000142")] // year too short
    #[case("dv-2026-000142")] // lowercase prefix
    #[case("DV-2026-00014X")] // non-digit
    #[case("DV2026000142")] // no separators
    #[case("")]
    fn test_parse_malformed(#[case] input: &str) {
        assert!(matches!(
            parse_disbursement_no(input),
            Err(NumberingError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_zero_sequence() {
        assert_eq!(
            parse_disbursement_no("DV-2026-000000"),
            Err(NumberingError::ZeroSequence)
        );
    }

    proptest! {
        /// Any formatted number in the supported range parses back to the
        /// same year and sequence.
        #[test]
        fn prop_format_parse_consistent(year in 1900i32..=9999, seq in 1u32..=999_999) {
            let formatted = format_disbursement_no(year, seq);
            prop_assert_eq!(parse_disbursement_no(&formatted), Ok((year, seq)));
        }
    }
}
