//! Bounds validation utilities

use crate::error::{Error, Result};

/// Validate the total length of a compact token string
pub(crate) fn validate_token_length(length: usize, max: usize) -> Result<()> {
    if length > max {
        return Err(Error::TokenTooLarge { size: length, max });
    }
    Ok(())
}

/// Validate the size of a decoded token segment
pub(crate) fn validate_segment_size(segment: &str, size: usize, max: usize) -> Result<()> {
    if size > max {
        return Err(Error::SegmentTooLarge {
            segment: segment.into(),
            size,
            max,
        });
    }
    Ok(())
}

/// Validate string field size
pub(crate) fn validate_field_size(field: &str, value: &str, max: usize) -> Result<()> {
    if value.len() > max {
        return Err(Error::HeaderFieldTooLong {
            field: field.into(),
            length: value.len(),
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_length() {
        assert!(validate_token_length(3, 3).is_ok());
        assert!(matches!(
            validate_token_length(4, 3),
            Err(Error::TokenTooLarge { size: 4, max: 3 })
        ));
    }

    #[test]
    fn test_segment_size() {
        assert!(validate_segment_size("header", 8, 8).is_ok());
        assert!(matches!(
            validate_segment_size("header", 9, 8),
            Err(Error::SegmentTooLarge { ref segment, size: 9, max: 8 }) if segment == "header"
        ));
    }

    #[test]
    fn test_field_size() {
        assert!(validate_field_size("alg", "HS256", 16).is_ok());
        assert!(matches!(
            validate_field_size("kid", &"k".repeat(10), 4),
            Err(Error::HeaderFieldTooLong { length: 10, max: 4, .. })
        ));
    }
}
