//! Submission limits for community presets.
//!
//! Lengths are counted in characters, not bytes, after trimming surrounding
//! whitespace. Dyes are item IDs and are only counted here.

use crate::domain::foundation::ValidationError;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;
pub const DESCRIPTION_MIN_CHARS: usize = 10;
pub const DESCRIPTION_MAX_CHARS: usize = 200;
pub const MIN_DYES: usize = 2;
pub const MAX_DYES: usize = 5;
pub const MAX_TAGS: usize = 10;
pub const MAX_TAG_CHARS: usize = 30;

pub(crate) fn validate_name(name: &str) -> Result<(), ValidationError> {
    check_length("name", name, NAME_MIN_CHARS, NAME_MAX_CHARS)
}

pub(crate) fn validate_description(description: &str) -> Result<(), ValidationError> {
    check_length(
        "description",
        description,
        DESCRIPTION_MIN_CHARS,
        DESCRIPTION_MAX_CHARS,
    )
}

pub(crate) fn validate_dyes(dyes: &[i32]) -> Result<(), ValidationError> {
    check_count("dyes", dyes.len(), MIN_DYES, MAX_DYES)
}

pub(crate) fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    check_count("tags", tags.len(), 0, MAX_TAGS)?;
    for tag in tags {
        let chars = tag.trim().chars().count();
        if chars == 0 {
            return Err(ValidationError::empty_field("tags"));
        }
        if chars > MAX_TAG_CHARS {
            return Err(ValidationError::invalid_format(
                "tags",
                format!("tag '{}' exceeds {} characters", tag, MAX_TAG_CHARS),
            ));
        }
    }
    Ok(())
}

fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let chars = value.trim().chars().count();
    if chars == 0 {
        return Err(ValidationError::empty_field(field));
    }
    check_count(field, chars, min, max)
}

fn check_count(field: &str, actual: usize, min: usize, max: usize) -> Result<(), ValidationError> {
    if (min..=max).contains(&actual) {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(
            field,
            to_i64(min),
            to_i64(max),
            to_i64(actual),
        ))
    }
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_bounds_are_inclusive() {
        assert!(validate_name("ab").is_ok());
        assert!(validate_name(&"x".repeat(50)).is_ok());
        assert_eq!(
            validate_name("a"),
            Err(ValidationError::out_of_range("name", 2, 50, 1))
        );
        assert!(validate_name(&"x".repeat(51)).is_err());
    }

    #[test]
    fn blank_name_is_empty_field() {
        assert_eq!(validate_name("   "), Err(ValidationError::empty_field("name")));
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // 10 characters, 30 bytes
        assert!(validate_description("黒騎士の鎧の配色です").is_ok());
        // 4 characters, 12 bytes
        assert!(validate_description("赤い鎧だ").is_err());
    }

    #[test]
    fn dye_count_limits() {
        assert!(validate_dyes(&[1]).is_err());
        assert!(validate_dyes(&[1, 2]).is_ok());
        assert!(validate_dyes(&[1, 2, 3, 4, 5]).is_ok());
        assert_eq!(
            validate_dyes(&[1, 2, 3, 4, 5, 6]),
            Err(ValidationError::out_of_range("dyes", 2, 5, 6))
        );
    }

    #[test]
    fn tag_limits() {
        let tags = |n: usize| (0..n).map(|i| format!("tag{}", i)).collect::<Vec<_>>();
        assert!(validate_tags(&[]).is_ok());
        assert!(validate_tags(&tags(10)).is_ok());
        assert!(validate_tags(&tags(11)).is_err());
        assert!(validate_tags(&["x".repeat(31)]).is_err());
        assert_eq!(
            validate_tags(&[" ".to_string()]),
            Err(ValidationError::empty_field("tags"))
        );
    }
}
