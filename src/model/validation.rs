use thiserror::Error;

use super::activity::Activity;

/// Validation errors for domain model fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("not a whole number: {0:?}")]
    InvalidNumber(String),
    #[error("unknown category code: {0}")]
    UnknownCategory(u32),
}

/// Returns `true` if an activity may be submitted.
///
/// The name must contain something other than whitespace and the calorie
/// count must be strictly positive. The category never affects validity.
pub fn is_valid_activity(activity: &Activity) -> bool {
    let name_ok = !activity.name.trim().is_empty();
    let calories_ok = activity.calories > 0;
    name_ok && calories_ok
}

/// Coerces raw numeric input to an integer.
///
/// Surrounding whitespace is ignored and empty input reads as `0`, the way a
/// number input reports a cleared value. Anything else that is not a
/// non-negative integer fitting in `u32` is rejected.
pub fn parse_number(raw: &str) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidNumber(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::model::{ActivityId, Category};

    fn activity(category: Category, name: &str, calories: u32) -> Activity {
        Activity {
            id: ActivityId::new(),
            category,
            name: name.to_string(),
            calories,
        }
    }

    // --- is_valid_activity ---

    #[test]
    fn salad_is_valid() {
        assert!(is_valid_activity(&activity(Category::Food, "Salad", 300)));
    }

    #[test]
    fn blank_name_is_invalid() {
        assert!(!is_valid_activity(&activity(Category::Exercise, "", 500)));
    }

    #[test]
    fn whitespace_name_is_invalid() {
        assert!(!is_valid_activity(&activity(Category::Food, " \t ", 500)));
    }

    #[test]
    fn zero_calories_is_invalid() {
        assert!(!is_valid_activity(&activity(Category::Food, "Juice", 0)));
    }

    #[test]
    fn padded_name_is_valid() {
        assert!(is_valid_activity(&activity(Category::Food, "  Juice ", 1)));
    }

    #[quickcheck]
    fn validity_matches_predicate(name: String, calories: u32, exercise: bool) -> bool {
        let category = if exercise {
            Category::Exercise
        } else {
            Category::Food
        };
        let expected = !name.trim().is_empty() && calories > 0;
        is_valid_activity(&activity(category, &name, calories)) == expected
    }

    #[quickcheck]
    fn category_never_affects_validity(name: String, calories: u32) -> bool {
        is_valid_activity(&activity(Category::Food, &name, calories))
            == is_valid_activity(&activity(Category::Exercise, &name, calories))
    }

    // --- parse_number ---

    #[test]
    fn parse_plain_number() {
        assert_eq!(parse_number("300"), Ok(300));
    }

    #[test]
    fn parse_empty_is_zero() {
        assert_eq!(parse_number(""), Ok(0));
        assert_eq!(parse_number("   "), Ok(0));
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(parse_number(" 42 "), Ok(42));
    }

    #[test]
    fn parse_rejects_text() {
        assert_eq!(
            parse_number("abc"),
            Err(ValidationError::InvalidNumber("abc".to_string()))
        );
    }

    #[test]
    fn parse_rejects_negative() {
        assert_eq!(
            parse_number("-5"),
            Err(ValidationError::InvalidNumber("-5".to_string()))
        );
    }

    #[test]
    fn parse_rejects_overflow() {
        assert!(parse_number("99999999999").is_err());
    }

    #[quickcheck]
    fn parse_accepts_any_u32(n: u32) -> bool {
        parse_number(&n.to_string()) == Ok(n)
    }
}
