use derive_more::{AsRef, Display};

use crate::ActivityType;

/// Display name of an activity session. Names identify sessions in the repository.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.chars().count();

        if len > 64 {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }

    /// Creates a name from a string known to be valid.
    pub(crate) fn from_static(name: &'static str) -> Self {
        debug_assert!(Name::new(name).is_ok(), "invalid name \"{name}\"");
        Name(name.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ActivityType> for Name {
    fn from(value: ActivityType) -> Self {
        Name(value.to_string())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Upper Body", Ok(Name("Upper Body".to_string())))]
    #[case("  Yoga Flow  ", Ok(Name("Yoga Flow".to_string())))]
    #[case("", Err(NameError::Empty))]
    #[case("   ", Err(NameError::Empty))]
    #[case(
        "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
        Err(NameError::TooLong(65))
    )]
    fn test_name_new(#[case] name: &str, #[case] expected: Result<Name, NameError>) {
        assert_eq!(Name::new(name), expected);
    }

    #[test]
    fn test_name_from_activity_type() {
        assert_eq!(
            Name::from(ActivityType::TraditionalStrengthTraining).as_str(),
            "Traditional Strength Training"
        );
    }
}
