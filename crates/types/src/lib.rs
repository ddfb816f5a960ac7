/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Drug name cannot be empty")]
    Empty,
    /// The input text exceeded the maximum accepted length
    #[error("Drug name exceeds maximum length of {0} characters")]
    TooLong(usize),
}

/// Maximum accepted length for a drug name, in characters.
///
/// A defensive bound on a free-text clinical field; real drug names are far
/// shorter.
pub const MAX_DRUG_NAME_LEN: usize = 128;

/// A free-text clinical drug name that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one
/// non-whitespace character. The input is automatically trimmed of leading
/// and trailing whitespace during construction, and bounded in length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrugName(String);

impl DrugName {
    /// Creates a new `DrugName` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the
    /// trimmed result is empty, or longer than [`MAX_DRUG_NAME_LEN`],
    /// an error is returned.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Returns
    ///
    /// Returns `Ok(DrugName)` if the trimmed input is non-empty and within
    /// bounds, or a `TextError` describing the rejection.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        if trimmed.chars().count() > MAX_DRUG_NAME_LEN {
            return Err(TextError::TooLong(MAX_DRUG_NAME_LEN));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DrugName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DrugName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for DrugName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for DrugName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DrugName::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let drug = DrugName::new("  Warfarin \n").unwrap();
        assert_eq!(drug.as_str(), "Warfarin");
    }

    #[test]
    fn rejects_empty_and_whitespace_only() {
        assert!(matches!(DrugName::new(""), Err(TextError::Empty)));
        assert!(matches!(DrugName::new("   \t"), Err(TextError::Empty)));
    }

    #[test]
    fn rejects_overlong_input() {
        let input = "x".repeat(MAX_DRUG_NAME_LEN + 1);
        assert!(matches!(DrugName::new(input), Err(TextError::TooLong(_))));
    }

    #[test]
    fn preserves_interior_spacing() {
        let drug = DrugName::new("acetylsalicylic acid").unwrap();
        assert_eq!(drug.as_str(), "acetylsalicylic acid");
    }
}
