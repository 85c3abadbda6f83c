//! Interest category type.

use std::fmt;

/// Error returned when parsing an invalid category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid category: {reason}")]
pub struct InvalidCategory {
    reason: &'static str,
}

/// An interest category tag (e.g. "historical", "food", "relaxing").
///
/// The tag set is open-ended: any non-empty lowercase ASCII identifier is
/// valid. Normalizing to lowercase at the boundary means catalog entries and
/// user interests compare reliably.
///
/// # Examples
///
/// ```
/// use tour_server::domain::Category;
///
/// let historical = Category::parse("historical").unwrap();
/// assert_eq!(historical.as_str(), "historical");
///
/// // Input is lowercased
/// assert_eq!(Category::parse("Food").unwrap().as_str(), "food");
///
/// // Empty tags are rejected
/// assert!(Category::parse("").is_err());
/// assert!(Category::parse("  ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category(String);

impl Category {
    /// Parse a category tag from a string.
    ///
    /// Trims surrounding whitespace and lowercases the tag. The result must
    /// be non-empty and contain only ASCII alphanumerics, `-` or `_`.
    pub fn parse(s: &str) -> Result<Self, InvalidCategory> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidCategory {
                reason: "must not be empty",
            });
        }

        let lowered = trimmed.to_ascii_lowercase();

        if !lowered
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return Err(InvalidCategory {
                reason: "must contain only ASCII alphanumerics, '-' or '_'",
            });
        }

        Ok(Category(lowered))
    }

    /// Returns the category tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Category({})", self.0)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
