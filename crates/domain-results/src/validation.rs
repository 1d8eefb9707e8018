//! Validation failures consumed by the `failed_validation` factories.
//!
//! A validation adapter hands over one [`ValidationFailure`] per broken rule.
//! Each failure renders as `"{message}"`, followed by ` ({names})` when the
//! failure names the offending members. Downstream systems parse these
//! strings, so the format is fixed.

use std::fmt;

/// A single validation failure: a message plus the members it concerns.
///
/// # Examples
/// ```
/// use domain_results::ValidationFailure;
///
/// let failure = ValidationFailure::new("Required").with_members(["Name", "Email"]);
/// assert_eq!(failure.to_string(), "Required (Name, Email)");
/// assert_eq!(ValidationFailure::new("Required").to_string(), "Required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationFailure {
    message: String,
    member_names: Vec<String>,
}

impl ValidationFailure {
    /// Creates a failure that names no members.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            member_names: Vec::new(),
        }
    }

    /// Attaches the offending member names, replacing any set before.
    #[must_use]
    pub fn with_members<I>(mut self, member_names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.member_names = member_names.into_iter().map(Into::into).collect();
        self
    }

    /// The failure message as supplied.
    #[must_use]
    pub const fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Offending member names, possibly empty.
    #[must_use]
    pub fn member_names(&self) -> &[String] {
        &self.member_names
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if !self.member_names.is_empty() {
            write!(f, " ({})", self.member_names.join(", "))?;
        }
        Ok(())
    }
}

impl<M, I, N> From<(M, I)> for ValidationFailure
where
    M: Into<String>,
    I: IntoIterator<Item = N>,
    N: Into<String>,
{
    fn from((message, member_names): (M, I)) -> Self {
        Self::new(message).with_members(member_names)
    }
}
