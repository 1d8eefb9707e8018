//! Conversions for the optional single message accepted by factories.

use std::borrow::Cow;

/// A value that may carry one error message.
///
/// Factories such as [`crate::DomainResult::not_found`] accept anything that
/// implements this trait. Absent (`None`) and empty messages both collapse to
/// "no message"; every other message is kept byte-for-byte.
///
/// # Examples
/// ```
/// use domain_results::IntoMessage;
///
/// assert_eq!("boom".into_message(), Some("boom".to_owned()));
/// assert_eq!("".into_message(), None);
/// assert_eq!(None::<String>.into_message(), None);
/// assert_eq!(Some("  padded ").into_message(), Some("  padded ".to_owned()));
/// ```
pub trait IntoMessage {
    /// Returns the message, or `None` when it is absent or empty.
    fn into_message(self) -> Option<String>;
}

fn non_empty(message: String) -> Option<String> {
    (!message.is_empty()).then_some(message)
}

impl IntoMessage for String {
    fn into_message(self) -> Option<String> {
        non_empty(self)
    }
}

impl IntoMessage for &str {
    fn into_message(self) -> Option<String> {
        (!self.is_empty()).then(|| self.to_owned())
    }
}

impl IntoMessage for &String {
    fn into_message(self) -> Option<String> {
        self.as_str().into_message()
    }
}

impl IntoMessage for Cow<'_, str> {
    fn into_message(self) -> Option<String> {
        non_empty(self.into_owned())
    }
}

impl<M: IntoMessage> IntoMessage for Option<M> {
    fn into_message(self) -> Option<String> {
        self.and_then(IntoMessage::into_message)
    }
}

/// Realises a message sequence into an owned vector, keeping order,
/// duplicates and empty entries.
pub(crate) fn collect_messages<I>(messages: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    messages.into_iter().map(Into::into).collect()
}
