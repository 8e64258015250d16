//! Errors for tag creation.
//!
//! Nothing in this crate fails: every name and value is accepted and escaped on
//! output. [`CreateTagError`] is for layers that validate on top of it, so
//! their failures keep the tag name and markup that caused them.

use facet::Facet;

/// A tag could not be created.
#[derive(Facet, Debug, Clone, PartialEq, Eq)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum CreateTagError {
    /// Could not create tag
    Unnamed { html: Option<String> },

    /// Could not create tag [{name}]
    Named { name: String, html: Option<String> },

    /// {message}
    Custom {
        name: Option<String>,
        html: Option<String>,
        message: String,
    },
}

impl CreateTagError {
    /// Error without a tag name.
    pub fn unnamed() -> Self {
        CreateTagError::Unnamed { html: None }
    }

    /// Error for the given tag name.
    pub fn for_name(name: impl Into<String>) -> Self {
        CreateTagError::Named {
            name: name.into(),
            html: None,
        }
    }

    /// Attach the markup involved.
    pub fn with_html(self, html: impl Into<String>) -> Self {
        let html = Some(html.into());
        match self {
            CreateTagError::Unnamed { .. } => CreateTagError::Unnamed { html },
            CreateTagError::Named { name, .. } => CreateTagError::Named { name, html },
            CreateTagError::Custom { name, message, .. } => {
                CreateTagError::Custom { name, html, message }
            }
        }
    }

    /// Replace the default message. An empty message keeps the default.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            return self;
        }
        let (name, html) = self.into_context();
        CreateTagError::Custom {
            name,
            html,
            message,
        }
    }

    /// The tag name, if known.
    pub fn name(&self) -> Option<&str> {
        match self {
            CreateTagError::Unnamed { .. } => None,
            CreateTagError::Named { name, .. } => Some(name),
            CreateTagError::Custom { name, .. } => name.as_deref(),
        }
    }

    /// The markup involved, if known.
    pub fn html(&self) -> Option<&str> {
        match self {
            CreateTagError::Unnamed { html }
            | CreateTagError::Named { html, .. }
            | CreateTagError::Custom { html, .. } => html.as_deref(),
        }
    }

    /// The human-readable message.
    pub fn message(&self) -> String {
        self.to_string()
    }

    fn into_context(self) -> (Option<String>, Option<String>) {
        match self {
            CreateTagError::Unnamed { html } => (None, html),
            CreateTagError::Named { name, html } => (Some(name), html),
            CreateTagError::Custom { name, html, .. } => (name, html),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_messages() {
        assert_eq!(CreateTagError::unnamed().message(), "Could not create tag");
        assert_eq!(
            CreateTagError::for_name("p").message(),
            "Could not create tag [p]"
        );
    }

    #[test]
    fn test_context() {
        let err = CreateTagError::for_name("p").with_html("<p>x</p>");
        assert_eq!(err.name(), Some("p"));
        assert_eq!(err.html(), Some("<p>x</p>"));

        let err = CreateTagError::unnamed();
        assert_eq!(err.name(), None);
        assert_eq!(err.html(), None);
    }

    #[test]
    fn test_custom_message_keeps_context() {
        let err = CreateTagError::for_name("p")
            .with_html("<p>")
            .with_message("bad tag");
        assert_eq!(err.message(), "bad tag");
        assert_eq!(err.name(), Some("p"));
        assert_eq!(err.html(), Some("<p>"));

        let err = CreateTagError::for_name("p").with_message("");
        assert_eq!(err.message(), "Could not create tag [p]");
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&CreateTagError::unnamed());
    }
}
