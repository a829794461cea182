//! GtkSourceView style-scheme document model and XML writer.

mod writer;

pub use writer::write_scheme;

/// Caller-supplied metadata overrides for the emitted scheme.
///
/// Every field is optional; unset fields fall back to values derived from the
/// parsed script (see [`write_scheme`]).
#[derive(Debug, Clone, Default)]
pub struct SchemeOptions {
    /// Root `name` attribute; its lowercase form becomes the `id`.
    pub name: Option<String>,
    /// Root `version` attribute (defaults to `1.0`).
    pub version: Option<String>,
    /// Text of the `author` element.
    pub author: Option<String>,
    /// Text of the `_description` element.
    pub description: Option<String>,
}

impl SchemeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
