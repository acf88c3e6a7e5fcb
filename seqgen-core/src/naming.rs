//! Filename rendering for numbered file sequences.

/// Renders filenames of the form `{prefix}_{index}.{extension}`.
///
/// The index is rendered in decimal and optionally left-zero-padded to a
/// minimum width. An index whose natural decimal form is wider than the
/// requested width is rendered at its natural length, never truncated.
#[derive(Debug, Clone)]
pub struct SequenceNamer {
    prefix: String,
    extension: String,
    width: usize,
}

impl SequenceNamer {
    /// Creates a namer with no zero-padding.
    ///
    /// Both the prefix and the extension are used verbatim; the separating
    /// `_` and `.` are inserted by [`render`](Self::render).
    pub fn new(prefix: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            extension: extension.into(),
            width: 0,
        }
    }

    /// Sets the minimum digit count for the index segment.
    ///
    /// A width of 0 disables padding.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders the filename for a 1-based sequence index.
    pub fn render(&self, index: u64) -> String {
        // A zero width pads to nothing, so no branch on "padding disabled"
        // is needed here.
        let width = self.width;
        format!("{}_{index:0width$}.{}", self.prefix, self.extension)
    }
}
