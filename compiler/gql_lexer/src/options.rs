//! Scanner configuration.

/// How far a `#` comment extends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CommentScan {
    /// The comment ends at the next `\n` (which is consumed with it), or
    /// at end of input.
    #[default]
    LineEnd,
    /// The comment swallows everything up to end of input.
    ///
    /// Reproduces the legacy scanner, whose newline search never matched.
    /// Only useful for comparing against output produced by that scanner.
    RestOfInput,
}

/// Options for [`lex_with_options`](crate::lex_with_options).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LexOptions {
    pub comment_scan: CommentScan,
}

impl LexOptions {
    /// Options matching the legacy scanner's observable behavior.
    pub fn legacy() -> Self {
        Self {
            comment_scan: CommentScan::RestOfInput,
        }
    }

    #[must_use]
    pub fn with_comment_scan(mut self, comment_scan: CommentScan) -> Self {
        self.comment_scan = comment_scan;
        self
    }
}
