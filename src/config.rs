//! Store policies chosen at start up.

/// How much checking a transaction date gets on entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// Any non-empty text is accepted.
    #[default]
    Free,
    /// The text must have the `DD-MM-YYYY` digit shape. Calendar validity is not checked.
    Strict,
}

/// How dates compare when sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateOrdering {
    /// Dates that parse as `DD-MM-YYYY` compare by calendar day.
    #[default]
    Chronological,
    /// Dates compare as plain text.
    Lexicographic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreConfig {
    pub date_format: DateFormat,
    pub date_ordering: DateOrdering,
}
