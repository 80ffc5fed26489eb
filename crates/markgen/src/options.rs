//! Configuration options for the inline pipeline

/// Options for [`InlineConverter`](crate::InlineConverter)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineOptions {
    /// Delimiter for inline code, split first
    pub code_delimiter: String,

    /// Strong delimiter, split before emphasis
    pub strong_delimiter: String,

    /// Emphasis delimiter
    pub em_delimiter: String,

    /// Run the image pass
    pub images: bool,

    /// Run the link pass
    pub links: bool,
}

impl Default for InlineOptions {
    fn default() -> Self {
        Self {
            code_delimiter: "`".to_string(),
            strong_delimiter: "**".to_string(),
            em_delimiter: "*".to_string(),
            images: true,
            links: true,
        }
    }
}
