//! Token model bridging line classification and HTML rendering.
//!
//! Every recognized input line becomes one [`Token`]; the normalizer
//! inserts the wrapper variants around runs of list items. Token order
//! is the document order and is preserved through every stage.

/// One classified input line, or a list-wrapper marker inserted during
/// normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A heading line such as `## Tools`.
    Heading {
        /// Heading level 1-6, from the leading `#` count.
        level: u8,
        /// Heading text with markers and surrounding whitespace removed.
        text: String,
    },

    /// A bulleted link line, `- [text](url)`.
    ListItem {
        /// Visible link text.
        text: String,
        /// Link target.
        href: String,
    },

    /// Opening `<ul>` wrapper.
    ListOpen,

    /// Closing `</ul>` wrapper.
    ListClose,
}

impl Token {
    /// Whether this token is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Token::Heading { .. })
    }

    /// Whether this token is a list item.
    pub fn is_list_item(&self) -> bool {
        matches!(self, Token::ListItem { .. })
    }
}
