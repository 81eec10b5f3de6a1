//! Line classification: headings, bulleted links, everything else.

use regex::Regex;

use crate::model::Token;

/// Classifies source lines into tokens.
///
/// Recognized line forms:
///
/// - `#`…`######` followed by text → [`Token::Heading`]
/// - `- [text](url)` → [`Token::ListItem`]
/// - anything else → no token
pub struct LineClassifier {
    link_pattern: Regex,
}

impl LineClassifier {
    /// Create a new classifier.
    pub fn new() -> Self {
        Self {
            // First [...] group is the link text, first (...) group the href.
            link_pattern: Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").unwrap(),
        }
    }

    /// Classify an ordered sequence of lines.
    ///
    /// Each line yields at most one token; order is preserved.
    pub fn classify_lines<S: AsRef<str>>(&self, lines: &[S]) -> Vec<Token> {
        lines
            .iter()
            .filter_map(|line| self.classify_line(line.as_ref()))
            .collect()
    }

    /// Classify one source line.
    ///
    /// Bullet lines that do not match `- [text](url)` are skipped with
    /// a warning rather than producing garbage extraction.
    pub fn classify_line(&self, line: &str) -> Option<Token> {
        let line = line.trim_end_matches(['\r', '\n']);

        if line.starts_with('#') {
            let level = line.chars().take_while(|&c| c == '#').count().min(6) as u8;
            let text = line.replace('#', "").trim().to_string();
            return Some(Token::Heading { level, text });
        }

        if line.starts_with('-') {
            return match self.link_pattern.captures(line) {
                Some(caps) => Some(Token::ListItem {
                    text: caps[1].to_string(),
                    href: caps[2].to_string(),
                }),
                None => {
                    log::warn!("skipping malformed bullet line: {:?}", line);
                    None
                }
            };
        }

        None
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}
