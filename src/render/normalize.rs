//! List-structure normalization.

use crate::model::Token;

/// Insert list-wrapper tokens around runs of list items.
///
/// Scans adjacent token pairs: a [`Token::ListOpen`] goes between every
/// heading immediately followed by a list item, and a
/// [`Token::ListClose`] between every list item immediately followed by
/// a heading. One closing wrapper is always appended after the scan.
///
/// Known quirk, kept on purpose: the trailing close is unconditional,
/// so a document ending in a heading gets a stray `</ul>` with no
/// matching opener, and a document with no headings gets items followed
/// by a close that was never opened.
pub fn insert_list_wrappers(tokens: Vec<Token>) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len() + 2);
    let mut iter = tokens.into_iter().peekable();

    while let Some(token) = iter.next() {
        let open_after = token.is_heading() && iter.peek().is_some_and(|t| t.is_list_item());
        let close_after = token.is_list_item() && iter.peek().is_some_and(|t| t.is_heading());

        output.push(token);
        if open_after {
            output.push(Token::ListOpen);
        }
        if close_after {
            output.push(Token::ListClose);
        }
    }

    output.push(Token::ListClose);
    output
}
