//! `#` line comments.

use gql_lexer_core::Cursor;

use crate::CommentScan;

/// Skip a comment starting at the cursor (which must be on `#`).
///
/// With [`CommentScan::LineEnd`] the cursor ends just past the terminating
/// `\n`, or at EOF. With [`CommentScan::RestOfInput`] it always ends at EOF.
pub(crate) fn skip_comment(cursor: &mut Cursor<'_>, mode: CommentScan) {
    debug_assert_eq!(cursor.current(), b'#');
    match mode {
        CommentScan::LineEnd => {
            cursor.eat_until_newline_or_eof();
            if !cursor.is_eof() {
                cursor.advance(); // consume '\n'
            }
        }
        CommentScan::RestOfInput => {
            let end = cursor.source_len();
            cursor.jump_to(end);
        }
    }
}

#[cfg(test)]
mod tests;
