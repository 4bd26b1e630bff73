//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token spanning two byte offsets of a source

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$start` - Byte offset of the first character of the token
/// * `$end` - Byte offset just past the token
/// * `$file` - `Rc<String>` naming the source
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Symbol('+'), 4, 5, self.file);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $start:expr, $end:expr, $file:expr) => {
        Token {
            kind: $kind,
            span: Span {
                start: Position($start, Rc::clone(&$file)),
                end: Position($end, Rc::clone(&$file)),
            },
        }
    };
}
