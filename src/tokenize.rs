//! Line tokenizer for comma or semicolon separated text.
//!
//! Every `,` and every `;` is a field boundary, so files using either
//! separator (or a mix of both) split the same way. Fields that open with a
//! double quote may contain separators; `""` inside them is a literal quote.

use thiserror::Error;

/// Characters treated as field boundaries.
pub const DELIMITERS: [char; 2] = [',', ';'];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unterminated quoted field starting at field {field}")]
pub struct TokenizeError {
    /// Zero based index of the field that never closed.
    pub field: usize,
}

fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

/// Split a single line (without its terminator) into raw field values.
///
/// An empty line yields a single empty field. Text following a closing quote
/// up to the next delimiter is appended to the field as-is.
pub fn split_fields(line: &str) -> Result<Vec<String>, TokenizeError> {
    let mut fields = Vec::new();
    let mut chars = line.chars().peekable();
    let mut field = String::new();

    loop {
        if chars.peek() == Some(&'"') {
            chars.next();
            let mut closed = false;
            while let Some(c) = chars.next() {
                if c == '"' {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        closed = true;
                        break;
                    }
                } else {
                    field.push(c);
                }
            }
            if !closed {
                return Err(TokenizeError {
                    field: fields.len(),
                });
            }
        }

        let mut at_boundary = false;
        for c in chars.by_ref() {
            if is_delimiter(c) {
                at_boundary = true;
                break;
            }
            field.push(c);
        }
        fields.push(std::mem::take(&mut field));
        if !at_boundary {
            return Ok(fields);
        }
    }
}
