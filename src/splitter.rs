use crate::error::SplitError;

/// Splits `text` on `delimiter`, ignoring delimiters nested between `open`
/// and `close`.
///
/// The input and every field are trimmed. A blank input yields no fields at
/// all; any other blank field is an error. Nesting is only counted, never
/// balanced, so a stray `close` just drives the depth negative.
pub fn split_enclosed(
    delimiter: char,
    open: char,
    close: char,
    text: &str,
) -> Result<Vec<String>, SplitError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let empty = || SplitError::EmptyField {
        text: text.to_string(),
    };

    let mut fields = Vec::new();
    let mut current = String::new();
    let mut depth: i64 = 0;
    for c in text.chars() {
        if c == delimiter && depth == 0 {
            let field = current.trim();
            if field.is_empty() {
                return Err(empty());
            }
            fields.push(field.to_string());
            current.clear();
            continue;
        }
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
        }
        current.push(c);
    }

    let last = current.trim();
    if last.is_empty() {
        return Err(empty());
    }
    fields.push(last.to_string());
    Ok(fields)
}
