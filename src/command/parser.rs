//! Argument extraction for add and index commands

use crate::error::{Result, TrackerError};

/// Extract the description that follows a command keyword.
///
/// The line is split on single spaces, so doubled spaces produce empty
/// tokens and those are kept. Tokens from index 1 onward are joined until
/// one equals `stop_delimiter` case-insensitively; an empty `stop_delimiter`
/// consumes the rest of the line.
pub fn extract_description(line: &str, stop_delimiter: &str) -> Result<String> {
    let words: Vec<&str> = line.split(' ').collect();
    if words.len() < 2 {
        return Err(TrackerError::MissingArgument(line.to_string()));
    }

    let mut description = words[1].to_string();
    for word in &words[2..] {
        if !stop_delimiter.is_empty() && word.eq_ignore_ascii_case(stop_delimiter) {
            break;
        }
        description.push(' ');
        description.push_str(word);
    }

    Ok(description)
}

/// Extract the free-text date field after a delimiter token such as "/by".
///
/// The field is everything after the first occurrence of the delimiter,
/// trimmed. A missing delimiter, or nothing but whitespace after it, is a
/// format error.
pub fn extract_date_field(line: &str, delimiter: &str) -> Result<String> {
    let Some((_, rest)) = line.split_once(delimiter) else {
        return Err(TrackerError::MissingArgument(line.to_string()));
    };

    let field = rest.trim();
    if field.is_empty() {
        return Err(TrackerError::MissingArgument(line.to_string()));
    }

    Ok(field.to_string())
}

/// Parse the 1-based task number following "done" or "delete".
///
/// A missing token or non-numeric text folds into the same format error as
/// a missing argument; bounds are checked by the list, not here.
pub fn parse_index(line: &str) -> Result<i64> {
    let number = line
        .split(' ')
        .nth(1)
        .ok_or_else(|| TrackerError::MissingArgument(line.to_string()))?;

    number
        .parse()
        .map_err(|_| TrackerError::MissingArgument(line.to_string()))
}
