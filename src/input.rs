//! Parsing of textual integer sequences
//!
//! Accepts `2,2,2,0`, `[5 6 7]`, `1, -2, 3` and any mix of commas and
//! whitespace between values.

use crate::errors::{FinderError, Result};

/// Parse a sequence of integers from text
pub fn parse_sequence(text: &str) -> Result<Vec<i64>> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed);

    let values = body
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token.parse::<i64>().map_err(|_| FinderError::InvalidNumber {
                token: token.to_string(),
                position: i + 1,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if values.is_empty() {
        return Err(FinderError::EmptySequence);
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commas() {
        assert_eq!(parse_sequence("2,2,2,0,2,2").unwrap(), vec![2, 2, 2, 0, 2, 2]);
    }

    #[test]
    fn test_parse_brackets_and_spaces() {
        assert_eq!(parse_sequence(" [5, 6 7,8] ").unwrap(), vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(parse_sequence("3 -1 0").unwrap(), vec![3, -1, 0]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(parse_sequence("  "), Err(FinderError::EmptySequence)));
        assert!(matches!(parse_sequence("[]"), Err(FinderError::EmptySequence)));
    }

    #[test]
    fn test_parse_invalid_token() {
        match parse_sequence("1, 2, x, 4") {
            Err(FinderError::InvalidNumber { token, position }) => {
                assert_eq!(token, "x");
                assert_eq!(position, 3);
            }
            other => panic!("Expected InvalidNumber, got {:?}", other),
        }
    }
}
