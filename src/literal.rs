//! Parsing of the numeric literals embedded in simulation log lines.
//!
//! The logging agents dump their histories with the host language's own
//! list formatting, e.g. `[12, 7.5, 3]` or `(1, 2,)`. Only flat sequences of
//! plain decimal numbers are accepted here; anything that would need a real
//! expression evaluator is rejected.

use std::fmt;

/// Why a literal was rejected
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralError {
    pub reason: String,
}

impl LiteralError {
    fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

/// Parse a bracketed list `[a, b]` or tuple `(a, b)` of numbers
pub fn parse_number_list(text: &str) -> Result<Vec<f64>, LiteralError> {
    let trimmed = text.trim();

    let inner = match (trimmed.chars().next(), trimmed.chars().last()) {
        (Some('['), Some(']')) | (Some('('), Some(')')) if trimmed.len() >= 2 => {
            &trimmed[1..trimmed.len() - 1]
        }
        _ => return Err(LiteralError::new("expected a bracketed sequence")),
    };

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut tokens: Vec<&str> = inner.split(',').collect();
    // A single trailing comma is allowed: `[1, 2,]`
    if tokens.len() > 1 && tokens.last().map_or(false, |t| t.trim().is_empty()) {
        tokens.pop();
    }

    tokens
        .iter()
        .map(|token| parse_number(token))
        .collect()
}

/// Parse one optionally signed decimal integer
pub fn parse_integer(text: &str) -> Result<i64, LiteralError> {
    let token = text.trim();
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(LiteralError::new(format!("'{}' is not an integer", token)));
    }
    token
        .parse::<i64>()
        .map_err(|e| LiteralError::new(format!("'{}': {}", token, e)))
}

fn parse_number(text: &str) -> Result<f64, LiteralError> {
    let token = text.trim();
    if token.is_empty() {
        return Err(LiteralError::new("empty element"));
    }

    // f64::from_str also takes "inf" and "NaN", which are not number literals
    let well_formed = token
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
        && token.chars().any(|c| c.is_ascii_digit());
    if !well_formed {
        return Err(LiteralError::new(format!("'{}' is not a number", token)));
    }

    token
        .parse::<f64>()
        .map_err(|_| LiteralError::new(format!("'{}' is not a number", token)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_list() {
        assert_eq!(parse_number_list("[1, 2, 3]").unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_parse_mixed_floats_and_signs() {
        assert_eq!(
            parse_number_list(" [1, 2.5, -3, +4e1] ").unwrap(),
            vec![1.0, 2.5, -3.0, 40.0]
        );
    }

    #[test]
    fn test_parse_tuple_and_trailing_comma() {
        assert_eq!(parse_number_list("(7, 8,)").unwrap(), vec![7.0, 8.0]);
        assert_eq!(parse_number_list("[5,]").unwrap(), vec![5.0]);
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(parse_number_list("[]").unwrap().is_empty());
        assert!(parse_number_list("[  ]").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_words() {
        let err = parse_number_list("[1, two, 3]").unwrap_err();
        assert!(err.reason.contains("two"));
    }

    #[test]
    fn test_rejects_non_literals() {
        assert!(parse_number_list("1, 2, 3").is_err());
        assert!(parse_number_list("[1, 2").is_err());
        assert!(parse_number_list("[1,, 2]").is_err());
        assert!(parse_number_list("[inf, 1]").is_err());
        assert!(parse_number_list("[[1], 2]").is_err());
        assert!(parse_number_list("[1, 2)").is_err());
        assert!(parse_number_list("__import__('os')").is_err());
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer(" 7 ").unwrap(), 7);
        assert_eq!(parse_integer("-12").unwrap(), -12);
        assert_eq!(parse_integer("+3").unwrap(), 3);
        assert!(parse_integer("7.5").is_err());
        assert!(parse_integer("").is_err());
        assert!(parse_integer("seven").is_err());
    }
}
