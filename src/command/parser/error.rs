#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A `key=value` token had no `=`
    MissingSeparator(String),

    /// The key part of a pair was empty
    EmptyKey(String),

    /// Percent-decoding produced invalid UTF-8
    InvalidEscape(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MissingSeparator(tok) => {
                write!(f, "Expected KEY=VALUE, found '{}'", tok)
            }
            ParseError::EmptyKey(tok) => write!(f, "Empty parameter name in '{}'", tok),
            ParseError::InvalidEscape(tok) => write!(f, "Invalid percent escape in '{}'", tok),
        }
    }
}

impl std::error::Error for ParseError {}
