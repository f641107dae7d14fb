use super::error::ParseError;
use crate::command::types::Params;
use percent_encoding::percent_decode_str;
use std::borrow::Cow;

/// Parses `KEY=VALUE` tokens (one per CLI argument) into [`Params`].
///
/// Only the first `=` separates key from value, so values may contain `=`.
pub fn parse_params<I, S>(tokens: I) -> Result<Params, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut params = Params::new();
    for token in tokens {
        let token = token.as_ref();
        let (key, value) = split_pair(token)?;
        params.insert(key, value);
    }
    Ok(params)
}

/// Parses an `application/x-www-form-urlencoded` style string such as
/// `viz_type=line&groupby=country&groupby=device`.
pub fn parse_query_string(input: &str) -> Result<Params, ParseError> {
    let mut params = Params::new();
    let input = input.strip_prefix('?').unwrap_or(input);
    for segment in input.split('&').filter(|s| !s.is_empty()) {
        let (key, value) = match segment.split_once('=') {
            Some((k, v)) => (k, v),
            None => (segment, ""),
        };
        let key = decode_component(key)?;
        if key.is_empty() {
            return Err(ParseError::EmptyKey(segment.to_string()));
        }
        params.insert(key, decode_component(value)?);
    }
    Ok(params)
}

fn split_pair(token: &str) -> Result<(&str, &str), ParseError> {
    let Some((key, value)) = token.split_once('=') else {
        return Err(ParseError::MissingSeparator(token.to_string()));
    };
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyKey(token.to_string()));
    }
    Ok((key, value))
}

/// `+` is a space; `%XX` escapes are decoded and must yield UTF-8.
/// Malformed escapes such as `%G1` pass through literally.
fn decode_component(raw: &str) -> Result<String, ParseError> {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| ParseError::InvalidEscape(raw.to_string()))
}
