use thiserror::Error;

/// Why a raw identifier could not be turned into a number.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("No identifier was provided")]
    Missing,

    #[error("Identifier contains no digits")]
    Empty,

    #[error("Identifier does not fit in a 64-bit integer")]
    OutOfRange,
}

/// Extract an integer from an untrusted identifier.
///
/// Characters other than ASCII digits and `+`/`-` are dropped. A sign is kept
/// only when it is the last one seen before the first digit, and a sign after
/// the digits have started ends the number. So `"a1b2"` yields `12`,
/// `"id-9"` yields `-9` and `"5-3"` yields `5`.
pub fn parse_identifier(raw: Option<&str>) -> Result<i64, IdentifierError> {
    let input = raw.ok_or(IdentifierError::Missing)?;

    let mut sign = None;
    let mut digits = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '+' | '-' if digits.is_empty() => sign = Some(ch),
            '+' | '-' => break,
            _ if ch.is_ascii_digit() => digits.push(ch),
            _ => {}
        }
    }

    if digits.is_empty() {
        return Err(IdentifierError::Empty);
    }
    if let Some(prefix) = sign {
        digits.insert(0, prefix);
    }
    digits
        .parse::<i64>()
        .map_err(|_| IdentifierError::OutOfRange)
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
