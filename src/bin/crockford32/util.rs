use crate::error::{CliError, Result};
use std::io::{self, BufRead};

/// Arguments as given, or one value per non-empty stdin line when none are given.
pub fn collect_inputs(values: &[String]) -> Result<Vec<String>> {
    if !values.is_empty() {
        return Ok(values.to_vec());
    }

    let mut out = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            out.push(line.to_string());
        }
    }

    if out.is_empty() {
        return Err(CliError::NoInput);
    }
    Ok(out)
}

/// Integer operand for `encode`; negatives are kept so the library can reject them.
pub enum Number {
    /// Fits in `u128`.
    Unsigned(u128),
    /// Negative value; encoding it fails.
    Signed(i128),
}

/// Parses a decimal operand, allowing `_` digit separators.
pub fn parse_number(input: &str) -> Result<Number> {
    let trimmed = input.trim().replace('_', "");
    if let Ok(value) = trimmed.parse::<u128>() {
        return Ok(Number::Unsigned(value));
    }
    trimmed
        .parse::<i128>()
        .map(Number::Signed)
        .map_err(|_| CliError::InvalidNumber(input.to_string()))
}
