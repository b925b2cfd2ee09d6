use thiserror::Error;

/// Why a piece of flow input was rejected. The flow re-prompts and keeps its state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("input is empty")]
    EmptyInput,
    #[error("not a number: {0}")]
    NotANumber(String),
    #[error("amount is negative: {0}")]
    Negative(f64),
}

/// Trimmed, non-empty free text.
pub fn parse_label(input: &str) -> Result<String, ValidationError> {
    let label = input.trim();
    if label.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    Ok(label.to_string())
}

/// Finite, non-negative decimal number.
pub fn parse_amount(input: &str) -> Result<f64, ValidationError> {
    let raw = input.trim();
    if raw.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    let amount: f64 = raw
        .parse()
        .map_err(|_| ValidationError::NotANumber(raw.to_string()))?;
    if !amount.is_finite() {
        return Err(ValidationError::NotANumber(raw.to_string()));
    }
    if amount < 0.0 {
        return Err(ValidationError::Negative(amount));
    }
    Ok(amount)
}
