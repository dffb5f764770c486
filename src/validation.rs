use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub fn validate_page(raw: &str) -> Result<i64, ValidationError> {
    let page: i64 = raw
        .parse()
        .map_err(|_| ValidationError::InvalidParameter(format!("page must be an integer, got '{}'", raw)))?;

    if page < 1 {
        return Err(ValidationError::InvalidParameter(
            "page must be 1 or greater".to_string(),
        ));
    }

    Ok(page)
}

pub fn validate_limit(raw: &str) -> Result<i64, ValidationError> {
    let limit: i64 = raw
        .parse()
        .map_err(|_| ValidationError::InvalidParameter(format!("limit must be an integer, got '{}'", raw)))?;

    if limit < 1 || limit > 1000 {
        return Err(ValidationError::InvalidParameter(
            "limit must be between 1 and 1000".to_string(),
        ));
    }

    Ok(limit)
}

pub fn validate_currency(name: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingParameter(name.to_string()));
    }

    Ok(())
}
