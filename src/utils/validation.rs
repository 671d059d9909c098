use crate::utils::error::{Result, RosterError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RosterError::InvalidArgumentError {
            field: field_name.to_string(),
            reason: "value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("group", "M3439").is_ok());
        assert!(validate_non_empty_string("group", "").is_err());
        assert!(validate_non_empty_string("group", "   ").is_err());
    }
}
