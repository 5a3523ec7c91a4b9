use rust_decimal::Decimal;
use validator::ValidationError;

pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("is_required");
        error.message = Some("This field is required".into());
        Err(error)
    } else {
        Ok(())
    }
}

pub fn validate_positive_price(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_positive() && !value.is_zero() {
        Ok(())
    } else {
        let mut error = ValidationError::new("positive_price");
        error.message = Some("Price must be greater than zero".into());
        Err(error)
    }
}
