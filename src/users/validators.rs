use super::models::RegisterRequest;
use crate::common::{ValidationResult, Validator};

impl Validator<RegisterRequest> for RegisterRequest {
    fn validate(&self, data: &RegisterRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.name.trim().is_empty() {
            result.add_error("name", "Name is required");
        }

        if data.name.len() > 255 {
            result.add_error("name", "Name must not exceed 255 characters");
        }

        let email = data.email.trim();
        if email.is_empty() {
            result.add_error("email", "Email is required");
        } else if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            result.add_error("email", "Email must be a valid address");
        }

        if data.password.len() < 6 {
            result.add_error("password", "Password must be at least 6 characters");
        }

        result
    }
}
