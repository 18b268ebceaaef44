use super::models::CreatePaymentRequest;
use crate::common::{ValidationResult, Validator};

impl Validator<CreatePaymentRequest> for CreatePaymentRequest {
    fn validate(&self, data: &CreatePaymentRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if !data.amount.is_finite() || data.amount <= 0.0 {
            result.add_error("amount", "Amount must be a positive number");
        }

        if data.user_id.trim().is_empty() {
            result.add_error("userId", "User id is required");
        }

        if data.plan.trim().is_empty() {
            result.add_error("plan", "Plan is required");
        }

        if let Some(return_url) = &data.return_url {
            if !return_url.is_empty()
                && !return_url.starts_with("http://")
                && !return_url.starts_with("https://")
            {
                result.add_error(
                    "returnUrl",
                    "Return URL must start with http:// or https://",
                );
            }
        }

        result
    }
}
