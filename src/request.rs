// Request Validation - payload shape checks at the boundary
// The search core assumes well-formed requirements and never re-validates;
// every entry point funnels its payload through here first.

use serde_json::Value;

use crate::catalog::VehicleRequirement;

// ============================================================================
// REQUEST FORMAT ERROR
// ============================================================================

/// Why a request payload was rejected before reaching the search core.
/// Maps to HTTP 400 in the server and a usage error in the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFormatError {
    pub message: String,
}

impl RequestFormatError {
    fn new(message: &str) -> Self {
        RequestFormatError {
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for RequestFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RequestFormatError {}

// ============================================================================
// PAYLOAD PARSING
// ============================================================================

/// Validate a request body and turn it into vehicle requirements.
///
/// The body must be a JSON array; every element must carry a positive
/// numeric `length` and a positive integer `quantity`.
pub fn parse_vehicle_requirements(
    body: &Value,
) -> Result<Vec<VehicleRequirement>, RequestFormatError> {
    let entries = body
        .as_array()
        .ok_or_else(|| RequestFormatError::new("Request body must be an array"))?;

    let mut requirements = Vec::with_capacity(entries.len());

    for entry in entries {
        let length = entry
            .get("length")
            .and_then(Value::as_f64)
            .filter(|&l| l > 0.0)
            .ok_or_else(|| {
                RequestFormatError::new("Each vehicle must have a positive numeric length")
            })?;

        let quantity = entry
            .get("quantity")
            .and_then(Value::as_u64)
            .filter(|&q| q > 0)
            .ok_or_else(|| {
                RequestFormatError::new("Each vehicle must have a positive integer quantity")
            })?;

        requirements.push(VehicleRequirement {
            length,
            quantity: quantity as u32,
        });
    }

    Ok(requirements)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_body_parses() {
        let body = json!([
            {"length": 10, "quantity": 1},
            {"length": 25.5, "quantity": 3}
        ]);

        let requirements = parse_vehicle_requirements(&body).unwrap();
        assert_eq!(requirements.len(), 2);
        assert_eq!(requirements[0].length, 10.0);
        assert_eq!(requirements[0].quantity, 1);
        assert_eq!(requirements[1].length, 25.5);
        assert_eq!(requirements[1].quantity, 3);
    }

    #[test]
    fn test_empty_array_is_valid() {
        let requirements = parse_vehicle_requirements(&json!([])).unwrap();
        assert!(requirements.is_empty());
    }

    #[test]
    fn test_non_array_body_rejected() {
        let err = parse_vehicle_requirements(&json!({"length": 10})).unwrap_err();
        assert_eq!(err.message, "Request body must be an array");
    }

    #[test]
    fn test_missing_length_rejected() {
        let err = parse_vehicle_requirements(&json!([{"quantity": 1}])).unwrap_err();
        assert!(err.message.contains("length"));
    }

    #[test]
    fn test_non_positive_length_rejected() {
        let err = parse_vehicle_requirements(&json!([{"length": 0, "quantity": 1}])).unwrap_err();
        assert!(err.message.contains("length"));

        let err =
            parse_vehicle_requirements(&json!([{"length": -5, "quantity": 1}])).unwrap_err();
        assert!(err.message.contains("length"));
    }

    #[test]
    fn test_missing_quantity_rejected() {
        let err = parse_vehicle_requirements(&json!([{"length": 10}])).unwrap_err();
        assert!(err.message.contains("quantity"));
    }

    #[test]
    fn test_fractional_quantity_rejected() {
        let err =
            parse_vehicle_requirements(&json!([{"length": 10, "quantity": 1.5}])).unwrap_err();
        assert!(err.message.contains("quantity"));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let err =
            parse_vehicle_requirements(&json!([{"length": 10, "quantity": 0}])).unwrap_err();
        assert!(err.message.contains("quantity"));
    }

    #[test]
    fn test_one_bad_entry_rejects_the_request() {
        let body = json!([
            {"length": 10, "quantity": 1},
            {"length": "tall", "quantity": 2}
        ]);
        assert!(parse_vehicle_requirements(&body).is_err());
    }
}
