use crate::domain::requests::ProductRequest;
use shared::errors::FieldViolation;
use validator::{Validate, ValidationErrors};

/// Checks every field rule of a product payload and returns all violations,
/// sorted by field name. An empty vector means the payload is acceptable.
pub fn validate_product(req: &ProductRequest) -> Vec<FieldViolation> {
    match req.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => collect_violations(&errors),
    }
}

fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {field}"));
                FieldViolation::new(field.to_string(), message)
            })
        })
        .collect();

    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> ProductRequest {
        ProductRequest {
            id: None,
            name: "Laptop".into(),
            description: Some("".into()),
            price: 0.01,
            category: Some("".into()),
        }
    }

    fn fields(req: &ProductRequest) -> Vec<String> {
        validate_product(req).into_iter().map(|v| v.field).collect()
    }

    #[test]
    fn accepts_minimal_valid_payload() {
        assert!(validate_product(&laptop()).is_empty());
    }

    #[test]
    fn accepts_missing_optional_fields() {
        let req = ProductRequest {
            description: None,
            category: None,
            ..laptop()
        };
        assert!(validate_product(&req).is_empty());
    }

    #[test]
    fn rejects_empty_name() {
        let req = ProductRequest {
            name: String::new(),
            ..laptop()
        };
        let violations = validate_product(&req);
        assert_eq!(violations, vec![FieldViolation::new("name", "Name is required")]);
    }

    #[test]
    fn name_length_boundary() {
        let ok = ProductRequest {
            name: "a".repeat(200),
            ..laptop()
        };
        assert!(validate_product(&ok).is_empty());

        let too_long = ProductRequest {
            name: "a".repeat(201),
            ..laptop()
        };
        assert_eq!(fields(&too_long), vec!["name"]);
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let req = ProductRequest {
            name: "é".repeat(200),
            ..laptop()
        };
        assert!(validate_product(&req).is_empty());
    }

    #[test]
    fn rejects_long_description() {
        let req = ProductRequest {
            description: Some("d".repeat(1001)),
            ..laptop()
        };
        assert_eq!(fields(&req), vec!["description"]);
    }

    #[test]
    fn rejects_zero_and_negative_price() {
        for price in [0.0, -5.0] {
            let req = ProductRequest { price, ..laptop() };
            assert_eq!(fields(&req), vec!["price"], "price {price}");
        }
    }

    #[test]
    fn rejects_long_category() {
        let req = ProductRequest {
            category: Some("c".repeat(101)),
            ..laptop()
        };
        assert_eq!(fields(&req), vec!["category"]);
    }

    #[test]
    fn collects_every_violation() {
        let req = ProductRequest {
            id: Some(9),
            name: String::new(),
            description: Some("d".repeat(1001)),
            price: -1.0,
            category: Some("c".repeat(101)),
        };
        assert_eq!(
            fields(&req),
            vec!["category", "description", "name", "price"]
        );
    }
}
