//! Provider records as they are stored and served

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A learning-support professional listed in the directory.
///
/// The store assigns `id` on insert. Field names are serialized in camelCase,
/// and `rating` travels as a decimal string such as `"4.8"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: i64,
    pub name: String,
    pub specialization: String,
    pub location: String,
    pub rating: Decimal,
    pub short_description: String,
    pub long_description: String,
    pub contact_email: String,
    pub phone_number: String,
    pub available: bool,
    pub review_count: i32,
}

/// A provider record before the store has given it an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProvider {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Specialization is required"))]
    pub specialization: String,

    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,

    #[validate(custom(function = "validate_rating"))]
    pub rating: Decimal,

    pub short_description: String,
    pub long_description: String,

    #[validate(email(message = "Contact email must be a valid email address"))]
    pub contact_email: String,

    pub phone_number: String,

    #[serde(default = "default_available")]
    pub available: bool,

    #[serde(default)]
    #[validate(range(min = 0, message = "Review count cannot be negative"))]
    pub review_count: i32,
}

fn default_available() -> bool {
    true
}

/// Ratings run from 0.0 to 5.0 and are written with exactly one decimal place.
fn validate_rating(rating: &Decimal) -> Result<(), ValidationError> {
    if rating.scale() != 1 {
        return Err(ValidationError::new("rating_format"));
    }
    if *rating < Decimal::ZERO || *rating > Decimal::new(50, 1) {
        return Err(ValidationError::new("rating_out_of_range"));
    }
    Ok(())
}

impl NewProvider {
    pub fn into_provider(self, id: i64) -> Provider {
        Provider {
            id,
            name: self.name,
            specialization: self.specialization,
            location: self.location,
            rating: self.rating,
            short_description: self.short_description,
            long_description: self.long_description,
            contact_email: self.contact_email,
            phone_number: self.phone_number,
            available: self.available,
            review_count: self.review_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample() -> NewProvider {
        NewProvider {
            name: "Sarah Thompson".to_string(),
            specialization: "Dyslexia Support Specialist".to_string(),
            location: "Dubai Marina".to_string(),
            rating: Decimal::from_str("4.8").unwrap(),
            short_description: "Reading specialist".to_string(),
            long_description: "Helps children overcome reading difficulties.".to_string(),
            contact_email: "sarah.thompson@habotconnect.ae".to_string(),
            phone_number: "+971 50 123 4567".to_string(),
            available: true,
            review_count: 32,
        }
    }

    #[test]
    fn test_serializes_camel_case_with_string_rating() {
        let provider = sample().into_provider(1);
        let json = serde_json::to_value(&provider).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["rating"], "4.8");
        assert_eq!(json["shortDescription"], "Reading specialist");
        assert_eq!(json["contactEmail"], "sarah.thompson@habotconnect.ae");
        assert_eq!(json["reviewCount"], 32);
        assert!(json.get("short_description").is_none());
    }

    #[test]
    fn test_defaults_for_available_and_review_count() {
        let json = serde_json::json!({
            "name": "Lisa Rodriguez",
            "specialization": "Speech & Language Therapy",
            "location": "Business Bay",
            "rating": "4.9",
            "shortDescription": "Speech pathologist",
            "longDescription": "Works on articulation.",
            "contactEmail": "lisa.rodriguez@habotconnect.ae",
            "phoneNumber": "+971 50 345 6789"
        });

        let provider: NewProvider = serde_json::from_value(json).unwrap();
        assert!(provider.available);
        assert_eq!(provider.review_count, 0);
        assert_eq!(provider.rating.to_string(), "4.9");
    }

    #[test]
    fn test_validation_rejects_bad_shape() {
        assert!(sample().validate().is_ok());

        let mut missing_name = sample();
        missing_name.name = String::new();
        assert!(missing_name.validate().is_err());

        let mut bad_email = sample();
        bad_email.contact_email = "not-an-email".to_string();
        assert!(bad_email.validate().is_err());

        let mut bad_rating = sample();
        bad_rating.rating = Decimal::from_str("5.5").unwrap();
        assert!(bad_rating.validate().is_err());
    }

    #[test]
    fn test_rating_needs_one_decimal_place() {
        for accepted in ["0.0", "4.8", "5.0"] {
            let mut provider = sample();
            provider.rating = Decimal::from_str(accepted).unwrap();
            assert!(provider.validate().is_ok(), "{}", accepted);
        }

        for rejected in ["5", "4.85", "4.80"] {
            let mut provider = sample();
            provider.rating = Decimal::from_str(rejected).unwrap();
            let errors = provider.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("rating"), "{}", rejected);
        }
    }
}
