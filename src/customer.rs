//! Customer record types
//!
//! `Customer` is one persisted row; `CustomerFields` is the five-field write
//! payload shared by the create and update endpoints.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One persisted customer row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    /// Storage-assigned identifier, immutable, never reused
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
}

/// The user-supplied fields of a customer record
///
/// Missing body fields deserialize to empty strings so they fall through to
/// validation (and a 400) instead of a body-rejection error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerFields {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let fields: CustomerFields = serde_json::from_str(r#"{"first_name":"Ann"}"#).unwrap();
        assert_eq!(fields.first_name, "Ann");
        assert_eq!(fields.last_name, "");
        assert_eq!(fields.phone_number, "");
    }

    #[test]
    fn test_row_serializes_all_columns() {
        let row = Customer {
            id: 1,
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            phone_number: "5551234567".to_string(),
            email: "a@b.com".to_string(),
            address: "1 Main St".to_string(),
        };

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["phone_number"], "5551234567");
        assert_eq!(json["address"], "1 Main St");
    }
}
