//! Tests for the `json` feature: kind serialization and object masking.

#![cfg(feature = "json")]

use mascara::{
    MaskKind, UnmaskKind, Unmasked,
    json::{mask_object, unmask_object, unmasked_fields},
    mask,
};
use serde_json::{Value, json};

mod kinds {
    use super::*;

    #[test]
    fn serialize_as_table_keys() {
        assert_eq!(serde_json::to_value(MaskKind::Zipcode).unwrap(), json!("zipcode"));
        assert_eq!(serde_json::to_value(UnmaskKind::Phone).unwrap(), json!("phone"));
    }

    #[test]
    fn deserialize_field_configuration() {
        let fields: Vec<(String, MaskKind)> =
            serde_json::from_value(json!([["document", "cpf"], ["mobile", "phone"]])).unwrap();
        assert_eq!(
            fields,
            [
                ("document".to_string(), MaskKind::Cpf),
                ("mobile".to_string(), MaskKind::Phone)
            ]
        );
    }

    #[test]
    fn unknown_keys_fail_to_deserialize() {
        assert!(serde_json::from_value::<MaskKind>(json!("rg")).is_err());
    }
}

mod values {
    use super::*;

    #[test]
    fn json_values_are_mask_inputs() {
        assert_eq!(mask::currency(json!(123_456)), "1.234,56");
        assert_eq!(mask::cpf(json!("12345678901")), "123.456.789-01");
        assert_eq!(mask::phone(Value::Null), "");
    }

    #[test]
    fn unmasked_becomes_json() {
        assert_eq!(Value::from(Unmasked::Number(0.05)), json!(0.05));
        assert_eq!(Value::from(UnmaskKind::Phone.apply("")), Value::Null);
    }
}

mod objects {
    use super::*;

    const FIELDS: &[(&str, MaskKind)] = &[
        ("cpf", MaskKind::Cpf),
        ("birth", MaskKind::Date),
        ("city", MaskKind::Search),
    ];

    #[test]
    fn mask_then_unmask_payload() {
        let payload = json!({
            "cpf": "12345678901",
            "birth": "1990-01-31",
            "city": "São Paulo",
            "id": 42
        });

        let masked = mask_object(payload, FIELDS);
        assert_eq!(
            masked,
            json!({
                "cpf": "123.456.789-01",
                "birth": "31/01/1990",
                "city": "sao paulo",
                "id": 42
            })
        );

        let unmasked = unmask_object(masked.clone(), FIELDS);
        assert_eq!(unmasked["cpf"], json!("12345678901"));
        assert_eq!(unmasked["birth"], json!("1990-01-31"));
        assert_eq!(unmasked["city"], json!("sao paulo"));

        let persisted = unmasked_fields(&masked, FIELDS);
        assert_eq!(persisted.len(), 2);
        assert!(!persisted.contains_key("city"));
    }
}
