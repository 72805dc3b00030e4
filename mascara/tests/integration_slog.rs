//! Tests for the `slog` feature: masked values reach the serializer, raw ones
//! never do.

#![cfg(all(feature = "slog", feature = "derive"))]

use std::{cell::RefCell, collections::HashMap, fmt};

use mascara::{
    MaskFields, MaskKind, Masked,
    slog::{MaskedJson, SlogMasked, SlogMaskedExt},
};
use serde_json::{Value as JsonValue, json};

#[derive(Clone, Debug, PartialEq)]
enum CapturedValue {
    Str(String),
    Serde(JsonValue),
}

struct CapturingSerializer {
    captured: RefCell<HashMap<String, CapturedValue>>,
}

impl CapturingSerializer {
    fn new() -> Self {
        Self {
            captured: RefCell::new(HashMap::new()),
        }
    }

    fn get(&self, key: &str) -> Option<CapturedValue> {
        self.captured.borrow().get(key).cloned()
    }
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &fmt::Arguments<'_>) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Str(val.to_string()));
        Ok(())
    }

    fn emit_str(&mut self, key: slog::Key, val: &str) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Str(val.to_string()));
        Ok(())
    }

    fn emit_serde(&mut self, key: slog::Key, val: &dyn slog::SerdeValue) -> slog::Result {
        let json = serde_json::to_value(val.as_serde()).unwrap_or(JsonValue::Null);
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Serde(json));
        Ok(())
    }
}

fn serialize_to_capture<V: slog::Value, S: slog::Serializer>(
    value: &V,
    key: &'static str,
    serializer: &mut S,
) {
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());
    value.serialize(&record, key, serializer).unwrap();
}

mod marker_trait {
    use super::*;

    #[test]
    fn wrappers_implement_slog_masked() {
        fn assert_slog_masked<T: SlogMasked + ?Sized>(_: &T) {}

        let phone = String::from("11987654321");
        assert_slog_masked(&phone.slog_masked(MaskKind::Phone));
        assert_slog_masked(&MaskedJson::new(json!({}), &[]));
    }
}

mod scalars {
    use super::*;

    #[test]
    fn emits_masked_text() {
        let cpf = "12345678901";
        let mut serializer = CapturingSerializer::new();
        serialize_to_capture(&cpf.slog_masked(MaskKind::Cpf), "cpf", &mut serializer);
        assert_eq!(
            serializer.get("cpf"),
            Some(CapturedValue::Str("123.456.789-01".into()))
        );
    }

    #[test]
    fn empty_inputs_emit_empty_text() {
        let mut serializer = CapturingSerializer::new();
        serialize_to_capture(
            &None::<String>.slog_masked(MaskKind::Phone),
            "phone",
            &mut serializer,
        );
        assert_eq!(serializer.get("phone"), Some(CapturedValue::Str(String::new())));
    }
}

mod payloads {
    use super::*;

    #[test]
    fn emits_masked_json_object() {
        let payload = json!({"cpf": "12345678901", "total": "123456", "id": 7});
        let masked = MaskedJson::new(
            payload,
            &[("cpf", MaskKind::Cpf), ("total", MaskKind::Currency)],
        );

        let mut serializer = CapturingSerializer::new();
        serialize_to_capture(&masked, "order", &mut serializer);

        match serializer.get("order") {
            Some(CapturedValue::Serde(json)) => {
                assert_eq!(json["cpf"], "123.456.789-01");
                assert_eq!(json["total"], "1.234,56");
                assert_eq!(json["id"], 7);
            }
            other => panic!("expected Serde value for 'order', got {other:?}"),
        }
    }

    #[test]
    fn masking_already_masked_fields_is_stable() {
        #[derive(Masked)]
        struct Contact {
            #[mask(phone)]
            phone: String,
        }

        let contact = Contact {
            phone: "1131234567".into(),
        }
        .mask_fields();

        let mut serializer = CapturingSerializer::new();
        serialize_to_capture(
            &contact.phone.slog_masked(MaskKind::Phone),
            "phone",
            &mut serializer,
        );
        assert_eq!(
            serializer.get("phone"),
            Some(CapturedValue::Str("(11) 3123-4567".into()))
        );
    }
}
