//! `serde_json::Value` support.
//!
//! JSON strings and numbers are valid mask inputs; `null` and `false` are
//! empty. [`mask_object`] and [`unmask_object`] apply table entries to the
//! top-level fields of a JSON object, which is the common shape of API payloads.

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::{
    input::{MaskInput, Raw},
    kind::{MaskKind, Unmasked},
};

impl MaskInput for Value {
    fn to_raw(&self) -> Raw<'_> {
        match self {
            Value::Null | Value::Bool(false) => Raw::Empty,
            Value::Bool(true) => Raw::Text(Cow::Borrowed("true")),
            Value::String(text) => Raw::text(text.as_str()),
            Value::Number(number) => {
                if let Some(value) = number.as_i64() {
                    Raw::integer(i128::from(value))
                } else if let Some(value) = number.as_u64() {
                    Raw::integer(i128::from(value))
                } else {
                    number.as_f64().map_or(Raw::Empty, Raw::float)
                }
            }
            Value::Array(_) | Value::Object(_) => Raw::Text(Cow::Owned(self.to_string())),
        }
    }
}

impl From<Unmasked> for Value {
    fn from(unmasked: Unmasked) -> Self {
        match unmasked {
            Unmasked::Text(text) => Value::String(text),
            Unmasked::Number(number) => {
                serde_json::Number::from_f64(number).map_or(Value::Null, Value::Number)
            }
            Unmasked::Absent => Value::Null,
        }
    }
}

/// Masks the listed top-level fields of a JSON object.
///
/// Missing fields are skipped. Non-object values are returned unchanged.
///
/// ```rust
/// use mascara::{MaskKind, json::mask_object};
/// use serde_json::json;
///
/// let payload = json!({"cpf": "12345678901", "total": 123456});
/// let masked = mask_object(payload, &[("cpf", MaskKind::Cpf), ("total", MaskKind::Currency)]);
/// assert_eq!(masked, json!({"cpf": "123.456.789-01", "total": "1.234,56"}));
/// ```
pub fn mask_object(value: Value, fields: &[(&str, MaskKind)]) -> Value {
    map_fields(value, fields, |kind, field| Value::String(kind.apply(field)))
}

/// Unmasks the listed top-level fields of a JSON object.
///
/// Fields whose kind has no inverse are left unchanged. Absent results become
/// `null`.
pub fn unmask_object(value: Value, fields: &[(&str, MaskKind)]) -> Value {
    map_fields(value, fields, |kind, field| match kind.unmask_kind() {
        Some(inverse) => inverse.apply(field).into(),
        None => field.clone(),
    })
}

fn map_fields<F>(value: Value, fields: &[(&str, MaskKind)], mut map: F) -> Value
where
    F: FnMut(MaskKind, &Value) -> Value,
{
    let mut object = match value {
        Value::Object(object) => object,
        other => return other,
    };
    for (name, kind) in fields {
        if let Some(field) = object.get_mut(*name) {
            let mapped = map(*kind, field);
            *field = mapped;
        }
    }
    Value::Object(object)
}

/// Collects the fields of a JSON object that the `unmask` table canonicalized,
/// keyed by name. Useful for building persistence payloads.
pub fn unmasked_fields(value: &Value, fields: &[(&str, MaskKind)]) -> Map<String, Value> {
    let mut collected = Map::new();
    let Value::Object(object) = value else {
        return collected;
    };
    for (name, kind) in fields {
        if let (Some(field), Some(inverse)) = (object.get(*name), kind.unmask_kind()) {
            collected.insert((*name).to_string(), inverse.apply(field).into());
        }
    }
    collected
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn json_scalars_are_inputs() {
        assert!(Value::Null.to_raw().is_empty());
        assert!(json!(false).to_raw().is_empty());
        assert!(json!(0).to_raw().is_empty());
        assert_eq!(json!("abc").to_raw().as_text(), "abc");
        assert_eq!(json!(12.5).to_raw().as_text(), "12.5");
    }

    #[test]
    fn unmasked_converts_to_json() {
        assert_eq!(Value::from(Unmasked::Text("x".into())), json!("x"));
        assert_eq!(Value::from(Unmasked::Number(1234.56)), json!(1234.56));
        assert_eq!(Value::from(Unmasked::Absent), Value::Null);
    }

    #[test]
    fn objects_mask_listed_fields() {
        let payload = json!({"phone": "11987654321", "other": "keep"});
        let fields = [("phone", MaskKind::Phone), ("missing", MaskKind::Cpf)];
        let masked = mask_object(payload, &fields);
        assert_eq!(masked, json!({"phone": "(11) 98765-4321", "other": "keep"}));
    }

    #[test]
    fn non_objects_pass_through() {
        assert_eq!(mask_object(json!([1, 2]), &[("a", MaskKind::Cpf)]), json!([1, 2]));
    }

    #[test]
    fn objects_unmask_listed_fields() {
        let payload = json!({
            "phone": "(11) 98765-4321",
            "total": "1.234,56",
            "name": "Maria da Silva",
            "empty": ""
        });
        let fields = [
            ("phone", MaskKind::Phone),
            ("total", MaskKind::Currency),
            ("name", MaskKind::Name),
            ("empty", MaskKind::Phone),
        ];
        assert_eq!(
            unmask_object(payload.clone(), &fields),
            json!({
                "phone": "+5511987654321",
                "total": 1234.56,
                "name": "Maria da Silva",
                "empty": null
            })
        );

        let collected = unmasked_fields(&payload, &fields);
        assert_eq!(collected.len(), 3);
        assert_eq!(collected["total"], json!(1234.56));
    }
}
