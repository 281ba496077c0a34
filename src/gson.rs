/*
gson::Value is a small mirror of serde_json::Value for resolver arguments,
with added support for the concept of "Absent" so resolvers can differentiate
between Null literals and arguments the user did not provide. Pagination
arguments are scalars, so compound shapes are intentionally unsupported.
*/

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Absent,
    Null,
    Number(Number),
    String(String),
    Boolean(bool),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Value {
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }
}

pub fn json_to_gson(val: &serde_json::Value) -> Result<Value, String> {
    use serde_json::Value as JsonValue;

    let v = match val {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(x) => Value::Boolean(x.to_owned()),
        JsonValue::String(x) => Value::String(x.to_owned()),
        JsonValue::Number(x) => match x.as_i64() {
            Some(num) => Value::Number(Number::Integer(num)),
            None => {
                let f_val: f64 = x
                    .as_f64()
                    .ok_or("Failed to handle numeric user input".to_string())?;
                Value::Number(Number::Float(f_val))
            }
        },
        JsonValue::Array(_) | JsonValue::Object(_) => {
            return Err("Compound values are not valid pagination arguments".to_string())
        }
    };
    Ok(v)
}

pub fn gson_to_json(val: &Value) -> Result<serde_json::Value, String> {
    use serde_json::Value as JsonValue;

    let v = match val {
        Value::Absent => {
            return Err(
                "Encountered `Absent` value while transforming between GraphQL \
                 intermediate object notation and JSON"
                    .to_string(),
            )
        }
        Value::Null => JsonValue::Null,
        Value::Boolean(x) => JsonValue::Bool(x.to_owned()),
        Value::String(x) => JsonValue::String(x.to_owned()),
        Value::Number(x) => match x {
            Number::Integer(y) => serde_json::json!(y),
            Number::Float(y) => serde_json::json!(y),
        },
    };
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_is_distinct_from_null_test() {
        assert!(Value::Absent.is_absent());
        assert!(!Value::Null.is_absent());
        assert_ne!(Value::Absent, Value::Null);
    }

    #[test]
    fn json_scalars_round_trip_test() {
        for j in [json!(null), json!(5), json!(2.5), json!("x"), json!(true)] {
            let g = json_to_gson(&j).unwrap();
            assert_eq!(gson_to_json(&g).unwrap(), j);
        }
    }

    #[test]
    fn compound_json_is_rejected_test() {
        assert!(json_to_gson(&json!([1, 2])).is_err());
        assert!(json_to_gson(&json!({"a": 1})).is_err());
    }

    #[test]
    fn absent_does_not_serialize_test() {
        assert!(gson_to_json(&Value::Absent).is_err());
    }
}
