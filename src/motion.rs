//! Motion array handling: double-precision coercion and shape reporting.

use serde_json::{Number, Value};

use crate::error::ConvertError;

/// A motion trajectory array, semantically batch x joints x coordinate x
/// time, held as a nested JSON value with every numeric leaf a finite f64.
///
/// The shape is reported for operator visibility but never validated against
/// an expected schema; any nesting passes through unchanged.
#[derive(Debug, Clone)]
pub struct MotionArray {
    data: Value,
    shape: Vec<usize>,
}

impl MotionArray {
    /// Coerce a raw bundle value into a motion array. Rejects non-numeric
    /// and non-finite leaves so the output is always valid JSON.
    pub fn from_value(raw: &Value) -> Result<Self, ConvertError> {
        let data = coerce(raw)?;
        let shape = shape_of(&data);
        Ok(Self { data, shape })
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn into_value(self) -> Value {
        self.data
    }
}

fn coerce(value: &Value) -> Result<Value, ConvertError> {
    match value {
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(coerce(item)?);
            }
            Ok(Value::Array(out))
        }
        Value::Number(n) => {
            let f = n.as_f64().filter(|f| f.is_finite()).ok_or_else(|| {
                ConvertError::Encoding {
                    detail: format!("non-finite numeric leaf: {}", n),
                }
            })?;
            Number::from_f64(f)
                .map(Value::Number)
                .ok_or_else(|| ConvertError::Encoding {
                    detail: format!("non-finite numeric leaf: {}", n),
                })
        }
        other => Err(ConvertError::Encoding {
            detail: format!("non-numeric leaf of type {}", kind_of(other)),
        }),
    }
}

/// Shape by first-element descent: length of each nesting level.
fn shape_of(value: &Value) -> Vec<usize> {
    let mut shape = Vec::new();
    let mut cursor = value;
    while let Value::Array(items) = cursor {
        shape.push(items.len());
        match items.first() {
            Some(first) => cursor = first,
            None => break,
        }
    }
    shape
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
