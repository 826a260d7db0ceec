//! Conversions between literals and `serde_json::Value`
//!
//! JSON has no tuples and only string object keys, so `Tuple` becomes an
//! array and dicts with non-string keys are rejected.

use serde_json::{Map, Number, Value};

use super::errors::LiteralError;
use super::value::Literal;

impl TryFrom<Value> for Literal {
    type Error = LiteralError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::Null => Literal::None,
            Value::Bool(b) => Literal::Bool(b),
            Value::Number(n) => number_to_literal(&n)?,
            Value::String(s) => Literal::Str(s),
            Value::Array(items) => Literal::List(
                items
                    .into_iter()
                    .map(Literal::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Object(map) => Literal::Dict(
                map.into_iter()
                    .map(|(k, v)| -> Result<(Literal, Literal), LiteralError> {
                        Ok((Literal::Str(k), Literal::try_from(v)?))
                    })
                    .collect::<Result<_, _>>()?,
            ),
        })
    }
}

fn number_to_literal(n: &Number) -> Result<Literal, LiteralError> {
    if let Some(i) = n.as_i64() {
        Ok(Literal::Int(i))
    } else if n.is_u64() {
        Err(LiteralError::NumberOutOfRange(n.to_string()))
    } else {
        n.as_f64()
            .map(Literal::Float)
            .ok_or_else(|| LiteralError::NumberOutOfRange(n.to_string()))
    }
}

impl TryFrom<Literal> for Value {
    type Error = LiteralError;

    fn try_from(literal: Literal) -> Result<Self, Self::Error> {
        Ok(match literal {
            Literal::None => Value::Null,
            Literal::Bool(b) => Value::Bool(b),
            Literal::Int(i) => Value::Number(Number::from(i)),
            Literal::Float(f) => Number::from_f64(f)
                .map(Value::Number)
                .ok_or(LiteralError::NonFiniteFloat(f))?,
            Literal::Str(s) => Value::String(s),
            Literal::List(items) | Literal::Tuple(items) => Value::Array(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Literal::Dict(entries) => {
                let mut map = Map::new();
                for (key, value) in entries {
                    let key = match key {
                        Literal::Str(s) => s,
                        other => return Err(LiteralError::NonStringKey(other.to_string())),
                    };
                    map.insert(key, Value::try_from(value)?);
                }
                Value::Object(map)
            }
        })
    }
}
