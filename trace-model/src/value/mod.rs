pub mod compound;
pub mod scalar;

use compound::{ArrayValue, BlobValue, ConstValue};
use derive_more::derive::{From, TryInto};
use derive_visitor::Drive;
use scalar::{BoolValue, FloatValue, NullValue, SIntValue, StrValue, UIntValue};
use serde::Serialize;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::sync::Arc;

/// A captured value. The set of kinds is closed; consumers match on it (or implement
/// [`crate::visit::ValueVisitor`]) and must handle every kind.
#[derive(Clone, Debug, Drive, From, PartialEq, Serialize, TryInto)]
#[serde(tag = "$t")]
pub enum Value {
  Null(NullValue),
  Bool(BoolValue),
  SInt(SIntValue),
  UInt(UIntValue),
  Float(FloatValue),
  Str(StrValue),
  Const(ConstValue),
  Array(ArrayValue),
  Blob(BlobValue),
}

/// The shared absent value. Lookups that find nothing return a reference to this.
pub static NULL: Value = Value::Null(NullValue {});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
  Null,
  Bool,
  SInt,
  UInt,
  Float,
  Str,
  Const,
  Array,
  Blob,
}

impl ValueKind {
  pub fn name(self) -> &'static str {
    match self {
      ValueKind::Null => "null",
      ValueKind::Bool => "bool",
      ValueKind::SInt => "signed integer",
      ValueKind::UInt => "unsigned integer",
      ValueKind::Float => "float",
      ValueKind::Str => "string",
      ValueKind::Const => "constant",
      ValueKind::Array => "array",
      ValueKind::Blob => "blob",
    }
  }
}

impl Display for ValueKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl Value {
  pub fn constant(name: impl Into<String>, value: Value) -> Value {
    Value::Const(ConstValue {
      name: name.into(),
      value: Box::new(value),
    })
  }

  pub fn array(values: impl Into<Vec<Value>>) -> Value {
    Value::Array(ArrayValue {
      values: values.into(),
    })
  }

  /// Wraps a single value as a pointer to one element.
  pub fn reference(value: Value) -> Value {
    Value::array(vec![value])
  }

  pub fn string(value: impl Into<Vec<u8>>) -> Value {
    Value::Str(StrValue {
      value: value.into(),
    })
  }

  pub fn blob(buf: impl Into<Arc<[u8]>>) -> Value {
    Value::Blob(BlobValue::new(buf))
  }

  pub fn kind(&self) -> ValueKind {
    match self {
      Value::Null(_) => ValueKind::Null,
      Value::Bool(_) => ValueKind::Bool,
      Value::SInt(_) => ValueKind::SInt,
      Value::UInt(_) => ValueKind::UInt,
      Value::Float(_) => ValueKind::Float,
      Value::Str(_) => ValueKind::Str,
      Value::Const(_) => ValueKind::Const,
      Value::Array(_) => ValueKind::Array,
      Value::Blob(_) => ValueKind::Blob,
    }
  }

  pub fn is_null(&self) -> bool {
    matches!(self, Value::Null(_))
  }

  /// Strips every layer of [`ConstValue`] and returns the value underneath.
  pub fn unwrap_const(&self) -> &Value {
    let mut value = self;
    while let Value::Const(c) = value {
      value = &c.value;
    }
    value
  }

  /// The array element at `index`, looking through constants. Anything that isn't an in-range
  /// array element yields [`NULL`].
  pub fn element_at(&self, index: usize) -> &Value {
    match self.unwrap_const() {
      Value::Array(array) => match array.get(index) {
        Some(value) => value,
        None => {
          tracing::trace!(
            target: "trace_model::value",
            index,
            len = array.len(),
            "element index out of range"
          );
          &NULL
        }
      },
      other => {
        tracing::trace!(
          target: "trace_model::value",
          index,
          kind = %other.kind(),
          "element lookup on non-array value"
        );
        &NULL
      }
    }
  }
}

impl Default for Value {
  fn default() -> Self {
    Value::Null(NullValue {})
  }
}

impl From<bool> for Value {
  fn from(value: bool) -> Self {
    Value::Bool(BoolValue { value })
  }
}

impl From<i64> for Value {
  fn from(value: i64) -> Self {
    Value::SInt(SIntValue { value })
  }
}

impl From<u64> for Value {
  fn from(value: u64) -> Self {
    Value::UInt(UIntValue { value })
  }
}

impl From<f64> for Value {
  fn from(value: f64) -> Self {
    Value::Float(FloatValue { value })
  }
}

impl From<String> for Value {
  fn from(value: String) -> Self {
    Value::string(value)
  }
}

impl From<&str> for Value {
  fn from(value: &str) -> Self {
    Value::string(value)
  }
}

impl From<Vec<Value>> for Value {
  fn from(values: Vec<Value>) -> Self {
    Value::array(values)
  }
}
