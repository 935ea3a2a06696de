//! Typed extraction of primitives from a value tree.
//!
//! Consumers know the shape of the arguments they read from the API signature the trace was
//! captured against, so asking for the wrong kind is a bug in the consumer. The plain accessors
//! panic on a mismatch; the `try_` forms return a [`CoerceError`] for callers that want to
//! probe. Every accessor looks through [`Value::Const`] first.

use crate::error::{CoerceError, CoerceErrorType, CoerceResult};
use crate::value::Value;

#[track_caller]
fn or_panic<T>(res: CoerceResult<T>) -> T {
  match res {
    Ok(v) => v,
    Err(err) => {
      tracing::error!(
        target: "trace_model::coerce",
        code = err.typ.code(),
        actual = %err.actual,
        "{}",
        err
      );
      panic!("{:?}", err)
    }
  }
}

impl Value {
  /// Signed integers as-is; unsigned integers reinterpreted bit for bit.
  pub fn try_as_signed_integer(&self) -> CoerceResult<i64> {
    match self.unwrap_const() {
      Value::SInt(v) => Ok(v.value),
      Value::UInt(v) => Ok(v.value as i64),
      other => Err(CoerceError::new(CoerceErrorType::SignedInteger, other.kind())),
    }
  }

  pub fn try_as_unsigned_integer(&self) -> CoerceResult<u64> {
    match self.unwrap_const() {
      Value::UInt(v) => Ok(v.value),
      other => Err(CoerceError::new(CoerceErrorType::UnsignedInteger, other.kind())),
    }
  }

  pub fn try_as_double(&self) -> CoerceResult<f64> {
    match self.unwrap_const() {
      Value::Float(v) => Ok(v.value),
      other => Err(CoerceError::new(CoerceErrorType::Double, other.kind())),
    }
  }

  /// A blob's bytes, or `None` for a null pointer.
  pub fn try_as_buffer(&self) -> CoerceResult<Option<&[u8]>> {
    match self.unwrap_const() {
      Value::Blob(blob) => Ok(Some(blob.as_bytes())),
      Value::Null(_) => Ok(None),
      other => Err(CoerceError::new(CoerceErrorType::Buffer, other.kind())),
    }
  }

  #[track_caller]
  pub fn as_signed_integer(&self) -> i64 {
    or_panic(self.try_as_signed_integer())
  }

  #[track_caller]
  pub fn as_unsigned_integer(&self) -> u64 {
    or_panic(self.try_as_unsigned_integer())
  }

  #[track_caller]
  pub fn as_double(&self) -> f64 {
    or_panic(self.try_as_double())
  }

  #[track_caller]
  pub fn as_buffer(&self) -> Option<&[u8]> {
    or_panic(self.try_as_buffer())
  }
}

impl TryFrom<&Value> for i64 {
  type Error = CoerceError;

  fn try_from(value: &Value) -> Result<Self, Self::Error> {
    value.try_as_signed_integer()
  }
}

impl TryFrom<&Value> for u64 {
  type Error = CoerceError;

  fn try_from(value: &Value) -> Result<Self, Self::Error> {
    value.try_as_unsigned_integer()
  }
}

impl TryFrom<&Value> for f64 {
  type Error = CoerceError;

  fn try_from(value: &Value) -> Result<Self, Self::Error> {
    value.try_as_double()
  }
}

#[cfg(test)]
mod tests {
  use crate::error::CoerceErrorType;
  use crate::value::{Value, ValueKind, NULL};

  #[test]
  fn unsigned_reinterprets_as_signed() {
    let v = Value::from(u64::MAX);
    assert_eq!(v.as_unsigned_integer(), u64::MAX);
    assert_eq!(v.as_signed_integer(), -1);
    assert_eq!(Value::from(42u64).as_signed_integer(), 42);
  }

  #[test]
  fn signed_is_not_unsigned() {
    let err = Value::from(-3i64).try_as_unsigned_integer().unwrap_err();
    assert_eq!(err.typ, CoerceErrorType::UnsignedInteger);
    assert_eq!(err.actual, ValueKind::SInt);
  }

  #[test]
  #[should_panic(expected = "expected an unsigned integer, found signed integer")]
  fn as_unsigned_integer_panics_on_signed() {
    Value::from(5i64).as_unsigned_integer();
  }

  #[test]
  #[should_panic(expected = "TM0001")]
  fn as_signed_integer_panics_on_null() {
    NULL.as_signed_integer();
  }

  #[test]
  #[should_panic(expected = "expected a float, found unsigned integer")]
  fn as_double_panics_on_integer() {
    Value::from(1u64).as_double();
  }

  #[test]
  fn constants_are_unwrapped() {
    let v = Value::constant("GL_TRUE", Value::from(1u64));
    assert_eq!(v.as_unsigned_integer(), 1);
    assert_eq!(v.as_signed_integer(), 1);
    let f = Value::constant("PI", Value::from(3.5f64));
    assert_eq!(f.as_double(), 3.5);
  }

  #[test]
  fn buffer_from_blob_and_null() {
    let blob = Value::blob(vec![1u8, 2, 3]);
    assert_eq!(blob.as_buffer(), Some(&[1u8, 2, 3][..]));
    assert_eq!(NULL.as_buffer(), None);
    let err = Value::from("text").try_as_buffer().unwrap_err();
    assert_eq!(err.actual, ValueKind::Str);
  }

  #[test]
  fn try_from_delegates() {
    let v = Value::from(7u64);
    assert_eq!(i64::try_from(&v), Ok(7));
    assert_eq!(u64::try_from(&v), Ok(7));
    assert!(f64::try_from(&v).is_err());
  }
}
