use crate::value::ValueKind;
use core::fmt;
use core::fmt::Debug;
use core::fmt::Formatter;
use std::error::Error;
use std::fmt::Display;

/// The primitive shape a consumer asked a value for.
///
/// Diagnostic codes (prefix `TM`) are assigned per variant and are stable:
/// - `TM0001`: [`CoerceErrorType::SignedInteger`]
/// - `TM0002`: [`CoerceErrorType::UnsignedInteger`]
/// - `TM0003`: [`CoerceErrorType::Double`]
/// - `TM0004`: [`CoerceErrorType::Buffer`]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum CoerceErrorType {
  SignedInteger,
  UnsignedInteger,
  Double,
  Buffer,
}

impl CoerceErrorType {
  pub fn code(&self) -> &'static str {
    match self {
      CoerceErrorType::SignedInteger => "TM0001",
      CoerceErrorType::UnsignedInteger => "TM0002",
      CoerceErrorType::Double => "TM0003",
      CoerceErrorType::Buffer => "TM0004",
    }
  }

  /// Human-readable message describing the mismatch.
  pub fn message(&self, actual: ValueKind) -> String {
    let expected = match self {
      CoerceErrorType::SignedInteger => "a signed or unsigned integer",
      CoerceErrorType::UnsignedInteger => "an unsigned integer",
      CoerceErrorType::Double => "a float",
      CoerceErrorType::Buffer => "a blob or null",
    };
    format!("expected {}, found {}", expected, actual)
  }
}

/// A value did not have the kind a consumer coerced it to. `actual` is the kind after any
/// constants were unwrapped.
#[derive(Clone, PartialEq, Eq)]
pub struct CoerceError {
  pub typ: CoerceErrorType,
  pub actual: ValueKind,
}

impl CoerceError {
  pub fn new(typ: CoerceErrorType, actual: ValueKind) -> CoerceError {
    CoerceError { typ, actual }
  }
}

impl Debug for CoerceError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{} [{}]", self, self.typ.code())
  }
}

impl Display for CoerceError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(&self.typ.message(self.actual))
  }
}

impl Error for CoerceError {}

pub type CoerceResult<T> = Result<T, CoerceError>;
