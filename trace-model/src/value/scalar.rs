use derive_visitor::Drive;
use serde::Serialize;
use serde::Serializer;
use std::borrow::Cow;

#[derive(Clone, Debug, Default, Drive, PartialEq, Serialize)]
pub struct NullValue {}

#[derive(Clone, Debug, Drive, PartialEq, Serialize)]
pub struct BoolValue {
  #[drive(skip)]
  pub value: bool,
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize)]
pub struct SIntValue {
  #[drive(skip)]
  pub value: i64,
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize)]
pub struct UIntValue {
  #[drive(skip)]
  pub value: u64,
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize)]
pub struct FloatValue {
  #[drive(skip)]
  pub value: f64,
}

// Captured strings need not be valid UTF-8.
#[derive(Clone, Debug, Drive, PartialEq, Serialize)]
pub struct StrValue {
  #[drive(skip)]
  #[serde(serialize_with = "serialize_lossy")]
  pub value: Vec<u8>,
}

impl StrValue {
  /// The string contents, with invalid UTF-8 sequences replaced.
  pub fn to_str_lossy(&self) -> Cow<'_, str> {
    String::from_utf8_lossy(&self.value)
  }
}

fn serialize_lossy<S: Serializer>(value: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
  serializer.serialize_str(&String::from_utf8_lossy(value))
}
