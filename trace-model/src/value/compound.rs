use derive_visitor::Drive;
use serde::ser::SerializeStruct;
use serde::Serialize;
use serde::Serializer;
use std::fmt;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::slice;
use std::sync::Arc;

use super::Value;

/// A named constant or enumerator. The wrapped value is what the name stands for.
#[derive(Clone, Debug, Drive, PartialEq, Serialize)]
pub struct ConstValue {
  #[drive(skip)]
  pub name: String,
  pub value: Box<Value>,
}

/// Elements behind a pointer. A single element denotes a scalar passed by reference.
#[derive(Clone, Debug, Default, Drive, PartialEq, Serialize)]
pub struct ArrayValue {
  pub values: Vec<Value>,
}

impl ArrayValue {
  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  pub fn get(&self, index: usize) -> Option<&Value> {
    self.values.get(index)
  }

  pub fn iter(&self) -> slice::Iter<'_, Value> {
    self.values.iter()
  }
}

impl<'a> IntoIterator for &'a ArrayValue {
  type Item = &'a Value;
  type IntoIter = slice::Iter<'a, Value>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

/// An opaque buffer. The bytes are shared with whoever captured them; this layer never copies or inspects them.
#[derive(Clone, Drive, PartialEq)]
pub struct BlobValue {
  #[drive(skip)]
  pub buf: Arc<[u8]>,
}

impl BlobValue {
  pub fn new(buf: impl Into<Arc<[u8]>>) -> BlobValue {
    BlobValue { buf: buf.into() }
  }

  pub fn size(&self) -> usize {
    self.buf.len()
  }

  pub fn as_bytes(&self) -> &[u8] {
    &self.buf
  }
}

impl Debug for BlobValue {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_struct("BlobValue").field("size", &self.size()).finish()
  }
}

impl Serialize for BlobValue {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut s = serializer.serialize_struct("BlobValue", 1)?;
    s.serialize_field("size", &self.size())?;
    s.end()
  }
}
