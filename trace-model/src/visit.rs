use crate::value::compound::{ArrayValue, BlobValue, ConstValue};
use crate::value::scalar::{BoolValue, FloatValue, NullValue, SIntValue, StrValue, UIntValue};
use crate::value::Value;

/// Kind-specific handling of a single value node.
///
/// There are no default methods: adding a kind to [`Value`] breaks every implementor until it
/// handles the new kind. Implementors recurse into children themselves, typically by calling
/// [`Value::dispatch`] on them. For a generic enter/exit walk over a whole tree, use
/// `derive_visitor::Drive` instead.
pub trait ValueVisitor {
  type Output;

  fn visit_null(&mut self, node: &NullValue) -> Self::Output;
  fn visit_bool(&mut self, node: &BoolValue) -> Self::Output;
  fn visit_sint(&mut self, node: &SIntValue) -> Self::Output;
  fn visit_uint(&mut self, node: &UIntValue) -> Self::Output;
  fn visit_float(&mut self, node: &FloatValue) -> Self::Output;
  fn visit_str(&mut self, node: &StrValue) -> Self::Output;
  fn visit_const(&mut self, node: &ConstValue) -> Self::Output;
  fn visit_array(&mut self, node: &ArrayValue) -> Self::Output;
  fn visit_blob(&mut self, node: &BlobValue) -> Self::Output;
}

impl Value {
  /// Routes this value to the visitor method for its kind.
  pub fn dispatch<V: ValueVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
    match self {
      Value::Null(node) => visitor.visit_null(node),
      Value::Bool(node) => visitor.visit_bool(node),
      Value::SInt(node) => visitor.visit_sint(node),
      Value::UInt(node) => visitor.visit_uint(node),
      Value::Float(node) => visitor.visit_float(node),
      Value::Str(node) => visitor.visit_str(node),
      Value::Const(node) => visitor.visit_const(node),
      Value::Array(node) => visitor.visit_array(node),
      Value::Blob(node) => visitor.visit_blob(node),
    }
  }
}
