use derive_visitor::Drive;
use serde::Serialize;

use crate::value::{Value, NULL};

#[derive(Clone, Debug, Drive, PartialEq, Serialize)]
pub struct Arg {
  #[drive(skip)]
  pub name: String,
  pub value: Value,
}

/// One captured invocation: its name, the arguments in call-site order, and the return value if
/// the function returns one.
///
/// A call is assembled by its producer and then only read. Argument names are not required to be
/// unique; lookups by name resolve to the first match.
#[derive(Clone, Debug, Drive, PartialEq, Serialize)]
pub struct Call {
  #[drive(skip)]
  name: String,
  args: Vec<Arg>,
  ret: Option<Value>,
}

impl Call {
  pub fn new(name: impl Into<String>) -> Call {
    Call {
      name: name.into(),
      args: Vec::new(),
      ret: None,
    }
  }

  pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Call {
    self.push_arg(name, value);
    self
  }

  pub fn with_ret(mut self, value: impl Into<Value>) -> Call {
    self.set_ret(value);
    self
  }

  pub fn push_arg(&mut self, name: impl Into<String>, value: impl Into<Value>) {
    self.args.push(Arg {
      name: name.into(),
      value: value.into(),
    });
  }

  pub fn set_ret(&mut self, value: impl Into<Value>) {
    self.ret = Some(value.into());
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn args(&self) -> &[Arg] {
    &self.args
  }

  pub fn ret(&self) -> Option<&Value> {
    self.ret.as_ref()
  }

  /// The first argument called `name`, or [`NULL`] if there is none.
  pub fn arg(&self, name: &str) -> &Value {
    match self.args.iter().find(|a| a.name == name) {
      Some(arg) => &arg.value,
      None => {
        tracing::trace!(
          target: "trace_model::call",
          call = %self.name,
          arg = name,
          "argument not found"
        );
        &NULL
      }
    }
  }

  /// The argument at position `index`, or [`NULL`] past the end.
  pub fn arg_at(&self, index: usize) -> &Value {
    self.args.get(index).map(|a| &a.value).unwrap_or(&NULL)
  }
}
