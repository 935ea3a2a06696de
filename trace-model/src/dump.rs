//! Canonical text rendering of values and calls, for logs and human inspection.
//!
//! The format is not meant to be parsed back:
//! - null is `NULL`, booleans `true`/`false`, numbers in decimal;
//! - strings are double quoted without escaping, except bytes that are not valid UTF-8, which
//!   render as `\xNN`;
//! - floats use exponent form below `1e-5` and from `1e16` up;
//! - constants render as their name only;
//! - a one-element array is `&elem`, any other array `{a, b, c}`;
//! - blobs are `... <size>`, never their contents;
//! - a call is `name(arg = value, ...) = ret` followed by a newline.

use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::call::Call;
use crate::value::compound::{ArrayValue, BlobValue, ConstValue};
use crate::value::scalar::{BoolValue, FloatValue, NullValue, SIntValue, StrValue, UIntValue};
use crate::value::Value;
use crate::visit::ValueVisitor;

// Magnitudes outside this range render in exponent form.
const EXP_LOWER: f64 = 1e-5;
const EXP_UPPER: f64 = 1e16;

/// Options for configuring output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DumpOptions {
  /// Render at most this many elements of an array before eliding the rest with `...`.
  /// `None` renders every element, which is the canonical form.
  pub max_array_elements: Option<usize>,
}

pub struct Dumper<'a, W: fmt::Write> {
  out: &'a mut W,
  opts: DumpOptions,
}

impl<'a, W: fmt::Write> Dumper<'a, W> {
  pub fn new(out: &'a mut W) -> Self {
    Self::with_options(out, DumpOptions::default())
  }

  pub fn with_options(out: &'a mut W, opts: DumpOptions) -> Self {
    Self { out, opts }
  }

  pub fn dump_value(&mut self, value: &Value) -> fmt::Result {
    value.dispatch(self)
  }

  pub fn dump_call(&mut self, call: &Call) -> fmt::Result {
    let span = tracing::trace_span!(target: "trace_model::dump", "dump_call", call = call.name());
    let _enter = span.enter();

    write!(self.out, "{}(", call.name())?;
    let mut sep = "";
    for arg in call.args() {
      write!(self.out, "{}{} = ", sep, arg.name)?;
      self.dump_value(&arg.value)?;
      sep = ", ";
    }
    self.out.write_str(")")?;
    if let Some(ret) = call.ret() {
      self.out.write_str(" = ")?;
      self.dump_value(ret)?;
    }
    self.out.write_str("\n")
  }
}

impl<'a, W: fmt::Write> ValueVisitor for Dumper<'a, W> {
  type Output = fmt::Result;

  fn visit_null(&mut self, _node: &NullValue) -> fmt::Result {
    self.out.write_str("NULL")
  }

  fn visit_bool(&mut self, node: &BoolValue) -> fmt::Result {
    self.out.write_str(if node.value { "true" } else { "false" })
  }

  fn visit_sint(&mut self, node: &SIntValue) -> fmt::Result {
    write!(self.out, "{}", node.value)
  }

  fn visit_uint(&mut self, node: &UIntValue) -> fmt::Result {
    write!(self.out, "{}", node.value)
  }

  fn visit_float(&mut self, node: &FloatValue) -> fmt::Result {
    let v = node.value;
    let abs = v.abs();
    if abs.is_finite() && abs != 0.0 && !(EXP_LOWER..EXP_UPPER).contains(&abs) {
      write!(self.out, "{:e}", v)
    } else {
      write!(self.out, "{}", v)
    }
  }

  fn visit_str(&mut self, node: &StrValue) -> fmt::Result {
    self.out.write_str("\"")?;
    let mut rest = node.value.as_slice();
    loop {
      match std::str::from_utf8(rest) {
        Ok(text) => {
          self.out.write_str(text)?;
          break;
        }
        Err(err) => {
          let (valid, after) = rest.split_at(err.valid_up_to());
          // Prefix was just validated.
          self.out.write_str(std::str::from_utf8(valid).map_err(|_| fmt::Error)?)?;
          let bad = err.error_len().unwrap_or(after.len());
          for b in &after[..bad] {
            write!(self.out, "\\x{:02x}", b)?;
          }
          rest = &after[bad..];
        }
      }
    }
    self.out.write_str("\"")
  }

  fn visit_const(&mut self, node: &ConstValue) -> fmt::Result {
    self.out.write_str(&node.name)
  }

  fn visit_array(&mut self, node: &ArrayValue) -> fmt::Result {
    if node.len() == 1 {
      self.out.write_str("&")?;
      return self.dump_value(&node.values[0]);
    }

    let shown = self
      .opts
      .max_array_elements
      .map_or(node.len(), |max| max.min(node.len()));
    self.out.write_str("{")?;
    let mut sep = "";
    for value in &node.values[..shown] {
      self.out.write_str(sep)?;
      self.dump_value(value)?;
      sep = ", ";
    }
    if shown < node.len() {
      write!(self.out, "{}...", sep)?;
    }
    self.out.write_str("}")
  }

  fn visit_blob(&mut self, node: &BlobValue) -> fmt::Result {
    write!(self.out, "... {}", node.size())
  }
}

impl Display for Value {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    Dumper::new(f).dump_value(self)
  }
}

impl Display for Call {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    Dumper::new(f).dump_call(self)
  }
}

pub fn dump_value_with_options(value: &Value, opts: DumpOptions) -> String {
  let mut out = String::new();
  // Writing into a String cannot fail.
  let _ = Dumper::with_options(&mut out, opts).dump_value(value);
  out
}

pub fn dump_call_with_options(call: &Call, opts: DumpOptions) -> String {
  let mut out = String::new();
  let _ = Dumper::with_options(&mut out, opts).dump_call(call);
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  fn dump(value: &Value) -> String {
    dump_value_with_options(value, DumpOptions::default())
  }

  #[test]
  fn dumps_scalars() {
    assert_eq!(dump(&Value::default()), "NULL");
    assert_eq!(dump(&Value::from(true)), "true");
    assert_eq!(dump(&Value::from(false)), "false");
    assert_eq!(dump(&Value::from(-17i64)), "-17");
    assert_eq!(dump(&Value::from(u64::MAX)), "18446744073709551615");
    assert_eq!(dump(&Value::from(0.5f64)), "0.5");
    assert_eq!(dump(&Value::from("say \"hi\"")), "\"say \"hi\"\"");
  }

  #[test]
  fn dumps_arrays_by_length() {
    assert_eq!(dump(&Value::array(vec![Value::from(5i64)])), "&5");
    assert_eq!(dump(&Value::array(Vec::new())), "{}");
    assert_eq!(
      dump(&Value::array(vec![Value::from(1i64), Value::from(2i64)])),
      "{1, 2}"
    );
    let nested = Value::reference(Value::array(vec![
      Value::from(1u64),
      Value::reference(Value::from("x")),
    ]));
    assert_eq!(dump(&nested), "&{1, &\"x\"}");
  }

  #[test]
  fn dumps_const_name_only() {
    let v = Value::constant("GL_TRUE", Value::from(1u64));
    assert_eq!(dump(&v), "GL_TRUE");
  }

  #[test]
  fn dumps_blob_size_only() {
    assert_eq!(dump(&Value::blob(vec![0xffu8; 1024])), "... 1024");
    assert_eq!(dump(&Value::blob(Vec::<u8>::new())), "... 0");
  }

  #[test]
  fn truncates_long_arrays_when_asked() {
    let v = Value::array((0..5u64).map(Value::from).collect::<Vec<_>>());
    let opts = DumpOptions {
      max_array_elements: Some(2),
    };
    assert_eq!(dump_value_with_options(&v, opts), "{0, 1, ...}");
    let none = DumpOptions {
      max_array_elements: Some(0),
    };
    assert_eq!(dump_value_with_options(&v, none), "{...}");
    let roomy = DumpOptions {
      max_array_elements: Some(10),
    };
    assert_eq!(dump_value_with_options(&v, roomy), "{0, 1, 2, 3, 4}");
    // Single-element references are never elided.
    assert_eq!(
      dump_value_with_options(&Value::reference(Value::from(3u64)), none),
      "&3"
    );
  }

  #[test]
  fn dumps_invalid_utf8_bytes_as_escapes() {
    assert_eq!(dump(&Value::string(vec![b'a', 0xff, b'b'])), "\"a\\xffb\"");
    assert_eq!(dump(&Value::string(vec![0xe2, 0x82])), "\"\\xe2\\x82\"");
    assert_eq!(dump(&Value::string("caf\u{e9}")), "\"caf\u{e9}\"");
  }

  #[test]
  fn dumps_extreme_floats_in_exponent_form() {
    assert_eq!(dump(&Value::from(1e300f64)), "1e300");
    assert_eq!(dump(&Value::from(-2.5e-7f64)), "-2.5e-7");
    assert_eq!(dump(&Value::from(123456.75f64)), "123456.75");
    assert_eq!(dump(&Value::from(0.0f64)), "0");
    assert_eq!(dump(&Value::from(f64::INFINITY)), "inf");
    assert_eq!(dump(&Value::from(f64::NAN)), "NaN");
  }

  #[test]
  fn display_matches_dumper() {
    let v = Value::array(vec![Value::from(1.25f64), Value::default()]);
    assert_eq!(v.to_string(), "{1.25, NULL}");
  }
}
