use dump::{dump_call_with_options, dump_value_with_options, DumpOptions};

pub mod call;
pub mod coerce;
pub mod dump;
pub mod error;
pub mod value;
pub mod visit;

pub use call::{Arg, Call};
pub use error::{CoerceError, CoerceErrorType, CoerceResult};
pub use value::{Value, ValueKind, NULL};
pub use visit::ValueVisitor;

pub fn dump_value(value: &Value) -> String {
  dump_value_with_options(value, DumpOptions::default())
}

pub fn dump_call(call: &Call) -> String {
  dump_call_with_options(call, DumpOptions::default())
}
