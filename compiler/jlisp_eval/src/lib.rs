#![deny(clippy::arithmetic_side_effects)]
//! Jlisp Eval - values, environments and the evaluator for Jlisp.
//!
//! # Architecture
//!
//! - `read`: converts a `jlisp_parse` syntax tree into a [`Value`]
//! - `eval`: reduces a value against an environment chain
//! - `apply`: the call-binding protocol for builtins and closures
//! - `Environment`: name bindings plus an optional parent link
//! - `builtins`: the primitive functions installed in every root environment
//!
//! Errors are ordinary values. Builtins report failures as [`EvalError`],
//! which becomes a [`Value::Error`] at the application boundary.
//!
//! # Example
//!
//! ```
//! use jlisp_eval::{Interpreter, Value};
//!
//! let interp = Interpreter::new();
//! let tree = jlisp_parse::parse("<doc>", "(+ 1 (* 2 3))").unwrap();
//! assert_eq!(interp.eval_node(&tree), Value::Number(7));
//! ```

pub mod builtins;
mod environment;
pub mod errors;
mod interpreter;
mod reader;
mod value;

#[cfg(test)]
mod test_helpers;

pub use environment::{Env, Environment};
pub use errors::{into_value, EvalError, EvalResult};
pub use interpreter::{apply, eval, Interpreter, VARIADIC_MARKER};
pub use reader::read;
pub use value::{Builtin, BuiltinFn, Cells, FunctionValue, Lambda, Value};
