//! Evaluation errors.
//!
//! Builtins and the call-binding protocol return [`EvalResult`] and propagate
//! failures with `?`. At the application boundary an [`EvalError`] becomes a
//! [`Value::Error`] carrying the `Display` text, so from the language's point
//! of view every failure is an ordinary value.

use thiserror::Error;

use crate::Value;

/// Result of a builtin or of binding a call.
pub type EvalResult = Result<Value, EvalError>;

/// A user-level evaluation failure.
///
/// The `Display` output is exactly what the user sees after `Error: `.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    // Arithmetic
    #[error("Division by zero!")]
    DivisionByZero,
    #[error("Integer overflow in '{op}'.")]
    IntegerOverflow { op: &'static str },

    // Reading
    #[error("invalid number")]
    InvalidNumber,
    #[error("Unexpected syntax node '{contents}'.")]
    MalformedNode { contents: String },

    // Lookup and application
    #[error("Unbound symbol '{name}'")]
    UnboundSymbol { name: String },
    #[error("S-Expression starts with incorrect type. Got {got}, Expected Function.")]
    NotAFunction { got: &'static str },
    #[error("Function passed too many arguments. Got {given}, Expected {expected}.")]
    TooManyArguments { given: usize, expected: usize },
    #[error("Function format invalid. Symbol '&' not followed by single symbol.")]
    InvalidVariadic,

    // Builtin argument validation
    #[error(
        "Function '{func}' passed incorrect number of arguments. Got {got}, Expected {expected}."
    )]
    WrongArgCount {
        func: &'static str,
        got: usize,
        expected: usize,
    },
    #[error(
        "Function '{func}' passed incorrect type for argument {index}. Got {got}, Expected {expected}."
    )]
    WrongArgType {
        func: &'static str,
        index: usize,
        got: &'static str,
        expected: &'static str,
    },
    #[error("Function '{func}' passed {{}} for argument {index}.")]
    EmptyList { func: &'static str, index: usize },
    #[error("Function '{func}' passed no arguments.")]
    NoArguments { func: &'static str },

    // Definitions
    #[error("Cannot define non-symbol. Got {got}, Expected Symbol.")]
    NonSymbolFormal { got: &'static str },
    #[error("Function '{func}' cannot define non-symbol. Got {got}, Expected Symbol.")]
    NonSymbolBinding {
        func: &'static str,
        got: &'static str,
    },
    #[error("Function '{func}' passed too many arguments for symbols. Got {symbols}, Expected {values}.")]
    SymbolCountMismatch {
        func: &'static str,
        symbols: usize,
        values: usize,
    },
}

impl From<EvalError> for Value {
    fn from(err: EvalError) -> Self {
        Value::Error(err.to_string())
    }
}

/// Convert a builtin or binding result into the value the language sees.
#[inline]
pub fn into_value(result: EvalResult) -> Value {
    result.unwrap_or_else(Value::from)
}
