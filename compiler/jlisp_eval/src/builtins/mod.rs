//! Builtin registry.
//!
//! Every builtin receives its evaluated arguments by value and validates
//! them itself. Validation failures surface as [`EvalError`]s naming the
//! function and the offending argument.

mod arith;
mod list;
mod vars;

use crate::environment::Env;
use crate::value::BuiltinFn;
use crate::{EvalError, Value};

/// Name and implementation of every builtin, in registration order.
pub const BUILTINS: &[(&str, BuiltinFn)] = &[
    // List functions
    ("list", list::builtin_list),
    ("head", list::builtin_head),
    ("tail", list::builtin_tail),
    ("eval", list::builtin_eval),
    ("join", list::builtin_join),
    // Math functions
    ("+", arith::builtin_add),
    ("-", arith::builtin_sub),
    ("*", arith::builtin_mul),
    ("/", arith::builtin_div),
    ("%", arith::builtin_rem),
    ("^", arith::builtin_pow),
    // Variable functions
    ("\\", vars::builtin_lambda),
    ("def", vars::builtin_def),
    ("=", vars::builtin_put),
];

/// Install every builtin into `env`.
pub fn register(env: &Env) {
    let mut scope = env.borrow_mut();
    for &(name, func) in BUILTINS {
        scope.define(name, Value::builtin(name, func));
    }
    tracing::debug!(count = BUILTINS.len(), "builtins registered");
}

/// Unwrap a Q-expression argument.
fn take_qexpr(func: &'static str, index: usize, value: Value) -> Result<Vec<Value>, EvalError> {
    match value {
        Value::QExpr(cells) => Ok(cells.into_vec()),
        other => Err(EvalError::WrongArgType {
            func,
            index,
            got: other.type_name(),
            expected: "Q-Expression",
        }),
    }
}

/// Require exactly `N` arguments.
fn take_exact<const N: usize>(
    func: &'static str,
    args: Vec<Value>,
) -> Result<[Value; N], EvalError> {
    <[Value; N]>::try_from(args).map_err(|args| EvalError::WrongArgCount {
        func,
        got: args.len(),
        expected: N,
    })
}

/// Require a list of symbols, returning their names.
fn symbol_names(
    cells: Vec<Value>,
    on_other: impl Fn(&'static str) -> EvalError,
) -> Result<Vec<String>, EvalError> {
    cells
        .into_iter()
        .map(|cell| match cell {
            Value::Symbol(name) => Ok(name),
            other => Err(on_other(other.type_name())),
        })
        .collect()
}
