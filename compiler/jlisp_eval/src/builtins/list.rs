//! List builtins: `list head tail eval join`.

use super::{take_exact, take_qexpr};
use crate::environment::Env;
use crate::interpreter::eval;
use crate::{EvalError, EvalResult, Value};

/// The single non-empty Q-expression argument of `head`/`tail`.
fn non_empty_list(func: &'static str, args: Vec<Value>) -> Result<Vec<Value>, EvalError> {
    let [arg] = take_exact::<1>(func, args)?;
    let cells = take_qexpr(func, 0, arg)?;
    if cells.is_empty() {
        return Err(EvalError::EmptyList { func, index: 0 });
    }
    Ok(cells)
}

/// Retag the argument list as a Q-expression.
pub(super) fn builtin_list(_env: &Env, args: Vec<Value>) -> EvalResult {
    Ok(Value::qexpr(args))
}

pub(super) fn builtin_head(_env: &Env, args: Vec<Value>) -> EvalResult {
    let mut cells = non_empty_list("head", args)?;
    cells.truncate(1);
    Ok(Value::qexpr(cells))
}

pub(super) fn builtin_tail(_env: &Env, args: Vec<Value>) -> EvalResult {
    let mut cells = non_empty_list("tail", args)?;
    cells.remove(0);
    Ok(Value::qexpr(cells))
}

/// Evaluate a Q-expression as if it were an S-expression.
pub(super) fn builtin_eval(env: &Env, args: Vec<Value>) -> EvalResult {
    let [arg] = take_exact::<1>("eval", args)?;
    let cells = take_qexpr("eval", 0, arg)?;
    Ok(eval(env, Value::sexpr(cells)))
}

/// Concatenate Q-expressions in argument order.
pub(super) fn builtin_join(_env: &Env, args: Vec<Value>) -> EvalResult {
    if args.is_empty() {
        return Err(EvalError::NoArguments { func: "join" });
    }
    let mut joined = Vec::new();
    for (index, arg) in args.into_iter().enumerate() {
        joined.extend(take_qexpr("join", index, arg)?);
    }
    Ok(Value::qexpr(joined))
}
