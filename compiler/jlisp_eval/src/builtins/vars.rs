//! Closure construction and variable definition: `\ def =`.

use super::{symbol_names, take_exact, take_qexpr};
use crate::environment::Env;
use crate::{EvalError, EvalResult, Value};

/// `(\ {formals} {body})`: build a closure with a fresh environment.
///
/// The formals may contain the variadic marker `&`; its placement is only
/// checked when the closure is called.
pub(super) fn builtin_lambda(_env: &Env, args: Vec<Value>) -> EvalResult {
    let [formals, body] = take_exact::<2>("\\", args)?;
    let formals = take_qexpr("\\", 0, formals)?;
    let body = take_qexpr("\\", 1, body)?;
    let formals = symbol_names(formals, |got| EvalError::NonSymbolFormal { got })?;
    Ok(Value::lambda(formals, body))
}

/// Where `def`/`=` store their bindings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Target {
    /// The root of the environment chain.
    Global,
    /// The innermost environment.
    Local,
}

fn bind_vars(env: &Env, func: &'static str, target: Target, args: Vec<Value>) -> EvalResult {
    let mut args = args.into_iter();
    let Some(symbols) = args.next() else {
        return Err(EvalError::NoArguments { func });
    };
    let symbols = take_qexpr(func, 0, symbols)?;
    let names = symbol_names(symbols, |got| EvalError::NonSymbolBinding { func, got })?;

    let values: Vec<Value> = args.collect();
    if names.len() != values.len() {
        return Err(EvalError::SymbolCountMismatch {
            func,
            symbols: names.len(),
            values: values.len(),
        });
    }

    let target_env = match target {
        Target::Global => env.root(),
        Target::Local => env.clone(),
    };
    let mut scope = target_env.borrow_mut();
    for (name, value) in names.into_iter().zip(values) {
        tracing::debug!(%name, ?target, "bind");
        scope.define(name, value);
    }
    Ok(Value::unit())
}

/// `(def {names..} values..)`: bind in the root environment.
pub(super) fn builtin_def(env: &Env, args: Vec<Value>) -> EvalResult {
    bind_vars(env, "def", Target::Global, args)
}

/// `(= {names..} values..)`: bind in the current environment.
pub(super) fn builtin_put(env: &Env, args: Vec<Value>) -> EvalResult {
    bind_vars(env, "=", Target::Local, args)
}
