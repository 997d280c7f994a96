//! Function application and the call-binding protocol.

use std::collections::VecDeque;

use super::eval;
use crate::environment::Env;
use crate::errors::into_value;
use crate::value::{FunctionValue, Lambda};
use crate::{Cells, EvalError, EvalResult, Value};

/// Formal that collects every remaining argument into the formal after it.
pub const VARIADIC_MARKER: &str = "&";

/// Apply `func` to already-evaluated `args`, called from `env`.
///
/// Builtins run directly. Closures bind arguments to formals positionally; a
/// closure left with unbound formals comes back as a partial application.
#[tracing::instrument(level = "debug", skip_all, fields(args = args.len()))]
pub fn apply(env: &Env, func: FunctionValue, args: Vec<Value>) -> Value {
    match func {
        FunctionValue::Builtin(builtin) => {
            tracing::trace!(name = builtin.name(), "builtin call");
            into_value(builtin.call(env, args))
        }
        FunctionValue::Lambda(lambda) => into_value(call_lambda(env, *lambda, args)),
    }
}

fn call_lambda(env: &Env, mut lambda: Lambda, args: Vec<Value>) -> EvalResult {
    let given = args.len();
    let total = lambda.formals().len();
    let mut args = VecDeque::from(args);

    while let Some(arg) = args.pop_front() {
        let Some(formal) = lambda.next_formal() else {
            return Err(EvalError::TooManyArguments {
                given,
                expected: total,
            });
        };

        if formal == VARIADIC_MARKER {
            if lambda.formals().len() != 1 {
                return Err(EvalError::InvalidVariadic);
            }
            let Some(rest) = lambda.next_formal() else {
                return Err(EvalError::InvalidVariadic);
            };
            args.push_front(arg);
            lambda.bind(rest, Value::QExpr(args.drain(..).collect()));
            break;
        }

        lambda.bind(formal, arg);
    }

    // A trailing `& rest` with no arguments left binds `rest` to `{}`.
    if lambda.formals().first().is_some_and(|f| f == VARIADIC_MARKER) {
        if lambda.formals().len() != 2 {
            return Err(EvalError::InvalidVariadic);
        }
        let _marker = lambda.next_formal();
        if let Some(rest) = lambda.next_formal() {
            lambda.bind(rest, Value::QExpr(Cells::new()));
        }
    }

    if !lambda.formals().is_empty() {
        tracing::debug!(
            remaining = lambda.formals().len(),
            "partial application"
        );
        return Ok(Value::Function(FunctionValue::Lambda(Box::new(lambda))));
    }

    // Every formal is bound: run the body in the closure's environment,
    // reparented onto the calling frame.
    let (mut scope, body) = lambda.into_call_parts();
    scope.set_parent(env.clone());
    let frame = Env::new(scope);
    Ok(eval(&frame, Value::sexpr(body)))
}
