//! Function values: native builtins and user closures.

use std::fmt;

use crate::environment::{Env, Environment};
use crate::{EvalResult, Value};

/// Native operation signature.
///
/// Receives the calling environment and the evaluated arguments, and is
/// responsible for validating both count and types.
pub type BuiltinFn = fn(&Env, Vec<Value>) -> EvalResult;

/// A named native operation.
///
/// Builtins are opaque: two builtins are equal when they carry the same name.
#[derive(Clone, Copy)]
pub struct Builtin {
    name: &'static str,
    func: BuiltinFn,
}

impl Builtin {
    pub const fn new(name: &'static str, func: BuiltinFn) -> Self {
        Builtin { name, func }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invoke the native operation.
    #[inline]
    pub fn call(&self, env: &Env, args: Vec<Value>) -> EvalResult {
        (self.func)(env, args)
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

/// A user-defined closure.
///
/// Owns its formals, its body and its environment. Arguments bound by a
/// partial application live in `env` until the remaining formals arrive.
#[derive(Clone, Debug, PartialEq)]
pub struct Lambda {
    formals: Vec<String>,
    body: Vec<Value>,
    env: Environment,
}

impl Lambda {
    /// Create a closure with a fresh, empty environment.
    pub fn new(formals: Vec<String>, body: Vec<Value>) -> Self {
        Lambda {
            formals,
            body,
            env: Environment::new(),
        }
    }

    /// Formals not yet bound.
    #[inline]
    pub fn formals(&self) -> &[String] {
        &self.formals
    }

    #[inline]
    pub fn body(&self) -> &[Value] {
        &self.body
    }

    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Remove and return the next unbound formal.
    pub(crate) fn next_formal(&mut self) -> Option<String> {
        if self.formals.is_empty() {
            None
        } else {
            Some(self.formals.remove(0))
        }
    }

    /// Bind a formal in the closure's own environment.
    #[inline]
    pub(crate) fn bind(&mut self, name: String, value: Value) {
        self.env.define(name, value);
    }

    /// Split into the environment and body for a completed call.
    pub(crate) fn into_call_parts(self) -> (Environment, Vec<Value>) {
        (self.env, self.body)
    }
}

/// Anything that can head an S-expression.
#[derive(Clone, Debug, PartialEq)]
pub enum FunctionValue {
    Builtin(Builtin),
    Lambda(Box<Lambda>),
}

impl fmt::Display for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionValue::Builtin(_) => write!(f, "<function>"),
            FunctionValue::Lambda(lambda) => {
                write!(f, "(\\ {{")?;
                for (i, formal) in lambda.formals.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{formal}")?;
                }
                write!(f, "}} ")?;
                super::write_cells(f, &lambda.body, '{', '}')?;
                write!(f, ")")
            }
        }
    }
}
