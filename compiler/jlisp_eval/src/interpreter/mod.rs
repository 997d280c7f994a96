//! Tree-walking evaluation.
//!
//! `eval` reduces a value against an environment:
//! - symbols resolve along the environment chain (the result is a copy);
//! - S-expressions evaluate every cell left to right, then the first error
//!   wins, a lone cell unwraps, and otherwise the head is applied to the rest;
//! - everything else, Q-expressions included, evaluates to itself.

mod call;

use jlisp_parse::AstNode;
use jlisp_stack::ensure_sufficient_stack;

use crate::builtins;
use crate::environment::{Env, Environment};
use crate::reader::read;
use crate::{EvalError, Value};

pub use call::{apply, VARIADIC_MARKER};

/// Owns the root environment of a session.
///
/// Builtins are installed once at construction; later global definitions
/// accumulate in the same root for as long as the interpreter lives.
pub struct Interpreter {
    root: Env,
}

impl Interpreter {
    /// Create an interpreter whose root environment holds every builtin.
    pub fn new() -> Self {
        let root = Env::new(Environment::new());
        builtins::register(&root);
        Interpreter { root }
    }

    #[inline]
    pub fn root(&self) -> &Env {
        &self.root
    }

    /// Evaluate a value against the root environment.
    pub fn eval(&self, value: Value) -> Value {
        eval(&self.root, value)
    }

    /// Read a syntax tree and evaluate it against the root environment.
    pub fn eval_node(&self, node: &AstNode) -> Value {
        self.eval(read(node))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate `value` in `env`.
#[tracing::instrument(level = "trace", skip_all)]
pub fn eval(env: &Env, value: Value) -> Value {
    ensure_sufficient_stack(|| match value {
        Value::Symbol(name) => lookup(env, name),
        Value::SExpr(cells) => eval_sexpr(env, cells.into_vec()),
        other => other,
    })
}

fn lookup(env: &Env, name: String) -> Value {
    match env.lookup(&name) {
        Some(value) => value,
        None => EvalError::UnboundSymbol { name }.into(),
    }
}

fn eval_sexpr(env: &Env, cells: Vec<Value>) -> Value {
    let mut cells: Vec<Value> = cells.into_iter().map(|cell| eval(env, cell)).collect();

    if let Some(index) = cells.iter().position(Value::is_error) {
        return cells.swap_remove(index);
    }

    let mut cells = cells.into_iter();
    let Some(head) = cells.next() else {
        return Value::unit();
    };
    let args: Vec<Value> = cells.collect();
    if args.is_empty() {
        return head;
    }

    match head {
        Value::Function(func) => apply(env, func, args),
        other => EvalError::NotAFunction {
            got: other.type_name(),
        }
        .into(),
    }
}
