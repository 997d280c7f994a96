//! Runtime values.
//!
//! Every value owns everything reachable from it. There is no sharing between
//! two live containers: cloning a value, including a closure and its
//! environment, produces an independent deep copy.

mod cells;
mod function;

use std::fmt;

use jlisp_stack::ensure_sufficient_stack;

pub use cells::Cells;
pub use function::{Builtin, BuiltinFn, FunctionValue, Lambda};

/// Runtime value in the Jlisp interpreter.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// 64-bit signed integer.
    Number(i64),
    /// Failure marker; propagates through evaluation.
    Error(String),
    /// Identifier awaiting resolution in an environment.
    Symbol(String),
    /// Builtin or closure.
    Function(FunctionValue),
    /// Unevaluated application: `( ... )`.
    SExpr(Cells),
    /// Literal list, never evaluated implicitly: `{ ... }`.
    QExpr(Cells),
}

impl Value {
    #[inline]
    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(message.into())
    }

    #[inline]
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Create a builtin function value.
    #[inline]
    pub fn builtin(name: &'static str, func: BuiltinFn) -> Self {
        Value::Function(FunctionValue::Builtin(Builtin::new(name, func)))
    }

    /// Create a closure with a fresh environment.
    #[inline]
    pub fn lambda(formals: Vec<String>, body: Vec<Value>) -> Self {
        Value::Function(FunctionValue::Lambda(Box::new(Lambda::new(formals, body))))
    }

    #[inline]
    pub fn sexpr(cells: impl Into<Cells>) -> Self {
        Value::SExpr(cells.into())
    }

    #[inline]
    pub fn qexpr(cells: impl Into<Cells>) -> Self {
        Value::QExpr(cells.into())
    }

    /// An empty S-expression, `()`.
    #[inline]
    pub fn unit() -> Self {
        Value::SExpr(Cells::new())
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Error(_) => "Error",
            Value::Symbol(_) => "Symbol",
            Value::Function(_) => "Function",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
        }
    }
}

/// Write `cells` space-separated between `open` and `close`.
fn write_cells(f: &mut fmt::Formatter<'_>, cells: &[Value], open: char, close: char) -> fmt::Result {
    ensure_sufficient_stack(|| {
        write!(f, "{open}")?;
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{cell}")?;
        }
        write!(f, "{close}")
    })
}

/// Textual rendering shown by the driver.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Error(message) => write!(f, "Error: {message}"),
            Value::Symbol(name) => write!(f, "{name}"),
            Value::Function(func) => write!(f, "{func}"),
            Value::SExpr(cells) => write_cells(f, cells, '(', ')'),
            Value::QExpr(cells) => write_cells(f, cells, '{', '}'),
        }
    }
}
