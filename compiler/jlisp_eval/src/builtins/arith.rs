//! Integer arithmetic: `+ - * / % ^`.
//!
//! Every argument must be a number. Operators fold left to right; a lone
//! argument to `-` is negated. Overflow is an error, never a wrap.

use crate::environment::Env;
use crate::{EvalError, EvalResult, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl ArithOp {
    fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Rem => "%",
            ArithOp::Pow => "^",
        }
    }

    fn apply(self, lhs: i64, rhs: i64) -> Result<i64, EvalError> {
        let overflow = || EvalError::IntegerOverflow { op: self.symbol() };
        match self {
            ArithOp::Add => lhs.checked_add(rhs).ok_or_else(overflow),
            ArithOp::Sub => lhs.checked_sub(rhs).ok_or_else(overflow),
            ArithOp::Mul => lhs.checked_mul(rhs).ok_or_else(overflow),
            ArithOp::Div | ArithOp::Rem if rhs == 0 => Err(EvalError::DivisionByZero),
            ArithOp::Div => lhs.checked_div(rhs).ok_or_else(overflow),
            ArithOp::Rem => lhs.checked_rem(rhs).ok_or_else(overflow),
            ArithOp::Pow => checked_power(lhs, rhs).ok_or_else(overflow),
        }
    }
}

/// Repeated multiplication; a non-positive exponent yields 1.
fn checked_power(base: i64, exp: i64) -> Option<i64> {
    if exp <= 0 {
        return Some(1);
    }
    match base {
        0 | 1 => Some(base),
        -1 => Some(if exp & 1 == 0 { 1 } else { -1 }),
        _ => u32::try_from(exp).ok().and_then(|exp| base.checked_pow(exp)),
    }
}

fn fold(op: ArithOp, args: Vec<Value>) -> EvalResult {
    let func = op.symbol();
    let mut numbers = Vec::with_capacity(args.len());
    for (index, arg) in args.into_iter().enumerate() {
        match arg {
            Value::Number(n) => numbers.push(n),
            other => {
                return Err(EvalError::WrongArgType {
                    func,
                    index,
                    got: other.type_name(),
                    expected: "Number",
                })
            }
        }
    }

    let mut numbers = numbers.into_iter();
    let Some(first) = numbers.next() else {
        return Err(EvalError::NoArguments { func });
    };

    if op == ArithOp::Sub && numbers.as_slice().is_empty() {
        return first
            .checked_neg()
            .map(Value::Number)
            .ok_or(EvalError::IntegerOverflow { op: func });
    }

    numbers
        .try_fold(first, |acc, n| op.apply(acc, n))
        .map(Value::Number)
}

pub(super) fn builtin_add(_env: &Env, args: Vec<Value>) -> EvalResult {
    fold(ArithOp::Add, args)
}

pub(super) fn builtin_sub(_env: &Env, args: Vec<Value>) -> EvalResult {
    fold(ArithOp::Sub, args)
}

pub(super) fn builtin_mul(_env: &Env, args: Vec<Value>) -> EvalResult {
    fold(ArithOp::Mul, args)
}

pub(super) fn builtin_div(_env: &Env, args: Vec<Value>) -> EvalResult {
    fold(ArithOp::Div, args)
}

pub(super) fn builtin_rem(_env: &Env, args: Vec<Value>) -> EvalResult {
    fold(ArithOp::Rem, args)
}

pub(super) fn builtin_pow(_env: &Env, args: Vec<Value>) -> EvalResult {
    fold(ArithOp::Pow, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_power() {
        assert_eq!(checked_power(2, 5), Some(32));
        assert_eq!(checked_power(7, 0), Some(1));
        assert_eq!(checked_power(7, -3), Some(1));
        assert_eq!(checked_power(-1, 3), Some(-1));
        assert_eq!(checked_power(1, i64::MAX), Some(1));
        assert_eq!(checked_power(2, 64), None);
    }

    #[test]
    fn test_fold_left_to_right() {
        let args = vec![Value::Number(100), Value::Number(5), Value::Number(2)];
        assert_eq!(fold(ArithOp::Div, args), Ok(Value::Number(10)));
        let args = vec![Value::Number(10), Value::Number(3), Value::Number(2)];
        assert_eq!(fold(ArithOp::Sub, args), Ok(Value::Number(5)));
    }

    #[test]
    fn test_overflow() {
        let args = vec![Value::Number(i64::MAX), Value::Number(1)];
        assert_eq!(
            fold(ArithOp::Add, args),
            Err(EvalError::IntegerOverflow { op: "+" })
        );
        assert_eq!(
            fold(ArithOp::Sub, vec![Value::Number(i64::MIN)]),
            Err(EvalError::IntegerOverflow { op: "-" })
        );
        let args = vec![Value::Number(i64::MIN), Value::Number(-1)];
        assert_eq!(
            fold(ArithOp::Div, args),
            Err(EvalError::IntegerOverflow { op: "/" })
        );
    }

    #[test]
    fn test_remainder() {
        let args = vec![Value::Number(17), Value::Number(5)];
        assert_eq!(fold(ArithOp::Rem, args), Ok(Value::Number(2)));
        let args = vec![Value::Number(17), Value::Number(0)];
        assert_eq!(fold(ArithOp::Rem, args), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(
            fold(ArithOp::Mul, Vec::new()),
            Err(EvalError::NoArguments { func: "*" })
        );
    }
}
