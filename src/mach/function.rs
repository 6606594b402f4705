use super::Val;
use crate::error;
use crate::lang::{ast, Error};
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Built-in unary math functions
pub struct Function {}

impl Function {
    pub fn call(function: ast::Function, val: Val) -> Result<Val> {
        use ast::Function::*;
        match function {
            Sqrt => Self::sqrt(val),
            Cbrt => Self::cbrt(val),
            Round => Self::round(val),
            Floor => Self::floor(val),
            Ceiling => Self::ceiling(val),
        }
    }

    pub fn sqrt(val: Val) -> Result<Val> {
        let n = f64::try_from(&val)?;
        if n < 0.0 {
            return Err(error!(MathDomain; format!("sqrt of negative number {}", val)));
        }
        Ok(Val::Float(n.sqrt()))
    }

    /// Raises to the power one third, so a negative argument gives `nan`.
    pub fn cbrt(val: Val) -> Result<Val> {
        let n = f64::try_from(&val)?;
        Ok(Val::Float(n.powf(1.0 / 3.0)))
    }

    /// Halfway cases go to the even neighbour.
    pub fn round(val: Val) -> Result<Val> {
        match val {
            Val::Integer(_) => Ok(val),
            _ => Self::integer(f64::try_from(&val)?.round_ties_even()),
        }
    }

    pub fn floor(val: Val) -> Result<Val> {
        match val {
            Val::Integer(_) => Ok(val),
            _ => Self::integer(f64::try_from(&val)?.floor()),
        }
    }

    pub fn ceiling(val: Val) -> Result<Val> {
        match val {
            Val::Integer(_) => Ok(val),
            _ => Self::integer(f64::try_from(&val)?.ceil()),
        }
    }

    fn integer(n: f64) -> Result<Val> {
        if n.is_finite() && n >= i64::MIN as f64 && n < i64::MAX as f64 {
            Ok(Val::Integer(n as i64))
        } else {
            Err(error!(Overflow; format!("Cannot convert {} to an integer", Val::Float(n))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_rounding_gives_integers() {
        assert_eq!(Function::round(Val::Float(2.5)).unwrap().to_string(), "2");
        assert_eq!(Function::round(Val::Float(3.5)).unwrap().to_string(), "4");
        assert_eq!(Function::floor(Val::Float(-1.5)).unwrap().to_string(), "-2");
        assert_eq!(Function::ceiling(Val::Float(1.1)).unwrap().to_string(), "2");
        assert_eq!(Function::ceiling(Val::Integer(7)).unwrap().to_string(), "7");
    }

    #[test]
    fn test_roots() {
        assert_eq!(Function::sqrt(Val::Integer(16)).unwrap().to_string(), "4.0");
        assert_eq!(Function::cbrt(Val::Integer(-8)).unwrap().to_string(), "nan");
        let e = Function::sqrt(Val::Integer(-1)).unwrap_err();
        assert_eq!(e.code(), ErrorCode::MathDomain);
        let e = Function::floor(Val::from("x")).unwrap_err();
        assert_eq!(e.code(), ErrorCode::TypeMismatch);
        let e = Function::round(Val::Float(f64::INFINITY)).unwrap_err();
        assert_eq!(e.code(), ErrorCode::Overflow);
    }
}
