use super::Val;
use crate::error;
use crate::lang::{ast::Comparison, Error};
use std::cmp::Ordering;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Arithmetic and comparison
///
/// Two integers stay integer for `-`, `*` and non-negative `**`, with
/// overflow reported rather than wrapped. Any float operand makes the
/// result float. `/` is always float. Strings are never coerced to numbers.
pub struct Operation {}

impl Operation {
    /// `+`: every part in its printed form, joined.
    pub fn concat(parts: &[Val]) -> Val {
        let s: String = parts.iter().map(|v| v.to_string()).collect();
        Val::from(s)
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (&lhs, &rhs) {
            (Integer(l), Integer(r)) => match l.checked_sub(*r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            _ => Ok(Float(f64::try_from(&lhs)? - f64::try_from(&rhs)?)),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (&lhs, &rhs) {
            (Integer(l), Integer(r)) => match l.checked_mul(*r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            _ => Ok(Float(f64::try_from(&lhs)? * f64::try_from(&rhs)?)),
        }
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        let l = f64::try_from(&lhs)?;
        let r = f64::try_from(&rhs)?;
        if r == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Ok(Val::Float(l / r))
    }

    pub fn power(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        if let (Integer(l), Integer(r)) = (&lhs, &rhs) {
            if *r >= 0 {
                return match u32::try_from(*r).ok().and_then(|r| l.checked_pow(r)) {
                    Some(i) => Ok(Integer(i)),
                    None => Err(error!(Overflow)),
                };
            }
        }
        let l = f64::try_from(&lhs)?;
        let r = f64::try_from(&rhs)?;
        if l == 0.0 && r < 0.0 {
            return Err(error!(DivisionByZero; "Zero cannot be raised to a negative power"));
        }
        let result = l.powf(r);
        if result.is_infinite() && l.is_finite() && r.is_finite() {
            return Err(error!(Overflow));
        }
        Ok(Float(result))
    }

    /// Numbers compare across integer and float, strings compare with
    /// strings. Equality between a string and a number is simply false.
    pub fn equal(lhs: &Val, rhs: &Val) -> bool {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => l == r,
            (String(l), String(r)) => l == r,
            (String(_), _) | (_, String(_)) => false,
            _ => f64::try_from(lhs).ok() == f64::try_from(rhs).ok(),
        }
    }

    pub fn compare(comparison: Comparison, lhs: &Val, rhs: &Val) -> Result<bool> {
        use Comparison::*;
        let ordering = match comparison {
            Equal => return Ok(Self::equal(lhs, rhs)),
            NotEqual => return Ok(!Self::equal(lhs, rhs)),
            GreaterEqual | LessEqual | Greater | Less => Self::ordering(lhs, rhs)?,
        };
        let ordering = match ordering {
            Some(o) => o,
            None => return Ok(false),
        };
        Ok(match comparison {
            GreaterEqual => ordering != Ordering::Less,
            LessEqual => ordering != Ordering::Greater,
            Greater => ordering == Ordering::Greater,
            Less => ordering == Ordering::Less,
            Equal | NotEqual => false,
        })
    }

    fn ordering(lhs: &Val, rhs: &Val) -> Result<Option<Ordering>> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => Ok(Some(l.cmp(r))),
            (String(l), String(r)) => Ok(Some(l.cmp(r))),
            (String(_), _) | (_, String(_)) => Err(error!(TypeMismatch; format!(
                "Cannot order {} and {}",
                lhs.type_name(),
                rhs.type_name()
            ))),
            _ => Ok(f64::try_from(lhs)?.partial_cmp(&f64::try_from(rhs)?)),
        }
    }
}
