use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;
use std::rc::Rc;

/// A scalar value. Variables carry no static type and may hold any variant
/// over their lifetime.
#[derive(Debug, Clone)]
pub enum Val {
    Integer(i64),
    Float(f64),
    String(Rc<str>),
}

impl Val {
    /// `0`, `0.0` and the empty string are false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Val::Integer(n) => *n != 0,
            Val::Float(n) => *n != 0.0,
            Val::String(s) => !s.is_empty(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Val::Integer(_) => "integer",
            Val::Float(_) => "float",
            Val::String(_) => "string",
        }
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Val {
        Val::String(s.into())
    }
}

impl From<String> for Val {
    fn from(s: String) -> Val {
        Val::String(s.into())
    }
}

impl From<i64> for Val {
    fn from(n: i64) -> Val {
        Val::Integer(n)
    }
}

impl From<f64> for Val {
    fn from(n: f64) -> Val {
        Val::Float(n)
    }
}

/// Numeric view used by arithmetic and math functions.
impl TryFrom<&Val> for f64 {
    type Error = Error;
    fn try_from(val: &Val) -> Result<Self, Self::Error> {
        match val {
            Val::Integer(n) => Ok(*n as f64),
            Val::Float(n) => Ok(*n),
            Val::String(s) => Err(error!(TypeMismatch; format!("Expected a number, found \"{}\"", s))),
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Integer(n) => write!(f, "{}", n),
            Val::Float(n) => {
                if n.is_nan() {
                    write!(f, "nan")
                } else if n.is_infinite() {
                    write!(f, "{}", if *n > 0.0 { "inf" } else { "-inf" })
                } else {
                    float(f, *n)
                }
            }
            Val::String(s) => write!(f, "{}", s),
        }
    }
}

/// Shortest round-trip digits. Outside `1e-4..1e16` the exponent is
/// signed and at least two digits wide, as in `1e-05` and `1.5e+16`.
fn float(f: &mut std::fmt::Formatter, n: f64) -> std::fmt::Result {
    let magnitude = n.abs();
    if magnitude == 0.0 || (1e-4..1e16).contains(&magnitude) {
        return write!(f, "{:?}", n);
    }
    let scientific = format!("{:e}", n);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => match exponent.strip_prefix('-') {
            Some(digits) => write!(f, "{}e-{:0>2}", mantissa, digits),
            None => write!(f, "{}e+{:0>2}", mantissa, exponent),
        },
        None => write!(f, "{}", scientific),
    }
}
