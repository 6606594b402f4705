use super::{Function, Operation, Val, Var};
use crate::error;
use crate::lang::ast::{Condition, Expression};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

const PLACEHOLDER: &str = "$$";

/// Evaluates expression trees against the variable store, optionally with
/// the element a filter is testing bound to `$$`.
pub struct Evaluator<'a> {
    vars: &'a Var,
    element: Option<&'a Val>,
}

impl<'a> Evaluator<'a> {
    pub fn new(vars: &'a Var) -> Evaluator<'a> {
        Evaluator {
            vars,
            element: None,
        }
    }

    pub fn with_element(vars: &'a Var, element: &'a Val) -> Evaluator<'a> {
        Evaluator {
            vars,
            element: Some(element),
        }
    }

    pub fn expression(&self, expr: &Expression) -> Result<Val> {
        match expr {
            Expression::Integer(n) => Ok(Val::Integer(*n)),
            Expression::Float(n) => Ok(Val::Float(*n)),
            Expression::String(s) => match self.element {
                Some(element) if s.contains(PLACEHOLDER) => {
                    Ok(Val::from(s.replace(PLACEHOLDER, &element.to_string())))
                }
                _ => Ok(Val::String(s.clone())),
            },
            Expression::Var(name) => self.vars.fetch(name),
            Expression::Placeholder => match self.element {
                Some(element) => Ok(element.clone()),
                None => Err(error!(InvalidExpression; "$$ is only meaningful inside filter")),
            },
            Expression::Function(function, inner) => {
                Function::call(*function, self.expression(inner)?)
            }
            Expression::Concat(parts) => {
                let vals = parts
                    .iter()
                    .map(|part| self.expression(part))
                    .collect::<Result<Vec<Val>>>()?;
                Ok(Operation::concat(&vals))
            }
            Expression::Power(lhs, rhs) => {
                Operation::power(self.expression(lhs)?, self.expression(rhs)?)
            }
            Expression::Multiply(lhs, rhs) => {
                Operation::multiply(self.expression(lhs)?, self.expression(rhs)?)
            }
            Expression::Divide(lhs, rhs) => {
                Operation::divide(self.expression(lhs)?, self.expression(rhs)?)
            }
            Expression::Subtract(lhs, rhs) => {
                Operation::subtract(self.expression(lhs)?, self.expression(rhs)?)
            }
        }
    }

    pub fn condition(&self, cond: &Condition) -> Result<bool> {
        match cond {
            Condition::Not(inner) => Ok(!self.condition(inner)?),
            Condition::Compare(comparison, lhs, rhs) => {
                let lhs = self.expression(lhs)?;
                let rhs = self.expression(rhs)?;
                Operation::compare(*comparison, &lhs, &rhs)
            }
            Condition::Truthy(expr) => Ok(self.expression(expr)?.is_truthy()),
        }
    }
}
