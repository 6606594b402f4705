use super::Val;
use crate::error;
use crate::lang::{ast::Binding, Error};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// One global scope. A name is created by its first `def` and replaced by
/// every later one, unless that first definition was `const`.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Val>,
    consts: HashSet<Rc<str>>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
        self.consts.clear();
    }

    pub fn get(&self, var_name: &str) -> Option<&Val> {
        self.vars.get(var_name)
    }

    pub fn fetch(&self, var_name: &str) -> Result<Val> {
        match self.vars.get(var_name) {
            Some(val) => Ok(val.clone()),
            None => Err(error!(UndefinedVariable; format!("Variable '{}' not defined", var_name))),
        }
    }

    pub fn is_const(&self, var_name: &str) -> bool {
        self.consts.contains(var_name)
    }

    pub fn define(&mut self, var_name: &Rc<str>, value: Val, binding: Binding) -> Result<()> {
        if self.is_const(var_name) {
            return Err(error!(ConstantRedefined; format!(
                "Constant '{}' cannot be redefined",
                var_name
            )));
        }
        if binding == Binding::Const {
            self.consts.insert(var_name.clone());
        }
        self.vars.insert(var_name.clone(), value);
        Ok(())
    }
}
