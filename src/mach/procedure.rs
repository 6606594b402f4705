use crate::error;
use crate::lang::{Error, Line};
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Procedure registry
///
/// Bodies are kept as the raw lines between the header and its `End;` and
/// are only classified when a call reaches them.

#[derive(Debug, Default)]
pub struct Procedures {
    procedures: HashMap<Rc<str>, Rc<[Line]>>,
}

impl Procedures {
    pub fn new() -> Procedures {
        Procedures::default()
    }

    pub fn clear(&mut self) {
        self.procedures.clear();
    }

    /// A later definition of the same name replaces the earlier body.
    pub fn define(&mut self, name: &Rc<str>, body: Rc<[Line]>) {
        self.procedures.insert(name.clone(), body);
    }

    pub fn fetch(&self, name: &str) -> Result<Rc<[Line]>> {
        match self.procedures.get(name) {
            Some(body) => Ok(body.clone()),
            None => Err(error!(UndefinedProcedure; format!("Procedure '{}' not defined", name))),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[Line]> {
        self.procedures.get(name).map(|body| &body[..])
    }
}
