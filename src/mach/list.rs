use super::{Operation, Val};
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## List memory
///
/// Named ordered sequences, in a namespace of their own.

#[derive(Debug, Default)]
pub struct Lists {
    lists: HashMap<Rc<str>, Vec<Val>>,
}

impl Lists {
    pub fn new() -> Lists {
        Lists::default()
    }

    pub fn clear(&mut self) {
        self.lists.clear();
    }

    /// Creating a list that already exists empties it.
    pub fn create(&mut self, name: &Rc<str>) {
        self.lists.insert(name.clone(), vec![]);
    }

    pub fn get(&self, name: &str) -> Option<&[Val]> {
        self.lists.get(name).map(|v| v.as_slice())
    }

    pub fn len(&self, name: &str) -> Result<usize> {
        Ok(self.list(name)?.len())
    }

    pub fn append(&mut self, name: &str, value: Val) -> Result<()> {
        self.list_mut(name)?.push(value);
        Ok(())
    }

    /// Removes the first element equal to `value`. Returns whether one was found.
    pub fn remove(&mut self, name: &str, value: &Val) -> Result<bool> {
        let list = self.list_mut(name)?;
        match list.iter().position(|v| Operation::equal(v, value)) {
            Some(index) => {
                list.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Keeps the elements for which `keep` holds, in order. If `keep` fails
    /// the list is left untouched.
    pub fn retain<F>(&mut self, name: &str, mut keep: F) -> Result<()>
    where
        F: FnMut(&Val) -> Result<bool>,
    {
        let list = self.list_mut(name)?;
        let mut kept = Vec::with_capacity(list.len());
        for val in list.iter() {
            if keep(val)? {
                kept.push(val.clone());
            }
        }
        *list = kept;
        Ok(())
    }

    fn list(&self, name: &str) -> Result<&Vec<Val>> {
        self.lists.get(name).ok_or_else(|| undefined(name))
    }

    fn list_mut(&mut self, name: &str) -> Result<&mut Vec<Val>> {
        self.lists.get_mut(name).ok_or_else(|| undefined(name))
    }
}

fn undefined(name: &str) -> Error {
    error!(UndefinedList; format!("List '{}' not defined", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn nums() -> Lists {
        let mut lists = Lists::new();
        lists.create(&"a".into());
        for n in [1, 2, 3, 2] {
            lists.append("a", Val::Integer(n)).unwrap();
        }
        lists
    }

    fn shown(lists: &Lists) -> Vec<String> {
        lists.get("a").unwrap().iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut lists = nums();
        assert!(lists.remove("a", &Val::Float(2.0)).unwrap());
        assert_eq!(shown(&lists), ["1", "3", "2"]);
        assert!(!lists.remove("a", &Val::Integer(5)).unwrap());
        assert_eq!(lists.len("a").unwrap(), 3);
    }

    #[test]
    fn test_retain_keeps_order() {
        let mut lists = nums();
        lists
            .retain("a", |v| Ok(matches!(v, Val::Integer(n) if *n >= 2)))
            .unwrap();
        assert_eq!(shown(&lists), ["2", "3", "2"]);
    }

    #[test]
    fn test_failed_retain_leaves_list() {
        let mut lists = nums();
        let e = lists.retain("a", |_| Err(error!(TypeMismatch))).unwrap_err();
        assert_eq!(e.code(), ErrorCode::TypeMismatch);
        assert_eq!(lists.len("a").unwrap(), 4);
    }

    #[test]
    fn test_create_resets_and_undefined() {
        let mut lists = nums();
        lists.create(&"a".into());
        assert_eq!(lists.len("a").unwrap(), 0);
        let e = lists.append("b", Val::Integer(1)).unwrap_err();
        assert_eq!(e.to_string(), "List 'b' not defined");
    }
}
