use crate::lang::Error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// Where `input from "PROMPT"` gets its value.
pub trait Input {
    fn read(&mut self, prompt: &str) -> Result<String>;
}

/// Values supplied up front, keyed by prompt. An unknown prompt reads as
/// the empty string.
impl Input for HashMap<String, String> {
    fn read(&mut self, prompt: &str) -> Result<String> {
        Ok(self.get(prompt).cloned().unwrap_or_default())
    }
}
