//! # Container
//!
//! A small line-oriented scripting language. Programs open with a fixed
//! entry header, close blocks with `End;`, and work with variables,
//! lists and procedures.
//!
//! ```text
//! When container main(int):
//! def var name = input from "Your name?";
//! console.type("Hello " + name);
//! End;
//! ```
//!
//! Run a program with `container FILE`, answering prompts ahead of time
//! with `--input "PROMPT=VALUE"`. As a library, [`respond`] runs source
//! text against a set of input values and returns what it printed.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;

use std::collections::HashMap;

/// Runs `source` in a fresh runtime and returns everything it printed,
/// or only the error message if the run failed.
pub fn respond(source: &str, inputs: HashMap<String, String>) -> String {
    let mut runtime = mach::Runtime::new(source).with_input(inputs);
    match runtime.run() {
        Ok(()) => runtime.take_output(),
        Err(error) => error.to_string(),
    }
}
