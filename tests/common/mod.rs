#![allow(dead_code)]

use container::mach::Runtime;
use std::collections::HashMap;

pub const HEADER: &str = "When container main(int):";

/// Wraps `body` in the main container and runs it. Returns the output,
/// followed by the error if the run failed.
pub fn exec(body: &str) -> String {
    exec_source(&program(body))
}

pub fn exec_source(source: &str) -> String {
    let mut runtime = Runtime::new(source);
    finish(&mut runtime)
}

pub fn exec_with(body: &str, inputs: &[(&str, &str)]) -> String {
    let inputs: HashMap<String, String> = inputs
        .iter()
        .map(|(prompt, value)| (prompt.to_string(), value.to_string()))
        .collect();
    let mut runtime = Runtime::new(&program(body)).with_input(inputs);
    finish(&mut runtime)
}

pub fn program(body: &str) -> String {
    format!("{}\n{}\nEnd;\n", HEADER, body)
}

fn finish(runtime: &mut Runtime) -> String {
    let mut s = String::new();
    let result = runtime.run();
    s.push_str(runtime.output());
    if let Err(error) = result {
        s.push_str(&format!("{}\n", error));
    }
    s
}
