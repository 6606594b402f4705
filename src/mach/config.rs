/// Limits applied to one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Deepest allowed nesting of `call`s and the `if`, `else` and `while`
    /// blocks entered along the way.
    pub max_call_depth: usize,
    /// Statements plus loop condition checks before the run is stopped.
    pub max_steps: Option<u64>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            max_call_depth: 256,
            max_steps: None,
        }
    }
}
