use crate::Cli;
use ansi_term::Style;
use container::lang::Error;
use container::mach::{Config, Input, Runtime};
use container::error;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::collections::HashMap;
use std::io::Read;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::warn;

/// Runs the program named on the command line and returns the exit code.
pub fn main(cli: Cli) -> i32 {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    let source = match read_source(&cli) {
        Ok(source) => source,
        Err(error) => {
            eprintln!(
                "{}",
                Style::new()
                    .bold()
                    .paint(format!("container: cannot read {}: {}", cli.source.display(), error))
            );
            return 1;
        }
    };

    let mut config = Config::default();
    if let Some(depth) = cli.max_depth {
        config.max_call_depth = depth;
    }
    config.max_steps = cli.max_steps;

    let input = TermInput::new(cli.inputs.into_iter().collect(), !cli.no_prompt);
    let mut runtime = Runtime::new(&source)
        .with_config(config)
        .with_input(input)
        .with_interrupt(interrupted);
    let result = runtime.run();
    print!("{}", runtime.output());
    match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            1
        }
    }
}

/// Splits `PROMPT=VALUE` at the first `=`.
pub fn parse_input(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((prompt, value)) => Ok((prompt.to_string(), value.to_string())),
        None => Err(format!("expected PROMPT=VALUE, found {}", s)),
    }
}

fn read_source(cli: &Cli) -> std::io::Result<String> {
    if cli.source.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(&cli.source)
    }
}

/// Answers prompts from the command line first, then from the terminal.
struct TermInput {
    given: HashMap<String, String>,
    ask: bool,
    interface: Option<Interface<DefaultTerminal>>,
}

impl TermInput {
    fn new(given: HashMap<String, String>, ask: bool) -> TermInput {
        TermInput {
            given,
            ask,
            interface: None,
        }
    }

    fn interface(&mut self) -> std::io::Result<&Interface<DefaultTerminal>> {
        if self.interface.is_none() {
            let interface = Interface::new("container")?;
            interface.set_report_signal(Signal::Interrupt, true);
            self.interface = Some(interface);
        }
        match &self.interface {
            Some(interface) => Ok(interface),
            None => Err(std::io::ErrorKind::NotFound.into()),
        }
    }

    fn ask(&mut self, prompt: &str) -> std::io::Result<ReadResult> {
        let interface = self.interface()?;
        interface.set_prompt(&format!("{} ", prompt))?;
        interface.read_line()
    }
}

impl Input for TermInput {
    fn read(&mut self, prompt: &str) -> Result<String, Error> {
        if let Some(value) = self.given.get(prompt) {
            return Ok(value.clone());
        }
        if !self.ask {
            return Ok(String::new());
        }
        match self.ask(prompt) {
            Ok(ReadResult::Input(value)) => Ok(value),
            Ok(ReadResult::Signal(Signal::Interrupt)) => Err(error!(Interrupted)),
            Ok(_) => Ok(String::new()),
            Err(e) => {
                warn!(%prompt, error = %e, "terminal unavailable, reading empty input");
                Ok(String::new())
            }
        }
    }
}
