use super::{Config, Evaluator, Input, Lists, Procedures, Stack, Val, Var};
use crate::error;
use crate::lang::ast::{Binding, Condition, Expression, Initializer, Statement};
use crate::lang::{self, Error, Line, ENTRY_HEADER};
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace, warn};

type Result<T> = std::result::Result<T, Error>;

const PROCEDURE_HEADER: &str = "def procedure";
const CALL_DEPTH_EXCEEDED: &str = "Procedure calls nested too deeply";

/// ## Executor
///
/// Walks the preprocessed lines of one program, classifying and running
/// each in turn. Block bodies and procedure bodies are run by recursing
/// with their own line range; every recursion hands back a [`Flow`] so
/// `break;`, `skip;` and the closing `End;` can unwind to whoever handles
/// them.

pub struct Runtime {
    program: Rc<[Line]>,
    vars: Var,
    lists: Lists,
    procedures: Procedures,
    nesting: Stack<Nesting>,
    output: String,
    input: Box<dyn Input>,
    config: Config,
    steps: u64,
    interrupt: Option<Arc<AtomicBool>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Normal,
    Break,
    Skip,
    Exit,
}

/// Why a nested body is running. Calls and blocks share one depth budget,
/// since each costs native stack.
#[derive(Debug)]
enum Nesting {
    Call(Rc<str>),
    Block(&'static str),
}

impl Nesting {
    fn label(&self) -> &str {
        match self {
            Nesting::Call(name) => name,
            Nesting::Block(kind) => kind,
        }
    }
}

/// The lines being executed and how many `while` blocks enclose them.
struct Frame {
    lines: Rc<[Line]>,
    loops: usize,
}

impl Frame {
    fn new(lines: Rc<[Line]>) -> Frame {
        Frame { lines, loops: 0 }
    }

    fn loop_body(&self) -> Frame {
        Frame {
            lines: self.lines.clone(),
            loops: self.loops + 1,
        }
    }
}

impl Runtime {
    pub fn new(source: &str) -> Runtime {
        let config = Config::default();
        Runtime {
            program: lang::preprocess(source).into(),
            vars: Var::new(),
            lists: Lists::new(),
            procedures: Procedures::new(),
            nesting: Stack::new(CALL_DEPTH_EXCEEDED, config.max_call_depth),
            output: String::new(),
            input: Box::new(HashMap::<String, String>::new()),
            config,
            steps: 0,
            interrupt: None,
        }
    }

    pub fn with_input(mut self, input: impl Input + 'static) -> Runtime {
        self.input = Box::new(input);
        self
    }

    pub fn with_config(mut self, config: Config) -> Runtime {
        self.nesting = Stack::new(CALL_DEPTH_EXCEEDED, config.max_call_depth);
        self.config = config;
        self
    }

    /// The run stops with `Interrupted` at the next statement once the
    /// flag is raised.
    pub fn with_interrupt(mut self, interrupt: Arc<AtomicBool>) -> Runtime {
        self.interrupt = Some(interrupt);
        self
    }

    /// Runs the program from a clean state. Output produced before a
    /// fault is kept and available from [`Runtime::output`].
    #[tracing::instrument(skip(self), fields(lines = self.program.len()))]
    pub fn run(&mut self) -> Result<()> {
        self.vars.clear();
        self.lists.clear();
        self.procedures.clear();
        self.nesting.clear();
        self.output.clear();
        self.steps = 0;
        match self.program.first() {
            Some(line) if line.text() == ENTRY_HEADER => {}
            Some(line) => return Err(error!(MissingEntry, line.number())),
            None => return Err(error!(MissingEntry)),
        }
        debug!("running program");
        let frame = Frame::new(self.program.clone());
        let flow = self.execute(&frame, 1, frame.lines.len())?;
        debug!(?flow, steps = self.steps, "program finished");
        Ok(())
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    pub fn var(&self, name: &str) -> Option<&Val> {
        self.vars.get(name)
    }

    pub fn list(&self, name: &str) -> Option<&[Val]> {
        self.lists.get(name)
    }

    pub fn procedure(&self, name: &str) -> Option<&[Line]> {
        self.procedures.get(name)
    }

    /// Runs `frame.lines[start..end]`.
    fn execute(&mut self, frame: &Frame, start: usize, end: usize) -> Result<Flow> {
        let mut pc = start;
        // Set only while the previous statement was an `if`: whether its body ran.
        let mut last_if: Option<bool> = None;
        while pc < end {
            let number = frame.lines[pc].number();
            let after_if = last_if.take();
            let (next, flow) = self
                .step(frame, pc, after_if, &mut last_if)
                .map_err(|e| e.in_line_number(number))?;
            if flow != Flow::Normal {
                return Ok(flow);
            }
            pc = next;
        }
        Ok(Flow::Normal)
    }

    fn step(
        &mut self,
        frame: &Frame,
        pc: usize,
        after_if: Option<bool>,
        last_if: &mut Option<bool>,
    ) -> Result<(usize, Flow)> {
        self.tick()?;
        let line = &frame.lines[pc];
        let statement = lang::statement(line.text())?;
        trace!(line = line.number(), ?statement);
        let next = pc + 1;
        match statement {
            Statement::End => return Ok((next, Flow::Exit)),
            Statement::Procedure(name) => {
                return Ok((self.define_procedure(frame, pc, name)?, Flow::Normal));
            }
            Statement::Call(name) => self.call(name)?,
            Statement::Define(binding, name, initializer) => {
                self.define(binding, name, initializer)?
            }
            Statement::Print(expr) => {
                let val = self.evaluate(&expr)?;
                self.print(&val);
            }
            Statement::If(cond) => {
                let end = block_end(&frame.lines, pc)?;
                let taken = self.test(&cond)?;
                *last_if = Some(taken);
                if taken {
                    let flow = self.nested(Nesting::Block("if"), frame, pc + 1, end)?;
                    return Ok((end + 1, flow));
                }
                return Ok((end + 1, Flow::Normal));
            }
            Statement::Else => {
                let end = block_end(&frame.lines, pc)?;
                return match after_if {
                    Some(taken) => {
                        let flow = if taken {
                            Flow::Normal
                        } else {
                            self.nested(Nesting::Block("else"), frame, pc + 1, end)?
                        };
                        Ok((end + 1, flow))
                    }
                    None => Err(error!(ElseWithoutIf)),
                };
            }
            Statement::While(cond) => {
                let end = block_end(&frame.lines, pc)?;
                return Ok((end + 1, self.repeat(frame, pc, end, &cond)?));
            }
            Statement::CreateList(name) => {
                debug!(list = %name, "creating list");
                self.lists.create(&name);
            }
            Statement::Append(name, expr) => {
                let val = self.evaluate(&expr)?;
                self.lists.append(&name, val)?;
            }
            Statement::Remove(name, expr) => {
                let val = self.evaluate(&expr)?;
                if !self.lists.remove(&name, &val)? {
                    trace!(list = %name, %val, "nothing to remove");
                }
            }
            Statement::Length(name) => {
                let len = self.lists.len(&name)?;
                self.print(&Val::Integer(len as i64));
            }
            Statement::Filter(name, cond) => {
                let vars = &self.vars;
                self.lists.retain(&name, |element| {
                    Evaluator::with_element(vars, element).condition(&cond)
                })?;
            }
            Statement::Break | Statement::Skip if frame.loops == 0 => {
                return Err(error!(BreakOutsideLoop));
            }
            Statement::Break => return Ok((next, Flow::Break)),
            Statement::Skip => return Ok((next, Flow::Skip)),
            Statement::Return => {}
        }
        Ok((next, Flow::Normal))
    }

    /// Stores the body up to the matching `End;` and returns the line
    /// after it.
    fn define_procedure(&mut self, frame: &Frame, pc: usize, name: Rc<str>) -> Result<usize> {
        let end = block_end(&frame.lines, pc)?;
        let body = &frame.lines[pc + 1..end];
        if let Some(line) = body.iter().find(|l| l.text().starts_with(PROCEDURE_HEADER)) {
            return Err(error!(NestedProcedure, line.number()));
        }
        debug!(procedure = %name, lines = body.len(), "defining procedure");
        self.procedures.define(&name, Rc::from(body));
        Ok(end + 1)
    }

    #[tracing::instrument(skip(self), fields(depth = self.nesting.len()))]
    fn call(&mut self, name: Rc<str>) -> Result<()> {
        let body = self.procedures.fetch(&name)?;
        debug!("calling procedure");
        let frame = Frame::new(body);
        self.nested(Nesting::Call(name), &frame, 0, frame.lines.len())?;
        Ok(())
    }

    /// Runs `frame.lines[start..end]` one level deeper.
    fn nested(&mut self, nesting: Nesting, frame: &Frame, start: usize, end: usize) -> Result<Flow> {
        trace!(depth = self.nesting.len(), within = nesting.label(), "entering");
        self.nesting.push(nesting)?;
        let result = self.execute(frame, start, end);
        self.nesting.pop();
        result
    }

    /// Runs the body at `pc + 1..end` for as long as `cond` holds.
    fn repeat(&mut self, frame: &Frame, pc: usize, end: usize, cond: &Condition) -> Result<Flow> {
        let body = frame.loop_body();
        loop {
            self.tick()?;
            if !self.test(cond)? {
                return Ok(Flow::Normal);
            }
            match self.nested(Nesting::Block("while"), &body, pc + 1, end)? {
                Flow::Normal | Flow::Skip => {}
                Flow::Break => return Ok(Flow::Normal),
                Flow::Exit => return Ok(Flow::Exit),
            }
        }
    }

    fn define(&mut self, binding: Binding, name: Rc<str>, initializer: Initializer) -> Result<()> {
        let val = match initializer {
            Initializer::Expression(expr) => self.evaluate(&expr)?,
            Initializer::Input(prompt) => Val::from(self.input.read(&prompt)?),
        };
        self.vars.define(&name, val, binding)
    }

    fn evaluate(&self, expr: &Expression) -> Result<Val> {
        Evaluator::new(&self.vars).expression(expr)
    }

    fn test(&self, cond: &Condition) -> Result<bool> {
        Evaluator::new(&self.vars).condition(cond)
    }

    fn print(&mut self, val: &Val) {
        self.output.push_str(&val.to_string());
        self.output.push('\n');
    }

    fn tick(&mut self) -> Result<()> {
        if let Some(interrupt) = &self.interrupt {
            if interrupt.swap(false, Ordering::Relaxed) {
                return Err(error!(Interrupted));
            }
        }
        self.steps += 1;
        if let Some(max) = self.config.max_steps {
            if self.steps > max {
                warn!(max_steps = max, "step limit reached");
                return Err(error!(StepLimitExceeded));
            }
        }
        Ok(())
    }
}

/// Index of the `End;` closing the block opened at `start`. Every header
/// line between opens a nested block.
fn block_end(lines: &[Line], start: usize) -> Result<usize> {
    let mut depth = 0usize;
    for (index, line) in lines.iter().enumerate().skip(start) {
        if line.is_block_header() {
            depth += 1;
        } else if line.is_block_end() {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return Ok(index);
            }
        }
    }
    Err(error!(MissingEnd))
}
