pub struct Error {
    code: ErrorCode,
    line_number: Option<usize>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> Option<usize> {
        self.line_number
    }

    /// Tags the error with a source line. The first tag wins so the
    /// innermost statement is the one reported.
    pub fn in_line_number(self, line: usize) -> Error {
        if self.line_number.is_some() {
            return self;
        }
        Error {
            line_number: Some(line),
            ..self
        }
    }

    pub fn message(self, message: impl Into<String>) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }

    /// The message without the line suffix.
    pub fn text(&self) -> &str {
        if self.message.is_empty() {
            self.code.description()
        } else {
            &self.message
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError,
    MissingEntry,
    UnknownStatement,
    InvalidExpression,
    UndefinedVariable,
    UndefinedList,
    UndefinedProcedure,
    TypeMismatch,
    DivisionByZero,
    Overflow,
    MathDomain,
    ConstantRedefined,
    MissingEnd,
    NestedProcedure,
    BreakOutsideLoop,
    ElseWithoutIf,
    CallDepthExceeded,
    StepLimitExceeded,
    Interrupted,
}

impl ErrorCode {
    pub fn description(self) -> &'static str {
        use ErrorCode::*;
        match self {
            SyntaxError => "Syntax error",
            MissingEntry => "Program must start with When container main(int):",
            UnknownStatement => "Unknown statement",
            InvalidExpression => "Invalid expression",
            UndefinedVariable => "Variable not defined",
            UndefinedList => "List not defined",
            UndefinedProcedure => "Procedure not defined",
            TypeMismatch => "Type mismatch",
            DivisionByZero => "Division by zero",
            Overflow => "Numeric overflow",
            MathDomain => "Math domain error",
            ConstantRedefined => "Constant cannot be redefined",
            MissingEnd => "Block is missing its End;",
            NestedProcedure => "Procedure definitions cannot be nested",
            BreakOutsideLoop => "break or skip outside of a while loop",
            ElseWithoutIf => "else without a preceding if",
            CallDepthExceeded => "Procedure calls nested too deeply",
            StepLimitExceeded => "Step limit exceeded",
            Interrupted => "Interrupted",
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {:?}: {} }}", self.code, self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.line_number {
            Some(line) => write!(f, "{} (line {})", self.text(), line),
            None => write!(f, "{}", self.text()),
        }
    }
}

impl std::error::Error for Error {}
