use std::rc::Rc;

#[derive(Debug, PartialEq)]
pub enum Statement {
    /// `def procedure NAME:`
    Procedure(Rc<str>),
    /// `call NAME;`
    Call(Rc<str>),
    /// `def var|const NAME = VALUE;`
    Define(Binding, Rc<str>, Initializer),
    /// `console.type(EXPR);`
    Print(Expression),
    If(Condition),
    Else,
    While(Condition),
    CreateList(Rc<str>),
    Append(Rc<str>, Expression),
    Remove(Rc<str>, Expression),
    Length(Rc<str>),
    Filter(Rc<str>, Condition),
    Break,
    Skip,
    Return,
    /// A terminator reached by the dispatcher closes the main container.
    End,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Binding {
    Var,
    Const,
}

#[derive(Debug, PartialEq)]
pub enum Initializer {
    Expression(Expression),
    Input(String),
}

#[derive(Debug, PartialEq)]
pub enum Expression {
    Integer(i64),
    Float(f64),
    String(Rc<str>),
    Var(Rc<str>),
    /// `$$`, the element under test in a filter condition.
    Placeholder,
    Function(Function, Box<Expression>),
    /// Every part is stringified and joined. Never numeric.
    Concat(Vec<Expression>),
    Power(Box<Expression>, Box<Expression>),
    Multiply(Box<Expression>, Box<Expression>),
    Divide(Box<Expression>, Box<Expression>),
    Subtract(Box<Expression>, Box<Expression>),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Function {
    Sqrt,
    Cbrt,
    Round,
    Floor,
    Ceiling,
}

impl Function {
    pub fn from_name(name: &str) -> Option<Function> {
        use Function::*;
        match name {
            "sqrt" => Some(Sqrt),
            "cbrt" => Some(Cbrt),
            "round" => Some(Round),
            "floor" => Some(Floor),
            "ceiling" => Some(Ceiling),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Condition {
    Not(Box<Condition>),
    Compare(Comparison, Expression, Expression),
    /// No comparison operator: the value's truthiness decides.
    Truthy(Expression),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Comparison {
    Equal,
    NotEqual,
    GreaterEqual,
    LessEqual,
    Greater,
    Less,
}
