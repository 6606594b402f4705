#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Literal(Literal),
    Operator(Operator),
    Ident(String),
    Placeholder,
    LParen,
    RParen,
}

impl Token {
    pub fn is_comparison(&self) -> bool {
        matches!(self, Token::Operator(op) if op.is_comparison())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Literal(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            Placeholder => write!(f, "$$"),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Integer(String),
    Float(String),
    String(String),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Integer(s) => write!(f, "{}", s),
            Float(s) => write!(f, "{}", s),
            String(s) => write!(f, "\"{}\"", s),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Plus,
    Power,
    Multiply,
    Divide,
    Minus,
    Equal,
    NotEqual,
    GreaterEqual,
    LessEqual,
    Greater,
    Less,
}

impl Operator {
    /// Longest spellings first so `**` wins over `*` and `>=` over `>`.
    pub const SPELLINGS: [(&'static str, Operator); 11] = [
        ("**", Operator::Power),
        ("==", Operator::Equal),
        ("!=", Operator::NotEqual),
        (">=", Operator::GreaterEqual),
        ("<=", Operator::LessEqual),
        ("+", Operator::Plus),
        ("*", Operator::Multiply),
        ("/", Operator::Divide),
        ("-", Operator::Minus),
        (">", Operator::Greater),
        ("<", Operator::Less),
    ];

    pub fn is_comparison(&self) -> bool {
        use Operator::*;
        match self {
            Equal | NotEqual | GreaterEqual | LessEqual | Greater | Less => true,
            Plus | Power | Multiply | Divide | Minus => false,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Power => write!(f, "**"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Minus => write!(f, "-"),
            Equal => write!(f, "=="),
            NotEqual => write!(f, "!="),
            GreaterEqual => write!(f, ">="),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            Less => write!(f, "<"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let t = Token::Literal(Literal::String("hi".to_string()));
        assert_eq!(t.to_string(), "\"hi\"");
        assert_eq!(Token::Operator(Operator::Power).to_string(), "**");
        assert!(Token::Operator(Operator::LessEqual).is_comparison());
        assert!(!Token::Operator(Operator::Minus).is_comparison());
    }
}
