use super::{ast::*, lex::lex, token::*, Error, ErrorCode};

type Result<T> = std::result::Result<T, Error>;

/// Deepest tree a fragment may build. Parsing, evaluating and dropping a
/// tree all recurse once per level.
const MAX_DEPTH: usize = 200;
const TOO_DEEP: &str = "Expression nested too deeply";

/// An expression and the depth of its tree.
type Node = (Expression, usize);

/// Parses a statement fragment into an expression tree.
///
/// Loosest to tightest: `+` concatenation, `**`, `*`, `/`, `-`. Each
/// arithmetic level splits at its first operator and takes everything to the
/// right as its right operand, so `a - b - c` is `a - (b - c)` and
/// `a * b - c` is `a * (b - c)`.
pub fn expression(s: &str) -> Result<Expression> {
    let tokens = lex(s);
    let mut parse = Parser::new(&tokens);
    let (expr, _) = parse
        .concat()
        .map_err(|e| parse.rejected(e, "expression", s))?;
    if parse.peek().is_some() {
        return Err(invalid("expression", s));
    }
    Ok(expr)
}

/// Parses `not COND`, `EXPR OP EXPR` or a bare `EXPR`.
pub fn condition(s: &str) -> Result<Condition> {
    let tokens = lex(s);
    let mut parse = Parser::new(&tokens);
    let cond = parse
        .condition()
        .map_err(|e| parse.rejected(e, "condition", s))?;
    if parse.peek().is_some() {
        return Err(invalid("condition", s));
    }
    Ok(cond)
}

fn invalid(what: &str, s: &str) -> Error {
    error!(InvalidExpression; format!("Invalid {}: {}", what, s.trim()))
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    open: usize,
    too_deep: bool,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Parser<'a> {
        Parser {
            tokens,
            pos: 0,
            open: 0,
            too_deep: false,
        }
    }

    /// Overflow and nesting errors keep their own message; anything else
    /// reports the whole fragment as invalid.
    fn rejected(&self, e: Error, what: &str, s: &str) -> Error {
        match e.code() {
            ErrorCode::Overflow => e,
            _ if self.too_deep => e,
            _ => invalid(what, s),
        }
    }

    fn limit(&mut self, depth: usize) -> Result<usize> {
        if depth > MAX_DEPTH {
            self.too_deep = true;
            return Err(error!(SyntaxError; TOO_DEEP));
        }
        Ok(depth)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let t = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(t)
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn peek_operator(&self, op: Operator) -> bool {
        matches!(self.peek(), Some(Token::Operator(o)) if *o == op)
    }

    /// `not` negates unless it is used as a plain name.
    fn peek_not(&self) -> bool {
        match (self.peek(), self.tokens.get(self.pos + 1)) {
            (Some(Token::Ident(word)), Some(next)) if word == "not" => {
                !matches!(next, Token::Operator(_) | Token::RParen)
            }
            _ => false,
        }
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        match self.next() {
            Some(t) if *t == token => Ok(()),
            _ => Err(error!(SyntaxError; format!("Expected {}", token))),
        }
    }

    fn condition(&mut self) -> Result<Condition> {
        let mut negations = 0;
        while self.peek_not() {
            self.next();
            negations = self.limit(negations + 1)?;
        }
        let (lhs, _) = self.concat()?;
        let cond = match self.peek() {
            Some(Token::Operator(op)) if op.is_comparison() => {
                let comparison = Self::comparison(*op);
                self.next();
                let (rhs, _) = self.concat()?;
                Condition::Compare(comparison, lhs, rhs)
            }
            _ => Condition::Truthy(lhs),
        };
        Ok((0..negations).fold(cond, |cond, _| Condition::Not(Box::new(cond))))
    }

    fn comparison(op: Operator) -> Comparison {
        match op {
            Operator::NotEqual => Comparison::NotEqual,
            Operator::GreaterEqual => Comparison::GreaterEqual,
            Operator::LessEqual => Comparison::LessEqual,
            Operator::Greater => Comparison::Greater,
            Operator::Less => Comparison::Less,
            _ => Comparison::Equal,
        }
    }

    fn concat(&mut self) -> Result<Node> {
        let first = self.power()?;
        if !self.peek_operator(Operator::Plus) {
            return Ok(first);
        }
        let mut depth = first.1;
        let mut parts = vec![first.0];
        while self.peek_operator(Operator::Plus) {
            self.next();
            let (part, part_depth) = self.power()?;
            depth = depth.max(part_depth);
            parts.push(part);
        }
        let depth = self.limit(depth + 1)?;
        Ok((Expression::Concat(parts), depth))
    }

    fn power(&mut self) -> Result<Node> {
        self.binary(Operator::Power, Self::product, Expression::Power)
    }

    fn product(&mut self) -> Result<Node> {
        self.binary(Operator::Multiply, Self::quotient, Expression::Multiply)
    }

    fn quotient(&mut self) -> Result<Node> {
        self.binary(Operator::Divide, Self::difference, Expression::Divide)
    }

    fn difference(&mut self) -> Result<Node> {
        self.binary(Operator::Minus, Self::operand, Expression::Subtract)
    }

    /// Collects `operand (op operand)*` and folds it from the right.
    fn binary(
        &mut self,
        op: Operator,
        operand: fn(&mut Self) -> Result<Node>,
        build: fn(Box<Expression>, Box<Expression>) -> Expression,
    ) -> Result<Node> {
        let first = operand(self)?;
        let mut rest = vec![];
        while self.peek_operator(op) {
            self.next();
            rest.push(operand(self)?);
        }
        let last = match rest.pop() {
            Some(last) => last,
            None => return Ok(first),
        };
        rest.into_iter()
            .rev()
            .chain(std::iter::once(first))
            .try_fold(last, |(rhs, rhs_depth), (lhs, lhs_depth)| {
                let depth = self.limit(lhs_depth.max(rhs_depth) + 1)?;
                Ok((build(Box::new(lhs), Box::new(rhs)), depth))
            })
    }

    /// Parses the inside of a `(`, up to and including its `)`.
    fn group(&mut self) -> Result<Node> {
        let open = self.limit(self.open + 1)?;
        self.open = open;
        let inner = self.concat()?;
        self.expect(Token::RParen)?;
        self.open -= 1;
        Ok(inner)
    }

    fn operand(&mut self) -> Result<Node> {
        match self.next() {
            Some(Token::Literal(lit)) => Ok((Expression::for_literal(lit)?, 1)),
            Some(Token::Placeholder) => Ok((Expression::Placeholder, 1)),
            Some(Token::Ident(name)) => {
                if self.peek() != Some(&Token::LParen) {
                    return Ok((Expression::Var(name.as_str().into()), 1));
                }
                let function = match Function::from_name(name) {
                    Some(f) => f,
                    None => return Err(error!(SyntaxError; "Unknown function")),
                };
                self.next();
                let (inner, depth) = self.group()?;
                let depth = self.limit(depth + 1)?;
                Ok((Expression::Function(function, Box::new(inner)), depth))
            }
            Some(Token::LParen) => self.group(),
            _ => Err(error!(SyntaxError; "Expected operand")),
        }
    }
}

impl Expression {
    fn for_literal(lit: &Literal) -> Result<Expression> {
        match lit {
            Literal::Integer(s) => match s.parse() {
                Ok(n) => Ok(Expression::Integer(n)),
                Err(_) => Err(error!(Overflow; format!("Integer literal too large: {}", s))),
            },
            Literal::Float(s) => match s.parse() {
                Ok(n) => Ok(Expression::Float(n)),
                Err(_) => Err(error!(SyntaxError; "Bad float literal")),
            },
            Literal::String(s) => Ok(Expression::String(s.as_str().into())),
        }
    }
}
