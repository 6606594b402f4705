use super::token::*;

pub fn lex(s: &str) -> Vec<Token> {
    FragmentLexer {
        chars: s.chars().peekable(),
    }
    .collect()
}

fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn number(&mut self) -> Option<Token> {
        let mut s = String::new();
        let mut dots = 0;
        while let Some(&ch) = self.chars().peek() {
            if ch.is_ascii_digit() {
                s.push(ch);
            } else if ch == '.' {
                dots += 1;
                s.push(ch);
            } else {
                break;
            }
            self.chars().next();
        }
        match dots {
            0 => Some(Token::Literal(Literal::Integer(s))),
            1 if s.len() > 1 => Some(Token::Literal(Literal::Float(s))),
            _ => Some(Token::Unknown(s)),
        }
    }

    fn string(&mut self) -> Option<Token> {
        let mut s = String::new();
        self.chars().next();
        loop {
            match self.chars().next() {
                Some('"') => return Some(Token::Literal(Literal::String(s))),
                Some(ch) => s.push(ch),
                None => {
                    s.insert(0, '"');
                    return Some(Token::Unknown(s));
                }
            }
        }
    }

    fn ident(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(&ch) = self.chars().peek() {
            if !is_ident_char(ch) {
                break;
            }
            s.push(ch);
            self.chars().next();
        }
        Some(Token::Ident(s))
    }

    fn minutia(&mut self) -> Option<Token> {
        let first = self.chars().next()?;
        let second = self.chars().peek().copied();
        if first == '$' && second == Some('$') {
            self.chars().next();
            return Some(Token::Placeholder);
        }
        match first {
            '(' => return Some(Token::LParen),
            ')' => return Some(Token::RParen),
            _ => {}
        }
        if let Some(second) = second {
            let pair: String = [first, second].iter().collect();
            if let Some(op) = operator(&pair) {
                self.chars().next();
                return Some(Token::Operator(op));
            }
        }
        match operator(first.encode_utf8(&mut [0; 4])) {
            Some(op) => Some(Token::Operator(op)),
            None => Some(Token::Unknown(first.to_string())),
        }
    }
}

fn operator(s: &str) -> Option<Operator> {
    Operator::SPELLINGS
        .iter()
        .find(|(spelling, _)| *spelling == s)
        .map(|(_, op)| *op)
}

struct FragmentLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Tokenizers<'a> for FragmentLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for FragmentLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        while is_whitespace(*self.chars.peek()?) {
            self.chars.next();
        }
        let pk = *self.chars.peek()?;
        if pk.is_ascii_digit() || pk == '.' {
            return self.number();
        }
        if is_ident_start(pk) {
            return self.ident();
        }
        if pk == '"' {
            return self.string();
        }
        self.minutia()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(lex("42"), [Token::Literal(Literal::Integer("42".into()))]);
        assert_eq!(lex("4.5"), [Token::Literal(Literal::Float("4.5".into()))]);
        assert_eq!(lex(".5"), [Token::Literal(Literal::Float(".5".into()))]);
        assert_eq!(lex("1.2.3"), [Token::Unknown("1.2.3".into())]);
        assert_eq!(lex("."), [Token::Unknown(".".into())]);
    }

    #[test]
    fn test_operators() {
        use Operator::*;
        let ops: Vec<Token> = [Power, Multiply, GreaterEqual, Greater, NotEqual, Equal, Minus]
            .iter()
            .map(|op| Token::Operator(*op))
            .collect();
        assert_eq!(lex("** * >= > != == -"), ops);
    }

    #[test]
    fn test_string_keeps_operators() {
        assert_eq!(
            lex(r#""a + b" + x"#),
            [
                Token::Literal(Literal::String("a + b".into())),
                Token::Operator(Operator::Plus),
                Token::Ident("x".into()),
            ]
        );
        assert_eq!(lex(r#""open"#), [Token::Unknown("\"open".into())]);
    }

    #[test]
    fn test_call_and_placeholder() {
        assert_eq!(
            lex("sqrt($$)"),
            [
                Token::Ident("sqrt".into()),
                Token::LParen,
                Token::Placeholder,
                Token::RParen,
            ]
        );
        assert_eq!(lex("$"), [Token::Unknown("$".into())]);
        assert_eq!(lex("x = 1")[1], Token::Unknown("=".into()));
    }
}
