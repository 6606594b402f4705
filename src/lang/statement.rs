use super::{ast::*, parse, Error, BLOCK_END};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

const INPUT_FROM: &str = "input from";

/// Classifies one logical line by its literal shape.
///
/// Rules are tried in a fixed order and the first matching prefix decides
/// the statement kind; a line whose prefix matches but whose shape does not
/// is a syntax error for that kind, not an unknown statement.
pub fn statement(text: &str) -> Result<Statement> {
    if text == BLOCK_END {
        return Ok(Statement::End);
    }
    if let Some(rest) = text.strip_prefix("def procedure") {
        return procedure(rest);
    }
    if let Some(rest) = text.strip_prefix("call ") {
        return call(rest);
    }
    if let Some(rest) = text.strip_prefix("def ") {
        return define(rest);
    }
    if text.starts_with("console.type") {
        let inner = enclosed(text, "console.type(", ");")
            .ok_or_else(|| error!(SyntaxError; "Invalid console.type"))?;
        return Ok(Statement::Print(parse::expression(inner)?));
    }
    if let Some(rest) = text.strip_prefix("if ") {
        return Ok(Statement::If(header_condition(rest, "if")?));
    }
    if text.starts_with("else:") {
        return Ok(Statement::Else);
    }
    if let Some(rest) = text.strip_prefix("while ") {
        return Ok(Statement::While(header_condition(rest, "while")?));
    }
    if text.starts_with("create list") {
        let inner = enclosed(text, "create list(", ");")
            .ok_or_else(|| error!(SyntaxError; "Invalid create list"))?;
        return match quoted(inner.trim()) {
            Some(name) if !name.is_empty() => Ok(Statement::CreateList(name.into())),
            _ => Err(error!(SyntaxError; "Invalid create list")),
        };
    }
    if text.starts_with("append") {
        let (name, value) = list_call(text, "append")?;
        return Ok(Statement::Append(name, parse::expression(value)?));
    }
    if text.starts_with("remove") {
        let (name, value) = list_call(text, "remove")?;
        return Ok(Statement::Remove(name, parse::expression(value)?));
    }
    if text.starts_with("List ") && text.contains(" length()") {
        return length(text);
    }
    if text.starts_with("filter") {
        let (name, cond) = list_call(text, "filter")?;
        return Ok(Statement::Filter(name, parse::condition(cond)?));
    }
    match text {
        "break;" => return Ok(Statement::Break),
        "skip;" => return Ok(Statement::Skip),
        _ => {}
    }
    if text.starts_with("return") {
        return Ok(Statement::Return);
    }
    Err(error!(UnknownStatement; format!("Unknown statement: {}", text)))
}

fn is_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

fn name(s: &str, what: &str) -> Result<Rc<str>> {
    let s = s.trim();
    if is_name(s) {
        Ok(s.into())
    } else {
        Err(error!(SyntaxError; format!("Invalid {} name: {}", what, s)))
    }
}

fn procedure(rest: &str) -> Result<Statement> {
    let header = rest
        .strip_suffix(':')
        .ok_or_else(|| error!(SyntaxError; "Procedure definition must end with ':'"))?;
    if !header.starts_with(char::is_whitespace) {
        return Err(error!(SyntaxError; "Invalid procedure definition"));
    }
    Ok(Statement::Procedure(name(header, "procedure")?))
}

fn call(rest: &str) -> Result<Statement> {
    let target = rest
        .strip_suffix(';')
        .ok_or_else(|| error!(SyntaxError; "Invalid call"))?;
    Ok(Statement::Call(name(target, "procedure")?))
}

fn define(rest: &str) -> Result<Statement> {
    let invalid = || error!(SyntaxError; "Invalid variable definition");
    let rest = rest.trim_start();
    let (binding, rest) = if let Some(rest) = rest.strip_prefix("var ") {
        (Binding::Var, rest)
    } else if let Some(rest) = rest.strip_prefix("const ") {
        (Binding::Const, rest)
    } else {
        return Err(invalid());
    };
    let rest = rest.strip_suffix(';').ok_or_else(invalid)?;
    let (target, value) = rest.split_once('=').ok_or_else(invalid)?;
    let target = target.trim();
    let value = value.trim();
    if !is_name(target) || value.is_empty() {
        return Err(invalid());
    }
    let initializer = match value.strip_prefix(INPUT_FROM) {
        Some(prompt) => {
            let prompt =
                quoted(prompt.trim()).ok_or_else(|| error!(SyntaxError; "Invalid input syntax"))?;
            Initializer::Input(prompt.to_string())
        }
        None => Initializer::Expression(parse::expression(value)?),
    };
    Ok(Statement::Define(binding, target.into(), initializer))
}

fn header_condition(rest: &str, what: &str) -> Result<Condition> {
    let cond = rest
        .strip_suffix(':')
        .ok_or_else(|| error!(SyntaxError; format!("{} header must end with ':'", what)))?;
    parse::condition(cond)
}

fn length(text: &str) -> Result<Statement> {
    let target = text
        .strip_prefix("List ")
        .and_then(|rest| rest.strip_suffix("length();"))
        .ok_or_else(|| error!(SyntaxError; "Invalid List length"))?;
    Ok(Statement::Length(name(target, "list")?))
}

/// Splits `KIND("NAME", REST);` into the list name and the unparsed rest.
fn list_call<'a>(text: &'a str, kind: &str) -> Result<(Rc<str>, &'a str)> {
    let invalid = || error!(SyntaxError; format!("Invalid {}", kind));
    let open = format!("{}(", kind);
    let inner = enclosed(text, &open, ");").ok_or_else(invalid)?;
    let inner = inner.trim_start().strip_prefix('"').ok_or_else(invalid)?;
    let (list, rest) = inner.split_once('"').ok_or_else(invalid)?;
    let rest = rest.trim_start().strip_prefix(',').ok_or_else(invalid)?;
    if list.is_empty() || rest.trim().is_empty() {
        return Err(invalid());
    }
    Ok((list.into(), rest))
}

fn enclosed<'a>(text: &'a str, open: &str, close: &str) -> Option<&'a str> {
    text.strip_prefix(open)?.strip_suffix(close)
}

fn quoted(s: &str) -> Option<&str> {
    s.strip_prefix('"')?.strip_suffix('"')
}
