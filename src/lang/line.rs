use std::rc::Rc;

pub const BLOCK_END: &str = "End;";

/// One logical statement line with the physical line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    number: usize,
    text: Rc<str>,
}

impl Line {
    pub fn new(number: usize, text: &str) -> Line {
        Line {
            number,
            text: text.into(),
        }
    }

    /// 1-based line number in the source text.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_block_end(&self) -> bool {
        &*self.text == BLOCK_END
    }

    /// Lines ending in `:` open a block that a later `End;` closes.
    pub fn is_block_header(&self) -> bool {
        self.text.ends_with(':')
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
