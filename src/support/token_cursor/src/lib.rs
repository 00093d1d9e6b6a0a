/*
    ===================  support/token_cursor/src/lib.rs  ====================
    A forward-only cursor over command-line tokens.

    Values are read until the next token that names an option, so the
    cursor is paired with a `FlagSet` that knows which tokens those are.
    Lookahead is bounded and never rewinds past consumed tokens.
    ---------------------------------------------------------------------------
*/

pub trait FlagSet {
    fn is_flag(&self, token: &str) -> bool;
}

/// Recognizes no flags at all, every token is a value.
pub struct NoFlags;

impl FlagSet for NoFlags {
    fn is_flag(&self, _token: &str) -> bool {
        false
    }
}

impl<T: AsRef<str>> FlagSet for [T] {
    fn is_flag(&self, token: &str) -> bool {
        self.iter().any(|flag| flag.as_ref() == token)
    }
}

impl<T: AsRef<str>> FlagSet for Vec<T> {
    fn is_flag(&self, token: &str) -> bool {
        self.as_slice().is_flag(token)
    }
}

pub struct TokenCursor<'a> {
    tokens: &'a [String],
    position: usize,
    flags: &'a dyn FlagSet,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [String], flags: &'a dyn FlagSet) -> Self {
        Self {
            tokens,
            position: 0,
            flags,
        }
    }

    pub fn offset(&self) -> usize {
        self.position
    }

    pub fn is_done(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub fn peek(&self) -> Option<&'a str> {
        self.peek_nth(0)
    }

    pub fn peek_nth(&self, index: usize) -> Option<&'a str> {
        self.tokens
            .get(self.position + index)
            .map(String::as_str)
    }

    /// Peeks the next token only if it can be a value, that is, it names no option.
    pub fn peek_value(&self) -> Option<&'a str> {
        self.peek().filter(|token| !self.flags.is_flag(token))
    }

    pub fn next_value(&mut self) -> Option<&'a str> {
        let token = self.peek_value()?;
        self.position += 1;
        Some(token)
    }

    /// Tokens consumed since an earlier `offset()`.
    pub fn consumed_since(&self, start: usize) -> &'a [String] {
        &self.tokens[start.min(self.position)..self.position]
    }

    pub fn remaining(&self) -> &'a [String] {
        &self.tokens[self.position.min(self.tokens.len())..]
    }
}

impl<'a> Iterator for TokenCursor<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }
}
