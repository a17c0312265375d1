//! Shared test writers.

#![allow(dead_code)]

use xml_marshal::{Error, Result, Token, TokenWriter};

/// Records every token it accepts and fails on a chosen one.
#[derive(Default)]
pub struct FlakyWriter {
    pub tokens: Vec<Token<'static>>,
    /// 1-based index of the forward that fails.
    pub fail_on: Option<usize>,
    pub fail_flush: bool,
    pub attempts: usize,
    pub flushes: usize,
}

impl FlakyWriter {
    pub fn failing_on(n: usize) -> Self {
        FlakyWriter {
            fail_on: Some(n),
            ..Default::default()
        }
    }

    pub fn failing_flush() -> Self {
        FlakyWriter {
            fail_flush: true,
            ..Default::default()
        }
    }
}

impl TokenWriter for FlakyWriter {
    fn write_token(&mut self, token: &Token<'_>) -> Result<()> {
        self.attempts += 1;
        if self.fail_on == Some(self.attempts) {
            return Err(Error::io("connection reset"));
        }
        self.tokens.push(token.clone().into_owned());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        if self.fail_flush {
            return Err(Error::io("flush failed"));
        }
        Ok(())
    }
}

/// Checks that `tokens` form one well-nested block and returns its outer name.
pub fn outer_block(tokens: &[Token<'_>]) -> Option<String> {
    let mut open: Vec<&str> = Vec::new();
    let mut outer = None;
    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::Start(start) => {
                if i == 0 {
                    outer = Some(start.name.to_string());
                } else if open.is_empty() {
                    return None;
                }
                open.push(&start.name);
            }
            Token::End(end) => {
                if open.pop() != Some(&*end.name) {
                    return None;
                }
            }
            Token::Text(_) => {
                if open.is_empty() {
                    return None;
                }
            }
        }
    }
    if open.is_empty() {
        outer
    } else {
        None
    }
}
