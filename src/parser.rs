use super::config::{Block, Statement};
use super::error::{CodePosition, Error, ErrorType, Result};
use super::lexer::{Lexer, Token, TokenType};

/// A block whose `{` has been consumed but whose `}` has not.
struct OpenBlock {
    tokens: Vec<String>,
    block: Block,
}

struct ParseState<'a> {
    tokens: Lexer<'a>,
    position: (u32, u16),
    buffer: Vec<String>,
    root: Block,
    open: Vec<OpenBlock>,
    max_depth: usize,
}

impl CodePosition for ParseState<'_> {
    fn location(&self) -> (u32, u16) {
        self.position
    }
}

impl ParseState<'_> {
    fn current(&mut self) -> &mut Block {
        match self.open.last_mut() {
            Some(open) => &mut open.block,
            None => &mut self.root,
        }
    }

    fn end_statement(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let tokens = std::mem::take(&mut self.buffer);
        self.current().push(Statement::new(tokens, None));
    }

    fn open_block(&mut self) -> Result<()> {
        if self.buffer.is_empty() {
            return fail(self, ErrorType::MissingBlockName);
        }
        let tokens = std::mem::take(&mut self.buffer);
        log::trace!("open block {:?} at depth {}", tokens, self.open.len() + 1);
        self.open.push(OpenBlock {
            tokens,
            block: Block::default(),
        });
        self.max_depth = self.max_depth.max(self.open.len());
        Ok(())
    }

    fn close_block(&mut self) -> Result<()> {
        let OpenBlock { tokens, block } = match self.open.pop() {
            Some(open) => open,
            None => return fail(self, ErrorType::UnmatchedClose),
        };
        if !self.buffer.is_empty() {
            return fail(self, ErrorType::UnterminatedStatement);
        }
        log::trace!("close block {:?} at depth {}", tokens, self.open.len() + 1);
        self.current().push(Statement::new(tokens, Some(block)));
        Ok(())
    }

    fn finish(self) -> Result<Block> {
        if !self.buffer.is_empty() {
            return fail(&self, ErrorType::UnterminatedStatement);
        }
        if !self.open.is_empty() {
            return fail(&self, ErrorType::UnclosedBlock);
        }
        log::debug!(
            "parsed {} top-level statements, max depth {}",
            self.root.len(),
            self.max_depth
        );
        Ok(self.root)
    }
}

/// Builds the statement tree, pulling one token at a time from `tokens`.
pub fn run(tokens: Lexer<'_>) -> Result<Block> {
    let mut state = ParseState {
        tokens,
        position: (0, 0),
        buffer: vec![],
        root: Block::default(),
        open: vec![],
        max_depth: 0,
    };

    loop {
        let Token {
            token_type,
            line,
            col,
        } = state.tokens.next_token()?;
        state.position = (line, col);
        match token_type {
            TokenType::Plain(word) | TokenType::Quoted(word) => state.buffer.push(word),
            TokenType::Semicolon => state.end_statement(),
            TokenType::OpenBrace => state.open_block()?,
            TokenType::CloseBrace => state.close_block()?,
            TokenType::Eof => return state.finish(),
        }
    }
}

fn fail<T>(state: &ParseState<'_>, error_type: ErrorType) -> Result<T> {
    Err(Error::from_state(state, error_type))
}
