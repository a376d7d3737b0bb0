use super::error::{CodePosition, Error, ErrorType, Result};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum LexerMode {
    None,
    Plain,
    Quoted,
    Comment,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TokenType {
    /// A bare word, bounded by whitespace or a delimiter.
    Plain(String),
    /// A double-quoted span, quotes included.
    Quoted(String),
    Semicolon,
    OpenBrace,
    CloseBrace,
    Eof,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub token_type: TokenType,
    pub line: u32,
    pub col: u16,
}

impl Token {
    pub fn new(line: u32, col: u16, ty: TokenType) -> Token {
        Token {
            line,
            col,
            token_type: ty,
        }
    }
}

/// Character-at-a-time scanner producing one token per `next_token` call.
///
/// A word directly followed by `;`, `{`, `}` or the end of input is emitted
/// first; the delimiter event is held back and returned by the next call.
pub struct Lexer<'a> {
    line: u32,
    col: u16,
    input: Box<dyn Iterator<Item = char> + 'a>,
    mode: LexerMode,
    escaped: bool,
    tmp: String,
    start: (u32, u16),
    force_next: Option<Token>,
    done: bool,
}

impl CodePosition for Lexer<'_> {
    fn location(&self) -> (u32, u16) {
        (self.line, self.col)
    }
}

impl<'a> Lexer<'a> {
    pub fn new(input: Box<dyn Iterator<Item = char> + 'a>) -> Lexer<'a> {
        Lexer {
            line: 1,
            col: 0,
            input,
            mode: LexerMode::None,
            escaped: false,
            tmp: String::new(),
            start: (1, 0),
            force_next: None,
            done: false,
        }
    }

    pub fn next_token(&mut self) -> Result<Token> {
        if let Some(t) = self.force_next.take() {
            return Ok(t);
        }
        loop {
            let c = self.next_char();
            let mode = self.mode;
            match (c, mode) {
                (Some('"'), LexerMode::Quoted) if !self.escaped => {
                    self.tmp.push('"');
                    return Ok(self.end_token());
                }
                (Some(x), LexerMode::Quoted) => {
                    self.tmp.push(x);
                    self.escaped = !self.escaped && x == '\\';
                }
                (None, LexerMode::Quoted) => return self.fail(ErrorType::UnterminatedQuote),

                (Some('\n'), LexerMode::Comment) => self.mode = LexerMode::None,
                (Some(_), LexerMode::Comment) => {}
                (None, LexerMode::Comment) => {
                    self.mode = LexerMode::None;
                    return Ok(self.delimiter(TokenType::Eof));
                }

                (Some('"'), LexerMode::Plain) => return self.fail(ErrorType::QuoteInsideToken),
                (Some(x), LexerMode::Plain) if x.is_whitespace() => return Ok(self.end_token()),
                (Some('#'), LexerMode::Plain) => {
                    let t = self.end_token();
                    self.mode = LexerMode::Comment;
                    return Ok(t);
                }
                (Some(x @ (';' | '{' | '}')), LexerMode::Plain) => {
                    let t = self.end_token();
                    self.force_next = Some(self.delimiter(delimiter_type(x)));
                    return Ok(t);
                }
                (Some(x), LexerMode::Plain) => self.tmp.push(x),
                (None, LexerMode::Plain) => {
                    let t = self.end_token();
                    self.force_next = Some(self.delimiter(TokenType::Eof));
                    return Ok(t);
                }

                (Some(x), LexerMode::None) if x.is_whitespace() => {}
                (Some('#'), LexerMode::None) => self.mode = LexerMode::Comment,
                (Some('"'), LexerMode::None) => {
                    self.start_token(LexerMode::Quoted);
                    self.tmp.push('"');
                }
                (Some(x @ (';' | '{' | '}')), LexerMode::None) => {
                    return Ok(self.delimiter(delimiter_type(x)));
                }
                (Some(x), LexerMode::None) => {
                    self.start_token(LexerMode::Plain);
                    self.tmp.push(x);
                }
                (None, LexerMode::None) => return Ok(self.delimiter(TokenType::Eof)),
            }
        }
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.input.next()?;
        if c == '\n' {
            self.line += 1;
            self.col = 0;
        } else {
            self.col = self.col.saturating_add(1);
        }
        Some(c)
    }

    fn start_token(&mut self, mode: LexerMode) {
        self.tmp = String::new();
        self.escaped = false;
        self.start = (self.line, self.col);
        self.mode = mode;
    }

    fn end_token(&mut self) -> Token {
        let text = std::mem::take(&mut self.tmp);
        let ty = match self.mode {
            LexerMode::Quoted => TokenType::Quoted(text),
            _ => TokenType::Plain(text),
        };
        self.mode = LexerMode::None;
        let t = Token::new(self.start.0, self.start.1, ty);
        log::trace!("token {:?} at {}:{}", t.token_type, t.line, t.col);
        t
    }

    fn delimiter(&self, ty: TokenType) -> Token {
        log::trace!("event {:?} at {}:{}", ty, self.line, self.col);
        Token::new(self.line, self.col, ty)
    }

    fn fail<T>(&self, error_type: ErrorType) -> Result<T> {
        Err(Error::from_state(self, error_type))
    }
}

fn delimiter_type(c: char) -> TokenType {
    match c {
        ';' => TokenType::Semicolon,
        '{' => TokenType::OpenBrace,
        _ => TokenType::CloseBrace,
    }
}

/// Yields tokens up to and including `Eof`, or up to the first error.
impl Iterator for Lexer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Result<Token>> {
        if self.done {
            return None;
        }
        let t = self.next_token();
        self.done = match &t {
            Ok(tok) => tok.token_type == TokenType::Eof,
            Err(_) => true,
        };
        Some(t)
    }
}

pub fn run<'a>(input: Box<dyn Iterator<Item = char> + 'a>) -> Result<Vec<Token>> {
    Lexer::new(input).collect()
}
