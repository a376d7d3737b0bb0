use thiserror::Error as ThisError;

/// Anything that knows where in the input it currently is.
pub trait CodePosition {
    fn location(&self) -> (u32, u16);
}

/// Which half of the pipeline rejected the input.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorClass {
    Lexical,
    Structural,
}

#[derive(Debug, PartialEq, Eq, Clone, ThisError)]
pub enum ErrorType {
    #[error("quote character inside an unquoted token")]
    QuoteInsideToken,
    #[error("unterminated quoted token")]
    UnterminatedQuote,
    #[error("closing brace without a matching opening brace")]
    UnmatchedClose,
    #[error("block was never closed")]
    UnclosedBlock,
    #[error("statement is missing a terminating ';'")]
    UnterminatedStatement,
    #[error("block opened without a name")]
    MissingBlockName,
}

impl ErrorType {
    pub fn class(&self) -> ErrorClass {
        match self {
            ErrorType::QuoteInsideToken | ErrorType::UnterminatedQuote => ErrorClass::Lexical,
            ErrorType::UnmatchedClose
            | ErrorType::UnclosedBlock
            | ErrorType::UnterminatedStatement
            | ErrorType::MissingBlockName => ErrorClass::Structural,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, ThisError)]
#[error("{line}:{col}: {error_type}")]
pub struct Error {
    pub line: u32,
    pub col: u16,
    pub error_type: ErrorType,
}

impl Error {
    pub fn new(line: u32, col: u16, error_type: ErrorType) -> Error {
        Error {
            line,
            col,
            error_type,
        }
    }

    pub fn from_state<S: CodePosition + ?Sized>(state: &S, error_type: ErrorType) -> Error {
        let (line, col) = state.location();
        Error::new(line, col, error_type)
    }

    pub fn class(&self) -> ErrorClass {
        self.error_type.class()
    }
}

/// Failure of one of the stream or file entry points.
#[derive(Debug, ThisError)]
pub enum LoadError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::*;

    struct Fixed(u32, u16);

    impl CodePosition for Fixed {
        fn location(&self) -> (u32, u16) {
            (self.0, self.1)
        }
    }

    #[test]
    fn builds_error_from_position() {
        assert_eq!(
            Error::from_state(&Fixed(3, 7), ErrorType::UnmatchedClose),
            Error::new(3, 7, ErrorType::UnmatchedClose)
        );
    }

    #[test]
    fn classifies_errors() {
        assert_eq!(ErrorType::QuoteInsideToken.class(), ErrorClass::Lexical);
        assert_eq!(ErrorType::UnterminatedQuote.class(), ErrorClass::Lexical);
        assert_eq!(ErrorType::UnclosedBlock.class(), ErrorClass::Structural);
        assert_eq!(ErrorType::MissingBlockName.class(), ErrorClass::Structural);
    }

    #[test]
    fn displays_position_and_reason() {
        let e = Error::new(2, 5, ErrorType::UnterminatedStatement);
        assert_eq!(e.to_string(), "2:5: statement is missing a terminating ';'");
    }
}
