//! Parser for nginx-style configuration text.
//!
//! Input is split into words, `;`, `{` and `}` by [`lexer`], then assembled
//! by [`parser`] into a [`Block`] of [`Statement`]s, where a statement ending
//! in `{ ... }` owns the nested block.
//!
//! ```
//! let cfg = nginx_config_parser::parse("http {\n  listen 8080;\n}").unwrap();
//! let listen = cfg.path(&["http", "listen"]).unwrap();
//! assert_eq!(listen.get(1), Some("8080"));
//! ```

pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;

use std::io::Read;
use std::path::Path;

pub use config::{Block, Statement};
pub use error::{Error as ParseError, ErrorClass, ErrorType, LoadError, Result};

pub fn parse(data: &str) -> Result<Block> {
    log::debug!("parsing {} bytes of configuration", data.len());
    let tokens = lexer::Lexer::new(Box::new(data.chars()));
    let config = parser::run(tokens);
    if let Err(ref e) = config {
        log::debug!("configuration rejected: {}", e);
    }
    config
}

/// Reads the whole stream, then parses it.
pub fn parse_reader<R: Read>(mut reader: R) -> std::result::Result<Block, LoadError> {
    let mut data = String::new();
    reader.read_to_string(&mut data)?;
    Ok(parse(&data)?)
}

pub fn parse_file<P: AsRef<Path>>(path: P) -> std::result::Result<Block, LoadError> {
    let path = path.as_ref();
    log::debug!("loading configuration from {}", path.display());
    let data = std::fs::read_to_string(path)?;
    Ok(parse(&data)?)
}
