//! Find runs of tokens that satisfy a chain of quantified predicates and
//! replace them.

#![warn(clippy::pedantic, rust_2018_idioms)]
#![allow(clippy::missing_errors_doc)]

pub mod chain;
pub mod engine;
pub mod lexer;
pub mod token;

use std::ops::Range;

pub use self::{
    chain::{Chain, Quantifier, Step, alternate, any, equal_kind, equal_value, satisfy},
    engine::{Aborted, ReplaceTokens, replace_tokens},
    lexer::{Lexer, lex},
    token::Token,
};

/// The error type returned by replacement callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A chain was built without any steps.
    #[error("a chain needs at least one step")]
    EmptyChain,

    /// The replacement callback refused a matched window.
    #[error("replacement failed for tokens {window:?}")]
    Replace {
        window: Range<usize>,
        #[source]
        source: BoxError,
    },

    /// The lexer input could not be read.
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
