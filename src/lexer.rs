use super::Result;
use log::trace;
use std::{
    io::Read,
    str::{Chars, Utf8Chunks},
};

/// Splits UTF-8 input into characters.
///
/// Invalid byte sequences are skipped, as are NUL and the replacement
/// character.
pub struct Lexer<'a> {
    chunks: Utf8Chunks<'a>,
    chars: Chars<'a>,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a [u8]) -> Self {
        Lexer {
            chunks: input.utf8_chunks(),
            chars: "".chars(),
        }
    }

    pub fn next_char(&mut self) -> Option<char> {
        loop {
            if let Some(c) = self.chars.next() {
                if c == '\0' || c == char::REPLACEMENT_CHARACTER {
                    continue;
                }
                return Some(c);
            }

            let chunk = self.chunks.next()?;
            if !chunk.invalid().is_empty() {
                trace!("skipping invalid UTF-8 {:?}", chunk.invalid());
            }
            self.chars = chunk.valid().chars();
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_char()
    }
}

/// Reads `reader` to the end and returns one token per character.
///
/// # Errors
///
/// If reading fails, an [`Error::Io`](crate::Error::Io) is returned.
pub fn lex<T: From<char>>(mut reader: impl Read) -> Result<Vec<T>> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    Ok(Lexer::new(&input).map(T::from).collect())
}
