#![allow(dead_code)]

use toksub::{BoxError, Token};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    Rune(char),
    Text(String),
    NewLine,
    Comment(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokKind {
    Rune,
    Text,
    NewLine,
    Comment,
}

impl Token for Tok {
    type Kind = TokKind;

    fn kind(&self) -> TokKind {
        match self {
            Tok::Rune(_) => TokKind::Rune,
            Tok::Text(_) => TokKind::Text,
            Tok::NewLine => TokKind::NewLine,
            Tok::Comment(_) => TokKind::Comment,
        }
    }
}

impl From<char> for Tok {
    fn from(c: char) -> Self {
        Tok::Rune(c)
    }
}

pub fn runes(s: &str) -> Vec<Tok> {
    s.chars().map(Tok::Rune).collect()
}

pub fn text(s: &str) -> Tok {
    Tok::Text(s.to_owned())
}

/// Joins a window of runes and texts into a single text token.
pub fn concat(window: &[Tok]) -> Result<Vec<Tok>, BoxError> {
    let mut joined = String::new();
    for token in window {
        match token {
            Tok::Rune(c) => joined.push(*c),
            Tok::Text(s) => joined.push_str(s),
            Tok::NewLine | Tok::Comment(_) => {}
        }
    }
    Ok(vec![Tok::Text(joined)])
}

/// Renders runes and newlines back into a string.
pub fn render(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .filter_map(|token| match token {
            Tok::Rune(c) => Some(*c),
            Tok::NewLine => Some('\n'),
            Tok::Text(_) | Tok::Comment(_) => None,
        })
        .collect()
}
