use super::{BoxError, Chain, Error};
use log::{debug, trace};
use std::{fmt, ops::Range};


/// A piecewise token substitution engine.
///
/// Whereas [`replace_tokens`] performs substitution in one shot, this type
/// separates finding a window from replacing it, so callers can decide per
/// window what to emit.
///
/// Scanning walks the input once. At each start position the chain's steps
/// are applied in order, each from where the previous one stopped. When a
/// step fails, the token at the start position is emitted unchanged and the
/// whole chain is retried one token later. Steps that already matched are
/// never asked to give tokens back.
pub struct ReplaceTokens<'t, 'c, T> {
    tokens: &'t [T],
    chain: &'c Chain<'c, T>,
    replacements: usize,
    found: usize,
    result: Vec<T>,
    /// Everything before this index has been emitted.
    last_pos: usize,
    current: Option<Range<usize>>,
}

impl<'t, 'c, T: Clone> ReplaceTokens<'t, 'c, T> {
    /// Creates an engine that reports at most `n` windows, or every window if
    /// `n` is `None`.
    #[must_use]
    pub fn new(tokens: &'t [T], chain: &'c Chain<'c, T>, n: Option<usize>) -> Self {
        Self {
            tokens,
            chain,
            replacements: n.unwrap_or(usize::MAX),
            found: 0,
            result: Vec::with_capacity(tokens.len()),
            last_pos: 0,
            current: None,
        }
    }

    /// Advances to the next matched window, emitting every token skipped on
    /// the way. A window that was not explicitly replaced is kept as is.
    pub fn next(&mut self) -> Option<&'t [T]> {
        self.keep_current();
        if self.replacements == 0 {
            return None;
        }

        let chain = self.chain;
        let steps = chain.steps();
        let tokens = self.tokens;
        let mut step = 0;
        let mut start = self.last_pos;
        let mut cursor = start;

        while cursor < tokens.len() {
            if let Some(consumed) = steps[step].apply(&tokens[cursor..]) {
                cursor += consumed;
                step += 1;
                if step < steps.len() {
                    continue;
                }
                if cursor > start {
                    return Some(self.record(start..cursor));
                }
                // every step matched nothing, which is no window at all
            }

            trace!("no match at {start}");
            self.result.push(tokens[start].clone());
            step = 0;
            start += 1;
            cursor = start;
        }

        // Input ran out in the middle of an attempt. It still counts if the
        // remaining steps are all satisfied by nothing.
        if step > 0 && steps[step..].iter().all(super::Step::accepts_empty) {
            return Some(self.record(start..tokens.len()));
        }

        self.last_pos = start;
        None
    }

    /// Emits `replacement` in place of the current window. If `replacement` is
    /// `None`, the original tokens are kept.
    pub fn replace(&mut self, replacement: Option<Vec<T>>) {
        let Some(window) = self.current.take() else {
            return;
        };
        match replacement {
            Some(replacement) => self.result.extend(replacement),
            None => self.result.extend_from_slice(&self.tokens[window.clone()]),
        }
        self.last_pos = window.end;
    }

    /// The range of the window returned by the last call to
    /// [`next`](Self::next), until it is replaced.
    #[must_use]
    pub fn current(&self) -> Option<Range<usize>> {
        self.current.clone()
    }

    /// Returns the output and the number of windows found, consuming the
    /// engine.
    #[must_use]
    pub fn finish(mut self) -> (Vec<T>, usize) {
        self.keep_current();
        self.result.extend_from_slice(&self.tokens[self.last_pos..]);
        debug!(
            "replaced {} window(s), {} -> {} tokens",
            self.found,
            self.tokens.len(),
            self.result.len()
        );
        (self.result, self.found)
    }

    fn record(&mut self, window: Range<usize>) -> &'t [T] {
        trace!("matched {window:?}");
        self.found += 1;
        self.replacements -= 1;
        self.last_pos = window.start;
        self.current = Some(window.clone());
        &self.tokens[window]
    }

    fn keep_current(&mut self) {
        self.replace(None);
    }
}

/// A scan stopped by a failing replacement callback.
#[derive(Debug)]
pub struct Aborted<T> {
    /// The output built before the failing window.
    pub output: Vec<T>,
    pub error: Error,
}

impl<T> fmt::Display for Aborted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl<T: fmt::Debug> std::error::Error for Aborted<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Returns a copy of `tokens` in which every window matched by `chain` is
/// replaced by what `replace` returns for it. Tokens outside of matched
/// windows are copied unchanged.
///
/// # Errors
///
/// If `replace` fails, scanning stops and the output built so far is returned
/// together with [`Error::Replace`].
pub fn replace_tokens<T, F>(
    tokens: &[T],
    chain: &Chain<'_, T>,
    mut replace: F,
) -> Result<Vec<T>, Aborted<T>>
where
    T: Clone,
    F: FnMut(&[T]) -> Result<Vec<T>, BoxError>,
{
    let mut generator = ReplaceTokens::new(tokens, chain, None);
    while let Some(window) = generator.next() {
        match replace(window) {
            Ok(replacement) => generator.replace(Some(replacement)),
            Err(source) => {
                let window = generator.current().unwrap_or_default();
                debug!("replacement failed for {window:?}: {source}");
                return Err(Aborted {
                    output: generator.result,
                    error: Error::Replace { window, source },
                });
            }
        }
    }

    Ok(generator.finish().0)
}
