//! Predicate steps and the chains built from them.

pub mod combinator;
pub mod quantifier;

pub use self::{
    combinator::{alternate, any, equal_kind, equal_value, satisfy},
    quantifier::Quantifier,
};
use super::{Error, Result};

type Matcher<'a, T> = dyn Fn(&[T]) -> Option<usize> + 'a;

/// A single element of a [`Chain`].
///
/// A step looks at the tokens remaining from some position and either
/// rejects them (`None`) or reports how many it consumed (`Some(n)`).
pub struct Step<'a, T> {
    matcher: Box<Matcher<'a, T>>,
}

impl<'a, T> Step<'a, T> {
    /// Wraps a matching function. The function must never report more tokens
    /// than the window holds.
    pub fn new(matcher: impl Fn(&[T]) -> Option<usize> + 'a) -> Self {
        Self {
            matcher: Box::new(matcher),
        }
    }

    #[inline]
    #[must_use]
    pub fn apply(&self, window: &[T]) -> Option<usize> {
        let consumed = (self.matcher)(window)?;
        debug_assert!(
            consumed <= window.len(),
            "step consumed {consumed} of {} tokens",
            window.len()
        );
        Some(consumed.min(window.len()))
    }

    /// Returns `true` if the step is satisfied with no tokens left.
    #[must_use]
    pub fn accepts_empty(&self) -> bool {
        self.apply(&[]).is_some()
    }
}

impl<T> std::fmt::Debug for Step<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Step").finish_non_exhaustive()
    }
}

/// An ordered list of steps matching one pattern.
///
/// A chain matches a window when its steps match consecutive runs of it in
/// order. It is built once and only read while scanning.
#[derive(Debug)]
pub struct Chain<'a, T> {
    steps: Vec<Step<'a, T>>,
}

impl<'a, T> Chain<'a, T> {
    /// Creates a chain from its steps.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyChain`] if `steps` is empty.
    pub fn new(steps: impl IntoIterator<Item = Step<'a, T>>) -> Result<Self> {
        let steps = steps.into_iter().collect::<Vec<_>>();
        if steps.is_empty() {
            return Err(Error::EmptyChain);
        }
        Ok(Self { steps })
    }

    #[must_use]
    pub fn steps(&self) -> &[Step<'a, T>] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`; kept for symmetry with [`len`](Self::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
