/// How many consecutive tokens a step must and may consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantifier {
    min: usize,
    /// `None` takes as many as are available.
    max: Option<usize>,
}

impl Quantifier {
    /// Exactly one token.
    pub const ONE: Self = Self::exactly(1);
    /// Zero or one token.
    pub const OPTIONAL: Self = Self::between(0, 1);
    /// Zero or more tokens.
    pub const ANY: Self = Self::at_least(0);
    /// One or more tokens.
    pub const SOME: Self = Self::at_least(1);

    /// Creates a quantifier where a `max` of zero means unbounded.
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        if max == 0 {
            Self::at_least(min)
        } else {
            Self::between(min, max)
        }
    }

    #[must_use]
    pub const fn exactly(n: usize) -> Self {
        Self::between(n, n)
    }

    #[must_use]
    pub const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    /// A `max` below `min` yields a step that never matches.
    #[must_use]
    pub const fn between(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    #[must_use]
    pub const fn min(self) -> usize {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> Option<usize> {
        self.max
    }

    /// The number of tokens worth inspecting in a window of `available` tokens.
    #[inline]
    #[must_use]
    pub fn limit(self, available: usize) -> usize {
        self.max.map_or(available, |max| max.min(available))
    }

    /// Returns `true` if a run of `hits` matching tokens satisfies the minimum.
    #[inline]
    #[must_use]
    pub const fn accepts(self, hits: usize) -> bool {
        hits >= self.min
    }
}
