//! Constructors for [`Step`]s.
//!
//! Every repetition is greedy: it takes as many matching tokens as the
//! quantifier allows and never gives any back.

use super::{Quantifier, Step};
use crate::Token;

/// Matches a run of tokens that each satisfy `predicate`.
pub fn satisfy<'a, T>(
    predicate: impl Fn(&T) -> bool + 'a,
    quantifier: Quantifier,
) -> Step<'a, T>
where
    T: 'a,
{
    Step::new(move |window: &[T]| {
        let hits = window[..quantifier.limit(window.len())]
            .iter()
            .take_while(|&token| predicate(token))
            .count();
        quantifier.accepts(hits).then_some(hits)
    })
}

/// Matches a run of tokens equal to `value`.
pub fn equal_value<'a, T>(value: T, quantifier: Quantifier) -> Step<'a, T>
where
    T: PartialEq + 'a,
{
    satisfy(move |token| *token == value, quantifier)
}

/// Matches a run of tokens of the given kind, whatever their values.
pub fn equal_kind<'a, T>(kind: T::Kind, quantifier: Quantifier) -> Step<'a, T>
where
    T: Token + 'a,
    T::Kind: 'a,
{
    satisfy(move |token: &T| token.kind() == kind, quantifier)
}

/// Matches a run of arbitrary tokens.
pub fn any<'a, T: 'a>(quantifier: Quantifier) -> Step<'a, T> {
    satisfy(|_| true, quantifier)
}

/// Tries each step in order and returns the verdict of the first that
/// matches.
pub fn alternate<'a, T>(steps: impl IntoIterator<Item = Step<'a, T>>) -> Step<'a, T>
where
    T: 'a,
{
    let steps = steps.into_iter().collect::<Vec<_>>();
    Step::new(move |window: &[T]| steps.iter().find_map(|step| step.apply(window)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_value_is_greedy() {
        let step = equal_value('2', Quantifier::SOME);
        assert_eq!(step.apply(&['2', '2', '2', '3']), Some(3));
        assert_eq!(step.apply(&['1', '2']), None);
    }

    #[test]
    fn equal_value_respects_max() {
        let step = equal_value('2', Quantifier::between(1, 2));
        assert_eq!(step.apply(&['2', '2', '2']), Some(2));
    }

    #[test]
    fn optional_step_matches_nothing() {
        let step = equal_value('2', Quantifier::OPTIONAL);
        assert_eq!(step.apply(&['3']), Some(0));
        assert!(step.accepts_empty());
        assert!(!equal_value('2', Quantifier::ONE).accepts_empty());
    }

    #[test]
    fn impossible_bounds_never_match() {
        let step = equal_value('2', Quantifier::between(3, 2));
        assert_eq!(step.apply(&['2', '2', '2']), None);
    }

    #[test]
    fn alternate_takes_first_match() {
        let step = alternate([
            equal_value('a', Quantifier::ONE),
            equal_value('a', Quantifier::SOME),
        ]);
        assert_eq!(step.apply(&['a', 'a']), Some(1));
        assert_eq!(step.apply(&['b']), None);
    }

    #[test]
    fn alternate_of_nothing_never_matches() {
        let step = alternate(Vec::<Step<'_, char>>::new());
        assert_eq!(step.apply(&['a']), None);
        assert!(!step.accepts_empty());
    }
}
