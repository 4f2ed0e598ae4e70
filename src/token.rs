/// A token that can report which variant it is.
///
/// Value matching only needs [`PartialEq`]. This trait is what
/// [`equal_kind`](crate::equal_kind) uses to match by variant, so it is
/// usually implemented on a token enum with a fieldless `Kind` enum beside it:
///
/// ```
/// use toksub::Token;
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Tok {
///     Rune(char),
///     Text(String),
/// }
///
/// #[derive(Clone, Copy, Debug, Eq, PartialEq)]
/// enum TokKind {
///     Rune,
///     Text,
/// }
///
/// impl Token for Tok {
///     type Kind = TokKind;
///
///     fn kind(&self) -> TokKind {
///         match self {
///             Tok::Rune(_) => TokKind::Rune,
///             Tok::Text(_) => TokKind::Text,
///         }
///     }
/// }
///
/// assert_eq!(Tok::Text("x".into()).kind(), TokKind::Text);
/// ```
pub trait Token {
    /// The discriminant compared by kind matching.
    type Kind: Copy + Eq;

    /// Returns the variant of this token.
    fn kind(&self) -> Self::Kind;
}
