// =============================================================================
// MAYBE — La valeur optionnelle : Just(valeur) ou Nothing
// =============================================================================
//
// C'est l'instance qui valide tout l'encodage : Maybe implémente Functor,
// Applicative et Monad via `OptionalTag`.
//
//   Just(a)  → une valeur est présente
//   Nothing  → aucune valeur
//
// L'ABSENCE N'EST PAS UNE ERREUR : c'est une variante comme une autre. Toutes
// les opérations sont totales et sans effet de bord. Dès qu'un Nothing est
// rencontré, la fonction fournie n'est JAMAIS appelée (court-circuit) :
//
//   fmap(f)(Nothing)      = Nothing
//   apply(Nothing)(x)     = Nothing
//   apply(f)(Nothing)     = Nothing
//   bind(Nothing)(f)      = Nothing
//
// Une valeur Maybe n'est jamais modifiée : chaque opération en construit une
// nouvelle.
//
// Sérialisée, une valeur a la forme :
//   {"variant": "Just", "value": 5}
//   {"variant": "Nothing"}
//
// =============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

use super::OptionalTag;
use crate::core::applicative::Applicative;
use crate::core::functor::Functor;
use crate::core::monad::Monad;

/// Une valeur optionnelle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "variant", content = "value")]
pub enum Maybe<A> {
    /// Une valeur est présente
    Just(A),
    /// Aucune valeur
    Nothing,
}

impl<A> Maybe<A> {
    /// Emballe une valeur.
    pub fn just(value: A) -> Self {
        Maybe::Just(value)
    }

    /// La valeur absente.
    pub fn nothing() -> Self {
        Maybe::Nothing
    }

    /// Alias de [`Maybe::just`] (vu comme Applicative).
    pub fn pure(a: A) -> Self {
        OptionalTag::pure(a)
    }

    /// Alias de [`Maybe::just`] (vu comme Monad).
    #[doc(alias = "return")]
    pub fn ret(a: A) -> Self {
        OptionalTag::ret(a)
    }

    pub fn is_just(&self) -> bool {
        matches!(self, Maybe::Just(_))
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, Maybe::Nothing)
    }

    /// La valeur contenue, si elle existe.
    pub fn value(&self) -> Option<&A> {
        match self {
            Maybe::Just(a) => Some(a),
            Maybe::Nothing => None,
        }
    }

    pub fn as_ref(&self) -> Maybe<&A> {
        match self {
            Maybe::Just(a) => Maybe::Just(a),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Maybe::Just(a) => a,
            Maybe::Nothing => default,
        }
    }

    pub fn into_option(self) -> Option<A> {
        self.into()
    }

    // -------------------------------------------------------------------------
    // Opérations curryfiées : on fournit le premier argument maintenant,
    // le second plus tard. Elles délèguent aux instances de OptionalTag.
    // -------------------------------------------------------------------------

    /// `Maybe::fmap(f)(ma)` : la forme curryfiée de [`Functor::fmap`].
    ///
    /// `f` est clonée à chaque application, donc une fermeture `FnMut`
    /// repart toujours de son état initial.
    pub fn fmap<B, F>(f: F) -> impl Fn(Maybe<A>) -> Maybe<B> + Clone
    where
        F: FnMut(A) -> B + Clone,
    {
        move |ma| OptionalTag::fmap(f.clone(), ma)
    }

    /// `Maybe::apply(mf)(ma)` : la forme curryfiée de [`Applicative::apply`].
    ///
    /// Consomme `mf` : la fonction renvoyée ne sert qu'une fois. Voir
    /// [`Maybe::apply_cloned`] pour une forme réutilisable.
    pub fn apply<B, G>(mf: Maybe<G>) -> impl FnOnce(Maybe<A>) -> Maybe<B>
    where
        G: FnOnce(A) -> B,
    {
        move |ma| OptionalTag::apply(mf, ma)
    }

    /// Comme [`Maybe::apply`], mais réutilisable : chaque appel travaille sur
    /// une copie de `mf`.
    pub fn apply_cloned<B, G>(mf: Maybe<G>) -> impl Fn(Maybe<A>) -> Maybe<B>
    where
        G: FnOnce(A) -> B + Clone,
    {
        move |ma| OptionalTag::apply(mf.clone(), ma)
    }

    /// `Maybe::bind(ma)(f)` : la forme curryfiée de [`Monad::bind`].
    pub fn bind<B, F>(ma: Maybe<A>) -> impl FnOnce(F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        move |f| OptionalTag::bind(ma, f)
    }
}

impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Maybe::Nothing
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(opt: Option<A>) -> Self {
        match opt {
            Some(a) => Maybe::Just(a),
            None => Maybe::Nothing,
        }
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(ma: Maybe<A>) -> Self {
        match ma {
            Maybe::Just(a) => Some(a),
            Maybe::Nothing => None,
        }
    }
}

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Just(a) => write!(f, "Just({})", a),
            Maybe::Nothing => write!(f, "Nothing"),
        }
    }
}

// =============================================================================
// INSTANCES DE CLASSES
// =============================================================================

impl Functor for OptionalTag {
    fn fmap<A, B, F>(mut f: F, fa: Maybe<A>) -> Maybe<B>
    where
        F: FnMut(A) -> B,
    {
        match fa {
            Maybe::Just(a) => Maybe::just(f(a)),
            Maybe::Nothing => Maybe::nothing(),
        }
    }
}

impl Applicative for OptionalTag {
    fn pure<A>(a: A) -> Maybe<A> {
        Maybe::just(a)
    }

    fn apply<A, B, G>(ff: Maybe<G>, fa: Maybe<A>) -> Maybe<B>
    where
        G: FnOnce(A) -> B,
    {
        // Les deux côtés sont inspectés avant d'appeler la fonction.
        match (ff, fa) {
            (Maybe::Just(f), Maybe::Just(a)) => Maybe::just(f(a)),
            _ => Maybe::nothing(),
        }
    }

    fn lift_a2<A, B, C, F>(mut f: F, fa: Maybe<A>, fb: Maybe<B>) -> Maybe<C>
    where
        F: FnMut(A, B) -> C + Clone,
    {
        match (fa, fb) {
            (Maybe::Just(a), Maybe::Just(b)) => Maybe::just(f(a, b)),
            _ => Maybe::nothing(),
        }
    }

    fn apply_right<A, B>(fa: Maybe<A>, fb: Maybe<B>) -> Maybe<B> {
        match fa {
            Maybe::Just(_) => fb,
            Maybe::Nothing => Maybe::nothing(),
        }
    }

    fn apply_left<A, B>(fa: Maybe<A>, fb: Maybe<B>) -> Maybe<A> {
        match (fa, fb) {
            (Maybe::Just(a), Maybe::Just(_)) => Maybe::just(a),
            _ => Maybe::nothing(),
        }
    }
}

impl Monad for OptionalTag {
    fn bind<A, B, F>(ma: Maybe<A>, f: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match ma {
            Maybe::Just(a) => f(a),
            Maybe::Nothing => Maybe::nothing(),
        }
    }

    fn then<A, B>(ma: Maybe<A>, mb: Maybe<B>) -> Maybe<B> {
        match ma {
            Maybe::Just(_) => mb,
            Maybe::Nothing => Maybe::nothing(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn positive(x: i32) -> Maybe<i32> {
        if x > 0 {
            Maybe::just(x)
        } else {
            Maybe::nothing()
        }
    }

    #[test]
    fn test_constructors() {
        assert_eq!(Maybe::just(5), Maybe::Just(5));
        assert_eq!(Maybe::<i32>::nothing(), Maybe::Nothing);
        assert_eq!(Maybe::pure(5), Maybe::just(5));
        assert_eq!(Maybe::ret(5), Maybe::just(5));
        assert_eq!(Maybe::pure("a"), Maybe::ret("a"));
    }

    #[test]
    fn test_fmap_scenario() {
        let double = Maybe::fmap(|x: i32| x * 2);
        assert_eq!(double(Maybe::just(5)), Maybe::just(10));
        assert_eq!(double(Maybe::nothing()), Maybe::nothing());
    }

    #[test]
    fn test_bind_scenario() {
        assert_eq!(Maybe::bind(Maybe::just(5))(positive), Maybe::just(5));
        assert_eq!(Maybe::bind(Maybe::just(-5))(positive), Maybe::nothing());

        let calls = Cell::new(0);
        let result = Maybe::bind(Maybe::<i32>::nothing())(|x: i32| {
            calls.set(calls.get() + 1);
            Maybe::just(x)
        });
        assert_eq!(result, Maybe::nothing());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_short_circuit_never_calls_function() {
        let calls = Cell::new(0);
        let count = |x: i32| {
            calls.set(calls.get() + 1);
            x
        };

        let mapped = OptionalTag::fmap(count, Maybe::nothing());
        assert_eq!(mapped, Maybe::nothing());

        let applied = OptionalTag::apply(Maybe::just(count), Maybe::nothing());
        assert_eq!(applied, Maybe::nothing());

        let bound = OptionalTag::bind(Maybe::nothing(), |x: i32| Maybe::just(count(x)));
        assert_eq!(bound, Maybe::nothing());

        let lifted = OptionalTag::lift_a2(|a: i32, b: i32| count(a + b), Maybe::just(1), Maybe::nothing());
        assert_eq!(lifted, Maybe::nothing());

        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_apply_nothing_function() {
        let ff: Maybe<fn(i32) -> i32> = Maybe::nothing();
        assert_eq!(Maybe::apply(ff)(Maybe::just(5)), Maybe::nothing());
        assert_eq!(Maybe::apply(Maybe::just(|x: i32| x + 1))(Maybe::just(5)), Maybe::just(6));
    }

    #[test]
    fn test_curried_fmap_with_stateful_closure() {
        let mut calls = 0;
        let bump = move |x: i32| {
            calls += 1;
            x + calls
        };
        let curried = Maybe::fmap(bump);
        assert_eq!(curried(Maybe::just(10)), OptionalTag::fmap(bump, Maybe::just(10)));
        assert_eq!(curried(Maybe::just(10)), Maybe::just(11));
        assert_eq!(curried(Maybe::nothing()), Maybe::nothing());
    }

    #[test]
    fn test_apply_cloned_is_reusable() {
        let add_one = Maybe::apply_cloned(Maybe::just(|x: i32| x + 1));
        assert_eq!(add_one(Maybe::just(1)), Maybe::just(2));
        assert_eq!(add_one(Maybe::just(41)), Maybe::just(42));
        assert_eq!(add_one(Maybe::nothing()), Maybe::nothing());

        let missing = Maybe::<i32>::apply_cloned::<i32, fn(i32) -> i32>(Maybe::nothing());
        assert_eq!(missing(Maybe::just(1)), Maybe::nothing());
        assert_eq!(missing(Maybe::just(2)), Maybe::nothing());
    }

    #[test]
    fn test_curried_matches_direct() {
        let f = |x: i32| x.to_string();
        for v in [Maybe::just(3), Maybe::nothing()] {
            assert_eq!(Maybe::fmap(f)(v), OptionalTag::fmap(f, v));
            assert_eq!(Maybe::apply(Maybe::just(f))(v), OptionalTag::apply(Maybe::just(f), v));
            assert_eq!(Maybe::bind(v)(positive), OptionalTag::bind(v, positive));
        }
    }

    #[test]
    fn test_derived_operations() {
        let add = |a: i32, b: i32| a + b;
        assert_eq!(OptionalTag::lift_a2(add, Maybe::just(2), Maybe::just(3)), Maybe::just(5));
        assert_eq!(OptionalTag::lift_a2(add, Maybe::nothing(), Maybe::just(3)), Maybe::nothing());

        assert_eq!(OptionalTag::apply_right(Maybe::just(1), Maybe::just("b")), Maybe::just("b"));
        assert_eq!(OptionalTag::apply_right(Maybe::<i32>::nothing(), Maybe::just("b")), Maybe::nothing());
        assert_eq!(OptionalTag::apply_left(Maybe::just(1), Maybe::just("b")), Maybe::just(1));
        assert_eq!(OptionalTag::apply_left(Maybe::just(1), Maybe::<&str>::nothing()), Maybe::nothing());

        assert_eq!(OptionalTag::then(Maybe::just(1), Maybe::just("b")), Maybe::just("b"));
        assert_eq!(OptionalTag::then(Maybe::<i32>::nothing(), Maybe::just("b")), Maybe::nothing());
    }

    #[test]
    fn test_join() {
        assert_eq!(OptionalTag::join(Maybe::just(Maybe::just(4))), Maybe::just(4));
        assert_eq!(OptionalTag::join(Maybe::just(Maybe::<i32>::nothing())), Maybe::nothing());
        assert_eq!(OptionalTag::join(Maybe::<Maybe<i32>>::nothing()), Maybe::nothing());
    }

    #[test]
    fn test_values_are_not_mutated() {
        let original = Maybe::just(String::from("abc"));
        let upper = OptionalTag::fmap(|s: &String| s.to_uppercase(), original.as_ref());
        assert_eq!(upper, Maybe::just(String::from("ABC")));
        assert_eq!(original, Maybe::just(String::from("abc")));
    }

    #[test]
    fn test_accessors_and_conversions() {
        let j = Maybe::just(9);
        let n = Maybe::<i32>::nothing();

        assert!(j.is_just() && !j.is_nothing());
        assert!(n.is_nothing() && !n.is_just());
        assert_eq!(j.value(), Some(&9));
        assert_eq!(n.value(), None);
        assert_eq!(n.unwrap_or(1), 1);
        assert_eq!(j.into_option(), Some(9));
        assert_eq!(Maybe::from(None::<i32>), Maybe::nothing());
        assert_eq!(Maybe::<i32>::default(), Maybe::nothing());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Maybe::just(5)), "Just(5)");
        assert_eq!(format!("{}", Maybe::<i32>::nothing()), "Nothing");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Maybe::just(5)).unwrap();
        assert_eq!(json, r#"{"variant":"Just","value":5}"#);

        let json = serde_json::to_string(&Maybe::<i32>::nothing()).unwrap();
        assert_eq!(json, r#"{"variant":"Nothing"}"#);

        let back: Maybe<String> = serde_json::from_str(r#"{"variant":"Just","value":"x"}"#).unwrap();
        assert_eq!(back, Maybe::just("x".to_string()));
        let back: Maybe<String> = serde_json::from_str(r#"{"variant":"Nothing"}"#).unwrap();
        assert_eq!(back, Maybe::nothing());
    }
}
