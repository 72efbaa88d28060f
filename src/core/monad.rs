// =============================================================================
// MONAD — Composition séquentielle dépendante
// =============================================================================
//
// Une Monad ajoute `bind` à l'Applicative :
//
//   bind : M<A> → (A → M<B>) → M<B>
//
// Contrairement à `apply`, la suite du calcul est CHOISIE à partir de la
// valeur produite par l'étape précédente.
//
// `ret` est le `return` classique (mot-clé réservé en Rust). Son corps par
// défaut est `pure` : les deux ont toujours le même comportement.
//
// LOIS :
//   Identité à gauche  : bind(ret(a))(f) == f(a)
//   Identité à droite  : bind(m)(ret) == m
//   Associativité      : bind(bind(m)(f))(g) == bind(m)(x ↦ bind(f(x))(g))
//
// =============================================================================

use super::applicative::Applicative;
use super::kind::Apply;

/// Un Applicative doté d'une composition séquentielle dépendante.
pub trait Monad: Applicative {
    /// Passe la valeur produite par `ma` à `f` et renvoie l'action obtenue.
    fn bind<A, B, F>(ma: Apply<Self, A>, f: F) -> Apply<Self, B>
    where
        F: FnOnce(A) -> Apply<Self, B>;

    /// Injecte une valeur dans la monade. Identique à [`Applicative::pure`].
    #[doc(alias = "return")]
    fn ret<A>(a: A) -> Apply<Self, A> {
        Self::pure(a)
    }

    /// Séquence deux actions en ignorant la valeur de la première.
    fn then<A, B>(ma: Apply<Self, A>, mb: Apply<Self, B>) -> Apply<Self, B> {
        Self::bind::<A, B, _>(ma, move |_: A| mb)
    }

    /// Aplatit une structure imbriquée : `M<M<A>> → M<A>`.
    fn join<A>(mma: Apply<Self, Apply<Self, A>>) -> Apply<Self, A> {
        Self::bind::<Apply<Self, A>, A, _>(mma, |ma: Apply<Self, A>| ma)
    }
}

/// Forme curryfiée de [`Monad::bind`] : `bind(ma)` renvoie une fonction qui
/// attend la continuation.
///
/// ```
/// use kindrust::core::monad;
/// use kindrust::instances::maybe::Maybe;
/// use kindrust::instances::OptionalTag;
///
/// let positive = |x: i32| if x > 0 { Maybe::just(x) } else { Maybe::nothing() };
/// assert_eq!(monad::bind::<OptionalTag, _, _, _>(Maybe::just(5))(positive), Maybe::just(5));
/// ```
pub fn bind<K, A, B, F>(ma: Apply<K, A>) -> impl FnOnce(F) -> Apply<K, B>
where
    K: Monad,
    F: FnOnce(A) -> Apply<K, B>,
{
    move |f: F| K::bind::<A, B, F>(ma, f)
}
