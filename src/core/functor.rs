// =============================================================================
// FUNCTOR — Transformer le contenu en préservant la structure
// =============================================================================
//
// Un tag F est un Functor s'il sait, pour tous types A et B, transformer un
// F<A> en F<B> à partir d'une fonction A → B, SANS toucher à la "forme"
// (un Nothing reste Nothing, une liste garde sa longueur).
//
// LOIS (vérifiées par les tests, pas par le compilateur) :
//
//   Identité     : fmap(id) == id
//   Composition  : fmap(compose(f, g)) == compose(fmap(f), fmap(g))
//
// Voir `core::laws` pour les vérificateurs génériques.
//
// =============================================================================

use super::kind::{Apply, Kind};

/// Un constructeur de type sur lequel on peut appliquer une fonction.
pub trait Functor: Kind {
    /// Applique `f` au contenu de `fa`.
    ///
    /// `f` est `FnMut` : une structure à plusieurs éléments (Vec) l'appelle
    /// une fois par élément.
    fn fmap<A, B, F>(f: F, fa: Apply<Self, A>) -> Apply<Self, B>
    where
        F: FnMut(A) -> B;
}

/// Forme curryfiée de [`Functor::fmap`] : `fmap(f)` renvoie une fonction
/// réutilisable `F<A> → F<B>`.
///
/// `f` peut être `FnMut`, comme pour [`Functor::fmap`]. Elle doit en plus
/// être `Clone` : chaque application part d'une copie fraîche de `f`, donc
/// l'état qu'elle capture n'est pas partagé d'un appel à l'autre.
///
/// ```
/// use kindrust::core::functor;
/// use kindrust::instances::maybe::Maybe;
/// use kindrust::instances::OptionalTag;
///
/// let double = functor::fmap::<OptionalTag, _, _, _>(|x: i32| x * 2);
/// assert_eq!(double(Maybe::just(5)), Maybe::just(10));
/// assert_eq!(double(Maybe::nothing()), Maybe::nothing());
/// ```
pub fn fmap<K, A, B, F>(f: F) -> impl Fn(Apply<K, A>) -> Apply<K, B> + Clone
where
    K: Functor,
    F: FnMut(A) -> B + Clone,
{
    move |fa: Apply<K, A>| K::fmap::<A, B, F>(f.clone(), fa)
}
