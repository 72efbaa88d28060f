// =============================================================================
// APPLICATIVE — Entre le Functor et la Monad
// =============================================================================
//
// Un Applicative ajoute deux capacités au Functor :
//   pure  : A → F<A>                  (injecter une valeur "nue")
//   apply : F<A → B> → F<A> → F<B>    (appliquer une fonction emballée)
//
// Moins puissant que `bind` (la suite du calcul ne peut pas dépendre de la
// valeur), mais suffisant pour combiner des calculs indépendants.
//
// LOIS :
//   Identité       : apply(pure(id))(v) == v
//   Composition    : apply(apply(apply(pure(compose))(u))(v))(w)
//                      == apply(u)(apply(v)(w))
//   Homomorphisme  : apply(pure(f))(pure(x)) == pure(f(x))
//   Échange        : apply(u)(pure(y)) == apply(pure(f ↦ f(y)))(u)
//
// Les opérations dérivées (lift_a2, apply_right, apply_left) ont un corps par
// défaut construit sur fmap + apply. Une instance peut les redéfinir.
//
// =============================================================================

use super::functor::Functor;
use super::kind::Apply;

/// Un Functor qui sait injecter une valeur et appliquer une fonction emballée.
pub trait Applicative: Functor {
    /// Injecte une valeur dans la structure.
    fn pure<A>(a: A) -> Apply<Self, A>;

    /// Application séquentielle : applique la fonction contenue dans `ff` à
    /// la valeur contenue dans `fa`.
    fn apply<A, B, G>(ff: Apply<Self, G>, fa: Apply<Self, A>) -> Apply<Self, B>
    where
        G: FnOnce(A) -> B;

    /// Élève une fonction binaire au niveau de la structure.
    fn lift_a2<A, B, C, F>(f: F, fa: Apply<Self, A>, fb: Apply<Self, B>) -> Apply<Self, C>
    where
        F: FnMut(A, B) -> C + Clone,
    {
        let curried = move |a: A| {
            let mut f = f.clone();
            move |b: B| f(a, b)
        };
        let partial = Self::fmap::<A, _, _>(curried, fa);
        Self::apply::<B, C, _>(partial, fb)
    }

    /// Séquence deux actions et garde la valeur de la seconde.
    fn apply_right<A, B>(fa: Apply<Self, A>, fb: Apply<Self, B>) -> Apply<Self, B> {
        let keep_right = Self::fmap::<A, _, _>(|_: A| |b: B| b, fa);
        Self::apply::<B, B, _>(keep_right, fb)
    }

    /// Séquence deux actions et garde la valeur de la première.
    fn apply_left<A, B>(fa: Apply<Self, A>, fb: Apply<Self, B>) -> Apply<Self, A> {
        let keep_left = Self::fmap::<A, _, _>(|a: A| move |_: B| a, fa);
        Self::apply::<B, A, _>(keep_left, fb)
    }
}

/// Forme curryfiée de [`Applicative::apply`] : `apply(ff)` renvoie une
/// fonction qui attend l'argument emballé.
///
/// `ff` est consommé au premier appel. [`apply_cloned`] est la forme
/// réutilisable.
pub fn apply<K, A, B, G>(ff: Apply<K, G>) -> impl FnOnce(Apply<K, A>) -> Apply<K, B>
where
    K: Applicative,
    G: FnOnce(A) -> B,
{
    move |fa: Apply<K, A>| K::apply::<A, B, G>(ff, fa)
}

/// Forme curryfiée et réutilisable de [`Applicative::apply`] : chaque appel
/// travaille sur une copie de `ff`.
pub fn apply_cloned<K, A, B, G>(ff: Apply<K, G>) -> impl Fn(Apply<K, A>) -> Apply<K, B>
where
    K: Applicative,
    G: FnOnce(A) -> B,
    Apply<K, G>: Clone,
{
    move |fa: Apply<K, A>| K::apply::<A, B, G>(ff.clone(), fa)
}
