// =============================================================================
// LAWS — Vérification des lois des classes de types
// =============================================================================
//
// Le compilateur vérifie qu'une instance a la bonne FORME (les signatures).
// Il ne vérifie PAS qu'elle se comporte correctement. Ce module fournit des
// vérificateurs génériques, valables pour n'importe quel tag :
//
//   Functor      : identité, composition
//   Applicative  : identité, composition, homomorphisme, échange
//   Monad        : identité à gauche, identité à droite, associativité
//
// Chaque vérificateur calcule les deux membres de la loi sur des valeurs
// fournies et renvoie une `LawViolation` s'ils diffèrent. Les tests de chaque
// instance les appellent sur des échantillons de valeurs (Just, Nothing,
// listes vides ou non...).
//
// =============================================================================

use std::fmt;

use thiserror::Error;
use tracing::{debug, trace};

use super::applicative::Applicative;
use super::compose::{compose, identity};
use super::functor::Functor;
use super::kind::Apply;
use super::monad::Monad;

/// Les lois connues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Law {
    FunctorIdentity,
    FunctorComposition,
    ApplicativeIdentity,
    ApplicativeComposition,
    ApplicativeHomomorphism,
    ApplicativeInterchange,
    MonadLeftIdentity,
    MonadRightIdentity,
    MonadAssociativity,
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Law::FunctorIdentity => write!(f, "fmap(id) == id"),
            Law::FunctorComposition => write!(f, "fmap(f . g) == fmap(f) . fmap(g)"),
            Law::ApplicativeIdentity => write!(f, "pure(id) <*> v == v"),
            Law::ApplicativeComposition => write!(f, "pure(.) <*> u <*> v <*> w == u <*> (v <*> w)"),
            Law::ApplicativeHomomorphism => write!(f, "pure(f) <*> pure(x) == pure(f(x))"),
            Law::ApplicativeInterchange => write!(f, "u <*> pure(y) == pure($ y) <*> u"),
            Law::MonadLeftIdentity => write!(f, "return(a) >>= f == f(a)"),
            Law::MonadRightIdentity => write!(f, "m >>= return == m"),
            Law::MonadAssociativity => write!(f, "(m >>= f) >>= g == m >>= (x -> f(x) >>= g)"),
        }
    }
}

/// Une loi non respectée : les deux membres, rendus avec `Debug`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("loi violée `{law}` : {left} != {right}")]
pub struct LawViolation {
    pub law: Law,
    pub left: String,
    pub right: String,
}

/// Compare les deux membres d'une loi.
fn check<T>(law: Law, left: T, right: T) -> Result<(), LawViolation>
where
    T: PartialEq + fmt::Debug,
{
    trace!(%law, "vérification");
    if left == right {
        return Ok(());
    }
    let violation = LawViolation {
        law,
        left: format!("{:?}", left),
        right: format!("{:?}", right),
    };
    debug!(%law, left = %violation.left, right = %violation.right, "loi violée");
    Err(violation)
}

// =============================================================================
// FUNCTOR
// =============================================================================

/// `fmap(id)(v) == v`
pub fn functor_identity<K, A>(v: Apply<K, A>) -> Result<(), LawViolation>
where
    K: Functor,
    Apply<K, A>: Clone + PartialEq + fmt::Debug,
{
    let left = K::fmap::<A, A, _>(identity::<A>, v.clone());
    check(Law::FunctorIdentity, left, v)
}

/// `fmap(compose(f, g))(v) == fmap(f)(fmap(g)(v))`
pub fn functor_composition<K, A, B, C, F, G>(v: Apply<K, A>, f: F, g: G) -> Result<(), LawViolation>
where
    K: Functor,
    F: Fn(B) -> C + Clone,
    G: Fn(A) -> B + Clone,
    Apply<K, A>: Clone,
    Apply<K, C>: PartialEq + fmt::Debug,
{
    let left = K::fmap::<A, C, _>(compose(f.clone(), g.clone()), v.clone());
    let right = K::fmap::<B, C, F>(f, K::fmap::<A, B, G>(g, v));
    check(Law::FunctorComposition, left, right)
}

// =============================================================================
// APPLICATIVE
// =============================================================================

/// `apply(pure(id))(v) == v`
pub fn applicative_identity<K, A>(v: Apply<K, A>) -> Result<(), LawViolation>
where
    K: Applicative,
    Apply<K, A>: Clone + PartialEq + fmt::Debug,
{
    let left = K::apply::<A, A, fn(A) -> A>(K::pure::<fn(A) -> A>(identity::<A>), v.clone());
    check(Law::ApplicativeIdentity, left, v)
}

/// `apply(pure(f))(pure(x)) == pure(f(x))`
pub fn applicative_homomorphism<K, A, B, F>(f: F, x: A) -> Result<(), LawViolation>
where
    K: Applicative,
    A: Clone,
    F: Fn(A) -> B + Clone,
    Apply<K, B>: PartialEq + fmt::Debug,
{
    let left = K::apply::<A, B, F>(K::pure::<F>(f.clone()), K::pure::<A>(x.clone()));
    let right = K::pure::<B>(f(x));
    check(Law::ApplicativeHomomorphism, left, right)
}

/// `apply(u)(pure(y)) == apply(pure(f ↦ f(y)))(u)`
pub fn applicative_interchange<K, A, B, G>(u: Apply<K, G>, y: A) -> Result<(), LawViolation>
where
    K: Applicative,
    A: Clone,
    G: FnOnce(A) -> B,
    Apply<K, G>: Clone,
    Apply<K, B>: PartialEq + fmt::Debug,
{
    let left = K::apply::<A, B, G>(u.clone(), K::pure::<A>(y.clone()));
    let with_y = move |g: G| g(y);
    let right = K::apply::<G, B, _>(K::pure(with_y), u);
    check(Law::ApplicativeInterchange, left, right)
}

/// `apply(apply(apply(pure(compose))(u))(v))(w) == apply(u)(apply(v)(w))`
pub fn applicative_composition<K, A, B, C, F, G>(
    u: Apply<K, F>,
    v: Apply<K, G>,
    w: Apply<K, A>,
) -> Result<(), LawViolation>
where
    K: Applicative,
    F: Fn(B) -> C,
    G: Fn(A) -> B,
    Apply<K, F>: Clone,
    Apply<K, G>: Clone,
    Apply<K, A>: Clone,
    Apply<K, C>: PartialEq + fmt::Debug,
{
    let curried_compose = |f: F| move |g: G| compose(f, g);
    let partial = K::apply::<F, _, _>(K::pure(curried_compose), u.clone());
    let composed = K::apply::<G, _, _>(partial, v.clone());
    let left = K::apply::<A, C, _>(composed, w.clone());

    let right = K::apply::<B, C, F>(u, K::apply::<A, B, G>(v, w));
    check(Law::ApplicativeComposition, left, right)
}

// =============================================================================
// MONAD
// =============================================================================

/// `bind(ret(a))(f) == f(a)`
pub fn monad_left_identity<K, A, B, F>(a: A, f: F) -> Result<(), LawViolation>
where
    K: Monad,
    A: Clone,
    F: Fn(A) -> Apply<K, B> + Clone,
    Apply<K, B>: PartialEq + fmt::Debug,
{
    let left = K::bind::<A, B, F>(K::ret::<A>(a.clone()), f.clone());
    let right = f(a);
    check(Law::MonadLeftIdentity, left, right)
}

/// `bind(m)(ret) == m`
pub fn monad_right_identity<K, A>(m: Apply<K, A>) -> Result<(), LawViolation>
where
    K: Monad,
    Apply<K, A>: Clone + PartialEq + fmt::Debug,
{
    let left = K::bind::<A, A, _>(m.clone(), |a: A| K::ret::<A>(a));
    check(Law::MonadRightIdentity, left, m)
}

/// `bind(bind(m)(f))(g) == bind(m)(x ↦ bind(f(x))(g))`
pub fn monad_associativity<K, A, B, C, F, G>(m: Apply<K, A>, f: F, g: G) -> Result<(), LawViolation>
where
    K: Monad,
    F: Fn(A) -> Apply<K, B> + Clone,
    G: Fn(B) -> Apply<K, C> + Clone,
    Apply<K, A>: Clone,
    Apply<K, C>: PartialEq + fmt::Debug,
{
    let left = K::bind::<B, C, G>(K::bind::<A, B, F>(m.clone(), f.clone()), g.clone());
    let right = K::bind::<A, C, _>(m, move |x: A| K::bind::<B, C, G>(f(x), g));
    check(Law::MonadAssociativity, left, right)
}

// =============================================================================
// REGROUPEMENTS
// =============================================================================

/// Vérifie les deux lois du Functor pour une valeur et deux fonctions.
pub fn check_functor<K, A, B, C, F, G>(v: Apply<K, A>, f: F, g: G) -> Result<(), LawViolation>
where
    K: Functor,
    F: Fn(B) -> C + Clone,
    G: Fn(A) -> B + Clone,
    Apply<K, A>: Clone + PartialEq + fmt::Debug,
    Apply<K, C>: PartialEq + fmt::Debug,
{
    functor_identity::<K, A>(v.clone())?;
    functor_composition::<K, A, B, C, F, G>(v, f, g)
}

/// Vérifie les deux lois d'identité de la Monad.
pub fn check_monad_identities<K, A, B, F>(a: A, m: Apply<K, A>, f: F) -> Result<(), LawViolation>
where
    K: Monad,
    A: Clone,
    F: Fn(A) -> Apply<K, B> + Clone,
    Apply<K, A>: Clone + PartialEq + fmt::Debug,
    Apply<K, B>: PartialEq + fmt::Debug,
{
    monad_left_identity::<K, A, B, F>(a, f)?;
    monad_right_identity::<K, A>(m)
}
