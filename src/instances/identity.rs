// =============================================================================
// IDENTITY — Le constructeur qui n'emballe rien
// =============================================================================
//
// Identity<A> = A. Sert au code générique qui doit mentionner une structure
// sans vouloir d'effet : fmap est l'application, pure l'identité, bind
// l'application de la continuation.
//
// Les opérations dérivées (lift_a2, apply_right, apply_left, then, join)
// gardent leur corps par défaut.
//
// =============================================================================

use super::IdentityTag;
use crate::core::applicative::Applicative;
use crate::core::functor::Functor;
use crate::core::monad::Monad;

/// Le type appliqué du tag identité.
pub type Identity<A> = A;

impl Functor for IdentityTag {
    fn fmap<A, B, F>(mut f: F, fa: A) -> B
    where
        F: FnMut(A) -> B,
    {
        f(fa)
    }
}

impl Applicative for IdentityTag {
    fn pure<A>(a: A) -> A {
        a
    }

    fn apply<A, B, G>(ff: G, fa: A) -> B
    where
        G: FnOnce(A) -> B,
    {
        ff(fa)
    }
}

impl Monad for IdentityTag {
    fn bind<A, B, F>(ma: A, f: F) -> B
    where
        F: FnOnce(A) -> B,
    {
        f(ma)
    }
}
