// =============================================================================
// SEQUENCE — Collection ordonnée, finie, indexable
// =============================================================================
//
// Apply<SequenceTag, A> = Vec<A>. Seul Functor est fourni : fmap applique la
// fonction à chaque élément, dans l'ordre, en conservant la longueur.
//
// =============================================================================

use super::SequenceTag;
use crate::core::functor::Functor;

impl Functor for SequenceTag {
    fn fmap<A, B, F>(f: F, fa: Vec<A>) -> Vec<B>
    where
        F: FnMut(A) -> B,
    {
        fa.into_iter().map(f).collect()
    }
}
