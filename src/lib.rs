// =============================================================================
// KINDRUST — Functor, Applicative et Monad sans types d'ordre supérieur
// =============================================================================
//
// Rust ne permet pas d'écrire un trait générique sur un CONSTRUCTEUR de type
// (`Option<_>`, `Vec<_>`...). Kindrust simule cette capacité avec des tags :
// un type vide par constructeur, dont le type associé générique reconstruit
// le type appliqué.
//
// Architecture :
//   core/       → l'encodage des kinds et les contrats (aucune instance)
//   instances/  → les tags concrets et leurs instances (Identity, Maybe, Vec)
//
// Concepts fondamentaux :
//   Kind        = un constructeur de type vu comme un tag
//   Functor     = fmap  : (A → B) → F<A> → F<B>
//   Applicative = pure  : A → F<A>,  apply : F<A → B> → F<A> → F<B>
//   Monad       = bind  : M<A> → (A → M<B>) → M<B>
//   Maybe       = Just(valeur) | Nothing, l'instance de référence
//
// =============================================================================

pub mod core;
pub mod instances;

pub use crate::core::applicative::Applicative;
pub use crate::core::compose::{compose, compose_curried, identity};
pub use crate::core::functor::Functor;
pub use crate::core::kind::{Apply, Bottom, Kind, Opaque, Phantom};
pub use crate::core::monad::Monad;
pub use crate::instances::maybe::Maybe;
pub use crate::instances::{IdentityTag, OptionalTag, SequenceTag};
