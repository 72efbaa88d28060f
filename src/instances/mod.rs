// =============================================================================
// INSTANCES — Enregistrement des constructeurs concrets
// =============================================================================
//
// Chaque structure concrète reçoit un TAG : un enum sans variante (donc sans
// valeur possible) qui implémente `Kind`. Le type associé `Type` dit comment
// construire le type appliqué à partir du slot `In` :
//
//   IdentityTag  → In           (pas d'emballage)
//   OptionalTag  → Maybe<In>
//   SequenceTag  → Vec<In>
//
// Les tags n'existent qu'à la compilation. Ce sont eux qui permettent
// d'écrire `OptionalTag: Monad`, `SequenceTag: Functor`, etc.
//
// Les implémentations des classes sont dans les sous-modules :
//   identity → Functor + Applicative + Monad pour IdentityTag
//   maybe    → le type Maybe et Functor + Applicative + Monad pour OptionalTag
//   sequence → Functor pour SequenceTag
//
// =============================================================================

pub mod identity;
pub mod maybe;
pub mod sequence;

use crate::core::kind::Kind;
use identity::Identity;
use maybe::Maybe;

/// Tag du constructeur identité : `Apply<IdentityTag, A>` = `A`.
#[derive(Debug)]
pub enum IdentityTag {}

impl Kind for IdentityTag {
    type Type<In, Out1, Out2, Target> = Identity<In>;
}

/// Tag du type optionnel : `Apply<OptionalTag, A>` = `Maybe<A>`.
#[derive(Debug)]
pub enum OptionalTag {}

impl Kind for OptionalTag {
    type Type<In, Out1, Out2, Target> = Maybe<In>;
}

/// Tag de la séquence : `Apply<SequenceTag, A>` = `Vec<A>`.
#[derive(Debug)]
pub enum SequenceTag {}

impl Kind for SequenceTag {
    type Type<In, Out1, Out2, Target> = Vec<In>;
}
