// =============================================================================
// CORE — L'encodage des kinds et les classes de types
// =============================================================================
//
// Ce module ne contient AUCUNE instance concrète : uniquement la technique
// de simulation des types d'ordre supérieur et les contrats génériques.
//
// Architecture :
//   kind         → les tags de kind et l'opération Apply<F, A> = F<A>
//   functor      → fmap
//   applicative  → pure, apply (+ lift_a2, apply_right, apply_left)
//   monad        → bind, ret (+ then, join)
//   compose      → identity, compose, compose_curried
//   laws         → vérificateurs génériques des lois
//
// Dépendances : kind ← functor ← applicative ← monad ← laws
//
// =============================================================================

pub mod kind;
pub mod functor;
pub mod applicative;
pub mod monad;
pub mod compose;
pub mod laws;
