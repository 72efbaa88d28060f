// =============================================================================
// KIND — Simulation des types d'ordre supérieur (HKT)
// =============================================================================
//
// Rust ne sait pas abstraire sur un CONSTRUCTEUR de type : on ne peut pas
// écrire `trait Functor<F<_>>`. On contourne le problème avec un TAG :
//
//   - un type marqueur sans valeur (ex: `OptionalTag`) représente "Maybe de _"
//   - son type associé générique `Type<In, ...>` reconstruit le type appliqué
//
//   Apply<OptionalTag, i32>  ==  <OptionalTag as Kind>::Type<i32, ..>  ==  Maybe<i32>
//
// Le tag porte QUATRE emplacements (slots) :
//
//   In      → contravariant (entrée : accepte plus large)
//   Out1    → covariant     (sortie : renvoie plus étroit)
//   Out2    → covariant
//   Target  → invariant     (doit correspondre exactement)
//
// Seul `In` sert aux classes Functor/Applicative/Monad. Les trois autres
// existent pour des constructeurs plus riches (un Either à deux paramètres).
//
// DEUX CHEMINS :
//   1. Chemin calculé : le tag donne une définition de `Type` à partir de ses
//      slots. C'est le cas de tous les tags concrets (Identity, Maybe, Vec).
//   2. Chemin de repli : `Opaque<M>` transforme un simple marqueur `M` en kind.
//      Son type appliqué est `Phantom`, un enregistrement purement fantôme
//      dont les champs encodent la variance de chaque slot.
//
// =============================================================================

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

/// Le type vide : valeur par défaut des slots non renseignés.
///
/// Un `Apply<F, A>` incomplet ne peut donc jamais être confondu avec un
/// `Apply<F, A, X, Y, Z>` complet.
pub type Bottom = Infallible;

/// Un tag de kind : représente un constructeur de type `F<_>`.
///
/// `Type<In, Out1, Out2, Target>` est l'opération "apply" qui matérialise le
/// type concret. Exemple :
///
/// ```
/// use kindrust::core::kind::{Apply, Kind};
/// use kindrust::instances::maybe::Maybe;
/// use kindrust::instances::OptionalTag;
///
/// let x: Apply<OptionalTag, i32> = Maybe::just(1);
/// assert!(x.is_just());
/// ```
pub trait Kind {
    /// Le type appliqué, exprimé en fonction des quatre slots.
    type Type<In, Out1, Out2, Target>;
}

/// Applique un tag à ses arguments : `Apply<F, A>` = `F<A>`.
///
/// Les slots omis valent `Bottom`, y compris `In` : `Apply<F>` est
/// `F<Bottom, Bottom, Bottom, Bottom>`.
pub type Apply<F, In = Bottom, Out1 = Bottom, Out2 = Bottom, Target = Bottom> =
    <F as Kind>::Type<In, Out1, Out2, Target>;

// =============================================================================
// CHEMIN DE REPLI
// =============================================================================

/// Enregistrement fantôme produit pour un tag sans type calculé.
///
/// Aucun champ n'existe à l'exécution (taille nulle). Chaque champ a la forme
/// d'une opération qui fixe la variance du slot correspondant :
/// - `fn(In)`               → contravariant
/// - `fn() -> Out1 / Out2`  → covariant
/// - `fn(Target) -> Target` → invariant
pub struct Phantom<F, In, Out1, Out2, Target> {
    tag: PhantomData<fn() -> F>,
    input: PhantomData<fn(In)>,
    out1: PhantomData<fn() -> Out1>,
    out2: PhantomData<fn() -> Out2>,
    target: PhantomData<fn(Target) -> Target>,
}

impl<F, In, Out1, Out2, Target> Phantom<F, In, Out1, Out2, Target> {
    pub fn new() -> Self {
        Phantom {
            tag: PhantomData,
            input: PhantomData,
            out1: PhantomData,
            out2: PhantomData,
            target: PhantomData,
        }
    }

    /// Nom du tag porté par l'enregistrement (utile dans les messages).
    pub fn tag_name(&self) -> &'static str {
        std::any::type_name::<F>()
    }
}

// Les dérivations exigeraient `F: Clone`, `In: Clone`... alors que rien
// n'est stocké : on implémente à la main, sans contrainte.
impl<F, In, Out1, Out2, Target> Clone for Phantom<F, In, Out1, Out2, Target> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F, In, Out1, Out2, Target> Copy for Phantom<F, In, Out1, Out2, Target> {}

impl<F, In, Out1, Out2, Target> Default for Phantom<F, In, Out1, Out2, Target> {
    fn default() -> Self {
        Phantom::new()
    }
}

impl<F, In, Out1, Out2, Target> PartialEq for Phantom<F, In, Out1, Out2, Target> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<F, In, Out1, Out2, Target> Eq for Phantom<F, In, Out1, Out2, Target> {}

impl<F, In, Out1, Out2, Target> fmt::Debug for Phantom<F, In, Out1, Out2, Target> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Phantom")
            .field("F", &std::any::type_name::<F>())
            .field("In", &std::any::type_name::<In>())
            .field("Out1", &std::any::type_name::<Out1>())
            .field("Out2", &std::any::type_name::<Out2>())
            .field("Target", &std::any::type_name::<Target>())
            .finish()
    }
}

/// Transforme un marqueur quelconque `M` en kind sans type calculé.
///
/// `Apply<Opaque<M>, A>` vaut `Phantom<Opaque<M>, A, Bottom, Bottom, Bottom>`.
pub struct Opaque<M>(PhantomData<fn() -> M>);

impl<M> Kind for Opaque<M> {
    type Type<In, Out1, Out2, Target> = Phantom<Opaque<M>, In, Out1, Out2, Target>;
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    enum Pair {}

    type Marked<In, Out1 = Bottom, Out2 = Bottom, Target = Bottom> =
        Apply<Opaque<Pair>, In, Out1, Out2, Target>;

    // Ces fonctions ne compilent que si la variance de chaque slot est la bonne.

    fn input_accepts_shorter_lifetime<'a>(p: Marked<&'a str>) -> Marked<&'static str> {
        p
    }

    fn out1_returns_longer_lifetime<'a>(p: Marked<Bottom, &'static str>) -> Marked<Bottom, &'a str> {
        p
    }

    fn out2_returns_longer_lifetime<'a>(
        p: Marked<Bottom, Bottom, &'static str>,
    ) -> Marked<Bottom, Bottom, &'a str> {
        p
    }

    fn target_is_exact<'a>(p: Marked<Bottom, Bottom, Bottom, &'a str>) -> Marked<Bottom, Bottom, Bottom, &'a str> {
        p
    }

    #[test]
    fn test_fallback_is_zero_sized() {
        assert_eq!(std::mem::size_of::<Marked<String, u64, Vec<u8>, i32>>(), 0);
    }

    #[test]
    fn test_fallback_variance() {
        let input: Marked<&str> = Phantom::new();
        let _: Marked<&'static str> = input_accepts_shorter_lifetime(input);

        let out1: Marked<Bottom, &'static str> = Phantom::new();
        let _: Marked<Bottom, &str> = out1_returns_longer_lifetime(out1);

        let out2: Marked<Bottom, Bottom, &'static str> = Phantom::new();
        let _: Marked<Bottom, Bottom, &str> = out2_returns_longer_lifetime(out2);

        let target: Marked<Bottom, Bottom, Bottom, &str> = Phantom::new();
        let _ = target_is_exact(target);
    }

    #[test]
    fn test_fallback_exposes_tag() {
        let p: Marked<i32> = Phantom::default();
        assert!(p.tag_name().contains("Opaque"));
        assert_eq!(p, p.clone());
        assert!(format!("{:?}", p).contains("i32"));
    }

    #[test]
    fn test_omitted_slots_are_bottom() {
        fn same<T>(_: T, _: T) {}
        let short: Marked<i32> = Phantom::new();
        let full: Marked<i32, Bottom, Bottom, Bottom> = Phantom::new();
        same(short, full);
    }

    #[test]
    fn test_bare_apply_fills_every_slot() {
        fn same<T>(_: T, _: T) {}
        let bare: Apply<Opaque<Pair>> = Phantom::new();
        let full: Apply<Opaque<Pair>, Bottom, Bottom, Bottom, Bottom> = Phantom::new();
        same(bare, full);
        assert_eq!(std::mem::size_of::<Apply<Opaque<Pair>>>(), 0);
    }
}
