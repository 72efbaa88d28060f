// =============================================================================
// COMPOSE — Identité et composition de fonctions
// =============================================================================
//
// Les deux morphismes de base de la catégorie des types Rust :
//   identity : A → A
//   compose  : (B → C) × (A → B) → (A → C),   compose(f, g)(x) = f(g(x))
//
// `compose` existe sous deux formes :
//   - complète   : compose(f, g)
//   - curryfiée  : compose_curried(f)(g)   (f maintenant, g plus tard)
//
// Les deux donnent exactement la même fonction.
//
// =============================================================================

/// La fonction identité.
pub fn identity<A>(a: A) -> A {
    a
}

/// `compose(f, g) = x ↦ f(g(x))`
pub fn compose<X, Y, Z, F, G>(f: F, g: G) -> impl Fn(X) -> Z
where
    F: Fn(Y) -> Z,
    G: Fn(X) -> Y,
{
    move |x| f(g(x))
}

/// Forme partiellement appliquée de [`compose`] : reçoit `f`, renvoie une
/// fonction qui attend `g`.
///
/// La fonction partielle est réutilisable : chaque appel compose une copie de
/// `f` avec le `g` reçu.
///
/// Le résultat final est mis en boîte : un type `impl Fn` ne peut pas
/// apparaître dans la signature d'une fermeture renvoyée.
pub fn compose_curried<'a, X, Y, Z, F, G>(f: F) -> impl Fn(G) -> Box<dyn Fn(X) -> Z + 'a>
where
    F: Fn(Y) -> Z + Clone + 'a,
    G: Fn(X) -> Y + 'a,
    X: 'a,
    Y: 'a,
    Z: 'a,
{
    move |g| Box::new(compose(f.clone(), g))
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn double(x: i32) -> i32 {
        x * 2
    }

    fn succ(x: i32) -> i32 {
        x + 1
    }

    #[test]
    fn test_identity() {
        assert_eq!(identity(5), 5);
        assert_eq!(identity("abc"), "abc");
    }

    #[test]
    fn test_compose_order() {
        // f(g(x)) : g d'abord, f ensuite
        let h = compose(double, succ);
        assert_eq!(h(5), 12);
        let h = compose(succ, double);
        assert_eq!(h(5), 11);
    }

    #[test]
    fn test_compose_curried_matches_direct() {
        let direct = compose(double, succ);
        let curried = compose_curried(double)(succ);
        for x in [-3, 0, 1, 7, 100] {
            assert_eq!(direct(x), curried(x));
        }
    }

    #[test]
    fn test_compose_curried_is_reusable() {
        let after_double = compose_curried::<i32, i32, i32, fn(i32) -> i32, fn(i32) -> i32>(double);
        let double_succ = after_double(succ);
        let quadruple = after_double(double);
        assert_eq!(double_succ(5), 12);
        assert_eq!(quadruple(5), 20);
        assert_eq!(double_succ(0), 2);
    }

    #[test]
    fn test_compose_changes_type() {
        let len_then_double = compose(double, |s: &str| s.len() as i32);
        assert_eq!(len_then_double("hello"), 10);
    }

    #[test]
    fn test_compose_with_identity() {
        let left = compose(identity, double);
        let right = compose(double, identity);
        assert_eq!(left(21), 42);
        assert_eq!(right(21), 42);
    }
}
