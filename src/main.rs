// =============================================================================
// KINDRUST — Point d'entrée : démonstration de l'encodage
// =============================================================================
//
// Ce main.rs montre un exemple complet :
//   1. Construire des valeurs Maybe (Just / Nothing)
//   2. Les transformer avec fmap, apply, bind (formes directe et curryfiée)
//   3. Écrire du code générique sur un tag de kind
//   4. Vérifier les lois sur chaque instance
//
// Le niveau de log se règle avec RUST_LOG (ex: RUST_LOG=kindrust=trace).
//
// =============================================================================

use kindrust::core::laws::{self, LawViolation};
use kindrust::core::{applicative, functor, monad};
use kindrust::{compose, Applicative, Apply, Functor, IdentityTag, Maybe, OptionalTag, SequenceTag};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

type IntFn = fn(i32) -> i32;

fn double(x: i32) -> i32 {
    x * 2
}

fn succ(x: i32) -> i32 {
    x + 1
}

fn positive(x: i32) -> Maybe<i32> {
    if x > 0 {
        Maybe::just(x)
    } else {
        Maybe::nothing()
    }
}

/// Code générique : fonctionne pour N'IMPORTE QUEL Functor.
fn describe_all<K: Functor>(values: Apply<K, i32>) -> Apply<K, String> {
    K::fmap(|x: i32| format!("<{}>", x), values)
}

fn report(name: &str, result: Result<(), LawViolation>) -> bool {
    match result {
        Ok(()) => {
            println!("  ✓ {}", name);
            true
        }
        Err(e) => {
            println!("  ✗ {} : {}", name, e);
            false
        }
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kindrust=info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    println!("╔══════════════════════════════════════════════════╗");
    println!("║      KINDRUST — Functor / Applicative / Monad    ║");
    println!("║      Types d'ordre supérieur par tags de kind    ║");
    println!("╚══════════════════════════════════════════════════╝\n");

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 1 : Construire des valeurs
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 1 : Just / Nothing ═══\n");

    let five = Maybe::just(5);
    let none = Maybe::<i32>::nothing();
    println!("  just(5)   = {}", five);
    println!("  nothing() = {}", none);
    println!("  pure(5) == ret(5) == just(5) : {}\n", Maybe::pure(5) == Maybe::ret(5));

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 2 : fmap / apply / bind
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 2 : Opérations ═══\n");

    let times_two = Maybe::fmap(|x: i32| x * 2);
    println!("  fmap(x * 2)(just(5))   = {}", times_two(five));
    println!("  fmap(x * 2)(nothing()) = {}", times_two(none));

    let plus_one: Maybe<IntFn> = Maybe::just(succ);
    println!("  apply(just(+1))(just(5))  = {}", Maybe::apply(plus_one)(five));
    println!("  apply(just(+1))(nothing()) = {}", Maybe::apply(plus_one)(none));

    println!("  bind(just(5))(positive)   = {}", Maybe::bind(five)(positive));
    println!("  bind(just(-5))(positive)  = {}", Maybe::bind(Maybe::just(-5))(positive));
    println!("  bind(nothing())(positive) = {}", Maybe::bind(none)(positive));

    let sum = OptionalTag::lift_a2(|a: i32, b: i32| a + b, Maybe::just(2), Maybe::just(40));
    println!("  lift_a2(+)(just(2))(just(40)) = {}", sum);

    // Mêmes opérations, via les formes curryfiées génériques
    let shout = functor::fmap::<OptionalTag, _, _, _>(|s: &str| s.to_uppercase());
    println!("  fmap(upper)(just(\"kind\")) = {}", shout(Maybe::just("kind")));
    let applied = applicative::apply::<OptionalTag, _, _, _>(Maybe::just(compose(double, succ)))(five);
    println!("  apply(just(double . succ))(just(5)) = {}", applied);
    let chained = monad::bind::<OptionalTag, _, _, _>(five)(|x: i32| positive(x - 10));
    println!("  bind(just(5))(x -> positive(x - 10)) = {}\n", chained);

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 3 : Code générique sur un tag de kind
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 3 : Une seule fonction, trois structures ═══\n");

    println!("  Identity : {:?}", describe_all::<IdentityTag>(7));
    println!("  Maybe    : {:?}", describe_all::<OptionalTag>(Maybe::just(7)));
    println!("  Vec      : {:?}\n", describe_all::<SequenceTag>(vec![1, 2, 3]));

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 4 : Vérification des lois
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 4 : Lois ═══\n");

    let mut passed = 0;
    let mut total = 0;
    let mut tally = |name: &str, result: Result<(), LawViolation>| {
        total += 1;
        if report(name, result) {
            passed += 1;
        }
    };

    println!("--- Maybe ---");
    for v in [five, none] {
        tally("functor identity", laws::functor_identity::<OptionalTag, i32>(v));
        tally("functor composition", laws::functor_composition::<OptionalTag, _, _, _, _, _>(v, double, succ));
        tally("applicative identity", laws::applicative_identity::<OptionalTag, i32>(v));
        tally("monad right identity", laws::monad_right_identity::<OptionalTag, i32>(v));
    }
    let u: Maybe<IntFn> = Maybe::just(double);
    let w: Maybe<IntFn> = Maybe::just(succ);
    tally("applicative homomorphism", laws::applicative_homomorphism::<OptionalTag, _, _, _>(double, 5));
    tally("applicative interchange", laws::applicative_interchange::<OptionalTag, i32, i32, IntFn>(u, 5));
    tally(
        "applicative composition",
        laws::applicative_composition::<OptionalTag, i32, i32, i32, IntFn, IntFn>(u, w, five),
    );
    tally("monad left identity", laws::monad_left_identity::<OptionalTag, _, _, _>(5, positive));

    println!("--- Identity ---");
    tally("functor", laws::check_functor::<IdentityTag, _, _, _, _, _>(3, double, succ));
    tally("monad identities", laws::check_monad_identities::<IdentityTag, _, _, _>(3, 3, double));

    println!("--- Vec ---");
    tally("functor", laws::check_functor::<SequenceTag, i32, _, _, _, _>(vec![1, 2, 3], double, succ));

    info!(passed, total, "vérification des lois terminée");

    println!("\n═══════════════════════════════════════════════════");
    println!("{} / {} lois respectées", passed, total);
    println!("  3 tags : Identity, Maybe, Vec");
    println!("═══════════════════════════════════════════════════");
}
