//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : Ok(v) => v fini, et valider v puis ré-évaluer redonne v

use std::time::{Duration, Instant};

use super::erreurs::ErreurEval;
use super::eval::{evaluer, LONGUEUR_MAX};
use super::format::formater_resultat;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Invariants ------------------------ */

fn check_ok(expr: &str, v: f64) {
    assert!(v.is_finite(), "expr={expr:?} => {v} non fini");
    let texte = formater_resultat(v);
    assert_eq!(
        evaluer(&texte),
        Ok(v),
        "ré-évaluation de {texte:?} (depuis {expr:?})"
    );
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let entier = rng.pick(1000);
    match rng.pick(5) {
        // zéros fréquents : divisions par zéro garanties dans le lot
        0 => "0".to_string(),
        1 => format!("{entier}.{}", rng.pick(100)),
        2 => format!(".{}", rng.pick(10)),
        _ => format!("{entier}"),
    }
}

fn gen_op(rng: &mut Rng) -> &'static str {
    match rng.pick(7) {
        0 => "+",
        1 => "-",
        2 => "*",
        3 => "/",
        4 => "×",
        5 => "÷",
        _ => "−",
    }
}

/// Expression bien formée (seules erreurs possibles : NaN, trop long).
fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(5) {
        0 => gen_nombre(rng),
        1 => format!("-{}", gen_expr(rng, depth - 1)),
        2 => format!("({})", gen_expr(rng, depth - 1)),
        _ => {
            let espace = if rng.coin() { " " } else { "" };
            format!(
                "{}{espace}{}{espace}{}",
                gen_expr(rng, depth - 1),
                gen_op(rng),
                gen_expr(rng, depth - 1)
            )
        }
    }
}

/// Soupe de caractères : alphabet + glyphes + intrus.
fn gen_soupe(rng: &mut Rng) -> String {
    const CHARS: &[char] = &[
        '0', '1', '7', '9', '+', '-', '*', '/', '(', ')', '.', ' ', '×', '÷', '−', 'e', 'x', ';',
        '^', '[', '\'',
    ];
    let n = rng.pick(40) as usize;
    (0..n)
        .map(|_| CHARS[rng.pick(CHARS.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_nan = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        match evaluer(&expr) {
            Ok(v) => {
                check_ok(&expr, v);
                assert_eq!(evaluer(&expr), Ok(v), "déterminisme: {expr:?}");
                seen_ok += 1;
            }
            Err(ErreurEval::PasUnNombre) => seen_nan += 1,
            Err(ErreurEval::TropLong) => {
                assert!(expr.chars().count() > LONGUEUR_MAX, "expr={expr:?}");
            }
            Err(e) => panic!("erreur non attendue: expr={expr:?} err={e:?}"),
        }
    }

    // On veut voir un mix, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_nan > 0, "aucune division par zéro vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_soupe_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut seen_invalides = 0usize;

    for _ in 0..500 {
        budget(t0, max);

        let expr = gen_soupe(&mut rng);
        match evaluer(&expr) {
            Ok(v) => check_ok(&expr, v),
            Err(ErreurEval::CaracteresInvalides) => {
                assert!(
                    expr.chars().any(|c| matches!(c, 'e' | 'x' | ';' | '^' | '[' | '\'')),
                    "refus injustifié: {expr:?}"
                );
                seen_invalides += 1;
            }
            Err(_) => {}
        }
    }

    assert!(seen_invalides > 0);
}

#[test]
fn fuzz_safe_imbrication_profonde() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 99 niveaux = 199 caractères : juste sous la limite
    let profond = format!("{}1{}", "(".repeat(99), ")".repeat(99));
    assert_eq!(evaluer(&profond), Ok(1.0));

    let trop = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert_eq!(evaluer(&trop), Err(ErreurEval::TropLong));

    let negations = format!("{}5", "-".repeat(199));
    assert_eq!(evaluer(&negations), Ok(-5.0));

    budget(t0, max);
}

#[test]
fn fuzz_safe_longue_somme() {
    // 100 termes "1" = 199 caractères
    let expr = vec!["1"; 100].join("+");
    assert_eq!(expr.len(), 199);
    assert_eq!(evaluer(&expr), Ok(100.0));
}
