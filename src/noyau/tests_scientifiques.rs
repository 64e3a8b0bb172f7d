//! Tests scientifiques (campagne) : propriétés observables du noyau.
//!
//! - liste noire d’injections : jamais évaluées, toujours CaracteresInvalides
//! - cas de référence (2+2, 10/0, glyphes, longueur 201)
//! - propriétés (proptest) : ré-évaluation d’un résultat validé, filtre de collage,
//!   accord avec l’arithmétique f64 sur des expressions construites

use proptest::prelude::*;

use super::erreurs::{ErreurEval, ErreurSyntaxe};
use super::eval::{evaluer, CHIFFRES_SIGNIFICATIFS, LONGUEUR_MAX};
use super::filtre::{est_dans_alphabet, filtrer_collage};
use super::format::{arrondir_significatif, formater_resultat};
use super::tampon::TamponExpression;

/* ------------------------ Liste noire ------------------------ */

#[test]
fn sci_injections_refusees() {
    let liste_noire = [
        "alert(1)",
        "constructor",
        "2+2;fetch('x')",
        "this.x",
        "(()=>1)()",
        "Math.PI",
        "1e3",
        "0x10",
        "[]+{}",
        "`1`",
        "2%3",
        "1,2",
        "a=1",
    ];
    for s in liste_noire {
        assert_eq!(
            evaluer(s),
            Err(ErreurEval::CaracteresInvalides),
            "{s:?} devrait être refusé"
        );
    }
}

/* ------------------------ Cas de référence ------------------------ */

#[test]
fn sci_cas_de_reference() {
    assert_eq!(evaluer("2+2"), Ok(4.0));
    assert_eq!(evaluer("10/0"), Err(ErreurEval::PasUnNombre));
    assert_eq!(evaluer("3×2÷1"), Ok(6.0));
    // "×2÷1" est évalué comme "*2/1" : opérande manquant
    assert_eq!(
        evaluer("×2÷1"),
        Err(ErreurEval::Evaluation(ErreurSyntaxe::OperandeManquant))
    );
}

#[test]
fn sci_vide_toujours_erreur() {
    // choix documenté : la chaîne vide est une erreur d’évaluation, jamais 0
    for s in ["", " ", "\t\n"] {
        assert!(matches!(evaluer(s), Err(ErreurEval::Evaluation(_))), "{s:?}");
    }
}

#[test]
fn sci_longueur_201_quel_que_soit_le_contenu() {
    for motif in ["1", "+", "x", "(", " ", "×"] {
        let s = motif.repeat(LONGUEUR_MAX + 1);
        assert_eq!(evaluer(&s), Err(ErreurEval::TropLong), "motif {motif:?}");
    }
}

#[test]
fn sci_retour_arriere_sur_vide() {
    let mut t = TamponExpression::new();
    for _ in 0..3 {
        t.retour_arriere();
    }
    assert_eq!(t.affichage(), "0");
}

#[test]
fn sci_valider_puis_reevaluer() {
    for expr in ["1/3", "2/3", "-7/9", "0.1+0.2", "123456.789*1000", "1/7/7/7/7/7"] {
        let v = evaluer(expr).unwrap_or_else(|e| panic!("{expr:?}: {e}"));
        let mut t = TamponExpression::new();
        t.ajouter(expr);
        t.valider_resultat(v);
        assert_eq!(evaluer(t.texte()), Ok(v), "{expr:?} -> {:?}", t.texte());
    }
}

/* ------------------------ Propriétés ------------------------ */

fn petit_nombre() -> impl Strategy<Value = f64> {
    (-10_000i32..10_000, 0u32..3).prop_map(|(n, d)| n as f64 / 10f64.powi(d as i32))
}

fn non_nul() -> impl Strategy<Value = f64> {
    petit_nombre().prop_filter("non nul", |v| *v != 0.0)
}

fn litteral(v: f64) -> String {
    if v < 0.0 {
        format!("({})", formater_resultat(v))
    } else {
        formater_resultat(v)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_collage_toujours_dans_alphabet(s in ".{0,60}") {
        let propre = filtrer_collage(&s);
        prop_assert!(est_dans_alphabet(&propre));
    }

    #[test]
    fn prop_alphabet_seul_jamais_caracteres_invalides(s in "[-0-9+*/().×÷− ]{0,80}") {
        prop_assert_ne!(evaluer(&s), Err(ErreurEval::CaracteresInvalides));
    }

    #[test]
    fn prop_resultat_valide_reevaluable(a in petit_nombre(), b in non_nul(), c in petit_nombre()) {
        let expr = format!("{} / {} - {}", litteral(a), litteral(b), litteral(c));
        let v = evaluer(&expr);
        prop_assert!(v.is_ok(), "{expr:?} => {v:?}");
        if let Ok(v) = v {
            prop_assert_eq!(evaluer(&formater_resultat(v)), Ok(v));
        }
    }

    #[test]
    fn prop_accord_avec_f64(a in petit_nombre(), b in petit_nombre(), c in non_nul()) {
        let expr = format!("{}+{}*{}÷{}", litteral(a), litteral(b), litteral(c), litteral(c));
        let attendu = arrondir_significatif(a + b * c / c, CHIFFRES_SIGNIFICATIFS);
        prop_assert_eq!(evaluer(&expr), Ok(attendu));
    }
}
