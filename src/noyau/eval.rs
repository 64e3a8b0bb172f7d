//! Noyau — évaluation (pipeline réel)
//!
//! glyphes -> longueur -> liste blanche -> jetons -> RPN -> valeur -> finitude -> arrondi
//!
//! Remarque : aucune exécution de code générique ; la seule chose qui consomme
//! la chaîne est le tokeniseur, et seulement après la liste blanche.

use tracing::debug;

use super::erreurs::ErreurEval;
use super::filtre::{est_dans_alphabet, normaliser_glyphes};
use super::format::arrondir_significatif;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, format_rpn, to_rpn};

/// Longueur maximale (en caractères, après normalisation).
pub const LONGUEUR_MAX: usize = 200;

/// Précision du résultat (chiffres significatifs).
pub const CHIFFRES_SIGNIFICATIFS: usize = 12;

/// API publique : évalue une expression arithmétique.
///
/// - `Ok(v)` : v fini, arrondi à 12 chiffres significatifs
/// - `Err(..)` : voir `ErreurEval` (la chaîne vide donne `Evaluation`)
pub fn evaluer(expr_str: &str) -> Result<f64, ErreurEval> {
    // 1) Glyphes alternatifs
    let s = normaliser_glyphes(expr_str);

    // 2) Longueur (avant l’alphabet : 201 caractères => TropLong quoi qu’il arrive)
    let longueur = s.chars().count();
    if longueur > LONGUEUR_MAX {
        debug!(longueur, "expression refusée: trop longue");
        return Err(ErreurEval::TropLong);
    }

    // 3) Liste blanche
    if !est_dans_alphabet(&s) {
        debug!(expr = %s, "expression refusée: caractères invalides");
        return Err(ErreurEval::CaracteresInvalides);
    }

    // 4) Jetons -> RPN -> valeur
    let v = calculer(&s).inspect_err(|e| debug!(expr = %s, cause = %e, "évaluation échouée"))?;

    // 5) Finitude
    if !v.is_finite() {
        debug!(expr = %s, valeur = v, "résultat non fini");
        return Err(ErreurEval::PasUnNombre);
    }

    // 6) Arrondi
    Ok(arrondir_significatif(v, CHIFFRES_SIGNIFICATIFS))
}

fn calculer(s: &str) -> Result<f64, super::erreurs::ErreurSyntaxe> {
    let jetons = tokenize(s)?;
    let rpn = to_rpn(&jetons)?;
    debug!(
        jetons = %format_tokens(&jetons),
        rpn = %format_rpn(&rpn),
        "expression analysée"
    );
    eval_rpn(&rpn)
}
