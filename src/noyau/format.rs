// src/noyau/format.rs
//
// Arrondi + texte du résultat.
// Le texte produit reste dans l’alphabet (chiffres, '-', '.') :
// un résultat validé dans le tampon est toujours ré-évaluable.

/* ------------------------ Arrondi ------------------------ */

/// Arrondit à `chiffres` chiffres significatifs (≥ 1).
/// Passe par l’écriture scientifique décimale : même résultat que toPrecision.
pub fn arrondir_significatif(v: f64, chiffres: usize) -> f64 {
    if !v.is_finite() || v == 0.0 {
        return v;
    }
    let precision = chiffres.max(1) - 1;
    format!("{v:.precision$e}").parse::<f64>().unwrap_or(v)
}

/* ------------------------ Texte ------------------------ */

/// Écriture décimale simple : pas d’exposant, pas de séparateur de milliers.
/// "-0" devient "0".
pub fn formater_resultat(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}
