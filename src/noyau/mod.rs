//! Noyau : tampon + évaluateur arithmétique
//!
//! Organisation interne :
//! - filtre.rs   : liste blanche + normalisation ×, ÷, −
//! - jetons.rs   : tokenisation (nombres décimaux, + - * /, parenthèses)
//! - rpn.rs      : shunting-yard (unaires compris) + évaluation de la RPN
//! - format.rs   : arrondi 12 chiffres significatifs + texte du résultat
//! - eval.rs     : pipeline complet
//! - tampon.rs   : tampon d’expression
//! - erreurs.rs  : ErreurEval / ErreurSyntaxe

pub mod erreurs;
pub mod eval;
pub mod filtre;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod tampon;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;
