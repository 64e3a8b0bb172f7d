// src/noyau/erreurs.rs
//
// Taxonomie d’erreurs du noyau.
// - ErreurEval    : ce que voit l’utilisateur (texte court, jamais un crash)
// - ErreurSyntaxe : cause détaillée (journalisée, pas affichée)

use thiserror::Error;

/// Échec d’évaluation. `Display` = texte court affiché pendant le flash d’erreur.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ErreurEval {
    #[error("caractères invalides")]
    CaracteresInvalides,

    #[error("trop long")]
    TropLong,

    /// Résultat infini ou NaN (ex: 10/0).
    #[error("NaN")]
    PasUnNombre,

    #[error("erreur")]
    Evaluation(#[source] ErreurSyntaxe),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ErreurSyntaxe {
    #[error("expression vide")]
    Vide,

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("caractère inattendu: {0:?}")]
    CaractereInattendu(char),

    #[error("parenthèses non fermées")]
    ParentheseNonFermee,

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseOrpheline,

    #[error("valeur inattendue (opérateur manquant)")]
    ValeurInattendue,

    #[error("opérande manquant")]
    OperandeManquant,
}

impl From<ErreurSyntaxe> for ErreurEval {
    fn from(e: ErreurSyntaxe) -> Self {
        ErreurEval::Evaluation(e)
    }
}
