//! src/app/reglages.rs
//!
//! Réglages du contrôleur (durées). Pas de fichier, pas d’environnement :
//! `Default` porte les valeurs d’usage.

use std::time::Duration;

/// Durée d’affichage du flash d’erreur.
const DELAI_FLASH_DEFAUT: Duration = Duration::from_millis(900);

/// Seuil de l’appui long sur "=" (carré du résultat).
const DELAI_APPUI_LONG_DEFAUT: Duration = Duration::from_millis(600);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub delai_flash: Duration,
    pub delai_appui_long: Duration,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            delai_flash: DELAI_FLASH_DEFAUT,
            delai_appui_long: DELAI_APPUI_LONG_DEFAUT,
        }
    }
}
