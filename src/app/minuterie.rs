//! src/app/minuterie.rs
//!
//! Minuterie explicite : une échéance sur l’horloge egui (secondes, f64).
//! Pas de callback : le contrôleur interroge `est_echue` à chaque frame (tic),
//! et annuler = abandonner la valeur (`Option::take`).

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Minuterie {
    echeance: f64,
}

impl Minuterie {
    pub fn armer(maintenant: f64, delai: Duration) -> Self {
        Self {
            echeance: maintenant + delai.as_secs_f64(),
        }
    }

    pub fn est_echue(&self, maintenant: f64) -> bool {
        maintenant >= self.echeance
    }

    /// Temps restant (zéro si échue).
    pub fn restant(&self, maintenant: f64) -> Duration {
        Duration::from_secs_f64((self.echeance - maintenant).max(0.0))
    }
}
