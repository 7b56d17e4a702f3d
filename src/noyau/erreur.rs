// src/noyau/erreur.rs
//
// Erreurs du noyau. Elles ne sortent jamais vers l’UI :
// la calculatrice les convertit toutes en MARQUEUR_ERREUR à l’affichage.

use thiserror::Error;

/// Texte affiché à la place d’un nombre après une erreur.
pub const MARQUEUR_ERREUR: &str = "Erreur";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    #[error("division par zéro")]
    DivisionParZero,

    /// Argument hors domaine (√ négatif, 1/0, log ou ln de x <= 0).
    #[error("hors domaine : {0}")]
    Domaine(&'static str),

    /// Résultat NaN ou infini.
    #[error("débordement ou résultat indéfini")]
    Debordement,
}

pub type ResultatCalc<T> = Result<T, ErreurCalc>;
