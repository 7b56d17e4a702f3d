//! Noyau calculatrice + traceur (sans UI)
//!
//! Organisation interne :
//! - erreur.rs       : ErreurCalc + marqueur d’erreur affiché
//! - format.rs       : texte de l’écran <-> f64
//! - operateurs.rs   : + - * / ^
//! - trig.rs         : sin/cos/tan + mode DEG/RAD
//! - calculatrice.rs : machine à états du pavé (chaîne, "=", unaires, AC/CE)
//! - catalogue.rs    : fonctions traçables
//! - traceur.rs      : échantillonnage pixel -> segments, grille + axes

pub mod calculatrice;
pub mod catalogue;
pub mod erreur;
pub mod format;
pub mod operateurs;
pub mod traceur;
pub mod trig;

#[cfg(test)]
mod tests_calculatrice;


// API publique minimale
pub use calculatrice::{Calculatrice, Constante, EtatMachine};
pub use catalogue::FonctionCourbe;
pub use operateurs::Operateur;
pub use traceur::{Fenetre, Grille, Traceur};
pub use trig::{ModeAngle, TrigFn};
