// src/noyau/operateurs.rs
//
// Opérateurs binaires de la chaîne “a op b” (pas de priorité, pas de parenthèses).

use super::erreur::{ErreurCalc, ResultatCalc};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Division,
    Puissance,
}

impl Operateur {
    /// Symbole du pavé (et du clavier).
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "*",
            Operateur::Division => "/",
            Operateur::Puissance => "^",
        }
    }

    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' | '×' => Some(Operateur::Fois),
            '/' | '÷' => Some(Operateur::Division),
            '^' => Some(Operateur::Puissance),
            _ => None,
        }
    }
}

/// Évalue `a op b`.
///
/// - division par zéro => ErreurCalc::DivisionParZero
/// - Puissance peut produire NaN/∞ : c’est l’affichage qui le refuse, pas ici
/// - sans opérateur, renvoie `b` tel quel
pub fn evaluer(a: f64, b: f64, op: Option<Operateur>) -> ResultatCalc<f64> {
    let Some(op) = op else {
        return Ok(b);
    };

    match op {
        Operateur::Plus => Ok(a + b),
        Operateur::Moins => Ok(a - b),
        Operateur::Fois => Ok(a * b),
        Operateur::Division => {
            if b == 0.0 {
                Err(ErreurCalc::DivisionParZero)
            } else {
                Ok(a / b)
            }
        }
        Operateur::Puissance => Ok(a.powf(b)),
    }
}
