//! src/app/etat.rs
//!
//! État UI (sans vue) : la calculatrice, le traceur, la fenêtre Graphique.
//!
//! Contrats :
//! - Aucun calcul ici : chaque touche est transmise telle quelle au noyau.
//! - Même chemin pour les clics et le clavier (`appuyer`).

use crate::noyau::{Calculatrice, Constante, Operateur, Traceur, TrigFn};

/// Une touche du pavé (bouton ou clavier).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Op(Operateur),
    Egal,
    Trig(TrigFn),
    Racine,
    Carre,
    Inverse,
    Pourcent,
    Log,
    Ln,
    Exp,
    Signe,
    Constante(Constante),
    ModeAngle,
    EffacerTout,
    EffacerEntree,
    Graphique,
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub calc: Calculatrice,
    pub traceur: Traceur,

    // --- fenêtre Graphique ---
    pub graphe_ouvert: bool,
    // Demande de passage au premier plan (consommée par la vue).
    pub graphe_au_premier_plan: bool,
}

impl AppCalc {
    pub fn appuyer(&mut self, t: Touche) {
        match t {
            Touche::Chiffre(c) => self.calc.saisir_chiffre(c),
            Touche::Op(op) => self.calc.appliquer_operateur(op),
            Touche::Egal => self.calc.egal(),
            Touche::Trig(f) => self.calc.trigo(f),
            Touche::Racine => self.calc.racine_carree(),
            Touche::Carre => self.calc.carre(),
            Touche::Inverse => self.calc.inverse(),
            Touche::Pourcent => self.calc.pourcentage(),
            Touche::Log => self.calc.log10(),
            Touche::Ln => self.calc.ln(),
            Touche::Exp => self.calc.exponentielle(),
            Touche::Signe => self.calc.changer_signe(),
            Touche::Constante(k) => self.calc.inserer_constante(k),
            Touche::ModeAngle => self.calc.basculer_mode_angle(),
            Touche::EffacerTout => self.calc.effacer_tout(),
            Touche::EffacerEntree => self.calc.effacer_entree(),
            Touche::Graphique => self.ouvrir_graphe(),
        }
    }

    /// Ouvre la fenêtre Graphique, ou la ramène devant si elle est déjà ouverte.
    pub fn ouvrir_graphe(&mut self) {
        self.graphe_ouvert = true;
        self.graphe_au_premier_plan = true;
    }

    /// Clavier -> touche. None si le caractère n’a pas de sens ici.
    pub fn touche_clavier(c: char) -> Option<Touche> {
        match c {
            '0'..='9' | '.' => Some(Touche::Chiffre(c)),
            ',' => Some(Touche::Chiffre('.')),
            '=' => Some(Touche::Egal),
            '%' => Some(Touche::Pourcent),
            _ => Operateur::depuis_symbole(c).map(Touche::Op),
        }
    }
}
