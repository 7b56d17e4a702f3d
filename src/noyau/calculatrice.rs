//! src/noyau/calculatrice.rs
//!
//! Machine à états de la calculatrice (pavé numérique, chaîne “a op b op c …”).
//!
//! Contrats :
//! - Aucune opération ne renvoie d’erreur à l’appelant : toute ErreurCalc devient
//!   MARQUEUR_ERREUR à l’écran, opérateur en attente effacé, prochain chiffre = nouveau nombre.
//! - `affichage` est toujours un décimal fini lisible, OU exactement MARQUEUR_ERREUR.
//! - `operateur_en_attente` est None ssi aucune opération binaire n’attend son opérande droit.
//! - Aucun lien avec le traceur ni avec l’UI.

use std::f64::consts::{E, PI};

use tracing::{debug, warn};

use super::erreur::{ErreurCalc, ResultatCalc, MARQUEUR_ERREUR};
use super::format::{format_valeur, lire_affichage};
use super::operateurs::{evaluer, Operateur};
use super::trig::{ModeAngle, TrigFn};

/// Garde-fou : nombre max de caractères tapés au pavé (reste toujours fini en f64).
pub const LONGUEUR_MAX_SAISIE: usize = 24;

/// Vue dérivée de l’état (pour l’UI et les tests).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EtatMachine {
    Repos,
    SaisieOperande,
    OperateurEnAttente,
    Erreur,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => PI,
            Constante::E => E,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Calculatrice {
    affichage: String,
    valeur_stockee: f64,
    operateur_en_attente: Option<Operateur>,
    reinit_affichage: bool,
    mode_angle: ModeAngle,

    // Opérateur + opérande droit du dernier "=" (répétition de "=").
    dernier_calcul: Option<(Operateur, f64)>,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            valeur_stockee: 0.0,
            operateur_en_attente: None,
            reinit_affichage: false,
            mode_angle: ModeAngle::default(),
            dernier_calcul: None,
        }
    }
}

impl Calculatrice {
    /* ------------------------ Lecture ------------------------ */

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn valeur_stockee(&self) -> f64 {
        self.valeur_stockee
    }

    pub fn operateur_en_attente(&self) -> Option<Operateur> {
        self.operateur_en_attente
    }

    pub fn mode_angle(&self) -> ModeAngle {
        self.mode_angle
    }

    pub fn est_en_erreur(&self) -> bool {
        self.affichage == MARQUEUR_ERREUR
    }

    pub fn etat_machine(&self) -> EtatMachine {
        if self.est_en_erreur() {
            return EtatMachine::Erreur;
        }

        if self.reinit_affichage {
            if self.operateur_en_attente.is_some() || self.dernier_calcul.is_some() {
                EtatMachine::OperateurEnAttente
            } else if self.affichage != "0" {
                // résultat d’un unaire ou constante : opérande gauche prêt
                EtatMachine::SaisieOperande
            } else {
                EtatMachine::Repos
            }
        } else if self.operateur_en_attente.is_some() || self.affichage != "0" {
            EtatMachine::SaisieOperande
        } else {
            EtatMachine::Repos
        }
    }

    fn valeur_courante(&self) -> f64 {
        lire_affichage(&self.affichage)
    }

    /* ------------------------ Saisie ------------------------ */

    /// Chiffre '0'..='9' ou '.'. Tout autre caractère est ignoré.
    pub fn saisir_chiffre(&mut self, jeton: char) {
        if !(jeton.is_ascii_digit() || jeton == '.') {
            return;
        }

        if self.reinit_affichage || self.est_en_erreur() {
            self.affichage.clear();
            self.reinit_affichage = false;
        }

        if jeton == '.' && self.affichage.contains('.') {
            return;
        }

        if self.affichage.len() >= LONGUEUR_MAX_SAISIE {
            return;
        }

        if self.affichage == "0" && jeton != '.' {
            self.affichage = jeton.to_string();
        } else if self.affichage.is_empty() && jeton == '.' {
            // garde l’écran lisible comme nombre
            self.affichage.push_str("0.");
        } else {
            self.affichage.push(jeton);
        }
    }

    /// π ou e, écrit directement à l’écran.
    pub fn inserer_constante(&mut self, c: Constante) {
        self.affichage = format_valeur(c.valeur());
        self.reinit_affichage = true;
        debug!(constante = ?c, "constante insérée");
    }

    /* ------------------------ Opérations binaires ------------------------ */

    /// + - * / ^ : enchaîne (3 + 2 + 1 affiche 5 puis 6), sans priorité.
    pub fn appliquer_operateur(&mut self, op: Operateur) {
        let courant = self.valeur_courante();

        match self.operateur_en_attente {
            // opérande droit réellement saisi => résultat intermédiaire
            Some(en_attente) if !self.reinit_affichage => {
                let r = evaluer(self.valeur_stockee, courant, Some(en_attente));
                match self.poser(r) {
                    Some(v) => self.valeur_stockee = v,
                    None => return,
                }
            }
            _ => self.valeur_stockee = courant,
        }

        // sortie d’erreur par un opérateur : le marqueur vaut 0
        if self.est_en_erreur() {
            self.affichage = format_valeur(courant);
        }

        self.operateur_en_attente = Some(op);
        self.reinit_affichage = true;

        debug!(
            operateur = op.symbole(),
            stockee = self.valeur_stockee,
            "opérateur en attente"
        );
    }

    /// "=" : termine l’opération en attente.
    /// Sans opérateur en attente, rejoue le dernier calcul sur la valeur affichée
    /// (a + b = = affiche a+b puis (a+b)+b). Sans historique : rien.
    pub fn egal(&mut self) {
        let courant = self.valeur_courante();

        let (a, b, op) = match (self.operateur_en_attente, self.dernier_calcul) {
            (Some(op), _) => (self.valeur_stockee, courant, op),
            (None, Some((op, b))) => (courant, b, op),
            (None, None) => return,
        };

        self.operateur_en_attente = None;
        if let Some(v) = self.poser(evaluer(a, b, Some(op))) {
            self.valeur_stockee = v;
            self.dernier_calcul = Some((op, b));
            debug!(a, b, operateur = op.symbole(), resultat = v, "égal");
        }
        self.reinit_affichage = true;
    }

    /* ------------------------ Opérations unaires ------------------------ */

    pub fn trigo(&mut self, f: TrigFn) {
        let mode = self.mode_angle;
        self.unaire("trigo", move |x| Ok(f.appliquer(mode.vers_radians(x))));
    }

    pub fn racine_carree(&mut self) {
        self.unaire("racine", |x| {
            if x < 0.0 {
                Err(ErreurCalc::Domaine("racine d’un négatif"))
            } else {
                Ok(x.sqrt())
            }
        });
    }

    pub fn inverse(&mut self) {
        self.unaire("inverse", |x| {
            if x == 0.0 {
                Err(ErreurCalc::Domaine("inverse de zéro"))
            } else {
                Ok(1.0 / x)
            }
        });
    }

    /// % : avec un opérateur en attente, pourcentage de l’opérande gauche
    /// (200 + 10 % => 20), sinon x/100.
    pub fn pourcentage(&mut self) {
        let base = self.operateur_en_attente.map(|_| self.valeur_stockee);
        self.unaire("pourcentage", move |x| {
            Ok(match base {
                Some(s) => s * (x / 100.0),
                None => x / 100.0,
            })
        });
    }

    pub fn log10(&mut self) {
        self.unaire("log10", |x| {
            if x <= 0.0 {
                Err(ErreurCalc::Domaine("log d’un nombre <= 0"))
            } else {
                Ok(x.log10())
            }
        });
    }

    pub fn ln(&mut self) {
        self.unaire("ln", |x| {
            if x <= 0.0 {
                Err(ErreurCalc::Domaine("ln d’un nombre <= 0"))
            } else {
                Ok(x.ln())
            }
        });
    }

    pub fn carre(&mut self) {
        self.unaire("carre", |x| Ok(x * x));
    }

    pub fn exponentielle(&mut self) {
        self.unaire("exp", |x| Ok(x.exp()));
    }

    pub fn changer_signe(&mut self) {
        self.unaire("signe", |x| Ok(-x));
    }

    /// Lit l’écran, calcule, réécrit, et arme la remise à zéro de la saisie.
    /// En état Erreur : rien (AC, CE, un chiffre, une constante ou un opérateur en sortent).
    fn unaire(&mut self, nom: &'static str, f: impl FnOnce(f64) -> ResultatCalc<f64>) {
        if self.est_en_erreur() {
            debug!(operation = nom, "ignorée (état erreur)");
            return;
        }

        let x = self.valeur_courante();
        if self.poser(f(x)).is_some() {
            debug!(operation = nom, entree = x, affichage = %self.affichage, "unaire");
        }
        self.reinit_affichage = true;
    }

    /* ------------------------ Réglages + effacement ------------------------ */

    pub fn basculer_mode_angle(&mut self) {
        self.mode_angle = self.mode_angle.bascule();
        debug!(mode = self.mode_angle.libelle(), "mode d’angle");
    }

    /// AC : remise à zéro totale.
    pub fn effacer_tout(&mut self) {
        self.valeur_stockee = 0.0;
        self.operateur_en_attente = None;
        self.reinit_affichage = false;
        self.dernier_calcul = None;
        self.affichage = "0".to_string();
    }

    /// CE : efface seulement l’entrée (opérateur en attente + valeur stockée conservés).
    pub fn effacer_entree(&mut self) {
        self.affichage = "0".to_string();
        self.reinit_affichage = false;
    }

    /* ------------------------ Affichage ------------------------ */

    /// Dépose un résultat à l’écran (setDisplayValue).
    /// NaN/∞ => Debordement. Renvoie la valeur affichée, ou None si erreur.
    fn poser(&mut self, r: ResultatCalc<f64>) -> Option<f64> {
        let r = r.and_then(|v| {
            if v.is_finite() {
                Ok(v)
            } else {
                Err(ErreurCalc::Debordement)
            }
        });

        match r {
            Ok(v) => {
                self.affichage = format_valeur(v);
                Some(v)
            }
            Err(e) => {
                self.signaler(e);
                None
            }
        }
    }

    fn signaler(&mut self, e: ErreurCalc) {
        warn!(erreur = %e, "calcul refusé");
        self.affichage = MARQUEUR_ERREUR.to_string();
        self.operateur_en_attente = None;
        self.dernier_calcul = None;
        self.reinit_affichage = true;
    }
}
