//! Tests de la machine à états (pavé) : enchaînement, "=", unaires, erreurs, AC/CE.
//!
//! Les séquences sont tapées comme sur le pavé :
//! chiffres et '.', opérateurs + - * / ^, '=' et '%'. Les espaces sont ignorés.

use super::calculatrice::{Calculatrice, Constante, EtatMachine, LONGUEUR_MAX_SAISIE};
use super::erreur::MARQUEUR_ERREUR;
use super::format::lire_affichage;
use super::operateurs::Operateur;
use super::trig::{ModeAngle, TrigFn};

fn taper(c: &mut Calculatrice, touches: &str) {
    for t in touches.chars() {
        match t {
            ' ' => {}
            '0'..='9' | '.' => c.saisir_chiffre(t),
            '=' => c.egal(),
            '%' => c.pourcentage(),
            _ => {
                let op = Operateur::depuis_symbole(t)
                    .unwrap_or_else(|| panic!("touche inconnue: {t:?}"));
                c.appliquer_operateur(op);
            }
        }
    }
}

fn calc(touches: &str) -> Calculatrice {
    let mut c = Calculatrice::default();
    taper(&mut c, touches);
    c
}

fn assert_erreur(c: &Calculatrice) {
    assert_eq!(c.affichage(), MARQUEUR_ERREUR);
    assert_eq!(c.etat_machine(), EtatMachine::Erreur);
    assert!(c.operateur_en_attente().is_none());
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn saisie_zero_initial_remplace() {
    assert_eq!(calc("007").affichage(), "7");
    assert_eq!(calc("0.07").affichage(), "0.07");
}

#[test]
fn saisie_second_point_ignore() {
    assert_eq!(calc("1.2.3").affichage(), "1.23");
}

#[test]
fn saisie_point_en_tete() {
    assert_eq!(calc(".5").affichage(), "0.5");

    // après un opérateur : nouveau nombre, toujours lisible
    let c = calc("3 + .");
    assert_eq!(c.affichage(), "0.");
}

#[test]
fn saisie_caractere_invalide_ignore() {
    let mut c = calc("12");
    c.saisir_chiffre('x');
    assert_eq!(c.affichage(), "12");
}

#[test]
fn saisie_longue_plafonnee_et_finie() {
    let mut c = calc(&"9".repeat(400));
    assert_eq!(c.affichage().len(), LONGUEUR_MAX_SAISIE);
    assert!(lire_affichage(c.affichage()).is_finite());

    taper(&mut c, "+");
    assert!(c.valeur_stockee().is_finite());
    assert_eq!(c.etat_machine(), EtatMachine::OperateurEnAttente);

    // le plafond compte aussi le point
    let c = calc(&format!("1.{}", "5".repeat(100)));
    assert_eq!(c.affichage().len(), LONGUEUR_MAX_SAISIE);
    assert!(c.affichage().starts_with("1.5"));
}

/* ------------------------ Chaîne + "=" ------------------------ */

#[test]
fn chaine_sans_priorite() {
    let mut c = calc("3 + 2 +");
    assert_eq!(c.affichage(), "5");
    taper(&mut c, "1 +");
    assert_eq!(c.affichage(), "6");

    // 2 + 3 * 4 = 20 (pas de priorité)
    assert_eq!(calc("2 + 3 * 4 =").affichage(), "20");
}

#[test]
fn egal_repete_le_dernier_operateur() {
    let mut c = calc("2 + 3 =");
    assert_eq!(c.affichage(), "5");
    c.egal();
    assert_eq!(c.affichage(), "8");
    c.egal();
    assert_eq!(c.affichage(), "11");
    assert!(c.operateur_en_attente().is_none());
}

#[test]
fn egal_repete_sur_nouvelle_saisie() {
    let mut c = calc("2 + 3 =");
    taper(&mut c, "7 =");
    assert_eq!(c.affichage(), "10");
}

#[test]
fn egal_sans_operateur_ne_fait_rien() {
    let mut c = calc("42");
    c.egal();
    assert_eq!(c.affichage(), "42");
    assert_eq!(c.etat_machine(), EtatMachine::SaisieOperande);
}

#[test]
fn operateur_rechaine_sans_operande() {
    // "5 + *" : le second opérateur remplace le premier, pas de calcul
    let c = calc("5 + * 3 =");
    assert_eq!(c.affichage(), "15");
}

#[test]
fn puissance_et_soustraction() {
    assert_eq!(calc("2 ^ 10 =").affichage(), "1024");
    assert_eq!(calc("3 - 5 =").affichage(), "-2");
    assert_eq!(calc("1 / 3 =").affichage(), "0.333333333333");
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn division_par_zero_puis_chiffre() {
    let mut c = calc("5 / 0 =");
    assert_erreur(&c);

    c.saisir_chiffre('7');
    assert_eq!(c.affichage(), "7");
    assert_eq!(c.etat_machine(), EtatMachine::SaisieOperande);
}

#[test]
fn division_par_zero_dans_la_chaine() {
    let c = calc("5 / 0 +");
    assert_erreur(&c);
}

#[test]
fn debordement_puissance() {
    assert_erreur(&calc("10 ^ 400 ="));
}

#[test]
fn racine_negative() {
    let mut c = calc("9 + 4");
    c.changer_signe();
    assert_eq!(c.affichage(), "-4");
    c.racine_carree();
    assert_erreur(&c);
    // valeur stockée intacte (seul le reset documenté a lieu)
    assert_eq!(c.valeur_stockee(), 9.0);
}

#[test]
fn log_et_inverse_de_zero() {
    let mut c = calc("0");
    c.log10();
    assert_erreur(&c);

    let mut c = calc("0");
    c.ln();
    assert_erreur(&c);

    let mut c = calc("0");
    c.inverse();
    assert_erreur(&c);
}

#[test]
fn unaires_ignores_en_erreur() {
    let mut c = calc("1 / 0 =");
    c.carre();
    c.trigo(TrigFn::Cos);
    assert_erreur(&c);
}

#[test]
fn egal_apres_erreur_ne_rejoue_rien() {
    let mut c = calc("2 + 3 = 1 / 0 =");
    assert_erreur(&c);
    c.egal();
    assert_erreur(&c);
}

#[test]
fn ac_sort_de_l_erreur() {
    let mut c = calc("5 / 0 =");
    c.effacer_tout();
    assert_eq!(c.affichage(), "0");
    assert_eq!(c.etat_machine(), EtatMachine::Repos);
    assert_eq!(c.valeur_stockee(), 0.0);
}

#[test]
fn operateur_sort_de_l_erreur() {
    let mut c = calc("5 / 0 =");
    assert_erreur(&c);

    taper(&mut c, "+");
    assert_eq!(c.affichage(), "0");
    assert_eq!(c.operateur_en_attente(), Some(Operateur::Plus));
    assert_eq!(c.etat_machine(), EtatMachine::OperateurEnAttente);

    taper(&mut c, "=");
    assert_eq!(c.affichage(), "0");

    let c = calc("5 / 0 = * 4 =");
    assert_eq!(c.affichage(), "0");
}

#[test]
fn ce_sort_de_l_erreur() {
    let mut c = calc("5 / 0 =");
    c.effacer_entree();
    assert_eq!(c.affichage(), "0");
    assert_eq!(c.etat_machine(), EtatMachine::Repos);

    taper(&mut c, "7 + 1 =");
    assert_eq!(c.affichage(), "8");
}

#[test]
fn constante_sort_de_l_erreur() {
    let mut c = calc("5 / 0 =");
    c.inserer_constante(Constante::Pi);
    assert_eq!(c.affichage(), "3.14159265359");
    assert_eq!(c.etat_machine(), EtatMachine::SaisieOperande);

    let mut c = calc("5 / 0 =");
    c.inserer_constante(Constante::E);
    assert!(!c.est_en_erreur());
    taper(&mut c, "* 2 =");
    assert_eq!(c.affichage(), "5.436563656918");
}

#[test]
fn erreur_de_domaine_en_milieu_de_chaine() {
    let mut c = calc("9 + 0");
    c.inverse();
    assert_erreur(&c);
    assert_eq!(c.valeur_stockee(), 9.0);

    let mut c = calc("9 + 0");
    c.log10();
    assert_erreur(&c);
    assert_eq!(c.valeur_stockee(), 9.0);

    // "=" ne rejoue pas l’opération abandonnée
    taper(&mut c, "=");
    assert_erreur(&c);
}

/* ------------------------ Unaires ------------------------ */

#[test]
fn pourcentage_relatif_a_l_operande_gauche() {
    let mut c = calc("200 + 10 %");
    assert_eq!(c.affichage(), "20");
    assert_eq!(c.operateur_en_attente(), Some(Operateur::Plus));
    c.egal();
    assert_eq!(c.affichage(), "220");
}

#[test]
fn pourcentage_seul() {
    assert_eq!(calc("50 %").affichage(), "0.5");
}

#[test]
fn trig_degres_et_radians() {
    let mut c = calc("30");
    assert_eq!(c.mode_angle(), ModeAngle::Degres);
    c.trigo(TrigFn::Sin);
    assert_eq!(c.affichage(), "0.5");

    let mut c = calc("45");
    c.trigo(TrigFn::Tan);
    assert_eq!(c.affichage(), "1");

    let mut c = calc("180");
    c.trigo(TrigFn::Sin);
    assert_eq!(c.affichage(), "0");

    let mut c = calc("0");
    c.basculer_mode_angle();
    assert_eq!(c.mode_angle().libelle(), "RAD");
    c.trigo(TrigFn::Cos);
    assert_eq!(c.affichage(), "1");
}

#[test]
fn unaire_puis_chiffre_demarre_un_nouveau_nombre() {
    let mut c = calc("3");
    c.carre();
    assert_eq!(c.affichage(), "9");
    taper(&mut c, "4");
    assert_eq!(c.affichage(), "4");
}

#[test]
fn exp_ln_racine() {
    let mut c = calc("1");
    c.exponentielle();
    assert_eq!(c.affichage(), "2.718281828459");

    let mut c = calc("1");
    c.ln();
    assert_eq!(c.affichage(), "0");

    let mut c = calc("1000");
    c.log10();
    assert_eq!(c.affichage(), "3");

    let mut c = calc("16");
    c.racine_carree();
    assert_eq!(c.affichage(), "4");

    let mut c = calc("4");
    c.inverse();
    assert_eq!(c.affichage(), "0.25");
}

#[test]
fn changer_signe_garde_l_operateur() {
    let mut c = calc("7 * 5");
    c.changer_signe();
    assert_eq!(c.operateur_en_attente(), Some(Operateur::Fois));
    c.egal();
    assert_eq!(c.affichage(), "-35");
}

#[test]
fn constantes() {
    let mut c = Calculatrice::default();
    c.inserer_constante(Constante::Pi);
    assert_eq!(c.affichage(), "3.14159265359");

    taper(&mut c, "2");
    assert_eq!(c.affichage(), "2");

    let mut c = calc("2 *");
    c.inserer_constante(Constante::E);
    c.egal();
    assert_eq!(c.affichage(), "5.436563656918");
}

/* ------------------------ CE / états ------------------------ */

#[test]
fn ce_garde_l_operation_en_cours() {
    let mut c = calc("8 * 5");
    c.effacer_entree();
    assert_eq!(c.affichage(), "0");
    assert_eq!(c.operateur_en_attente(), Some(Operateur::Fois));
    taper(&mut c, "3 =");
    assert_eq!(c.affichage(), "24");
}

#[test]
fn transitions_d_etat() {
    let mut c = Calculatrice::default();
    assert_eq!(c.etat_machine(), EtatMachine::Repos);

    taper(&mut c, "5");
    assert_eq!(c.etat_machine(), EtatMachine::SaisieOperande);

    taper(&mut c, "+");
    assert_eq!(c.etat_machine(), EtatMachine::OperateurEnAttente);

    taper(&mut c, "3");
    assert_eq!(c.etat_machine(), EtatMachine::SaisieOperande);

    taper(&mut c, "=");
    assert_eq!(c.etat_machine(), EtatMachine::OperateurEnAttente);

    c.effacer_tout();
    assert_eq!(c.etat_machine(), EtatMachine::Repos);
}

#[test]
fn unaire_ou_constante_donne_un_operande() {
    let mut c = calc("3");
    c.carre();
    assert_eq!(c.affichage(), "9");
    assert_eq!(c.etat_machine(), EtatMachine::SaisieOperande);

    let mut c = Calculatrice::default();
    c.inserer_constante(Constante::Pi);
    assert_eq!(c.etat_machine(), EtatMachine::SaisieOperande);

    // 0² reste à zéro : rien n’a été saisi
    let mut c = Calculatrice::default();
    c.carre();
    assert_eq!(c.etat_machine(), EtatMachine::Repos);
}
