// src/noyau/format.rs
//
// Affichage des nombres (convention unique : point décimal, signe '-', pas de séparateur de milliers).

use super::erreur::MARQUEUR_ERREUR;

/// Nombre de décimales avant nettoyage.
pub const DECIMALES: usize = 12;

/// Formate une valeur finie pour l’écran :
/// - virgule fixe à 12 décimales
/// - zéros finaux retirés, puis point final retiré
/// - "-0" ou "" -> "0"
///
/// L’appelant garantit que `v` est fini (sinon : erreur, voir Calculatrice).
pub fn format_valeur(v: f64) -> String {
    let mut s = format!("{:.*}", DECIMALES, v);

    if s.contains('.') {
        let coupe = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(coupe);
    }

    if s.is_empty() || s == "-0" {
        return "0".to_string();
    }
    s
}

/// Lit l’affichage comme un f64.
/// Marqueur d’erreur, texte vide ou illisible => 0.
pub fn lire_affichage(texte: &str) -> f64 {
    let t = texte.trim();
    if t.is_empty() || t.eq_ignore_ascii_case(MARQUEUR_ERREUR) {
        return 0.0;
    }
    t.parse::<f64>().unwrap_or(0.0)
}
