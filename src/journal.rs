// src/journal.rs
//
// Journalisation (natif seulement) : tracing + fmt, niveau via RUST_LOG.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Niveau si RUST_LOG est absent ou illisible.
pub const NIVEAU_DEFAUT: &str = "info";

/// À appeler une seule fois, avant la première frame.
pub fn init(niveau: &str) {
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(niveau));

    // try_init : un second appel (tests, relance) ne doit pas paniquer
    let _ = tracing_subscriber::registry()
        .with(filtre)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
