// src/api/error.rs
//! Error taxonomy for the backend client. Display strings are the
//! French messages shown to the operator; diagnostics go to tracing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// No usable token at call time. Nothing was sent.
    #[error("Vous n'êtes pas connecté. Veuillez vous reconnecter.")]
    MissingAuth,

    /// Manual refresh arrived inside the throttle window. Nothing was sent.
    #[error("Veuillez patienter {retry_in} seconde(s) avant de rafraîchir à nouveau.")]
    Throttled { retry_in: u64 },

    /// 429 responses kept coming past the retry budget.
    #[error("Le serveur est saturé (429). Veuillez réessayer dans quelques instants.")]
    RateLimited { attempts: u32 },

    /// Terminal non-2xx response. The message is the backend's own, or the
    /// HTTP status text when the body carries none.
    #[error("Erreur {status}: {message}")]
    Rejected { status: u16, message: String },

    /// Network failure before any status code existed.
    #[error("Connexion au serveur impossible. Vérifiez votre réseau.")]
    Transport(#[from] reqwest::Error),

    /// The body was not the JSON it was supposed to be.
    #[error("Réponse du serveur illisible.")]
    Parse(#[from] serde_json::Error),

    /// A 2xx login response without a usable token in it.
    #[error("Réponse de connexion invalide du serveur.")]
    MalformedLogin,

    /// Local session or throttle-state files misbehaving.
    #[error("Stockage local inaccessible: {0}")]
    Storage(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
