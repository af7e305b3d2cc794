// src/cli.rs
//! Command-line surface of the console: one subcommand per admin screen,
//! plus login/logout. Dispatch lives here so main stays thin.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::api::ApiClient;
use crate::commands;
use crate::types::VerificationStatus;

#[derive(Parser)]
#[command(name = "facejob-admin")]
#[command(about = "Console d'administration de la plateforme FaceJob", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Dossier d'état de la console (par défaut FACEJOB_ADMIN_HOME ou ~/.facejob-admin)
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Se connecter en tant que super-administrateur
    Login { email: String },
    /// Se déconnecter et effacer la session locale
    Logout,
    /// Vue d'ensemble chiffrée de la plateforme
    Dashboard,
    /// Gérer les candidats
    Candidates {
        #[command(subcommand)]
        action: CandidateAction,
    },
    /// Gérer les entreprises
    Enterprises {
        #[command(subcommand)]
        action: EnterpriseAction,
    },
    /// Gérer les offres d'emploi
    Jobs {
        #[command(subcommand)]
        action: JobAction,
    },
    /// Modérer les CV vidéo
    Videos {
        #[command(subcommand)]
        action: VideoAction,
    },
    /// Gérer les plans d'abonnement
    Plans {
        #[command(subcommand)]
        action: PlanAction,
    },
    /// Consulter les ventes et paiements
    Sales {
        /// Filtrer par statut de paiement (paid, pending, ...)
        #[arg(long)]
        status: Option<String>,
    },
    /// Traiter les demandes d'inscription d'entreprises
    Requests {
        #[command(subcommand)]
        action: RequestAction,
    },
}

#[derive(Subcommand)]
pub enum CandidateAction {
    /// Lister les candidats
    List {
        /// Filtrer par identifiant de secteur
        #[arg(long)]
        sector: Option<i64>,
    },
    /// Afficher la fiche d'un candidat
    Show { id: i64 },
    /// Supprimer un candidat
    Delete { id: i64 },
    /// Exporter la liste des candidats en CSV
    Export {
        /// Dossier de destination
        #[arg(long, default_value = ".")]
        output: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum EnterpriseAction {
    /// Lister les entreprises
    List {
        /// Filtrer par statut de vérification
        #[arg(long)]
        status: Option<StatusFilter>,
    },
    /// Afficher la fiche d'une entreprise
    Show { id: i64 },
    /// Accepter une entreprise
    Accept { id: i64 },
    /// Refuser une entreprise
    Decline { id: i64 },
}

#[derive(Subcommand)]
pub enum JobAction {
    /// Lister les offres
    List,
    /// Afficher une offre
    Show { id: i64 },
    /// Accepter une offre
    Accept { id: i64 },
    /// Refuser une offre
    Decline { id: i64 },
    /// Supprimer une offre
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum VideoAction {
    /// Lister les CV vidéo
    List,
    /// Accepter une vidéo
    Accept { id: i64 },
    /// Refuser une vidéo
    Decline { id: i64 },
}

#[derive(Subcommand)]
pub enum PlanAction {
    /// Lister les plans
    List,
    /// Créer un plan
    Create {
        name: String,
        /// Prix en dirhams
        #[arg(long)]
        price: f64,
        /// Durée en jours
        #[arg(long)]
        duration: i64,
        #[arg(long)]
        description: Option<String>,
    },
    /// Modifier un plan
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        duration: Option<i64>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Supprimer un plan
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum RequestAction {
    /// Lister les demandes (en attente par défaut)
    List {
        /// Inclure les demandes déjà traitées
        #[arg(long)]
        all: bool,
    },
    /// Accepter une demande
    Accept { id: i64 },
    /// Refuser une demande
    Decline { id: i64 },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusFilter {
    Pending,
    Accepted,
    Declined,
}

impl From<StatusFilter> for VerificationStatus {
    fn from(filter: StatusFilter) -> Self {
        match filter {
            StatusFilter::Pending => VerificationStatus::Pending,
            StatusFilter::Accepted => VerificationStatus::Accepted,
            StatusFilter::Declined => VerificationStatus::Declined,
        }
    }
}

pub async fn dispatch(command: Command, client: &ApiClient) -> Result<()> {
    match command {
        Command::Login { email } => commands::auth::login(client, &email).await,
        Command::Logout => commands::auth::logout(client).await,
        Command::Dashboard => commands::dashboard::run(client).await,

        Command::Candidates { action } => match action {
            CandidateAction::List { sector } => commands::candidates::list(client, sector).await,
            CandidateAction::Show { id } => commands::candidates::show(client, id).await,
            CandidateAction::Delete { id } => commands::candidates::remove(client, id).await,
            CandidateAction::Export { output } => {
                commands::candidates::export_csv(client, &output).await
            }
        },

        Command::Enterprises { action } => match action {
            EnterpriseAction::List { status } => {
                commands::enterprises::list(client, status.map(Into::into)).await
            }
            EnterpriseAction::Show { id } => commands::enterprises::show(client, id).await,
            EnterpriseAction::Accept { id } => {
                commands::enterprises::set_status(client, id, VerificationStatus::Accepted).await
            }
            EnterpriseAction::Decline { id } => {
                commands::enterprises::set_status(client, id, VerificationStatus::Declined).await
            }
        },

        Command::Jobs { action } => match action {
            JobAction::List => commands::jobs::list(client).await,
            JobAction::Show { id } => commands::jobs::show(client, id).await,
            JobAction::Accept { id } => {
                commands::jobs::set_status(client, id, VerificationStatus::Accepted).await
            }
            JobAction::Decline { id } => {
                commands::jobs::set_status(client, id, VerificationStatus::Declined).await
            }
            JobAction::Delete { id } => commands::jobs::remove(client, id).await,
        },

        Command::Videos { action } => match action {
            VideoAction::List => commands::videos::list(client).await,
            VideoAction::Accept { id } => {
                commands::videos::set_status(client, id, VerificationStatus::Accepted).await
            }
            VideoAction::Decline { id } => {
                commands::videos::set_status(client, id, VerificationStatus::Declined).await
            }
        },

        Command::Plans { action } => match action {
            PlanAction::List => commands::plans::list(client).await,
            PlanAction::Create {
                name,
                price,
                duration,
                description,
            } => {
                commands::plans::create(client, &name, price, duration, description.as_deref())
                    .await
            }
            PlanAction::Update {
                id,
                name,
                price,
                duration,
                description,
            } => {
                commands::plans::update(
                    client,
                    id,
                    name.as_deref(),
                    price,
                    duration,
                    description.as_deref(),
                )
                .await
            }
            PlanAction::Delete { id } => commands::plans::remove(client, id).await,
        },

        Command::Sales { status } => commands::sales::list(client, status.as_deref()).await,

        Command::Requests { action } => match action {
            RequestAction::List { all } => commands::requests::list(client, all).await,
            RequestAction::Accept { id } => {
                commands::requests::set_status(client, id, VerificationStatus::Accepted).await
            }
            RequestAction::Decline { id } => {
                commands::requests::set_status(client, id, VerificationStatus::Declined).await
            }
        },
    }
}
