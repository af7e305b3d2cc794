// src/export.rs
//! CSV export of the candidate list. One header row plus one row per
//! candidate, written to a timestamped file.

use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};

use crate::render;
use crate::types::Candidate;

pub fn candidates_csv(candidates: &[Candidate], dir: &Path) -> Result<PathBuf> {
    let filename = format!("candidats_{}.csv", Local::now().format("%Y%m%d_%H%M%S"));
    let path = dir.join(filename);
    write_candidates(candidates, &path)?;
    Ok(path)
}

fn write_candidates(candidates: &[Candidate], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record([
        "ID",
        "Prénom",
        "Nom",
        "Email",
        "Téléphone",
        "Ville",
        "Secteur",
        "Statut",
        "Inscrit le",
    ])?;

    for candidate in candidates {
        let status = if candidate.is_active() {
            "Actif"
        } else {
            "Inactif"
        };
        writer.write_record([
            candidate.id.to_string().as_str(),
            render::opt(&candidate.first_name),
            render::opt(&candidate.last_name),
            render::opt(&candidate.email),
            render::opt(&candidate.phone),
            render::opt(&candidate.city),
            render::ref_name(&candidate.sector),
            status,
            render::date(&candidate.created_at).as_str(),
        ])?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn sample() -> Vec<Candidate> {
        serde_json::from_value(json!([
            {
                "id": 1,
                "first_name": "Yasmine",
                "last_name": "El Idrissi",
                "email": "yasmine@exemple.ma",
                "city": "Rabat",
                "email_verified_at": "2024-03-02 09:15:00"
            },
            {"id": 2, "email": "b@exemple.ma", "email_verified_at": null}
        ]))
        .unwrap()
    }

    #[test]
    fn test_export_writes_header_and_rows() {
        let dir = tempdir().unwrap();
        let path = candidates_csv(&sample(), dir.path()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID,Prénom,Nom"));
        assert!(lines[1].contains("yasmine@exemple.ma"));
        assert!(lines[1].contains("Actif"));
        assert!(lines[2].contains("Inactif"));
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("candidats_"));
    }

    #[test]
    fn test_export_of_empty_list_is_just_the_header() {
        let dir = tempdir().unwrap();
        let path = candidates_csv(&[], dir.path()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }
}
