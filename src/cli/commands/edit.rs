use crate::cli::commands::add::split_skills;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::mutate;
use crate::errors::{AppError, AppResult};
use crate::models::activity::Proof;
use crate::models::{Reflection, Status};
use crate::store;
use crate::store::RecordStore;
use crate::ui::messages::success;
use crate::utils::date;

/// Edit an existing activity: fields left out on the command line keep
/// their stored value. The record keeps its id and its position.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        title,
        theme,
        kind,
        hours,
        date: date_arg,
        status,
        proof,
        proof_file,
        description,
        reflection,
        skills,
    } = cmd
    {
        let mut store = store::open_local(cfg)?;

        let records = store.load()?;
        let mut record = records
            .iter()
            .find(|r| r.id == *id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(id.clone()))?;

        if let Some(t) = title {
            record.title = t.clone();
        }
        if let Some(t) = theme {
            record.theme = t.clone();
        }
        if let Some(k) = kind {
            record.kind = k.clone();
        }
        if let Some(h) = hours {
            record.hours = *h;
        }
        if let Some(s) = date_arg {
            record.date = date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?;
        }
        if let Some(s) = status {
            record.status = Status::from_code(s).ok_or_else(|| {
                AppError::InvalidStatus(format!(
                    "Invalid status '{}'. Use 'completed', 'pending' or 'draft'.",
                    s
                ))
            })?;
        }
        if proof.is_some() || proof_file.is_some() {
            record.proof = Proof::Detailed {
                description: proof
                    .clone()
                    .unwrap_or_else(|| record.proof.description().to_string()),
                file: proof_file
                    .clone()
                    .or_else(|| record.proof.file().map(str::to_string)),
            };
        }
        if let Some(d) = description {
            record.description = d.clone();
        }
        if let Some(r) = reflection {
            record.reflection = Reflection::Text(r.clone());
        }
        if skills.is_some() {
            record.skills = split_skills(skills.as_deref());
        }

        let stored = mutate::update(&mut store, id, record)?;

        store.ttlog("edit", &stored.id, &format!("Edited '{}'", stored.title))?;

        success(format!("Activity updated: {} [{}]", stored.title, stored.id));
    }

    Ok(())
}
