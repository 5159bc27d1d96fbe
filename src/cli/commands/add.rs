use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::mutate;
use crate::errors::{AppError, AppResult};
use crate::models::activity::Proof;
use crate::models::activity_type;
use crate::models::theme;
use crate::models::{ActivityRecord, Reflection, Status};
use crate::store;
use crate::ui::messages::{info, success};
use crate::utils::date;

/// Add a new activity to the local store.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        theme: theme_arg,
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
        //
        // 1. Parse date (default: today)
        //
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        //
        // 2. Parse status (default from config)
        //
        let status_arg = status.as_deref().unwrap_or(&cfg.default_status);
        let status_final = Status::from_code(status_arg).ok_or_else(|| {
            AppError::InvalidStatus(format!(
                "Invalid status '{}'. Use 'completed', 'pending' or 'draft'.",
                status_arg
            ))
        })?;

        //
        // 3. Informational hints, never rejections
        //
        if !theme::is_canonical(theme_arg) {
            info(format!(
                "'{}' is not one of the canonical portfolio themes",
                theme_arg
            ));
        }
        if activity_type::lookup(kind).is_none() {
            info(format!("'{}' is not a catalogued activity type", kind));
        }

        //
        // 4. Build the record
        //
        let record = ActivityRecord {
            id: String::new(), // assigned by the mutation API
            theme: theme_arg.clone(),
            title: title.clone(),
            kind: kind.clone(),
            hours: *hours,
            date: d,
            status: status_final,
            proof: match (proof, proof_file) {
                (None, None) => Proof::default(),
                (desc, file) => Proof::Detailed {
                    description: desc.clone().unwrap_or_default(),
                    file: file.clone(),
                },
            },
            description: description.clone().unwrap_or_default(),
            reflection: reflection
                .clone()
                .map(Reflection::Text)
                .unwrap_or_default(),
            skills: split_skills(skills.as_deref()),
        };

        //
        // 5. Persist
        //
        let mut store = store::open_local(cfg)?;
        let stored = mutate::create(&mut store, record)?;

        store.ttlog("add", &stored.id, &format!("Added '{}'", stored.title))?;

        success(format!(
            "Activity added: {} ({}h, {}) [{}]",
            stored.title, stored.hours, stored.theme, stored.id
        ));
    }

    Ok(())
}

pub(crate) fn split_skills(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
