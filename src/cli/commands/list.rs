use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::query::{self, Query};
use crate::errors::{AppError, AppResult};
use crate::models::{ActivityRecord, Status};
use crate::store::DataSource;
use crate::utils::date::format_long;
use crate::utils::formatting::bold;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        theme,
        status,
        search,
        sort,
        details,
    } = cmd
    {
        let status_filter = match status {
            Some(code) => Some(Status::from_code(code).ok_or_else(|| {
                AppError::InvalidStatus(format!(
                    "Invalid status '{}'. Use 'completed', 'pending' or 'draft'.",
                    code
                ))
            })?),
            None => None,
        };

        let query = Query {
            theme: theme.clone(),
            status: status_filter,
            search: search.clone().unwrap_or_default(),
            sort: *sort,
        };

        let mut source = DataSource::from_config(cfg)?;
        let records = source.records()?;
        let view = query::apply(&records, &query);

        if view.is_empty() {
            println!("No activities found.");
            return Ok(());
        }

        println!("📚 Activities ({}):\n", view.len());

        if *details {
            for rec in &view {
                print_card(rec);
            }
        } else {
            print_table(&view);
        }
    }

    Ok(())
}

fn print_table(records: &[ActivityRecord]) {
    let mut table = Table::new(vec!["ID", "DATE", "THEME", "TITLE", "TYPE", "H", "STATUS"]);

    for rec in records {
        table.add_row(vec![
            rec.id.clone(),
            rec.date_str(),
            rec.theme.clone(),
            rec.title.clone(),
            rec.kind.clone(),
            rec.hours.to_string(),
            format!("{} {}", rec.status.icon(), rec.status.label()),
        ]);
    }

    print!("{}", table.render());
}

fn print_card(rec: &ActivityRecord) {
    const WRAP: usize = 78;

    println!(
        "{} {} — {}h — {}",
        rec.status.icon(),
        bold(&rec.title),
        rec.hours,
        format_long(&rec.date)
    );
    println!("   id: {}", rec.id);
    println!("   🏷️ {} | 📋 {}", rec.theme, rec.kind);

    if !rec.description.is_empty() {
        for line in textwrap::wrap(&rec.description, WRAP) {
            println!("   {}", line);
        }
    }

    let proof = rec.proof.description();
    if !proof.is_empty() {
        match rec.proof.file() {
            Some(file) => println!("   Proof: {} 📎 {}", proof, file),
            None => println!("   Proof: {}", proof),
        }
    }

    if !rec.skills.is_empty() {
        println!("   Skills: {}", rec.skills.join(", "));
    }

    if !rec.reflection.is_empty() {
        for (section, body) in rec.reflection.sections() {
            println!("   {}:", bold(section));
            for line in textwrap::wrap(body.trim(), WRAP) {
                println!("     {}", line);
            }
        }
    }

    println!();
}
