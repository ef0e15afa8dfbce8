use expensetrack_client::commands;
use expensetrack_client::commands::entry::EntryAction;
use expensetrack_client::{ClientResult, SuccessEnvelope};

use crate::cli::{Cli, Commands, EntryCommand};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Months { query, source } => {
            commands::months::run(source.records.as_deref(), query.as_deref())
        }
        Commands::Chart { today, source } => commands::chart::run(
            source.records.as_deref(),
            today.as_ref().map(|value| value.as_str()),
        ),
        Commands::Search { query, source } => {
            commands::search::run(source.records.as_deref(), query)
        }
        Commands::Overview { today, source } => commands::overview::run(
            source.records.as_deref(),
            today.as_ref().map(|value| value.as_str()),
        ),
        Commands::Export { output, source } => {
            commands::export::run(source.records.as_deref(), output.as_deref())
        }
        Commands::Entry { command } => match command {
            EntryCommand::Create { fields } => commands::entry::run(
                fields.source.records.as_deref(),
                EntryAction::Create(fields.to_draft(None)),
            ),
            EntryCommand::Edit { id, fields } => commands::entry::run(
                fields.source.records.as_deref(),
                EntryAction::Edit(fields.to_draft(Some(id.clone()))),
            ),
            EntryCommand::Delete { id, source } => commands::entry::run(
                source.records.as_deref(),
                EntryAction::Delete { id: id.clone() },
            ),
        },
    }
}
