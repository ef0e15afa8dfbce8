use crate::cli::{Commands, EntryCommand};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

impl OutputMode {
    fn from_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    match command {
        Commands::Months { source, .. }
        | Commands::Chart { source, .. }
        | Commands::Search { source, .. }
        | Commands::Overview { source, .. }
        | Commands::Export { source, .. } => OutputMode::from_flag(source.json),
        Commands::Entry { command } => match command {
            EntryCommand::Create { fields } | EntryCommand::Edit { fields, .. } => {
                OutputMode::from_flag(fields.source.json)
            }
            EntryCommand::Delete { source, .. } => OutputMode::from_flag(source.json),
        },
    }
}
