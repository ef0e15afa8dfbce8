use clap::{Args, Parser, Subcommand, ValueEnum};
use expensetrack_client::TransactionType;
use expensetrack_client::aggregate::date::{format_created_at, parse_created_at};
use expensetrack_client::entry::TransactionDraft;

/// A `MM/DD/YYYY` argument that already names a real calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsDate(pub String);

impl UsDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Accepts the same forms the records loader does and normalizes to
/// zero-padded `MM/DD/YYYY`.
pub fn parse_us_date(value: &str) -> Result<UsDate, String> {
    parse_created_at(value)
        .map(|date| UsDate(format_created_at(&date)))
        .ok_or_else(|| "date must be a real calendar day in MM/DD/YYYY format".to_string())
}

const RECORDS_AFTER_HELP: &str = "\
Records file:
  A JSON array of transaction objects, or CSV with a header row.
  Required fields: id, date (MM/DD/YYYY), amount, type (debit|credit).
  Optional fields: institution, account, merchant, category_id, category,
    is_pending, is_transfer, is_expense, is_edited.
  `amount` is a magnitude; `type` says whether money went out or came in.

  Without --records the path comes from EXPENSETRACK_RECORDS, then
  $EXPENSETRACK_HOME/transactions.json, then ~/.expensetrack/transactions.json.
  Use `-` to read the records from stdin.
";

#[derive(Debug, Parser)]
#[command(
    name = "expensetrack",
    version,
    about = "personal expense ledger views",
    disable_help_subcommand = true,
    after_long_help = RECORDS_AFTER_HELP
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Records file path (JSON array or CSV, `-` for stdin)
    #[arg(long)]
    pub records: Option<String>,
    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List transactions grouped by month, newest month first
    Months {
        /// Only keep transactions matching this search text
        #[arg(long)]
        query: Option<String>,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Show the running month-to-date spending total per day
    Chart {
        /// Day to treat as today (MM/DD/YYYY); defaults to the local date
        #[arg(long, value_parser = parse_us_date)]
        today: Option<UsDate>,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Search merchants, categories, accounts, dates, and amounts
    Search {
        /// Case-insensitive text to look for
        query: String,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Month-to-date spending plus the most recent transactions
    Overview {
        /// Day to treat as today (MM/DD/YYYY); defaults to the local date
        #[arg(long, value_parser = parse_us_date)]
        today: Option<UsDate>,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Export every transaction as CSV
    Export {
        /// Write the CSV to this file instead of stdout
        #[arg(long)]
        output: Option<String>,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Save new, edited, or deleted transactions to the records file
    #[command(arg_required_else_help = true)]
    Entry {
        #[command(subcommand)]
        command: EntryCommand,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntryType {
    Debit,
    Credit,
}

impl From<EntryType> for TransactionType {
    fn from(value: EntryType) -> Self {
        match value {
            EntryType::Debit => TransactionType::Debit,
            EntryType::Credit => TransactionType::Credit,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct EntryArgs {
    /// Transaction date (MM/DD/YYYY)
    #[arg(long)]
    pub date: String,
    /// Amount as a non-negative decimal
    #[arg(long)]
    pub amount: String,
    /// Whether money went out (debit) or came in (credit)
    #[arg(long = "type", value_enum)]
    pub transaction_type: EntryType,
    /// Numeric category id; 9 marks a transfer, 7 and 701 are income
    #[arg(long)]
    pub category_id: Option<i64>,
    #[arg(long, default_value = "")]
    pub category: String,
    #[arg(long, default_value = "")]
    pub institution: String,
    #[arg(long, default_value = "")]
    pub account: String,
    #[arg(long, default_value = "")]
    pub merchant: String,
    #[command(flatten)]
    pub source: SourceArgs,
}

impl EntryArgs {
    pub fn to_draft(&self, id: Option<String>) -> TransactionDraft {
        TransactionDraft {
            id,
            created_at: self.date.clone(),
            institution: self.institution.clone(),
            account: self.account.clone(),
            merchant: self.merchant.clone(),
            amount: self.amount.clone(),
            transaction_type: self.transaction_type.into(),
            category_id: self.category_id,
            category: self.category.clone(),
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum EntryCommand {
    /// Add a new transaction to the records file and assign it an id
    Create {
        #[command(flatten)]
        fields: EntryArgs,
    },
    /// Replace the stored transaction that has this id
    Edit {
        /// Id of the transaction being edited
        id: String,
        #[command(flatten)]
        fields: EntryArgs,
    },
    /// Remove the stored transaction that has this id
    Delete {
        /// Id of the transaction to remove
        id: String,
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::{Commands, EntryCommand, parse_from, parse_us_date};

    #[test]
    fn parse_command_paths() {
        let cases: [Vec<&str>; 13] = [
            vec!["expensetrack", "months"],
            vec!["expensetrack", "months", "--query", "grocer", "--json"],
            vec!["expensetrack", "months", "--records", "./rows.csv"],
            vec!["expensetrack", "chart", "--today", "09/04/2024"],
            vec!["expensetrack", "chart", "--json"],
            vec!["expensetrack", "search", "4.50"],
            vec!["expensetrack", "search", "", "--records", "-"],
            vec!["expensetrack", "overview", "--today", "02/29/2024"],
            vec!["expensetrack", "export", "--output", "out.csv"],
            vec!["expensetrack", "export", "--json"],
            vec![
                "expensetrack",
                "entry",
                "create",
                "--date",
                "09/03/2024",
                "--amount",
                "12.50",
                "--type",
                "debit",
                "--category-id",
                "801",
            ],
            vec![
                "expensetrack",
                "entry",
                "edit",
                "01j8zj",
                "--date",
                "09/03/2024",
                "--amount",
                "12.50",
                "--type",
                "credit",
                "--json",
            ],
            vec!["expensetrack", "entry", "delete", "01j8zj", "--records", "rows.csv"],
        ];

        for case in cases {
            let parsed = parse_from(case.clone());
            assert!(parsed.is_ok(), "failed to parse: {case:?}");
        }
    }

    #[test]
    fn today_rejects_iso_and_impossible_dates() {
        assert!(parse_us_date("2024-09-04").is_err());
        assert!(parse_us_date("02/30/2024").is_err());
        assert!(parse_us_date("13/01/2024").is_err());
        assert!(parse_us_date("09/04/2024").is_ok());

        let parsed = parse_from(["expensetrack", "chart", "--today", "2024-09-04"]);
        assert!(parsed.is_err());
        if let Err(error) = parsed {
            assert_eq!(error.kind(), ErrorKind::ValueValidation);
        }
    }

    #[test]
    fn today_accepts_unpadded_dates_like_the_records_loader() {
        let parsed = parse_us_date("9/4/2024");
        assert!(parsed.is_ok());
        if let Ok(date) = parsed {
            assert_eq!(date.as_str(), "09/04/2024");
        }

        let parsed = parse_from(["expensetrack", "chart", "--today", "9/4/2024"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(
                cli.command,
                Commands::Chart { today: Some(ref day), .. } if day.as_str() == "09/04/2024"
            ));
        }
    }

    #[test]
    fn search_requires_a_query_argument() {
        let parsed = parse_from(["expensetrack", "search"]);
        assert!(parsed.is_err());
        if let Err(error) = parsed {
            assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
        }
    }

    #[test]
    fn entry_edit_carries_id_into_draft() {
        let parsed = parse_from([
            "expensetrack",
            "entry",
            "edit",
            "01j8zj",
            "--date",
            "09/03/2024",
            "--amount",
            "3",
            "--type",
            "debit",
            "--merchant",
            "Cafe",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(
                cli.command,
                Commands::Entry {
                    command: EntryCommand::Edit { .. }
                }
            ));
            if let Commands::Entry {
                command: EntryCommand::Edit { id, fields },
            } = cli.command
            {
                let draft = fields.to_draft(Some(id));
                assert_eq!(draft.id.as_deref(), Some("01j8zj"));
                assert_eq!(draft.merchant, "Cafe");
                assert_eq!(draft.category_id, None);
            }
        }
    }

    #[test]
    fn help_subcommand_is_disabled() {
        let parsed = parse_from(["expensetrack", "help"]);
        assert!(parsed.is_err());
    }
}
