pub mod aggregate;
pub mod commands;
pub mod contracts;
pub mod entry;
pub mod error;
pub mod export;
pub mod records;
pub mod state;

pub use aggregate::{Clock, FixedClock, SystemClock, TransactionAggregator};
pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{ClientError, ClientResult};
pub use records::{TransactionRecord, TransactionType};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
