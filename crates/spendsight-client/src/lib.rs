pub mod commands;
pub mod config;
pub mod contracts;
pub mod error;
pub mod greeting;
pub mod ledger;
pub mod preferences;
pub mod quotes;
pub mod sink;
pub mod transactions;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{ClientError, ClientResult};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
