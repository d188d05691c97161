pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::Route53Client;
pub use config::AuthenticatorConfig;
pub use core::authenticator::Route53Authenticator;
pub use domain::model::{ChangeAction, Challenge};
pub use utils::error::{AuthenticatorError, Result};
