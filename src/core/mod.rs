pub mod authenticator;
pub mod propagation;
pub mod record_mutator;
pub mod zone_resolver;

pub use crate::domain::model::{ChangeAction, Challenge};
pub use crate::domain::ports::{ConfigProvider, Route53Api};
pub use crate::utils::error::Result;
