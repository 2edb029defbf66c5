//! Configuration: TOML file under the user's config dir, every key optional.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AnimationConfig, Config, LinksConfig, LoggingConfig, PageConfig, PartnershipMail};
