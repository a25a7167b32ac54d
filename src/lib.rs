pub mod config;
pub mod core;
pub mod error;
pub mod language;
pub mod loader;

pub use error::TranscripaError;
pub use language::{LanguageRegistry, LanguageRuleSet, LanguageRules};
pub use loader::RuleLoader;
