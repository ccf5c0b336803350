//! Core module containing the inflection engine and its tables

pub mod error;
pub mod pluralize;
pub mod rule;
pub mod tables;

pub use error::ConfigError;
pub use pluralize::{EnglishPluralizer, Inflect, Pluralizer};
pub use rule::{RuleTable, SuffixRule};
