//! # Pluralizer
//!
//! Rule-based conversion of English nouns between singular and plural form,
//! used to derive collection and table names from entity names.
//!
//! ## Features
//!
//! - **Ordered Suffix Rules**: narrow suffixes win over general ones (crisis → crises)
//! - **Irregular Forms**: matched as suffixes, so compounds work too (webman → webmen)
//! - **Uncountable Words**: sheep, news, people... stay as they are
//! - **Detection**: `is_plural` / `is_singular` heuristics
//! - **Case Aware**: a capitalized input gives a capitalized output (Man → Men)
//! - **Naming Overrides**: entity lists with optional plural overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use pluralizer::prelude::*;
//!
//! assert_eq!(Pluralizer::pluralize("Country"), "Countries");
//! assert_eq!(Pluralizer::singularize("vertices"), "vertex");
//! assert!(Pluralizer::is_plural("people"));
//!
//! let engine = EnglishPluralizer::shared();
//! assert_eq!(engine.plural_form("child"), "children");
//! ```

pub mod config;
pub mod core;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Engine ===
    pub use crate::core::{
        error::ConfigError,
        pluralize::{EnglishPluralizer, Inflect, Pluralizer},
    };

    // === Config ===
    pub use crate::config::{EntityConfig, NamingConfig};
}
