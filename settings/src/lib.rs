//! Stored field definitions and renderer configuration for form schemas.
//!
//! Admin settings are usually kept as minimal rows (label, key, shorthand
//! kind, value, raw option string). This crate loads such rows from YAML or
//! JSON documents and builds [`Form`](form_create_core::Form)s from them
//! through the core transformer.
//!
//! # Quick start
//!
//! ```
//! use form_create_settings::{FormDefinition, RendererConfig};
//!
//! let definition: FormDefinition = serde_yaml::from_str(r#"
//! title: Profile
//! action: /user/profile
//! fields:
//!   - { title: Bio, field: bio, type: textarea }
//!   - { title: Avatar, field: avatar, type: image }
//! "#).unwrap();
//!
//! let outcome = definition.build(&RendererConfig::default(), "token");
//! assert_eq!(outcome.form.rule[0].kind, "input");
//! assert_eq!(outcome.form.rule[1].kind, "frame");
//! assert_eq!(outcome.form.action, "/user/profile");
//! ```

mod config;
mod definition;
mod error;
mod loader;

pub use config::RendererConfig;
pub use definition::{BuildOutcome, FieldDefinition, FormDefinition};
pub use error::{Result, SettingsError};
pub use loader::{DefinitionSet, collect_definition_paths, is_definition_file};
