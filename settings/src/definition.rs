//! Field definitions and form builds.
//!
//! A definition is the minimal metadata an admin setting row stores: label,
//! key, shorthand kind, current value and a raw option string. Building a
//! [`FormDefinition`] turns each field into a [`Rule`] through the core
//! [`Transformer`].
//!
//! # Example YAML
//!
//! ```yaml
//! title: Site settings
//! action: /setting/site
//! fields:
//!   - title: Site name
//!     field: site_name
//!     type: input
//!     value: Acme
//!     required: true
//!   - title: Status
//!     field: site_open
//!     type: radio
//!     options: "1:Open;0:Closed"
//!     value: "1"
//!   - title: Logo
//!     field: site_logo
//!     type: image
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use form_create_core::{
    Form, PrefixResolver, Rule, TransformContext, TransformOutcome, Transformer, validator,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::RendererConfig;
use crate::error::{Result, SettingsError};

/// Stored metadata for one form field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field label.
    pub title: String,
    /// Submission key.
    pub field: String,
    /// Shorthand kind (`input`, `textarea`, `radio`, `image`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Current value.
    #[serde(default)]
    pub value: Value,
    /// Raw option string (`value:label;value:label`) for choice kinds.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub options: String,
    /// Help text.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub info: String,
    /// Adds a required validator to the built rule.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
}

impl FieldDefinition {
    /// Builds the rule for this field.
    ///
    /// `ctx` supplies the token and upload base; its option string is
    /// replaced with this field's own.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_create_core::{TransformContext, Transformer};
    /// use form_create_settings::FieldDefinition;
    ///
    /// let def = FieldDefinition {
    ///     title: "Status".into(),
    ///     field: "status".into(),
    ///     kind: "radio".into(),
    ///     options: "1:On;0:Off".into(),
    ///     ..Default::default()
    /// };
    ///
    /// let (rule, outcome) = def.to_rule(&Transformer::default(), &TransformContext::default());
    /// assert_eq!(rule.options.len(), 2);
    /// assert!(outcome.applied);
    /// ```
    pub fn to_rule(
        &self,
        transformer: &Transformer,
        ctx: &TransformContext<'_>,
    ) -> (Rule, TransformOutcome) {
        let mut rule = Rule {
            title: self.title.clone(),
            kind: self.kind.clone(),
            field: self.field.clone(),
            info: self.info.clone(),
            value: self.value.clone(),
            ..Default::default()
        };

        let ctx = TransformContext {
            options: &self.options,
            token: ctx.token,
            upload_base: ctx.upload_base,
        };
        let outcome = transformer.transform(&mut rule, &ctx);

        if self.required {
            rule.add_validator([validator::required(format!("{}不能为空", self.title))]);
        }

        (rule, outcome)
    }
}

/// A stored form: heading, action and ordered fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDefinition {
    /// Form heading.
    pub title: String,
    /// Relative action URI, resolved through the configured route.
    #[serde(default)]
    pub action: String,
    /// Submission method; falls back to the configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Fields in display order.
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

/// Result of [`FormDefinition::build`].
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOutcome {
    /// The assembled form.
    pub form: Form,
    /// Malformed option pairs dropped across all fields.
    pub skipped_options: usize,
    /// Fields whose kind had no transform and were emitted as written.
    pub passthrough: Vec<String>,
}

impl FormDefinition {
    /// Loads a definition, as YAML for `.yaml`/`.yml` files and JSON
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::IoError`] if the file cannot be read, a
    /// parse error for malformed documents, or
    /// [`SettingsError::InvalidDefinition`] if [`check`](Self::check) fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let definition: Self = if is_yaml(path) {
            serde_yaml::from_reader(reader)?
        } else {
            serde_json::from_reader(reader)?
        };
        definition.check()?;
        debug!(
            path = %path.display(),
            fields = definition.fields.len(),
            "Loaded form definition"
        );
        Ok(definition)
    }

    /// Saves the definition, picking the format from the extension like
    /// [`load`](Self::load).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        if is_yaml(path) {
            serde_yaml::to_writer(writer, self)?;
        } else {
            serde_json::to_writer_pretty(writer, self)?;
        }
        Ok(())
    }

    /// Checks that the title and every field key and kind are set.
    pub fn check(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(SettingsError::InvalidDefinition(
                "form title cannot be empty".to_string(),
            ));
        }
        for (index, field) in self.fields.iter().enumerate() {
            if field.field.trim().is_empty() {
                return Err(SettingsError::InvalidDefinition(format!(
                    "field #{index} ({:?}) has no key",
                    field.title
                )));
            }
            if field.kind.trim().is_empty() {
                return Err(SettingsError::InvalidDefinition(format!(
                    "field {} has no type",
                    field.field
                )));
            }
        }
        Ok(())
    }

    /// Builds the form with the built-in kind table.
    pub fn build(&self, config: &RendererConfig, token: &str) -> BuildOutcome {
        self.build_with(&Transformer::default(), config, token)
    }

    /// Builds the form with a caller-supplied kind table.
    pub fn build_with(
        &self,
        transformer: &Transformer,
        config: &RendererConfig,
        token: &str,
    ) -> BuildOutcome {
        let mut form = Form::new(self.title.clone());
        form.method = self
            .method
            .clone()
            .unwrap_or_else(|| config.default_method.clone());
        if !self.action.is_empty() {
            form.action = config.route.resolve(&self.action);
        }

        let ctx = TransformContext::new("", token).with_upload_base(&config.upload_base);
        let mut skipped_options = 0;
        let mut passthrough = Vec::new();

        for field in &self.fields {
            let (rule, outcome) = field.to_rule(transformer, &ctx);
            skipped_options += outcome.skipped_options;
            if !outcome.applied {
                passthrough.push(field.field.clone());
            }
            form.add_rule(rule);
        }

        debug!(
            title = %form.title,
            rules = form.rule.len(),
            skipped_options,
            "Built form from definition"
        );

        BuildOutcome {
            form,
            skipped_options,
            passthrough,
        }
    }
}

/// Returns `true` for `.yaml` and `.yml` paths.
pub(crate) fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    )
}
