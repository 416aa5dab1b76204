//! Structural lint for assembled forms.
//!
//! Forms are never checked implicitly. [`lint_form`] is an opt-in pass that
//! reports problems the renderer would otherwise surface at runtime, such as
//! two rules submitting under the same key.
//!
//! # Examples
//!
//! ```
//! use form_create_core::*;
//!
//! let mut form = Form::new("Profile");
//! form.add_rule(Rule::input("Name", "name", "", ""));
//! assert!(lint_form(&form).is_empty());
//!
//! form.add_rule(Rule::input("Nickname", "name", "", ""));
//! assert_eq!(lint_form(&form), vec![LintError::DuplicateField("name".into())]);
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{Form, FormOption, Rule};

/// Renderer types whose options must be supplied inline.
const INLINE_CHOICE_TYPES: &[&str] = &["radio", "checkbox"];

/// Structural problems found in a form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LintError {
    /// A rule has no submission key. Carries the rule title.
    #[error("rule has an empty field key: {0:?}")]
    EmptyField(String),
    /// Two rules submit under the same key.
    #[error("duplicate field in form: {0}")]
    DuplicateField(String),
    /// A choice renderer has no options.
    #[error("choice field has no options: {0}")]
    MissingOptions(String),
    /// An option (at any depth) has an empty label.
    #[error("option with empty label in field: {0}")]
    EmptyOptionLabel(String),
}

/// Lints a form, including rules nested in controls.
///
/// Every problem is reported; the pass does not stop at the first one.
pub fn lint_form(form: &Form) -> Vec<LintError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    lint_rules(&form.rule, &mut seen, &mut errors);
    errors
}

fn lint_rules<'a>(rules: &'a [Rule], seen: &mut HashSet<&'a str>, errors: &mut Vec<LintError>) {
    for rule in rules {
        if rule.field.is_empty() {
            errors.push(LintError::EmptyField(rule.title.clone()));
        } else if !seen.insert(rule.field.as_str()) {
            errors.push(LintError::DuplicateField(rule.field.clone()));
        }

        if INLINE_CHOICE_TYPES.contains(&rule.kind.as_str()) && rule.options.is_empty() {
            errors.push(LintError::MissingOptions(rule.field.clone()));
        }

        if has_empty_label(&rule.options) {
            errors.push(LintError::EmptyOptionLabel(rule.field.clone()));
        }

        for control in &rule.controls {
            lint_rules(&control.rule, seen, errors);
        }
    }
}

fn has_empty_label(options: &[FormOption]) -> bool {
    options
        .iter()
        .any(|option| option.label.is_empty() || has_empty_label(&option.children))
}
