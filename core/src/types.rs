//! Schema type definitions for form documents.
//!
//! These types hold the serializable tree handed to the admin-panel
//! renderer. They carry no behavior beyond small constructors; shorthand
//! kinds are expanded by [`Transformer`](crate::Transformer) and the typed
//! constructors live on [`Rule`].
//!
//! Field names and omission rules are part of the wire contract:
//!
//! | type | always emitted | omitted when empty |
//! |---|---|---|
//! | [`Form`] | `rule`, `action`, `method`, `title` | `config`, `headers` |
//! | [`Rule`] | `title`, `type`, `field`, `info`, `value`, `props` | `col`, `options`, `control`, `validate` |
//! | [`FormOption`] | `label`, `value`, `children` | |
//! | [`Control`] | `value`, `rule` | |

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Renderer-specific configuration bag, opaque to this crate.
pub type Props = Map<String, Value>;

/// One declarative validator descriptor (e.g. `{"required": true}`).
pub type Validator = Map<String, Value>;

/// One extra request header map attached to a [`Form`].
pub type Header = Map<String, Value>;

/// Root form document.
///
/// The order of [`rule`](Form::rule) is the visual and tab order of the
/// rendered form and is preserved through serialization.
///
/// # Examples
///
/// ```
/// use form_create_core::{Form, Rule};
///
/// let mut form = Form::new("Site settings");
/// form.add_rule(Rule::input("Name", "name", "Site name", ""));
///
/// let json = serde_json::to_value(&form).unwrap();
/// assert_eq!(json["method"], "POST");
/// assert!(json.get("config").is_none());
/// assert!(json.get("headers").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Form {
    /// Fields to render, in display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rule: Vec<Rule>,
    /// Submission target URL.
    #[serde(default)]
    pub action: String,
    /// HTTP method used on submit.
    #[serde(default)]
    pub method: String,
    /// Form heading.
    #[serde(default)]
    pub title: String,
    /// Renderer-level options.
    #[serde(default, skip_serializing_if = "Config::is_empty")]
    pub config: Config,
    /// Extra header maps sent with the submission.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,
}

/// Renderer-level form options.
///
/// Currently carries no known keys. Unknown keys are kept in
/// [`entries`](Config::entries) and flattened into the `config` object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub entries: Map<String, Value>,
}

impl Config {
    /// Returns `true` when the config is at its zero value and is omitted
    /// from the wire.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One form field.
///
/// [`kind`](Rule::kind) holds the renderer component identifier and is
/// serialized as `type`. Before [`transform`](crate::Transformer::transform)
/// runs it may instead hold a shorthand kind such as `"textarea"` or
/// `"image"`.
///
/// [`field`](Rule::field) is the submission key. It should be unique within
/// a form; [`lint_form`](crate::lint_form) reports duplicates but nothing
/// enforces it.
///
/// # Examples
///
/// ```
/// use form_create_core::Rule;
///
/// let rule = Rule::hidden("id", 42);
/// let json = serde_json::to_value(&rule).unwrap();
///
/// assert_eq!(json["type"], "hidden");
/// assert!(json["props"].is_null());
/// assert!(json.get("options").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Field label.
    #[serde(default)]
    pub title: String,
    /// Renderer component (`input`, `select`, `frame`, ...) or shorthand kind.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Submission key.
    #[serde(default)]
    pub field: String,
    /// Help text.
    #[serde(default)]
    pub info: String,
    /// Default or current value, any JSON shape.
    #[serde(default)]
    pub value: Value,
    /// Renderer props; `None` is emitted as `null`.
    #[serde(default)]
    pub props: Option<Props>,
    /// Grid layout hint (e.g. `{"span": 8}`).
    #[serde(default, skip_serializing_if = "Props::is_empty")]
    pub col: Props,
    /// Choices for selection renderers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FormOption>,
    /// Sub-forms shown depending on this rule's value.
    #[serde(rename = "control", default, skip_serializing_if = "Vec::is_empty")]
    pub controls: Vec<Control>,
    /// Validator descriptors, interpreted by the frontend.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validate: Vec<Validator>,
}

/// One selectable choice.
///
/// Nested [`children`](FormOption::children) drive cascading selectors.
///
/// # Examples
///
/// ```
/// use form_create_core::FormOption;
///
/// let region = FormOption::new("Zhejiang", "zj")
///     .with_child(FormOption::new("Hangzhou", "hz"))
///     .with_child(FormOption::new("Ningbo", "nb"));
///
/// assert_eq!(region.children.len(), 2);
/// let json = serde_json::to_value(&region.children[0]).unwrap();
/// assert_eq!(json["children"], serde_json::json!([]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormOption {
    /// Display text.
    #[serde(default)]
    pub label: String,
    /// Submitted value.
    #[serde(default)]
    pub value: Value,
    /// Nested options.
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<FormOption>,
}

impl FormOption {
    /// Creates a leaf option.
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            children: Vec::new(),
        }
    }

    /// Appends a nested option.
    pub fn with_child(mut self, child: FormOption) -> Self {
        self.children.push(child);
        self
    }
}

/// A conditional sub-form.
///
/// The renderer shows [`rule`](Control::rule) while the parent rule's value
/// equals [`value`](Control::value).
///
/// # Examples
///
/// ```
/// use form_create_core::{Control, Rule};
///
/// let control = Control::new(1, vec![Rule::input("Host", "smtp_host", "", "")]);
/// assert_eq!(control.value, 1);
/// assert_eq!(control.rule[0].field, "smtp_host");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Control {
    /// Parent value that activates this control.
    #[serde(default)]
    pub value: Value,
    /// Rules rendered while active.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rule: Vec<Rule>,
}

impl Control {
    /// Creates a control shown for `value`.
    pub fn new(value: impl Into<Value>, rule: Vec<Rule>) -> Self {
        Self {
            value: value.into(),
            rule,
        }
    }
}

/// Accepts `null` for sequences that are always emitted.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
