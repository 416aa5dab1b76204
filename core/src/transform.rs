//! Expansion of shorthand field kinds into renderer descriptors.
//!
//! A [`Rule`] may be created with a shorthand kind in its `type` slot
//! (`"textarea"`, `"image"`, ...). [`Transformer::transform`] looks that kind
//! up in a flat table and rewrites the rule in place into the component type
//! and props the renderer understands. Kinds without a table entry are left
//! untouched.
//!
//! | kind | rendered as | notes |
//! |---|---|---|
//! | `input` | `input` | text input with placeholder |
//! | `textarea` | `input` | `props.type = "textarea"` |
//! | `number` | `inputNumber` | |
//! | `radio` | `radio` | options parsed from `value:label;...` |
//! | `file` | `upload` | bearer token header, single file |
//! | `image` | `frame` | picture picker page |
//!
//! # Examples
//!
//! ```
//! use form_create_core::{Rule, TransformContext, Transformer};
//!
//! let mut rule = Rule {
//!     title: "Gender".into(),
//!     kind: "radio".into(),
//!     field: "gender".into(),
//!     ..Default::default()
//! };
//!
//! let outcome = Transformer::default()
//!     .transform(&mut rule, &TransformContext::new("1:Male;2:Female;oops", ""));
//!
//! assert!(outcome.applied);
//! assert_eq!(outcome.skipped_options, 1);
//! assert_eq!(rule.options.len(), 2);
//! assert_eq!(rule.options[1].label, "Female");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde_json::{Map, Value, json};
use tracing::{debug, trace};

use crate::builder::props;
use crate::{FormOption, Props, Rule};

/// Shorthand kinds understood by the default table.
pub mod kind {
    pub const INPUT: &str = "input";
    pub const TEXTAREA: &str = "textarea";
    pub const NUMBER: &str = "number";
    pub const RADIO: &str = "radio";
    pub const FILE: &str = "file";
    pub const IMAGE: &str = "image";
}

/// Path appended to the upload base for `file` kinds.
pub const UPLOAD_PATH: &str = "/v1/admin/media/upload";

/// One table entry: rewrites a rule of a given kind.
pub type KindTransform = fn(&mut Rule, &TransformContext<'_>, &mut TransformOutcome);

/// Auxiliary inputs for a transformation.
///
/// `title` and `field` are read from the rule itself and must be set before
/// transforming.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformContext<'a> {
    /// Raw option definition string (`value:label;value:label`).
    pub options: &'a str,
    /// Bearer token embedded in upload headers.
    pub token: &'a str,
    /// Prefix for the upload endpoint (scheme + host, or empty).
    pub upload_base: &'a str,
}

impl<'a> TransformContext<'a> {
    /// Creates a context with an empty upload base.
    pub fn new(options: &'a str, token: &'a str) -> Self {
        Self {
            options,
            token,
            upload_base: "",
        }
    }

    /// Sets the prefix for the upload endpoint.
    pub fn with_upload_base(mut self, upload_base: &'a str) -> Self {
        self.upload_base = upload_base;
        self
    }
}

/// What a single [`Transformer::transform`] call did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformOutcome {
    /// Kind that was looked up.
    pub kind: String,
    /// Whether a table entry matched.
    pub applied: bool,
    /// Malformed option pairs dropped while parsing.
    pub skipped_options: usize,
}

/// Flat lookup table from kind to transformation.
///
/// Entries are independent of one another; running one never depends on
/// another having run first.
///
/// # Examples
///
/// ```
/// use form_create_core::{Rule, TransformContext, Transformer};
///
/// fn color(rule: &mut Rule, _: &TransformContext<'_>, _: &mut form_create_core::TransformOutcome) {
///     rule.kind = "colorPicker".into();
/// }
///
/// let mut table = Transformer::default();
/// table.register("color", color);
///
/// let mut rule = Rule { kind: "color".into(), ..Default::default() };
/// table.transform(&mut rule, &TransformContext::default());
/// assert_eq!(rule.kind, "colorPicker");
/// ```
#[derive(Clone)]
pub struct Transformer {
    kinds: HashMap<String, KindTransform>,
}

impl Transformer {
    /// Creates a table holding the built-in kinds.
    pub fn new() -> Self {
        let mut table = Self::empty();
        table
            .register(kind::INPUT, transform_input)
            .register(kind::TEXTAREA, transform_textarea)
            .register(kind::NUMBER, transform_number)
            .register(kind::RADIO, transform_radio)
            .register(kind::FILE, transform_file)
            .register(kind::IMAGE, transform_image);
        table
    }

    /// Creates a table with no kinds.
    pub fn empty() -> Self {
        Self {
            kinds: HashMap::new(),
        }
    }

    /// Adds or replaces the entry for `kind`.
    pub fn register(&mut self, kind: impl Into<String>, apply: KindTransform) -> &mut Self {
        self.kinds.insert(kind.into(), apply);
        self
    }

    /// Returns `true` if `kind` has an entry.
    pub fn handles(&self, kind: &str) -> bool {
        self.kinds.contains_key(kind)
    }

    /// Returns registered kinds in sorted order.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.kinds.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Rewrites `rule` according to the entry for its current kind.
    ///
    /// Unknown kinds are a no-op.
    pub fn transform(&self, rule: &mut Rule, ctx: &TransformContext<'_>) -> TransformOutcome {
        let mut outcome = TransformOutcome {
            kind: rule.kind.clone(),
            ..Default::default()
        };

        match self.kinds.get(rule.kind.as_str()) {
            Some(apply) => {
                apply(rule, ctx, &mut outcome);
                outcome.applied = true;
                debug!(
                    kind = %outcome.kind,
                    field = %rule.field,
                    rendered = %rule.kind,
                    "Expanded field kind"
                );
            }
            None => {
                trace!(kind = %outcome.kind, field = %rule.field, "Kind passed through");
            }
        }

        outcome
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Transformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transformer")
            .field("kinds", &self.kinds())
            .finish()
    }
}

impl Rule {
    /// Expands this rule's kind using the built-in table.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_create_core::{Rule, TransformContext};
    ///
    /// let mut rule = Rule {
    ///     title: "Bio".into(),
    ///     kind: "textarea".into(),
    ///     field: "bio".into(),
    ///     ..Default::default()
    /// };
    /// rule.trans_data(&TransformContext::default());
    ///
    /// assert_eq!(rule.kind, "input");
    /// assert_eq!(rule.props.unwrap()["type"], "textarea");
    /// ```
    pub fn trans_data(&mut self, ctx: &TransformContext<'_>) -> TransformOutcome {
        static BUILTIN: OnceLock<Transformer> = OnceLock::new();
        BUILTIN.get_or_init(Transformer::new).transform(self, ctx)
    }
}

/// Parses `value:label` pairs separated by `;`.
///
/// A segment is kept only when it splits into exactly two parts on `:`.
/// Other non-empty segments are dropped and counted; empty segments (such
/// as the one after a trailing `;`) are ignored.
///
/// # Examples
///
/// ```
/// use form_create_core::parse_option_pairs;
///
/// let (options, skipped) = parse_option_pairs("1:Yes;2:No;bad;");
/// assert_eq!(options.len(), 2);
/// assert_eq!(options[0].value, "1");
/// assert_eq!(skipped, 1);
/// ```
pub fn parse_option_pairs(source: &str) -> (Vec<FormOption>, usize) {
    let mut options = Vec::new();
    let mut skipped = 0;

    for segment in source.split(';').filter(|s| !s.is_empty()) {
        let parts: Vec<&str> = segment.split(':').collect();
        match parts.as_slice() {
            [value, label] => options.push(FormOption::new(*label, *value)),
            _ => skipped += 1,
        }
    }

    (options, skipped)
}

fn placeholder(prefix: &str, title: &str) -> Value {
    Value::String(format!("{prefix}{title}"))
}

fn transform_input(rule: &mut Rule, _: &TransformContext<'_>, _: &mut TransformOutcome) {
    rule.props = Some(props([
        ("placeholder", placeholder("请输入", &rule.title)),
        ("type", json!("text")),
    ]));
}

fn transform_textarea(rule: &mut Rule, _: &TransformContext<'_>, _: &mut TransformOutcome) {
    rule.props = Some(props([
        ("placeholder", placeholder("请输入", &rule.title)),
        ("type", json!("textarea")),
    ]));
    rule.kind = "input".into();
}

fn transform_number(rule: &mut Rule, _: &TransformContext<'_>, _: &mut TransformOutcome) {
    rule.props = Some(props([("placeholder", placeholder("请输入", &rule.title))]));
    rule.kind = "inputNumber".into();
}

fn transform_radio(rule: &mut Rule, ctx: &TransformContext<'_>, outcome: &mut TransformOutcome) {
    rule.props = Some(Props::new());

    let (options, skipped) = parse_option_pairs(ctx.options);
    if skipped > 0 {
        debug!(field = %rule.field, skipped, "Dropped malformed option pairs");
    }
    outcome.skipped_options += skipped;
    rule.options.extend(options);
}

fn transform_file(rule: &mut Rule, ctx: &TransformContext<'_>, _: &mut TransformOutcome) {
    rule.props = Some(props([
        ("action", json!(format!("{}{UPLOAD_PATH}", ctx.upload_base))),
        ("data", Value::Object(Map::new())),
        (
            "headers",
            json!({ "Authorization": format!("Bearer {}", ctx.token) }),
        ),
        ("limit", json!(1)),
        ("uploadType", json!("file")),
    ]));
    rule.kind = "upload".into();
}

fn transform_image(rule: &mut Rule, _: &TransformContext<'_>, _: &mut TransformOutcome) {
    let original = std::mem::replace(&mut rule.kind, "frame".into());
    rule.props = Some(props([
        ("footer", json!(false)),
        ("height", json!("480px")),
        ("maxLength", json!(1)),
        ("modal", json!({ "modal": false })),
        (
            "src",
            json!(format!(
                "/admin/setting/uploadPicture?field={}&type=1",
                rule.field
            )),
        ),
        ("title", placeholder("请选择", &rule.title)),
        ("type", Value::String(original)),
        ("width", json!("896px")),
    ]));
}
