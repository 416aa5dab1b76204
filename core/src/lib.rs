//! Declarative form schemas for admin-panel renderers.
//!
//! This crate builds the JSON documents a generic form renderer consumes:
//!
//! - [`Form`]: the root document (rules, action, method, title).
//! - [`Rule`]: one field: renderer type, props, options, validators and
//!   conditional sub-forms.
//! - [`FormOption`]: a selectable choice, possibly with nested children.
//! - [`Control`]: a sub-form shown for one value of its parent rule.
//!
//! Rules are created either with the typed constructors on [`Rule`]
//! ([`Rule::input`], [`Rule::select`], [`Rule::switch`], ...) or as a literal
//! holding a shorthand kind that [`Transformer`] expands into the final
//! renderer type and props.
//!
//! [`lint_form`] reports structural problems such as duplicate field keys.
//! Nothing in this crate evaluates validators; they are descriptors for the
//! frontend.
//!
//! # Example
//!
//! ```
//! use form_create_core::*;
//!
//! let mut avatar = Rule {
//!     title: "Avatar".into(),
//!     kind: "image".into(),
//!     field: "avatar".into(),
//!     ..Default::default()
//! };
//! avatar.trans_data(&TransformContext::default());
//!
//! let mut form = Form::new("Profile");
//! form.set_action("/user/profile", &RoutePrefix::new(RouteScope::Admin, "/admin", ""));
//! form.add_rule(Rule::input("Nickname", "nickname", "Your nickname", ""))
//!     .add_rule(avatar);
//!
//! let json: serde_json::Value = serde_json::from_str(&form.to_json().unwrap()).unwrap();
//! assert_eq!(json["action"], "/admin/user/profile");
//! assert_eq!(json["rule"][1]["type"], "frame");
//! assert!(lint_form(&form).is_empty());
//! ```

mod builder;
mod form;
mod transform;
mod types;
mod validate;
pub mod validator;

pub use form::{DEFAULT_METHOD, PrefixResolver, RoutePrefix, RouteScope};
pub use transform::{
    KindTransform, TransformContext, TransformOutcome, Transformer, UPLOAD_PATH, kind,
    parse_option_pairs,
};
pub use types::*;
pub use validate::{LintError, lint_form};
