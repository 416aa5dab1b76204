//! Form assembly and action URL resolution.
//!
//! A [`Form`] is filled with rules through [`Form::add_rule`] and gets its
//! submission target through [`Form::set_action`], which delegates prefix
//! resolution to an injected [`PrefixResolver`]. The crate never inspects
//! request state to decide between admin and tenant routes; callers pass a
//! [`RoutePrefix`] (or any closure) built for the current request.
//!
//! # Example
//!
//! ```
//! use form_create_core::*;
//!
//! let route = RoutePrefix::new(RouteScope::Admin, "/admin", "/merchant");
//!
//! let mut form = Form::new("Mail settings");
//! form.set_action("/setting/mail", &route);
//! form.add_rule(Rule::switch("Enabled", "mail_enabled", 1))
//!     .add_rule(Rule::input("Host", "mail_host", "smtp.example.com", ""));
//!
//! assert_eq!(form.action, "/admin/setting/mail");
//! assert_eq!(form.rule.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::{Form, Header, Rule};

/// Default submission method.
pub const DEFAULT_METHOD: &str = "POST";

/// Resolves a relative URI into the action URL of a form.
pub trait PrefixResolver {
    fn resolve(&self, uri: &str) -> String;
}

impl<F> PrefixResolver for F
where
    F: Fn(&str) -> String,
{
    fn resolve(&self, uri: &str) -> String {
        self(uri)
    }
}

/// Which route tree the current request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteScope {
    /// Platform administration.
    Admin,
    /// A tenant's own panel.
    Tenant,
    /// No prefix applies.
    #[default]
    Unscoped,
}

/// Prefix-based [`PrefixResolver`] for admin and tenant route trees.
///
/// # Examples
///
/// ```
/// use form_create_core::{PrefixResolver, RoutePrefix, RouteScope};
///
/// let tenant = RoutePrefix::new(RouteScope::Tenant, "/admin", "/merchant");
/// assert_eq!(tenant.resolve("/goods/save"), "/merchant/goods/save");
///
/// let unscoped = RoutePrefix::default();
/// assert_eq!(unscoped.resolve("/goods/save"), "/goods/save");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePrefix {
    #[serde(default)]
    pub scope: RouteScope,
    #[serde(default)]
    pub admin_prefix: String,
    #[serde(default)]
    pub tenant_prefix: String,
}

impl RoutePrefix {
    pub fn new(
        scope: RouteScope,
        admin_prefix: impl Into<String>,
        tenant_prefix: impl Into<String>,
    ) -> Self {
        Self {
            scope,
            admin_prefix: admin_prefix.into(),
            tenant_prefix: tenant_prefix.into(),
        }
    }
}

impl PrefixResolver for RoutePrefix {
    fn resolve(&self, uri: &str) -> String {
        match self.scope {
            RouteScope::Admin => format!("{}{uri}", self.admin_prefix),
            RouteScope::Tenant => format!("{}{uri}", self.tenant_prefix),
            RouteScope::Unscoped => uri.to_string(),
        }
    }
}

impl Form {
    /// Creates an empty form submitted with `POST`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            method: DEFAULT_METHOD.to_string(),
            ..Default::default()
        }
    }

    /// Appends a rule at the end of the display order.
    pub fn add_rule(&mut self, rule: Rule) -> &mut Self {
        self.rule.push(rule);
        self
    }

    /// Appends an extra header map.
    pub fn add_header(&mut self, header: Header) -> &mut Self {
        self.headers.push(header);
        self
    }

    /// Resolves `uri` and stores it as the submission target.
    pub fn set_action(&mut self, uri: &str, resolver: &impl PrefixResolver) -> &mut Self {
        self.action = resolver.resolve(uri);
        self
    }

    /// Finds a rule by submission key, searching nested controls too.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_create_core::{Control, Form, Rule};
    ///
    /// let mut form = Form::new("Payment");
    /// form.add_rule(
    ///     Rule::switch("Alipay", "alipay_open", 1)
    ///         .with_control(Control::new(1, vec![Rule::input("App ID", "alipay_app_id", "", "")])),
    /// );
    ///
    /// assert!(form.find_rule("alipay_app_id").is_some());
    /// assert!(form.find_rule("wechat_app_id").is_none());
    /// ```
    pub fn find_rule(&self, field: &str) -> Option<&Rule> {
        find_in(&self.rule, field)
    }

    /// Serializes the form in compact form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serializes the form with indentation.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn find_in<'a>(rules: &'a [Rule], field: &str) -> Option<&'a Rule> {
    rules.iter().find_map(|rule| {
        if rule.field == field {
            return Some(rule);
        }
        rule.controls
            .iter()
            .find_map(|control| find_in(&control.rule, field))
    })
}
