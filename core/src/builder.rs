//! Convenience constructors and in-place mutators for [`Rule`].
//!
//! Constructors set the final renderer `type` and props directly and do not
//! go through the [`Transformer`](crate::Transformer). Every call returns a
//! new rule that shares nothing with any other.

use serde_json::{Value, json};

use crate::{Control, FormOption, Props, Rule, Validator};

/// Builds a props map from literal entries.
pub(crate) fn props<const N: usize>(entries: [(&str, Value); N]) -> Props {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

impl Rule {
    fn with_kind(
        title: impl Into<String>,
        kind: &str,
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            title: title.into(),
            kind: kind.to_string(),
            field: field.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    /// Creates a single-line text input.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_create_core::Rule;
    ///
    /// let rule = Rule::input("Site name", "site_name", "Enter the site name", "Acme");
    /// assert_eq!(rule.kind, "input");
    /// assert_eq!(rule.props.unwrap()["type"], "text");
    /// ```
    pub fn input(
        title: impl Into<String>,
        field: impl Into<String>,
        placeholder: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        let mut rule = Self::with_kind(title, "input", field, value);
        rule.props = Some(props([
            ("type", json!("text")),
            ("placeholder", Value::String(placeholder.into())),
        ]));
        rule
    }

    /// Creates a multi-line text input.
    pub fn textarea(
        title: impl Into<String>,
        field: impl Into<String>,
        placeholder: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        let mut rule = Self::with_kind(title, "input", field, value);
        rule.props = Some(props([
            ("type", json!("textarea")),
            ("placeholder", Value::String(placeholder.into())),
        ]));
        rule
    }

    /// Creates a numeric input.
    pub fn input_number(
        title: impl Into<String>,
        field: impl Into<String>,
        placeholder: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        let mut rule = Self::with_kind(title, "inputNumber", field, value);
        rule.props = Some(props([("placeholder", Value::String(placeholder.into()))]));
        rule
    }

    /// Creates a date input. The renderer does not allow typing into it.
    pub fn date_picker(
        title: impl Into<String>,
        field: impl Into<String>,
        placeholder: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        let mut rule = Self::with_kind(title, "input", field, value);
        rule.props = Some(props([
            ("type", json!("date")),
            ("placeholder", Value::String(placeholder.into())),
            ("editable", json!(false)),
        ]));
        rule
    }

    /// Creates a hidden field carrying `value` through submission.
    pub fn hidden(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::with_kind(String::new(), "hidden", field, value)
    }

    /// Creates an external-page picker. Props are left for the caller.
    pub fn frame(
        title: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self::with_kind(title, "frame", field, value)
    }

    /// Creates a 1–5 star rating spanning a third of the grid.
    pub fn rate(
        title: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        let mut rule = Self::with_kind(title, "rate", field, value);
        rule.col = props([("span", json!(8))]);
        rule.props = Some(props([("max", json!(5))]));
        rule
    }

    /// Creates a dropdown. Options are attached with
    /// [`add_option`](Rule::add_option).
    ///
    /// # Examples
    ///
    /// ```
    /// use form_create_core::{FormOption, Rule};
    ///
    /// let mut rule = Rule::select("Tags", "tags", "Pick tags", serde_json::json!([]), true);
    /// rule.add_option([FormOption::new("Rust", "rust"), FormOption::new("Go", "go")]);
    ///
    /// assert_eq!(rule.props.as_ref().unwrap()["multiple"], true);
    /// assert_eq!(rule.options.len(), 2);
    /// ```
    pub fn select(
        title: impl Into<String>,
        field: impl Into<String>,
        placeholder: impl Into<String>,
        value: impl Into<Value>,
        multiple: bool,
    ) -> Self {
        let mut rule = Self::with_kind(title, "select", field, value);
        rule.props = Some(props([
            ("multiple", json!(multiple)),
            ("placeholder", Value::String(placeholder.into())),
        ]));
        rule
    }

    /// Creates an on/off switch submitting `1` for on and `2` for off.
    pub fn switch(
        title: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        let mut rule = Self::with_kind(title, "switch", field, value);
        rule.props = Some(props([
            ("activeValue", json!(1)),
            ("inactiveValue", json!(2)),
            ("inactiveText", json!("关闭")),
            ("activeText", json!("开启")),
        ]));
        rule
    }

    /// Creates a radio group with no options yet.
    pub fn radio(
        title: impl Into<String>,
        field: impl Into<String>,
        info: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self::with_kind(title, "radio", field, value).with_info(info)
    }

    /// Creates a cascading selector with no options yet.
    pub fn cascader(
        title: impl Into<String>,
        field: impl Into<String>,
        info: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self::with_kind(title, "cascader", field, value).with_info(info)
    }

    /// Appends options in order.
    pub fn add_option(&mut self, options: impl IntoIterator<Item = FormOption>) -> &mut Self {
        self.options.extend(options);
        self
    }

    /// Appends validator descriptors in order.
    pub fn add_validator(&mut self, validators: impl IntoIterator<Item = Validator>) -> &mut Self {
        self.validate.extend(validators);
        self
    }

    /// Appends conditional sub-forms in order.
    pub fn add_control(&mut self, controls: impl IntoIterator<Item = Control>) -> &mut Self {
        self.controls.extend(controls);
        self
    }

    /// Replaces the whole props map.
    pub fn add_props(&mut self, props: Props) -> &mut Self {
        self.props = Some(props);
        self
    }

    /// Sets the help text.
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = info.into();
        self
    }

    /// Sets the grid layout hint.
    pub fn with_col(mut self, col: Props) -> Self {
        self.col = col;
        self
    }

    /// Adds one option.
    pub fn with_option(mut self, option: FormOption) -> Self {
        self.options.push(option);
        self
    }

    /// Adds one validator descriptor.
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validate.push(validator);
        self
    }

    /// Adds one conditional sub-form.
    pub fn with_control(mut self, control: Control) -> Self {
        self.controls.push(control);
        self
    }

    /// Replaces the whole props map.
    pub fn with_props(mut self, props: Props) -> Self {
        self.props = Some(props);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator;

    #[test]
    fn test_constructors_set_final_type() {
        let cases = [
            (Rule::input("t", "f", "p", ""), "input"),
            (Rule::textarea("t", "f", "p", ""), "input"),
            (Rule::input_number("t", "f", "p", 0), "inputNumber"),
            (Rule::date_picker("t", "f", "p", ""), "input"),
            (Rule::hidden("f", 1), "hidden"),
            (Rule::frame("t", "f", ""), "frame"),
            (Rule::rate("t", "f", 3), "rate"),
            (Rule::select("t", "f", "p", "", false), "select"),
            (Rule::switch("t", "f", 1), "switch"),
            (Rule::radio("t", "f", "i", 1), "radio"),
            (Rule::cascader("t", "f", "i", Value::Null), "cascader"),
        ];

        for (rule, kind) in cases {
            assert_eq!(rule.kind, kind, "field {}", rule.field);
            assert_eq!(rule.field, "f");
        }
    }

    #[test]
    fn test_date_picker_is_not_editable() {
        let rule = Rule::date_picker("Birthday", "birthday", "Pick a day", "");
        let props = rule.props.unwrap();
        assert_eq!(props["type"], "date");
        assert_eq!(props["editable"], false);
    }

    #[test]
    fn test_rate_has_fixed_scale_and_span() {
        let rule = Rule::rate("Score", "score", 4);
        assert_eq!(rule.props.unwrap()["max"], 5);
        assert_eq!(rule.col["span"], 8);
    }

    #[test]
    fn test_switch_value_pair() {
        let rule = Rule::switch("Enabled", "enabled", 1);
        let props = rule.props.unwrap();
        assert_eq!(props["activeValue"], 1);
        assert_eq!(props["inactiveValue"], 2);
        assert_eq!(props["activeText"], "开启");
        assert_eq!(props["inactiveText"], "关闭");
    }

    #[test]
    fn test_radio_and_cascader_keep_info_and_null_props() {
        let radio = Rule::radio("Gender", "gender", "Pick one", 1);
        assert_eq!(radio.info, "Pick one");
        assert!(radio.props.is_none());

        let cascader = Rule::cascader("Region", "region", "Province / city", Value::Null);
        assert_eq!(cascader.info, "Province / city");
    }

    #[test]
    fn test_constructed_rules_share_no_storage() {
        let mut first = Rule::input("Name", "name", "p", "");
        let second = Rule::input("Name", "name", "p", "");

        first
            .props
            .as_mut()
            .unwrap()
            .insert("clearable".into(), json!(true));

        assert!(!second.props.as_ref().unwrap().contains_key("clearable"));
        assert_eq!(second.props.unwrap().len(), 2);
    }

    #[test]
    fn test_mutators_chain_in_place() {
        let mut rule = Rule::radio("Mode", "mode", "", 1);
        rule.add_option([FormOption::new("On", 1)])
            .add_option([FormOption::new("Off", 0)])
            .add_validator([validator::required("Pick a mode")])
            .add_control([Control::new(1, vec![Rule::input("Host", "host", "", "")])]);

        assert_eq!(rule.options.len(), 2);
        assert_eq!(rule.options[1].label, "Off");
        assert_eq!(rule.validate.len(), 1);
        assert_eq!(rule.controls[0].rule[0].field, "host");
    }

    #[test]
    fn test_add_props_replaces_whole_map() {
        let mut rule = Rule::input("Name", "name", "p", "");
        rule.add_props(props([("maxlength", json!(20))]));

        let props = rule.props.unwrap();
        assert_eq!(props.len(), 1);
        assert_eq!(props["maxlength"], 20);
    }
}
