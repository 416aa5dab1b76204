use form_create_core::*;
use serde_json::{Value, json};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn settings_form() -> Form {
    let mut form = Form::new("Store settings");
    form.set_action(
        "/setting/store",
        &RoutePrefix::new(RouteScope::Tenant, "/admin", "/merchant"),
    );

    let mut delivery = Rule::radio("Delivery", "delivery", "How orders ship", 1);
    delivery
        .add_option([FormOption::new("Express", 1), FormOption::new("Pickup", 2)])
        .add_control([Control::new(
            2,
            vec![Rule::input("Pickup address", "pickup_address", "Street and number", "")],
        )])
        .add_validator([validator::required_type("number", "Pick a delivery mode")]);

    form.add_rule(Rule::hidden("store_id", 7))
        .add_rule(
            Rule::input("Name", "name", "Store name", "Acme")
                .with_validator(validator::required("Name is required")),
        )
        .add_rule(Rule::rate("Rating", "rating", 4))
        .add_rule(delivery)
        .add_rule(
            Rule::cascader("Region", "region", "", json!(["zj", "hz"])).with_option(
                FormOption::new("Zhejiang", "zj").with_child(FormOption::new("Hangzhou", "hz")),
            ),
        );
    form
}

fn rule_json<'a>(form: &'a Value, field: &str) -> &'a Value {
    form["rule"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["field"] == field)
        .unwrap()
}

// ---------------------------------------------------------------------------
// Round trip
// ---------------------------------------------------------------------------

#[test]
fn test_form_round_trips_through_json() {
    let form = settings_form();

    let raw = form.to_json_pretty().unwrap();
    let parsed: Form = serde_json::from_str(&raw).unwrap();

    assert_eq!(parsed, form);
}

#[test]
fn test_transformed_rules_round_trip() {
    let mut form = Form::new("Media");
    for (kind, field) in [("file", "attachment"), ("image", "cover"), ("radio", "mode")] {
        let mut rule = Rule {
            title: field.to_string(),
            kind: kind.to_string(),
            field: field.to_string(),
            ..Default::default()
        };
        rule.trans_data(&TransformContext::new("a:A;b:B", "secret"));
        form.add_rule(rule);
    }

    let parsed: Form = serde_json::from_str(&form.to_json().unwrap()).unwrap();
    assert_eq!(parsed, form);
}

// ---------------------------------------------------------------------------
// Omission rules
// ---------------------------------------------------------------------------

#[test]
fn test_form_level_omissions() {
    let json = serde_json::to_value(settings_form()).unwrap();
    let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();

    assert_eq!(keys.len(), 4);
    for key in ["rule", "action", "method", "title"] {
        assert!(keys.contains(&key), "missing {key}");
    }
    assert_eq!(json["action"], "/merchant/setting/store");
}

#[test]
fn test_rule_level_omissions() {
    let json = serde_json::to_value(settings_form()).unwrap();

    let hidden = rule_json(&json, "store_id");
    assert_eq!(
        hidden,
        &json!({
            "title": "",
            "type": "hidden",
            "field": "store_id",
            "info": "",
            "value": 7,
            "props": null,
        })
    );

    let rating = rule_json(&json, "rating");
    assert_eq!(rating["col"], json!({ "span": 8 }));
    assert!(rating.get("options").is_none());
    assert!(rating.get("validate").is_none());

    let delivery = rule_json(&json, "delivery");
    assert!(delivery.get("col").is_none());
    assert!(delivery.get("controls").is_none());
    assert_eq!(delivery["control"][0]["value"], 2);
    assert_eq!(delivery["control"][0]["rule"][0]["field"], "pickup_address");
    assert_eq!(delivery["validate"][0]["type"], "number");
}

#[test]
fn test_option_children_always_present() {
    let json = serde_json::to_value(settings_form()).unwrap();

    let region = rule_json(&json, "region");
    assert_eq!(
        region["options"],
        json!([{
            "label": "Zhejiang",
            "value": "zj",
            "children": [{ "label": "Hangzhou", "value": "hz", "children": [] }],
        }])
    );
}

#[test]
fn test_rule_order_is_preserved() {
    let json = serde_json::to_value(settings_form()).unwrap();
    let fields: Vec<&str> = json["rule"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["field"].as_str().unwrap())
        .collect();

    assert_eq!(fields, vec!["store_id", "name", "rating", "delivery", "region"]);
}

#[test]
fn test_parses_documents_with_null_sequences() {
    let raw = r#"{
        "rule": [{
            "title": "Type",
            "type": "select",
            "field": "type",
            "info": "",
            "value": 1,
            "props": {"multiple": false},
            "options": [{"label": "A", "value": 1, "children": null}]
        }],
        "action": "/save",
        "method": "POST",
        "title": "Legacy"
    }"#;

    let form: Form = serde_json::from_str(raw).unwrap();
    assert_eq!(form.rule[0].options[0].children, Vec::<FormOption>::new());
    assert!(lint_form(&form).is_empty());
}
