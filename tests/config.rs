//! Tests for the typed configuration layer over the untyped config map.
use keiro::node::{
    from_config, to_config, AdjustmentKind, AdjustmentRule, ConditionalConfig, EmailConfig,
    NotificationConfig, Predicate, PredicateJoin, PredicateOp, PriceAdjustmentConfig,
    RetailerGroupConfig,
};
use serde_json::json;

#[test]
fn email_config_round_trips_through_the_map() {
    let typed = EmailConfig {
        email: "orders@acme.example".to_string(),
        folder: "INBOX".to_string(),
        subject_pattern: "(?i)order".to_string(),
    };
    let map = to_config(&typed).expect("serializes to an object");
    assert_eq!(map.get("email").and_then(|v| v.as_str()), Some("orders@acme.example"));
    let back: EmailConfig = from_config(&map).expect("deserializes back");
    assert_eq!(back, typed);
}

#[test]
fn email_config_accepts_the_editor_camel_case_alias() {
    let mut map = serde_json::Map::new();
    map.insert("email".to_string(), json!("a@b.example"));
    map.insert("folder".to_string(), json!("Orders"));
    map.insert("subjectPattern".to_string(), json!("PO-"));
    let typed: EmailConfig = from_config(&map).expect("alias accepted");
    assert_eq!(typed.subject_pattern, "PO-");
}

#[test]
fn conditional_config_carries_join_and_predicates() {
    let typed = ConditionalConfig {
        join: PredicateJoin::Any,
        predicates: vec![
            Predicate {
                field: "order_total".to_string(),
                operator: PredicateOp::GreaterThan,
                value: json!(500),
            },
            Predicate {
                field: "retailer".to_string(),
                operator: PredicateOp::Contains,
                value: json!("north"),
            },
        ],
    };
    let map = to_config(&typed).expect("serializes to an object");
    assert_eq!(map.get("join").and_then(|v| v.as_str()), Some("any"));
    let back: ConditionalConfig = from_config(&map).expect("deserializes back");
    assert_eq!(back, typed);
}

#[test]
fn price_adjustment_rules_round_trip() {
    let typed = PriceAdjustmentConfig {
        rules: vec![AdjustmentRule {
            scope: "order".to_string(),
            kind: AdjustmentKind::PercentDiscount,
            amount: 12.5,
        }],
    };
    let map = to_config(&typed).expect("serializes to an object");
    let back: PriceAdjustmentConfig = from_config(&map).expect("deserializes back");
    assert_eq!(back, typed);
    assert_eq!(
        map["rules"][0]["kind"],
        json!("percent_discount"),
        "adjustment kinds use the snake_case wire form"
    );
}

#[test]
fn notification_and_retailer_group_round_trip() {
    let notify = NotificationConfig {
        channel: "email".to_string(),
        recipients: vec!["ops@acme.example".to_string()],
        template: "order_received".to_string(),
    };
    let back: NotificationConfig =
        from_config(&to_config(&notify).expect("object")).expect("round trip");
    assert_eq!(back, notify);

    let group = RetailerGroupConfig {
        group_name: "Northeast".to_string(),
        retailer_ids: vec!["r-100".to_string(), "r-104".to_string()],
    };
    let back: RetailerGroupConfig =
        from_config(&to_config(&group).expect("object")).expect("round trip");
    assert_eq!(back, group);
}

#[test]
fn non_object_typed_value_is_rejected() {
    // A bare scalar is not a valid node config shape.
    let err = to_config(&42u32).expect_err("scalar is not an object");
    assert!(err.to_string().contains("object"));
}
