use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The untyped, editor-facing configuration of a node: a free-form JSON
/// object filled in by the kind-specific form. The typed structs below give
/// each kind its concrete shape; `to_config`/`from_config` bridge the two.
pub type Config = serde_json::Map<String, Value>;

/// Serializes a typed config struct into the untyped node config map.
pub fn to_config<T: Serialize>(typed: &T) -> Result<Config, serde_json::Error> {
    match serde_json::to_value(typed)? {
        Value::Object(map) => Ok(map),
        other => Err(serde::ser::Error::custom(format!(
            "node config must be a JSON object, got {other}"
        ))),
    }
}

/// Deserializes a typed config struct out of the untyped node config map.
pub fn from_config<T: for<'de> Deserialize<'de>>(config: &Config) -> Result<T, serde_json::Error> {
    serde_json::from_value(Value::Object(config.clone()))
}

/// Mailbox watch settings for an email trigger node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailConfig {
    pub email: String,
    pub folder: String,
    #[serde(alias = "subjectPattern")]
    pub subject_pattern: String,
}

/// How a conditional node combines its predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredicateJoin {
    All,
    Any,
}

/// Comparison operators available to conditional predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredicateOp {
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    Contains,
}

/// A single field test, e.g. `order_total greater_than 500`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    pub field: String,
    pub operator: PredicateOp,
    pub value: Value,
}

/// Branch settings for a conditional node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalConfig {
    pub join: PredicateJoin,
    pub predicates: Vec<Predicate>,
}

/// The direction and unit of a single pricing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    PercentDiscount,
    PercentSurcharge,
    FixedDiscount,
    FixedSurcharge,
}

/// One pricing rule: what it applies to and by how much.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentRule {
    /// What the rule targets, e.g. a product SKU or `"order"` for the total.
    pub scope: String,
    pub kind: AdjustmentKind,
    pub amount: f64,
}

/// Settings for a price adjustment node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceAdjustmentConfig {
    pub rules: Vec<AdjustmentRule>,
}

/// Settings for an outbound notification node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub channel: String,
    pub recipients: Vec<String>,
    pub template: String,
}

/// Settings for a retailer-group routing node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetailerGroupConfig {
    #[serde(alias = "groupName")]
    pub group_name: String,
    #[serde(alias = "retailerIds")]
    pub retailer_ids: Vec<String>,
}
