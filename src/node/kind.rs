use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed catalog of workflow node kinds.
///
/// Every node in a workflow is one of these; the set is fixed at compile
/// time, so a typo'd type string can never bypass connectivity validation.
/// The wire form (persistence rows, canvas JSON) is the snake_case string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Order-email trigger: watches a mailbox for incoming orders.
    Email,
    /// Product matcher: resolves order lines against the catalog.
    Product,
    /// Exception step: routes orders that failed a prior step.
    Exception,
    /// Invoice generation. Terminal.
    Invoice,
    /// Conditional branch over order fields.
    Conditional,
    /// Pricing adjustment (discounts, surcharges).
    PriceAdjustment,
    /// Outbound notification. Terminal.
    Notification,
    /// Retailer-group routing.
    RetailerGroup,
}

impl NodeKind {
    /// Every kind, in catalog order. Useful for exhaustive iteration.
    pub const ALL: [NodeKind; 8] = [
        NodeKind::Email,
        NodeKind::Product,
        NodeKind::Exception,
        NodeKind::Invoice,
        NodeKind::Conditional,
        NodeKind::PriceAdjustment,
        NodeKind::Notification,
        NodeKind::RetailerGroup,
    ];

    /// The downstream kinds a node of this kind may connect to.
    ///
    /// This table is the single source of truth for connectivity; the
    /// validator in [`graph::connection`](crate::graph::connection) is a
    /// membership test against it.
    pub const fn allowed_targets(self) -> &'static [NodeKind] {
        match self {
            NodeKind::Email => &[NodeKind::Product, NodeKind::Conditional, NodeKind::Notification],
            NodeKind::Product => &[
                NodeKind::Exception,
                NodeKind::Invoice,
                NodeKind::Conditional,
                NodeKind::PriceAdjustment,
                NodeKind::Notification,
            ],
            NodeKind::Exception => &[
                NodeKind::Invoice,
                NodeKind::Conditional,
                NodeKind::Notification,
            ],
            NodeKind::Invoice => &[],
            NodeKind::Conditional => &[
                NodeKind::Email,
                NodeKind::Product,
                NodeKind::Exception,
                NodeKind::Invoice,
                NodeKind::PriceAdjustment,
                NodeKind::Notification,
            ],
            NodeKind::PriceAdjustment => &[NodeKind::Invoice, NodeKind::Notification],
            NodeKind::Notification => &[],
            NodeKind::RetailerGroup => &[
                NodeKind::Conditional,
                NodeKind::PriceAdjustment,
                NodeKind::Notification,
                NodeKind::Invoice,
            ],
        }
    }

    /// True when this kind accepts no downstream connections.
    pub const fn is_terminal(self) -> bool {
        self.allowed_targets().is_empty()
    }

    /// Human-readable label used by the editor palette.
    pub const fn label(self) -> &'static str {
        match self {
            NodeKind::Email => "Email Trigger",
            NodeKind::Product => "Product Match",
            NodeKind::Exception => "Exception Handling",
            NodeKind::Invoice => "Invoice",
            NodeKind::Conditional => "Conditional",
            NodeKind::PriceAdjustment => "Price Adjustment",
            NodeKind::Notification => "Notification",
            NodeKind::RetailerGroup => "Retailer Group",
        }
    }

    /// The snake_case wire form, matching the serde representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            NodeKind::Email => "email",
            NodeKind::Product => "product",
            NodeKind::Exception => "exception",
            NodeKind::Invoice => "invoice",
            NodeKind::Conditional => "conditional",
            NodeKind::PriceAdjustment => "price_adjustment",
            NodeKind::Notification => "notification",
            NodeKind::RetailerGroup => "retailer_group",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or(())
    }
}
