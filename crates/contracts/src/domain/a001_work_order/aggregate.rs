use serde::{Deserialize, Serialize};

// ============================================================================
// Dimension vocabularies
// ============================================================================

/// Known product types. The filter dialog's selectors are populated from
/// these lists, so filter values are always drawn from a fixed vocabulary.
pub const PRODUCT_TYPES: &[&str] = &[
    "Wrist Flex",
    "Ankle Foot Orthotic",
    "AC Joint Pad",
    "Ringed Thumb Splint",
];

/// Known digital production statuses.
pub const DIGITAL_STATUSES: &[&str] = &["Internally Approved", "Submitted", "Assigned"];

/// Known physical production statuses.
pub const PHYSICAL_STATUSES: &[&str] = &[
    "Quality Approved",
    "Insufficient Blueprints",
    "Started",
    "Sufficient Blueprints",
];

// ============================================================================
// Work order
// ============================================================================

/// One manufacturing work order. Catalog data is static: loaded once when the
/// page mounts and never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: String,

    #[serde(rename = "productType")]
    pub product_type: String,

    /// Aggregated not-started/started/finished component counts, e.g. "0/1/1".
    #[serde(rename = "componentStatus")]
    pub component_status: String,

    #[serde(rename = "digitalStatus")]
    pub digital_status: String,

    #[serde(rename = "physicalStatus")]
    pub physical_status: String,

    /// Due date in YYYY-MM-DD form, or "-" when not scheduled yet.
    #[serde(rename = "printBy")]
    pub print_by: String,

    #[serde(rename = "shipBy")]
    pub ship_by: String,

    /// Constituent parts, shown in the product-type tooltip only.
    #[serde(default)]
    pub parts: Vec<String>,

    /// Per-component progress lines, shown in the component-status tooltip only.
    #[serde(rename = "componentDetails", default)]
    pub component_details: Vec<String>,
}
