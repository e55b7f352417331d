//! Required-column profiles and their suggestion rules

use crate::check::Normalization;
use crate::reader::LoaderKind;
use serde::{Deserialize, Serialize};

/// Names of the built-in profiles
pub const PRESET_NAMES: [&str; 2] = ["snake", "pascal"];

/// Profile used when none is requested
pub const DEFAULT_PROFILE: &str = "snake";

/// A set of required columns plus the heuristics used to suggest them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Filled from the preset or config table key
    #[serde(default, skip_deserializing)]
    pub name: String,
    pub required: Vec<String>,
    #[serde(default)]
    pub rules: Vec<SuggestionRule>,
    #[serde(default)]
    pub normalization: Normalization,
    #[serde(default)]
    pub loader: LoaderKind,
}

impl Profile {
    /// `PartnerId`-style columns, matched loosely on lower-cased names
    pub fn pascal() -> Self {
        Self {
            name: "pascal".to_string(),
            required: names(&[
                "PartnerId",
                "CustomerId",
                "ProductId",
                "UsageDate",
                "Quantity",
                "UnitPrice",
            ]),
            rules: vec![
                SuggestionRule::any_of("PartnerId", &["partner"]),
                SuggestionRule::any_of("CustomerId", &["customer"]),
                SuggestionRule::any_of("ProductId", &["product"]),
                SuggestionRule::any_of("UsageDate", &["usage", "date"]),
                SuggestionRule::any_of("Quantity", &["quantity"]),
                SuggestionRule::any_of("UnitPrice", &["price", "unit"]),
            ],
            normalization: Normalization::Lowercase,
            loader: LoaderKind::Table,
        }
    }

    /// `partner_id`-style columns, matched on compacted names
    pub fn snake() -> Self {
        Self {
            name: "snake".to_string(),
            required: names(&[
                "partner_id",
                "customer_id",
                "product_id",
                "usage_date",
                "quantity",
                "unit_price",
            ]),
            rules: vec![
                SuggestionRule::all_of("partner_id", &["partner", "id"]),
                SuggestionRule::all_of("customer_id", &["customer", "id"]),
                SuggestionRule::all_of("product_id", &["product", "id"]),
                SuggestionRule::all_of("usage_date", &["usage", "date"]),
                SuggestionRule::all_of("quantity", &["quantity"]),
                SuggestionRule::all_of("unit_price", &["price", "unit"]),
            ],
            normalization: Normalization::Compact,
            loader: LoaderKind::Cells,
        }
    }

    /// Look up a built-in profile by name
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "pascal" => Some(Self::pascal()),
            "snake" => Some(Self::snake()),
            _ => None,
        }
    }

    /// First rule matching an already normalized column name
    pub fn rule_for(&self, normalized: &str) -> Option<&SuggestionRule> {
        self.rules.iter().find(|rule| rule.matches(normalized))
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::snake()
    }
}

/// Substring rule that proposes a required column for an actual one
///
/// A name matches when it contains every `all_of` needle and, if `any_of`
/// is non-empty, at least one `any_of` needle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRule {
    pub target: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub all_of: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub any_of: Vec<String>,
}

impl SuggestionRule {
    pub fn all_of(target: &str, needles: &[&str]) -> Self {
        Self {
            target: target.to_string(),
            all_of: names(needles),
            any_of: Vec::new(),
        }
    }

    pub fn any_of(target: &str, needles: &[&str]) -> Self {
        Self {
            target: target.to_string(),
            all_of: Vec::new(),
            any_of: names(needles),
        }
    }

    pub fn matches(&self, normalized: &str) -> bool {
        self.all_of.iter().all(|n| normalized.contains(n.as_str()))
            && (self.any_of.is_empty() || self.any_of.iter().any(|n| normalized.contains(n.as_str())))
    }

    /// Rules without needles would match every column
    pub fn is_empty(&self) -> bool {
        self.all_of.is_empty() && self.any_of.is_empty()
    }
}

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
