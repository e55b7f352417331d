//! Required-column presence check and mapping suggestions

use crate::profile::Profile;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How column names are folded before substring matching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    /// Lower-case only
    #[default]
    Lowercase,
    /// Lower-case with spaces, underscores and hyphens removed
    Compact,
}

pub fn normalize(name: &str, normalization: Normalization) -> String {
    let lower = name.to_lowercase();
    match normalization {
        Normalization::Lowercase => lower,
        Normalization::Compact => lower
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect(),
    }
}

/// Presence of one required column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequiredColumn {
    pub name: String,
    /// 0-based position of the matching column
    pub position: Option<usize>,
}

impl RequiredColumn {
    pub fn is_found(&self) -> bool {
        self.position.is_some()
    }
}

/// Outcome of checking a required-column set against actual columns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnCheck {
    /// Every required name, in required order
    pub required: Vec<RequiredColumn>,
    /// Required names that were not found, in required order
    pub missing: Vec<String>,
}

impl ColumnCheck {
    pub(crate) fn from_lookup<S, F>(required: &[S], lookup: F) -> Self
    where
        S: AsRef<str>,
        F: Fn(&str) -> Option<usize>,
    {
        let mut check = ColumnCheck::default();
        for name in required {
            let name = name.as_ref();
            let position = lookup(name);
            if position.is_none() {
                check.missing.push(name.to_string());
            }
            check.required.push(RequiredColumn {
                name: name.to_string(),
                position,
            });
        }
        check
    }

    pub fn all_found(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Check required names against columns (exact, case-sensitive)
pub fn check_required<S: AsRef<str>>(columns: &[String], required: &[S]) -> ColumnCheck {
    let check = ColumnCheck::from_lookup(required, |name| columns.iter().position(|c| c == name));
    debug!(
        required = check.required.len(),
        missing = check.missing.len(),
        "checked required columns"
    );
    check
}

/// A required column that an actual column probably corresponds to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub column: String,
    pub target: String,
}

/// Propose at most one required column per actual column, in column order
pub fn suggest(columns: &[String], profile: &Profile) -> Vec<Suggestion> {
    columns
        .iter()
        .filter_map(|column| {
            let normalized = normalize(column, profile.normalization);
            profile.rule_for(&normalized).map(|rule| Suggestion {
                column: column.clone(),
                target: rule.target.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Product ID", Normalization::Compact), "productid");
        assert_eq!(normalize("Usage_Date-UTC", Normalization::Compact), "usagedateutc");
        assert_eq!(normalize("Product ID", Normalization::Lowercase), "product id");
    }

    #[test]
    fn test_all_required_found() {
        let profile = Profile::snake();
        let cols = columns(&[
            "partner_id",
            "customer_id",
            "product_id",
            "usage_date",
            "quantity",
            "unit_price",
        ]);
        let check = check_required(&cols, &profile.required);
        assert!(check.all_found());
        assert!(check.required.iter().all(RequiredColumn::is_found));
        assert_eq!(check.required[3].position, Some(3));
    }

    #[test]
    fn test_one_missing_column() {
        let profile = Profile::pascal();
        let cols = columns(&["PartnerId", "CustomerId", "ProductId", "UsageDate", "UnitPrice"]);
        let check = check_required(&cols, &profile.required);
        assert_eq!(check.missing, vec!["Quantity".to_string()]);
        assert!(!check.required[4].is_found());
    }

    #[test]
    fn test_presence_is_case_sensitive() {
        let cols = columns(&["Partner_ID", " partner_id"]);
        let check = check_required(&cols, &["partner_id"]);
        assert_eq!(check.missing, vec!["partner_id".to_string()]);
    }

    #[test]
    fn test_suggest_compact() {
        let profile = Profile::snake();
        let cols = columns(&["Product ID", "Customer-Name", "Unit Price", "Resource Location"]);
        let suggestions = suggest(&cols, &profile);
        assert_eq!(
            suggestions,
            vec![
                Suggestion {
                    column: "Product ID".to_string(),
                    target: "product_id".to_string(),
                },
                Suggestion {
                    column: "Unit Price".to_string(),
                    target: "unit_price".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_suggest_lowercase() {
        let profile = Profile::pascal();
        let cols = columns(&["Customer Name", "ChargeStartDate", "Unit", "Tags"]);
        let targets: Vec<_> = suggest(&cols, &profile)
            .into_iter()
            .map(|s| s.target)
            .collect();
        assert_eq!(targets, vec!["CustomerId", "UsageDate", "UnitPrice"]);
    }
}
