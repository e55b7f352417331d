//! Canonical keys for usage-report headers
//!
//! Headers are compacted and mapped through a fixed alias table so that
//! spelling variants of the same column land on one snake_case key.

use crate::check::{ColumnCheck, Normalization, normalize};
use serde::Serialize;

const ALIASES: &[(&str, &str)] = &[
    ("partnerid", "partner_id"),
    ("partnername", "partner_name"),
    ("mpnid", "mpn_id"),
    ("tier2mpnid", "tier2_mpn_id"),
    ("customerid", "customer_id"),
    ("customername", "customer_name"),
    ("customerdomainname", "customer_domain_name"),
    ("customercountry", "country"),
    ("productid", "product_id"),
    ("skuid", "sku_id"),
    ("skuname", "sku_name"),
    ("productname", "product_name"),
    ("metertype", "meter_type"),
    ("metercategory", "category"),
    ("metersubcategory", "sub_category"),
    ("unit", "unit_type"),
    ("resourcelocation", "resource_location"),
    ("invoicenumber", "invoice_number"),
    ("usagedate", "usage_date"),
    ("chargestartdate", "charge_start_date"),
    ("unitprice", "unit_price"),
    ("effectiveunitprice", "unit_price"),
    ("quantity", "quantity"),
    ("billingpretaxtotal", "billing_pre_tax_total"),
    ("billingcurrency", "billing_currency"),
    ("pricingpretaxtotal", "pricing_pre_tax_total"),
    ("pricingcurrency", "pricing_currency"),
    ("benefittype", "benefit_type"),
    ("tags", "tags"),
    ("additionalinfo", "additional_info"),
    ("serviceinfo1", "service_info1"),
    ("serviceinfo2", "service_info2"),
    ("pcbcexchangerate", "pc_to_bc_exchange_rate"),
    ("pcbcexchangeratedate", "pc_to_bc_exchange_rate_date"),
    ("entitlementid", "entitlement_id"),
    ("entitlementdescription", "entitlement_description"),
    (
        "partnerearnedcreditpercentage",
        "partner_earned_credit_percentage",
    ),
    ("creditpercentage", "credit_percentage"),
    ("credittype", "credit_type"),
    ("benefitorderid", "benefit_order_id"),
    ("benefitid", "benefit_id"),
];

/// Canonical key of a header; unknown headers keep their compacted form
pub fn canonical_key(header: &str) -> String {
    let compact = normalize(header.trim(), Normalization::Compact);
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == compact)
        .map(|(_, key)| key.to_string())
        .unwrap_or(compact)
}

/// A header and the key it maps to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnMapping {
    pub column: String,
    pub key: String,
    pub position: usize,
}

pub fn map_columns(columns: &[String]) -> Vec<ColumnMapping> {
    columns
        .iter()
        .enumerate()
        .map(|(position, column)| ColumnMapping {
            column: column.clone(),
            key: canonical_key(column),
            position,
        })
        .collect()
}

/// Check required names against mapped keys.
///
/// Required names go through the same aliasing, so `PartnerId` and
/// `partner_id` both look for `partner_id`. When several headers map to
/// one key the last of them wins.
pub fn check_mapped<S: AsRef<str>>(mapping: &[ColumnMapping], required: &[S]) -> ColumnCheck {
    ColumnCheck::from_lookup(required, |name| {
        let key = canonical_key(name);
        mapping.iter().rev().find(|m| m.key == key).map(|m| m.position)
    })
}
