use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the `assets` table with its joined category.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssetRecord {
    pub current_value: Decimal,
    pub is_liquid: bool,
    #[serde(rename = "categories", default)]
    pub category: Option<Category>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Category {
    pub name: String,
    #[serde(rename = "color_hex")]
    pub color: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CategoryBreakdown {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    pub color: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DashboardSummary {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_net_worth: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub liquid_capital: Decimal,
    pub currency: String,
    pub breakdown: Vec<CategoryBreakdown>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub project: String,
}
