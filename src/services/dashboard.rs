use rust_decimal::Decimal;
use std::collections::HashMap;
use thiserror::Error;

use crate::models::{AssetRecord, CategoryBreakdown, DashboardSummary};

pub const UNCATEGORIZED_NAME: &str = "Uncategorized";
pub const UNCATEGORIZED_COLOR: &str = "#cccccc";
pub const UNCATEGORIZED_ICON: &str = "HelpCircle";

#[derive(Debug, Error)]
pub enum AggregationError {
    #[error("Asset values overflow while summing {0}")]
    Overflow(String),
}

fn add(acc: Decimal, value: Decimal, what: &str) -> Result<Decimal, AggregationError> {
    acc.checked_add(value)
        .ok_or_else(|| AggregationError::Overflow(what.to_string()))
}

/// Folds the asset list into net worth, liquid capital and a per-category
/// breakdown. Breakdown order is unspecified.
pub fn summarize(assets: Vec<AssetRecord>, currency: &str) -> Result<DashboardSummary, AggregationError> {
    let mut total_net_worth = Decimal::ZERO;
    let mut liquid_capital = Decimal::ZERO;
    let mut by_category: HashMap<String, CategoryBreakdown> = HashMap::new();

    for asset in assets {
        total_net_worth = add(total_net_worth, asset.current_value, "net worth")?;
        if asset.is_liquid {
            liquid_capital = add(liquid_capital, asset.current_value, "liquid capital")?;
        }

        let (name, color, icon) = match asset.category {
            Some(category) => (category.name, category.color, category.icon),
            None => (
                UNCATEGORIZED_NAME.to_string(),
                UNCATEGORIZED_COLOR.to_string(),
                Some(UNCATEGORIZED_ICON.to_string()),
            ),
        };

        // First occurrence of a name fixes its color and icon.
        let bucket = by_category
            .entry(name)
            .or_insert_with_key(|name| CategoryBreakdown {
                name: name.clone(),
                value: Decimal::ZERO,
                color,
                icon,
            });
        bucket.value = add(bucket.value, asset.current_value, &bucket.name)?;
    }

    Ok(DashboardSummary {
        total_net_worth,
        liquid_capital,
        currency: currency.to_string(),
        breakdown: by_category.into_values().collect(),
    })
}
