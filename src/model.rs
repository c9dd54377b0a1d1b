use serde::Deserialize;
use serde_json::Value;

/// Typed, lenient view of one destination record, for display. The canonical
/// result stays the raw JSON; these structs only pick out the fields the
/// table renderer cares about.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceRecord {
    pub country_name: Option<String>,
    pub city_name: Option<String>,
    pub airport_name: Option<String>,
    pub prices: Vec<FareEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FareEntry {
    pub out_bound_date: Option<String>,
    pub in_bound_date: Option<String>,
    pub lowest_price: Option<LowestPrice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LowestPrice {
    pub market_total_price: Option<f64>,
}

impl PriceRecord {
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// The fare entry with the lowest market total price, when any entry
    /// carries one.
    pub fn cheapest(&self) -> Option<&FareEntry> {
        self.prices
            .iter()
            .filter(|e| e.total_price().is_some())
            .min_by(|a, b| {
                a.total_price()
                    .unwrap_or(f64::MAX)
                    .total_cmp(&b.total_price().unwrap_or(f64::MAX))
            })
    }
}

impl FareEntry {
    pub fn total_price(&self) -> Option<f64> {
        self.lowest_price.as_ref().and_then(|p| p.market_total_price)
    }
}
