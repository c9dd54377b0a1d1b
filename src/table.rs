use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde_json::Value;

use crate::model::PriceRecord;

pub fn format_price(price: Option<f64>, market: &str) -> String {
    let p = match price {
        Some(p) => p,
        None => return "—".to_string(),
    };
    // Market codes are "<country>-<language>"; currency follows the country.
    let country = market.split('-').next().unwrap_or(market);
    match country {
        "gb" => format!("£{p:.0}"),
        "us" => format!("${p:.0}"),
        "ie" | "de" | "fr" | "es" | "it" | "fi" | "nl" | "be" => format!("€{p:.0}"),
        "se" | "no" | "dk" => format!("{p:.0} kr"),
        _ => format!("{p:.0} ({market})"),
    }
}

pub fn render(records: &[Value], market: &str) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "City", "Airport", "Country", "Outbound", "Inbound", "Lowest price",
        ]);

    for value in records {
        let record = PriceRecord::from_value(value);
        let cheapest = record.cheapest();

        let outbound = cheapest
            .and_then(|e| e.out_bound_date.clone())
            .unwrap_or_else(|| "—".to_string());
        let inbound = cheapest
            .and_then(|e| e.in_bound_date.clone())
            .unwrap_or_else(|| "—".to_string());
        let price = format_price(cheapest.and_then(|e| e.total_price()), market);

        table.add_row(vec![
            record.city_name.clone().unwrap_or_else(|| "—".to_string()),
            record.airport_name.clone().unwrap_or_else(|| "—".to_string()),
            record.country_name.clone().unwrap_or_else(|| "—".to_string()),
            outbound,
            inbound,
            price,
        ]);
    }

    table.to_string()
}
