pub mod decode;
pub mod error;
pub mod fetch;
pub mod model;
pub mod parse;
pub mod query;
pub mod regions;
pub mod table;

use serde_json::Value;

use error::FareError;
use fetch::FetchOptions;
use query::FareQuery;

/// Fetch the cheapest round trips for the query's destinations or region.
/// Returns the price records exactly as the API sent them.
pub async fn search(query: &FareQuery, options: &FetchOptions) -> Result<Vec<Value>, FareError> {
    let params = query.to_url_params()?;
    let raw = fetch::fetch_raw(&params, options).await?;
    let text = decode::decode_body(&raw);
    let records = parse::parse_records(&text)?;
    tracing::info!(count = records.len(), "price query returned records");
    Ok(records)
}

/// Compatibility surface matching the upstream client: every failure is
/// logged and collapsed to an empty list. Prefer [`search`] where the caller
/// can act on the error kind.
pub async fn search_or_empty(query: &FareQuery, options: &FetchOptions) -> Vec<Value> {
    collapse_soft(search(query, options).await)
}

/// Collapse any failure to an empty list, logging the cause. This is the
/// whole of the compatibility surface: the error kind survives only in the
/// log line.
pub fn collapse_soft(result: Result<Vec<Value>, FareError>) -> Vec<Value> {
    match result {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("price query failed: {e}");
            Vec::new()
        }
    }
}
