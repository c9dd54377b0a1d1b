use crate::error::FareError;
use crate::regions;

/// Trip type sent on the wire. The price API only serves round trips here.
pub const TRIP_TYPE: &str = "R";
/// Fixed sort order understood by the price API.
pub const SORTING: &str = "cities";

pub const DEFAULT_MARKET: &str = "gb-en";
pub const DEFAULT_ORIGIN: &str = "LHR";

#[derive(Debug, Clone)]
pub struct FareQuery {
    pub market: String,
    pub origin: String,
    /// Explicit comma-separated destination airport codes.
    pub destinations: Option<String>,
    /// Named key into the region table. When set, its mapped destinations
    /// replace `destinations` unconditionally.
    pub region: Option<String>,
    /// Campaign start date, passed through as-is (the API validates format).
    pub start_date: String,
}

impl Default for FareQuery {
    fn default() -> Self {
        Self {
            market: DEFAULT_MARKET.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            destinations: None,
            region: None,
            start_date: String::new(),
        }
    }
}

impl FareQuery {
    /// Resolve the effective destination string. A region, when given, wins
    /// over an explicit `destinations` argument.
    pub fn resolve_destinations(&self) -> Result<String, FareError> {
        if let Some(region) = &self.region {
            return match regions::lookup(region) {
                Some(mapped) => Ok(mapped.to_string()),
                None => Err(FareError::UnknownRegion(region.clone())),
            };
        }

        match self.destinations.as_deref() {
            Some(d) if !d.is_empty() => Ok(d.to_string()),
            _ => Err(FareError::NoDestinations),
        }
    }

    pub fn to_url_params(&self) -> Result<Vec<(String, String)>, FareError> {
        let destinations = self.resolve_destinations()?;

        Ok(vec![
            ("market".to_string(), self.market.clone()),
            ("origin".to_string(), self.origin.clone()),
            ("destinations".to_string(), destinations),
            ("type".to_string(), TRIP_TYPE.to_string()),
            ("sorting".to_string(), SORTING.to_string()),
            ("campaignStartDate".to_string(), self.start_date.clone()),
        ])
    }
}
