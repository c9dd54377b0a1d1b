use sasfare::error::FareError;
use sasfare::query::FareQuery;
use sasfare::regions;

fn make_query() -> FareQuery {
    FareQuery {
        destinations: Some("OSL,CPH".into()),
        start_date: "2026-09-01".into(),
        ..FareQuery::default()
    }
}

fn param<'a>(params: &'a [(String, String)], key: &str) -> &'a str {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .unwrap_or_else(|| panic!("missing param {key}"))
}

#[test]
fn explicit_destinations_resolve() {
    let q = make_query();
    assert_eq!(q.resolve_destinations().unwrap(), "OSL,CPH");
}

#[test]
fn region_resolves_to_table_value() {
    let q = FareQuery {
        destinations: None,
        region: Some("Nordics".into()),
        ..make_query()
    };
    assert_eq!(
        q.resolve_destinations().unwrap(),
        regions::lookup("Nordics").unwrap()
    );
}

#[test]
fn region_wins_over_explicit_destinations() {
    // Observed upstream behavior: the region is resolved unconditionally,
    // discarding the explicit argument.
    let q = FareQuery {
        region: Some("Asia".into()),
        ..make_query()
    };
    assert_eq!(
        q.resolve_destinations().unwrap(),
        regions::lookup("Asia").unwrap()
    );
}

#[test]
fn unknown_region_is_rejected() {
    let q = FareQuery {
        region: Some("Atlantis".into()),
        ..make_query()
    };
    assert!(matches!(
        q.resolve_destinations(),
        Err(FareError::UnknownRegion(name)) if name == "Atlantis"
    ));
}

#[test]
fn unknown_region_rejected_even_with_explicit_destinations() {
    let q = FareQuery {
        region: Some("atlantis".into()),
        destinations: Some("OSL".into()),
        ..make_query()
    };
    assert!(matches!(
        q.resolve_destinations(),
        Err(FareError::UnknownRegion(_))
    ));
}

#[test]
fn missing_destinations_rejected() {
    let q = FareQuery {
        destinations: None,
        ..make_query()
    };
    assert!(matches!(
        q.resolve_destinations(),
        Err(FareError::NoDestinations)
    ));
}

#[test]
fn empty_destination_string_rejected() {
    let q = FareQuery {
        destinations: Some("".into()),
        ..make_query()
    };
    assert!(matches!(
        q.resolve_destinations(),
        Err(FareError::NoDestinations)
    ));
}

#[test]
fn url_params_carry_fixed_trip_type_and_sorting() {
    let params = make_query().to_url_params().unwrap();
    assert_eq!(param(&params, "type"), "R");
    assert_eq!(param(&params, "sorting"), "cities");
}

#[test]
fn url_params_carry_query_fields() {
    let q = FareQuery {
        market: "se-sv".into(),
        origin: "ARN".into(),
        ..make_query()
    };
    let params = q.to_url_params().unwrap();
    assert_eq!(param(&params, "market"), "se-sv");
    assert_eq!(param(&params, "origin"), "ARN");
    assert_eq!(param(&params, "destinations"), "OSL,CPH");
    assert_eq!(param(&params, "campaignStartDate"), "2026-09-01");
}

#[test]
fn url_params_use_region_value_when_both_given() {
    let q = FareQuery {
        region: Some("Africa".into()),
        destinations: Some("OSL".into()),
        ..make_query()
    };
    let params = q.to_url_params().unwrap();
    assert_eq!(
        param(&params, "destinations"),
        regions::lookup("Africa").unwrap()
    );
}

#[test]
fn defaults_match_upstream_client() {
    let q = FareQuery::default();
    assert_eq!(q.market, "gb-en");
    assert_eq!(q.origin, "LHR");
}

#[test]
fn every_region_name_resolves() {
    for name in regions::names() {
        let q = FareQuery {
            region: Some(name.to_string()),
            destinations: None,
            ..make_query()
        };
        assert!(q.resolve_destinations().is_ok(), "region {name} failed");
    }
}

#[test]
fn region_lookup_is_case_sensitive() {
    assert!(regions::lookup("nordics").is_none());
    assert!(regions::lookup("Nordics").is_some());
}

#[test]
fn destination_lists_are_well_formed() {
    for (region, destinations) in regions::REGIONS {
        assert!(!destinations.is_empty(), "empty list for {region}");
        for code in destinations.split(',') {
            assert_eq!(code.len(), 3, "bad code {code:?} in {region}");
            assert!(code.chars().all(|c| c.is_ascii_uppercase()));
        }
    }
}
