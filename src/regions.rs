//! Named destination groups for the price API.
//!
//! Each region maps to the comma-separated airport codes the API expects in
//! its `destinations` parameter. The table is embedded and read-only.

/// Region name → comma-separated destination airport codes.
pub const REGIONS: &[(&str, &str)] = &[
    (
        "Europe",
        "AMS,BCN,BER,BRU,CDG,DUB,FCO,GVA,LIS,MAD,MAN,MUC,MXP,NCE,PRG,VIE,WAW,ZRH",
    ),
    ("Nordics", "ARN,BGO,BLL,CPH,GOT,HEL,KEF,OSL,SVG,TRD,UME,AAL"),
    ("Asia", "BKK,HND,NRT,PVG,SIN"),
    ("Africa", "AGA,CAI,CMN,RAK"),
    ("North America", "BOS,EWR,IAD,JFK,LAX,MIA,ORD,SEA,SFO,YYZ"),
];

pub fn lookup(name: &str) -> Option<&'static str> {
    REGIONS
        .iter()
        .find(|(region, _)| *region == name)
        .map(|(_, destinations)| *destinations)
}

pub fn names() -> Vec<&'static str> {
    REGIONS.iter().map(|(region, _)| *region).collect()
}
