use std::process;

use clap::Parser;
use serde_json::Value;

use sasfare::error::FareError;
use sasfare::fetch::FetchOptions;
use sasfare::model::PriceRecord;
use sasfare::query::{FareQuery, DEFAULT_MARKET, DEFAULT_ORIGIN};
use sasfare::{regions, table};

#[derive(Parser)]
#[command(
    name = "sasfare",
    about = "Query SAS campaign fares from the terminal",
    version,
    after_help = "\
Examples:
  sasfare search --region Nordics --start-date 2026-09-01
  sasfare search --destinations OSL,CPH,ARN --start-date 2026-09-01 --origin MAN
  sasfare search --region Europe --start-date 2026-09-01 --json --pretty
  sasfare search --region Asia --start-date 2026-09-01 --compact --top 5
  sasfare regions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    #[command(
        about = "Search for the cheapest round trips",
        after_help = "\
Examples:
  By region:      sasfare search --region Nordics --start-date 2026-09-01
  Explicit codes: sasfare search --destinations OSL,CPH --start-date 2026-09-01
  Other origin:   sasfare search --region Europe --start-date 2026-09-01 --origin ARN
  JSON output:    sasfare search --region Europe --start-date 2026-09-01 --json --pretty

Note: --region takes precedence over --destinations when both are given."
    )]
    Search(SearchArgs),
    #[command(about = "List the named destination regions")]
    Regions,
}

#[derive(clap::Args)]
struct SearchArgs {
    #[arg(
        short, long,
        value_name = "NAME",
        help = "Named destination region (see `sasfare regions`)"
    )]
    region: Option<String>,

    // Long-only: a short -t next to -d (start date) invites typos.
    #[arg(
        long,
        value_name = "IATA,IATA,...",
        help = "Comma-separated destination airport codes"
    )]
    destinations: Option<String>,

    #[arg(
        short = 'd', long,
        value_name = "YYYY-MM-DD",
        help = "Campaign start date, passed through to the API"
    )]
    start_date: String,

    #[arg(
        short, long,
        default_value = DEFAULT_ORIGIN,
        value_name = "IATA",
        help = "Origin airport code"
    )]
    origin: String,

    #[arg(
        short, long,
        default_value = DEFAULT_MARKET,
        value_name = "CODE",
        help = "Market code controlling currency and language (e.g. gb-en, se-sv)"
    )]
    market: String,

    #[arg(long, value_name = "N", help = "Show only the N cheapest destinations")]
    top: Option<usize>,

    #[arg(long, help = "One-line-per-destination output (for scripts and AI agents)")]
    compact: bool,

    #[arg(long, help = "Output as JSON")]
    json: bool,

    #[arg(long, help = "Output as pretty-printed JSON")]
    pretty: bool,

    #[arg(long, value_name = "URL", help = "HTTP or SOCKS5 proxy")]
    proxy: Option<String>,

    #[arg(long, default_value = "30", value_name = "SECS", help = "Request timeout")]
    timeout: u64,
}

fn is_json(args: &SearchArgs) -> bool {
    args.json || args.pretty
}

fn error_code(err: &FareError) -> i32 {
    match err {
        FareError::UnknownRegion(_)
        | FareError::NoDestinations
        | FareError::Validation(_) => 2,
        FareError::Timeout
        | FareError::ConnectionFailed(_)
        | FareError::DnsResolution(_)
        | FareError::TlsError(_)
        | FareError::ProxyError(_) => 3,
        FareError::RateLimited | FareError::Blocked(_) => 4,
        FareError::HttpStatus(_) => 5,
        FareError::JsonParse(_) | FareError::UnexpectedShape(_) => 6,
    }
}

fn error_kind(err: &FareError) -> &'static str {
    match err {
        FareError::UnknownRegion(_) => "unknown_region",
        FareError::NoDestinations => "no_destinations",
        FareError::Validation(_) => "validation_error",
        FareError::Timeout => "timeout",
        FareError::ConnectionFailed(_) => "connection_failed",
        FareError::DnsResolution(_) => "dns_error",
        FareError::TlsError(_) => "tls_error",
        FareError::ProxyError(_) => "proxy_error",
        FareError::RateLimited => "rate_limited",
        FareError::Blocked(_) => "blocked",
        FareError::HttpStatus(_) => "http_error",
        FareError::JsonParse(_) => "parse_error",
        FareError::UnexpectedShape(_) => "shape_error",
    }
}

fn die(err: &FareError, json_mode: bool) -> ! {
    if json_mode {
        let json = serde_json::json!({
            "error": {
                "kind": error_kind(err),
                "message": err.to_string(),
            }
        });
        println!("{}", serde_json::to_string(&json).unwrap());
    } else {
        eprintln!("error: {err}");
    }
    process::exit(error_code(err));
}

fn apply_top(records: &mut Vec<Value>, n: usize) {
    records.sort_by(|a, b| {
        let pa = PriceRecord::from_value(a)
            .cheapest()
            .and_then(|e| e.total_price())
            .unwrap_or(f64::MAX);
        let pb = PriceRecord::from_value(b)
            .cheapest()
            .and_then(|e| e.total_price())
            .unwrap_or(f64::MAX);
        pa.total_cmp(&pb)
    });
    records.truncate(n);
}

fn print_compact(records: &[Value], market: &str) {
    for value in records {
        let record = PriceRecord::from_value(value);
        let cheapest = record.cheapest();
        let price = table::format_price(cheapest.and_then(|e| e.total_price()), market);
        let city = record.city_name.as_deref().unwrap_or("?");
        let airport = record.airport_name.as_deref().unwrap_or("?");
        let country = record.country_name.as_deref().unwrap_or("?");
        let dates = match cheapest {
            Some(e) => format!(
                "{}>{}",
                e.out_bound_date.as_deref().unwrap_or("?"),
                e.in_bound_date.as_deref().unwrap_or("?"),
            ),
            None => "—".to_string(),
        };
        println!("{price} | {city} | {airport} | {country} | {dates}");
    }
}

fn print_result(records: &[Value], args: &SearchArgs) {
    if args.compact {
        if records.is_empty() {
            println!("No fares found.");
            return;
        }
        print_compact(records, &args.market);
    } else if is_json(args) {
        let output = if args.pretty {
            serde_json::to_string_pretty(records).unwrap()
        } else {
            serde_json::to_string(records).unwrap()
        };
        println!("{output}");
    } else {
        if records.is_empty() {
            println!("No fares found.");
            return;
        }
        println!("{}", table::render(records, &args.market));
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Regions => {
            for (name, destinations) in regions::REGIONS {
                println!("{name}: {destinations}");
            }
        }
        Commands::Search(args) => {
            let json_mode = is_json(&args);

            let query = FareQuery {
                market: args.market.clone(),
                origin: args.origin.to_uppercase(),
                destinations: args.destinations.as_ref().map(|d| d.to_uppercase()),
                region: args.region.clone(),
                start_date: args.start_date.clone(),
            };

            let options = FetchOptions {
                proxy: args.proxy.clone(),
                timeout: args.timeout,
                ..FetchOptions::default()
            };

            match sasfare::search(&query, &options).await {
                Ok(mut records) => {
                    if let Some(n) = args.top {
                        apply_top(&mut records, n);
                    }
                    print_result(&records, &args);
                }
                Err(e) => die(&e, json_mode),
            }
        }
    }
}
