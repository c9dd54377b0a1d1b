use std::time::Duration;

use wreq::Client;
use wreq_util::Emulation;

use crate::error::{self, FareError};

const BASE_URL: &str = "https://www.flysas.com/v2/cms-price-api/prices/";

/// Browser-impersonating request headers. Kept as configuration data so the
/// impersonated browser can be bumped without touching the fetch logic.
#[derive(Debug, Clone)]
pub struct HeaderProfile {
    pub accept: String,
    pub accept_encoding: String,
    pub accept_language: String,
    pub cache_control: String,
    pub connection: String,
    pub host: String,
    pub referer: String,
    pub user_agent: String,
}

impl Default for HeaderProfile {
    fn default() -> Self {
        Self {
            accept: "application/json, text/plain, */*".to_string(),
            accept_encoding: "gzip, deflate, br".to_string(),
            accept_language: "en-GB,en;q=0.9".to_string(),
            cache_control: "no-cache".to_string(),
            connection: "keep-alive".to_string(),
            host: "www.flysas.com".to_string(),
            referer: "https://www.flysas.com/".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                         AppleWebKit/537.36 (KHTML, like Gecko) \
                         Chrome/114.0.0.0 Safari/537.36"
                .to_string(),
        }
    }
}

#[derive(Clone)]
pub struct FetchOptions {
    pub proxy: Option<String>,
    pub timeout: u64,
    pub headers: HeaderProfile,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            proxy: None,
            timeout: 30,
            headers: HeaderProfile::default(),
        }
    }
}

/// Map a response status to an error kind. Anything below 400 lets the body
/// through to decoding.
pub fn classify_status(status: u16) -> Result<(), FareError> {
    match status {
        200 => Ok(()),
        429 => Err(FareError::RateLimited),
        403 | 503 => Err(FareError::Blocked(status)),
        _ if status >= 400 => Err(FareError::HttpStatus(status)),
        _ => Ok(()),
    }
}

/// Raw response body plus the `Content-Encoding` token it arrived with.
/// Decoding is left to the caller so a failed Brotli stream can fall back to
/// the bytes as-is.
pub struct RawBody {
    pub content_encoding: Option<String>,
    pub bytes: Vec<u8>,
}

pub async fn fetch_raw(
    params: &[(String, String)],
    options: &FetchOptions,
) -> Result<RawBody, FareError> {
    let mut builder = Client::builder()
        .emulation(Emulation::Chrome137)
        .timeout(Duration::from_secs(options.timeout));

    if let Some(ref proxy) = options.proxy {
        builder = builder.proxy(
            wreq::Proxy::all(proxy).map_err(error::from_http_error)?,
        );
    }

    let client = builder.build().map_err(error::from_http_error)?;

    let h = &options.headers;
    tracing::debug!(url = BASE_URL, "sending price query");
    let response = client
        .get(BASE_URL)
        .query(&params)
        .header("Accept", &h.accept)
        .header("Accept-Encoding", &h.accept_encoding)
        .header("Accept-Language", &h.accept_language)
        .header("Cache-Control", &h.cache_control)
        .header("Connection", &h.connection)
        .header("Host", &h.host)
        .header("Referer", &h.referer)
        .header("User-Agent", &h.user_agent)
        .send()
        .await
        .map_err(error::from_http_error)?;

    let status = response.status().as_u16();
    tracing::info!(status, "price API responded");
    classify_status(status)?;

    let content_encoding = response
        .headers()
        .get("content-encoding")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let bytes = response
        .bytes()
        .await
        .map_err(error::from_http_error)?
        .to_vec();

    Ok(RawBody {
        content_encoding,
        bytes,
    })
}
