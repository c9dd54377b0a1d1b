use std::fmt;

#[derive(Debug)]
pub enum FareError {
    UnknownRegion(String),
    NoDestinations,
    Timeout,
    ConnectionFailed(String),
    DnsResolution(String),
    ProxyError(String),
    TlsError(String),
    RateLimited,
    Blocked(u16),
    HttpStatus(u16),
    JsonParse(String),
    UnexpectedShape(String),
    Validation(String),
}

impl fmt::Display for FareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRegion(name) => write!(
                f,
                "unknown region \"{name}\" — run `sasfare regions` to list the known ones"
            ),
            Self::NoDestinations => write!(
                f,
                "no destinations given — pass --destinations or --region"
            ),
            Self::Timeout => write!(
                f,
                "request timed out — flysas.com may be slow or unreachable. \
                 Try increasing --timeout or check your connection"
            ),
            Self::ConnectionFailed(detail) => write!(
                f,
                "connection failed — check your internet connection ({detail})"
            ),
            Self::DnsResolution(host) => write!(
                f,
                "DNS resolution failed for {host} — check your internet connection"
            ),
            Self::ProxyError(detail) => write!(
                f,
                "proxy error — check your --proxy URL is correct ({detail})"
            ),
            Self::TlsError(detail) => write!(
                f,
                "TLS/SSL error — connection to flysas.com failed ({detail})"
            ),
            Self::RateLimited => write!(
                f,
                "rate limited by flysas.com (HTTP 429) — wait a few minutes before retrying, \
                 or use --proxy to route through a different IP"
            ),
            Self::Blocked(status) => write!(
                f,
                "request blocked by flysas.com (HTTP {status}) — this usually means \
                 rate limiting or bot detection. Try again later or use --proxy"
            ),
            Self::HttpStatus(status) => write!(
                f,
                "unexpected HTTP status {status} from the price API"
            ),
            Self::JsonParse(detail) => write!(
                f,
                "failed to parse price API response as JSON — {detail}"
            ),
            Self::UnexpectedShape(detail) => write!(
                f,
                "unexpected data structure in price API response — {detail}. \
                 This may indicate an API change"
            ),
            Self::Validation(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for FareError {}

pub fn from_http_error(err: wreq::Error) -> FareError {
    let msg = err.to_string();
    let lower = msg.to_lowercase();

    if err.is_timeout() {
        return FareError::Timeout;
    }

    if err.is_connect() {
        if lower.contains("dns") || lower.contains("resolve") || lower.contains("getaddrinfo") {
            return FareError::DnsResolution(msg);
        }
        return FareError::ConnectionFailed(msg);
    }

    if lower.contains("proxy") || lower.contains("socks") {
        return FareError::ProxyError(msg);
    }

    if lower.contains("tls") || lower.contains("ssl") || lower.contains("certificate") {
        return FareError::TlsError(msg);
    }

    if lower.contains("builder error") && lower.contains("uri") {
        return FareError::ProxyError(msg);
    }

    FareError::ConnectionFailed(msg)
}
