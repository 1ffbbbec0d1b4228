//! Blocking HTTP fetch for the status page.
//!
//! One GET with a timeout and a fixed identifying user-agent. Failures are
//! classified (timeout, HTTP status, transport) so the entry point can log
//! them meaningfully; nothing here retries.

use std::time::Duration;

use encoding_rs::{Encoding, UTF_8};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::error::{AppError, Result};

const USER_AGENT: &str = "Mozilla/5.0 (compatible; TransferStatus/1.0)";

/// Default request timeout. Bounds the only blocking call in a run.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Fetch `url` and return the decoded response body.
pub fn fetch_html(url: &str, timeout: Duration) -> Result<String> {
    if url.trim().is_empty() {
        return Err(AppError::invalid_url("url must be a non-empty string"));
    }
    let target = Url::parse(url).map_err(|err| AppError::invalid_url(format!("{url}: {err}")))?;

    tracing::debug!(url = %target, ?timeout, "fetching status page");
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|err| classify(url, err))?;

    let response = client.get(target).send().map_err(|err| classify(url, err))?;
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let declared = declared_charset(&response);
    let body = response.bytes().map_err(|err| classify(url, err))?;
    tracing::debug!(bytes = body.len(), charset = ?declared, "response received");

    Ok(decode_body(&body, declared.as_deref()))
}

fn classify(url: &str, err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout(url.to_string())
    } else {
        AppError::Network {
            url: url.to_string(),
            source: err,
        }
    }
}

/// Charset parameter of the Content-Type header, if the server sent one.
fn declared_charset(response: &reqwest::blocking::Response) -> Option<String> {
    let content_type = response.headers().get(CONTENT_TYPE)?.to_str().ok()?;
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"').to_string())
    })
}

/// Decode `body`, preferring the server-declared charset and falling back to
/// content-based detection (BOM, then an HTML meta-charset scan) when the
/// server omits it or declares a label `encoding_rs` does not know.
fn decode_body(body: &[u8], declared: Option<&str>) -> String {
    let encoding = declared
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .or_else(|| Encoding::for_bom(body).map(|(enc, _)| enc))
        .or_else(|| sniff_meta_charset(body))
        .unwrap_or(UTF_8);
    let (text, actual, had_errors) = encoding.decode(body);
    if had_errors {
        tracing::warn!(encoding = actual.name(), "response body had malformed sequences");
    }
    text.into_owned()
}

/// Look for `charset=<label>` (a `<meta>` declaration) in the body prefix.
fn sniff_meta_charset(body: &[u8]) -> Option<&'static Encoding> {
    let prefix = &body[..body.len().min(1024)];
    let haystack = String::from_utf8_lossy(prefix).to_ascii_lowercase();
    let at = haystack.find("charset=")?;
    let label: String = haystack[at + "charset=".len()..]
        .trim_start_matches(['"', '\''])
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
        .collect();
    Encoding::for_label(label.as_bytes())
}
