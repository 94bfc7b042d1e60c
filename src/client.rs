use serde::de::DeserializeOwned;

/// Errors surfaced by the endpoint wrappers
///
/// "No matching data" is never an error: it is reported through the return
/// channel as `Ok(None)` or an empty collection
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Connection-level failure: DNS, refused connection, timeout, TLS
    ///
    /// Retrying is up to the caller
    #[error("Failed to request {url}: {source}")]
    Transport {
        url: String,
        source: minreq::Error
    },

    /// The service answered with a status this contract doesn't define
    #[error("{url} responded with unexpected status {status}")]
    UnexpectedStatus {
        url: String,
        status: i32
    },

    /// A body arrived but couldn't be decoded into the expected shape
    ///
    /// Indicates a service contract change or a malformed response; not retryable
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: DecodeError
    },

    /// A caller-supplied argument failed a precondition; no request was made
    #[error("Invalid argument: {0}")]
    InvalidArgument(String)
}

/// Body-level decoding failures
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "hiscores")]
    #[error(transparent)]
    Csv(#[from] csv::Error)
}

/// Whether a response body is the service's blank "no data" page
fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

/// Fetch a JSON endpoint and decode its body into `T`
///
/// Returns `Ok(None)` when the service signals "no matching data":
/// an HTTP 404, or a success response with a blank body
#[tracing::instrument(level = "trace")]
pub fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<Option<T>, Error> {
    tracing::trace!("Fetching web-services JSON");

    let response = minreq::get(url)
        .with_header("Accept", "application/json")
        .with_timeout(*crate::REQUESTS_TIMEOUT)
        .send()
        .map_err(|source| Error::Transport {
            url: url.to_string(),
            source
        })?;

    match response.status_code {
        code if code >= 200 && code <= 299 => {
            let body = response.as_bytes();

            if is_blank(body) {
                return Ok(None);
            }

            match serde_json::from_slice(body) {
                Ok(value) => Ok(Some(value)),

                Err(source) => Err(Error::Decode {
                    url: url.to_string(),
                    source: source.into()
                })
            }
        }

        404 => Ok(None),

        status => Err(Error::UnexpectedStatus {
            url: url.to_string(),
            status
        })
    }
}

/// Fetch a CSV endpoint and split its body into records
///
/// Returns `Ok(None)` on the same "no matching data" signals as [`fetch_json`].
/// Header rows are not interpreted here; endpoints that have one skip it themselves
#[cfg(feature = "hiscores")]
#[tracing::instrument(level = "trace")]
pub fn fetch_csv(url: &str) -> Result<Option<Vec<csv::StringRecord>>, Error> {
    tracing::trace!("Fetching web-services CSV");

    let response = minreq::get(url)
        .with_timeout(*crate::REQUESTS_TIMEOUT)
        .send()
        .map_err(|source| Error::Transport {
            url: url.to_string(),
            source
        })?;

    match response.status_code {
        code if code >= 200 && code <= 299 => {
            let body = response.as_bytes();

            if is_blank(body) {
                return Ok(None);
            }

            let mut reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .trim(csv::Trim::All)
                .from_reader(body);

            let records = reader.records()
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| Error::Decode {
                    url: url.to_string(),
                    source: source.into()
                })?;

            Ok(Some(records))
        }

        404 => Ok(None),

        status => Err(Error::UnexpectedStatus {
            url: url.to_string(),
            status
        })
    }
}
