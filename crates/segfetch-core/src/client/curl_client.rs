//! libcurl-backed `RangeFetch`.

use super::{CurlOptions, FetchRequest, RangeFetch};
use crate::error::FetchError;
use std::cell::Cell;

/// Blocking GET client on a fresh curl Easy handle per request.
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
#[derive(Debug, Clone, Default)]
pub struct CurlClient {
    opts: CurlOptions,
}

impl CurlClient {
    pub fn new(opts: CurlOptions) -> Self {
        CurlClient { opts }
    }

    fn configure(&self, easy: &mut curl::easy::Easy, request: &FetchRequest) -> Result<(), curl::Error> {
        easy.url(&request.url)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.opts.max_redirections)?;
        easy.connect_timeout(self.opts.connect_timeout)?;
        easy.low_speed_limit(self.opts.low_speed_limit)?;
        easy.low_speed_time(self.opts.low_speed_time)?;
        easy.timeout(self.opts.timeout)?;
        if let Some(ua) = &self.opts.user_agent {
            easy.useragent(ua)?;
        }
        // Range: curl expects "start-end" (inclusive), not "bytes=start-end"
        if let Some(range) = request.range {
            easy.range(&range.curl_value())?;
        }

        let mut list = curl::easy::List::new();
        for (k, v) in &self.opts.headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        if !self.opts.headers.is_empty() {
            easy.http_headers(list)?;
        }
        Ok(())
    }
}

impl RangeFetch for CurlClient {
    fn get(&mut self, request: &FetchRequest) -> Result<Vec<u8>, FetchError> {
        let transport = |source: curl::Error| FetchError::Transport {
            url: request.url.clone(),
            source,
        };

        let mut easy = curl::easy::Easy::new();
        self.configure(&mut easy, request).map_err(transport)?;

        let mut body: Vec<u8> = Vec::new();
        let capped = Cell::new(false);
        let performed = {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    let room = match request.limit {
                        Some(limit) => limit.saturating_sub(body.len() as u64).min(data.len() as u64) as usize,
                        None => data.len(),
                    };
                    body.extend_from_slice(&data[..room]);
                    if room < data.len() {
                        // Keep-cap reached: abort the transfer, the body is complete.
                        capped.set(true);
                        return Ok(0);
                    }
                    Ok(data.len())
                })
                .map_err(transport)?;
            transfer.perform()
        };
        if let Err(e) = performed {
            if !(e.is_write_error() && capped.get()) {
                return Err(transport(e));
            }
        }

        let status = easy.response_code().map_err(transport)?;
        if !(200..300).contains(&status) {
            return Err(FetchError::Http {
                url: request.url.clone(),
                status,
            });
        }

        // A 200 to a range past byte 0 carries the resource from its start.
        if let Some(range) = request.range {
            if status == 200 && range.start > 0 {
                return Err(FetchError::RangeNotHonored {
                    url: request.url.clone(),
                    range: range.header_value(),
                });
            }
        }

        tracing::trace!(
            url = %request.url,
            status,
            bytes = body.len(),
            capped = capped.get(),
            "GET complete"
        );
        Ok(body)
    }
}
