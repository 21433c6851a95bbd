//! Blocking HTTP transport backed by `reqwest`.
//!
//! Every request carries the configured timeout, so a dead station can
//! stall the control loop for at most two timeouts per poll (primary plus
//! fallback).

use std::time::Duration;

use crate::app::ports::{HttpTransport, TransportError};
use crate::error::{Error, Result};

pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|_| Error::Init("HTTP client"))?;
        Ok(Self { client })
    }
}

/// Map a failed `send()`.  Status codes never arrive here; they are
/// checked on the response.
fn send_error(e: &reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Unreachable
    }
}

fn check_status(resp: &reqwest::blocking::Response) -> core::result::Result<(), TransportError> {
    let status = resp.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(TransportError::Status(status.as_u16()))
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&mut self, url: &str) -> core::result::Result<String, TransportError> {
        let resp = self.client.get(url).send().map_err(|e| send_error(&e))?;
        check_status(&resp)?;
        resp.text().map_err(|_| TransportError::Body)
    }

    fn post(&mut self, url: &str, body: Option<&str>) -> core::result::Result<(), TransportError> {
        let mut req = self.client.post(url);
        if let Some(body) = body {
            req = req
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body.to_owned());
        }
        let resp = req.send().map_err(|e| send_error(&e))?;
        check_status(&resp)
    }
}
