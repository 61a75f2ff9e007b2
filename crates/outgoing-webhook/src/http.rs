//! HTTP transport seam.
//!
//! The dispatch logic talks to a [`HttpClient`] trait so tests can record
//! requests and script responses; [`UreqClient`] is the real transport.

use std::io::Read;

use http::{Request, Response as RawResponse};
use thiserror::Error;
use ureq::{Body, agent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

/// Transport-level failure: the request never produced an HTTP status.
#[derive(Debug, Clone, Error)]
#[error("{code}: {message}")]
pub struct TransportError {
    pub code: String,
    pub message: String,
}

pub trait HttpClient {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Blocking transport backed by a ureq agent.
#[derive(Debug, Default, Clone, Copy)]
pub struct UreqClient;

impl HttpClient for UreqClient {
    fn send(&self, req: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let agent = agent();
        let mut builder = Request::builder().method(req.method.as_str()).uri(&req.url);
        for (name, value) in &req.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let body_bytes = req.body.clone().unwrap_or_default();
        let request = builder.body(body_bytes).map_err(|err| TransportError {
            code: "http_request_build".into(),
            message: err.to_string(),
        })?;
        match agent.run(request) {
            Ok(resp) => build_response(resp),
            Err(err) => Err(TransportError {
                code: "http_transport_error".into(),
                message: err.to_string(),
            }),
        }
    }
}

fn build_response(resp: RawResponse<Body>) -> Result<HttpResponse, TransportError> {
    let status = resp.status();
    let headers = resp
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    let mut reader = resp.into_body().into_reader();
    let mut body = Vec::new();
    reader.read_to_end(&mut body).map_err(|err| TransportError {
        code: "http_read_error".into(),
        message: err.to_string(),
    })?;
    Ok(HttpResponse {
        status: status.as_u16(),
        headers,
        body: Some(body),
    })
}
