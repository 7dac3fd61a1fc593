//! `Transport` backed by reqwest.

use std::{future::Future, time::Duration};

use expense_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};

use crate::Error;

/// Executes requests over the network with a shared `reqwest::Client`.
///
/// Non-2xx responses come back as data; only failures to get a response at
/// all (DNS, refused connection, timeout) become `ApiError::Transport`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;
        Ok(Self { client })
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

impl Transport for ReqwestTransport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &request.path);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        async move {
            let response = builder
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;

            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|value| (name.as_str().to_string(), value.to_string()))
                })
                .collect();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;

            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        }
    }
}
