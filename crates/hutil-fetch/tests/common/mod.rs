#![allow(dead_code)]

use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

use bytes::Bytes;
use futures_util::{StreamExt, stream};
use hutil_fetch::{HttpClient, Response};

#[derive(Debug)]
pub struct MockError(pub String);

impl fmt::Display for MockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for MockError {}

#[derive(Clone, Default)]
pub struct Route {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    /// `Err` items become body errors.
    pub chunks: Vec<Result<&'static [u8], &'static str>>,
    /// Never finish the body after the listed chunks.
    pub stall: bool,
}

impl Route {
    pub fn ok(body: &'static [u8]) -> Self {
        Self {
            status: 200,
            chunks: vec![Ok(body)],
            ..Self::default()
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    pub fn chunks(mut self, chunks: Vec<Result<&'static [u8], &'static str>>) -> Self {
        self.chunks = chunks;
        self
    }

    pub fn stalled(mut self) -> Self {
        self.stall = true;
        self
    }
}

/// In-memory client serving fixed routes and recording every request.
#[derive(Default)]
pub struct MockClient {
    routes: HashMap<String, Route>,
    pub requests: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, url: &str, route: Route) -> Self {
        self.routes.insert(url.to_owned(), route);
        self
    }

    pub fn request_headers(&self, url: &str) -> Vec<(String, String)> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u == url)
            .map(|(_, h)| h.clone())
            .unwrap_or_default()
    }
}

impl HttpClient for MockClient {
    type Error = MockError;

    async fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> Result<Response<Self::Error>, Self::Error> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_owned(), headers.to_vec()));

        let route = self
            .routes
            .get(url)
            .cloned()
            .ok_or_else(|| MockError(format!("connection refused: {url}")))?;

        let items: Vec<Result<Bytes, MockError>> = route
            .chunks
            .into_iter()
            .map(|c| {
                c.map(Bytes::from_static)
                    .map_err(|e| MockError(e.to_owned()))
            })
            .collect();
        let body = stream::iter(items);
        let body = if route.stall {
            body.chain(stream::pending()).boxed()
        } else {
            body.boxed()
        };

        Ok(Response {
            status: route.status,
            headers: route.headers,
            body,
        })
    }
}

pub fn entries(dir: &std::path::Path) -> Vec<std::path::PathBuf> {
    let mut found: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    found.sort();
    found
}
