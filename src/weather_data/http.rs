use crate::types::period::FetchPeriod;
use crate::weather_data::error::FetchError;
use log::{debug, warn};

/// A fully built GET request for one period of archive data.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub period: FetchPeriod,
    pub url: String,
    pub query: Vec<(&'static str, String)>,
}

impl ApiRequest {
    pub fn new(period: FetchPeriod, url: impl Into<String>) -> Self {
        Self {
            period,
            url: url.into(),
            query: Vec::new(),
        }
    }

    pub fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Looks up a query parameter by name.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// The HTTP handle used by [`crate::WeatherFetcher`].
///
/// Implementations return the raw response body of a successful (2xx) response. The production
/// implementation is [`reqwest::blocking::Client`]; tests substitute canned responses.
pub trait HttpGet {
    fn get(&self, request: &ApiRequest) -> Result<String, FetchError>;
}

impl HttpGet for reqwest::blocking::Client {
    fn get(&self, request: &ApiRequest) -> Result<String, FetchError> {
        let period = request.period;
        debug!("GET {} {:?}", request.url, request.query);

        let response = reqwest::blocking::Client::get(self, &request.url)
            .query(&request.query)
            .send()
            .map_err(|e| FetchError::NetworkRequest {
                period,
                url: request.url.clone(),
                source: e,
            })?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {} ({}): {:?}", period, request.url, e);
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        period,
                        url: request.url.clone(),
                        status,
                        source: e,
                    }
                } else {
                    FetchError::NetworkRequest {
                        period,
                        url: request.url.clone(),
                        source: e,
                    }
                });
            }
        };

        response
            .text()
            .map_err(|e| FetchError::ResponseBody { period, source: e })
    }
}

impl<T: HttpGet + ?Sized> HttpGet for &T {
    fn get(&self, request: &ApiRequest) -> Result<String, FetchError> {
        (**self).get(request)
    }
}
