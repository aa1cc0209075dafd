use crate::core::DayFetcher;
use crate::domain::model::{DaySlot, RawResponse};
use crate::utils::encoding::decode_latin1;
use crate::utils::error::{EtlError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Fetches one day of CSV water levels from the DMI vandstand servlet.
pub struct HttpDayFetcher {
    client: Client,
    base_url: Url,
}

impl HttpDayFetcher {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| EtlError::InvalidConfigValueError {
            field: "base_url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url })
    }

    /// `<base>?type=Vandstand&pres=csv&stat=<station>&date=<YYYYMMDD>`
    pub fn request_url(&self, station: &str, slot: &DaySlot) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("type", "Vandstand")
            .append_pair("pres", "csv")
            .append_pair("stat", station)
            .append_pair("date", &slot.compact());
        url
    }
}

#[async_trait]
impl DayFetcher for HttpDayFetcher {
    async fn fetch_day(&self, station: &str, slot: &DaySlot) -> Result<RawResponse> {
        let url = self.request_url(station, slot);

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(EtlError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;

        Ok(RawResponse {
            slot: *slot,
            body: decode_latin1(&bytes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BASE_URL;
    use chrono::NaiveDate;
    use httpmock::prelude::*;

    fn slot() -> DaySlot {
        DaySlot::new(NaiveDate::from_ymd_opt(2017, 1, 5).unwrap())
    }

    #[test]
    fn test_request_url() {
        let fetcher = HttpDayFetcher::new(DEFAULT_BASE_URL, Duration::from_secs(30)).unwrap();
        assert_eq!(
            fetcher.request_url("20303", &slot()).as_str(),
            "http://servlet.dmi.dk/vandstand/servlet/ImageServlet?type=Vandstand&pres=csv&stat=20303&date=20170105"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = HttpDayFetcher::new("not a url", Duration::from_secs(30));
        assert!(matches!(
            result,
            Err(EtlError::InvalidConfigValueError { .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_decodes_latin1_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/ImageServlet")
                .query_param("type", "Vandstand")
                .query_param("pres", "csv")
                .query_param("stat", "20303")
                .query_param("date", "20170105");
            then.status(200)
                .header("Content-Type", "text/plain; charset=ISO-8859-1")
                .body(b"5. januar 2017,20303 Aalborg \xd8st II\r\n00:00,60\r\n".to_vec());
        });

        let fetcher =
            HttpDayFetcher::new(&server.url("/ImageServlet"), Duration::from_secs(5)).unwrap();
        let response = fetcher.fetch_day("20303", &slot()).await.unwrap();

        api_mock.assert();
        assert_eq!(response.slot, slot());
        assert_eq!(
            response.body,
            "5. januar 2017,20303 Aalborg Øst II\r\n00:00,60\r\n"
        );
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/ImageServlet");
            then.status(503);
        });

        let fetcher =
            HttpDayFetcher::new(&server.url("/ImageServlet"), Duration::from_secs(5)).unwrap();
        let result = fetcher.fetch_day("20303", &slot()).await;

        api_mock.assert();
        match result {
            Err(EtlError::HttpStatus { status, url }) => {
                assert_eq!(status, 503);
                assert!(url.contains("date=20170105"));
            }
            other => panic!("expected HTTP status error, got {other:?}"),
        }
    }
}
