//! Reverse geocoding over the OpenStreetMap Nominatim API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::Geocoder;
use crate::models::{AddressCandidate, Coordinates};
use crate::util::{compact_text, is_http_url};
use crate::{Error, Result};

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

const USER_AGENT: &str = concat!("balagh/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    base_url: String,
    client: Client,
}

impl NominatimGeocoder {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = base_url.as_ref().trim().trim_end_matches('/').to_string();
        if !is_http_url(&base_url) {
            return Err(Error::InvalidInput(
                "Geocoder URL must include http:// or https://".to_string(),
            ));
        }

        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { base_url, client })
    }

    pub fn public() -> Result<Self> {
        Self::new(DEFAULT_NOMINATIM_URL)
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn reverse_geocode(&self, coordinates: Coordinates) -> Result<Vec<AddressCandidate>> {
        let response = self
            .client
            .get(format!("{}/reverse", self.base_url))
            .query(&[
                ("format", "jsonv2".to_string()),
                ("lat", coordinates.latitude.to_string()),
                ("lon", coordinates.longitude.to_string()),
            ])
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Device(format!(
                "Reverse geocoding failed with HTTP {status}: {}",
                compact_text(&body)
            )));
        }

        let payload = response.json::<ReverseResponse>().await?;
        Ok(payload.into_candidates())
    }
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: Option<NominatimAddress>,
    /// Set instead of `address` when nothing is found at the coordinates.
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct NominatimAddress {
    road: Option<String>,
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    state: Option<String>,
    country: Option<String>,
}

impl ReverseResponse {
    fn into_candidates(self) -> Vec<AddressCandidate> {
        if let Some(reason) = self.error {
            tracing::debug!("Reverse geocoding returned no match: {}", reason);
            return Vec::new();
        }

        self.address
            .map(|address| AddressCandidate {
                street: address.road,
                city: address.city.or(address.town).or(address.village),
                region: address.state,
                country: address.country,
            })
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    /// Answer one request with `body` after `delay`, returning the base URL.
    async fn serve_once(body: &'static str, delay: Duration) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0_u8; 1024];
            while !request.windows(4).any(|window| window == b"\r\n\r\n") {
                let read = socket.read(&mut chunk).await.unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..read]);
            }
            tokio::time::sleep(delay).await;
            let response = format!(
                "HTTP/1.1 200 OK\r\n\
                 content-type: application/json\r\n\
                 content-length: {}\r\n\
                 connection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });
        format!("http://{address}")
    }

    #[tokio::test(start_paused = true)]
    async fn slow_response_is_awaited_without_client_timeout() {
        let base_url = serve_once(
            r#"{"address": {"road": "Rue de Marrakech", "city": "Oujda"}}"#,
            Duration::from_secs(60),
        )
        .await;

        let candidates = NominatimGeocoder::new(base_url)
            .unwrap()
            .reverse_geocode(Coordinates::new(34.68, -1.91))
            .await
            .unwrap();
        assert_eq!(candidates[0].street.as_deref(), Some("Rue de Marrakech"));
        assert_eq!(candidates[0].city.as_deref(), Some("Oujda"));
    }

    #[test]
    fn maps_address_fields_to_candidate() {
        let payload = r#"{
            "display_name": "Boulevard Mohammed V, Oujda, Oriental, Morocco",
            "address": {
                "road": "Boulevard Mohammed V",
                "town": "Oujda",
                "state": "Oriental",
                "country": "Morocco",
                "country_code": "ma"
            }
        }"#;

        let response: ReverseResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(
            response.into_candidates(),
            vec![AddressCandidate {
                street: Some("Boulevard Mohammed V".to_string()),
                city: Some("Oujda".to_string()),
                region: Some("Oriental".to_string()),
                country: Some("Morocco".to_string()),
            }]
        );
    }

    #[test]
    fn unable_to_geocode_yields_no_candidates() {
        let response: ReverseResponse =
            serde_json::from_str(r#"{"error": "Unable to geocode"}"#).unwrap();
        assert!(response.into_candidates().is_empty());
    }

    #[test]
    fn new_rejects_url_without_scheme() {
        assert!(NominatimGeocoder::new("nominatim.openstreetmap.org").is_err());
        assert_eq!(
            NominatimGeocoder::new("https://geo.example.com/").unwrap().base_url,
            "https://geo.example.com"
        );
    }
}
