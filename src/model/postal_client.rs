//! Postal lookup API client
//!
//! The provider answers `GET {endpoint}{pincode}` with a JSON array whose
//! first element carries `Status`, `Message` and `PostOffice`.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use super::content::PostOfficeRecord;
use super::error::LookupError;
use super::types::LookupQuery;

pub const DEFAULT_ENDPOINT: &str = "https://api.postalpincode.in/pincode/";
const USER_AGENT: &str = concat!("pincode-lookup/", env!("CARGO_PKG_VERSION"));
const STATUS_SUCCESS: &str = "Success";

/// Source of post office records for a pincode
#[async_trait]
pub trait PostalProvider: Send + Sync {
    async fn lookup(&self, query: &LookupQuery) -> Result<Vec<PostOfficeRecord>, LookupError>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct LookupResponseDto {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    post_office: Option<Vec<PostOfficeDto>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PostOfficeDto {
    name: String,
    pincode: String,
    district: String,
    state: String,
    #[serde(default)]
    branch_type: Option<String>,
    #[serde(default)]
    delivery_status: Option<String>,
    #[serde(default)]
    division: Option<String>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    circle: Option<String>,
    #[serde(default)]
    block: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

impl From<PostOfficeDto> for PostOfficeRecord {
    fn from(dto: PostOfficeDto) -> Self {
        Self {
            name: dto.name,
            pincode: dto.pincode,
            district: dto.district,
            state: dto.state,
            branch_type: dto.branch_type,
            delivery_status: dto.delivery_status,
            division: dto.division,
            region: dto.region,
            circle: dto.circle,
            block: dto.block,
            country: dto.country,
        }
    }
}

/// reqwest-backed provider. No timeout is set; the client defaults apply.
#[derive(Clone)]
pub struct PostalClient {
    client: Client,
    endpoint: Url,
}

impl PostalClient {
    pub fn new(endpoint: Url) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn url_for(&self, query: &LookupQuery) -> Result<Url, LookupError> {
        self.endpoint
            .join(query.as_str())
            .map_err(|e| LookupError::Decode {
                reason: format!("cannot build request url: {e}"),
            })
    }
}

#[async_trait]
impl PostalProvider for PostalClient {
    async fn lookup(&self, query: &LookupQuery) -> Result<Vec<PostOfficeRecord>, LookupError> {
        let url = self.url_for(query)?;
        tracing::debug!(pincode = %query, %url, "API request started");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;

        parse_lookup_response(&body)
    }
}

/// Classify a raw provider body into records or a provider error.
fn parse_lookup_response(body: &[u8]) -> Result<Vec<PostOfficeRecord>, LookupError> {
    let entries: Vec<LookupResponseDto> =
        serde_json::from_slice(body).map_err(|e| LookupError::Decode {
            reason: format!("invalid JSON payload: {e}"),
        })?;

    let first = entries.into_iter().next().ok_or_else(|| LookupError::Decode {
        reason: "response array is empty".to_string(),
    })?;

    if first.status != STATUS_SUCCESS {
        return Err(LookupError::Provider {
            message: first.message.unwrap_or_default(),
        });
    }

    Ok(first
        .post_office
        .unwrap_or_default()
        .into_iter()
        .map(PostOfficeRecord::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn success_body() -> serde_json::Value {
        json!([{
            "Message": "Number of pincode(s) found:3",
            "Status": "Success",
            "PostOffice": [
                {
                    "Name": "Baroda House",
                    "Description": null,
                    "BranchType": "Sub Post Office",
                    "DeliveryStatus": "Non-Delivery",
                    "Circle": "Delhi",
                    "District": "Central Delhi",
                    "Division": "New Delhi Central",
                    "Region": "Delhi",
                    "Block": "New Delhi",
                    "State": "Delhi",
                    "Country": "India",
                    "Pincode": "110001"
                },
                {
                    "Name": "Connaught Place",
                    "District": "Central Delhi",
                    "State": "Delhi",
                    "Pincode": "110001"
                },
                {
                    "Name": "Janpath",
                    "District": "New Delhi",
                    "State": "Delhi",
                    "Pincode": "110001"
                }
            ]
        }])
    }

    async fn client_for(server: &MockServer) -> PostalClient {
        let endpoint = Url::parse(&format!("{}/pincode/", server.uri())).unwrap();
        PostalClient::new(endpoint).unwrap()
    }

    #[test]
    fn parses_success_in_provider_order() {
        let body = serde_json::to_vec(&success_body()).unwrap();
        let records = parse_lookup_response(&body).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Baroda House", "Connaught Place", "Janpath"]);
        assert_eq!(records[0].branch_type.as_deref(), Some("Sub Post Office"));
        assert_eq!(records[0].block.as_deref(), Some("New Delhi"));
        assert_eq!(records[0].country.as_deref(), Some("India"));
        assert_eq!(records[1].branch_type, None);
        assert_eq!(records[1].country, None);
    }

    #[test]
    fn provider_error_carries_message() {
        let body = br#"[{"Message":"No records found","Status":"Error","PostOffice":null}]"#;
        match parse_lookup_response(body) {
            Err(LookupError::Provider { message }) => assert_eq!(message, "No records found"),
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[test]
    fn success_without_post_offices_is_empty() {
        let body = br#"[{"Message":"","Status":"Success","PostOffice":null}]"#;
        assert!(parse_lookup_response(body).unwrap().is_empty());
    }

    #[test]
    fn malformed_bodies_are_decode_errors() {
        let bodies: [&[u8]; 3] = [b"[]", b"not json", br#"{"Status":"Success"}"#];
        for body in bodies {
            let err = parse_lookup_response(body).unwrap_err();
            assert!(err.is_transport(), "{err:?}");
        }
    }

    #[tokio::test]
    async fn fetches_records_from_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pincode/110001"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let query = LookupQuery::parse("110001").unwrap();
        let records = client.lookup(&query).await.unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].name, "Connaught Place");
    }

    #[tokio::test]
    async fn provider_error_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pincode/000000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "Message": "No records found",
                "Status": "Error",
                "PostOffice": null
            }])))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client
            .lookup(&LookupQuery::parse("000000").unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "No records found");
    }

    #[tokio::test]
    async fn server_failure_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client
            .lookup(&LookupQuery::parse("110001").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::Transport { .. }), "{err:?}");
    }

    #[tokio::test]
    async fn unreachable_host_is_transport_error() {
        let server = MockServer::start().await;
        let endpoint = Url::parse(&format!("{}/pincode/", server.uri())).unwrap();
        drop(server);

        let client = PostalClient::new(endpoint).unwrap();
        let err = client
            .lookup(&LookupQuery::parse("110001").unwrap())
            .await
            .unwrap_err();
        assert!(err.is_transport(), "{err:?}");
    }
}
