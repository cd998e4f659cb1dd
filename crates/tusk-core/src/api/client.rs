use reqwest::Client;
use tokio::sync::RwLock;
use url::Url;

use crate::api::{
    ClientError, Endpoint, MastodonApiTarget, PageRequest, Paged, PagedResult,
    page_info_from_headers,
};
use crate::http::{HttpClient, HttpResponse};

pub struct MastodonApiClient {
    http: HttpClient,
    instance_url: Url,
    access_token: RwLock<Option<String>>,
}

impl MastodonApiClient {
    pub fn new(http: Client, instance_url: Url) -> Self {
        Self {
            http: HttpClient::new(http),
            instance_url,
            access_token: RwLock::new(None),
        }
    }

    pub fn with_access_token(self, access_token: impl Into<String>) -> Self {
        Self {
            access_token: RwLock::new(Some(access_token.into())),
            ..self
        }
    }

    pub fn instance_url(&self) -> &Url {
        &self.instance_url
    }

    pub async fn access_token(&self) -> Option<String> {
        self.access_token.read().await.clone()
    }

    /// Replaces the credential used by calls started after this returns.
    pub async fn set_access_token(&self, access_token: Option<String>) {
        *self.access_token.write().await = access_token;
    }

    pub async fn request<E: Endpoint>(&self, endpoint: &E) -> Result<E::Result, ClientError> {
        let response = self.send(endpoint).await?;
        Ok(response.decode()?)
    }

    /// Fetches one page. The single buffered response is decoded as the
    /// endpoint's result and scanned for `Link` cursors.
    pub async fn paged_request<E: Endpoint>(
        &self,
        endpoint: &E,
        page: PageRequest,
    ) -> Result<PagedResult<E::Result>, ClientError> {
        let paged = Paged::new(endpoint, page);
        let response = self.send(&paged).await?;

        let result = response.decode()?;
        let info = page_info_from_headers(&response.headers);

        Ok(PagedResult { result, info })
    }

    async fn send<E: Endpoint>(&self, endpoint: &E) -> Result<HttpResponse, ClientError> {
        let access_token = self.access_token.read().await.clone();
        let target = MastodonApiTarget::new(&self.instance_url, endpoint, access_token);

        self.http
            .send(&target)
            .await
            .map_err(ClientError::from_transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AccountEndpoint, ApiError, PageInfo, StatusesEndpoint, Timeline};
    use crate::http::HttpError;
    use reqwest::StatusCode;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn make_client(server: &MockServer) -> MastodonApiClient {
        MastodonApiClient::new(Client::new(), Url::parse(&server.uri()).unwrap())
            .with_access_token("token")
    }

    fn status_json(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "uri": format!("https://example.social/users/alice/statuses/{id}"),
            "created_at": "2020-09-01T12:00:00.000Z",
            "account": {
                "id": "1",
                "username": "alice",
                "acct": "alice",
                "display_name": "Alice",
                "url": "https://example.social/@alice",
                "created_at": "2019-01-01T00:00:00.000Z"
            },
            "content": "<p>hello</p>",
            "visibility": "public",
            "sensitive": false,
            "spoiler_text": ""
        })
    }

    #[tokio::test]
    async fn request_decodes_result_with_bearer_token() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/accounts/verify_credentials"))
            .and(header("authorization", "Bearer token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "1",
                "username": "alice",
                "acct": "alice",
                "display_name": "Alice",
                "url": "https://example.social/@alice",
                "created_at": "2019-01-01T00:00:00.000Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server);
        let account = client
            .request(&AccountEndpoint::VerifyCredentials)
            .await
            .expect("account loads");

        assert_eq!(account.username, "alice");
    }

    #[tokio::test]
    async fn identity_refresh_endpoints_decode() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/instance"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "uri": "example.social",
                "title": "Example",
                "version": "3.2.0"
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v1/filters"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "1", "phrase": "spoiler", "context": ["home"] }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v1/preferences"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "posting:default:visibility": "private"
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v1/custom_emojis"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "shortcode": "party",
                    "url": "https://files.example.social/party.gif",
                    "static_url": "https://files.example.social/party.png",
                    "category": "Fun"
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server);

        let instance = client
            .request(&crate::api::InstanceEndpoint::Instance)
            .await
            .expect("instance loads");
        assert_eq!(instance.title, "Example");

        let filters = client
            .request(&crate::api::FiltersEndpoint::Filters)
            .await
            .expect("filters load");
        assert_eq!(filters[0].phrase, "spoiler");

        let preferences = client
            .request(&crate::api::PreferencesEndpoint::Preferences)
            .await
            .expect("preferences load");
        assert_eq!(
            preferences.posting_default_visibility,
            crate::entities::Visibility::Private
        );

        let emojis = client
            .request(&crate::api::CustomEmojiEndpoint::CustomEmojis)
            .await
            .expect("emojis load");
        assert!(emojis[0].visible_in_picker);
        assert_eq!(emojis[0].category.as_deref(), Some("Fun"));
    }

    #[tokio::test]
    async fn unusable_token_fails_instead_of_sending_anonymously() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/lists"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let client = MastodonApiClient::new(Client::new(), Url::parse(&server.uri()).unwrap())
            .with_access_token("tok\nen");

        let err = client
            .request(&crate::api::ListsEndpoint::Lists)
            .await
            .expect_err("invalid token should fail");

        assert!(matches!(err, ClientError::Http(HttpError::InvalidHeader(_))));
    }

    #[tokio::test]
    async fn anonymous_client_sends_no_authorization() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/timelines/public"))
            .respond_with(|request: &Request| {
                if request.headers.contains_key("authorization") {
                    ResponseTemplate::new(400)
                } else {
                    ResponseTemplate::new(200).set_body_json(json!([]))
                }
            })
            .expect(1)
            .mount(&server)
            .await;

        let client = MastodonApiClient::new(Client::new(), Url::parse(&server.uri()).unwrap());
        let statuses = client
            .request(&StatusesEndpoint::Timeline(Timeline::Federated))
            .await
            .expect("anonymous request succeeds");

        assert!(statuses.is_empty());
    }

    #[tokio::test]
    async fn credential_changes_apply_to_later_calls() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/lists"))
            .and(header("authorization", "Bearer second"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server);
        client.set_access_token(Some("second".into())).await;
        assert_eq!(client.access_token().await.as_deref(), Some("second"));

        let lists = client
            .request(&crate::api::ListsEndpoint::Lists)
            .await
            .expect("lists load");
        assert!(lists.is_empty());
    }

    #[tokio::test]
    async fn structured_api_error_replaces_status_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/accounts/verify_credentials"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({ "error": "The access token is invalid" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server);
        let err = client
            .request(&AccountEndpoint::VerifyCredentials)
            .await
            .expect_err("401 should fail");

        match err {
            ClientError::Api(api) => assert_eq!(
                api,
                ApiError {
                    error: "The access token is invalid".into(),
                    error_description: None,
                }
            ),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn unrecognised_error_body_keeps_transport_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/accounts/verify_credentials"))
            .respond_with(ResponseTemplate::new(502).set_body_string("upstream down"))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server);
        let err = client
            .request(&AccountEndpoint::VerifyCredentials)
            .await
            .expect_err("502 should fail");

        match err {
            ClientError::Http(HttpError::InvalidStatusCode { status, body }) => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
                assert_eq!(body, "upstream down");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn failures_are_not_retried() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/timelines/home"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server);
        let result = client
            .paged_request(
                &StatusesEndpoint::Timeline(Timeline::Home),
                PageRequest::default(),
            )
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn paged_request_combines_body_and_cursors_in_one_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/timelines/home"))
            .and(query_param("max_id", "10"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header(
                        "link",
                        concat!(
                            r#"<https://example.social/api/v1/timelines/home?max_id=8>; rel="next", "#,
                            r#"<https://example.social/api/v1/timelines/home?min_id=9>; rel="prev""#
                        ),
                    )
                    .set_body_json(json!([status_json("9"), status_json("8")])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server);
        let page = client
            .paged_request(
                &StatusesEndpoint::Timeline(Timeline::Home),
                PageRequest::older_than("10"),
            )
            .await
            .expect("page loads");

        assert_eq!(page.result.len(), 2);
        assert_eq!(page.result[0].id, "9");
        assert_eq!(
            page.info,
            PageInfo {
                max_id: Some("8".into()),
                min_id: Some("9".into()),
                since_id: None,
            }
        );

        let requests = server.received_requests().await.expect("recording enabled");
        assert_eq!(requests.len(), 1);
        let query = requests[0].url.query().unwrap_or_default();
        assert_eq!(query, "max_id=10");
    }

    #[tokio::test]
    async fn missing_link_header_yields_empty_info() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/timelines/home"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([status_json("1")])))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server);
        let page = client
            .paged_request(
                &StatusesEndpoint::Timeline(Timeline::Home),
                PageRequest::default(),
            )
            .await
            .expect("page loads");

        assert_eq!(page.result.len(), 1);
        assert!(page.info.is_empty());
    }

    #[tokio::test]
    async fn malformed_link_header_does_not_fail_the_page() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/timelines/home"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("link", "<::garbage::>; rel=")
                    .set_body_json(json!([])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server);
        let page = client
            .paged_request(
                &StatusesEndpoint::Timeline(Timeline::Home),
                PageRequest::default(),
            )
            .await
            .expect("page loads");

        assert!(page.info.is_empty());
    }

    #[tokio::test]
    async fn body_decode_failure_fails_the_page() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/timelines/home"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("link", r#"<https://example.social/x?max_id=1>; rel="next""#)
                    .set_body_json(json!({ "not": "a list" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server);
        let err = client
            .paged_request(
                &StatusesEndpoint::Timeline(Timeline::Home),
                PageRequest::default(),
            )
            .await
            .expect_err("decode should fail");

        assert!(matches!(err, ClientError::Http(HttpError::Decode(_))));
    }
}
