use asista_application::TokenStore;
use asista_core::{ClientError, ClientResult};
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

/// Shared REST plumbing for every HTTP gateway.
///
/// Joins paths against the configured base URL, attaches the stored
/// bearer credential, and funnels every response through one error
/// mapper so all gateways surface the same failure taxonomy.
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base: Url,
    tokens: TokenStore,
}

impl RestClient {
    /// Creates a client rooted at the given base URL.
    ///
    /// A missing trailing slash on the base would make `Url::join`
    /// drop the last path segment, so one is appended here.
    #[must_use]
    pub fn new(http: reqwest::Client, mut base: Url, tokens: TokenStore) -> Self {
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        Self { http, base, tokens }
    }

    /// Starts a request for a path relative to the base URL, with the
    /// stored credential attached when one exists.
    pub fn request(&self, method: Method, path: &str) -> ClientResult<RequestBuilder> {
        let url = self
            .base
            .join(path)
            .map_err(|error| ClientError::Unexpected(format!("invalid endpoint '{path}': {error}")))?;

        let mut builder = self.http.request(method, url);
        if let Some(credential) = self.tokens.credential() {
            builder = builder.bearer_auth(credential);
        }
        Ok(builder)
    }

    /// GET a JSON payload.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.execute(self.request(Method::GET, path)?).await
    }

    /// GET a JSON payload with query parameters.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        self.execute(self.request(Method::GET, path)?.query(query))
            .await
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.execute(self.request(Method::POST, path)?.json(body))
            .await
    }

    /// POST a JSON body, ignoring the response payload.
    pub async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<()> {
        self.execute_unit(self.request(Method::POST, path)?.json(body))
            .await
    }

    /// PUT a JSON body and decode the JSON response.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.execute(self.request(Method::PUT, path)?.json(body))
            .await
    }

    /// PUT with query parameters and no body, decoding the response.
    pub async fn put_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        self.execute(self.request(Method::PUT, path)?.query(query))
            .await
    }

    /// PATCH a JSON body, ignoring the response payload.
    pub async fn patch_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<()> {
        self.execute_unit(self.request(Method::PATCH, path)?.json(body))
            .await
    }

    /// DELETE, ignoring the response payload.
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        self.execute_unit(self.request(Method::DELETE, path)?)
            .await
    }

    /// Sends an already-built request and decodes the JSON response.
    pub async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<T> {
        let body = self.read_body(builder).await?;
        serde_json::from_str(&body)
            .map_err(|error| ClientError::Unexpected(format!("undecodable response: {error}")))
    }

    /// Sends an already-built request, discarding any response body.
    pub async fn execute_unit(&self, builder: RequestBuilder) -> ClientResult<()> {
        self.read_body(builder).await.map(|_| ())
    }

    async fn read_body(&self, builder: RequestBuilder) -> ClientResult<String> {
        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = read_text(response).await?;

        if !(200..300).contains(&status) {
            return Err(map_error(status, &body));
        }
        Ok(body)
    }
}

async fn read_text(response: Response) -> ClientResult<String> {
    response.text().await.map_err(transport_error)
}

fn transport_error(error: reqwest::Error) -> ClientError {
    ClientError::Transport(error.to_string())
}

fn looks_like_html(body: &str) -> bool {
    let trimmed = body.trim_start();
    trimmed.starts_with("<!DOCTYPE") || trimmed.starts_with("<html")
}

#[derive(serde::Deserialize)]
struct WireFailure {
    #[serde(default)]
    field: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Maps a non-success HTTP status and body to the client failure
/// taxonomy.
///
/// An HTML error body wins over the status: it signals a web server
/// answering in place of the backend, whatever status it picked.
/// Success bodies are never sniffed.
pub(crate) fn map_error(status: u16, body: &str) -> ClientError {
    if looks_like_html(body) {
        return ClientError::BackendUnavailable;
    }

    match status {
        401 => ClientError::InvalidCredentials,
        403 => ClientError::PermissionDenied,
        400 => match serde_json::from_str::<WireFailure>(body) {
            Ok(failure) => ClientError::Validation {
                field: failure.field,
                message: failure
                    .message
                    .unwrap_or_else(|| "request rejected by backend validation".to_owned()),
            },
            Err(_) => ClientError::validation("request rejected by backend validation"),
        },
        404 => {
            let detail = serde_json::from_str::<WireFailure>(body)
                .ok()
                .and_then(|failure| failure.message)
                .unwrap_or_else(|| "resource not found".to_owned());
            ClientError::NotFound(detail)
        }
        504 => ClientError::Transport("gateway timeout".to_owned()),
        500..=599 => ClientError::Server(status),
        other => ClientError::Unexpected(format!("unhandled status {other}")),
    }
}

#[cfg(test)]
mod tests {
    use asista_core::ClientError;

    use super::{looks_like_html, map_error};

    #[test]
    fn html_bodies_signal_a_missing_backend() {
        assert!(looks_like_html("<!DOCTYPE html><html><body>404</body></html>"));
        assert!(looks_like_html("  <html lang=\"en\">"));
        assert!(!looks_like_html("{\"id\": 1}"));
    }

    #[test]
    fn unauthorized_and_forbidden_map_to_distinct_errors() {
        assert!(matches!(map_error(401, ""), ClientError::InvalidCredentials));
        assert!(matches!(map_error(403, ""), ClientError::PermissionDenied));
    }

    #[test]
    fn html_error_bodies_win_over_the_status() {
        let body = "<!DOCTYPE html><html><body>502 Bad Gateway</body></html>";
        assert!(matches!(
            map_error(502, body),
            ClientError::BackendUnavailable
        ));
        assert!(matches!(
            map_error(404, "<html><body>Not Found</body></html>"),
            ClientError::BackendUnavailable
        ));
    }

    #[test]
    fn bad_request_carries_the_field_when_named() {
        let error = map_error(400, r#"{"field":"nationalId","message":"digits only"}"#);
        let ClientError::Validation { field, message } = error else {
            panic!("expected validation error");
        };
        assert_eq!(field.as_deref(), Some("nationalId"));
        assert_eq!(message, "digits only");
    }

    #[test]
    fn bad_request_without_json_still_validates() {
        let error = map_error(400, "nope");
        assert!(matches!(error, ClientError::Validation { field: None, .. }));
    }

    #[test]
    fn gateway_timeout_is_a_transport_failure() {
        assert!(matches!(map_error(504, ""), ClientError::Transport(_)));
        assert!(matches!(map_error(500, ""), ClientError::Server(500)));
        assert!(matches!(map_error(502, ""), ClientError::Server(502)));
    }

    #[test]
    fn not_found_prefers_the_backend_message() {
        let error = map_error(404, r#"{"message":"citizen 9 does not exist"}"#);
        let ClientError::NotFound(detail) = error else {
            panic!("expected not-found error");
        };
        assert_eq!(detail, "citizen 9 does not exist");
    }
}
