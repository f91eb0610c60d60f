use b3_storefront_auth::XSRF_COOKIE;
use b3_storefront_client::{append_query, MultipartForm, OutboundRequest, RequestMethod};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::instrument;

use crate::error::Result;
use crate::request_type::RequestType;

/// Header carrying the storefront CSRF token.
const XSRF_HEADER: &str = "x-xsrf-token";
/// Header carrying the first-party token on REST calls.
const AUTH_TOKEN_HEADER: &str = "authToken";
const CONTENT_TYPE_HEADER: &str = "content-type";
const JSON_CONTENT_TYPE: &str = "application/json";

impl super::Dispatcher {
    /// Auth header for a REST call: the CSRF cookie for `BCRest`, the
    /// first-party token for everything else.
    fn rest_auth_header(&self, ty: RequestType) -> (&'static str, String) {
        match ty {
            RequestType::BCRest => (
                XSRF_HEADER,
                self.cookies.get(XSRF_COOKIE).unwrap_or_default(),
            ),
            _ => (AUTH_TOKEN_HEADER, self.session.b2b_token()),
        }
    }

    /// Build an outbound REST request: resolved URL, auth header and a JSON
    /// content type, which every REST verb carries even without a body.
    fn rest_request(&self, method: RequestMethod, url: &str, ty: RequestType) -> OutboundRequest {
        let (name, value) = self.rest_auth_header(ty);
        OutboundRequest::new(method, self.resolver.rest_url(url, ty))
            .header(CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE)
            .header(name, value)
    }

    /// Generic REST call with an optional JSON body.
    #[instrument(skip(self, body), fields(request_type = %ty))]
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: RequestMethod,
        url: &str,
        ty: RequestType,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let mut request = self.rest_request(method, url, ty);
        if let Some(body) = body {
            request = request.json_value(body);
        }
        self.send(request).await
    }

    /// GET without query parameters.
    #[instrument(skip(self), fields(request_type = %ty))]
    pub async fn get<T: DeserializeOwned>(&self, url: &str, ty: RequestType) -> Result<T> {
        self.send(self.rest_request(RequestMethod::Get, url, ty))
            .await
    }

    /// GET with `query` appended as `?key=value&...`.
    #[instrument(skip(self, query), fields(request_type = %ty))]
    pub async fn get_with_query<T, Q>(&self, url: &str, ty: RequestType, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = append_query(url, query)?;
        self.send(self.rest_request(RequestMethod::Get, &url, ty))
            .await
    }

    /// POST with a JSON body.
    #[instrument(skip(self, body), fields(request_type = %ty))]
    pub async fn post<T, B>(&self, url: &str, ty: RequestType, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.rest_request(RequestMethod::Post, url, ty).json(body)?;
        self.send(request).await
    }

    /// PUT with a JSON body.
    #[instrument(skip(self, body), fields(request_type = %ty))]
    pub async fn put<T, B>(&self, url: &str, ty: RequestType, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.rest_request(RequestMethod::Put, url, ty).json(body)?;
        self.send(request).await
    }

    /// DELETE, no body.
    #[instrument(skip(self), fields(request_type = %ty))]
    pub async fn delete<T: DeserializeOwned>(&self, url: &str, ty: RequestType) -> Result<T> {
        self.send(self.rest_request(RequestMethod::Delete, url, ty))
            .await
    }

    /// POST a multipart form to `path` on the first-party API.
    ///
    /// No content type is set so the transport can add the multipart
    /// boundary.
    #[instrument(skip(self, form))]
    pub async fn file_upload<T: DeserializeOwned>(&self, path: &str, form: MultipartForm) -> Result<T> {
        let request = OutboundRequest::new(RequestMethod::Post, self.resolver.api_url(path))
            .header(AUTH_TOKEN_HEADER, self.session.b2b_token())
            .multipart(form);
        self.send(request).await
    }
}
