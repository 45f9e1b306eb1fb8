//! JSON body extractors that check the body's shape before decoding it.

use axum::{
    async_trait,
    body::Bytes,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::{header, HeaderMap},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{Map, Value};

use common::AppError;
use domain::{CreatePost, CreateUser, Resource, UpdatePost};

/// A payload type governed by a resource's body rules.
pub trait ResourceBody: DeserializeOwned {
    const RESOURCE: Resource;
}

impl ResourceBody for CreateUser {
    const RESOURCE: Resource = Resource::User;
}

impl ResourceBody for CreatePost {
    const RESOURCE: Resource = Resource::Post;
}

impl ResourceBody for UpdatePost {
    const RESOURCE: Resource = Resource::Post;
}

/// A JSON object body that passed its resource's shape check.
///
/// `raw` is the object exactly as submitted, for handlers that echo it back.
#[derive(Debug)]
pub struct ValidatedBody<T> {
    pub payload: T,
    pub raw: Value,
}

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedBody<T>
where
    S: Send + Sync,
    T: ResourceBody,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let object = json_object(req, state).await?;
        T::RESOURCE.check_body(&object)?;

        let raw = Value::Object(object);
        let payload = decode(&raw, T::RESOURCE)?;
        Ok(Self { payload, raw })
    }
}

/// A JSON object body with no shape rule beyond being an object.
#[derive(Debug)]
pub struct ObjectBody<T> {
    pub payload: T,
    pub raw: Value,
}

#[async_trait]
impl<S, T> FromRequest<S> for ObjectBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let raw = Value::Object(json_object(req, state).await?);
        let payload: T = Deserialize::deserialize(&raw)
            .map_err(|e| AppError::validation(format!("Invalid request data: {}", e)))?;
        Ok(Self { payload, raw })
    }
}

/// Buffer the body and parse it as a JSON object.
///
/// A body not declared as JSON is left unread and counts as `{}`, as does an
/// empty JSON body.
async fn json_object<S>(req: Request, state: &S) -> Result<Map<String, Value>, AppError>
where
    S: Send + Sync,
{
    if !has_json_content_type(req.headers()) {
        return Ok(Map::new());
    }

    let bytes = Bytes::from_request(req, state)
        .await
        .map_err(|e| AppError::validation(e.body_text()))?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    let Json(value) = Json::<Value>::from_bytes(&bytes)
        .map_err(|e: JsonRejection| AppError::validation(e.body_text()))?;

    match value {
        Value::Object(object) => Ok(object),
        _ => Err(AppError::validation("Request body must be a JSON object")),
    }
}

/// `application/json` or any `application/*+json` media type.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

fn decode<T: DeserializeOwned>(raw: &Value, resource: Resource) -> Result<T, AppError> {
    Deserialize::deserialize(raw)
        .map_err(|e| AppError::validation(format!("Invalid {} data: {}", resource, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;
    use serde_json::json;

    fn request(body: &str) -> Request {
        request_with_type(body, "application/json")
    }

    fn request_with_type(body: &str, content_type: &str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", content_type)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn validated<T: ResourceBody>(body: &str) -> Result<ValidatedBody<T>, AppError> {
        ValidatedBody::<T>::from_request(request(body), &()).await
    }

    #[tokio::test]
    async fn empty_object_is_missing_data() {
        let err = validated::<CreateUser>("{}").await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.user_message(), "Missing user data!");
    }

    #[tokio::test]
    async fn empty_body_is_missing_data() {
        let err = validated::<CreatePost>("").await.unwrap_err();
        assert_eq!(err.user_message(), "Missing post data!");
    }

    #[tokio::test]
    async fn missing_mandatory_field() {
        let err = validated::<CreatePost>(r#"{"user_id": 4}"#).await.unwrap_err();
        assert_eq!(err.user_message(), "Missing required \"text\" field!");

        let err = validated::<CreateUser>(r#"{"name": ""}"#).await.unwrap_err();
        assert_eq!(err.user_message(), "Missing required \"name\" field!");
    }

    #[tokio::test]
    async fn valid_body_keeps_raw_object() {
        let body = validated::<CreateUser>(r#"{"name": "Eowyn", "title": "Shieldmaiden"}"#)
            .await
            .unwrap();
        assert_eq!(body.payload.name, "Eowyn");
        assert_eq!(body.raw, json!({ "name": "Eowyn", "title": "Shieldmaiden" }));
    }

    #[tokio::test]
    async fn wrong_type_is_rejected_after_shape_check() {
        let err = validated::<CreateUser>(r#"{"name": 42}"#).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.user_message().starts_with("Invalid user data"));
    }

    #[tokio::test]
    async fn malformed_and_non_object_bodies() {
        let err = validated::<CreateUser>("{name:").await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.user_message().starts_with("Failed to parse the request body as JSON"));

        let err = validated::<CreateUser>("[1, 2]").await.unwrap_err();
        assert_eq!(err.user_message(), "Request body must be a JSON object");
    }

    #[tokio::test]
    async fn object_body_accepts_empty_object() {
        #[derive(Deserialize)]
        struct Patch {
            name: Option<String>,
        }

        let body = ObjectBody::<Patch>::from_request(request("{}"), &())
            .await
            .unwrap();
        assert!(body.payload.name.is_none());
        assert_eq!(body.raw, json!({}));
    }

    #[tokio::test]
    async fn body_not_declared_as_json_reads_as_empty() {
        let req = request_with_type(r#"{"name": "Sam"}"#, "text/plain");
        let err = ValidatedBody::<CreateUser>::from_request(req, &())
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.user_message(), "Missing user data!");
    }

    #[tokio::test]
    async fn json_media_type_variants_are_read() {
        for content_type in ["application/json; charset=utf-8", "application/merge-patch+json"] {
            let req = request_with_type(r#"{"text": "Elevenses"}"#, content_type);
            let body = ValidatedBody::<CreatePost>::from_request(req, &())
                .await
                .unwrap();
            assert_eq!(body.payload.text, "Elevenses");
        }
    }

    #[test]
    fn content_type_detection() {
        let mut headers = HeaderMap::new();
        assert!(!has_json_content_type(&headers));

        headers.insert(header::CONTENT_TYPE, "Application/JSON".parse().unwrap());
        assert!(has_json_content_type(&headers));

        headers.insert(header::CONTENT_TYPE, "application/x-www-form-urlencoded".parse().unwrap());
        assert!(!has_json_content_type(&headers));
    }
}
