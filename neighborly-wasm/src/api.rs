use gloo_net::http::Request;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use neighborly_core::{Document, Post, Session};

const API_BASE_URL: &str = match option_env!("WASM_BACKEND_URL") {
    Some(value) => value,
    None => "http://127.0.0.1:8080",
};

/// Размер подборки на главном экране.
pub(crate) const HOME_SAMPLE_LIMIT: u32 = 3;

#[derive(Debug, Clone)]
pub(crate) enum ApiError {
    Network(String),
    Http { status: u16, message: String },
    Decode(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Http { status, message } => write!(f, "http error {status}: {message}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl ApiError {
    pub(crate) fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }
}

#[derive(Debug, Deserialize)]
struct ListDocumentsResponse {
    documents: Vec<Document>,
}

fn endpoint(path: &str) -> String {
    format!(
        "{}/{}",
        API_BASE_URL.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

async fn parse_json<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

async fn parse_error_body(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "request failed".to_string());

    let fallback = match status {
        400 => "Некорректный запрос".to_string(),
        401 => "Требуется авторизация".to_string(),
        403 => "Удалять пост может только его автор".to_string(),
        404 => "Пост не найден".to_string(),
        409 => "Учётная запись уже существует".to_string(),
        500..=599 => "Ошибка сервера".to_string(),
        _ => format!("HTTP ошибка {status}"),
    };

    let message = if text.trim().is_empty() { fallback } else { text };

    ApiError::Http { status, message }
}

async fn authenticate(path: &str, email: &str, password: &str) -> Result<Session, ApiError> {
    let payload = serde_json::json!({ "email": email, "password": password });

    let response = Request::post(&endpoint(path))
        .json(&payload)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    parse_json(response).await
}

pub(crate) async fn sign_in(email: &str, password: &str) -> Result<Session, ApiError> {
    authenticate("/v1/auth/sign_in", email, password).await
}

pub(crate) async fn sign_up(email: &str, password: &str) -> Result<Session, ApiError> {
    authenticate("/v1/auth/sign_up", email, password).await
}

async fn fetch_documents(url: String) -> Result<Vec<Post>, ApiError> {
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    let list: ListDocumentsResponse = parse_json(response).await?;
    Ok(list.documents.iter().map(Post::from_document).collect())
}

/// Полный список постов, новые первыми.
pub(crate) async fn browse_posts() -> Result<Vec<Post>, ApiError> {
    let url = endpoint("/v1/collections/posts/documents?order_by=created_at&direction=desc");
    fetch_documents(url).await
}

/// Ограниченная подборка для главного экрана.
pub(crate) async fn recent_posts(limit: u32) -> Result<Vec<Post>, ApiError> {
    let url = endpoint(&format!("/v1/collections/posts/documents?limit={limit}"));
    fetch_documents(url).await
}

pub(crate) async fn get_post(id: &str) -> Result<Post, ApiError> {
    let url = endpoint(&format!("/v1/collections/posts/documents/{id}"));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    let document: Document = parse_json(response).await?;
    Ok(Post::from_document(&document))
}

pub(crate) async fn create_post(
    session: &Session,
    fields: Map<String, Value>,
) -> Result<Post, ApiError> {
    let payload = serde_json::json!({ "fields": fields });

    let response = Request::post(&endpoint("/v1/collections/posts/documents"))
        .header("Authorization", &format!("Bearer {}", session.token))
        .json(&payload)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    let document: Document = parse_json(response).await?;
    Ok(Post::from_document(&document))
}

pub(crate) async fn delete_post(session: &Session, id: &str) -> Result<(), ApiError> {
    let url = endpoint(&format!("/v1/collections/posts/documents/{id}"));

    let response = Request::delete(&url)
        .header("Authorization", &format!("Bearer {}", session.token))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    Ok(())
}
