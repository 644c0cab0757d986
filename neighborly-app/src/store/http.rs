use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Method};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use neighborly_core::{Document, Session};

use crate::error::{BackendError, BackendResult};
use crate::store::{Backend, ListOrder};

#[derive(Debug, Serialize)]
struct AuthRequestDto<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct CreateDocumentRequestDto {
    fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponseDto {
    error: Option<String>,
    code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SessionDto {
    user_id: String,
    email: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct DocumentDto {
    id: String,
    created_at: Option<DateTime<Utc>>,
    fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct ListDocumentsResponseDto {
    documents: Vec<DocumentDto>,
}

#[derive(Serialize)]
struct ListDocumentsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    order_by: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    direction: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
}

impl From<SessionDto> for Session {
    fn from(value: SessionDto) -> Self {
        Self {
            user_id: value.user_id,
            email: value.email,
            token: value.token,
        }
    }
}

impl From<DocumentDto> for Document {
    fn from(value: DocumentDto) -> Self {
        Self {
            id: value.id,
            created_at: value.created_at,
            fields: value.fields,
        }
    }
}

#[derive(Debug)]
/// Бэкенд поверх JSON REST API document-store сервиса.
///
/// Сессия после `sign_in`/`sign_up` хранится внутри и автоматически
/// подставляется bearer-токеном в защищённые операции.
pub struct HttpBackend {
    base_url: String,
    client: Client,
    session: Mutex<Option<Session>>,
}

impl HttpBackend {
    /// Бэкенд с базовым URL сервиса и таймаутами по умолчанию.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeouts(base_url, Duration::from_secs(5), Duration::from_secs(15))
    }

    /// Бэкенд с явными таймаутами подключения и запроса.
    pub fn with_timeouts(
        base_url: impl Into<String>,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .expect("failed to build reqwest client");

        Self {
            base_url: base_url.into(),
            client,
            session: Mutex::new(None),
        }
    }

    /// Восстанавливает ранее сохранённую сессию (например, из файла CLI).
    pub fn restore_session(&self, session: Session) {
        *self.session.lock().expect("session mutex poisoned") = Some(session);
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn session_snapshot(&self) -> Option<Session> {
        self.session.lock().expect("session mutex poisoned").clone()
    }

    fn store_session(&self, session: &Session) {
        *self.session.lock().expect("session mutex poisoned") = Some(session.clone());
    }

    fn bearer_token(&self) -> BackendResult<String> {
        self.session_snapshot()
            .map(|session| session.token)
            .ok_or(BackendError::Unauthorized)
    }

    async fn decode_error(response: reqwest::Response) -> BackendError {
        let status = response.status();

        let body = response.json::<ErrorResponseDto>().await.ok();
        if let Some(code) = body.as_ref().and_then(|body| body.code.as_deref())
            && let Some(err) = BackendError::from_error_code(code)
        {
            return err;
        }

        let message = body.and_then(|body| body.error);
        BackendError::from_http_status(status, message)
    }

    /// Универсальный helper для запросов с json-payload.
    async fn send_json<TReq, TRes>(
        &self,
        method: Method,
        path: &str,
        body: &TReq,
        token: Option<&str>,
    ) -> BackendResult<TRes>
    where
        TReq: Serialize,
        TRes: DeserializeOwned,
    {
        let url = self.endpoint(path);

        let mut request = self.client.request(method, url).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(BackendError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        response
            .json::<TRes>()
            .await
            .map_err(BackendError::from_reqwest)
    }

    async fn list_with_query(
        &self,
        collection: &str,
        query: ListDocumentsQuery,
    ) -> BackendResult<Vec<Document>> {
        let url = self.endpoint(&format!("/v1/collections/{collection}/documents"));

        let request = self.client.request(Method::GET, url).query(&query);

        let response = request.send().await.map_err(BackendError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        let dto = response
            .json::<ListDocumentsResponseDto>()
            .await
            .map_err(BackendError::from_reqwest)?;
        Ok(dto.documents.into_iter().map(Document::from).collect())
    }

    async fn authenticate(&self, path: &str, email: &str, password: &str) -> BackendResult<Session> {
        let payload = AuthRequestDto { email, password };
        let dto: SessionDto = self.send_json(Method::POST, path, &payload, None).await?;
        let session = Session::from(dto);
        self.store_session(&session);
        Ok(session)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn sign_in(&self, email: &str, password: &str) -> BackendResult<Session> {
        match self.authenticate("/v1/auth/sign_in", email, password).await {
            // Сервис отвечает 401 на неверную пару email/пароль.
            Err(BackendError::Unauthorized) => Err(BackendError::InvalidCredentials),
            other => other,
        }
    }

    async fn sign_up(&self, email: &str, password: &str) -> BackendResult<Session> {
        self.authenticate("/v1/auth/sign_up", email, password).await
    }

    async fn current_session(&self) -> Option<Session> {
        self.session_snapshot()
    }

    async fn list_documents(
        &self,
        collection: &str,
        order: ListOrder,
    ) -> BackendResult<Vec<Document>> {
        let query = match order {
            ListOrder::BackendDefault => ListDocumentsQuery {
                order_by: None,
                direction: None,
                limit: None,
            },
            ListOrder::CreatedAtDesc => ListDocumentsQuery {
                order_by: Some("created_at"),
                direction: Some("desc"),
                limit: None,
            },
        };
        self.list_with_query(collection, query).await
    }

    async fn sample_documents(
        &self,
        collection: &str,
        limit: u32,
    ) -> BackendResult<Vec<Document>> {
        let query = ListDocumentsQuery {
            order_by: None,
            direction: None,
            limit: Some(limit),
        };
        self.list_with_query(collection, query).await
    }

    async fn get_document(&self, collection: &str, id: &str) -> BackendResult<Document> {
        let url = self.endpoint(&format!("/v1/collections/{collection}/documents/{id}"));

        let request = self.client.request(Method::GET, url);

        let response = request.send().await.map_err(BackendError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        let dto = response
            .json::<DocumentDto>()
            .await
            .map_err(BackendError::from_reqwest)?;
        Ok(dto.into())
    }

    async fn create_document(
        &self,
        collection: &str,
        fields: Map<String, Value>,
    ) -> BackendResult<Document> {
        let token = self.bearer_token()?;
        let payload = CreateDocumentRequestDto { fields };
        let dto: DocumentDto = self
            .send_json(
                Method::POST,
                &format!("/v1/collections/{collection}/documents"),
                &payload,
                Some(&token),
            )
            .await?;
        Ok(dto.into())
    }

    async fn delete_document(&self, collection: &str, id: &str) -> BackendResult<()> {
        let token = self.bearer_token()?;
        let url = self.endpoint(&format!("/v1/collections/{collection}/documents/{id}"));

        let request = self
            .client
            .request(Method::DELETE, url)
            .bearer_auth(&token);

        let response = request.send().await.map_err(BackendError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        Ok(())
    }
}
