use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde_json::{Map, Value};

use neighborly_core::{Document, Session};

use crate::error::{BackendError, BackendResult};
use crate::store::{Backend, ListOrder};

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone)]
struct Account {
    user_id: String,
    password: String,
}

#[derive(Debug, Default)]
struct Inner {
    accounts: HashMap<String, Account>,
    collections: HashMap<String, Vec<Document>>,
    session: Option<Session>,
    next_id: u64,
    last_write_at: Option<DateTime<Utc>>,
}

impl Inner {
    /// Отметка создания, строго монотонная по записям.
    fn next_write_timestamp(&mut self) -> DateTime<Utc> {
        let mut now = Utc::now();
        if let Some(last) = self.last_write_at
            && now <= last
        {
            now = last + Duration::milliseconds(1);
        }
        self.last_write_at = Some(now);
        now
    }

    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{:06}", self.next_id)
    }
}

#[derive(Debug, Default)]
/// Бэкенд в памяти процесса: те же контракты, что у HTTP-реализации.
///
/// Используется интеграционными тестами и оффлайн-режимом CLI. Правила
/// повторяют поведение внешнего сервиса: пароль короче 6 символов отклоняется
/// на регистрации, удалять документ может только его владелец.
pub struct MemoryBackend {
    inner: Mutex<Inner>,
}

impl MemoryBackend {
    /// Пустой бэкенд без аккаунтов и документов.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("memory backend mutex poisoned")
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn sign_in(&self, email: &str, password: &str) -> BackendResult<Session> {
        let mut inner = self.lock();

        let account = inner
            .accounts
            .get(email)
            .ok_or(BackendError::InvalidCredentials)?;
        if account.password != password {
            return Err(BackendError::InvalidCredentials);
        }

        let session = Session {
            user_id: account.user_id.clone(),
            email: email.to_string(),
            token: format!("memory-token-{}", account.user_id),
        };
        inner.session = Some(session.clone());
        Ok(session)
    }

    async fn sign_up(&self, email: &str, password: &str) -> BackendResult<Session> {
        let mut inner = self.lock();

        if inner.accounts.contains_key(email) {
            return Err(BackendError::AccountExists);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(BackendError::WeakPassword);
        }

        let user_id = inner.next_id("user");
        inner.accounts.insert(
            email.to_string(),
            Account {
                user_id: user_id.clone(),
                password: password.to_string(),
            },
        );

        let session = Session {
            user_id: user_id.clone(),
            email: email.to_string(),
            token: format!("memory-token-{user_id}"),
        };
        inner.session = Some(session.clone());
        Ok(session)
    }

    async fn current_session(&self) -> Option<Session> {
        self.lock().session.clone()
    }

    async fn list_documents(
        &self,
        collection: &str,
        order: ListOrder,
    ) -> BackendResult<Vec<Document>> {
        let inner = self.lock();
        let mut documents = inner
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default();

        if order == ListOrder::CreatedAtDesc {
            // Документы без отметки создания уходят в конец выдачи.
            documents.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        Ok(documents)
    }

    async fn sample_documents(
        &self,
        collection: &str,
        limit: u32,
    ) -> BackendResult<Vec<Document>> {
        let inner = self.lock();
        let documents = inner
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default();
        Ok(documents.into_iter().take(limit as usize).collect())
    }

    async fn get_document(&self, collection: &str, id: &str) -> BackendResult<Document> {
        let inner = self.lock();
        inner
            .collections
            .get(collection)
            .and_then(|documents| documents.iter().find(|doc| doc.id == id))
            .cloned()
            .ok_or(BackendError::NotFound)
    }

    async fn create_document(
        &self,
        collection: &str,
        fields: Map<String, Value>,
    ) -> BackendResult<Document> {
        let mut inner = self.lock();

        if inner.session.is_none() {
            return Err(BackendError::Unauthorized);
        }

        let id = inner.next_id("doc");
        let created_at = inner.next_write_timestamp();
        let document = Document {
            id,
            created_at: Some(created_at),
            fields,
        };

        inner
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(document.clone());
        Ok(document)
    }

    async fn delete_document(&self, collection: &str, id: &str) -> BackendResult<()> {
        let mut inner = self.lock();

        let session = inner.session.clone().ok_or(BackendError::Unauthorized)?;

        let documents = inner
            .collections
            .get_mut(collection)
            .ok_or(BackendError::NotFound)?;
        let index = documents
            .iter()
            .position(|doc| doc.id == id)
            .ok_or(BackendError::NotFound)?;

        let owner_id = documents[index]
            .str_field("owner_id")
            .map(str::to_string);
        if owner_id.as_deref() != Some(session.user_id.as_str()) {
            return Err(BackendError::PermissionDenied);
        }

        documents.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn post_fields(title: &str, owner_id: &str) -> Map<String, Value> {
        let Value::Object(fields) = json!({
            "title": title,
            "description": "desc",
            "category": "Other",
            "author_email": "a@example.com",
            "owner_id": owner_id,
        }) else {
            unreachable!()
        };
        fields
    }

    #[tokio::test]
    async fn sign_up_rejects_short_password() {
        let backend = MemoryBackend::new();
        let err = backend
            .sign_up("u@example.com", "12345")
            .await
            .expect_err("short password must be rejected");
        assert!(matches!(err, BackendError::WeakPassword));
    }

    #[tokio::test]
    async fn sign_up_rejects_duplicate_account() {
        let backend = MemoryBackend::new();
        backend
            .sign_up("u@example.com", "secret1")
            .await
            .expect("first sign_up must succeed");

        let err = backend
            .sign_up("u@example.com", "secret2")
            .await
            .expect_err("duplicate must be rejected");
        assert!(matches!(err, BackendError::AccountExists));
    }

    #[tokio::test]
    async fn sign_in_checks_credentials_and_sets_session() {
        let backend = MemoryBackend::new();
        backend
            .sign_up("u@example.com", "secret1")
            .await
            .expect("sign_up must succeed");

        let err = backend
            .sign_in("u@example.com", "wrong")
            .await
            .expect_err("wrong password must fail");
        assert!(matches!(err, BackendError::InvalidCredentials));

        let session = backend
            .sign_in("u@example.com", "secret1")
            .await
            .expect("sign_in must succeed");
        let current = backend
            .current_session()
            .await
            .expect("session must be set");
        assert_eq!(current.user_id, session.user_id);
    }

    #[tokio::test]
    async fn create_requires_session_and_assigns_metadata() {
        let backend = MemoryBackend::new();

        let err = backend
            .create_document("posts", post_fields("t", "u"))
            .await
            .expect_err("create without session must fail");
        assert!(matches!(err, BackendError::Unauthorized));

        let session = backend
            .sign_up("u@example.com", "secret1")
            .await
            .expect("sign_up must succeed");

        let doc = backend
            .create_document("posts", post_fields("t", &session.user_id))
            .await
            .expect("create must succeed");
        assert!(!doc.id.is_empty());
        assert!(doc.created_at.is_some());
    }

    #[tokio::test]
    async fn created_at_is_monotonic_per_write() {
        let backend = MemoryBackend::new();
        let session = backend
            .sign_up("u@example.com", "secret1")
            .await
            .expect("sign_up must succeed");

        let first = backend
            .create_document("posts", post_fields("a", &session.user_id))
            .await
            .expect("create must succeed");
        let second = backend
            .create_document("posts", post_fields("b", &session.user_id))
            .await
            .expect("create must succeed");

        assert!(second.created_at > first.created_at);
    }

    #[tokio::test]
    async fn delete_is_owner_only() {
        let backend = MemoryBackend::new();
        let owner = backend
            .sign_up("owner@example.com", "secret1")
            .await
            .expect("sign_up must succeed");
        let doc = backend
            .create_document("posts", post_fields("t", &owner.user_id))
            .await
            .expect("create must succeed");

        backend
            .sign_up("other@example.com", "secret1")
            .await
            .expect("second sign_up must succeed");
        let err = backend
            .delete_document("posts", &doc.id)
            .await
            .expect_err("non-owner delete must fail");
        assert!(matches!(err, BackendError::PermissionDenied));

        backend
            .sign_in("owner@example.com", "secret1")
            .await
            .expect("sign_in must succeed");
        backend
            .delete_document("posts", &doc.id)
            .await
            .expect("owner delete must succeed");

        let err = backend
            .get_document("posts", &doc.id)
            .await
            .expect_err("document must be gone");
        assert!(matches!(err, BackendError::NotFound));
    }

    #[tokio::test]
    async fn list_orders_by_created_at_desc() {
        let backend = MemoryBackend::new();
        let session = backend
            .sign_up("u@example.com", "secret1")
            .await
            .expect("sign_up must succeed");

        let first = backend
            .create_document("posts", post_fields("a", &session.user_id))
            .await
            .expect("create must succeed");
        let second = backend
            .create_document("posts", post_fields("b", &session.user_id))
            .await
            .expect("create must succeed");

        let listed = backend
            .list_documents("posts", ListOrder::CreatedAtDesc)
            .await
            .expect("list must succeed");
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[tokio::test]
    async fn sample_returns_at_most_limit_documents() {
        let backend = MemoryBackend::new();
        let session = backend
            .sign_up("u@example.com", "secret1")
            .await
            .expect("sign_up must succeed");

        for i in 0..5 {
            backend
                .create_document("posts", post_fields(&format!("t{i}"), &session.user_id))
                .await
                .expect("create must succeed");
        }

        let sampled = backend
            .sample_documents("posts", 3)
            .await
            .expect("sample must succeed");
        assert_eq!(sampled.len(), 3);

        let all = backend
            .sample_documents("posts", 100)
            .await
            .expect("sample must succeed");
        assert_eq!(all.len(), 5);
    }
}
