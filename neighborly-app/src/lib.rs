//! Прикладной слой Neighborly: доступ к внешнему бэкенду и экранные потоки.
//!
//! Бэкенд (document-store с контекстом аутентификации) — внешний сервис;
//! здесь он представлен трейтом [`store::Backend`] с двумя реализациями:
//! - [`store::HttpBackend`] — JSON REST поверх `reqwest`;
//! - [`store::MemoryBackend`] — состояние в памяти для тестов и оффлайн-демо.
//!
//! Экранные контроллеры ([`screens`]) держат локальное состояние
//! (loading/error/data) и выполняют ровно те CRUD-вызовы, которые описывает
//! их экран. Все вызовы — pull-based: будущее, брошенное при уходе с экрана,
//! отменяет работу, а устаревший результат отбрасывается по fetch-эпохе.
#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod infrastructure;
pub mod screens;
pub mod store;

pub use client::NeighborlyClient;
pub use error::{BackendError, BackendResult};
