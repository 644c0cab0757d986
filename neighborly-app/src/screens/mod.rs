//! Экранные потоки приложения.
//!
//! Каждый контроллер держит локальное состояние своего экрана и выполняет
//! его CRUD-вызовы; ни одна ошибка бэкенда не распространяется дальше
//! экрана, который её вызвал. Навигационные переходы контроллеры выражают
//! возвращаемыми значениями, сам стек ([`neighborly_core::NavStack`]) ведёт
//! оболочка (CLI или wasm-фронтенд).

mod auth;
mod browse;
mod details;
mod home;
mod new_post;

pub use auth::{AuthMode, AuthScreen};
pub use browse::{BrowseScreen, FetchTicket};
pub use details::{DetailsState, PostDetailsScreen};
pub use home::{HomeScreen, HomeState};
pub use new_post::NewPostScreen;
