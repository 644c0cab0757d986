//! Общие доменные типы приложения Neighborly.
//!
//! Крейт не делает сетевых вызовов и не зависит от рантайма, поэтому
//! используется и нативными крейтами (`neighborly-app`, `neighborly-cli`),
//! и wasm-фронтендом (`neighborly-wasm`):
//! - модели (`Post`, `Session`, `Document`);
//! - фиксированный набор категорий и правила fallback;
//! - клиентская фильтрация списка постов;
//! - палитра категорий и контраст текста по яркости фона;
//! - типизированная таблица маршрутов и стек навигации.
#![warn(missing_docs)]

mod category;
mod document;
mod filter;
mod nav;
mod palette;
mod post;

pub use category::{CATEGORY_LABELS, Category, FALLBACK_CATEGORY};
pub use document::Document;
pub use filter::filter_posts;
pub use nav::{NavStack, Route};
pub use palette::{category_color, is_color_dark, text_color};
pub use post::{FALLBACK_DESCRIPTION, FALLBACK_TITLE, NewPostInput, Post, Session};
