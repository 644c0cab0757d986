//! Пять экранов приложения.
//!
//! Компонент экрана создаётся заново на каждый вход маршрута в фокус,
//! поэтому фетч в теле компонента и есть "перечитать при фокусе".

mod auth;
mod browse;
mod details;
mod home;
mod new_post;

pub(crate) use auth::AuthScreen;
pub(crate) use browse::BrowseScreen;
pub(crate) use details::PostDetailsScreen;
pub(crate) use home::HomeScreen;
pub(crate) use new_post::NewPostScreen;
