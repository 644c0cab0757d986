use leptos::prelude::*;

use neighborly_core::{NavStack, Route, Session};

#[derive(Debug, Clone, Copy)]
pub(crate) struct AppState {
    pub(crate) session: RwSignal<Option<Session>>,
    pub(crate) nav: RwSignal<NavStack>,
}

impl AppState {
    pub(crate) fn new() -> Self {
        Self {
            session: RwSignal::new(None),
            nav: RwSignal::new(NavStack::new(Route::Auth)),
        }
    }

    pub(crate) fn current_route(&self) -> Route {
        self.nav.with(|nav| nav.current().clone())
    }

    pub(crate) fn push(&self, route: Route) {
        self.nav.update(|nav| nav.push(route));
    }

    /// Auth -> Home: запись экрана аутентификации в истории не сохраняется.
    pub(crate) fn replace(&self, route: Route) {
        self.nav.update(|nav| {
            nav.replace(route);
        });
    }

    pub(crate) fn pop(&self) {
        self.nav.update(|nav| {
            nav.pop();
        });
    }

    pub(crate) fn can_go_back(&self) -> bool {
        self.nav.with(|nav| nav.depth() > 1)
    }
}
