use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Типизированная таблица маршрутов приложения.
pub enum Route {
    /// Экран аутентификации.
    Auth,
    /// Главный экран с подборкой последних постов.
    Home,
    /// Полный список постов с поиском и фильтром по категории.
    Browse,
    /// Детали одного поста.
    PostDetails {
        /// Идентификатор поста.
        id: String,
    },
    /// Форма нового поста.
    NewPost,
}

impl Route {
    /// Заголовок экрана для шапки.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Auth => "Authentication",
            Route::Home => "Community Hub",
            Route::Browse => "Browse Posts",
            Route::PostDetails { .. } => "Post Details",
            Route::NewPost => "Create Post",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone)]
/// Стек навигации с семантикой push/pop/replace.
///
/// `replace` используется единственным переходом Auth -> Home: запись экрана
/// аутентификации в стеке не сохраняется, назад к ней вернуться нельзя.
pub struct NavStack {
    stack: Vec<Route>,
}

impl NavStack {
    /// Стек с корневым маршрутом.
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    /// Текущий (верхний) маршрут.
    pub fn current(&self) -> &Route {
        self.stack
            .last()
            .expect("nav stack always holds at least the root route")
    }

    /// Переход на новый экран с сохранением текущего в истории.
    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Замена текущей записи без сохранения её в истории.
    pub fn replace(&mut self, route: Route) {
        self.stack.pop();
        self.stack.push(route);
    }

    /// Возврат на предыдущий экран. На корне — no-op, возвращает `false`.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }

    /// Глубина стека.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pop_walk_the_history() {
        let mut nav = NavStack::new(Route::Home);
        nav.push(Route::Browse);
        nav.push(Route::PostDetails {
            id: "p1".to_string(),
        });

        assert_eq!(nav.current().title(), "Post Details");
        assert!(nav.pop());
        assert_eq!(nav.current(), &Route::Browse);
        assert!(nav.pop());
        assert_eq!(nav.current(), &Route::Home);
    }

    #[test]
    fn pop_on_root_is_a_no_op() {
        let mut nav = NavStack::new(Route::Auth);
        assert!(!nav.pop());
        assert_eq!(nav.current(), &Route::Auth);
    }

    #[test]
    fn auth_to_home_replace_leaves_no_back_entry() {
        let mut nav = NavStack::new(Route::Auth);
        nav.replace(Route::Home);

        assert_eq!(nav.current(), &Route::Home);
        assert_eq!(nav.depth(), 1);
        assert!(!nav.pop());
    }

    #[test]
    fn every_route_has_a_header_title() {
        let routes = [
            Route::Auth,
            Route::Home,
            Route::Browse,
            Route::PostDetails {
                id: "p1".to_string(),
            },
            Route::NewPost,
        ];
        for route in routes {
            assert!(!route.title().is_empty());
        }
    }
}
