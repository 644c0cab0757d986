use std::fs;
use std::io;
use std::path::Path;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use neighborly_app::client::HOME_SAMPLE_LIMIT;
use neighborly_app::infrastructure::logging::init_logging;
use neighborly_app::infrastructure::settings::Settings;
use neighborly_app::store::HttpBackend;
use neighborly_app::{BackendError, NeighborlyClient};
use neighborly_core::{NewPostInput, Post, Session, category_color, filter_posts, text_color};

const SESSION_FILE: &str = ".neighborly_session";

#[derive(Debug, Parser)]
#[command(name = "neighborly-cli", version, about = "CLI клиент доски объявлений Neighborly")]
struct Cli {
    /// Адрес document-store сервиса (по умолчанию из BACKEND_URL).
    #[arg(long, global = true)]
    backend: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Регистрация учётной записи.
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Вход с существующими учётными данными.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Забыть сохранённую сессию.
    Logout,
    /// Подборка последних постов (главный экран).
    Home,
    /// Полный список постов с поиском и фильтром по категории.
    Browse {
        /// Строка поиска по заголовку, описанию и категории.
        #[arg(long)]
        query: Option<String>,
        /// Точное совпадение категории.
        #[arg(long)]
        category: Option<String>,
    },
    /// Детали поста по id.
    Get {
        #[arg(long)]
        id: String,
    },
    /// Создание поста (требует сессию).
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        description: String,
    },
    /// Удаление своего поста (требует сессию).
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let settings = Settings::from_env()?;
    init_logging(&settings.log_level)?;

    let backend_url = cli
        .backend
        .map(normalize_backend_url)
        .unwrap_or_else(|| settings.backend_url.clone());

    let backend = HttpBackend::with_timeouts(
        backend_url,
        Duration::from_secs(settings.connect_timeout_secs),
        Duration::from_secs(settings.request_timeout_secs),
    );
    if let Some(session) = load_session().context("не удалось прочитать .neighborly_session")? {
        backend.restore_session(session);
    }
    let client = NeighborlyClient::new(Arc::new(backend));

    match cli.command {
        Command::Register { email, password } => {
            let session = client
                .sign_up(&email, &password)
                .await
                .map_err(map_client_error)?;
            persist_session(&session).context("не удалось сохранить сессию")?;
            print_session("Регистрация успешна", &session);
        }
        Command::Login { email, password } => {
            let session = client
                .sign_in(&email, &password)
                .await
                .map_err(map_client_error)?;
            persist_session(&session).context("не удалось сохранить сессию")?;
            print_session("Вход выполнен", &session);
        }
        Command::Logout => {
            clear_session().context("не удалось удалить файл сессии")?;
            println!("Сессия забыта");
        }
        Command::Home => {
            let posts = client
                .recent_posts(HOME_SAMPLE_LIMIT)
                .await
                .map_err(map_client_error)?;
            if posts.is_empty() {
                println!("No posts yet. Be the first to add one!");
            } else {
                println!("Recent posts:");
                for post in &posts {
                    print_post_row(post);
                }
            }
        }
        Command::Browse { query, category } => {
            let posts = client.browse_posts().await.map_err(map_client_error)?;
            let visible = filter_posts(
                &posts,
                query.as_deref().unwrap_or(""),
                category.as_deref(),
            );
            println!("Постов: {} (всего {})", visible.len(), posts.len());
            for post in &visible {
                print_post_row(post);
            }
        }
        Command::Get { id } => {
            let post = client.get_post(&id).await.map_err(map_client_error)?;
            print_post_details(&post, client.current_session().await.as_ref());
        }
        Command::Create {
            title,
            category,
            description,
        } => {
            let post = client
                .create_post(NewPostInput {
                    title,
                    category,
                    description,
                })
                .await
                .map_err(map_client_error)?;
            println!("Пост создан: id={}", post.id);
        }
        Command::Delete { id } => {
            client.delete_post(&id).await.map_err(map_client_error)?;
            println!("Пост удалён: id={id}");
        }
    }

    Ok(())
}

fn normalize_backend_url(url: String) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        return url;
    }
    format!("http://{url}")
}

fn parse_session_content(raw: &str) -> Option<Session> {
    serde_json::from_str::<Session>(raw.trim()).ok()
}

fn load_session() -> io::Result<Option<Session>> {
    if !Path::new(SESSION_FILE).exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(SESSION_FILE)?;
    Ok(parse_session_content(&raw))
}

fn persist_session(session: &Session) -> Result<()> {
    let raw = serde_json::to_string(session).context("не удалось сериализовать сессию")?;
    fs::write(SESSION_FILE, raw)?;
    Ok(())
}

fn clear_session() -> io::Result<()> {
    if Path::new(SESSION_FILE).exists() {
        fs::remove_file(SESSION_FILE)?;
    }
    Ok(())
}

fn map_client_error(err: BackendError) -> anyhow::Error {
    let message = match err {
        BackendError::Unauthorized => {
            "требуется авторизация: выполните `neighborly-cli login ...` или `neighborly-cli register ...`"
                .to_string()
        }
        BackendError::InvalidCredentials => "неверный email или пароль".to_string(),
        BackendError::AccountExists => "учётная запись с таким email уже существует".to_string(),
        BackendError::WeakPassword => "пароль должен быть не короче 6 символов".to_string(),
        BackendError::PermissionDenied => "удалять пост может только его автор".to_string(),
        BackendError::NotFound => "пост не найден".to_string(),
        BackendError::InvalidRequest(message) => format!("некорректный запрос: {message}"),
        BackendError::Http(err) => format!("ошибка HTTP: {err}"),
    };
    anyhow::anyhow!(message)
}

fn print_session(title: &str, session: &Session) {
    println!("{title}");
    println!("user_id: {}", session.user_id);
    println!("email: {}", session.email);
}

fn print_post_row(post: &Post) {
    let created = post
        .created_at
        .map(|ts| format!(" • {ts}"))
        .unwrap_or_default();
    println!(
        "- [{}] {} ({}) by {}{}",
        post.id, post.title, post.category, post.author_email, created
    );
}

fn print_post_details(post: &Post, session: Option<&Session>) {
    let background = category_color(&post.category);
    println!("{}", post.title);
    println!("category: {} (color {background}, text {})", post.category, text_color(background));
    println!("{}", post.description);
    println!("posted by {}", post.author_email);
    if let Some(created_at) = post.created_at {
        println!("{created_at}");
    }
    if post.is_owned_by(session) {
        println!("(этот пост ваш: доступно `neighborly-cli delete --id {}`)", post.id);
    }
}
