use std::io::{self, BufRead, Write};
use std::process;

use anyhow::{Context, Result};
use board_client::{
    AdminView, Alert, ApiClient, Credentials, DEFAULT_PAGE_LIMIT, DetailView, ListView, Route,
    auth, resolve_session,
};
use clap::{Parser, Subcommand};

mod logging;
mod render;
mod settings;
mod token_file;

use logging::init_logging;
use settings::Settings;
use token_file::FileTokenStore;

#[derive(Debug, Parser)]
#[command(name = "board-cli", version, about = "CLI клиент университетской доски")]
struct Cli {
    /// Адрес сервера (по умолчанию BOARD_API_URL или http://127.0.0.1:4000).
    #[arg(long, global = true)]
    server: Option<String>,

    /// Выводить данные в JSON вместо текста.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Список постов с поиском и пагинацией.
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Пост с комментариями и лайками.
    Show {
        #[arg(long)]
        id: String,
    },
    /// Создание поста (требует токен).
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    /// Комментарий к посту (требует токен).
    Comment {
        #[arg(long)]
        id: String,
        #[arg(long)]
        text: String,
    },
    /// Удаление комментария (автор комментария или администратор).
    DeleteComment {
        #[arg(long)]
        id: String,
        #[arg(long)]
        comment_id: String,
    },
    /// Удаление поста (автор или администратор).
    DeletePost {
        #[arg(long)]
        id: String,
        /// Не спрашивать подтверждение.
        #[arg(long)]
        yes: bool,
    },
    /// Поставить или снять лайк.
    Like {
        #[arg(long)]
        id: String,
    },
    /// Текущий пользователь.
    Whoami,
    /// Вход; токен сохраняется в файл.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Регистрация.
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        nickname: String,
    },
    /// Выход: удаляет сохранённый токен.
    Logout,
    /// Управление пользователями (только администратор).
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },
}

#[derive(Debug, Subcommand)]
enum AdminCommand {
    /// Список всех пользователей.
    Users,
    /// Переключить роль user ⇄ admin.
    ToggleRole {
        #[arg(long)]
        id: String,
    },
    /// Заблокировать или разблокировать пользователя.
    ToggleBlock {
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

    let base_url = normalize_server(cli.server.unwrap_or(settings.api_url));
    tracing::debug!(%base_url, token_file = %settings.token_file, "starting board-cli");
    let store = FileTokenStore::new(&settings.token_file);
    let credentials = Credentials::from_store(&store);
    let api = ApiClient::new(base_url, credentials.clone());
    let json = cli.json;

    match cli.command {
        Command::List { page, search } => {
            let mut view = ListView::at(page, search);
            view.load(&api).await;
            if json {
                print_json(&serde_json::json!({
                    "page": view.pagination().page(),
                    "limit": DEFAULT_PAGE_LIMIT,
                    "total": view.pagination().total(),
                    "posts": view.posts(),
                }))?;
            } else {
                print!("{}", render::render_list(&view));
            }
        }
        Command::Show { id } => {
            let view = load_detail(&api, id).await?;
            print_detail(&view, json)?;
        }
        Command::Create { title, content } => {
            let route = board_client::actions::create_post(&api, &title, &content)
                .await
                .map_err(map_alert)?;
            if let Route::Detail(id) = route {
                let view = load_detail(&api, id).await?;
                print_detail(&view, json)?;
            }
        }
        Command::Comment { id, text } => {
            let mut view = load_detail(&api, id).await?;
            view.set_comment_input(text);
            view.submit_comment(&api).await.map_err(map_alert)?;
            print_detail(&view, json)?;
        }
        Command::DeleteComment { id, comment_id } => {
            let mut view = load_detail(&api, id).await?;
            view.delete_comment(&api, &comment_id)
                .await
                .map_err(map_alert)?;
            print_detail(&view, json)?;
        }
        Command::DeletePost { id, yes } => {
            let mut view = load_detail(&api, id).await?;
            let route = view
                .delete_post(&api, |prompt| yes || confirm(prompt))
                .await
                .map_err(map_alert)?;
            match route {
                Some(_) => println!("Пост удалён: id={}", view.post_id()),
                None => println!("Отменено"),
            }
        }
        Command::Like { id } => {
            let mut view = load_detail(&api, id).await?;
            view.toggle_like(&api).await.map_err(map_alert)?;
            print_detail(&view, json)?;
        }
        Command::Whoami => {
            let session = resolve_session(&api).await;
            if json {
                print_json(&session)?;
            } else {
                print!("{}", render::render_session(session.as_ref()));
            }
        }
        Command::Login { email, password } => {
            auth::login(&api, &store, &credentials, &email, &password)
                .await
                .map_err(map_alert)?;
            println!("Вход выполнен, токен сохранён в {}", settings.token_file);
        }
        Command::Signup {
            email,
            password,
            nickname,
        } => {
            auth::signup(&api, &email, &password, &nickname)
                .await
                .map_err(map_alert)?;
            println!("Регистрация успешна, выполните `board-cli login ...`");
        }
        Command::Logout => {
            auth::logout(&store, &credentials).map_err(map_alert)?;
            println!("Выход выполнен");
        }
        Command::Admin { command } => {
            let mut view = AdminView::new();
            view.load(&api).await;
            if let board_client::LoadStatus::Failed(message) = view.status() {
                anyhow::bail!("не удалось загрузить пользователей: {message}");
            }
            match command {
                AdminCommand::Users => {}
                AdminCommand::ToggleRole { id } => {
                    view.toggle_role(&api, &id).await.map_err(map_alert)?;
                }
                AdminCommand::ToggleBlock { id } => {
                    view.toggle_block(&api, &id).await.map_err(map_alert)?;
                }
            }
            if json {
                print_json(&view.users())?;
            } else {
                print!("{}", render::render_users(view.users()));
            }
        }
    }

    Ok(())
}

async fn load_detail(api: &ApiClient, id: String) -> Result<DetailView> {
    let mut view = DetailView::new(id);
    view.load(api).await;
    if let board_client::LoadStatus::Failed(message) = view.status() {
        anyhow::bail!("не удалось загрузить пост {}: {message}", view.post_id());
    }
    Ok(view)
}

fn print_detail(view: &DetailView, json: bool) -> Result<()> {
    if json {
        return print_json(&view.post());
    }
    print!("{}", render::render_detail(view));
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let raw = serde_json::to_string_pretty(value).context("не удалось сериализовать ответ")?;
    println!("{raw}");
    Ok(())
}

fn confirm(prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    parse_confirmation(&answer)
}

fn parse_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn normalize_server(server: String) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

fn map_alert(alert: Alert) -> anyhow::Error {
    anyhow::anyhow!(alert.message())
}
