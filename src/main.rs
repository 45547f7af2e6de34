use anyhow::Result;
use clap::{Parser, Subcommand};
use fitblog_lib::domain::value_objects::{PostId, UserId};
use fitblog_lib::presentation::dto::ApiResponse;
use fitblog_lib::presentation::dto::profile_dto::UpdateProfileRequest;
use fitblog_lib::{AppConfig, AppError, AppState, init_logging};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "fitblog")]
#[command(about = "Drive the FitBlog views against the built-in sample data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log filter, e.g. "debug" or "fitblog=trace" (defaults to FITBLOG_LOG_FILTER)
    #[arg(short, long, env = "LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "JSON_LOGS")]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the home feed
    Feed {
        /// Search text matched against title and excerpt
        #[arg(short, long, default_value = "")]
        query: String,
        /// Tag to select (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Toggle the like on a post first
        #[arg(long)]
        like: Option<u64>,
        /// Toggle the bookmark on a post first
        #[arg(long)]
        bookmark: Option<u64>,
    },
    /// Show a post with its comments
    Post {
        id: u64,
        /// Comment to submit
        #[arg(long)]
        comment: Option<String>,
        #[arg(long)]
        like: bool,
        #[arg(long)]
        bookmark: bool,
        #[arg(long)]
        share: bool,
    },
    /// Show the admin dashboard
    Admin {
        #[arg(short, long, default_value = "")]
        query: String,
        #[arg(long)]
        delete_post: Option<u64>,
        #[arg(long)]
        toggle_role: Option<u64>,
        #[arg(long)]
        delete_user: Option<u64>,
    },
    /// Show or edit the profile
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        location: Option<String>,
        /// Discard the edits instead of saving them
        #[arg(long)]
        cancel: bool,
    },
    /// Submit the login form
    Login {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long)]
        remember_me: bool,
    },
    /// Submit the registration form
    Register {
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        confirm_password: String,
        #[arg(long)]
        accept_terms: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env();

    let filter = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.filter.clone());
    init_logging(&filter, cli.json_logs || config.logging.json)?;

    info!("Starting FitBlog v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config)?;
    let output = run(&state, cli.command).await;

    let toasts = state.notifier.recent().await;
    let route = state.navigator.current().await;
    let report = json!({
        "result": output,
        "toasts": toasts,
        "route": route.path(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn envelope<T: Serialize>(result: Result<T, AppError>) -> serde_json::Value {
    serde_json::to_value(ApiResponse::from_result(result)).unwrap_or_else(|e| {
        json!({ "success": false, "error": e.to_string(), "error_code": "SERIALIZATION_ERROR" })
    })
}

async fn run(state: &AppState, command: Commands) -> serde_json::Value {
    match command {
        Commands::Feed {
            query,
            tags,
            like,
            bookmark,
        } => envelope(run_feed(state, query, tags, like, bookmark).await),
        Commands::Post {
            id,
            comment,
            like,
            bookmark,
            share,
        } => envelope(run_post(state, PostId::new(id), comment, like, bookmark, share).await),
        Commands::Admin {
            query,
            delete_post,
            toggle_role,
            delete_user,
        } => envelope(run_admin(state, query, delete_post, toggle_role, delete_user).await),
        Commands::Profile {
            name,
            email,
            bio,
            location,
            cancel,
        } => {
            let request = UpdateProfileRequest {
                name,
                email,
                bio,
                location,
            };
            envelope(run_profile(state, request, cancel).await)
        }
        Commands::Login {
            email,
            password,
            remember_me,
        } => {
            let mut handler = state.login_handler();
            handler.set_email(email);
            handler.set_password(password);
            handler.set_remember_me(remember_me);
            let result = handler.submit().await;
            envelope(result.map(|()| handler.form_state()))
        }
        Commands::Register {
            first_name,
            last_name,
            email,
            password,
            confirm_password,
            accept_terms,
        } => {
            let mut handler = state.register_handler();
            {
                let form = handler.form_mut();
                form.first_name = first_name;
                form.last_name = last_name;
                form.email = email;
                form.password = password;
                form.confirm_password = confirm_password;
                form.accept_terms = accept_terms;
            }
            let result = handler.submit().await;
            envelope(result.map(|()| handler.form_state()))
        }
    }
}

async fn run_feed(
    state: &AppState,
    query: String,
    tags: Vec<String>,
    like: Option<u64>,
    bookmark: Option<u64>,
) -> Result<impl Serialize, AppError> {
    let mut handler = state.feed_handler();
    if let Some(id) = like {
        handler.toggle_like(PostId::new(id)).await?;
    }
    if let Some(id) = bookmark {
        handler.toggle_bookmark(PostId::new(id)).await?;
    }
    handler.set_search(query);
    for tag in &tags {
        handler.toggle_tag(tag);
    }
    debug!(tags = tags.len(), "feed filter set");
    handler.view().await
}

async fn run_post(
    state: &AppState,
    id: PostId,
    comment: Option<String>,
    like: bool,
    bookmark: bool,
    share: bool,
) -> Result<impl Serialize, AppError> {
    let mut handler = state.post_handler(id);
    if like {
        handler.toggle_like().await?;
    }
    if bookmark {
        handler.toggle_bookmark().await?;
    }
    if share {
        handler.share().await?;
    }
    if let Some(text) = comment {
        handler.set_comment_draft(text);
        handler.submit_comment().await?;
    }
    handler.view().await
}

async fn run_admin(
    state: &AppState,
    query: String,
    delete_post: Option<u64>,
    toggle_role: Option<u64>,
    delete_user: Option<u64>,
) -> Result<impl Serialize, AppError> {
    let mut handler = state.admin_handler();
    if let Some(id) = delete_post {
        handler.delete_post(PostId::new(id)).await?;
    }
    if let Some(id) = toggle_role {
        handler.toggle_user_role(UserId::new(id)).await?;
    }
    if let Some(id) = delete_user {
        handler.delete_user(UserId::new(id)).await?;
    }
    handler.set_search(query);
    handler.view().await
}

async fn run_profile(
    state: &AppState,
    request: UpdateProfileRequest,
    cancel: bool,
) -> Result<impl Serialize, AppError> {
    let mut handler = state.profile_handler().await?;
    if !request.is_empty() {
        handler.begin_edit();
        handler.apply(&request).await?;
        if cancel {
            handler.cancel()?;
        } else {
            handler.save().await?;
        }
    }
    handler.view().await
}
