use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use todolist_store::{FetchMode, TokenStore};

#[derive(Debug, Parser)]
#[command(name = "todolist", about = "Todo list client")]
pub struct Cli {
    /// Base URL of the todo API
    #[arg(
        long,
        global = true,
        env = "TODOLIST_API_URL",
        default_value = "http://127.0.0.1:3000"
    )]
    pub api_url: String,

    /// File holding the session token between runs
    #[arg(long, global = true, env = "TODOLIST_TOKEN_FILE")]
    pub token_file: Option<PathBuf>,

    /// How fetched lists merge into what is already loaded
    #[arg(
        long,
        global = true,
        env = "TODOLIST_FETCH_MODE",
        value_enum,
        default_value_t = FetchModeArg::Replace
    )]
    pub fetch_mode: FetchModeArg,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn token_store(&self) -> TokenStore {
        TokenStore::file(
            self.token_file
                .clone()
                .unwrap_or_else(TokenStore::default_path),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FetchModeArg {
    Replace,
    Append,
}

impl From<FetchModeArg> for FetchMode {
    fn from(arg: FetchModeArg) -> Self {
        match arg {
            FetchModeArg::Replace => FetchMode::Replace,
            FetchModeArg::Append => FetchMode::Append,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and save the session token
    Login {
        username: String,
        #[arg(long, env = "TODOLIST_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and sign in
    Register {
        username: String,
        #[arg(long, env = "TODOLIST_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        password_confirm: String,
    },
    /// Forget the saved session token
    Logout,
    /// Manage todos
    #[command(subcommand)]
    Todos(TodoCommand),
    /// Manage categories
    #[command(subcommand)]
    Categories(CategoryCommand),
    /// Manage the statuses of one category
    #[command(subcommand)]
    Statuses(StatusCommand),
}

#[derive(Debug, Subcommand)]
pub enum TodoCommand {
    /// List todos, optionally narrowed by category and/or status
    List {
        #[arg(long)]
        category: Option<i64>,
        #[arg(long)]
        status: Option<i64>,
    },
    Add {
        title: String,
        #[arg(long)]
        category: i64,
        #[arg(long)]
        status: i64,
    },
    Update {
        id: i64,
        title: String,
        #[arg(long)]
        category: i64,
        #[arg(long)]
        status: i64,
    },
    Delete {
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
pub enum CategoryCommand {
    List,
    Add { title: String },
    Update { id: i64, title: String },
    Delete { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum StatusCommand {
    List {
        #[arg(long)]
        category: i64,
    },
    Add {
        #[arg(long)]
        category: i64,
        title: String,
        #[arg(long)]
        color: String,
    },
    Update {
        #[arg(long)]
        category: i64,
        id: i64,
        title: String,
        #[arg(long)]
        color: String,
    },
    Delete {
        #[arg(long)]
        category: i64,
        id: i64,
    },
}
