mod config;
mod output;

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use todolist_core::auth::{Credentials, Registration};
use todolist_service::HttpService;
use todolist_core::Status;
use todolist_store::{ApiStatus, CategoriesState, Session, Store};
use tracing::{debug, warn};

use config::{CategoryCommand, Cli, Command, StatusCommand, TodoCommand};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    debug!("api: {}", cli.api_url);

    let session = Session::restore(cli.token_store())?;
    let service = Arc::new(HttpService::new(&cli.api_url));
    let mut store = Store::new(service, session).with_fetch_mode(cli.fetch_mode.into());

    run(&mut store, cli.command).await
}

async fn run(store: &mut Store, command: Command) -> Result<()> {
    match command {
        Command::Login { username, password } => {
            store
                .login(&Credentials::new(&username, &password)?)
                .await?;
            eprintln!("Signed in as {username}");
        }
        Command::Register {
            username,
            password,
            password_confirm,
        } => {
            store
                .register(&Registration::new(&username, &password, &password_confirm)?)
                .await?;
            eprintln!("Registered and signed in as {username}");
        }
        Command::Logout => {
            store.logout()?;
            eprintln!("Signed out");
        }
        Command::Todos(cmd) => todos(store, cmd).await?,
        Command::Categories(cmd) => categories(store, cmd).await?,
        Command::Statuses(cmd) => statuses(store, cmd).await?,
    }
    Ok(())
}

/// Load both collections, failing when the todo fetch did.
async fn load(store: &mut Store) -> Result<()> {
    if !store.session().is_authenticated() {
        bail!("not signed in; run `todolist login` first");
    }
    store.start_session().await;
    if store.todos().api_status == ApiStatus::Failed {
        bail!(
            "could not load todos: {}",
            store.todos().api_error.as_deref().unwrap_or("unknown error")
        );
    }
    Ok(())
}

async fn todos(store: &mut Store, cmd: TodoCommand) -> Result<()> {
    load(store).await?;
    match cmd {
        TodoCommand::List { category, status } => {
            store.set_filter(category, status);
            let statuses = visible_statuses(store).await;
            let visible = store.todos().visible();
            print!(
                "{}",
                output::format_todos(&visible, store.categories(), &statuses)
            );
        }
        TodoCommand::Add {
            title,
            category,
            status,
        } => {
            let todo = store.add_todo(&title, category, status).await?;
            eprintln!("Created todo {}", todo.id);
        }
        TodoCommand::Update {
            id,
            title,
            category,
            status,
        } => {
            let todo = store.update_todo(id, &title, category, status).await?;
            eprintln!("Updated todo {}", todo.id);
        }
        TodoCommand::Delete { id } => {
            store.delete_todo(id).await?;
            eprintln!("Deleted todo {id}");
        }
    }
    Ok(())
}

/// Statuses of every category among the visible todos, one lookup each.
/// A failed lookup leaves that category's todos without a status label.
async fn visible_statuses(store: &Store) -> HashMap<i64, Vec<Status>> {
    let category_ids: BTreeSet<i64> = store
        .todos()
        .visible()
        .iter()
        .map(|t| t.category_id)
        .collect();
    let mut statuses = HashMap::new();
    for category_id in category_ids {
        match store.fetch_statuses(category_id).await {
            Ok(list) => {
                statuses.insert(category_id, list);
            }
            Err(e) => warn!("could not load statuses of category {category_id}: {e}"),
        }
    }
    statuses
}

fn require_categories(categories: &CategoriesState) -> Result<()> {
    if categories.api_status == ApiStatus::Failed {
        bail!(
            "could not load categories: {}",
            categories.api_error.as_deref().unwrap_or("unknown error")
        );
    }
    Ok(())
}

async fn categories(store: &mut Store, cmd: CategoryCommand) -> Result<()> {
    load(store).await?;
    require_categories(store.categories())?;
    match cmd {
        CategoryCommand::List => {
            print!("{}", output::format_categories(&store.categories().data));
        }
        CategoryCommand::Add { title } => {
            let category = store.add_category(&title).await?;
            eprintln!("Created category {}", category.id);
        }
        CategoryCommand::Update { id, title } => {
            let category = store.update_category(id, &title).await?;
            eprintln!("Updated category {}", category.id);
        }
        CategoryCommand::Delete { id } => {
            store.delete_category(id).await?;
            eprintln!("Deleted category {id}");
        }
    }
    Ok(())
}

async fn statuses(store: &mut Store, cmd: StatusCommand) -> Result<()> {
    load(store).await?;
    if !matches!(cmd, StatusCommand::List { .. }) {
        require_categories(store.categories())?;
    }
    match cmd {
        StatusCommand::List { category } => {
            let statuses = store.fetch_statuses(category).await?;
            print!("{}", output::format_statuses(&statuses));
        }
        StatusCommand::Add {
            category,
            title,
            color,
        } => {
            let mut list = store.status_list(category).await?;
            let status = list
                .add(store.service(), store.context(), &title, &color)
                .await?;
            eprintln!("Created status {}", status.id);
        }
        StatusCommand::Update {
            category,
            id,
            title,
            color,
        } => {
            let mut list = store.status_list(category).await?;
            let status = list
                .update(store.service(), store.context(), id, &title, &color)
                .await?;
            eprintln!("Updated status {}", status.id);
        }
        StatusCommand::Delete { category, id } => {
            let mut list = store.status_list(category).await?;
            list.delete(store.service(), store.context(), id).await?;
            eprintln!("Deleted status {id}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use todolist_store::CategoryAction;

    use super::*;

    #[test]
    fn failed_category_fetch_is_reported() {
        let mut categories = CategoriesState::default();
        assert!(require_categories(&categories).is_ok());

        categories.reduce(CategoryAction::FetchPending);
        categories.reduce(CategoryAction::FetchRejected("connection refused".into()));
        let err = require_categories(&categories).unwrap_err();
        assert_eq!(err.to_string(), "could not load categories: connection refused");
    }
}
