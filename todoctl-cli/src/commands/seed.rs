//! Seed command: placeholder tasks for trying the API out

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;

use todoctl_server::db::TaskRepo;
use todoctl_server::models::NewTask;
use todoctl_server::Store;

const SEED_VALUE: &str = "Call Mom";

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Owner of the new tasks (must already exist)
    #[arg(long)]
    pub user_id: i32,

    /// Number of tasks to insert
    #[arg(long, short = 'n', default_value_t = 5)]
    pub count: usize,

    /// Database URL (required; falls back to DATABASE_URL)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

fn seed_task(user_id: i32) -> Result<NewTask> {
    let due_date = NaiveDate::from_ymd_opt(2023, 7, 7).context("invalid seed date")?;
    Ok(NewTask {
        user_id,
        value: SEED_VALUE.to_string(),
        due_date,
        status: false,
    })
}

/// Insert `count` placeholder tasks for one user
pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let database_url = super::database_url(args.database_url)?;
    let store = Store::connect(&database_url)
        .await
        .context("Failed to create database pool")?;

    let repo = TaskRepo::new(&store);
    let mut created = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        let task = repo
            .create(seed_task(args.user_id)?)
            .await
            .with_context(|| format!("Failed to seed task for user {}", args.user_id))?;
        tracing::debug!(task_id = task.id, "seeded task");
        created.push(task.id);
    }

    store.close().await;
    println!(
        "Seeded {} task(s) for user {}: {:?}",
        created.len(),
        args.user_id,
        created
    );
    Ok(())
}
