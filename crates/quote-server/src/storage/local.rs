//! Local PostgreSQL provisioning
//!
//! Starts (or restarts) a `postgres` Docker container on this machine and
//! makes sure the target database exists before handing back a pool.

use anyhow::{anyhow, bail, Context, Result};
use sqlx::postgres::{PgConnectOptions, PgConnection, PgPool, PgPoolOptions, PgSslMode};
use sqlx::{Connection, Executor};
use tokio::process::Command;
use tracing::{info, warn};

const CONTAINER_NAME: &str = "postgres";
const CONTAINER_IMAGE: &str = "postgres:alpine";

/// Connection parameters for the local database
#[derive(Debug, Clone)]
pub struct LocalDbParams {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub ssl_mode: PgSslMode,
}

impl LocalDbParams {
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            database: database.into(),
            ssl_mode: PgSslMode::Disable,
        }
    }

    fn connect_options(&self, database: &str) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(database)
            .ssl_mode(self.ssl_mode)
    }
}

/// Make sure the container is running, then the database, then connect.
pub async fn run_local_db(params: &LocalDbParams) -> Result<PgPool> {
    ensure_container().await?;
    ensure_database(params).await
}

async fn docker(args: &[&str]) -> Result<String> {
    let output = Command::new("docker")
        .args(args)
        .output()
        .await
        .context("Failed to run docker")?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    if !output.status.success() {
        return Err(anyhow!(
            "docker {} exited with {}: {}{}",
            args.first().copied().unwrap_or_default(),
            output.status,
            stdout,
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    Ok(stdout)
}

/// Start the `postgres` container unless it is already running.
pub async fn ensure_container() -> Result<()> {
    let filter = format!("name={}", CONTAINER_NAME);
    let running = docker(&["ps", "-f", &filter, "--format", "{{.Names}}"]).await?;
    if !running.trim().is_empty() {
        info!("PostgreSQL container already running");
        return Ok(());
    }

    match docker(&["restart", CONTAINER_NAME]).await {
        Ok(_) => info!("Restarted PostgreSQL container"),
        Err(e) => {
            warn!("Could not restart PostgreSQL container: {:#}", e);
            let password = "POSTGRES_PASSWORD=postgres";
            docker(&[
                "run",
                "-d",
                "--name",
                CONTAINER_NAME,
                "-p",
                "5432:5432",
                "-e",
                password,
                CONTAINER_IMAGE,
            ])
            .await
            .context("Failed to start PostgreSQL container")?;
            info!("Started new PostgreSQL container");
        }
    }

    Ok(())
}

/// Database names are interpolated into `CREATE DATABASE`, so only plain
/// identifiers are accepted.
pub fn validate_database_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !valid_start
        || name.len() > 63
        || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        bail!("Invalid database name: {:?}", name);
    }
    Ok(())
}

/// Create the target database if it does not exist and connect to it.
pub async fn ensure_database(params: &LocalDbParams) -> Result<PgPool> {
    validate_database_name(&params.database)?;

    let mut admin = PgConnection::connect_with(&params.connect_options("postgres"))
        .await
        .context("Failed to connect to the postgres maintenance database")?;

    let count: i64 = sqlx::query_scalar("SELECT count(*) FROM pg_database WHERE datname = $1")
        .bind(&params.database)
        .fetch_one(&mut admin)
        .await
        .context("Failed to look up database")?;

    if count == 0 {
        info!("Creating database {}", params.database);
        let statement = format!("CREATE DATABASE \"{}\"", params.database);
        (&mut admin)
            .execute(statement.as_str())
            .await
            .with_context(|| format!("Failed to create database {}", params.database))?;
    }
    admin.close().await.ok();

    PgPoolOptions::new()
        .connect_with(params.connect_options(&params.database))
        .await
        .with_context(|| format!("Failed to connect to database {}", params.database))
}
