use catalog::{EntityKind, InventoryRecord, LOGIN_PATH, LoginRequest, Product, TokenResponse, bearer, endpoint_url};
use clap::{Args, Parser, Subcommand};
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing token; pass --token or set STOCKROOM_TOKEN")]
    MissingToken,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status} for {path}: {message}")]
    ServerError { status: u16, path: String, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "stockroom-cli", about = "Inventory catalog API CLI")]
struct Cli {
    #[arg(long, env = "STOCKROOM_API_BASE", default_value = "http://localhost:8000")]
    base_url: String,

    #[arg(long, env = "STOCKROOM_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    token: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exchange credentials for a token and print it.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Products,
    Locations,
    Inventory(InventoryCommand),
    /// Inventory rows at or below their reorder point, across all products.
    LowStock,
}

#[derive(Args, Debug)]
struct InventoryCommand {
    #[command(subcommand)]
    command: InventorySubcommand,
}

#[derive(Subcommand, Debug)]
enum InventorySubcommand {
    Product { id: i64 },
    Location { id: i64 },
}

impl InventorySubcommand {
    fn target(&self) -> (EntityKind, i64) {
        match *self {
            Self::Product { id } => (EntityKind::Product, id),
            Self::Location { id } => (EntityKind::Location, id),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext { base_url: cli.base_url, token: cli.token };

    match cli.command {
        Command::Login { email, password } => run_login(&ctx, email, password).await,
        Command::Products => print_list(&ctx, EntityKind::Product).await,
        Command::Locations => print_list(&ctx, EntityKind::Location).await,
        Command::Inventory(inventory) => {
            let (kind, id) = inventory.command.target();
            let json = get_json::<Value>(&ctx, &kind.inventory_path(id)).await?;
            print_json(&json)
        }
        Command::LowStock => run_low_stock(&ctx).await,
    }
}

async fn run_login(cli: &CliContext, email: String, password: String) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let url = endpoint_url(&cli.base_url, LOGIN_PATH);
    let response = client
        .post(url)
        .json(&LoginRequest { email: email.trim().to_owned(), password })
        .send()
        .await?;
    let value = read_body(response, LOGIN_PATH).await?;
    let token: TokenResponse = serde_json::from_value(value)?;
    println!("{}", token.access_token);
    eprintln!("signed in as {} <{}>", token.user.display_name(), token.user.email);
    Ok(())
}

async fn print_list(cli: &CliContext, kind: EntityKind) -> Result<(), CliError> {
    let json = get_json::<Value>(cli, kind.list_path()).await?;
    print_json(&json)
}

async fn run_low_stock(cli: &CliContext) -> Result<(), CliError> {
    let products = get_json::<Vec<Product>>(cli, EntityKind::Product.list_path()).await?;
    let mut found = 0usize;
    for product in &products {
        let path = EntityKind::Product.inventory_path(product.id);
        let rows = get_json::<Vec<InventoryRecord>>(cli, &path).await?;
        for row in low_stock_rows(&rows) {
            println!("{}", low_stock_line(product, row));
            found += 1;
        }
    }
    if found == 0 {
        println!("no items need reordering");
    }
    Ok(())
}

/// Rows flagged for restocking, in response order.
fn low_stock_rows(rows: &[InventoryRecord]) -> impl Iterator<Item = &InventoryRecord> {
    rows.iter().filter(|row| row.needs_reorder)
}

fn low_stock_line(product: &Product, row: &InventoryRecord) -> String {
    format!(
        "{} ({}) @ {}: qty {} (reorder at {})",
        product.name, product.sku, row.counterpart_name, row.quantity, row.reorder_point
    )
}

async fn get_json<T: DeserializeOwned>(cli: &CliContext, path: &str) -> Result<T, CliError> {
    let token = cli.token.as_deref().ok_or(CliError::MissingToken)?;
    let client = reqwest::Client::new();
    let response = client
        .get(endpoint_url(&cli.base_url, path))
        .header(AUTHORIZATION, bearer(token))
        .send()
        .await?;
    let value = read_body(response, path).await?;
    Ok(serde_json::from_value(value)?)
}

async fn read_body(response: reqwest::Response, path: &str) -> Result<Value, CliError> {
    let status = response.status().as_u16();
    let text = response.text().await?;
    parse_body(status, &text, path)
}

/// Successful responses must be JSON; error bodies are best-effort.
fn parse_body(status: u16, text: &str, path: &str) -> Result<Value, CliError> {
    if (200..300).contains(&status) {
        return Ok(serde_json::from_str(text)?);
    }
    let message = match serde_json::from_str::<Value>(text) {
        Ok(value) => server_message(&value),
        Err(_) => text.trim().to_owned(),
    };
    Err(CliError::ServerError { status, path: path.to_owned(), message })
}

/// FastAPI-style `{"detail": ...}` bodies collapse to their detail text.
fn server_message(value: &Value) -> String {
    match value.get("detail") {
        Some(Value::String(detail)) => detail.clone(),
        Some(other) => other.to_string(),
        None => value.to_string(),
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
