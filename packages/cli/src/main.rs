use std::net::IpAddr;
use std::process;

use clap::Parser;
use colored::*;
use todo_cli::config::Config;

#[derive(Parser)]
#[command(name = "todo-server")]
#[command(about = "In-memory to-do list HTTP server")]
#[command(version)]
struct Cli {
    /// Address to bind (overrides TODO_HOST)
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on (overrides TODO_PORT / PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    // Load .env file before reading RUST_LOG
    dotenvy::dotenv().ok();
    todo_cli::init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env()?.with_overrides(cli.host, cli.port)?;
    todo_cli::run_server(config).await
}
