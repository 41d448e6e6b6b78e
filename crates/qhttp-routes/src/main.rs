//! qhttp-routes CLI
//!
//! Loads a route table and resolves or dispatches requests against it
//! without opening a socket.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use qhttp_router::{Dispatcher, Request};
use qhttp_routes::RouteTable;

/// Inspect and exercise a qhttp route table.
#[derive(Parser)]
#[command(name = "qhttp-routes")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Route table file (JSON).
    #[arg(short, long, env = "QHTTP_ROUTES", default_value = "routes.json")]
    table: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route tree.
    Tree,

    /// Check whether a method and path have a handler.
    Resolve {
        /// Request method, e.g. GET.
        method: String,

        /// Request path, e.g. /status/check.
        path: String,
    },

    /// Run a request through the router and print the response.
    Dispatch {
        /// Request method, e.g. GET.
        method: String,

        /// Request target; may include a query string.
        target: String,

        /// Extra request header as `Name: value`. Repeatable.
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,

        /// Request body.
        #[arg(short, long)]
        body: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let table = RouteTable::load(&cli.table)?;
    let dispatcher = table.into_router()?.build();
    info!(routes = dispatcher.len(), "route table ready");

    match cli.command {
        Commands::Tree => {
            print_tree(&dispatcher);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Resolve { method, path } => match dispatcher.resolve(&method, &path) {
            Ok(_) => {
                println!("{method} {path}: matched");
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => {
                println!("{err}");
                Ok(ExitCode::FAILURE)
            }
        },
        Commands::Dispatch {
            method,
            target,
            headers,
            body,
        } => {
            let mut request = Request::new(method, &target);
            for header in &headers {
                let (name, value) = header
                    .split_once(':')
                    .with_context(|| format!("Header '{header}' is not 'Name: value'"))?;
                request = request.header(name.trim(), value.trim());
            }
            if let Some(body) = body {
                request = request.body(body);
            }

            let response = dispatcher.dispatch(request).await;
            println!("{} {}", response.status, response.status_text());
            let mut headers: Vec<_> = response.headers.iter().collect();
            headers.sort();
            for (name, value) in headers {
                println!("{name}: {value}");
            }
            println!();
            println!("{}", String::from_utf8_lossy(&response.body));

            Ok(if response.status < 400 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

fn print_tree(dispatcher: &Dispatcher) {
    for entry in dispatcher.routes() {
        let indent = "  ".repeat(entry.depth);
        if entry.methods.is_empty() {
            println!("{indent}{}", entry.segment);
        } else {
            println!("{indent}{}  [{}]", entry.segment, entry.methods.join(", "));
        }
    }
}
