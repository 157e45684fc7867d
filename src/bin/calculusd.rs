use calculus::rpc::{DEFAULT_ADDR, server};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// calculusd evaluates arithmetic expressions for calculus clients over TCP.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// <host>:<port> to listen on.
    #[arg(short, long, default_value = DEFAULT_ADDR)]
    addr: String,

    /// Log every call.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
                             .init();

    let listener = server::bind(args.addr.as_str()).await.unwrap_or_else(|e| {
                                                              eprintln!("{e}");
                                                              std::process::exit(1);
                                                          });

    tracing::info!("Starting server on {}", args.addr);
    server::serve(listener).await;
}
