use std::io::{self, BufRead};

use calculus::{
    calculate, compile,
    rpc::{Client, DEFAULT_ADDR},
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// calculus reads one arithmetic expression from standard input and prints
/// its value, evaluated by a calculus server unless told otherwise.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// <host>:<port> of the server.
    #[arg(short, long, default_value = DEFAULT_ADDR)]
    addr: String,

    /// Evaluate the expression in this process instead of calling the server.
    #[arg(short, long)]
    local: bool,

    /// Print the compiled postfix form instead of the value. Implies --local.
    #[arg(short, long)]
    rpn: bool,

    /// Log debug output to standard error.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_writer(io::stderr)
                             .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
                             .init();

    let expression = read_expression().unwrap_or_else(|e| fail(&e));

    match run(&args, &expression).await {
        Ok(output) => println!("{output}"),
        Err(e) => fail(&e),
    }
}

async fn run(args: &Args, expression: &str) -> Result<String, Box<dyn std::error::Error>> {
    if args.rpn {
        return Ok(compile(expression)?.to_string());
    }
    if args.local {
        return Ok(calculate(expression)?.to_string());
    }

    let mut client = Client::connect(args.addr.as_str()).await?;
    tracing::debug!(addr = %args.addr, "connected");

    Ok(client.calculate(expression).await?.to_string())
}

/// Reads the first line of standard input without its line terminator.
fn read_expression() -> io::Result<String> {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof,
                                  "No expression on standard input."));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn fail(e: &dyn std::fmt::Display) -> ! {
    eprintln!("{e}");
    std::process::exit(1);
}
