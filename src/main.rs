use clap::{Parser as ClapParser, Subcommand};
use fql_expr::cli::{self, CliError};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "fql")]
#[command(about = "fql - Build FQL query expressions and render them as wire JSON")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an expression written in debug syntax as wire JSON
    Wire {
        /// Expression, e.g. 'Get(RefCollection(Collection("users"), "1"))'
        expr: String,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print an expression back in canonical debug syntax
    Debug {
        /// Expression in debug syntax
        expr: String,
    },

    /// Wrap a JSON document as query data and render its wire JSON
    Wrap {
        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// List every combinator with its wire fields and modifiers
    Ops,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Wire { expr, pretty } => cli::render_wire(&expr, pretty),
        Commands::Debug { expr } => cli::render_debug(&expr),
        Commands::Wrap { input, pretty } => {
            read_input(input).and_then(|json| cli::wrap_json(&json, pretty))
        }
        Commands::Ops => Ok(cli::list_ops()),
    };

    match result {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn read_input(input: Option<String>) -> Result<String, CliError> {
    match input {
        Some(s) => Ok(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        None => Err(CliError::NoInput),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("FQL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
