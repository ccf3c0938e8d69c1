use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use schemagen::{generate, generate_file, parse_schema, GenOptions, SchemagenError};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "schemagen")]
#[command(about = "Generate Rust structs from JSON Schema documents", long_about = None)]
struct Cli {
    /// Log at debug level unless `RUST_LOG` says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Rust struct from a JSON Schema file
    GenRust {
        /// Input `.json` schema file
        #[arg(short, long)]
        input: PathBuf,

        /// Output `.rs` file (if omitted, prints to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Name of the module wrapping the generated struct
        #[arg(short, long, default_value = "schema")]
        module: String,

        /// Derive `Serialize`/`Deserialize` and keep original property names
        #[arg(long)]
        serde: bool,

        /// Trait to derive on the struct; repeat for several
        #[arg(long = "derive", default_values_t = ["Debug".to_string(), "Clone".to_string()])]
        derives: Vec<String>,
    },

    /// Print the parsed syntax tree of a JSON Schema file as JSON
    Ast {
        /// Input `.json` schema file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), SchemagenError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}

fn run(cli: Cli) -> Result<(), SchemagenError> {
    match cli.command {
        Commands::GenRust { input, output, module, serde, derives } => {
            let options = GenOptions { module, derives, serde };
            debug!(?options, input = %input.display(), "generating");

            if let Some(out_path) = output {
                generate_file(&input, &out_path, &options)?;
                eprintln!("Generated {} → {}", input.display(), out_path.display());
            } else {
                let bytes = fs::read(&input)?;
                print!("{}", generate(&bytes, &options)?);
            }
            Ok(())
        }

        Commands::Ast { input } => {
            let bytes = fs::read(&input)?;
            let schema = parse_schema(&bytes)?;
            let json = serde_json::to_string_pretty(&schema)
                .map_err(|e| SchemagenError::Io(e.into()))?;
            println!("{}", json);
            Ok(())
        }
    }
}
