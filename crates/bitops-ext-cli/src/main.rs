use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use bitops_ext::{Arguments, BitOpsExtension, Value};

#[derive(Parser)]
#[command(name = "bitops-ext")]
#[command(about = "Bitwise operator blocks for Scratch-style block runtimes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the registration descriptor as JSON
    Info {
        #[arg(long, help = "Pretty-print the JSON payload")]
        pretty: bool,
    },
    /// Evaluate a single block
    Eval {
        #[arg(help = "Block opcode (bitAnd, bitOr, bitXor, bitInv, bitSft, bitRebase)")]
        opcode: String,

        #[arg(
            short,
            long = "arg",
            value_name = "NAME=VALUE",
            help = "Block argument, repeatable (e.g. --arg LEFT=12 --arg RIGHT=10)"
        )]
        args: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info { pretty } => {
            let info = BitOpsExtension::new().info();
            let json = if pretty {
                serde_json::to_string_pretty(&info)
            } else {
                serde_json::to_string(&info)
            }
            .context("Failed to serialize descriptor")?;
            println!("{json}");
        }
        Commands::Eval { opcode, args } => {
            let arguments = parse_arguments(&args)?;
            let result = BitOpsExtension::new().evaluate(&opcode, &arguments)?;
            println!("{result}");
        }
    }

    Ok(())
}

/// Parse `NAME=VALUE` pairs into an argument map. Values that parse as
/// numbers become numbers; everything else stays text, which matches how
/// the host resolves typed-in block inputs.
fn parse_arguments(pairs: &[String]) -> Result<Arguments> {
    let mut arguments = Arguments::new();
    for pair in pairs {
        let (name, raw) = pair
            .split_once('=')
            .with_context(|| format!("invalid argument '{pair}', expected 'NAME=VALUE'"))?;
        let value = match raw.parse::<f64>() {
            Ok(n) => Value::Number(n),
            Err(_) => Value::text(raw),
        };
        arguments.set(name, value);
    }
    Ok(arguments)
}
