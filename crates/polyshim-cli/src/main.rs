use clap::{Parser, Subcommand};
use std::io::{self, BufWriter};
use std::process;

use polyshim_io::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "polyshim", version, about = "Structured-value inspector and console polyfill CLI")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a JSON document the way `app.print` does.
    Inspect {
        /// Input JSON path, or `-` for stdin
        input: String,
        /// Structures nested deeper than this are skipped
        #[arg(long, default_value_t = version::DEFAULT_DEPTH_CEILING)]
        depth_ceiling: usize,
        /// Indentation unit repeated once per level
        #[arg(long, default_value = "  ")]
        indent: String,
        /// Print the inspection report as JSON on stderr
        #[arg(long)]
        report: bool,
        /// Send lines to the log (stderr) instead of stdout
        #[arg(long)]
        trace: bool,
    },
    /// Print each argument on its own line, like `console.log`.
    ///
    /// Arguments that parse as JSON are converted to host values first.
    Log {
        #[arg(required = true)]
        args: Vec<String>,
    },
}

fn init_tracing(console_to_log: bool) -> anyhow::Result<()> {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if console_to_log {
        filter = filter.add_directive("polyshim::console=info".parse()?);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let console_to_log = matches!(cli.cmd, Command::Inspect { trace: true, .. });
    init_tracing(console_to_log)?;

    match cli.cmd {
        Command::Inspect {
            input,
            depth_ceiling,
            indent,
            report,
            trace,
        } => {
            let value = match load_json_input(&input) {
                Ok(v) => v,
                Err(e) => {
                    tracing::debug!(input = %input, error = ?e, "failed to load input");
                    eprintln!("{e}");
                    process::exit(1);
                }
            };

            let opts = InspectOptions {
                depth_ceiling,
                indent_unit: indent,
            };

            let summary = if trace {
                inspect_with_options(&value, &mut TracingSink, &opts)
            } else {
                let mut sink = WriterSink::new(BufWriter::new(io::stdout().lock()));
                let summary = inspect_with_options(&value, &mut sink, &opts);
                sink.finish()?;
                summary
            };

            if report {
                // Stable key order, one line, for CI consumption.
                eprintln!("{}", serde_json::to_string(&summary)?);
            }
        }
        Command::Log { args } => {
            let values: Vec<Value> = args
                .into_iter()
                .map(|arg| load_json_str(&arg).unwrap_or(Value::String(arg)))
                .collect();

            tracing::debug!(count = values.len(), "logging console arguments");
            let mut console = Console::new(WriterSink::new(BufWriter::new(io::stdout().lock())));
            console.log(&values);
            console.into_inner().finish()?;
        }
    }

    Ok(())
}
