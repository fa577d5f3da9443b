use clap::Parser;
use itertools::Itertools;
use render_context::{derivation, from_json, Derivation, RenderContext, Result};
use serde_json::json;
use tracing_subscriber::EnvFilter;

/// Simple runner: derive a render context from the command line.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Root context as JSON, e.g. '{"style":"display","size":5}'
    #[arg(long)]
    root: Option<String>,
    /// Derivation steps applied left to right: style:<s>, size:<n>, color:<c>, phantom, reset
    ops: Vec<String>,
    /// Print the named color table and exit
    #[arg(long, conflicts_with_all = ["root", "ops"])]
    list_colors: bool,
    /// Log every derivation step
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    // Parse CLI arguments.
    let args = Args::parse();

    // RUST_LOG wins over --verbose.
    let default_level = if args.verbose { "trace" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if args.list_colors {
        let table = render_context::color::names()
            .map(|(name, literal)| format!("{name:<14}{literal}"))
            .join("\n");
        println!("{table}");
        return;
    }

    match run(&args) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<String> {
    // Build the root context.
    let root = match args.root.as_deref() {
        Some(json) => from_json(json)?,
        None => RenderContext::default(),
    };

    // Parse every step before applying any of them.
    let steps = args
        .ops
        .iter()
        .map(|op| op.parse::<Derivation>())
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(steps = %steps.iter().join(" "), "applying derivations");

    let ctx = derivation::apply_all(&root, &steps);

    // Output result.
    let mut out = serde_json::to_value(&ctx)?;
    out["resolved_color"] = json!(ctx.get_color());
    Ok(serde_json::to_string_pretty(&out)?)
}
