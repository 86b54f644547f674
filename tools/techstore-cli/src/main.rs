//! TechStore CLI - terminal storefront over the techstore state engine.
//!
//! Commands:
//! - `techstore browse` - One-shot filtered/sorted product listing
//! - `techstore brands` - List brands with product counts
//! - `techstore shop` - Interactive storefront session

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BrandsArgs, BrowseArgs};

/// TechStore CLI - browse the catalog and shop from the terminal
#[derive(Parser)]
#[command(name = "techstore")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Catalog JSON file (default: embedded demo catalog)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the filtered and sorted product view
    Browse(BrowseArgs),

    /// List brands with product counts
    Brands(BrandsArgs),

    /// Start an interactive shopping session
    Shop,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "techstore=debug"
    } else {
        "techstore=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = context::Context::new(cli.catalog.clone(), output);

    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Brands(args) => commands::brands::run(args, &ctx),
        Commands::Shop => commands::shop::run(&ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browse_args_parse() {
        let cli = Cli::try_parse_from([
            "techstore", "browse", "--search", "phone", "--brand", "Apple", "--sort", "price-low",
        ])
        .unwrap();

        match cli.command {
            Commands::Browse(args) => {
                assert_eq!(args.search, "phone");
                assert_eq!(args.brand, "Apple");
                assert_eq!(args.sort, "price-low");
            }
            _ => panic!("expected browse command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "techstore",
            "brands",
            "--json",
            "--catalog",
            "catalog.json",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.catalog.as_deref(), Some("catalog.json"));
    }

    #[test]
    fn test_browse_defaults() {
        let cli = Cli::try_parse_from(["techstore", "browse"]).unwrap();
        match cli.command {
            Commands::Browse(args) => {
                assert_eq!(args.search, "");
                assert_eq!(args.brand, "ALL");
                assert_eq!(args.sort, "default");
            }
            _ => panic!("expected browse command"),
        }
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(Cli::try_parse_from(["techstore", "deploy"]).is_err());
    }
}
