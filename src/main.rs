// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Build the export configuration and run the export
// 4. Print a summary of the written posts
// 5. Exit with proper code (0 = success, 1 = error)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod config;        // src/config.rs - explicit run configuration
mod error;         // src/error.rs - error type for the whole pipeline
mod export;        // src/export.rs - fetch, enrich, write
mod github;        // src/github/ - GitHub REST client
mod logging;       // src/logging.rs - tracing subscriber setup
mod render;        // src/render/ - post rendering and writing

use clap::Parser;

use cli::{Cli, Commands, ExportArgs};
use config::ExportConfig;

// anyhow::Result at the binary edge; the library code uses ExportError
use anyhow::{Context, Result};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::configure_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Export(args) => handle_export(args).await,
    }
}

// Handles the 'export' subcommand
async fn handle_export(args: ExportArgs) -> Result<()> {
    let json = args.json;
    let config = ExportConfig::from_args(args)?;

    eprintln!("📥 Exporting issues of {}", config.repo);
    if config.dry_run {
        eprintln!("🧪 Dry run: nothing will be written");
    }

    let posts = export::run_export(&config)
        .await
        .with_context(|| format!("Export of {} failed", config.repo))?;

    print_results(&posts, json)
}

// Prints the results either as a table or JSON
fn print_results(posts: &[render::ExportedPost], json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(posts)?;
        println!("{}", json_output);
    } else {
        print_table(posts);
    }
    Ok(())
}

// Prints results as a human-readable table in the terminal
fn print_table(posts: &[render::ExportedPost]) {
    println!("{:<8} {:<10} {:<32} {:<40}", "NUMBER", "COMMENTS", "PATH", "TITLE");
    println!("{}", "=".repeat(90));

    for post in posts {
        let path = post.path.display().to_string();

        // Truncate title if too long for display
        let title = if post.title.chars().count() > 37 {
            format!("{}...", post.title.chars().take(37).collect::<String>())
        } else {
            post.title.clone()
        };

        println!("{:<8} {:<10} {:<32} {:<40}", post.number, post.comments, path, title);
    }

    println!();

    let comment_count: usize = posts.iter().map(|p| p.comments).sum();

    println!("📊 Summary:");
    println!("   📝 Posts: {}", posts.len());
    println!("   💬 Comments: {}", comment_count);
}
