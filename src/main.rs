use anyhow::{Context, Result};
use clap::Parser;
use deploy_fixtures::cli::{Args, Commands};
use deploy_fixtures::constants::SUMMARY_PREFIX;
use deploy_fixtures::manifest::{manifest, FixtureContent};
use deploy_fixtures::{error, generate_fixtures, info, logger, verify_fixtures, GenerateOptions};

fn main() {
    let args = Args::parse();
    logger::init(args.quiet, args.verbose);

    if let Err(e) = run(args.command) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Generate { output, seed } => {
            let options = GenerateOptions::new(&output, seed)?;
            generate_fixtures(&options)
                .with_context(|| format!("failed to generate fixtures in {}", output.display()))?;
        }
        Commands::Verify { output, strict } => {
            verify_fixtures(&output, strict)
                .with_context(|| format!("fixture check failed in {}", output.display()))?;
        }
        Commands::List => show_manifest(),
    }

    Ok(())
}

fn show_manifest() {
    info!("{} Fixture manifest:", SUMMARY_PREFIX);
    for entry in manifest() {
        let kind = match entry.content {
            FixtureContent::Text(_) => "text",
            FixtureContent::Random { .. } => "random",
        };
        info!("  {:<30} {:>6} bytes  {}", entry.path, entry.expected_len(), kind);
    }
}
