use crate::constants::DEFAULT_OUTPUT_ROOT;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "deploy-fixtures",
    about = "Generate file fixtures with overwrite and rename-conflict scenarios",
    long_about = "deploy-fixtures writes a fixed tree of text files, a random binary file, a nested \
                  directory and pre-populated conflict directories. The tree is meant as input for \
                  tools that copy, move or deploy files and must handle name collisions.",
    version = "0.1.0",
    after_help = "EXAMPLES:\n  \
    deploy-fixtures generate\n  \
    deploy-fixtures generate -o ./fixtures --seed 42\n  \
    deploy-fixtures verify -o ./fixtures --strict\n  \
    deploy-fixtures list"
)]
pub struct Args {
    #[arg(short = 'q', long, global = true, help = "Only print errors")]
    pub quiet: bool,

    #[arg(short = 'v', long, global = true, help = "Print one line per file")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Write the fixture tree",
        long_about = "Write every fixture file under the output root. Missing directories are \
                      created and existing files are overwritten."
    )]
    Generate {
        #[arg(
            short = 'o',
            long,
            default_value = DEFAULT_OUTPUT_ROOT,
            help = "Output root directory"
        )]
        output: PathBuf,

        #[arg(
            short = 's',
            long,
            help = "Seed for data.bin",
            long_help = "Seed the random generator used for data.bin. \
                         The same seed always produces the same bytes."
        )]
        seed: Option<u64>,
    },

    #[command(
        about = "Check an existing fixture tree",
        long_about = "Check that every fixture exists with its expected content. \
                     data.bin is checked by length only."
    )]
    Verify {
        #[arg(
            short = 'o',
            long,
            default_value = DEFAULT_OUTPUT_ROOT,
            help = "Output root directory"
        )]
        output: PathBuf,

        #[arg(
            long,
            help = "Reject unknown files inside fixture directories",
            long_help = "Also fail when sub/, target/ or target_rename/ contain entries \
                         that are not part of the fixture set."
        )]
        strict: bool,
    },

    #[command(about = "Print the fixture manifest")]
    List,
}
