use crate::core::GenerationPolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dispatch_bench")]
#[command(about = "Compare visitor-based and pattern-matching dispatch over large object collections")]
#[command(version)]
pub struct Cli {
    /// Log level for diagnostic output (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the dispatch experiment
    Run {
        /// Generation policy to run
        #[arg(short, long, default_value = "all")]
        policy: PolicySelection,

        /// Number of objects in the collection (N)
        #[arg(short = 'n', long)]
        objects: Option<usize>,

        /// Number of timed sweeps per repetition (M)
        #[arg(short, long)]
        measurements: Option<usize>,

        /// Number of repetitions (K)
        #[arg(short, long)]
        repetitions: Option<usize>,

        /// Number of additional worker threads (0 = sequential)
        #[arg(short, long)]
        threads: Option<usize>,

        /// Fixed seed for the randomized policy
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file path for the JSON report
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only print final verdicts
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print the effective configuration as JSON
    ShowConfig {
        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicySelection {
    Sequential,
    Randomized,
    Repetitive,
    All,
}

impl PolicySelection {
    /// 実行するポリシーの一覧
    pub fn policies(self) -> Vec<GenerationPolicy> {
        match self {
            Self::Sequential => vec![GenerationPolicy::Sequential],
            Self::Randomized => vec![GenerationPolicy::Randomized],
            Self::Repetitive => vec![GenerationPolicy::Repetitive],
            Self::All => GenerationPolicy::ALL.to_vec(),
        }
    }
}
