//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::application::OutputStyle;

/// Sum of distances from every node of a tree to all other nodes, in linear time
#[derive(Parser, Debug)]
#[command(name = "treedist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug level: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file, layered over the global config
    #[arg(short, long, global = true, env = "TREEDIST_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Without a subcommand, prompts for n and the edges
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where a problem comes from. Without any of these, the user is prompted.
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Number of nodes
    #[arg(short, long, conflicts_with = "file")]
    pub nodes: Option<String>,

    /// Edge list, e.g. "[[0,1],[0,2]]" (default: no edges)
    #[arg(short, long, requires = "nodes", conflicts_with = "file")]
    pub edges: Option<String>,

    /// TOML problem file with `node_count` and `edges`
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Root for the internal traversal (results do not depend on it)
    #[arg(long, default_value_t = 0)]
    pub root: usize,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the distance sum of every node
    Solve {
        #[command(flatten)]
        input: InputArgs,
        /// Check the edge identity before printing
        #[arg(long)]
        verify: bool,
        /// Output format (default: from config)
        #[arg(short, long, value_enum)]
        style: Option<OutputStyle>,
    },

    /// Compare against a brute-force computation and the edge identity
    Check {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Show the rooted tree with subtree sizes and distance sums
    Tree {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create global config template
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show config paths
    Path,
}
