//! lexigraph CLI
//!
//! Generate bridge-word poems from a corpus-derived word affinity graph.
//!
//! # Usage
//!
//! ```bash
//! lexigraph --corpus corpus.txt Seek to explore
//! lexigraph --corpus corpus.txt --representation vertex-map --show-graph Test the system.
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use lexigraph_core::{EdgeListGraph, Graph, VertexMapGraph};
use lexigraph_poet::{GraphPoet, PoetResult};

/// Graph backend the affinity graph is built with
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Representation {
    /// Discrete edge records, linear scans
    EdgeList,
    /// Per-vertex adjacency maps
    VertexMap,
}

#[derive(Parser, Debug)]
#[command(name = "lexigraph")]
#[command(about = "Generate bridge-word poems from a word affinity graph", long_about = None)]
struct Cli {
    /// Corpus file the affinity graph is derived from
    #[arg(short, long)]
    corpus: PathBuf,

    /// Graph representation backing the poet
    #[arg(long, value_enum, default_value_t = Representation::EdgeList)]
    representation: Representation,

    /// Print the derived affinity graph before the poem
    #[arg(long)]
    show_graph: bool,

    /// Enable debug logging (RUST_LOG overrides the level)
    #[arg(short, long)]
    verbose: bool,

    /// Input text to bridge
    input: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    let input = cli.input.join(" ");
    let result = match cli.representation {
        Representation::EdgeList => run(&cli, &input, EdgeListGraph::new()),
        Representation::VertexMap => run(&cli, &input, VertexMapGraph::new()),
    };

    match result {
        Ok(poem) => {
            println!("{poem}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run<G: Graph>(cli: &Cli, input: &str, graph: G) -> PoetResult<String> {
    let poet = GraphPoet::from_corpus_file(&cli.corpus, graph)?;
    if cli.show_graph {
        println!("{}", poet.graph());
    }
    Ok(poet.poem(input))
}
