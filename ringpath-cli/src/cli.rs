//! Command-line interface orchestration for ringpath.
//!
//! `generate` prints a seeded random graph; `search` generates the same graph
//! and prints the path found between two vertices.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use ringpath_core::{
    Alphabet, CostedPath, GeneratorConfig, Graph, GraphError, Path, Vertex, breadth_first_search,
    cheapest_path, generate_graph_from_seed,
};
use thiserror::Error;
use tracing::info;

const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "ringpath", about = "Generate seeded random graphs and search them.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the adjacency of a generated graph.
    Generate(GraphArgs),
    /// Search a generated graph for a path.
    Search(SearchCommand),
}

/// Generator inputs shared by every command.
#[derive(Debug, Args, Clone)]
pub struct GraphArgs {
    /// Seed for the graph generator.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Vertex symbols in ring order, one character each.
    #[arg(long, default_value = DEFAULT_ALPHABET)]
    pub alphabet: String,

    /// Forbid vertices from drawing themselves as neighbours.
    #[arg(long)]
    pub no_self_links: bool,

    /// Mirror every drawn edge.
    #[arg(long)]
    pub undirected: bool,

    /// Skip the predecessor ring, allowing disconnected graphs.
    #[arg(long)]
    pub no_force_path: bool,

    /// Draw edge costs from 1 to 10 instead of unit costs.
    #[arg(long)]
    pub edge_cost: bool,
}

impl GraphArgs {
    /// Generator configuration selected by the flags.
    #[must_use]
    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig::default()
            .with_self_links(!self.no_self_links)
            .with_directed(!self.undirected)
            .with_force_path(!self.no_force_path)
            .with_edge_cost(self.edge_cost)
    }

    fn generate(&self) -> Result<Graph, CliError> {
        let alphabet = Alphabet::from_symbols(&self.alphabet)?;
        let graph = generate_graph_from_seed(&alphabet, &self.config(), self.seed);
        info!(
            seed = self.seed,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph generated"
        );
        Ok(graph)
    }
}

/// Options accepted by the `search` command.
#[derive(Debug, Args, Clone)]
pub struct SearchCommand {
    /// Graph to generate before searching.
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Minimise total edge cost instead of hop count.
    #[arg(long)]
    pub cost_aware: bool,

    /// Start vertex.
    #[arg(value_parser = parse_vertex)]
    pub from: Vertex,

    /// End vertex.
    #[arg(value_parser = parse_vertex)]
    pub to: Vertex,
}

fn parse_vertex(raw: &str) -> Result<Vertex, String> {
    let mut symbols = raw.chars();
    match (symbols.next(), symbols.next()) {
        (Some(symbol), None) => Ok(Vertex::new(symbol)),
        _ => Err(format!("expected a single character, got `{raw}`")),
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Graph construction or search failed.
    #[error(transparent)]
    Core(#[from] GraphError),
}

/// Result of executing a CLI command.
#[derive(Debug, Clone)]
pub enum Output {
    /// A generated graph.
    Graph(Graph),
    /// The outcome of a search.
    Search(SearchSummary),
}

/// Summarises a search.
#[derive(Debug, Clone)]
pub struct SearchSummary {
    /// Start vertex.
    pub from: Vertex,
    /// End vertex.
    pub to: Vertex,
    /// Path found, or `None` when `to` is unreachable.
    pub path: Option<Path>,
    /// Total cost, reported for cost-aware searches only.
    pub total_cost: Option<u64>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the alphabet is invalid or a search endpoint is
/// not part of it.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use clap::Parser;
/// # use ringpath_cli::cli::{Cli, Output, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli::try_parse_from(["ringpath", "search", "--alphabet", "ABCDEF", "A", "C"])?;
/// let Output::Search(summary) = run_cli(cli)? else {
///     panic!("search must produce a search summary");
/// };
/// assert_eq!(summary.path.and_then(|path| path.last()).map(|v| v.symbol()), Some('C'));
/// # Ok(())
/// # }
/// ```
pub fn run_cli(cli: Cli) -> Result<Output, CliError> {
    match cli.command {
        Command::Generate(args) => Ok(Output::Graph(args.generate()?)),
        Command::Search(search) => run_search(&search).map(Output::Search),
    }
}

fn run_search(command: &SearchCommand) -> Result<SearchSummary, CliError> {
    let graph = command.graph.generate()?;
    let (path, total_cost) = if command.cost_aware {
        match cheapest_path(&graph, command.from, command.to)? {
            Some(CostedPath { path, total_cost }) => (Some(path), Some(total_cost)),
            None => (None, None),
        }
    } else {
        (breadth_first_search(&graph, command.from, command.to)?, None)
    };
    info!(
        from = %command.from,
        to = %command.to,
        found = path.is_some(),
        cost_aware = command.cost_aware,
        "search completed"
    );
    Ok(SearchSummary {
        from: command.from,
        to: command.to,
        path,
        total_cost,
    })
}

/// Renders `output` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_output(output: &Output, mut writer: impl Write) -> io::Result<()> {
    match output {
        Output::Graph(graph) => write!(writer, "{graph}"),
        Output::Search(summary) => {
            writeln!(writer, "from: {}", summary.from)?;
            writeln!(writer, "to: {}", summary.to)?;
            match &summary.path {
                Some(path) => {
                    writeln!(writer, "path: {path}")?;
                    writeln!(writer, "hops: {}", path.hops())?;
                }
                None => writeln!(writer, "path: none")?,
            }
            if let Some(cost) = summary.total_cost {
                writeln!(writer, "cost: {cost}")?;
            }
            Ok(())
        }
    }
}
