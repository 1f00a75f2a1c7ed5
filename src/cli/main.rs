#![warn(clippy::all, clippy::pedantic)]
use std::error::Error;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use combopt::knapsack::{self, Item};
use combopt::tsp::{
    DistanceMatrix, MultiStartNearestNeighbor, NearestInsertion, NearestNeighbor,
    TourConstruction,
};
use combopt::{Boruvka, Dijkstra, Graph, Kruskal, MinSpanningTree, Prim, SimpleEdge};
use log::{info, LevelFilter};
use serde::Serialize;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Minimum spanning tree of a graph given as `source,target,weight` rows
    Mst {
        #[arg(long)]
        edges: PathBuf,
        /// Node list, needed to report nodes without edges
        #[arg(long, value_delimiter = ',')]
        nodes: Option<Vec<String>>,
        #[arg(long, value_enum, default_value_t = MstAlgo::Kruskal)]
        algo: MstAlgo,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Shortest path between two nodes of a graph given as `source,target,weight` rows
    Path {
        #[arg(long)]
        edges: PathBuf,
        #[arg(long)]
        source: String,
        #[arg(long)]
        target: String,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Travelling salesman tour over a headerless square distance matrix
    Tsp {
        #[arg(long)]
        matrix: PathBuf,
        #[arg(long, value_enum, default_value_t = Heuristic::NearestNeighbor)]
        heuristic: Heuristic,
        #[arg(long, default_value_t = 0)]
        start: usize,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Greedy knapsack over `value,weight` rows
    Knapsack {
        #[arg(long)]
        items: PathBuf,
        #[arg(long)]
        capacity: f64,
        /// Allow taking a fraction of the last item
        #[arg(long)]
        fractional: bool,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MstAlgo {
    Kruskal,
    Prim,
    Boruvka,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Heuristic {
    NearestNeighbor,
    MultiStart,
    NearestInsertion,
}

#[derive(Serialize)]
struct Hop<'a> {
    node: &'a str,
    distance: f64,
}

#[derive(Serialize)]
struct Stop {
    step: usize,
    city: usize,
}

#[derive(Serialize)]
struct Pick {
    item: usize,
    fraction: f64,
}

fn open(path: &Path) -> Result<Box<dyn Read>, Box<dyn Error>> {
    Ok(Box::new(File::open(path)?))
}

fn writer(output: Option<&Path>) -> Result<csv::Writer<Box<dyn Write>>, Box<dyn Error>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    Ok(csv::Writer::from_writer(sink))
}

fn read_edges(path: &Path) -> Result<Vec<SimpleEdge<String, f64>>, Box<dyn Error>> {
    let mut rdr = csv::Reader::from_reader(open(path)?);
    let edges = rdr.deserialize().collect::<Result<Vec<_>, _>>()?;
    info!("read {} edges from {}", edges.len(), path.display());
    Ok(edges)
}

fn mst(
    edges: &Path,
    nodes: Option<Vec<String>>,
    algo: MstAlgo,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let edges = read_edges(edges)?;
    let graph = match nodes {
        Some(nodes) => Graph::new(nodes, edges)?,
        None => Graph::from_edges(edges)?,
    };

    let tree = match algo {
        MstAlgo::Kruskal => Kruskal.min_spanning_tree(&graph)?,
        MstAlgo::Prim => Prim.min_spanning_tree(&graph)?,
        MstAlgo::Boruvka => Boruvka.min_spanning_tree(&graph)?,
    };
    tree.check(&graph)?;
    info!(
        "{algo:?}: {} edges, total weight {}",
        tree.len(),
        tree.total_weight()
    );

    let mut wtr = writer(output)?;
    for edge in tree.edges() {
        wtr.serialize(edge)?;
    }
    wtr.flush()?;
    Ok(())
}

fn path(
    edges: &Path,
    source: &str,
    target: &str,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let graph = Graph::from_edges(read_edges(edges)?)?;

    let tree = Dijkstra.shortest_path_tree(&graph, &source.to_owned())?;
    let path = tree.path_to(&target.to_owned())?;
    path.check(&graph)?;
    info!(
        "{source} -> {target}: {} hops, distance {}",
        path.hops(),
        path.distance()
    );

    let mut wtr = writer(output)?;
    for node in path.nodes() {
        wtr.serialize(Hop {
            node: node.as_str(),
            distance: tree.distance(node).unwrap_or_default(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

fn tsp(
    matrix: &Path,
    heuristic: Heuristic,
    start: usize,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(open(matrix)?);
    let rows = rdr
        .deserialize::<Vec<f64>>()
        .collect::<Result<Vec<_>, _>>()?;
    let matrix = DistanceMatrix::new(rows)?;

    let tour = match heuristic {
        Heuristic::NearestNeighbor => NearestNeighbor { start }.construct(&matrix)?,
        Heuristic::MultiStart => MultiStartNearestNeighbor.construct(&matrix)?,
        Heuristic::NearestInsertion => NearestInsertion { start }.construct(&matrix)?,
    };
    info!(
        "{heuristic:?}: {} cities, length {}",
        matrix.len(),
        tour.length()
    );

    let mut wtr = writer(output)?;
    for (step, &city) in tour.cities().iter().enumerate() {
        wtr.serialize(Stop { step, city })?;
    }
    wtr.flush()?;
    Ok(())
}

fn knapsack(
    items: &Path,
    capacity: f64,
    fractional: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let mut rdr = csv::Reader::from_reader(open(items)?);
    let items: Vec<Item<f64>> = rdr.deserialize().collect::<Result<_, _>>()?;

    let picks = if fractional {
        let selection = knapsack::fractional_greedy(&items, capacity)?;
        info!(
            "value {}, weight {}",
            selection.total_value, selection.total_weight
        );
        selection.items
    } else {
        let selection = knapsack::greedy(&items, capacity)?;
        info!(
            "value {}, weight {}",
            selection.total_value, selection.total_weight
        );
        selection.items.into_iter().map(|idx| (idx, 1.0)).collect()
    };

    let mut wtr = writer(output)?;
    for (item, fraction) in picks {
        wtr.serialize(Pick { item, fraction })?;
    }
    wtr.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    match cli.command {
        Command::Mst {
            edges,
            nodes,
            algo,
            output,
        } => mst(&edges, nodes, algo, output.as_deref()),
        Command::Path {
            edges,
            source,
            target,
            output,
        } => path(&edges, &source, &target, output.as_deref()),
        Command::Tsp {
            matrix,
            heuristic,
            start,
            output,
        } => tsp(&matrix, heuristic, start, output.as_deref()),
        Command::Knapsack {
            items,
            capacity,
            fractional,
            output,
        } => knapsack(&items, capacity, fractional, output.as_deref()),
    }
}
