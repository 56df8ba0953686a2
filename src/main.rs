use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{error, info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use primst::batch::{solve, solve_all, solve_complete};
use primst::graph::GraphInput;
use primst::input::{read_graph, DEFAULT_INPUT};
use primst::prim::SpanningTree;
use primst::report::write_report;

/// primst - minimum spanning trees of weighted edge lists
///
/// Reads "numVertices numEdges" followed by "source destination weight" triples,
/// prints the adjacency list and the Prim spanning tree, and writes both to a file.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Graph files to process
    #[clap(value_name = "GRAPH", default_value = DEFAULT_INPUT)]
    inputs: Vec<PathBuf>,

    /// Output report file for a single graph (prompted for when neither -o nor -d is given)
    #[clap(short = 'o', long = "output", conflicts_with = "output_dir")]
    output: Option<PathBuf>,

    /// Directory for reports when several graphs are given (<stem>.mst.txt each)
    #[clap(short = 'd', long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Vertex the tree is grown from
    #[clap(short = 'r', long = "root", default_value = "0")]
    root: usize,

    /// Report a partial tree instead of failing when the graph is disconnected
    #[clap(long = "allow-forest")]
    allow_forest: bool,

    /// Number of threads when solving several graphs (0 = all cores)
    #[clap(short = 't', long = "threads", default_value = "0")]
    threads: usize,

    /// Quiet mode (warnings and errors only)
    #[clap(long = "quiet")]
    quiet: bool,
}

fn init_logging(quiet: bool) {
    let level = if quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_target(false)
        .format_timestamp(None)
        .init();
}

fn solve_one(graph: &GraphInput, args: &Args) -> Result<SpanningTree> {
    if !args.allow_forest {
        return Ok(solve_complete(graph, args.root)?);
    }
    let tree = solve(graph, args.root)?;
    let unreached = tree.unreached();
    if !unreached.is_empty() {
        warn!(
            "{} vertices are unreachable from vertex {}; their entries are left unset",
            unreached.len(),
            args.root
        );
    }
    Ok(tree)
}

fn prompt_output_name() -> Result<PathBuf> {
    print!("Enter output file name: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let name = line.trim();
    if name.is_empty() {
        bail!("No output file name given");
    }
    Ok(PathBuf::from(name))
}

fn write_report_file(path: &Path, graph: &GraphInput, tree: &SpanningTree) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to open output file {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_report(&mut out, graph, tree)?;
    out.flush()?;
    Ok(())
}

fn run_single(input: &Path, args: &Args) -> Result<()> {
    let graph = read_graph(input)?;
    info!(
        "Read {} vertices and {} edges from {}",
        graph.num_vertices,
        graph.edges.len(),
        input.display()
    );

    let tree = solve_one(&graph, args).with_context(|| format!("{}", input.display()))?;

    {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_report(&mut handle, &graph, &tree)?;
    }

    let output = match (&args.output, &args.output_dir) {
        (Some(path), _) => path.clone(),
        (None, Some(dir)) => {
            std::fs::create_dir_all(dir).with_context(|| {
                format!("Failed to create output directory {}", dir.display())
            })?;
            report_path(dir, input)
        }
        (None, None) => prompt_output_name()?,
    };
    write_report_file(&output, &graph, &tree)?;
    println!(
        "Results have been written to the output file: {}",
        output.display()
    );
    Ok(())
}

fn report_path(dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "graph".to_string());
    dir.join(format!("{stem}.mst.txt"))
}

fn run_batch(args: &Args) -> Result<()> {
    let Some(dir) = &args.output_dir else {
        bail!("--output-dir is required when more than one graph is given");
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()?;

    let graphs = args
        .inputs
        .iter()
        .map(read_graph)
        .collect::<Result<Vec<_>>>()?;

    let results = solve_all(&graphs, args.root, !args.allow_forest);

    let mut failed = 0;
    for ((input, graph), result) in args.inputs.iter().zip(&graphs).zip(results) {
        match result {
            Ok(tree) => {
                let path = report_path(dir, input);
                write_report_file(&path, graph, &tree)?;
                info!("{} -> {}", input.display(), path.display());
            }
            Err(e) => {
                error!("{}: {}", input.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} graphs failed", failed, args.inputs.len());
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.quiet);

    if args.inputs.len() > 1 {
        run_batch(&args)
    } else {
        run_single(&args.inputs[0], &args)
    }
}
