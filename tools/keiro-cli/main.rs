use clap::Parser;
use keiro::prelude::*;
use std::fs;
use std::process;
use std::time::Instant;

/// Validates a workflow canvas export and reports structural findings.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the canvas JSON file exported by the editor
    canvas_path: String,

    /// Owner account the workflow belongs to
    #[arg(short, long, default_value = "local")]
    owner: String,

    /// Mark the workflow as active when snapshotting
    #[arg(short, long)]
    active: bool,

    /// Optional output path for a binary workflow snapshot
    #[arg(short, long)]
    snapshot_out: Option<String>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let total_start = Instant::now();

    // --- 1. Load and parse the canvas export ---
    let canvas_json = fs::read_to_string(&cli.canvas_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read canvas file '{}': {}",
            &cli.canvas_path, e
        ))
    });
    let canvas: CanvasWorkflow = serde_json::from_str(&canvas_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse canvas JSON: {}", e)));

    // --- 2. Import: kind resolution + connectivity validation ---
    let import_start = Instant::now();
    let graph = canvas
        .into_graph()
        .unwrap_or_else(|e| exit_with_error(&format!("Canvas import failed: {}", e)));
    let import_duration = import_start.elapsed();

    println!(
        "Imported {} nodes and {} edges in {:?}",
        graph.node_count(),
        graph.edge_count(),
        import_duration
    );

    // --- 3. Structural lint ---
    let warnings = lint_graph(&graph);
    if warnings.is_empty() {
        println!("No structural warnings.");
    } else {
        println!("{} structural warning(s):", warnings.len());
        for warning in &warnings {
            println!("  - {}", warning);
        }
    }

    // --- 4. Optional snapshot export ---
    if let Some(out_path) = &cli.snapshot_out {
        let owner = OwnerId::from(cli.owner.as_str());
        let workflow = Workflow::new(graph, cli.active);
        let mut store = MemoryStore::new();
        store
            .save(&owner, &workflow)
            .unwrap_or_else(|e| exit_with_error(&format!("Snapshot build failed: {}", e)));
        let snapshot = store
            .snapshot_for(&owner)
            .unwrap_or_else(|| exit_with_error("Snapshot missing after save"));
        snapshot
            .save_file(out_path)
            .unwrap_or_else(|e| exit_with_error(&format!("Snapshot write failed: {}", e)));
        println!("Snapshot written to '{}'", out_path);
    }

    println!("Done in {:?}", total_start.elapsed());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}
