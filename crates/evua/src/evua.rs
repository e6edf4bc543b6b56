mod scan;
mod triage;
mod workbench;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::exit;

use anyhow::{Context, Result};
use line_diff::render::render_summary;
use line_diff::unified_patch;
use project_tree::{NodeId, ProjectTree, Tree, TreeTraversal};

use crate::triage::{marker, needs_python2_upgrade, Language};
use crate::workbench::Workbench;

struct Args {
    source: PathBuf,
    upgraded: Option<PathBuf>,
    file: Option<String>,
    patch: bool,
    json: bool,
}

fn parse_args() -> Option<Args> {
    let mut args = env::args().skip(1);
    let mut source = None;
    let mut upgraded = None;
    let mut file = None;
    let mut patch = false;
    let mut json = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--upgraded" => upgraded = Some(PathBuf::from(args.next()?)),
            "--file" => file = Some(args.next()?),
            "--patch" => patch = true,
            "--json" => json = true,
            _ if source.is_none() => source = Some(PathBuf::from(arg)),
            _ => return None,
        }
    }

    Some(Args {
        source: source?,
        upgraded,
        file,
        patch,
        json,
    })
}

fn main() -> Result<()> {
    env_logger::init();

    let Some(args) = parse_args() else {
        eprintln!("Usage: evua <source-dir> [--upgraded <dir>] [--file <path>] [--patch] [--json]");
        exit(2);
    };

    let label = args
        .source
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("project")
        .to_string();

    // Scan the source folder; this stands in for the browser folder picker
    let outcome = scan::scan_directory(&args.source)?;
    if outcome.skipped > 0 {
        log::warn!("Skipped {} entries with non-UTF-8 names", outcome.skipped);
    }

    let mut workbench = Workbench::new();
    workbench.open_project(&outcome.records, &label);

    if let Some(project) = workbench.project() {
        log::info!(
            "Materialized {} with {} nodes",
            project.label,
            project.materialized.tree.node_count()
        );
    }

    for rejected in workbench.rejected() {
        log::warn!("Rejected {:?}: {}", rejected.record.path, rejected.reason);
    }

    // The demo shows the whole tree, so expand every directory up front
    let directory_paths: Vec<String> = workbench
        .project()
        .map(|p| {
            let tree = &p.materialized.tree;
            tree.directories()
                .into_iter()
                .filter_map(|id| tree.path(id).map(str::to_string))
                .collect()
        })
        .unwrap_or_default();
    for path in &directory_paths {
        if !workbench.is_expanded(path) {
            workbench.toggle_expanded(path);
        }
    }

    print_tree(&workbench, &args.source);

    if let Some(totals) = workbench.totals() {
        println!(
            "\n{} files, {} directories, {} total{}",
            totals.files,
            totals.directories,
            human_size(totals.total_bytes),
            if totals.rejected > 0 {
                format!(", {} rejected", totals.rejected)
            } else {
                String::new()
            }
        );
    }

    // Pick the file to compare: the explicit flag, else the first flagged
    // Python file, else nothing to do
    let selected = match args.file {
        Some(path) => path,
        None => match first_flagged_file(&workbench, &args.source) {
            Some(path) => path,
            None => {
                println!("\nNo Python 2 suspects found; pass --file to compare one anyway");
                return Ok(());
            }
        },
    };

    workbench.select_file(&selected)?;
    println!("\nComparing {selected}");

    let original = fs::read_to_string(args.source.join(&selected))
        .with_context(|| format!("Failed to read {selected}"))?;

    // The upgraded copy, when present, is the candidate; otherwise echo
    // the original back so the panels still have something to show
    let candidate = match &args.upgraded {
        Some(dir) => match fs::read_to_string(dir.join(&selected)) {
            Ok(text) => text,
            Err(_) => {
                log::warn!("No upgraded copy of {selected}; echoing the original");
                original.clone()
            }
        },
        None => original.clone(),
    };

    let summary = workbench.diff_selection(&original, &candidate)?;
    println!("{}", render_summary(&summary));

    let stats = summary.stats();
    if !summary.is_identical() {
        println!(
            "\n{} added, {} removed, {} unchanged",
            stats.added, stats.removed, stats.unchanged
        );
    }

    let export = workbench.export_candidate(&candidate)?;
    println!("Download: {} ({} bytes)", export.filename, export.bytes.len());

    if args.patch {
        println!("\n{}", unified_patch(&original, &candidate, &selected));
    }

    if args.json {
        println!("\n{}", workbench.tree_json()?);
        println!("\n{}", Workbench::diff_json(&summary)?);
    }

    Ok(())
}

/// Print the materialized tree with triage markers and sizes
///
/// Collapsed directories print without their children, matching what a
/// tree view would render.
fn print_tree(workbench: &Workbench, source: &Path) {
    let Some(project) = workbench.project() else {
        return;
    };
    let tree = &project.materialized.tree;
    print_node(workbench, tree, source, tree.root(), 0);
}

fn print_node(
    workbench: &Workbench,
    tree: &ProjectTree,
    source: &Path,
    id: NodeId,
    depth: usize,
) {
    let Some(node) = tree.get(id) else { return };
    let indent = depth * 2;

    if node.is_directory() {
        println!("{:indent$}{}/", "", node.name, indent = indent);
        if workbench.is_expanded(&node.path) {
            for child in tree.children(id) {
                print_node(workbench, tree, source, child, depth + 1);
            }
        }
    } else {
        let flagged = Language::from_path(&node.path) == Some(Language::Python)
            && fs::read_to_string(source.join(&node.path))
                .map(|text| needs_python2_upgrade(&text))
                .unwrap_or(false);
        println!(
            "{:indent$}{} {} ({})",
            "",
            marker(flagged),
            node.name,
            human_size(node.size),
            indent = indent
        );
    }
}

/// First Python file in tree order that still looks like Python 2
fn first_flagged_file(workbench: &Workbench, source: &Path) -> Option<String> {
    let tree = &workbench.project()?.materialized.tree;

    tree.leaves().into_iter().find_map(|id| {
        let path = tree.path(id)?;
        if Language::from_path(path) != Some(Language::Python) {
            return None;
        }
        let text = fs::read_to_string(source.join(path)).ok()?;
        needs_python2_upgrade(&text).then(|| path.to_string())
    })
}

fn human_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;

    if bytes >= MIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}
