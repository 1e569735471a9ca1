//! corpus-insight binary entrypoint.
//! Loads the run config, ingests the listed documents and writes the enabled views.

use corpus_insight::config::load_config_default;
use corpus_insight::pipeline;
use corpus_insight::render::{text::heatmap_table, JsonRenderer};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Compact tracing logs, only when `CORPUS_DEV_LOG=1`.
/// `RUST_LOG` refines the filter (default `corpus_insight=info,warn`).
fn enable_dev_tracing() {
    let on = std::env::var("CORPUS_DEV_LOG")
        .ok()
        .is_some_and(|v| v == "1");
    if !on {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("corpus_insight=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();
    enable_dev_tracing();

    let config = load_config_default()?;
    let renderer = JsonRenderer::new(config.render.clone());
    let report = pipeline::run(&config, &renderer)?;

    if let Some(graph) = &report.flow_graph {
        println!(
            "flow graph: {} documents, {} words, {} edges",
            graph.document_count,
            graph.nodes.len() - graph.document_count,
            graph.edges.len()
        );
    }
    if let Some(scores) = &report.sentiment {
        for (label, s) in scores {
            println!(
                "{label}: neg {:.3} neu {:.3} pos {:.3} compound {:.3}",
                s.neg, s.neu, s.pos, s.compound
            );
        }
    }
    if let Some(matrix) = &report.heatmap {
        print!("{}", heatmap_table(matrix));
    }
    println!("output written to {}", config.render.output_dir.display());
    Ok(())
}
