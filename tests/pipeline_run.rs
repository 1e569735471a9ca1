// tests/pipeline_run.rs
use corpus_insight::config::{AppConfig, DocumentEntry, ViewsConfig, VocabularyConfig};
use corpus_insight::pipeline;
use corpus_insight::render::json::{BREAKDOWN_FILE, HEATMAP_FILE, SANKEY_FILE};
use corpus_insight::render::{JsonRenderer, RenderConfig, SankeyFigure, SentimentHeatmap};
use std::fs;
use std::path::Path;

fn write(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let p = dir.join(name);
    fs::write(&p, body).unwrap();
    p
}

fn config(dir: &Path) -> AppConfig {
    let stop = write(dir, "stopwords.txt", "the\nand\n\nA\n");
    let d1 = write(dir, "post1.txt", "The market is great and the market is strong.");
    let d2 = write(dir, "post2.txt", "A terrible crash; the market fell and fell.");
    AppConfig {
        stop_words: Some(stop),
        documents: vec![
            DocumentEntry {
                path: d1,
                label: Some("Post 1".into()),
            },
            DocumentEntry {
                path: d2,
                label: Some("Post 2".into()),
            },
        ],
        vocabulary: VocabularyConfig {
            top_k: 2,
            ..Default::default()
        },
        views: ViewsConfig {
            flow_graph: true,
            sentiment_breakdown: true,
            sentiment_heatmap: true,
        },
        render: RenderConfig {
            output_dir: dir.join("out"),
            pretty: true,
        },
        lexicon: None,
    }
}

#[test]
fn full_run_writes_all_views() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = config(tmp.path());
    let renderer = JsonRenderer::new(cfg.render.clone());
    let report = pipeline::run(&cfg, &renderer).unwrap();

    assert_eq!(report.documents, 2);

    // post1: market 2, is 2, great 1, strong 1 -> top2 market, is
    // post2: terrible 1, crash 1, market 1, fell 2 -> top2 fell, terrible
    let g = report.flow_graph.unwrap();
    assert_eq!(
        g.nodes,
        vec!["Post 1", "Post 2", "market", "is", "fell", "terrible"]
    );
    assert_eq!(g.edge_weight("Post 1", "market"), Some(2));
    assert_eq!(g.edge_weight("Post 1", "is"), Some(2));
    assert_eq!(g.edge_weight("Post 2", "fell"), Some(2));
    assert_eq!(g.edge_weight("Post 2", "market"), None);
    assert_eq!(g.edges.len(), 3);

    let out = tmp.path().join("out");
    let sankey: SankeyFigure =
        serde_json::from_str(&fs::read_to_string(out.join(SANKEY_FILE)).unwrap()).unwrap();
    assert_eq!(sankey.links.value, vec![2, 2, 2]);

    let heat: SentimentHeatmap =
        serde_json::from_str(&fs::read_to_string(out.join(HEATMAP_FILE)).unwrap()).unwrap();
    assert_eq!(heat.row_labels, vec!["neg", "neu", "pos", "compound"]);
    assert_eq!(heat.column_labels, vec!["Post 1", "Post 2"]);
    assert!(heat
        .annotations
        .iter()
        .flatten()
        .all(|a| a.split('.').nth(1).map(str::len) == Some(2)));

    assert!(out.join(BREAKDOWN_FILE).exists());
    let scores = report.sentiment.unwrap();
    assert!(scores["Post 1"].compound > 0.0);
    assert!(scores["Post 2"].compound < 0.0);
}

#[test]
fn missing_document_aborts_run() {
    let tmp = tempfile::tempdir().unwrap();
    let mut cfg = config(tmp.path());
    cfg.documents.push(DocumentEntry {
        path: tmp.path().join("does_not_exist.txt"),
        label: None,
    });
    let renderer = JsonRenderer::new(cfg.render.clone());
    let err = pipeline::run(&cfg, &renderer).unwrap_err();
    assert!(format!("{err:#}").contains("does_not_exist.txt"));
    assert!(!tmp.path().join("out").exists());
}

#[test]
fn views_are_independently_optional() {
    let tmp = tempfile::tempdir().unwrap();
    let mut cfg = config(tmp.path());
    cfg.views = ViewsConfig {
        flow_graph: false,
        sentiment_breakdown: false,
        sentiment_heatmap: true,
    };
    let renderer = JsonRenderer::new(cfg.render.clone());
    let report = pipeline::run(&cfg, &renderer).unwrap();
    assert!(report.flow_graph.is_none());
    assert!(report.sentiment.is_none());
    assert!(report.heatmap.is_some());
    assert!(!tmp.path().join("out").join(SANKEY_FILE).exists());
}
