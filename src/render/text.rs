//! Plain-text rendering of the sentiment matrix (terminal output).

use super::format_cell;
use crate::sentiment::SentimentMatrix;

/// Aligned table: metrics down, documents across, two-decimal cells.
pub fn heatmap_table(matrix: &SentimentMatrix) -> String {
    let row_w = matrix
        .metrics
        .iter()
        .map(|m| m.as_str().len())
        .max()
        .unwrap_or(0);
    let col_w: Vec<usize> = matrix
        .documents
        .iter()
        .map(|d| d.chars().count().max(5))
        .collect();

    let mut out = String::new();
    out.push_str(&" ".repeat(row_w));
    for (doc, &w) in matrix.documents.iter().zip(&col_w) {
        out.push_str(&format!("  {doc:>w$}"));
    }
    out.push('\n');

    for (i, m) in matrix.metrics.iter().enumerate() {
        out.push_str(&format!("{:<row_w$}", m.as_str()));
        for (j, &w) in col_w.iter().enumerate() {
            let cell = matrix.cell(i, j).map(format_cell).unwrap_or_default();
            out.push_str(&format!("  {cell:>w$}"));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::SentimentMetric;

    #[test]
    fn renders_header_and_rows() {
        let m = SentimentMatrix {
            metrics: vec![SentimentMetric::Neg, SentimentMetric::Compound],
            documents: vec!["Post 1".into(), "P2".into()],
            values: vec![vec![0.1, 0.0], vec![-0.4567, 0.9]],
        };
        let t = heatmap_table(&m);
        let lines: Vec<_> = t.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Post 1") && lines[0].contains("P2"));
        assert!(lines[1].starts_with("neg"));
        assert!(lines[2].starts_with("compound"));
        assert!(lines[2].contains("-0.46"));
        assert!(lines[2].contains("0.90"));
    }
}
