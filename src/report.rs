//! Data-side reporting: CSV export, the performance summary table, and the
//! per-size ranking.

use std::path::Path;

use chrono::NaiveDate;

use crate::algorithms::{AlgorithmSpec, Category};
use crate::error::Result;
use crate::record::ResultRecord;

/// Render records as CSV: `Size,<name>,...` then one row per record.
///
/// Timings are written with 4 decimals. An algorithm that was not measured at
/// a size gets an empty field.
pub fn export_csv(records: &[ResultRecord], algorithms: &[AlgorithmSpec]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());
    write_records(&mut writer, records, algorithms)?;

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Same document as `export_csv`, written to `path`.
pub fn write_csv(
    path: impl AsRef<Path>,
    records: &[ResultRecord],
    algorithms: &[AlgorithmSpec],
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_path(path)?;
    write_records(&mut writer, records, algorithms)?;
    writer.flush()?;
    Ok(())
}

fn write_records<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    records: &[ResultRecord],
    algorithms: &[AlgorithmSpec],
) -> Result<()> {
    let mut header = Vec::with_capacity(algorithms.len() + 1);
    header.push("Size");
    header.extend(algorithms.iter().map(|a| a.name));
    writer.write_record(&header)?;

    for record in records {
        let mut row = Vec::with_capacity(algorithms.len() + 1);
        row.push(record.size.to_string());
        for algo in algorithms {
            row.push(
                record
                    .get(algo.name)
                    .map(|ms| format!("{:.4}", ms))
                    .unwrap_or_default(),
            );
        }
        writer.write_record(&row)?;
    }
    Ok(())
}

/// Default file name for an export made on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("sorting_results_{}.csv", date.format("%Y-%m-%d"))
}

/// Export file name for today, local time.
pub fn default_export_file_name() -> String {
    export_file_name(chrono::Local::now().date_naive())
}

/// Algorithms measured at this size, fastest first.
pub fn ranking(record: &ResultRecord) -> Vec<(&'static str, f64)> {
    let mut ranked = record.timings().to_vec();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub name: &'static str,
    pub complexity: &'static str,
    pub category: Category,
    /// Fastest mean over all measured sizes; 0 when never measured
    pub min_ms: f64,
    /// Slowest mean over all measured sizes; 0 when never measured
    pub max_ms: f64,
    pub measured_sizes: usize,
}

/// Min and max mean time per algorithm across a run's records.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceSummary {
    pub rows: Vec<SummaryRow>,
}

impl PerformanceSummary {
    pub fn new(records: &[ResultRecord], algorithms: &[AlgorithmSpec]) -> Self {
        let rows = algorithms
            .iter()
            .map(|algo| {
                let times: Vec<f64> = records.iter().filter_map(|r| r.get(algo.name)).collect();
                let (min_ms, max_ms) = if times.is_empty() {
                    (0.0, 0.0)
                } else {
                    (
                        times.iter().copied().fold(f64::INFINITY, f64::min),
                        times.iter().copied().fold(f64::NEG_INFINITY, f64::max),
                    )
                };
                SummaryRow {
                    name: algo.name,
                    complexity: algo.complexity_label,
                    category: algo.category,
                    min_ms,
                    max_ms,
                    measured_sizes: times.len(),
                }
            })
            .collect();
        Self { rows }
    }

    pub fn row(&self, name: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|row| row.name == name)
    }
}

impl std::fmt::Display for PerformanceSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Performance Summary")?;
        writeln!(f, "{}", "=".repeat(86))?;
        writeln!(
            f,
            "{:<16} {:>14} {:>15} {:>8} {:>14} {:>14}",
            "Algorithm", "Complexity", "Category", "Sizes", "Min Time (ms)", "Max Time (ms)"
        )?;
        writeln!(f, "{}", "=".repeat(86))?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<16} {:>14} {:>15} {:>8} {:>14.4} {:>14.4}",
                row.name,
                row.complexity,
                row.category.label(),
                row.measured_sizes,
                row.min_ms,
                row.max_ms
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::AlgorithmKind;

    fn sample() -> Vec<ResultRecord> {
        vec![
            ResultRecord::new(10)
                .with_timing("Quick Sort", 0.5)
                .with_timing("Bubble Sort", 0.25),
            ResultRecord::new(20000).with_timing("Quick Sort", 2.0),
        ]
    }

    #[test]
    fn test_export_missing_fields_are_empty() {
        let algos = [
            *AlgorithmKind::BubbleSort.spec(),
            *AlgorithmKind::QuickSort.spec(),
        ];
        let csv = export_csv(&sample(), &algos).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "Size,Bubble Sort,Quick Sort");
        assert_eq!(lines[1], "10,0.2500,0.5000");
        assert_eq!(lines[2], "20000,,2.0000");
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(export_file_name(date), "sorting_results_2025-03-07.csv");
    }

    #[test]
    fn test_ranking_fastest_first() {
        let ranked = ranking(&sample()[0]);
        assert_eq!(ranked, vec![("Bubble Sort", 0.25), ("Quick Sort", 0.5)]);
    }

    #[test]
    fn test_summary_min_max() {
        let algos = [
            *AlgorithmKind::BubbleSort.spec(),
            *AlgorithmKind::QuickSort.spec(),
            *AlgorithmKind::HeapSort.spec(),
        ];
        let summary = PerformanceSummary::new(&sample(), &algos);

        let quick = summary.row("Quick Sort").unwrap();
        assert_eq!((quick.min_ms, quick.max_ms), (0.5, 2.0));
        assert_eq!(quick.measured_sizes, 2);

        let heap = summary.row("Heap Sort").unwrap();
        assert_eq!((heap.min_ms, heap.max_ms, heap.measured_sizes), (0.0, 0.0, 0));

        let table = summary.to_string();
        assert!(table.contains("Linearithmic"));
        assert!(table.contains("2.0000"));
    }
}
