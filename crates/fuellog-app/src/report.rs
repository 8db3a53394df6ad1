//! Log rendering for terminal and machine output

use fuellog_domain::FuelLog;
use fuellog_types::{OutputFormat, Result};

const HEADERS: [&str; 3] = ["Date", "Gallons Purchased", "Gas Station"];
const FOOTER_LABEL: &str = "Total Gallons:";

/// Render `log` in the requested format
pub fn render(log: &FuelLog, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(log)),
        OutputFormat::Json => render_json(log),
        OutputFormat::Csv => render_csv(log),
    }
}

/// Plain-text table with a total footer. An empty log renders nothing.
pub fn render_table(log: &FuelLog) -> String {
    if log.is_empty() {
        return String::new();
    }

    let rows: Vec<[String; 3]> = log
        .records()
        .iter()
        .map(|r| {
            [
                r.date.format("%Y-%m-%d").to_string(),
                format!("{:.1}", r.gallons),
                r.station.clone(),
            ]
        })
        .collect();
    let footer = [
        FOOTER_LABEL.to_string(),
        format!("{:.1}", log.total_gallons()),
        String::new(),
    ];

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in rows.iter().chain(std::iter::once(&footer)) {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let rule_len = widths.iter().sum::<usize>() + 6;

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(str::to_string), &widths);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');
    push_row(&mut out, &footer, &widths);
    out
}

fn push_row(out: &mut String, cells: &[String; 3], widths: &[usize; 3]) {
    let line = format!(
        "{:<w0$}   {:>w1$}   {:<w2$}",
        cells[0],
        cells[1],
        cells[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
    );
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Pretty JSON including the allocation summary
pub fn render_json(log: &FuelLog) -> Result<String> {
    Ok(serde_json::to_string_pretty(log)?)
}

/// CSV with a `date,gallons,station` header
pub fn render_csv(log: &FuelLog) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["date", "gallons", "station"])?;
    for r in log.records() {
        writer.write_record([
            r.date.format("%Y-%m-%d").to_string(),
            format!("{:.1}", r.gallons),
            r.station.clone(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fuellog_domain::{AllocationSummary, PurchaseRecord};

    fn sample_log() -> FuelLog {
        let record = |date: &str, gallons: f64, station: &str| PurchaseRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            gallons,
            station: station.to_string(),
        };
        FuelLog::new(
            vec![
                record("2024-07-03", 14.2, "Shell, 721 N Tucker Blvd"),
                record("2024-07-01", 20.0, "BP"),
            ],
            AllocationSummary {
                purchase_count: 2,
                day_span: 5,
                iterations: 1,
                allocated_total: 34.2,
                converged: true,
            },
        )
    }

    fn empty_log() -> FuelLog {
        FuelLog::new(
            Vec::new(),
            AllocationSummary {
                purchase_count: 0,
                day_span: 1,
                iterations: 0,
                allocated_total: 0.0,
                converged: true,
            },
        )
    }

    #[test]
    fn test_table_rows_and_footer() {
        let table = render_table(&sample_log());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("Date"));
        assert!(lines[0].contains("Gallons Purchased"));
        assert!(lines[2].starts_with("2024-07-01"));
        assert!(lines[2].contains("20.0"));
        assert!(lines[3].starts_with("2024-07-03"));
        assert!(lines[3].ends_with("Shell, 721 N Tucker Blvd"));
        assert!(lines[5].starts_with("Total Gallons:"));
        assert!(lines[5].contains("34.2"));
    }

    #[test]
    fn test_empty_table_not_shown() {
        assert_eq!(render_table(&empty_log()), "");
    }

    #[test]
    fn test_csv_quotes_commas() {
        let csv = render_csv(&sample_log()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "date,gallons,station");
        assert_eq!(lines[1], "2024-07-01,20.0,BP");
        assert_eq!(lines[2], "2024-07-03,14.2,\"Shell, 721 N Tucker Blvd\"");
    }

    #[test]
    fn test_json_has_records_and_summary() {
        let json = render(&sample_log(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["records"][0]["date"], "2024-07-01");
        assert_eq!(value["records"][1]["gallons"], 14.2);
        assert_eq!(value["summary"]["purchase_count"], 2);
    }
}
