//! Export a session and read the workbook back.

use std::io::{Cursor, Read};
use std::path::Path;

use calamine::{open_workbook, Data, DataType, Reader, Xlsx};
use chrono::NaiveDate;
use tempfile::TempDir;

use pms_tracker::config::ReportConfig;
use pms_tracker::core::RatingScale;
use pms_tracker::entry::Symptoms;
use pms_tracker::{ChartRange, Entry, ReportExporter, Table};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_entries() -> Vec<Entry> {
    let scale = RatingScale::default();
    vec![
        Entry::new(date(2024, 1, 3), 3, Symptoms::uniform(5), None, None, &scale).unwrap(),
        Entry::new(
            date(2024, 1, 1),
            1,
            Symptoms {
                mood_swings: 4,
                cramps: 3,
                bloating: 2,
                headaches: 1,
                fatigue: 0,
                stress_level: 2,
            },
            Some("back pain".to_string()),
            Some("took ibuprofen".to_string()),
            &scale,
        )
        .unwrap(),
    ]
}

fn export(table: &Table, chart_range: ChartRange) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("PMS_Tracking.xlsx");
    let exporter = ReportExporter::new(ReportConfig {
        output_file: path.clone(),
        chart_range,
    });
    exporter.export_default(table).unwrap();
    (dir, path)
}

fn read_rows(path: &Path) -> Vec<Vec<Data>> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["Daily Log".to_string()]);
    let range = workbook.worksheet_range("Daily Log").unwrap();
    range.rows().map(<[Data]>::to_vec).collect()
}

#[test]
fn test_roundtrip_headers_and_values() {
    let table = Table::from_entries(&sample_entries());
    let (_dir, path) = export(&table, ChartRange::Dynamic);
    let rows = read_rows(&path);

    assert_eq!(rows.len(), 3);
    let headers: Vec<String> = rows[0].iter().map(ToString::to_string).collect();
    assert_eq!(headers, table.headers().map(str::to_string).to_vec());

    // Insertion order, not date order
    assert_eq!(rows[1][0].as_date(), Some(date(2024, 1, 3)));
    assert_eq!(rows[2][0].as_date(), Some(date(2024, 1, 1)));

    let numbers: Vec<Option<f64>> = rows[2][1..8].iter().map(DataType::as_f64).collect();
    assert_eq!(
        numbers,
        [1.0, 4.0, 3.0, 2.0, 1.0, 0.0, 2.0].map(Some).to_vec()
    );
    assert_eq!(rows[2][8], Data::String("back pain".to_string()));
    assert_eq!(rows[2][9], Data::String("took ibuprofen".to_string()));

    assert!(rows[1][8].is_empty());
    assert!(rows[1][9].is_empty());
    assert_eq!(rows[1][2].as_f64(), Some(5.0));
}

#[test]
fn test_roundtrip_zero_entries() {
    let (_dir, path) = export(&Table::default(), ChartRange::Dynamic);
    let rows = read_rows(&path);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], Data::String("Date".to_string()));
    assert_eq!(rows[0][9], Data::String("Notes".to_string()));
}

#[test]
fn test_fixed_range_with_few_entries() {
    let table = Table::from_entries(&sample_entries());
    let (_dir, path) = export(&table, ChartRange::Fixed);

    // The chart may point past the data; the sheet itself only holds entries
    assert_eq!(read_rows(&path).len(), 3);
}

#[test]
fn test_roundtrip_dates_at_calendar_edges() {
    let scale = RatingScale::default();
    let dates = [
        date(1900, 1, 1),
        date(1900, 2, 28),
        date(1900, 3, 1),
        date(2024, 2, 29),
        date(9999, 12, 31),
    ];
    let entries: Vec<Entry> = dates
        .iter()
        .map(|&d| Entry::new(d, 1, Symptoms::default(), None, None, &scale).unwrap())
        .collect();
    let (_dir, path) = export(&Table::from_entries(&entries), ChartRange::Dynamic);

    let read: Vec<Option<NaiveDate>> = read_rows(&path)[1..]
        .iter()
        .map(|row| row[0].as_date())
        .collect();
    assert_eq!(read, dates.map(Some).to_vec());
}

fn chart_xml(exporter: &ReportExporter, table: &Table) -> String {
    let bytes = exporter.to_buffer(table).unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut xml = String::new();
    archive
        .by_name("xl/charts/chart1.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    xml
}

fn assert_chart_matches_summary(
    chart_range: ChartRange,
    table: &Table,
    categories: &str,
    values: &str,
) {
    let exporter = ReportExporter::new(ReportConfig {
        chart_range,
        ..ReportConfig::default()
    });
    let xml = chart_xml(&exporter, table);
    let summary = exporter.summary(table, Path::new("unused.xlsx"));

    assert_eq!(summary.categories, categories);
    assert_eq!(summary.values, values);

    assert!(xml.contains("<c:lineChart>"));
    assert!(xml.contains("<a:t>Mood Swings Over Time</a:t>"));
    assert!(xml.contains("<a:t>Date</a:t>"));
    assert!(xml.contains("<a:t>Severity</a:t>"));
    assert!(xml.contains("<c:v>Mood Swings</c:v>"));
    assert!(xml.contains(&format!("<c:f>{categories}</c:f>")), "{xml}");
    assert!(xml.contains(&format!("<c:f>{values}</c:f>")), "{xml}");
}

#[test]
fn test_chart_dynamic_range() {
    assert_chart_matches_summary(
        ChartRange::Dynamic,
        &Table::from_entries(&sample_entries()),
        "'Daily Log'!$A$2:$A$3",
        "'Daily Log'!$C$2:$C$3",
    );
}

#[test]
fn test_chart_fixed_range() {
    assert_chart_matches_summary(
        ChartRange::Fixed,
        &Table::from_entries(&sample_entries()),
        "'Daily Log'!$A$2:$A$91",
        "'Daily Log'!$C$2:$C$91",
    );
}

#[test]
fn test_chart_dynamic_range_without_entries() {
    assert_chart_matches_summary(
        ChartRange::Dynamic,
        &Table::default(),
        "'Daily Log'!$A$2",
        "'Daily Log'!$C$2",
    );
}
