//! Tests for CSV, text and JSON export of batch results.

use chrono::NaiveDate;
use mail_dns::export::{export_csv, export_filename, write_export, ExportMeta, CSV_HEADER};
use mail_dns::{run, BatchResult, Config, ExportFormat, ProviderCatalog};
use tempfile::TempDir;

#[path = "helpers.rs"]
mod helpers;

use helpers::{fake_catalog, request};

fn sample_result() -> BatchResult {
    let mut req = request("microsoft-365", &["contoso.com", "fabrikam.org", "bad_domain!"]);
    req.dmarc.percentage = Some(50);
    run(&req, &ProviderCatalog::builtin(), &Config::default()).expect("Batch should succeed")
}

fn meta() -> ExportMeta {
    ExportMeta {
        app_name: "Acme".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 10, 14).expect("valid date"),
    }
}

#[test]
fn test_csv_round_trip_every_record_once() {
    let result = sample_result();
    let mut buf = Vec::new();
    let rows = export_csv(&result, &mut buf).expect("CSV export should succeed");
    assert_eq!(rows, result.record_count());

    let mut reader = csv::Reader::from_reader(buf.as_slice());
    let headers = reader.headers().expect("header row").clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), CSV_HEADER.to_vec());

    let parsed: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("rows parse");
    assert_eq!(parsed.len(), result.record_count());

    let mut index = 0;
    for domain in &result.accepted {
        for record in &domain.records {
            let row = &parsed[index];
            assert_eq!(&row[0], domain.domain.as_str());
            assert_eq!(&row[1], record.record_type().to_string());
            assert_eq!(&row[2], record.name());
            assert_eq!(&row[3], record.value());
            assert_eq!(
                &row[4],
                record.priority().map(|p| p.to_string()).unwrap_or_default()
            );
            assert_eq!(&row[5], "3600");
            assert!(!row[6].contains(','));
            index += 1;
        }
    }
}

#[test]
fn test_csv_description_commas_replaced() {
    let result = run(
        &request("acme", &["example.com"]),
        &fake_catalog(),
        &Config::default(),
    )
    .unwrap();
    let mut buf = Vec::new();
    export_csv(&result, &mut buf).unwrap();
    let csv = String::from_utf8(buf).unwrap();
    assert!(csv.contains("Return path; required for bounces"));
}

#[test]
fn test_write_export_to_file_with_standard_name() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let result = sample_result();

    for format in [ExportFormat::Csv, ExportFormat::Text, ExportFormat::Json] {
        let name = export_filename("Acme", meta().date, format);
        let path = temp_dir.path().join(&name);
        let file = std::fs::File::create(&path).expect("create export file");
        let written = write_export(&result, format, &meta(), file).expect("export succeeds");
        assert_eq!(written, result.record_count());

        let content = std::fs::read_to_string(&path).expect("read export file");
        assert!(!content.is_empty(), "{name} is empty");
    }

    assert!(temp_dir
        .path()
        .join("Acme - DNS Record Generator - 2026-10-14.csv")
        .exists());
    assert!(temp_dir
        .path()
        .join("Acme - DNS Record Generator - 2026-10-14.txt")
        .exists());
}

#[test]
fn test_text_export_sections() {
    let result = sample_result();
    let mut buf = Vec::new();
    write_export(&result, ExportFormat::Text, &meta(), &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert!(text.contains("# contoso.com\n"));
    assert!(text.contains("# fabrikam.org\n"));
    assert!(text.contains("## MX Records"));
    assert!(text.contains("## DKIM Records"));
    assert!(text.contains("Value: contoso.mail.protection.outlook.com"));
    assert!(text.contains("Host: selector2._domainkey"));
    assert!(text.contains("- bad_domain!:"));
}

#[test]
fn test_json_export_structure() {
    let result = sample_result();
    let mut buf = Vec::new();
    write_export(&result, ExportFormat::Json, &meta(), &mut buf).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&buf).expect("valid JSON");

    assert_eq!(json["providerId"], "microsoft-365");
    assert_eq!(json["accepted"].as_array().unwrap().len(), 2);
    assert_eq!(json["accepted"][0]["domain"], "contoso.com");
    assert_eq!(json["accepted"][0]["records"][0]["type"], "MX");
    assert_eq!(json["rejected"][0]["rawInput"], "bad_domain!");
}

#[test]
fn test_exports_are_deterministic() {
    let result = sample_result();
    let render = |format| {
        let mut buf = Vec::new();
        write_export(&result, format, &meta(), &mut buf).unwrap();
        buf
    };
    for format in [
        ExportFormat::Csv,
        ExportFormat::Text,
        ExportFormat::Json,
        ExportFormat::Preview,
    ] {
        assert_eq!(render(format), render(format));
    }
}
