use super::*;

use std::path::PathBuf;

use natlist_fs::EntryRecord;

use crate::report::Variant;

fn sample_report() -> Report {
    let root = PathBuf::from("/data");
    let entries = vec![
        EntryRecord::new(&root, "1.png".to_owned(), false),
        EntryRecord::new(&root, "2.png".to_owned(), false),
    ];
    Report::from_entries(Variant::Files, &entries)
}

fn human_output(report: &Report, saved_to: Option<&Path>) -> String {
    let mut printer = HumanPrinter::new(Vec::new());
    printer.report(report, saved_to).expect("print report");
    String::from_utf8(printer.into_inner()).expect("utf-8 output")
}

#[test]
fn rules_have_matching_widths() {
    let (header, footer) = rules();
    assert!(header.starts_with(&"-".repeat(RULE_WIDTH)));
    assert!(header.contains(" Results "));
    assert_eq!(header.len(), footer.len());
    assert!(footer.chars().all(|c| c == '-'));
}

#[test]
fn human_printer_frames_report_and_names_saved_file() {
    let report = sample_report();
    let saved = PathBuf::from("/data/natlist_output.txt");
    let out = human_output(&report, Some(&saved));

    let (header, footer) = rules();
    let expected = format!(
        "\n{header}\n{}{footer}\n\nResults have been saved to: {}\n",
        report.render_text(),
        saved.display()
    );
    assert_eq!(out, expected);
}

#[test]
fn human_printer_omits_saved_line_without_file() {
    let out = human_output(&sample_report(), None);
    assert!(!out.contains("saved to"));
    assert!(out.contains("File names:\n1.png,2.png\n"));
}

#[test]
fn human_printer_empty_message() {
    let mut printer = HumanPrinter::new(Vec::new());
    printer.empty(Path::new("/data")).expect("print empty");
    let out = String::from_utf8(printer.into_inner()).expect("utf-8 output");
    assert_eq!(
        out,
        format!("\n[info] No entries found in {}\n", Path::new("/data").display())
    );
}

#[test]
fn json_printer_emits_one_object_per_call() {
    let report = sample_report();
    let mut printer = JsonPrinter::new(Vec::new());
    printer
        .report(&report, Some(Path::new("/data/out.txt")))
        .expect("print report");
    printer.empty(Path::new("/data")).expect("print empty");

    let out = String::from_utf8(printer.into_inner()).expect("utf-8 output");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).expect("valid json");
    assert_eq!(first["type"], "report");
    assert_eq!(first["variant"], "files");
    assert_eq!(first["file_stems"], serde_json::json!(["1", "2"]));
    assert_eq!(first["command"], report.command.as_str());
    assert_eq!(first["saved_to"], "/data/out.txt");

    let second: serde_json::Value = serde_json::from_str(lines[1]).expect("valid json");
    assert_eq!(second["type"], "empty");
}
