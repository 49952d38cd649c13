use std::io::{Cursor, Write};
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

use super::marks::{is_header, parse_marks};
use super::sample::sample_table;
use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_marks_input_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_sample_table_shape() {
    let table = sample_table().unwrap();
    assert_eq!(table.len(), 30);
    assert_eq!(table.n_subjects(), 3);
    assert_eq!(table.names()[0], "Aarav");
    assert_eq!(table.names()[29], "Veer");
    assert_eq!(table.marks()[19], &[90, 95, 97]);
}

#[test]
fn test_load_input_sample() {
    let table = load_input(&InputSource::Sample).unwrap();
    assert_eq!(table.len(), 30);
}

#[test]
fn test_parse_marks_with_header_and_comments() {
    let data = "# class 7b\nname\tmath\tart\n\nAda\t90\t80\nBo\t70\t 65\r\n";
    let entries = parse_marks(Cursor::new(data)).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "Ada");
    assert_eq!(entries[0].scores, vec![90, 80]);
    assert_eq!(entries[1].name, "Bo");
    assert_eq!(entries[1].scores, vec![70, 65]);
    assert!(entries.iter().all(|e| e.total == 0));
}

#[test]
fn test_parse_marks_without_header() {
    let entries = parse_marks(Cursor::new("Ada\t1\t2\n")).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].scores, vec![1, 2]);
}

#[test]
fn test_parse_marks_reports_bad_score_line() {
    let err = parse_marks(Cursor::new("Ada\t1\t2\nBo\tx\t3\n")).unwrap_err();
    match err {
        InputError::Parse { line, msg } => {
            assert_eq!(line, 2);
            assert!(msg.contains("'x'"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_marks_empty_is_error() {
    let err = parse_marks(Cursor::new("name\ta\n# nothing\n")).unwrap_err();
    assert!(matches!(err, InputError::Parse { .. }));
}

#[test]
fn test_load_marks_file_ragged_rows() {
    let dir = make_temp_dir();
    let path = dir.join("marks.tsv");
    std::fs::write(&path, "Ada\t1\t2\t3\nBo\t4\t5\n").unwrap();
    let err = load_marks_file(&path).unwrap_err();
    assert!(matches!(
        err,
        InputError::Table(TableError::RaggedScores { index: 1, .. })
    ));
}

#[test]
fn test_load_marks_file_missing() {
    let dir = make_temp_dir();
    let err = load_marks_file(&dir.join("absent.tsv")).unwrap_err();
    assert!(matches!(err, InputError::MissingInput(_)));
}

#[test]
fn test_load_marks_file_gz() {
    let dir = make_temp_dir();
    let path = dir.join("marks.tsv.gz");
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(b"name\ts1\ts2\nAda\t10\t20\nBo\t30\t40\n")
        .unwrap();
    std::fs::write(&path, enc.finish().unwrap()).unwrap();

    let table = load_input(&InputSource::File(path)).unwrap();
    assert_eq!(table.names(), vec!["Ada", "Bo"]);
    assert_eq!(table.n_subjects(), 2);
}

#[test]
fn test_input_source_label() {
    assert_eq!(InputSource::Sample.label(), "sample");
    assert_eq!(
        InputSource::File(PathBuf::from("a/b.tsv")).label(),
        "a/b.tsv"
    );
}

#[test]
fn test_parse_marks_student_named_name_is_data() {
    let entries = parse_marks(Cursor::new("Name\t1\t2\nAda\t3\t4\n")).unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Name", "Ada"]);
    assert_eq!(entries[0].scores, vec![1, 2]);
}

#[test]
fn test_is_header() {
    assert!(is_header(&["name", "math", "art"]));
    assert!(is_header(&["NAME", "s1"]));
    assert!(!is_header(&["Name", "1", "2"]));
    assert!(!is_header(&["Ada", "math"]));
    assert!(!is_header(&["name"]));
    assert!(!is_header(&[]));
}

#[test]
fn test_parse_marks_trailing_tab_ignored() {
    let entries = parse_marks(Cursor::new("name\ts1\ts2\t\nAda\t1\t2\t\nBo\t3\t4\t\t\n")).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].scores, vec![1, 2]);
    assert_eq!(entries[1].scores, vec![3, 4]);
}

#[test]
fn test_parse_marks_empty_inner_column_rejected() {
    let err = parse_marks(Cursor::new("Ada\t1\t\t2\n")).unwrap_err();
    assert!(matches!(err, InputError::Parse { line: 1, .. }));
}

#[test]
fn test_parse_marks_rejects_fractional_and_negative() {
    assert!(parse_marks(Cursor::new("Ada\t1.5\t2\n")).is_err());
    assert!(parse_marks(Cursor::new("Ada\t-1\t2\n")).is_err());
}
