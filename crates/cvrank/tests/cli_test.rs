//! CLI contract tests for the `cvrank` binary.

use assert_cmd::cargo::cargo_bin_cmd;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use predicates::prelude::*;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Run the binary against an empty config directory so defaults apply.
fn cvrank(config_dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("cvrank");
    cmd.env("CVRANK_CONFIG_DIR", config_dir);
    cmd
}

/// One-page PDF whose text uses a Type1 font that is neither embedded nor a
/// standard font and has no width table.
fn pdf_with_unknown_font(text: &str) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "ResumeSans",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });
    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

/// Run `cvrank --format json rank --job <job> <files>...` and parse stdout.
fn rank_json(config_dir: &Path, job: &str, files: &[PathBuf]) -> Value {
    let output = cvrank(config_dir)
        .args(["--format", "json", "rank", "--job", job])
        .args(files)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("stdout is not JSON ({e}): {text}"))
}

#[test]
fn json_output_stays_parseable_with_pdf_resume() {
    let tmp = tempfile::tempdir().unwrap();
    let cv = tmp.path().join("cv.pdf");
    let notes = tmp.path().join("notes.txt");
    std::fs::write(&cv, pdf_with_unknown_font("Senior Python developer")).unwrap();
    std::fs::write(&notes, "Pastry chef and baker").unwrap();

    let json = rank_json(tmp.path(), "python developer", &[cv, notes]);

    assert_eq!(json["status"], "ranked");
    assert_eq!(json["processed"], 2);
    assert_eq!(json["results"][0]["file"], "cv.pdf");
    assert!(json["results"][0]["score"].as_f64().unwrap() > 0.0);
    assert_eq!(json["skipped"].as_array().unwrap().len(), 0);
}

#[test]
fn missing_files_are_listed_as_skipped() {
    let tmp = tempfile::tempdir().unwrap();
    let present = tmp.path().join("dev.txt");
    std::fs::write(&present, "Python developer").unwrap();

    let missing = tmp.path().join("gone.pdf");
    let json = rank_json(tmp.path(), "python developer", &[missing, present]);

    assert_eq!(json["status"], "ranked");
    assert_eq!(json["processed"], 1);
    assert_eq!(json["skipped"][0]["file"], "gone.pdf");
    assert_eq!(json["skipped"][0]["reason"], "read_error");
}

#[test]
fn only_missing_files_report_no_readable_documents() {
    let tmp = tempfile::tempdir().unwrap();

    let json = rank_json(tmp.path(), "python developer", &[tmp.path().join("gone.pdf")]);

    assert_eq!(json["status"], "no_readable_documents");
    assert_eq!(json["message"], "None of the uploaded files could be read.");
    assert_eq!(json["skipped"][0]["file"], "gone.pdf");
}

#[test]
fn text_output_lists_skipped_files() {
    let tmp = tempfile::tempdir().unwrap();
    let resume = tmp.path().join("dev.txt");
    std::fs::write(&resume, "Rust developer").unwrap();

    cvrank(tmp.path())
        .arg("rank")
        .arg("--job")
        .arg("rust developer")
        .arg(&resume)
        .arg(tmp.path().join("gone.docx"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Processed 1 resume successfully!"))
        .stdout(predicate::str::contains("gone.docx"));
}
