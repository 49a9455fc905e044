//! End-to-end decoding of a generated PDF.

use std::path::Path;

use chrono::NaiveDate;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use invren_core::pdf::DocumentDecoder;
use invren_core::{BatchRenamer, InvoiceParser, InvrenConfig, Outcome, PdfDecoder, RuleInvoiceParser};

/// Write a one-page PDF with one text line per entry of `lines`.
fn write_pdf(path: &Path, lines: &[&str]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 12.into()]),
        Operation::new("Td", vec![50.into(), 780.into()]),
    ];
    for line in lines {
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("Td", vec![0.into(), (-24).into()]));
    }
    operations.push(Operation::new("ET", vec![]));

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut data = Vec::new();
    doc.save_to(&mut data).unwrap();
    std::fs::write(path, data).unwrap();
}

#[test]
fn decodes_generated_invoice() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("123456.pdf");
    write_pdf(&path, &["Data emitere 2024-01-15", "TOTAL PLATA 1234,56"]);

    let text = PdfDecoder::new().decode(&path).unwrap();
    assert!(text.contains("2024-01-15"), "decoded text: {:?}", text);

    let record = RuleInvoiceParser::new().parse(&text).unwrap().record;
    assert_eq!(record.issue_date, NaiveDate::from_ymd_opt(2024, 1, 15));
    assert_eq!(
        record.total_payment.map(|d| d.to_string()),
        Some("1234.56".to_string())
    );
}

#[test]
fn renames_generated_invoice() {
    let dir = tempfile::tempdir().unwrap();
    write_pdf(&dir.path().join("42#.pdf"), &["Data emitere 2024-01-15", "TOTAL PLATA 1234,56"]);

    let report = BatchRenamer::new(PdfDecoder::new(), &InvrenConfig::default())
        .run(dir.path())
        .unwrap();

    assert_eq!(
        report.results[0].outcome,
        Outcome::Renamed {
            destination: "2024-01-15_TOTAL_1234.56.pdf".to_string()
        }
    );
    assert!(dir.path().join("2024-01-15_TOTAL_1234.56.pdf").exists());
}

#[test]
fn corrupt_pdf_is_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("1.pdf");
    std::fs::write(&path, b"%PDF-1.4 truncated").unwrap();

    assert!(PdfDecoder::new().decode(&path).is_err());
}
