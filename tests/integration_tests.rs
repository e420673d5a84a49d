//! End-to-end tests: catalog resolution through PDF generation
//!
//! The produced documents are parsed back with lopdf to verify pagination
//! instead of asserting on raw bytes.

use std::io::Write;

use pretty_assertions::assert_eq;

use label_press::{
    generate_labels, generate_labels_with_config, Catalog, LabelConfig, ProductRecord,
    RenderConfig, RenderError, RenderRequest,
};

fn page_count(bytes: &[u8]) -> usize {
    let doc = lopdf::Document::load_mem(bytes).expect("output should be a parseable PDF");
    doc.get_pages().len()
}

#[test]
fn test_one_page_per_copy() {
    let record = ProductRecord::new("ABC123", "Widget");
    for copies in [1u32, 2, 3, 7] {
        let pdf = generate_labels(&record, copies).expect("should render");
        assert_eq!(page_count(&pdf), copies as usize, "copies = {}", copies);
    }
}

#[test]
fn test_single_copy_single_page() {
    let record = ProductRecord::new("SINGLE", "one page only");
    let pdf = generate_labels(&record, 1).unwrap();
    assert_eq!(page_count(&pdf), 1);
}

#[test]
fn test_zero_copies_rejected_not_empty_document() {
    let record = ProductRecord::new("ABC123", "Widget");
    let err = generate_labels(&record, 0).unwrap_err();
    assert!(matches!(err, RenderError::InvalidRequest { .. }));
}

#[test]
fn test_widget_scenario() {
    // record {reference: "ABC123", description: "Widget", image: none}, 3 copies
    let record = ProductRecord::new("ABC123", "Widget");
    let request = RenderRequest::new(record, 3);
    let pdf = request.render().unwrap();

    assert_eq!(page_count(&pdf), 3);

    let doc = lopdf::Document::load_mem(&pdf).unwrap();
    for page in 1..=3u32 {
        let text = doc.extract_text(&[page]).unwrap();
        assert!(text.contains("Widget"), "page {} missing description", page);
        assert!(text.contains("PRODUCT NAME"), "page {} missing heading", page);
        assert!(
            text.contains("Image not found"),
            "page {} missing image placeholder",
            page
        );
    }
}

#[test]
fn test_unresolvable_image_degrades_to_placeholder() {
    let record = ProductRecord::new("IMG-1", "has bad image").with_image("no/such/file.png");
    let pdf = generate_labels(&record, 1).unwrap();
    let doc = lopdf::Document::load_mem(&pdf).unwrap();
    let text = doc.extract_text(&[1]).unwrap();
    assert!(text.contains("Image not found"));
}

#[test]
fn test_unencodable_reference_fails_whole_request() {
    let record = ProductRecord::new("REFÊ", "non-ASCII reference");
    let err = generate_labels(&record, 2).unwrap_err();
    assert!(matches!(err, RenderError::Symbol(_)));
}

#[test]
fn test_custom_page_and_label_geometry() {
    let config = RenderConfig::new()
        .with_label(LabelConfig::new().with_label_size(100.0, 60.0))
        .with_pdf(label_press::PdfConfig::new().with_page_size(148.0, 210.0));
    let record = ProductRecord::new("A5-REF", "smaller label");
    let pdf = generate_labels_with_config(&record, 2, &config).unwrap();
    assert_eq!(page_count(&pdf), 2);
}

#[test]
fn test_catalog_to_pdf_flow() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"{
            "Furniture": {
                "Tables": {
                    "TBL-001": { "description": "Oak table" }
                }
            }
        }"#,
    )
    .unwrap();

    let catalog = Catalog::from_file(file.path()).unwrap();
    let record = catalog.find_reference("TBL-001").unwrap();
    assert_eq!(record.description, "Oak table");

    let pdf = generate_labels(&record, 2).unwrap();
    assert_eq!(page_count(&pdf), 2);

    let doc = lopdf::Document::load_mem(&pdf).unwrap();
    let text = doc.extract_text(&[1]).unwrap();
    assert!(text.contains("TBL-001"));
    assert!(text.contains("Oak table"));
}

#[test]
fn test_empty_description_still_renders() {
    let record = ProductRecord::new("NO-DESC", "");
    let pdf = generate_labels(&record, 1).unwrap();
    assert_eq!(page_count(&pdf), 1);
}
