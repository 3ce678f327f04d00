//! Synthetic PDF documents for tests.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// Single-page PDF with each line drawn in Helvetica, top to bottom.
pub fn text_pdf(lines: &[&str]) -> Vec<u8> {
    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 12.into()]),
        Operation::new("Td", vec![72.into(), 720.into()]),
    ];
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            operations.push(Operation::new("Td", vec![0.into(), (-20).into()]));
        }
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
    }
    operations.push(Operation::new("ET", vec![]));

    build_pdf(Content { operations })
}

/// Single-page PDF with no text layer.
pub fn blank_pdf() -> Vec<u8> {
    build_pdf(Content { operations: vec![] })
}

/// Text drawn on the page of [`encrypted_pdf`].
pub const ENCRYPTED_PDF_LINES: [&str; 2] =
    ["Encrypted invoice for ap@client.example", "Total 1,234.56"];

/// Single-page PDF encrypted with the standard handler (RC4, 128-bit, R4)
/// and an empty user password.
pub fn encrypted_pdf() -> Vec<u8> {
    include_bytes!("../tests/fixtures/encrypted-empty-password.pdf").to_vec()
}

fn build_pdf(content: Content) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let encoded = content.encode().expect("encode content stream");
    let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

    let media_box: Vec<Object> = vec![0.into(), 0.into(), 612.into(), 792.into()];
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => media_box.clone(),
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => media_box,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).expect("serialize test PDF");
    buffer
}
