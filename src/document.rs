//! Single-page PDF document setup and serialization

use crate::Result;
use crate::font::StandardFont;
use crate::units::PageSize;
use lopdf::{Document, Object, ObjectId, dictionary};
use tracing::debug;

/// Resource name under which the label font is registered
pub const LABEL_FONT: &str = "F1";

/// Create a document with one empty page of the given size.
///
/// `page` must already be in its final orientation; it becomes the MediaBox
/// as is. Returns the document and the id of its page.
pub fn new_label_document(page: PageSize, font: StandardFont) -> (Document, ObjectId) {
    let mut doc = Document::with_version("1.5");

    let media_box: Vec<Object> = vec![0.into(), 0.into(), page.width.into(), page.height.into()];

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => font.base_font(),
        "Encoding" => "WinAnsiEncoding",
    });

    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            LABEL_FONT => font_id,
        },
    });

    let pages_id = doc.new_object_id();
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => media_box.clone(),
        "Resources" => resources_id,
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "MediaBox" => media_box,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    debug!(
        "Created {}x{}pt document with font {}",
        page.width,
        page.height,
        font.base_font()
    );
    (doc, page_id)
}

/// Serialize a document to bytes, optionally compressing its streams
pub fn serialize(mut doc: Document, compress: bool) -> Result<Vec<u8>> {
    if compress {
        doc.compress();
    }
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    debug!("Serialized label document ({} bytes)", bytes.len());
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_has_one_page_with_media_box() {
        let (doc, page_id) = new_label_document(PageSize::new(420.0, 595.0), StandardFont::Helvetica);

        let pages = doc.get_pages();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages.get(&1), Some(&page_id));

        let page = doc.get_dictionary(page_id).unwrap();
        let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
        assert_eq!(media_box.len(), 4);
        assert_eq!(media_box[3].as_float().unwrap(), 595.0);
    }

    #[test]
    fn test_serialized_bytes_are_a_pdf() {
        let (doc, _) = new_label_document(PageSize::new(100.0, 100.0), StandardFont::Courier);
        let bytes = serialize(doc, true).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));

        let reloaded = Document::load_mem(&bytes).unwrap();
        assert_eq!(reloaded.get_pages().len(), 1);
    }
}
