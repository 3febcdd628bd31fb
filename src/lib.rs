//! Printable device identification labels built on lopdf
//!
//! A label stacks four bands inside the page margins: a Code 128 barcode of
//! the device's hardware address, the address as text, a square QR code
//! linking to a management URL, and an optional footer.
//!
//! ```no_run
//! use device_label::{LabelRequest, render};
//!
//! let request = LabelRequest::new("00:11:22:33:44:55", "http://mgmt.ffhb.de/#/n/001122334455")
//!     .with_footer("Freifunk Bremen");
//! let pdf = render(request)?;
//! std::fs::write("001122334455.pdf", pdf)?;
//! # Ok::<(), device_label::LabelError>(())
//! ```

use lopdf::{Dictionary, Document, Object, ObjectId, dictionary};
use tracing::{debug, instrument};

pub mod batch;
pub mod compose;
pub mod constants;
pub mod document;
pub mod drawing;
mod drawing_utils;
pub mod error;
pub mod font;
pub mod label;
pub mod layout;
pub mod merge;
pub mod style;
pub mod symbol;
pub mod text;
pub mod units;

pub use batch::{BatchOptions, UrlTemplate, WrittenLabel, output_filename, render_batch};
pub use compose::{LabelComposer, render};
pub use error::{LabelError, Result};
pub use label::{Label, LabelRequest, Orientation};
pub use layout::{Band, ElementBand, InnerArea, LabelLayout, compute_layout};
pub use merge::MergeTool;
pub use style::{Alignment, LabelStyle, VerticalAlignment};
pub use units::{MarginSpec, PageSpec, to_points};

/// Extension trait for lopdf::Document to add label drawing capabilities
pub trait LabelDrawing {
    /// Draw a label onto an existing page.
    ///
    /// The page is expected to match the label's page size; the label font
    /// is registered in the page resources if it is missing.
    fn draw_label(&mut self, page_id: ObjectId, label: &Label) -> Result<()>;
}

impl LabelDrawing for Document {
    #[instrument(skip(self, label), fields(address = %label.request().address))]
    fn draw_label(&mut self, page_id: ObjectId, label: &Label) -> Result<()> {
        let font = font::StandardFont::from_family(&label.request().style.font_family)?;
        let font_name = register_label_font(self, page_id, font)?;
        LabelComposer::new().draw(self, page_id, label, font, &font_name)
    }
}

/// Make sure the page's font resources contain the label font.
///
/// Reuses an entry with the same base font. Otherwise the font is added
/// under the first free `F<n>` name, so fonts already on the page keep
/// their names. Returns the resource name to draw with.
fn register_label_font(doc: &mut Document, page_id: ObjectId, font: font::StandardFont) -> Result<String> {
    let resources_ref = doc
        .get_dictionary(page_id)?
        .get(b"Resources")
        .ok()
        .and_then(|r| r.as_reference().ok());

    let (fonts_ref, taken) = {
        let resources = match resources_ref {
            Some(id) => Some(doc.get_dictionary(id)?),
            None => doc
                .get_dictionary(page_id)?
                .get(b"Resources")
                .ok()
                .and_then(|r| r.as_dict().ok()),
        };
        let fonts_obj = resources.and_then(|r| r.get(b"Font").ok());
        let fonts_ref = fonts_obj.and_then(|f| f.as_reference().ok());
        let taken: Vec<(Vec<u8>, Option<Vec<u8>>)> = match fonts_obj
            .and_then(|f| doc.dereference(f).ok())
            .and_then(|(_, f)| f.as_dict().ok())
        {
            Some(fonts) => fonts
                .iter()
                .map(|(name, entry)| (name.clone(), base_font_of(doc, entry)))
                .collect(),
            None => Vec::new(),
        };
        (fonts_ref, taken)
    };

    let base_font = font.base_font();
    if let Some((name, _)) = taken
        .iter()
        .find(|(_, existing)| existing.as_deref() == Some(base_font.as_bytes()))
    {
        return Ok(String::from_utf8_lossy(name).into_owned());
    }
    let font_name = (1..)
        .map(|n| format!("F{n}"))
        .find(|name| taken.iter().all(|(existing, _)| existing != name.as_bytes()))
        .unwrap_or_else(|| document::LABEL_FONT.to_string());

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    });

    let fonts = match fonts_ref {
        Some(id) => doc.get_dictionary_mut(id)?,
        None => {
            let resources = match resources_ref {
                Some(id) => doc.get_dictionary_mut(id)?,
                None => {
                    let page = doc.get_dictionary_mut(page_id)?;
                    if !page.has(b"Resources") {
                        page.set("Resources", Dictionary::new());
                    }
                    page.get_mut(b"Resources")?.as_dict_mut()?
                }
            };
            if !matches!(resources.get(b"Font"), Ok(Object::Dictionary(_))) {
                resources.set("Font", Dictionary::new());
            }
            resources.get_mut(b"Font")?.as_dict_mut()?
        }
    };
    fonts.set(font_name.as_str(), Object::Reference(font_id));
    debug!("Registered {} as {}", base_font, font_name);

    Ok(font_name)
}

/// BaseFont of a font resource entry, following a reference
fn base_font_of(doc: &Document, entry: &Object) -> Option<Vec<u8>> {
    let (_, font) = doc.dereference(entry).ok()?;
    let name = font.as_dict().ok()?.get(b"BaseFont").ok()?.as_name().ok()?;
    Some(name.to_vec())
}
