//! Batch label example
//!
//! Renders a label per address into `labels/`, then draws one more label
//! onto a hand-built document through the `LabelDrawing` trait.
//!
//! Pass the path of a TrueType face metric-compatible with Helvetica
//! (e.g. LiberationSans-Regular.ttf) to also render a label measured with
//! that face's advance widths.

use device_label::document::new_label_document;
use device_label::font::{StandardFont, TtfFontMetrics};
use device_label::{
    BatchOptions, Label, LabelComposer, LabelDrawing, LabelRequest, PageSpec, UrlTemplate,
    render_batch,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging with debug level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    std::fs::create_dir_all("labels")?;

    let options = BatchOptions {
        url_template: UrlTemplate::for_host("mgmt.ffhb.de")?,
        output_dir: "labels".into(),
        footer: Some("Freifunk Bremen".to_string()),
        ..BatchOptions::default()
    };

    let addresses = ["00:11:22:33:44:55", "66:77:88:99:aa:bb", "f8:d1:11:c0:ff:ee"];
    for result in render_batch(&addresses, &options) {
        let written = result?;
        println!("Written {} to {}", written.address, written.path.display());
    }

    // A smaller label drawn onto a document we manage ourselves
    let label = Label::new(
        LabelRequest::new("de:ad:be:ef:00:01", options.url_template.url_for("de:ad:be:ef:00:01"))
            .with_page(PageSpec::new(100.0, 160.0))
            .with_margin(device_label::MarginSpec::new(10.0, 10.0))
            .with_font_family("Courier"),
    )?;
    let (mut doc, page_id) = new_label_document(label.page(), StandardFont::Courier);
    doc.draw_label(page_id, &label)?;
    doc.save("labels/custom.pdf")?;
    println!("PDF saved as 'labels/custom.pdf'");

    if let Some(font_path) = std::env::args().nth(1) {
        let composer =
            LabelComposer::new().with_font_metrics(Box::new(TtfFontMetrics::from_file(&font_path)?));
        let request = options
            .request_for("00:11:22:33:44:55")
            .with_footer("Measured with a TrueType face");
        std::fs::write("labels/measured.pdf", composer.render_request(request)?)?;
        println!("PDF saved as 'labels/measured.pdf' using metrics from {font_path}");
    }

    Ok(())
}
