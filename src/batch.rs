//! Rendering a batch of addresses to files

use crate::Result;
use crate::compose::LabelComposer;
use crate::constants::*;
use crate::error::LabelError;
use crate::label::{LabelRequest, Orientation};
use crate::style::LabelStyle;
use crate::units::{MarginSpec, PageSpec};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Management URL template with an `{address}` placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    pub fn new<S: Into<String>>(template: S) -> Result<Self> {
        let template = template.into();
        if !template.contains(ADDRESS_PLACEHOLDER) {
            return Err(LabelError::ConfigError(format!(
                "URL template {template:?} has no {ADDRESS_PLACEHOLDER} placeholder"
            )));
        }
        Ok(Self(template))
    }

    /// Template for the node page of a management host
    pub fn for_host(host: &str) -> Result<Self> {
        let host = host.trim().trim_end_matches('/');
        if host.is_empty() {
            return Err(LabelError::ConfigError("management host is empty".to_string()));
        }
        Self::new(format!("http://{host}/#/n/{ADDRESS_PLACEHOLDER}"))
    }

    /// URL for `address`, with the colons removed
    pub fn url_for(&self, address: &str) -> String {
        self.0.replace(ADDRESS_PLACEHOLDER, &address.replace(':', ""))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UrlTemplate {
    fn default() -> Self {
        Self(DEFAULT_URL_TEMPLATE.to_string())
    }
}

/// File name for a label: the address without non-word characters, plus `.pdf`
pub fn output_filename(address: &str) -> Result<String> {
    let stem: String = address
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    if stem.is_empty() {
        return Err(LabelError::ConfigError(format!(
            "address {address:?} yields an empty file name"
        )));
    }
    Ok(format!("{stem}.pdf"))
}

/// Settings shared by every label of a batch
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    pub url_template: UrlTemplate,
    pub output_dir: PathBuf,
    pub footer: Option<String>,
    pub page: PageSpec,
    pub margin: MarginSpec,
    pub orientation: Option<Orientation>,
    pub style: LabelStyle,
}

impl BatchOptions {
    /// Label request for one address of the batch
    pub fn request_for(&self, address: &str) -> LabelRequest {
        let mut request = LabelRequest::new(address, self.url_template.url_for(address))
            .with_page(self.page)
            .with_margin(self.margin)
            .with_style(self.style.clone());
        if let Some(footer) = &self.footer {
            request = request.with_footer(footer.clone());
        }
        if let Some(orientation) = self.orientation {
            request = request.with_orientation(orientation);
        }
        request
    }
}

/// A label that was rendered and written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenLabel {
    pub address: String,
    pub path: PathBuf,
}

/// Render one address and write it into the output directory
#[instrument(skip(composer, options))]
pub fn render_to_file(
    composer: &LabelComposer,
    address: &str,
    options: &BatchOptions,
) -> Result<WrittenLabel> {
    let address = address.trim();
    let path = options.output_dir.join(output_filename(address)?);

    let bytes = composer.render_request(options.request_for(address))?;
    std::fs::write(&path, bytes)?;
    debug!("Wrote {}", path.display());

    Ok(WrittenLabel {
        address: address.to_string(),
        path,
    })
}

/// Render every address into its own file.
///
/// A failing address does not stop the others; results are returned in
/// input order.
pub fn render_batch<S: AsRef<str> + Sync>(
    addresses: &[S],
    options: &BatchOptions,
) -> Vec<Result<WrittenLabel>> {
    let composer = LabelComposer::new();
    let render = |address: &S| {
        render_to_file(&composer, address.as_ref(), options).inspect_err(|e| {
            warn!("Label for {} failed: {}", address.as_ref(), e);
        })
    };

    #[cfg(feature = "parallel")]
    let results: Vec<_> = {
        use rayon::prelude::*;
        addresses.par_iter().map(render).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let results: Vec<_> = addresses.iter().map(render).collect();

    results
}

/// Paths of the successfully written labels, in order
pub fn written_paths(results: &[Result<WrittenLabel>]) -> Vec<&Path> {
    results
        .iter()
        .filter_map(|r| r.as_ref().ok())
        .map(|w| w.path.as_path())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("device-label-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_default_url_template() {
        let url = UrlTemplate::default().url_for("00:11:22:33:44:55");
        assert_eq!(url, "http://mgmt.ffhb.de/#/n/001122334455");
    }

    #[test]
    fn test_url_template_for_host() {
        let template = UrlTemplate::for_host("node.example.net/").unwrap();
        assert_eq!(template.url_for("aa:bb"), "http://node.example.net/#/n/aabb");
        assert!(UrlTemplate::for_host("  ").is_err());
    }

    #[test]
    fn test_url_template_requires_placeholder() {
        assert!(matches!(
            UrlTemplate::new("http://example.org/"),
            Err(LabelError::ConfigError(_))
        ));
    }

    #[test]
    fn test_output_filename_strips_non_word_characters() {
        assert_eq!(output_filename("00:11:22:33:44:55").unwrap(), "001122334455.pdf");
        assert_eq!(output_filename("de-ad_be.ef").unwrap(), "dead_beef.pdf");
        assert!(output_filename("::").is_err());
    }

    #[test]
    fn test_batch_continues_after_failure() {
        let options = BatchOptions {
            output_dir: temp_dir("batch"),
            ..BatchOptions::default()
        };
        let results = render_batch(&[" 00:11:22:33:44:55 ", "::", "66:77:88:99:aa:bb"], &options);

        assert_eq!(results.len(), 3);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.address, "00:11:22:33:44:55");
        assert!(first.path.ends_with("001122334455.pdf"));
        assert!(first.path.exists());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
        assert_eq!(written_paths(&results).len(), 2);

        std::fs::remove_dir_all(&options.output_dir).ok();
    }

    #[test]
    fn test_missing_output_dir_is_io_error() {
        let options = BatchOptions {
            output_dir: temp_dir("missing").join("does/not/exist"),
            ..BatchOptions::default()
        };
        let results = render_batch(&["00:11:22:33:44:55"], &options);
        assert!(matches!(results[0], Err(LabelError::IoError(_))));
    }

    #[test]
    fn test_request_carries_batch_settings() {
        let options = BatchOptions {
            footer: Some("Freifunk".to_string()),
            orientation: Some(Orientation::Portrait),
            ..BatchOptions::default()
        };
        let request = options.request_for("00:11");
        assert_eq!(request.url, "http://mgmt.ffhb.de/#/n/0011");
        assert_eq!(request.footer.as_deref(), Some("Freifunk"));
        assert_eq!(request.orientation, Some(Orientation::Portrait));
    }
}
