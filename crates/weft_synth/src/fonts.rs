//! Font book
//!
//! Text-bearing artifacts need their fonts resolved before any builder
//! runs, and the host is the only party that can actually load them (and
//! may do so asynchronously behind the trait). The book records which
//! variants loaded and substitutes the regular variant for any style that
//! did not - a missing bold face never blocks a run.

use rustc_hash::FxHashSet;

use weft_core::Host;

/// Loaded font variants for one family
#[derive(Clone, Debug)]
pub struct FontBook {
    family: String,
    loaded: FxHashSet<String>,
    failed: Vec<String>,
}

impl FontBook {
    pub const DEFAULT_FAMILY: &'static str = "Inter";
    pub const DEFAULT_STYLES: [&'static str; 4] = ["Regular", "Medium", "Semi Bold", "Bold"];
    const REGULAR: &'static str = "Regular";

    /// Load the requested styles, blocking until each either loads or
    /// fails. Failures are recorded per style; the caller reports them on
    /// the run event stream.
    pub fn load(host: &mut dyn Host, family: &str, styles: &[&str]) -> Self {
        let mut loaded = FxHashSet::default();
        let mut failed = Vec::new();
        for style in styles {
            match host.load_font(family, style) {
                Ok(()) => {
                    loaded.insert(style.to_string());
                }
                Err(err) => {
                    tracing::debug!("font {family} {style} failed to load: {err}");
                    failed.push(style.to_string());
                }
            }
        }
        Self {
            family: family.to_string(),
            loaded,
            failed,
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    /// Styles that failed to load, in request order
    pub fn failed_styles(&self) -> &[String] {
        &self.failed
    }

    /// The requested style if it loaded, otherwise the regular variant.
    /// If regular itself failed, text creation will fail downstream and
    /// builders omit their labels.
    pub fn style_or_regular<'a>(&'a self, style: &'a str) -> &'a str {
        if self.loaded.contains(style) {
            style
        } else {
            Self::REGULAR
        }
    }

    /// Whether any variant at all is usable
    pub fn any_loaded(&self) -> bool {
        !self.loaded.is_empty()
    }
}
