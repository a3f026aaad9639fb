//! Site manifest: the pages, labels, and copy the demo site renders.

use std::{fs, path::Path};

use anyhow::Context as _;
use serde::Deserialize;
use shared::domain::PageId;

#[derive(Debug, Clone, Deserialize)]
pub struct SiteManifest {
    pub title: String,
    pub default_page: String,
    pub pages: Vec<PageSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageSection {
    pub id: String,
    pub label: String,
    pub body: String,
}

impl Default for SiteManifest {
    fn default() -> Self {
        let section = |id: &str, label: &str, body: &str| PageSection {
            id: id.to_string(),
            label: label.to_string(),
            body: body.to_string(),
        };
        Self {
            title: "Acme Studio".to_string(),
            default_page: "home".to_string(),
            pages: vec![
                section(
                    "home",
                    "Home",
                    "Welcome. Pick a section from the navigation above; the \
                     location hash is the only navigation state there is.",
                ),
                section(
                    "about",
                    "About",
                    "A small studio demo. Every visible state on this screen \
                     is derived from classes toggled by the navigation \
                     controller.",
                ),
                section(
                    "services",
                    "Services",
                    "Design, build, and ship. Resize the window below the \
                     mobile breakpoint to try the hamburger menu.",
                ),
                section(
                    "contact",
                    "Contact",
                    "hello@example.com - or use the back button in the footer \
                     to walk the hash history.",
                ),
            ],
        }
    }
}

impl SiteManifest {
    pub fn default_page_id(&self) -> PageId {
        PageId::new(self.default_page.clone())
    }
}

/// Resolves the manifest: an explicit path wins, then the `SITE_MANIFEST`
/// env var, then a `site.toml` next to the binary, then the built-in site.
pub fn load_manifest(explicit_path: Option<&Path>) -> anyhow::Result<SiteManifest> {
    if let Some(path) = explicit_path {
        return read_manifest(path);
    }
    if let Ok(path) = std::env::var("SITE_MANIFEST") {
        return read_manifest(Path::new(&path));
    }
    let local = Path::new("site.toml");
    if local.exists() {
        return read_manifest(local);
    }
    Ok(SiteManifest::default())
}

fn read_manifest(path: &Path) -> anyhow::Result<SiteManifest> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read site manifest {}", path.display()))?;
    let manifest: SiteManifest = toml::from_str(&raw)
        .with_context(|| format!("failed to parse site manifest {}", path.display()))?;
    Ok(manifest)
}
