//! Embedded persona and tone catalog.

use std::sync::OnceLock;

use crate::domain::AppError;
use crate::domain::content::VoiceCatalog;

static VOICES_TOML: &str = include_str!("../../assets/catalog/voices.toml");
static CATALOG: OnceLock<VoiceCatalog> = OnceLock::new();

/// Load the built-in voice catalog, parsing it on first use.
pub fn builtin_voice_catalog() -> Result<&'static VoiceCatalog, AppError> {
    if let Some(catalog) = CATALOG.get() {
        return Ok(catalog);
    }
    let parsed = VoiceCatalog::parse_toml(VOICES_TOML)?;
    Ok(CATALOG.get_or_init(|| parsed))
}
