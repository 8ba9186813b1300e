//! Personas and tones that shape generated posts.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

const FALLBACK_TONE: &str = "Professional";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Persona {
    pub name: String,
    pub summary: String,
    pub voice: String,
    pub structure: String,
    pub signature: String,
    pub examples: Vec<String>,
    pub data_use: String,
}

impl Persona {
    /// A persona described only by the user's own words.
    pub fn custom(description: &str) -> Self {
        Self {
            name: description.to_string(),
            summary: description.to_string(),
            voice: description.to_string(),
            structure: "tailored to the subject with distinctive viewpoint".to_string(),
            signature: "uses specialized language and perspectives specific to their expertise"
                .to_string(),
            examples: vec![
                "From my perspective:".to_string(),
                "Here's what I've observed:".to_string(),
                "My take on this:".to_string(),
            ],
            data_use: "uses data selectively to support key points when relevant".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tone {
    pub name: String,
    pub summary: String,
    pub language: String,
    pub structure: String,
    pub examples: Vec<String>,
    pub punctuation: String,
}

/// Named personas and tones.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VoiceCatalog {
    #[serde(default, rename = "persona")]
    personas: Vec<Persona>,
    #[serde(default, rename = "tone")]
    tones: Vec<Tone>,
}

impl VoiceCatalog {
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let catalog: VoiceCatalog = toml::from_str(content)?;
        if !catalog.tones.iter().any(|tone| tone.name == FALLBACK_TONE) {
            return Err(AppError::config_error(format!(
                "voice catalog must define the '{}' tone",
                FALLBACK_TONE
            )));
        }
        Ok(catalog)
    }

    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }

    pub fn tones(&self) -> &[Tone] {
        &self.tones
    }

    /// Look up a persona by name; unknown names become a custom persona.
    pub fn persona(&self, name: &str) -> Persona {
        self.personas
            .iter()
            .find(|persona| persona.name.eq_ignore_ascii_case(name.trim()))
            .cloned()
            .unwrap_or_else(|| Persona::custom(name.trim()))
    }

    /// Look up a tone by name; unknown names fall back to `Professional`.
    pub fn tone(&self, name: &str) -> Tone {
        let find = |wanted: &str| {
            self.tones.iter().find(|tone| tone.name.eq_ignore_ascii_case(wanted.trim())).cloned()
        };
        // parse_toml guarantees the fallback exists
        find(name).or_else(|| find(FALLBACK_TONE)).unwrap_or_else(|| Tone {
            name: FALLBACK_TONE.to_string(),
            summary: String::new(),
            language: String::new(),
            structure: String::new(),
            examples: Vec::new(),
            punctuation: String::new(),
        })
    }
}
