//! Canned role descriptions offered in place of a hand-written role.

use crate::domain::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RolePreset {
    Techie,
    ContentGenius,
    Teacher,
}

impl RolePreset {
    pub const ALL: [RolePreset; 3] =
        [RolePreset::Techie, RolePreset::ContentGenius, RolePreset::Teacher];

    pub fn name(&self) -> &'static str {
        match self {
            RolePreset::Techie => "techie",
            RolePreset::ContentGenius => "content-genius",
            RolePreset::Teacher => "teacher",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RolePreset::Techie => {
                "Highly experienced tech engineer expertise in AI, Deep tech, python, front end design. Think CTO in a company like Apple."
            }
            RolePreset::ContentGenius => {
                "A super creative mastermind that knows how to tell a story and craft great content."
            }
            RolePreset::Teacher => {
                "Explaining concepts to a 5 year old, adult explanation and real world example."
            }
        }
    }

    pub fn from_name(name: &str) -> Result<Self, AppError> {
        let normalized = name.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Self::ALL.into_iter().find(|preset| preset.name() == normalized).ok_or_else(|| {
            let available: Vec<&str> = Self::ALL.iter().map(RolePreset::name).collect();
            AppError::Validation(format!(
                "Unknown persona '{}'. Available: {}",
                name,
                available.join(", ")
            ))
        })
    }
}
