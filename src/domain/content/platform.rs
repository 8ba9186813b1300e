use crate::domain::AppError;

/// Social platform a post is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    LinkedIn,
    Twitter,
    WhatsApp,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::LinkedIn, Platform::Twitter, Platform::WhatsApp];

    pub fn name(&self) -> &'static str {
        match self {
            Platform::LinkedIn => "linkedin",
            Platform::Twitter => "twitter",
            Platform::WhatsApp => "whatsapp",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::Twitter => "Twitter",
            Platform::WhatsApp => "WhatsApp",
        }
    }

    /// Completion budget for a post on this platform.
    pub fn max_tokens(&self) -> u32 {
        match self {
            Platform::LinkedIn => 350,
            Platform::Twitter => 200,
            Platform::WhatsApp => 300,
        }
    }

    /// Name of the embedded template that renders the post instruction.
    pub fn template_name(&self) -> &'static str {
        match self {
            Platform::LinkedIn => "content/linkedin.txt",
            Platform::Twitter => "content/twitter.txt",
            Platform::WhatsApp => "content/whatsapp.txt",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, AppError> {
        let normalized = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|platform| platform.name() == normalized).ok_or_else(|| {
            AppError::Validation(format!(
                "Unknown platform '{}': must be one of linkedin, twitter, whatsapp",
                name
            ))
        })
    }
}
