use crate::domain::AppError;

const MAX_WORD_CHARS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MandalaStyle {
    #[default]
    BlackAndWhite,
    Color,
    NewAge,
}

impl MandalaStyle {
    pub fn name(&self) -> &'static str {
        match self {
            MandalaStyle::BlackAndWhite => "bw",
            MandalaStyle::Color => "color",
            MandalaStyle::NewAge => "new-age",
        }
    }

    pub fn template_name(&self) -> &'static str {
        match self {
            MandalaStyle::BlackAndWhite => "mandala/black_and_white.txt",
            MandalaStyle::Color => "mandala/color.txt",
            MandalaStyle::NewAge => "mandala/new_age.txt",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, AppError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "bw" | "black-and-white" => Ok(MandalaStyle::BlackAndWhite),
            "color" | "colour" => Ok(MandalaStyle::Color),
            "new-age" | "newage" => Ok(MandalaStyle::NewAge),
            _ => Err(AppError::Validation(format!(
                "Unknown mandala style '{}': must be bw, color, or new-age",
                name
            ))),
        }
    }
}

/// A validated single-word mandala request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MandalaRequest {
    word: String,
    style: MandalaStyle,
}

impl MandalaRequest {
    pub fn new(word: &str, style: MandalaStyle) -> Result<Self, AppError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(AppError::MissingField("word"));
        }
        if word.split_whitespace().count() > 1 {
            return Err(AppError::Validation("Please enter only a single word.".to_string()));
        }
        if word.chars().count() > MAX_WORD_CHARS {
            return Err(AppError::Validation(format!(
                "Word must be at most {} characters",
                MAX_WORD_CHARS
            )));
        }
        Ok(Self { word: word.to_string(), style })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn style(&self) -> MandalaStyle {
        self.style
    }

    /// Default file name for the downloaded image.
    pub fn file_name(&self) -> String {
        format!("mandala_{}.png", self.word)
    }
}
