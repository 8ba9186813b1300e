mod platform;
mod sanitize;
mod voice;

pub use platform::Platform;
pub use sanitize::sanitize_text;
pub use voice::{Persona, Tone, VoiceCatalog};
