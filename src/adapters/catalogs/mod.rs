pub mod prompt_assets;
pub mod voice_catalog;

pub use self::voice_catalog::builtin_voice_catalog;
