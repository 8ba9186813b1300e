//! Embedded catalog for prompt templates.
//!
//! Templates are resolved at runtime from the binary and addressed by their
//! path relative to `src/assets/prompts/` (e.g. `"workflow/clarify_user.txt"`).

use include_dir::{Dir, DirEntry, include_dir};

static PROMPTS_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");

/// Every embedded template as `(relative path, source)`, depth first.
pub fn prompt_assets() -> Vec<(&'static str, &'static str)> {
    fn collect(dir: &'static Dir<'static>, out: &mut Vec<(&'static str, &'static str)>) {
        for entry in dir.entries() {
            match entry {
                DirEntry::File(file) => {
                    if let (Some(path), Some(source)) = (file.path().to_str(), file.contents_utf8())
                    {
                        out.push((path, source));
                    }
                }
                DirEntry::Dir(child) => collect(child, out),
            }
        }
    }

    let mut assets = Vec::new();
    collect(&PROMPTS_DIR, &mut assets);
    assets
}
