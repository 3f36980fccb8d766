pub mod fields;
pub mod snippet;
pub mod usage;

pub use fields::EditorFields;
pub use snippet::{SnippetDefaults, SnippetPreview, SLUG_PLACEHOLDER};
pub use usage::KeyphraseUsage;
