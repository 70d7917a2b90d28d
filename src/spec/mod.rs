pub mod detector;
pub mod loader;
pub mod resolver;

pub use detector::{detect_dialect, SpecDialect};
pub use loader::load_spec;
pub use resolver::{resolve_document_refs, resolve_shared_refs, CYCLE_MARKER_KEY};
