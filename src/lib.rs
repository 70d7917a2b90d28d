pub mod document;
pub mod endpoint_index;
pub mod error;
pub mod extractors;
pub mod spec;

pub use document::{ApiDocument, HttpMethod, Operation};
pub use endpoint_index::{EndpointIndex, RouteMatch};
pub use error::SpecError;
pub use extractors::{OpenApi3Extractor, RequestBodyExtractor, Swagger2Extractor};
pub use spec::{
    detect_dialect, load_spec, resolve_document_refs, resolve_shared_refs, SpecDialect,
    CYCLE_MARKER_KEY,
};
