use crate::document::{ApiDocument, HttpMethod};
use crate::error::SpecError;
use matchit::Router;

/// Maps concrete request paths onto the path templates of a loaded
/// document.
///
/// `paths` keys are templates (`/users/{id}`); the index lets a caller
/// take a real URL path (`/users/42`) and find the operation that owns
/// it, the way a gateway or traffic monitor would.
pub struct EndpointIndex {
    router: Router<IndexedPath>,
}

struct IndexedPath {
    template: String,
    methods: Vec<HttpMethod>,
}

/// A successful lookup: the owning template plus the path parameters
/// extracted from the concrete URL.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub template: &'a str,
    pub params: Vec<(String, String)>,
}

impl EndpointIndex {
    /// Builds an index over every path in the document.
    ///
    /// # Errors
    /// `RouteIndex` when a template cannot be inserted (duplicate or
    /// malformed path).
    pub fn from_document(doc: &ApiDocument) -> Result<Self, SpecError> {
        let mut router = Router::new();

        for (path, methods) in doc.endpoints() {
            let entry = IndexedPath {
                template: path.clone(),
                methods,
            };
            router
                .insert(path.clone(), entry)
                .map_err(|e| SpecError::RouteIndex {
                    path,
                    reason: e.to_string(),
                })?;
        }

        Ok(Self { router })
    }

    /// Finds the template owning `url` and checks `method` against the
    /// ones the document declares for it.
    pub fn find(&self, url: &str, method: HttpMethod) -> Result<RouteMatch<'_>, SpecError> {
        let matched = self
            .router
            .at(url)
            .map_err(|_| SpecError::EndpointNotFound(url.to_string()))?;

        if !matched.value.methods.contains(&method) {
            return Err(SpecError::MethodNotAllowed {
                method: method.as_str().to_string(),
                path: matched.value.template.clone(),
            });
        }

        Ok(RouteMatch {
            template: &matched.value.template,
            params: matched
                .params
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        })
    }
}
