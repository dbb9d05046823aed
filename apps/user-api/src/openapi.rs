//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api::RootResponse;

/// Top-level document: service info and the banner route
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User API",
        version = "0.1.0",
        description = "MongoDB-based REST API for managing users",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8180", description = "Local development server")
    ),
    paths(crate::api::root),
    components(schemas(RootResponse)),
    tags(
        (name = "Root", description = "Service banner")
    )
)]
struct BaseDoc;

/// Combined OpenAPI documentation for all APIs
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = BaseDoc::openapi();
        doc.merge(domain_users::ApiDoc::openapi());
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_includes_user_routes() {
        let doc = ApiDoc::openapi();

        for path in ["/", "/user", "/user/{id}", "/reset/{email}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
