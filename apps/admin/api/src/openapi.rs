use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(schemas(axum_helpers::StatusBody)),
    info(
        title = "Admin API",
        version = "0.1.0",
        description = "User management backend for the admin console"
    ),
    servers(
        (url = "/api/v1", description = "API base path")
    ),
    nest(
        (path = "/auth", api = domain_users::AuthApiDoc),
        (path = "/users", api = domain_users::ApiDoc)
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_every_user_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in ["/auth/login", "/users", "/users/{id}", "/users/{id}/status"] {
            assert!(paths.contains(&expected), "missing {expected} in {paths:?}");
        }
    }
}
