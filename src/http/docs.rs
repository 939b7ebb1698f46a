//! API documentation: the OpenAPI document and a Swagger UI page that renders it.
//!
//! The document is generated from the `#[utoipa::path]` annotations on the handlers, so it
//! lists exactly the routes the router serves.
use crate::http::error::ErrorBody;
use crate::http::{brands, supplements, MessageBody};
use crate::model::{Brand, BrandUpdate, NewBrand, NewSupplement, Supplement, SupplementPatch};
use axum::response::Html;
use axum::Json;
use utoipa::OpenApi;

pub const SPEC_ROUTE: &str = "/apispec_1.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Supplement Store API",
        description = "API for managing a supplement store",
        version = "1.0"
    ),
    paths(
        brands::list,
        brands::create,
        brands::update,
        brands::delete,
        supplements::list,
        supplements::create,
        supplements::update,
        supplements::delete
    ),
    components(schemas(
        Brand,
        NewBrand,
        BrandUpdate,
        Supplement,
        NewSupplement,
        SupplementPatch,
        ErrorBody,
        MessageBody
    )),
    tags(
        (name = "brands", description = "Supplement manufacturers"),
        (name = "supplements", description = "Products sold under a brand")
    )
)]
pub struct ApiDoc;

/// `GET /apispec_1.json`
pub async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// `GET /swagger/`: interactive documentation backed by [`SPEC_ROUTE`].
pub async fn swagger_ui() -> Html<String> {
    Html(SWAGGER_PAGE.replace("{spec_url}", SPEC_ROUTE))
}

const SWAGGER_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Supplement Store API</title>
    <link rel="stylesheet" type="text/css"
          href="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui.css" />
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {
            SwaggerUIBundle({
                url: '{spec_url}',
                dom_id: '#swagger-ui',
                deepLinking: true
            });
        };
    </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        assert_eq!(
            paths,
            vec!["/brands", "/brands/{id}", "/supplements", "/supplements/{id}"]
        );
        assert_eq!(doc.info.title, "Supplement Store API");
    }

    #[tokio::test]
    async fn test_swagger_page_points_at_document() {
        let Html(page) = swagger_ui().await;
        assert!(page.contains("url: '/apispec_1.json'"));
    }
}
