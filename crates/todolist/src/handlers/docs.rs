//! API documentation: the OpenAPI document and a Swagger UI page for it.
//!
//! Both are compiled into the binary.

use axum::{
    http::header,
    response::{Html, IntoResponse},
};

const OPENAPI_YAML: &str = include_str!("../../docs/openapi.yaml");

const SWAGGER_UI_VERSION: &str = "5.17.14";

/// GET /docs.yaml - The OpenAPI document.
pub async fn openapi_yaml() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/yaml; charset=utf-8")],
        OPENAPI_YAML,
    )
}

/// GET /docs - Swagger UI pointed at `/docs.yaml`.
pub async fn swagger_ui() -> Html<String> {
    Html(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Todolist API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@{SWAGGER_UI_VERSION}/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@{SWAGGER_UI_VERSION}/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {{
      window.ui = SwaggerUIBundle({{ url: "docs.yaml", dom_id: "#swagger-ui" }});
    }};
  </script>
</body>
</html>
"##
    ))
}
