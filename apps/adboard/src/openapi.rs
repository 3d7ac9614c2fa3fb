use utoipa::OpenApi;

/// Aggregated OpenAPI documentation for the REST surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "adboard API",
        description = "CRUD over classified ads and their authors"
    ),
    nest(
        (path = "/api/v1/ads", api = domain_ads::AdsApiDoc)
    )
)]
pub struct ApiDoc;
