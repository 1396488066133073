//! OpenAPI document for the HTTP surface.

use crate::api::handlers::{auth, health};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        auth::sign_up::sign_up,
        auth::sign_in::sign_in,
        auth::session::sign_out,
        auth::session::check,
    ),
    components(schemas(
        health::Health,
        auth::types::SignUpRequest,
        auth::types::SignInRequest,
        auth::types::UserResponse,
        auth::types::MessageResponse,
    )),
    tags(
        (name = "auth", description = "Account credentials and session endpoints"),
        (name = "health", description = "Service health")
    ),
    info(
        title = "courier-auth",
        description = "Account and session service for the Courier messaging backend"
    )
)]
struct ApiDoc;

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
