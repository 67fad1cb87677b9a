use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct PersonDoc { pub id: String, pub name: String, pub number: String }

#[derive(ToSchema)]
pub struct PersonInputDoc { pub name: String, pub number: String }

#[derive(ToSchema)]
pub struct NumberInputDoc { pub number: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::info::health,
        crate::routes::info::info,
        crate::routes::persons::list,
        crate::routes::persons::get,
        crate::routes::persons::create,
        crate::routes::persons::update,
        crate::routes::persons::delete,
    ),
    components(
        schemas(
            HealthResponse,
            PersonDoc,
            PersonInputDoc,
            NumberInputDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "info"),
        (name = "persons")
    )
)]
pub struct ApiDoc;
