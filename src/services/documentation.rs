use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI document for Hoop Story Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::health::server_test,
        crate::routes::players::list_players,
        crate::routes::players::get_player,
        crate::routes::players::create_player,
        crate::routes::players::update_player,
        crate::routes::players::delete_player,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::health::ServerStatusResponse,
            crate::dto::player::PlayerCardDto,
            crate::dto::player::PlayerDetail,
            crate::dto::player::CreatePlayerRequest,
            crate::dto::player::UpdatePlayerRequest,
            crate::dto::player::CreatePlayerResponse,
            crate::dto::player::ChangesResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "players", description = "Player catalog management"),
    )
)]
/// OpenAPI document of the REST API.
pub struct ApiDoc;
