use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::pokemon::create_pokemon,
        api::pokemon::list_pokemon,
        api::pokemon::get_pokemon,
        api::pokemon::update_pokemon,
        api::pokemon::delete_pokemon,
        api::seed::execute_seed,
    ),
    components(
        schemas(
            crate::domain::Pokemon,
            api::pokemon::CreatePokemonRequest,
            api::pokemon::UpdatePokemonRequest,
        )
    ),
    tags(
        (name = "pokedex", description = "Pokedex API")
    )
)]
pub struct ApiDoc;
