// SPDX-License-Identifier: GPL-3.0-only

use crate::{
    core::{api::StarryApi, pagination::PaginationState},
    entities::PokemonSummary,
    utils::StarryError,
};

/// Fetches every Pokémon of the page concurrently, one request per Pokédex
/// number. Results keep ascending id order whatever order the responses
/// arrive in, and a single failure fails the whole page.
pub async fn fetch_gallery(
    api: &StarryApi,
    pagination: &PaginationState,
) -> Result<Vec<PokemonSummary>, StarryError> {
    let ids = pagination.ids();
    tracing::info!(
        first = *ids.start(),
        last = *ids.end(),
        "fetching gallery page"
    );

    let requests = ids.map(|id| async move {
        let pokemon = api.get_pokemon(&id.to_string()).await?;
        Ok::<_, StarryError>(PokemonSummary {
            id: pokemon.id,
            name: pokemon.name,
            sprite_url: pokemon.sprites.front_default,
        })
    });

    futures::future::try_join_all(requests).await
}
