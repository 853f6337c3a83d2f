// SPDX-License-Identifier: GPL-3.0-only

use crate::{
    core::api::{PokemonResource, SpeciesResource, StarryApi},
    entities::PokemonDetail,
    utils::StarryError,
};

/// Fetches the pokemon and pokemon-species resources for the same query
/// concurrently and merges them. Both must succeed.
pub async fn fetch_detail(
    api: &StarryApi,
    query: &str,
    language: &str,
) -> Result<PokemonDetail, StarryError> {
    tracing::info!(query, "fetching Pokémon detail");

    let (pokemon, species) = futures::join!(api.get_pokemon(query), api.get_species(query));

    let (pokemon, species) = both(pokemon, species)?;
    Ok(merge_detail(pokemon, &species, language))
}

/// Pairs two results. A network failure on either side wins over a missing
/// resource, whichever request finished first.
fn both<A, B>(
    a: Result<A, StarryError>,
    b: Result<B, StarryError>,
) -> Result<(A, B), StarryError> {
    match (a, b) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(e @ StarryError::Network(_)), _) | (_, Err(e @ StarryError::Network(_))) => Err(e),
        (Err(e), _) | (_, Err(e)) => Err(e),
    }
}

/// Builds a [`PokemonDetail`] out of the two resources
pub fn merge_detail(
    pokemon: PokemonResource,
    species: &SpeciesResource,
    language: &str,
) -> PokemonDetail {
    PokemonDetail {
        id: pokemon.id,
        name: pokemon.name,
        sprite_url: pokemon.sprites.front_default,
        types: pokemon
            .types
            .into_iter()
            .map(|slot| slot.type_.name)
            .collect(),
        height_decimeters: pokemon.height,
        weight_hectograms: pokemon.weight,
        flavor_text: species
            .flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == language)
            .map(|entry| clean_flavor_text(&entry.flavor_text)),
    }
}

/// PokéAPI flavor texts keep the line breaks and form feeds of the games'
/// text boxes and older entries spell the word in capitals.
pub fn clean_flavor_text(raw: &str) -> String {
    let flattened: String = raw
        .chars()
        .map(|c| if c == '\n' || c == '\x0c' { ' ' } else { c })
        .collect();

    fix_pokemon_casing(&flattened)
}

fn fix_pokemon_casing(input: &str) -> String {
    const CANONICAL: &str = "Pokémon";
    let target: Vec<char> = CANONICAL.chars().flat_map(char::to_lowercase).collect();

    let chars: Vec<char> = input.chars().collect();
    let mut output = String::with_capacity(input.len());
    let mut i = 0;

    while i < chars.len() {
        let matches = chars.len() - i >= target.len()
            && chars[i..i + target.len()]
                .iter()
                .zip(&target)
                .all(|(c, t)| c.to_lowercase().eq(std::iter::once(*t)));

        if matches {
            output.push_str(CANONICAL);
            i += target.len();
        } else {
            output.push(chars[i]);
            i += 1;
        }
    }

    output
}
