// SPDX-License-Identifier: GPL-3.0-only

use std::fmt::Debug;

/// Everything the detail panel shows about a Pokémon, merged from the
/// pokemon and pokemon-species resources
#[derive(Clone, PartialEq, Eq)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    pub sprite_url: Option<String>,
    /// Type names in the order PokéAPI lists them (slot order)
    pub types: Vec<String>,
    pub height_decimeters: u32,
    pub weight_hectograms: u32,
    /// Already cleaned, `None` when no entry exists in the configured language
    pub flavor_text: Option<String>,
}

impl Debug for PokemonDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokemonDetail")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}
