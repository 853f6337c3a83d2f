// SPDX-License-Identifier: GPL-3.0-only

use std::fmt::Debug;

/// Simple owned data structure, for displaying the Pokémon in the gallery
#[derive(Clone, PartialEq, Eq)]
pub struct PokemonSummary {
    pub id: u32,
    pub name: String,
    pub sprite_url: Option<String>,
}

impl Debug for PokemonSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokemonSummary")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}
