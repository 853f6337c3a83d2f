// SPDX-License-Identifier: GPL-3.0-only

mod pokemon_detail;
mod pokemon_summary;
mod theme_preference;

pub use pokemon_detail::PokemonDetail;
pub use pokemon_summary::PokemonSummary;
pub use theme_preference::ThemePreference;
