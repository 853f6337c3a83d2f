// SPDX-License-Identifier: GPL-3.0-only

//! Display regions of the viewer.
//!
//! Each region is owned by a single render method on [`Screen`] and is
//! always replaced as a whole, never patched.

use crate::{
    core::{PaginationState, Transition},
    entities::{PokemonDetail, PokemonSummary, ThemePreference},
    utils::{StarryError, padded_id, scale_numbers},
};

pub const LOADING_TEXT: &str = "Loading...";
pub const NOT_FOUND_TEXT: &str = "Pokémon not found!";
pub const NETWORK_ERROR_TEXT: &str = "Could not reach the Pokédex service.";
pub const GALLERY_ERROR_TEXT: &str = "Could not load the gallery.";
pub const NO_DESCRIPTION_TEXT: &str = "No description found.";
pub const PLACEHOLDER_IMAGE: &str = "placeholder.png";
pub const PREVIOUS_LABEL: &str = "Previous";
pub const NEXT_LABEL: &str = "Next";
pub const SWITCH_TO_LIGHT_LABEL: &str = "☀️ Light Mode";
pub const SWITCH_TO_DARK_LABEL: &str = "🌙 Dark Mode";

/// Where an image comes from
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ImageSource {
    Remote(String),
    /// Bundled fallback, for Pokémon without a sprite
    Placeholder,
}

impl ImageSource {
    fn from_url(url: Option<&String>) -> Self {
        url.map_or(Self::Placeholder, |url| Self::Remote(url.clone()))
    }

    /// Path or URL handed to the image widget
    pub fn location(&self) -> &str {
        match self {
            Self::Remote(url) => url,
            Self::Placeholder => PLACEHOLDER_IMAGE,
        }
    }
}

/// Rendered detail of a single Pokémon
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DetailView {
    pub id: u32,
    pub name: String,
    pub padded_id: String,
    pub title: String,
    pub image: ImageSource,
    pub types: String,
    pub height: String,
    pub weight: String,
    pub fact: String,
}

impl From<&PokemonDetail> for DetailView {
    fn from(detail: &PokemonDetail) -> Self {
        let padded_id = padded_id(detail.id);

        Self {
            id: detail.id,
            name: detail.name.clone(),
            title: format!("{} ({padded_id})", detail.name),
            padded_id,
            image: ImageSource::from_url(detail.sprite_url.as_ref()),
            types: detail.types.join(", "),
            height: format!("{} m", scale_numbers(detail.height_decimeters)),
            weight: format!("{} kg", scale_numbers(detail.weight_hectograms)),
            fact: detail
                .flavor_text
                .clone()
                .unwrap_or_else(|| String::from(NO_DESCRIPTION_TEXT)),
        }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub enum DetailRegion {
    #[default]
    Empty,
    Loading,
    Loaded(DetailView),
    Error(String),
}

impl DetailRegion {
    pub fn failed(error: &StarryError) -> Self {
        let message = match error {
            StarryError::NotFound(_) => NOT_FOUND_TEXT,
            _ => NETWORK_ERROR_TEXT,
        };
        Self::Error(String::from(message))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Text a user reads in the panel, `None` for a loaded detail
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Empty | Self::Loaded(_) => None,
            Self::Loading => Some(LOADING_TEXT),
            Self::Error(message) => Some(message),
        }
    }
}

/// One clickable gallery card
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GalleryCard {
    pub id: u32,
    pub label: String,
    pub name: String,
    pub image: ImageSource,
}

impl GalleryCard {
    /// Query a click on this card searches for
    pub fn click_query(&self) -> &str {
        &self.name
    }
}

impl From<&PokemonSummary> for GalleryCard {
    fn from(summary: &PokemonSummary) -> Self {
        Self {
            id: summary.id,
            label: padded_id(summary.id),
            name: summary.name.clone(),
            image: ImageSource::from_url(summary.sprite_url.as_ref()),
        }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub enum GalleryContent {
    #[default]
    Empty,
    Cards(Vec<GalleryCard>),
    Error(String),
}

impl GalleryContent {
    pub fn from_result(result: &Result<Vec<PokemonSummary>, StarryError>) -> Self {
        match result {
            Ok(pokemon) => Self::Cards(pokemon.iter().map(GalleryCard::from).collect()),
            Err(_) => Self::Error(String::from(GALLERY_ERROR_TEXT)),
        }
    }

    pub fn cards(&self) -> &[GalleryCard] {
        match self {
            Self::Cards(cards) => cards,
            Self::Empty | Self::Error(_) => &[],
        }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct GalleryRegion {
    pub content: GalleryContent,
    pub transition: Option<Transition>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PaginationButton {
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PaginationControls {
    pub previous: PaginationButton,
    pub next: PaginationButton,
}

impl From<&PaginationState> for PaginationControls {
    fn from(state: &PaginationState) -> Self {
        Self {
            previous: PaginationButton {
                label: PREVIOUS_LABEL,
                disabled: !state.can_go_back(),
            },
            next: PaginationButton {
                label: NEXT_LABEL,
                disabled: !state.can_go_forward(),
            },
        }
    }
}

/// Visual state of the theme: the body flag and the toggle's label
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ThemeControl {
    pub dark_mode: bool,
    pub label: &'static str,
}

/// Deterministic visual state for a preference
pub fn apply_preference(theme: ThemePreference) -> ThemeControl {
    match theme {
        ThemePreference::Dark => ThemeControl {
            dark_mode: true,
            label: SWITCH_TO_LIGHT_LABEL,
        },
        ThemePreference::Light => ThemeControl {
            dark_mode: false,
            label: SWITCH_TO_DARK_LABEL,
        },
    }
}

/// Everything currently on screen
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Screen {
    detail: DetailRegion,
    gallery: GalleryRegion,
    pagination: PaginationControls,
    theme: ThemeControl,
}

impl Screen {
    pub fn new(pagination: &PaginationState, theme: ThemePreference) -> Self {
        Self {
            detail: DetailRegion::default(),
            gallery: GalleryRegion::default(),
            pagination: PaginationControls::from(pagination),
            theme: apply_preference(theme),
        }
    }

    pub fn detail(&self) -> &DetailRegion {
        &self.detail
    }

    pub fn gallery(&self) -> &GalleryRegion {
        &self.gallery
    }

    pub fn pagination(&self) -> &PaginationControls {
        &self.pagination
    }

    pub fn theme(&self) -> &ThemeControl {
        &self.theme
    }

    pub(crate) fn render_detail(&mut self, detail: DetailRegion) {
        self.detail = detail;
    }

    pub(crate) fn render_gallery(&mut self, content: GalleryContent) {
        self.gallery.content = content;
    }

    pub(crate) fn set_gallery_transition(&mut self, transition: Option<Transition>) {
        self.gallery.transition = transition;
    }

    pub(crate) fn update_pagination_buttons(&mut self, pagination: &PaginationState) {
        self.pagination = PaginationControls::from(pagination);
    }

    pub(crate) fn apply_preference(&mut self, theme: ThemePreference) {
        self.theme = apply_preference(theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PaginationAction;

    fn pikachu() -> PokemonDetail {
        PokemonDetail {
            id: 25,
            name: String::from("pikachu"),
            sprite_url: None,
            types: vec![String::from("electric")],
            height_decimeters: 4,
            weight_hectograms: 60,
            flavor_text: None,
        }
    }

    #[test]
    fn detail_view_formats_fields() {
        let view = DetailView::from(&pikachu());
        assert_eq!(view.title, "pikachu (#025)");
        assert_eq!(view.padded_id, "#025");
        assert_eq!(view.height, "0.4 m");
        assert_eq!(view.weight, "6 kg");
        assert_eq!(view.types, "electric");
        assert_eq!(view.fact, NO_DESCRIPTION_TEXT);
        assert_eq!(view.image, ImageSource::Placeholder);
    }

    #[test]
    fn errors_map_to_literal_messages() {
        let not_found = DetailRegion::failed(&StarryError::NotFound(String::from("x")));
        assert_eq!(not_found.message(), Some(NOT_FOUND_TEXT));

        let offline = DetailRegion::failed(&StarryError::Network(String::from("dns")));
        assert_eq!(offline.message(), Some(NETWORK_ERROR_TEXT));

        let gallery = GalleryContent::from_result(&Err(StarryError::NotFound(String::from("3"))));
        assert_eq!(gallery, GalleryContent::Error(String::from(GALLERY_ERROR_TEXT)));
        assert!(gallery.cards().is_empty());
    }

    #[test]
    fn cards_fall_back_to_placeholder() {
        let card = GalleryCard::from(&PokemonSummary {
            id: 7,
            name: String::from("squirtle"),
            sprite_url: None,
        });
        assert_eq!(card.label, "#007");
        assert_eq!(card.image.location(), PLACEHOLDER_IMAGE);
        assert_eq!(card.click_query(), "squirtle");
    }

    #[test]
    fn pagination_buttons_follow_state() {
        let first = PaginationState::new(24, 1025);
        let controls = PaginationControls::from(&first);
        assert!(controls.previous.disabled);
        assert!(!controls.next.disabled);

        let second = first.moved(PaginationAction::Next).unwrap();
        let controls = PaginationControls::from(&second);
        assert!(!controls.previous.disabled);
        assert!(!controls.next.disabled);

        let only = PaginationControls::from(&PaginationState::new(24, 24));
        assert!(only.previous.disabled);
        assert!(only.next.disabled);
    }

    #[test]
    fn theme_labels_offer_the_other_mode() {
        assert_eq!(
            apply_preference(ThemePreference::Dark),
            ThemeControl {
                dark_mode: true,
                label: SWITCH_TO_LIGHT_LABEL
            }
        );
        assert!(!apply_preference(ThemePreference::Light).dark_mode);
    }
}
