// SPDX-License-Identifier: GPL-3.0-only

//! The viewer state machine.
//!
//! [`Viewer::update`] applies a [`Message`] synchronously (state and display
//! regions change in one step) and returns the [`Effect`]s the runtime has to
//! perform. Completions come back as messages tagged with the
//! [`RequestToken`] they were issued with; anything but the latest token for
//! a region is dropped.

use crate::{
    config::StarryConfig,
    core::{PagerPhase, PaginationAction, PaginationState, Transition},
    entities::{PokemonDetail, PokemonSummary, ThemePreference},
    utils::StarryError,
    view::{DetailRegion, DetailView, GalleryContent, Screen},
};

/// Identifies one issued fetch, strictly increasing per viewer
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct RequestToken(u64);

#[derive(Debug, Clone)]
pub enum Message {
    /// Initial detail + first gallery page
    Init,
    /// Search form submitted with the raw input
    Search(String),
    /// Gallery card clicked, carries the card's name
    CardSelected(String),
    ChangePage(PaginationAction),
    /// The gallery's current transition finished
    TransitionEnded,
    ToggleTheme,
    DetailLoaded(RequestToken, Result<PokemonDetail, StarryError>),
    GalleryLoaded(RequestToken, Result<Vec<PokemonSummary>, StarryError>),
}

/// Side effects requested by the viewer
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Effect {
    FetchDetail {
        token: RequestToken,
        query: String,
    },
    FetchGallery {
        token: RequestToken,
        pagination: PaginationState,
    },
    /// Play a transition, answer with [`Message::TransitionEnded`]
    StartTransition(Transition),
    ScrollToTop,
    PersistTheme(ThemePreference),
}

#[derive(Debug, Clone)]
pub struct Viewer {
    pagination: PaginationState,
    pager: PagerPhase,
    theme: ThemePreference,
    initial_query: String,
    screen: Screen,
    last_token: RequestToken,
    latest_detail: Option<RequestToken>,
    latest_gallery: Option<RequestToken>,
}

impl Viewer {
    pub fn new(config: &StarryConfig, theme: ThemePreference) -> Self {
        let pagination = PaginationState::new(config.page_size, config.total_known);

        Self {
            screen: Screen::new(&pagination, theme),
            pagination,
            pager: PagerPhase::Idle,
            theme,
            initial_query: config.initial_query.clone(),
            last_token: RequestToken::default(),
            latest_detail: None,
            latest_gallery: None,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn pager(&self) -> PagerPhase {
        self.pager
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::Init => {
                let query = self.initial_query.clone();
                let mut effects = self.load_detail(query);
                effects.push(self.load_gallery());
                effects
            }
            Message::Search(input) => {
                let query = input.trim().to_lowercase();
                if query.is_empty() {
                    return Vec::new();
                }
                tracing::info!(%query, "search submitted");
                self.load_detail(query)
            }
            Message::CardSelected(name) => {
                tracing::info!(%name, "gallery card selected");
                let mut effects = self.load_detail(name);
                effects.push(Effect::ScrollToTop);
                effects
            }
            Message::ChangePage(action) => self.change_page(action),
            Message::TransitionEnded => self.transition_ended(),
            Message::ToggleTheme => {
                self.theme = self.theme.toggled();
                self.screen.apply_preference(self.theme);
                tracing::info!(theme = %self.theme, "theme toggled");
                vec![Effect::PersistTheme(self.theme)]
            }
            Message::DetailLoaded(token, result) => {
                if self.latest_detail != Some(token) {
                    tracing::debug!(?token, "dropping stale detail result");
                    return Vec::new();
                }
                self.latest_detail = None;

                let region = match &result {
                    Ok(detail) => DetailRegion::Loaded(DetailView::from(detail)),
                    Err(e) => {
                        tracing::error!(error = %e, "detail fetch failed");
                        DetailRegion::failed(e)
                    }
                };
                self.screen.render_detail(region);
                Vec::new()
            }
            Message::GalleryLoaded(token, result) => self.gallery_loaded(token, &result),
        }
    }

    fn issue_token(&mut self) -> RequestToken {
        self.last_token = RequestToken(self.last_token.0 + 1);
        self.last_token
    }

    fn load_detail(&mut self, query: String) -> Vec<Effect> {
        let token = self.issue_token();
        self.latest_detail = Some(token);
        self.screen.render_detail(DetailRegion::Loading);
        vec![Effect::FetchDetail { token, query }]
    }

    fn load_gallery(&mut self) -> Effect {
        let token = self.issue_token();
        self.latest_gallery = Some(token);
        Effect::FetchGallery {
            token,
            pagination: self.pagination,
        }
    }

    fn change_page(&mut self, action: PaginationAction) -> Vec<Effect> {
        if !self.pager.is_idle() {
            tracing::debug!(?action, phase = ?self.pager, "page change already running");
            return Vec::new();
        }
        if !self.pagination.can_move(action) {
            tracing::debug!(?action, offset = self.pagination.offset(), "no page that way");
            return Vec::new();
        }

        tracing::info!(?action, "changing gallery page");
        self.enter(PagerPhase::AnimatingOut(action));
        vec![Effect::StartTransition(Transition::outgoing(action))]
    }

    fn transition_ended(&mut self) -> Vec<Effect> {
        match self.pager {
            PagerPhase::AnimatingOut(action) => {
                if let Some(moved) = self.pagination.moved(action) {
                    self.pagination = moved;
                }
                self.screen.render_gallery(GalleryContent::Empty);
                self.enter(PagerPhase::Refetching(action));
                vec![self.load_gallery()]
            }
            PagerPhase::AnimatingIn(_) => {
                self.enter(PagerPhase::Idle);
                Vec::new()
            }
            PagerPhase::Idle | PagerPhase::Refetching(_) => {
                tracing::debug!(phase = ?self.pager, "ignoring transition end");
                Vec::new()
            }
        }
    }

    fn gallery_loaded(
        &mut self,
        token: RequestToken,
        result: &Result<Vec<PokemonSummary>, StarryError>,
    ) -> Vec<Effect> {
        if self.latest_gallery != Some(token) {
            tracing::debug!(?token, "dropping stale gallery result");
            return Vec::new();
        }
        self.latest_gallery = None;

        if let Err(e) = result {
            tracing::error!(error = %e, offset = self.pagination.offset(), "gallery fetch failed");
        }
        self.screen.render_gallery(GalleryContent::from_result(result));
        self.screen.update_pagination_buttons(&self.pagination);

        match self.pager {
            PagerPhase::Refetching(action) => {
                self.enter(PagerPhase::AnimatingIn(action));
                vec![Effect::StartTransition(Transition::incoming(action))]
            }
            _ => Vec::new(),
        }
    }

    fn enter(&mut self, phase: PagerPhase) {
        self.pager = phase;
        self.screen.set_gallery_transition(phase.transition());
    }
}
