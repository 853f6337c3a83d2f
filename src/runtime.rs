// SPDX-License-Identifier: GPL-3.0-only

use std::collections::VecDeque;

use crate::{
    config::StarryConfig,
    core::{KeyValueStore, PreferenceStore, StarryApi, fetch_detail, fetch_gallery},
    utils::StarryError,
    view::Screen,
    viewer::{Effect, Message, Viewer},
};

/// How transitions are played without a window to animate
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum TransitionMode {
    /// Transitions end as soon as they start
    #[default]
    Instant,
    /// Transitions stay running until a [`Message::TransitionEnded`] is dispatched
    Manual,
}

/// Headless driver: performs the viewer's effects against PokéAPI and the
/// preference store and feeds the completions back until nothing is left
pub struct Runtime<S> {
    viewer: Viewer,
    api: StarryApi,
    preferences: PreferenceStore<S>,
    flavor_language: String,
    transitions: TransitionMode,
    queue: VecDeque<Message>,
}

impl<S: KeyValueStore> Runtime<S> {
    /// Builds the viewer with the stored theme already applied
    pub fn new(config: &StarryConfig, store: S) -> Result<Self, StarryError> {
        let preferences = PreferenceStore::new(store);
        let theme = preferences.get_preference();

        Ok(Self {
            viewer: Viewer::new(config, theme),
            api: StarryApi::new(config)?,
            preferences,
            flavor_language: config.flavor_language.clone(),
            transitions: TransitionMode::default(),
            queue: VecDeque::new(),
        })
    }

    pub fn with_transitions(mut self, mode: TransitionMode) -> Self {
        self.transitions = mode;
        self
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn screen(&self) -> &Screen {
        self.viewer.screen()
    }

    pub fn preferences(&self) -> &PreferenceStore<S> {
        &self.preferences
    }

    /// Applies a message and everything it triggers
    pub async fn dispatch(&mut self, message: Message) {
        self.queue.push_back(message);

        while let Some(message) = self.queue.pop_front() {
            let effects = self.viewer.update(message);
            let replies =
                futures::future::join_all(effects.into_iter().map(|effect| self.perform(effect)))
                    .await;
            self.queue.extend(replies.into_iter().flatten());
        }
    }

    async fn perform(&self, effect: Effect) -> Option<Message> {
        match effect {
            Effect::FetchDetail { token, query } => {
                let result = fetch_detail(&self.api, &query, &self.flavor_language).await;
                Some(Message::DetailLoaded(token, result))
            }
            Effect::FetchGallery { token, pagination } => {
                let result = fetch_gallery(&self.api, &pagination).await;
                Some(Message::GalleryLoaded(token, result))
            }
            Effect::StartTransition(transition) => {
                tracing::trace!(class = transition.class_name(), "transition started");
                match self.transitions {
                    TransitionMode::Instant => Some(Message::TransitionEnded),
                    TransitionMode::Manual => None,
                }
            }
            Effect::ScrollToTop => None,
            Effect::PersistTheme(theme) => {
                if let Err(e) = self.preferences.set_preference(theme) {
                    tracing::error!(error = %e, "could not persist theme preference");
                }
                None
            }
        }
    }
}
