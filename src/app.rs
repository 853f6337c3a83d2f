// SPDX-License-Identifier: GPL-3.0-only

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use cosmic::app::{Core, context_drawer};
use cosmic::iced::alignment::Horizontal;
use cosmic::iced::widget::scrollable::{self, AbsoluteOffset};
use cosmic::iced::{Alignment, Length, Padding};
use cosmic::widget::{self, about::About, image, menu};
use cosmic::{Application, ApplicationExt, Apply, Element, Task, theme};
use starryview::{
    StarryConfig, StarryError,
    core::{
        FileStore, KeyValueStore, MemoryStore, PaginationAction, PreferenceStore, StarryApi,
        Transition, fetch_detail, fetch_gallery,
    },
    entities::ThemePreference,
    view::{DetailRegion, DetailView, GalleryCard, GalleryContent, ImageSource},
    viewer::{self, Effect, Viewer},
};

use crate::app::{app_menu::MenuAction, context_page::ContextPage};
use crate::flags::Flags;
use crate::{fl, image_cache};

mod app_menu;
mod context_page;

const REPOSITORY: &str = "https://github.com/mariinkys/starryview";
const POKEAPI: &str = "https://pokeapi.co";

type Preferences = PreferenceStore<Box<dyn KeyValueStore + Send + Sync>>;

/// This is the struct that represents your application.
/// It is used to define the data that will be used by your application.
pub struct StarryView {
    /// Application state which is managed by the COSMIC runtime.
    core: Core,
    /// Display a context drawer with the designated page if defined.
    context_page: ContextPage,
    /// The about page for this app.
    about: About,
    /// Key bindings for the application's menu bar.
    key_binds: HashMap<menu::KeyBind, MenuAction>,
    /// Configuration loaded on startup
    config: StarryConfig,
    /// `None` when the HTTP client could not be built
    api: Option<StarryApi>,
    preferences: Preferences,
    /// Display regions and pager state
    viewer: Viewer,
    /// Holds the search input value
    search: String,
    /// Sprites of the Pokémon currently on screen, keyed by URL
    sprites: HashMap<String, Sprite>,
    scroll_id: widget::Id,
}

enum Sprite {
    Pending,
    Ready(image::Handle),
    Missing,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    LaunchUrl(String),
    ToggleContextPage(ContextPage),
    MenuAction(MenuAction),
    SearchInput(String),
    SearchSubmitted,
    Viewer(viewer::Message),
    SpriteLoaded(String, Result<Vec<u8>, StarryError>),
}

impl Application for StarryView {
    type Executor = cosmic::executor::Default;

    type Flags = Flags;

    type Message = Message;

    const APP_ID: &'static str = "dev.mariinkys.StarryView";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<cosmic::Action<Self::Message>>) {
        let about = About::default()
            .name(fl!("app-title"))
            .icon(widget::icon::Named::new(Self::APP_ID))
            .version(env!("CARGO_PKG_VERSION"))
            .license(env!("CARGO_PKG_LICENSE"))
            .links([
                (fl!("repository"), REPOSITORY),
                (fl!("pokeapi-text"), POKEAPI),
            ]);

        let store: Box<dyn KeyValueStore + Send + Sync> = match FileStore::default_location() {
            Ok(store) => Box::new(store),
            Err(e) => {
                tracing::warn!(error = %e, "theme preference will not be persisted");
                Box::new(MemoryStore::default())
            }
        };
        let preferences = PreferenceStore::new(store);
        let theme = preferences.get_preference();

        let api = StarryApi::new(&flags.config)
            .inspect_err(|e| tracing::error!(error = %e, "could not build the HTTP client"))
            .ok();

        let mut app = StarryView {
            core,
            context_page: ContextPage::default(),
            about,
            key_binds: HashMap::new(),
            viewer: Viewer::new(&flags.config, theme),
            config: flags.config,
            api,
            preferences,
            search: String::new(),
            sprites: HashMap::new(),
            scroll_id: widget::Id::unique(),
        };

        let effects = app.viewer.update(viewer::Message::Init);
        let tasks = vec![
            app.update_title(),
            cosmic::command::set_theme(cosmic_theme(theme)),
            app.perform(effects),
        ];

        (app, Task::batch(tasks))
    }

    /// Elements to pack at the start of the header bar.
    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        let theme_label = self.theme_label();

        let menu_bar = menu::bar(vec![menu::Tree::with_children(
            menu::root(fl!("view")).apply(Element::from),
            menu::items(
                &self.key_binds,
                vec![
                    menu::Item::Button(fl!("about"), None, MenuAction::About),
                    menu::Item::Button(theme_label, None, MenuAction::ToggleTheme),
                ],
            ),
        )]);

        vec![menu_bar.into()]
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        self.context_page.display(self)
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let spacing = theme::active().cosmic().spacing;

        let search_row = widget::row()
            .push(
                widget::search_input(fl!("search"), &self.search)
                    .on_input(Message::SearchInput)
                    .on_submit(|_| Message::SearchSubmitted)
                    .width(Length::Fill),
            )
            .push(widget::button::suggested(fl!("search-button")).on_press(Message::SearchSubmitted))
            .push(
                widget::button::standard(self.theme_label())
                    .on_press(Message::Viewer(viewer::Message::ToggleTheme)),
            )
            .spacing(spacing.space_xs)
            .align_y(Alignment::Center);

        let content = widget::column()
            .push(search_row)
            .push(self.detail_panel())
            .push(widget::text::title3(fl!("gallery")))
            .push(self.gallery_grid())
            .push(self.pagination_row())
            .push(widget::text::caption(fl!("nintendo-text")))
            .spacing(spacing.space_m)
            .padding(spacing.space_s)
            .width(Length::Fill);

        widget::scrollable(content).id(self.scroll_id.clone()).into()
    }

    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        match message {
            Message::LaunchUrl(url) => {
                if let Err(e) = open::that_detached(&url) {
                    tracing::warn!(%url, error = %e, "could not open url");
                }
            }
            Message::ToggleContextPage(context_page) => {
                if self.context_page == context_page {
                    // Close the context drawer if the toggled context page is the same.
                    self.core.window.show_context = !self.core.window.show_context;
                } else {
                    // Open the context drawer to display the requested context page.
                    self.context_page = context_page;
                    self.core.window.show_context = true;
                }
            }
            Message::MenuAction(action) => match action {
                MenuAction::About => {
                    return self.update(Message::ToggleContextPage(ContextPage::About));
                }
                MenuAction::ToggleTheme => {
                    return self.update(Message::Viewer(viewer::Message::ToggleTheme));
                }
            },
            Message::SearchInput(value) => {
                self.search = value;
            }
            Message::SearchSubmitted => {
                let query = self.search.clone();
                return self.update(Message::Viewer(viewer::Message::Search(query)));
            }
            Message::Viewer(message) => {
                let effects = self.viewer.update(message);
                let effects_task = self.perform(effects);
                let sprites_task = self.sync_sprites();
                return Task::batch([effects_task, sprites_task]);
            }
            Message::SpriteLoaded(url, result) => {
                // sprites that left the screen meanwhile are gone from the map
                if let Some(sprite) = self.sprites.get_mut(&url) {
                    *sprite = match result {
                        Ok(bytes) => Sprite::Ready(image::Handle::from_bytes(bytes)),
                        Err(e) => {
                            tracing::debug!(%url, error = %e, "sprite unavailable");
                            Sprite::Missing
                        }
                    };
                }
            }
        }

        Task::none()
    }
}

impl StarryView {
    /// Updates the header and window titles.
    pub fn update_title(&mut self) -> Task<cosmic::Action<Message>> {
        let window_title = fl!("app-title");

        if let Some(id) = self.core.main_window_id() {
            self.set_window_title(window_title, id)
        } else {
            Task::none()
        }
    }

    /// Localized label of the theme toggle, offering the other mode
    fn theme_label(&self) -> String {
        if self.viewer.screen().theme().dark_mode {
            fl!("switch-to-light")
        } else {
            fl!("switch-to-dark")
        }
    }

    /// Runs the viewer's effects as COSMIC tasks
    fn perform(&mut self, effects: Vec<Effect>) -> Task<cosmic::Action<Message>> {
        let tasks: Vec<_> = effects
            .into_iter()
            .map(|effect| self.perform_effect(effect))
            .collect();

        Task::batch(tasks)
    }

    fn perform_effect(&mut self, effect: Effect) -> Task<cosmic::Action<Message>> {
        match effect {
            Effect::FetchDetail { token, query } => {
                let api = self.api.clone();
                let language = self.config.flavor_language.clone();

                Task::perform(
                    async move {
                        let result = match api {
                            Some(api) => fetch_detail(&api, &query, &language).await,
                            None => Err(client_unavailable()),
                        };
                        Message::Viewer(viewer::Message::DetailLoaded(token, result))
                    },
                    cosmic::Action::App,
                )
            }
            Effect::FetchGallery { token, pagination } => {
                let api = self.api.clone();

                Task::perform(
                    async move {
                        let result = match api {
                            Some(api) => fetch_gallery(&api, &pagination).await,
                            None => Err(client_unavailable()),
                        };
                        Message::Viewer(viewer::Message::GalleryLoaded(token, result))
                    },
                    cosmic::Action::App,
                )
            }
            Effect::StartTransition(transition) => {
                tracing::trace!(class = transition.class_name(), "transition started");
                let duration = Duration::from_millis(self.config.transition_millis);

                Task::perform(
                    async move {
                        tokio::time::sleep(duration).await;
                        Message::Viewer(viewer::Message::TransitionEnded)
                    },
                    cosmic::Action::App,
                )
            }
            Effect::ScrollToTop => {
                scrollable::scroll_to(self.scroll_id.clone(), AbsoluteOffset { x: 0.0, y: 0.0 })
            }
            Effect::PersistTheme(theme) => {
                if let Err(e) = self.preferences.set_preference(theme) {
                    tracing::error!(error = %e, "could not persist theme preference");
                }
                cosmic::command::set_theme(cosmic_theme(theme))
            }
        }
    }

    /// Starts downloads for sprites newly on screen and forgets the ones that left
    fn sync_sprites(&mut self) -> Task<cosmic::Action<Message>> {
        let screen = self.viewer.screen();
        let detail_image = match screen.detail() {
            DetailRegion::Loaded(view) => Some(&view.image),
            _ => None,
        };
        let wanted: HashSet<String> = detail_image
            .into_iter()
            .chain(screen.gallery().content.cards().iter().map(|card| &card.image))
            .filter_map(|image| match image {
                ImageSource::Remote(url) => Some(url.clone()),
                ImageSource::Placeholder => None,
            })
            .collect();

        self.sprites.retain(|url, _| wanted.contains(url));

        let Some(api) = self.api.clone() else {
            return Task::none();
        };

        let missing: Vec<String> = wanted
            .into_iter()
            .filter(|url| !self.sprites.contains_key(url))
            .collect();

        let tasks: Vec<_> = missing
            .into_iter()
            .map(|url| {
                self.sprites.insert(url.clone(), Sprite::Pending);
                let api = api.clone();

                Task::perform(
                    async move {
                        let result = api.get_bytes(&url).await;
                        Message::SpriteLoaded(url, result)
                    },
                    cosmic::Action::App,
                )
            })
            .collect();

        Task::batch(tasks)
    }

    fn detail_panel(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        let content: Element<'_, Message> = match self.viewer.screen().detail() {
            DetailRegion::Loaded(view) => self.detail_view(view),
            region => widget::text::title3(region.message().unwrap_or_default().to_string()).into(),
        };

        widget::container(content)
            .class(theme::Container::Card)
            .padding(spacing.space_s)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .into()
    }

    fn detail_view<'a>(&'a self, view: &'a DetailView) -> Element<'a, Message> {
        let spacing = theme::active().cosmic().spacing;

        let stats = widget::row()
            .push(stat(fl!("type"), &view.types))
            .push(stat(fl!("height"), &view.height))
            .push(stat(fl!("weight"), &view.weight))
            .spacing(spacing.space_s);

        widget::column()
            .push(self.sprite(&view.image, 160.0))
            .push(widget::text::title2(view.title.as_str()))
            .push(stats)
            .push(widget::text::heading(fl!("fun-fact")))
            .push(widget::text::body(format!("\"{}\"", view.fact)))
            .align_x(Alignment::Center)
            .spacing(spacing.space_xs)
            .width(Length::Fill)
            .into()
    }

    fn gallery_grid(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;
        let gallery = self.viewer.screen().gallery();

        let content: Element<'_, Message> = match &gallery.content {
            GalleryContent::Cards(cards) => widget::flex_row(
                cards.iter().map(|card| self.gallery_card(card)).collect(),
            )
            .row_spacing(spacing.space_s)
            .column_spacing(spacing.space_s)
            .into(),
            GalleryContent::Error(message) => widget::text::title4(message.as_str()).into(),
            GalleryContent::Empty => widget::column().into(),
        };

        // slides are played as a horizontal shift of the grid
        let shift = 48.0;
        let padding = match gallery.transition {
            Some(Transition::SlideOutLeft | Transition::SlideInLeft) => Padding {
                right: shift,
                ..Padding::ZERO
            },
            Some(Transition::SlideOutRight | Transition::SlideInRight) => Padding {
                left: shift,
                ..Padding::ZERO
            },
            None => Padding::ZERO,
        };

        widget::container(content)
            .padding(padding)
            .width(Length::Fill)
            .into()
    }

    fn gallery_card<'a>(&'a self, card: &'a GalleryCard) -> Element<'a, Message> {
        let content = widget::column()
            .push(self.sprite(&card.image, 96.0))
            .push(widget::text::caption(card.label.as_str()))
            .push(widget::text::body(card.name.as_str()))
            .align_x(Alignment::Center)
            .width(Length::Fixed(140.0));

        widget::button::custom(content)
            .on_press(Message::Viewer(viewer::Message::CardSelected(
                card.click_query().to_string(),
            )))
            .class(theme::Button::Image)
            .into()
    }

    fn pagination_row(&self) -> Element<'_, Message> {
        let controls = self.viewer.screen().pagination();

        let previous = widget::button::standard(fl!("previous")).on_press_maybe(
            (!controls.previous.disabled).then_some(Message::Viewer(viewer::Message::ChangePage(
                PaginationAction::Back,
            ))),
        );
        let next = widget::button::standard(fl!("next")).on_press_maybe(
            (!controls.next.disabled).then_some(Message::Viewer(viewer::Message::ChangePage(
                PaginationAction::Next,
            ))),
        );

        widget::row()
            .push(previous)
            .push(widget::horizontal_space())
            .push(next)
            .width(Length::Fill)
            .into()
    }

    fn sprite(&self, source: &ImageSource, size: f32) -> Element<'_, Message> {
        let handle = match source {
            ImageSource::Remote(url) => match self.sprites.get(url) {
                Some(Sprite::Ready(handle)) => handle.clone(),
                Some(Sprite::Pending | Sprite::Missing) | None => image_cache::fallback(),
            },
            ImageSource::Placeholder => image_cache::fallback(),
        };

        widget::Image::new(handle)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Label + value block of the detail panel
fn stat<'a>(label: String, value: &'a str) -> Element<'a, Message> {
    widget::column()
        .push(widget::text::heading(label))
        .push(widget::text::body(value))
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
}

fn cosmic_theme(theme: ThemePreference) -> theme::Theme {
    match theme {
        ThemePreference::Dark => theme::Theme::dark(),
        ThemePreference::Light => theme::Theme::light(),
    }
}

fn client_unavailable() -> StarryError {
    StarryError::Network(String::from("HTTP client unavailable"))
}
