// SPDX-License-Identifier: GPL-3.0-only

use image_cache::{IMAGE_CACHE, ImageCache};

mod app;
mod flags;
mod i18n;
mod image_cache;

fn main() -> cosmic::iced::Result {
    let flags = flags::flags();
    starryview::logging::init(flags.config.log_filter.as_deref());

    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    // Init the image cache
    IMAGE_CACHE.get_or_init(|| std::sync::Mutex::new(ImageCache::new()));

    // Settings for configuring the application window and iced runtime.
    let settings = cosmic::app::Settings::default().size(cosmic::iced::Size::new(1200.0, 800.0));

    // Starts the application's event loop with the loaded config as the application's flags.
    cosmic::app::run::<app::StarryView>(settings, flags)
}
