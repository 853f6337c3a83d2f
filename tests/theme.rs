// SPDX-License-Identifier: GPL-3.0-only

use starryview::{
    Message, Runtime, StarryConfig,
    core::{FileStore, KeyValueStore, MemoryStore, preferences::THEME_KEY},
    entities::ThemePreference,
    view::{SWITCH_TO_DARK_LABEL, SWITCH_TO_LIGHT_LABEL},
};

#[tokio::test]
async fn stored_theme_is_applied_on_startup() {
    let store = MemoryStore::default();
    store.set(THEME_KEY, "dark").unwrap();

    let runtime = Runtime::new(&StarryConfig::default(), store).unwrap();

    assert_eq!(runtime.viewer().theme(), ThemePreference::Dark);
    assert!(runtime.screen().theme().dark_mode);
    assert_eq!(runtime.screen().theme().label, SWITCH_TO_LIGHT_LABEL);
}

#[tokio::test]
async fn toggling_twice_restores_everything() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.ron");
    let mut runtime = Runtime::new(&StarryConfig::default(), FileStore::new(&path)).unwrap();
    let before = runtime.screen().theme().clone();

    runtime.dispatch(Message::ToggleTheme).await;
    assert!(runtime.screen().theme().dark_mode);
    assert_eq!(
        runtime.preferences().get_preference(),
        ThemePreference::Dark
    );

    runtime.dispatch(Message::ToggleTheme).await;
    assert_eq!(runtime.screen().theme(), &before);
    assert_eq!(runtime.screen().theme().label, SWITCH_TO_DARK_LABEL);
    assert_eq!(
        FileStore::new(&path).get(THEME_KEY).unwrap().as_deref(),
        Some("light")
    );
}
