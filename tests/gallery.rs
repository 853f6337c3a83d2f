// SPDX-License-Identifier: GPL-3.0-only

mod common;

use std::sync::{Arc, atomic::Ordering};

use common::{FakeDex, card_ids};
use starryview::{
    Message,
    core::{PaginationAction, PaginationState, StarryApi, fetch_gallery},
    view::{GALLERY_ERROR_TEXT, GalleryContent, ImageSource, PLACEHOLDER_IMAGE},
};

#[tokio::test]
async fn first_page_shows_ids_in_order() {
    let (mut runtime, _dex) = common::runtime(FakeDex::new(60), 24).await;

    runtime.dispatch(Message::Init).await;

    assert_eq!(card_ids(&runtime), (1..=24).collect::<Vec<_>>());
    let first = &runtime.screen().gallery().content.cards()[0];
    assert_eq!(first.label, "#001");
    assert_eq!(first.name, "bulbasaur");
}

#[tokio::test]
async fn order_survives_reversed_completion() {
    let dex = Arc::new(FakeDex {
        reverse_latency: true,
        ..FakeDex::new(40)
    });
    let addr = common::serve(Arc::clone(&dex)).await;
    let api = StarryApi::new(&common::config_for(addr, 12, 40)).unwrap();

    let page = PaginationState::new(12, 40)
        .moved(PaginationAction::Next)
        .unwrap();
    let pokemon = fetch_gallery(&api, &page).await.unwrap();

    let ids: Vec<u32> = pokemon.iter().map(|p| p.id).collect();
    assert_eq!(ids, (13..=24).collect::<Vec<_>>());
}

#[tokio::test]
async fn every_page_covers_its_range() {
    let dex = Arc::new(FakeDex::new(50));
    let addr = common::serve(Arc::clone(&dex)).await;
    let api = StarryApi::new(&common::config_for(addr, 12, 50)).unwrap();

    let mut page = PaginationState::new(12, 50);
    loop {
        let pokemon = fetch_gallery(&api, &page).await.unwrap();
        let ids: Vec<u32> = pokemon.iter().map(|p| p.id).collect();
        let last = (page.offset() + 12).min(50);
        assert_eq!(ids, (page.offset() + 1..=last).collect::<Vec<_>>());

        match page.moved(PaginationAction::Next) {
            Some(next) => page = next,
            None => break,
        }
    }

    assert_eq!(page.offset(), 48);
}

#[tokio::test]
async fn last_page_stops_at_total_known() {
    let dex = Arc::new(FakeDex::new(30));
    let addr = common::serve(Arc::clone(&dex)).await;
    let api = StarryApi::new(&common::config_for(addr, 24, 30)).unwrap();

    let page = PaginationState::new(24, 30)
        .moved(PaginationAction::Next)
        .unwrap();
    let pokemon = fetch_gallery(&api, &page).await.unwrap();

    assert_eq!(pokemon.len(), 6);
    assert_eq!(dex.pokemon_requests.load(Ordering::SeqCst), 6);
}

#[tokio::test]
async fn one_failure_fails_the_whole_page() {
    let dex = FakeDex {
        failing: [5].into_iter().collect(),
        ..FakeDex::new(30)
    };
    let (mut runtime, _dex) = common::runtime(dex, 10).await;

    runtime.dispatch(Message::Init).await;

    assert_eq!(
        runtime.screen().gallery().content,
        GalleryContent::Error(String::from(GALLERY_ERROR_TEXT))
    );
    assert!(card_ids(&runtime).is_empty());
}

#[tokio::test]
async fn missing_sprites_use_placeholder() {
    let (mut runtime, _dex) = common::runtime(FakeDex::new(30), 10).await;

    runtime.dispatch(Message::Init).await;

    let cards = runtime.screen().gallery().content.cards();
    assert_eq!(cards[9].id, 10);
    assert_eq!(cards[9].image.location(), PLACEHOLDER_IMAGE);
    assert_eq!(
        cards[0].image,
        ImageSource::Remote(String::from("https://sprites.test/1.png"))
    );
}
