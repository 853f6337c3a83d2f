// SPDX-License-Identifier: GPL-3.0-only

pub mod api;
pub mod detail;
pub mod gallery;
pub mod pagination;
pub mod preferences;

pub use api::StarryApi;
pub use detail::fetch_detail;
pub use gallery::fetch_gallery;
pub use pagination::{PagerPhase, PaginationAction, PaginationState, Transition};
pub use preferences::{FileStore, KeyValueStore, MemoryStore, PreferenceStore};
