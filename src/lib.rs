// SPDX-License-Identifier: GPL-3.0-only

pub mod config;
pub mod core;
pub mod entities;
pub mod logging;
pub mod runtime;
pub mod utils;
pub mod view;
pub mod viewer;

pub use config::StarryConfig;
pub use runtime::{Runtime, TransitionMode};
pub use utils::StarryError;
pub use viewer::{Effect, Message, RequestToken, Viewer};
