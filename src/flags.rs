// SPDX-License-Identifier: GPL-3.0-only

use starryview::StarryConfig;

/// Flags given to our COSMIC application to use in it's "init" function.
#[derive(Clone, Debug)]
pub struct Flags {
    pub config: StarryConfig,
}

pub fn flags() -> Flags {
    Flags {
        config: StarryConfig::load(),
    }
}
