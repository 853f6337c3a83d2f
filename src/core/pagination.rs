// SPDX-License-Identifier: GPL-3.0-only

use std::ops::RangeInclusive;

/// Identifies an action related to Pagination
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PaginationAction {
    Next,
    Back,
}

/// Which page of the gallery is shown.
///
/// `offset` is always a multiple of `page_size` and stays below
/// `total_known`; the only way to move it is [`PaginationState::moved`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PaginationState {
    offset: u32,
    page_size: u32,
    total_known: u32,
}

impl PaginationState {
    /// First page. A zero page size or total is bumped to one so the
    /// invariants always hold.
    pub fn new(page_size: u32, total_known: u32) -> Self {
        Self {
            offset: 0,
            page_size: page_size.max(1),
            total_known: total_known.max(1),
        }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_known(&self) -> u32 {
        self.total_known
    }

    /// "Previous" is only disabled on the first page
    pub fn can_go_back(&self) -> bool {
        self.offset > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.offset.saturating_add(self.page_size) < self.total_known
    }

    pub fn can_move(&self, action: PaginationAction) -> bool {
        match action {
            PaginationAction::Next => self.can_go_forward(),
            PaginationAction::Back => self.can_go_back(),
        }
    }

    /// The state one page over, `None` when that page doesn't exist
    pub fn moved(&self, action: PaginationAction) -> Option<Self> {
        if !self.can_move(action) {
            return None;
        }

        let offset = match action {
            PaginationAction::Next => self.offset + self.page_size,
            PaginationAction::Back => self.offset - self.page_size,
        };

        Some(Self { offset, ..*self })
    }

    /// Pokédex numbers shown on this page, never past `total_known`
    pub fn ids(&self) -> RangeInclusive<u32> {
        let first = self.offset + 1;
        let last = self
            .offset
            .saturating_add(self.page_size)
            .min(self.total_known);
        first..=last
    }
}

/// Visual transition applied to the gallery while the page changes
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Transition {
    SlideOutLeft,
    SlideOutRight,
    SlideInLeft,
    SlideInRight,
}

impl Transition {
    /// Leaving page: content moves the way the user is reading
    pub fn outgoing(action: PaginationAction) -> Self {
        match action {
            PaginationAction::Next => Self::SlideOutLeft,
            PaginationAction::Back => Self::SlideOutRight,
        }
    }

    pub fn incoming(action: PaginationAction) -> Self {
        match action {
            PaginationAction::Next => Self::SlideInRight,
            PaginationAction::Back => Self::SlideInLeft,
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Self::SlideOutLeft => "slide-out-left",
            Self::SlideOutRight => "slide-out-right",
            Self::SlideInLeft => "slide-in-left",
            Self::SlideInRight => "slide-in-right",
        }
    }
}

/// Where the pager is within a page change
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum PagerPhase {
    #[default]
    Idle,
    AnimatingOut(PaginationAction),
    Refetching(PaginationAction),
    AnimatingIn(PaginationAction),
}

impl PagerPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Transition the gallery wears in this phase
    pub fn transition(&self) -> Option<Transition> {
        match self {
            Self::Idle => None,
            Self::AnimatingOut(action) | Self::Refetching(action) => {
                Some(Transition::outgoing(*action))
            }
            Self::AnimatingIn(action) => Some(Transition::incoming(*action)),
        }
    }
}
