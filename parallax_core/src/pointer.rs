// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input as seen by the tilt container.
//!
//! Hosts translate their native touch or mouse callbacks into
//! [`PointerEvent`]s. Only a single point is tracked; when the host reports
//! several touches, [`PointerEvent::from_touches`] keeps the first.

use kurbo::Point;

/// Stage of a pointer interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Contact began.
    Down,
    /// Contact moved.
    Move,
    /// Contact ended normally.
    Up,
    /// The host aborted the interaction.
    Cancel,
}

/// A single pointer event in container-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Contact began at the given point.
    Down(Point),
    /// Contact moved to the given point.
    Move(Point),
    /// Contact ended.
    Up,
    /// The interaction was cancelled.
    Cancel,
}

impl PointerEvent {
    /// Builds an event from a phase and the touches the host reported.
    ///
    /// Down and move events use the first touch and return `None` when the
    /// slice is empty. Up and cancel ignore the touches.
    #[must_use]
    pub fn from_touches(phase: PointerPhase, touches: &[Point]) -> Option<Self> {
        match phase {
            PointerPhase::Down => touches.first().copied().map(Self::Down),
            PointerPhase::Move => touches.first().copied().map(Self::Move),
            PointerPhase::Up => Some(Self::Up),
            PointerPhase::Cancel => Some(Self::Cancel),
        }
    }

    /// Returns the phase of this event.
    #[must_use]
    pub const fn phase(&self) -> PointerPhase {
        match self {
            Self::Down(_) => PointerPhase::Down,
            Self::Move(_) => PointerPhase::Move,
            Self::Up => PointerPhase::Up,
            Self::Cancel => PointerPhase::Cancel,
        }
    }

    /// Returns the contact point, if this event carries one.
    #[must_use]
    pub const fn point(&self) -> Option<Point> {
        match self {
            Self::Down(p) | Self::Move(p) => Some(*p),
            Self::Up | Self::Cancel => None,
        }
    }
}
