// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the tilt container.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! container calls as it registers views, applies tilts, and resets. All
//! method bodies default to no-ops, so implementing only the events you care
//! about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use kurbo::{Point, Size};

use crate::tilt::TiltSample;
use crate::time::HostTime;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Why the container returned to rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResetReason {
    /// The pointer lifted.
    PointerUp,
    /// The host cancelled the interaction.
    PointerCancel,
    /// The host called `reset` directly.
    Explicit,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after a view is registered at a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelAddedEvent {
    /// The level the view was added to.
    pub level: u32,
    /// Number of views at that level afterwards.
    pub views_at_level: usize,
}

/// Emitted after a tilt has been applied for a touch point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltAppliedEvent {
    /// Touch point in container coordinates.
    pub point: Point,
    /// Sample derived from the point.
    pub sample: TiltSample,
    /// Number of populated levels that received offsets.
    pub levels: usize,
}

/// Emitted when a reset is requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetEvent {
    /// What triggered the reset.
    pub reason: ResetReason,
    /// Whether an eased settle was started instead of snapping to rest.
    pub animated: bool,
}

/// Emitted for every frame of an eased settle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettleFrameEvent {
    /// Host time of the frame.
    pub now: HostTime,
    /// Linear progress in `[0, 1]`.
    pub progress: f64,
    /// Whether this frame completed the settle.
    pub finished: bool,
}

/// Emitted when a pointer arrives while the container has no usable size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DegenerateSizeEvent {
    /// The size the presenter reported.
    pub size: Size,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the tilt container.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after a view is registered at a level.
    fn on_level_added(&mut self, e: &LevelAddedEvent) {
        _ = e;
    }

    /// Called after a tilt is applied.
    fn on_tilt_applied(&mut self, e: &TiltAppliedEvent) {
        _ = e;
    }

    /// Called when a reset is requested.
    fn on_reset(&mut self, e: &ResetEvent) {
        _ = e;
    }

    /// Called for each settle frame.
    fn on_settle_frame(&mut self, e: &SettleFrameEvent) {
        _ = e;
    }

    /// Called when a pointer arrives with an unusable container size.
    fn on_degenerate_size(&mut self, e: &DegenerateSizeEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`LevelAddedEvent`].
    #[inline]
    pub fn level_added(&mut self, e: &LevelAddedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_level_added(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TiltAppliedEvent`].
    #[inline]
    pub fn tilt_applied(&mut self, e: &TiltAppliedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_tilt_applied(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ResetEvent`].
    #[inline]
    pub fn reset(&mut self, e: &ResetEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_reset(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SettleFrameEvent`].
    #[inline]
    pub fn settle_frame(&mut self, e: &SettleFrameEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_settle_frame(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DegenerateSizeEvent`].
    #[inline]
    pub fn degenerate_size(&mut self, e: &DegenerateSizeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_degenerate_size(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tilt() -> TiltAppliedEvent {
        TiltAppliedEvent {
            point: Point::new(150.0, 50.0),
            sample: TiltSample {
                x_norm: 0.5,
                y_norm: 0.5,
                pressure: 2.12,
            },
            levels: 1,
        }
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_level_added(&LevelAddedEvent {
            level: 1,
            views_at_level: 1,
        });
        sink.on_tilt_applied(&sample_tilt());
        sink.on_reset(&ResetEvent {
            reason: ResetReason::Explicit,
            animated: false,
        });
        sink.on_settle_frame(&SettleFrameEvent {
            now: HostTime(0),
            progress: 0.0,
            finished: false,
        });
        sink.on_degenerate_size(&DegenerateSizeEvent { size: Size::ZERO });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.tilt_applied(&sample_tilt());
        tracer.reset(&ResetEvent {
            reason: ResetReason::PointerUp,
            animated: true,
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            resets: Vec<ResetReason>,
        }
        impl TraceSink for RecordingSink {
            fn on_reset(&mut self, e: &ResetEvent) {
                self.resets.push(e.reason);
            }
        }

        let mut sink = RecordingSink { resets: Vec::new() };
        let mut tracer = Tracer::new(&mut sink);
        tracer.reset(&ResetEvent {
            reason: ResetReason::PointerCancel,
            animated: false,
        });
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.resets, &[ResetReason::PointerCancel]);
    }
}
