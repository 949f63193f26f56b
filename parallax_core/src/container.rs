// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tilt container: level bookkeeping plus pointer handling.
//!
//! [`TiltContainer`] owns a [`Presenter`], a [`TiltConfig`], and a
//! [`LevelRegistry`] of the presenter's view handles. Each pointer sample is
//! turned into a [`TiltSample`], and the resulting transforms replace (never
//! accumulate onto) whatever the presenter currently shows.
//!
//! Every mutating method has a `*_traced` variant taking a [`Tracer`]; the
//! plain variant passes [`Tracer::none`].

use core::fmt;

use kurbo::{Affine, Point};

use crate::backend::Presenter;
use crate::config::{ConfigError, TiltConfig};
use crate::level::LevelRegistry;
use crate::pointer::PointerEvent;
use crate::settle::SettleTransition;
use crate::tilt::{self, TiltSample};
use crate::time::HostTime;
use crate::trace::{
    DegenerateSizeEvent, LevelAddedEvent, ResetEvent, ResetReason, SettleFrameEvent,
    TiltAppliedEvent, Tracer,
};
use crate::transform::Transform3d;

/// A view stack that tilts toward the pointer.
pub struct TiltContainer<P: Presenter> {
    presenter: P,
    config: TiltConfig,
    levels: LevelRegistry<P::View>,
    current: TiltSample,
    settle: Option<SettleTransition>,
}

impl<P: Presenter> fmt::Debug for TiltContainer<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TiltContainer")
            .field("config", &self.config)
            .field("levels", &self.levels.len())
            .field("current", &self.current)
            .field("settle", &self.settle)
            .finish_non_exhaustive()
    }
}

impl<P: Presenter> TiltContainer<P> {
    /// Creates a container at rest.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`TiltConfig::validate`].
    #[must_use]
    pub fn new(presenter: P, config: TiltConfig) -> Self {
        match Self::try_new(presenter, config) {
            Ok(container) => container,
            Err(e) => panic!("invalid tilt config: {e}"),
        }
    }

    /// Creates a container at rest, rejecting an invalid `config`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`TiltConfig::validate`].
    pub fn try_new(presenter: P, config: TiltConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            presenter,
            config,
            levels: LevelRegistry::new(),
            current: TiltSample::REST,
            settle: None,
        })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &TiltConfig {
        &self.config
    }

    /// Replaces the configuration. Takes effect on the next pointer sample.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`TiltConfig::validate`] and
    /// keeps the previous configuration.
    pub fn set_config(&mut self, config: TiltConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Returns the presenter.
    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Returns the presenter mutably.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Consumes the container and returns the presenter.
    #[must_use]
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Returns the level registry.
    #[must_use]
    pub const fn levels(&self) -> &LevelRegistry<P::View> {
        &self.levels
    }

    /// Returns the sample most recently applied at full strength, or
    /// [`TiltSample::REST`] after a reset.
    #[must_use]
    pub const fn current_sample(&self) -> TiltSample {
        self.current
    }

    /// Returns `true` while an eased return to rest is in flight.
    #[must_use]
    pub const fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    // -- Level registration --

    /// Attaches `view` to the presenter and registers it at `level`.
    ///
    /// Higher levels shift further while tilted; level 0 stays put.
    ///
    /// # Panics
    ///
    /// Panics if `level` is negative.
    pub fn add_child_at_level(&mut self, view: P::View, level: i32) {
        self.add_child_at_level_traced(view, level, &mut Tracer::none());
    }

    /// Traced form of [`add_child_at_level`](Self::add_child_at_level).
    ///
    /// # Panics
    ///
    /// Panics if `level` is negative.
    pub fn add_child_at_level_traced(
        &mut self,
        view: P::View,
        level: i32,
        tracer: &mut Tracer<'_>,
    ) {
        assert!(level >= 0, "level must be non-negative, got {level}");
        self.presenter.attach_child(&view);
        let views_at_level = self.levels.add_at(level, view);
        tracer.level_added(&LevelAddedEvent {
            level: level.unsigned_abs(),
            views_at_level,
        });
    }

    // -- Pointer input --

    /// Routes a pointer event. Down and move tilt toward the point; up and
    /// cancel snap back to rest.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        self.handle_pointer_traced(event, &mut Tracer::none());
    }

    /// Traced form of [`handle_pointer`](Self::handle_pointer).
    pub fn handle_pointer_traced(&mut self, event: PointerEvent, tracer: &mut Tracer<'_>) {
        match event {
            PointerEvent::Down(point) | PointerEvent::Move(point) => {
                self.press_traced(point, tracer);
            }
            PointerEvent::Up => self.reset_for(ResetReason::PointerUp, tracer),
            PointerEvent::Cancel => self.reset_for(ResetReason::PointerCancel, tracer),
        }
    }

    /// Routes a timestamped pointer event. Like
    /// [`handle_pointer`](Self::handle_pointer), except up and cancel start an
    /// eased settle at `now`; drive it with [`advance`](Self::advance).
    pub fn handle_pointer_at(&mut self, event: PointerEvent, now: HostTime) {
        self.handle_pointer_at_traced(event, now, &mut Tracer::none());
    }

    /// Traced form of [`handle_pointer_at`](Self::handle_pointer_at).
    pub fn handle_pointer_at_traced(
        &mut self,
        event: PointerEvent,
        now: HostTime,
        tracer: &mut Tracer<'_>,
    ) {
        match event {
            PointerEvent::Down(point) | PointerEvent::Move(point) => {
                self.press_traced(point, tracer);
            }
            PointerEvent::Up => self.release_traced(now, ResetReason::PointerUp, tracer),
            PointerEvent::Cancel => self.release_traced(now, ResetReason::PointerCancel, tracer),
        }
    }

    /// Tilts toward `point`, given in container coordinates.
    ///
    /// Interrupts any settle in progress. Returns the applied sample.
    pub fn press(&mut self, point: Point) -> TiltSample {
        self.press_traced(point, &mut Tracer::none())
    }

    /// Traced form of [`press`](Self::press).
    pub fn press_traced(&mut self, point: Point, tracer: &mut Tracer<'_>) -> TiltSample {
        self.settle = None;
        let size = self.presenter.size();
        if !tilt::is_usable_size(size) {
            tracer.degenerate_size(&DegenerateSizeEvent { size });
            self.apply_rest();
            return TiltSample::REST;
        }

        let sample = tilt::pressure(point, size, &self.config);
        self.apply(&sample, 1.0);
        self.current = sample;
        tracer.tilt_applied(&TiltAppliedEvent {
            point,
            sample,
            levels: self.levels.len(),
        });
        sample
    }

    // -- Reset --

    /// Returns the container and every registered view to identity at once.
    ///
    /// Idempotent. Cancels any settle in progress. Hosts that animate with
    /// their own toolkit can call this inside a native transition.
    pub fn reset(&mut self) {
        self.reset_traced(&mut Tracer::none());
    }

    /// Traced form of [`reset`](Self::reset).
    pub fn reset_traced(&mut self, tracer: &mut Tracer<'_>) {
        self.reset_for(ResetReason::Explicit, tracer);
    }

    /// Starts an eased return to rest at `now`.
    ///
    /// Falls back to an immediate [`reset`](Self::reset) when there is
    /// nothing to animate or the configured duration is zero. A settle
    /// already in flight keeps running from where it is.
    pub fn release(&mut self, now: HostTime, reason: ResetReason) {
        self.release_traced(now, reason, &mut Tracer::none());
    }

    /// Traced form of [`release`](Self::release).
    pub fn release_traced(&mut self, now: HostTime, reason: ResetReason, tracer: &mut Tracer<'_>) {
        if self.settle.is_some() {
            tracer.reset(&ResetEvent {
                reason,
                animated: true,
            });
            return;
        }
        if self.current.is_rest() || self.config.reset_duration.is_zero() {
            self.reset_for(reason, tracer);
            return;
        }
        self.settle = Some(SettleTransition::new(
            self.current,
            now,
            self.config.reset_duration,
            self.config.reset_easing,
        ));
        tracer.reset(&ResetEvent {
            reason,
            animated: true,
        });
    }

    /// Applies the settle state for `now`.
    ///
    /// Returns `true` while more frames are needed. The final frame leaves
    /// the container exactly at rest.
    pub fn advance(&mut self, now: HostTime) -> bool {
        self.advance_traced(now, &mut Tracer::none())
    }

    /// Traced form of [`advance`](Self::advance).
    pub fn advance_traced(&mut self, now: HostTime, tracer: &mut Tracer<'_>) -> bool {
        let Some(settle) = self.settle else {
            return false;
        };
        let progress = settle.progress(now);
        let finished = settle.is_finished(now);
        if finished {
            self.settle = None;
            self.apply_rest();
        } else {
            self.apply(&settle.origin(), settle.strength(now));
        }
        tracer.settle_frame(&SettleFrameEvent {
            now,
            progress,
            finished,
        });
        !finished
    }

    // -- Internals --

    fn reset_for(&mut self, reason: ResetReason, tracer: &mut Tracer<'_>) {
        self.settle = None;
        self.apply_rest();
        tracer.reset(&ResetEvent {
            reason,
            animated: false,
        });
    }

    fn apply_rest(&mut self) {
        self.presenter
            .set_container_transform(Transform3d::IDENTITY);
        for (_, views) in &self.levels {
            for view in views {
                self.presenter.set_child_transform(view, Affine::IDENTITY);
            }
        }
        self.current = TiltSample::REST;
    }

    fn apply(&mut self, sample: &TiltSample, strength: f64) {
        let size = self.presenter.size();
        self.presenter
            .set_container_transform(tilt::tilt_transform(sample, &self.config, strength));
        for (level, views) in &self.levels {
            let offset = tilt::level_offset(level, sample, size, &self.config) * strength;
            let translate = Affine::translate(offset);
            for view in views {
                self.presenter.set_child_transform(view, translate);
            }
        }
    }
}
