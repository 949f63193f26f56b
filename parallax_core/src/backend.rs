// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for UI toolkit integrations.
//!
//! `parallax_core` never talks to a toolkit directly. A host provides:
//!
//! - **Event wiring**: translates native touch/mouse callbacks into
//!   [`PointerEvent`](crate::pointer::PointerEvent)s and passes them to
//!   [`TiltContainer::handle_pointer`](crate::container::TiltContainer::handle_pointer).
//!   This differs too much between toolkits to be a trait.
//!
//! - **Animation ticks**: when it wants an eased return to rest, calls
//!   [`TiltContainer::release`](crate::container::TiltContainer::release)
//!   and then [`advance`](crate::container::TiltContainer::advance) once per
//!   frame until it returns `false`. A host with its own animation system
//!   can instead wrap [`reset`](crate::container::TiltContainer::reset) in a
//!   native transition.
//!
//! - **Presenter**: implements the [`Presenter`] trait to report the
//!   container size and apply the computed transforms to native views.

use kurbo::{Affine, Size};

use crate::transform::Transform3d;

/// Applies tilt transforms to a platform-native view hierarchy.
///
/// `View` is the host's handle to a child view (an index, an `Rc`, or a
/// retained object pointer). The container takes ownership of each handle in
/// its level registry and passes it back by reference.
///
/// # Frame pseudocode
///
/// ```rust,ignore
/// fn on_touch(phase: PointerPhase, touches: &[Point]) {
///     if let Some(event) = PointerEvent::from_touches(phase, touches) {
///         container.handle_pointer(event);
///     }
/// }
/// ```
pub trait Presenter {
    /// Host handle for a child view.
    type View;

    /// Returns the container's current laid-out size.
    fn size(&self) -> Size;

    /// Adds `view` to the container's rendering hierarchy.
    fn attach_child(&mut self, view: &Self::View);

    /// Replaces the container's 3D transform.
    fn set_container_transform(&mut self, transform: Transform3d);

    /// Replaces the 2D transform of a child view.
    fn set_child_transform(&mut self, view: &Self::View, transform: Affine);
}
