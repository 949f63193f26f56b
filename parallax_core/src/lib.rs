// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch-driven parallax tilt for layered views.
//!
//! `parallax_core` maps a pointer position inside a container to a 3D
//! rotation of the container and 2D offsets for child views registered at
//! depth *levels*, so that nested layers shift at different rates. It is
//! `no_std` compatible (with `alloc`) and knows nothing about any particular
//! UI toolkit.
//!
//! # Architecture
//!
//! ```text
//!   Host touch callback
//!       │
//!       ▼
//!   PointerEvent ──► TiltContainer::handle_pointer()
//!                          │
//!            ┌─────────────┴──────────────┐
//!            ▼                            ▼
//!   tilt::pressure() ──► TiltSample    reset() / release() + advance()
//!            │                            │
//!            ├──► rotation_transform()    │
//!            └──► level_offset(level) ◄── LevelRegistry
//!                          │
//!                          ▼
//!             Presenter::set_*_transform()
//! ```
//!
//! **[`tilt`]**: Pure functions: touch point → [`TiltSample`](tilt::TiltSample)
//! → container [`Transform3d`](transform::Transform3d) and per-level offsets.
//!
//! **[`level`]**: [`LevelRegistry`](level::LevelRegistry), a non-owning index
//! from depth level to view handles.
//!
//! **[`container`]**: [`TiltContainer`](container::TiltContainer), which
//! wires pointer events, the registry, and a presenter together.
//!
//! **[`backend`]**: The [`Presenter`](backend::Presenter) trait hosts
//! implement.
//!
//! **[`settle`]**: Eased, interruptible return to rest.
//!
//! **[`config`]**: [`TiltConfig`](config::TiltConfig) and validation.
//!
//! **[`transform`]**: Column-major 4×4 transform.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types,
//! with a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub use kurbo;

pub mod backend;
pub mod config;
pub mod container;
pub mod level;
pub mod pointer;
pub mod settle;
pub mod tilt;
pub mod time;
pub mod trace;
pub mod transform;
