// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth-level bookkeeping for child views.
//!
//! A [`LevelRegistry`] records which views sit at which depth level. It is a
//! non-owning index: `V` is whatever cheap handle the host uses to refer to a
//! view, and the host's own hierarchy keeps the view alive.
//!
//! Levels with no views are absent from the map, so every present level has
//! at least one view. Views within a level keep their insertion order and may
//! repeat. There is no removal.

use alloc::collections::BTreeMap;
use alloc::collections::btree_map;
use alloc::vec::Vec;

/// Maps a depth level to the views registered at it.
#[derive(Clone, Debug)]
pub struct LevelRegistry<V> {
    levels: BTreeMap<u32, Vec<V>>,
}

impl<V> Default for LevelRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> LevelRegistry<V> {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Registers `view` at `level`, after any views already there.
    ///
    /// Returns the number of views now registered at `level`.
    ///
    /// # Panics
    ///
    /// Panics if `level` is negative.
    pub fn add_at(&mut self, level: i32, view: V) -> usize {
        let Ok(level) = u32::try_from(level) else {
            panic!("level must be non-negative, got {level}");
        };
        let views = self.levels.entry(level).or_default();
        views.push(view);
        views.len()
    }

    /// Calls `visit` once per populated level with that level's views in
    /// insertion order.
    ///
    /// Levels are visited in ascending order, but callers should not rely on
    /// any ordering across levels.
    pub fn for_each_level(&self, mut visit: impl FnMut(u32, &[V])) {
        for (level, views) in self.iter() {
            visit(level, views);
        }
    }

    /// Returns an iterator over populated levels and their views.
    pub fn iter(&self) -> Levels<'_, V> {
        Levels {
            inner: self.levels.iter(),
        }
    }

    /// Returns the views registered at `level`, or an empty slice.
    #[must_use]
    pub fn views_at(&self, level: u32) -> &[V] {
        self.levels.get(&level).map_or(&[], Vec::as_slice)
    }

    /// Returns the number of populated levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns `true` if no view has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Returns the total number of registrations across all levels.
    #[must_use]
    pub fn view_count(&self) -> usize {
        self.levels.values().map(Vec::len).sum()
    }
}

impl<'a, V> IntoIterator for &'a LevelRegistry<V> {
    type Item = (u32, &'a [V]);
    type IntoIter = Levels<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the populated levels of a [`LevelRegistry`].
///
/// Created by [`LevelRegistry::iter`].
#[derive(Clone, Debug)]
pub struct Levels<'a, V> {
    inner: btree_map::Iter<'a, u32, Vec<V>>,
}

impl<'a, V> Iterator for Levels<'a, V> {
    type Item = (u32, &'a [V]);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(level, views)| (*level, views.as_slice()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Levels<'_, V> {}
