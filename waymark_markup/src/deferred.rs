// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred node removal.
//!
//! Deleting a markup node from inside a callback fired *by that node* would
//! destroy the object mid-dispatch. Instead, the action is recorded and the
//! caller re-posts it to the next iteration of its event loop as a single
//! zero-delay, run-once task. At execution time the scene's closing flag is
//! consulted and ids are re-validated, so requests that outlived their node
//! (or the whole scene) simply evaporate.

use smallvec::SmallVec;

use crate::{NodeId, Scene};

/// Collects node-removal requests and executes them on the next event-loop
/// iteration.
///
/// ## Usage
///
/// 1) Inside a callback, call [`DeferredRemover::request_remove`]. When it
///    returns `true`, post one zero-delay task to the event loop.
/// 2) In that task, call [`DeferredRemover::run`] with the scene.
#[derive(Debug, Default)]
pub struct DeferredRemover {
    pending: SmallVec<[NodeId; 4]>,
    scheduled: bool,
}

impl DeferredRemover {
    /// Creates an empty remover.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a removal request.
    ///
    /// Returns `true` when the caller should post a run to the event loop;
    /// further requests before that run piggyback on the already-scheduled
    /// task and return `false`. Duplicate ids are recorded once.
    pub fn request_remove(&mut self, id: NodeId) -> bool {
        if !self.pending.contains(&id) {
            self.pending.push(id);
        }
        if self.scheduled {
            return false;
        }
        self.scheduled = true;
        true
    }

    /// Whether a run has been requested and not yet executed.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Executes all pending removals.
    ///
    /// A no-op unless scheduled. When the scene has begun teardown the
    /// requests are skipped entirely and the pending list is left alone; the
    /// scene is responsible for the nodes from here on. Stale ids are skipped
    /// silently, as the node they referred to is already gone.
    pub fn run(&mut self, scene: &mut Scene) {
        if !self.scheduled {
            return;
        }
        self.scheduled = false;
        if scene.closing() {
            log::debug!(
                "scene is closing; skipping {} deferred removal(s)",
                self.pending.len()
            );
            return;
        }
        for id in self.pending.drain(..) {
            scene.remove(id);
        }
    }
}
