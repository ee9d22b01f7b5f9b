use alloc::vec::Vec;

use crate::{ExitSchedule, ReconcilerKey};

/// A framework-neutral controller that wraps a `presence::Reconciler` and provides the
/// common render-loop workflow: reconcile, time out hide animations, and pick up the
/// out-of-band render request once all exits have drained.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `render(nodes, now_ms)` once per render cycle with the latest node collection
/// - `tick(now_ms)` each frame/timer tick (to complete elapsed hide animations)
///
/// Hosts with a real animation system can skip the built-in timers and call
/// `complete_exit` themselves when their primitive reports a finished hide animation.
#[derive(Clone, Debug)]
pub struct Controller<T, K = presence::ItemKey> {
    r: presence::Reconciler<T, K>,
    schedule: ExitSchedule<K>,
    exit_duration_ms: u64,
}

impl<T: Clone, K: ReconcilerKey> Controller<T, K> {
    pub fn new(options: presence::ReconcilerOptions<K>, exit_duration_ms: u64) -> Self {
        Self {
            r: presence::Reconciler::new(options),
            schedule: ExitSchedule::new(),
            exit_duration_ms,
        }
    }

    pub fn from_reconciler(r: presence::Reconciler<T, K>, exit_duration_ms: u64) -> Self {
        Self {
            r,
            schedule: ExitSchedule::new(),
            exit_duration_ms,
        }
    }

    pub fn reconciler(&self) -> &presence::Reconciler<T, K> {
        &self.r
    }

    pub fn reconciler_mut(&mut self) -> &mut presence::Reconciler<T, K> {
        &mut self.r
    }

    pub fn into_reconciler(self) -> presence::Reconciler<T, K> {
        self.r
    }

    pub fn schedule(&self) -> &ExitSchedule<K> {
        &self.schedule
    }

    pub fn exit_duration_ms(&self) -> u64 {
        self.exit_duration_ms
    }

    /// Sets the hide-animation duration used for exits that begin after this call.
    pub fn set_exit_duration_ms(&mut self, exit_duration_ms: u64) {
        self.exit_duration_ms = exit_duration_ms;
    }

    /// Number of hide animations currently in flight.
    pub fn pending_exits(&self) -> usize {
        self.schedule.len()
    }

    /// Reconciles one render cycle and keeps the exit timers in sync.
    ///
    /// Items that started exiting this cycle get a timer; items whose exit was
    /// canceled by re-entry get theirs dropped. A timer already in flight is never
    /// restarted by a re-render.
    pub fn render(
        &mut self,
        nodes: impl IntoIterator<Item = presence::Node<T, K>>,
        now_ms: u64,
    ) -> Vec<presence::RenderedItem<T, K>> {
        let out = self.r.reconcile(nodes);

        for item in &out {
            if item.flags.exit_pending {
                self.schedule
                    .begin(item.key.clone(), now_ms, self.exit_duration_ms);
            }
        }
        let reconciler = &self.r;
        self.schedule.retain(|key| reconciler.is_exiting(key));

        out
    }

    /// Advances the controller's clock, completing every exit whose hide animation has
    /// elapsed.
    ///
    /// Returns `true` when the reconciler requested another render cycle (the exiting
    /// set drained); the host should call `render` again with its latest nodes.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let reconciler = &mut self.r;
        self.schedule.drain_elapsed(now_ms, |key| {
            reconciler.complete_exit(&key);
        });
        self.r.take_render_request()
    }

    /// Reports a finished hide animation directly, bypassing the built-in timers.
    pub fn complete_exit(&mut self, key: &K) -> presence::ExitCompletion {
        self.schedule.cancel(key);
        self.r.complete_exit(key)
    }

    /// Consumes a pending out-of-band render request.
    pub fn needs_render(&mut self) -> bool {
        self.r.take_render_request()
    }
}
