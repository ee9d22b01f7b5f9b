use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::key::{KeyMap, KeySet, PresenceKey};
use crate::types::ItemKey;
use crate::{Diagnostic, DisplayFlags, ExitCompletion, Node, ReconcilerOptions, RenderedItem};

/// Retains only the keyed transition items from a heterogeneous node collection,
/// preserving their requested order.
///
/// Unkeyed transition nodes and non-transition content are dropped with no signal;
/// the reconciler can only track items that carry an explicit identity key.
pub fn filter_nodes<T, K>(nodes: impl IntoIterator<Item = Node<T, K>>) -> Vec<(K, T)> {
    nodes
        .into_iter()
        .filter_map(|node| match node {
            Node::Transition {
                key: Some(key),
                content,
            } => Some((key, content)),
            Node::Transition { key: None, .. } | Node::Other(_) => None,
        })
        .collect()
}

/// A headless enter/exit transition reconciler.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects; item content is an opaque payload.
/// - The host runtime drives it by calling [`Self::reconcile`] once per render cycle
///   with the latest requested node collection.
/// - The host's transition primitive reports finished hide animations through
///   [`Self::complete_exit`].
///
/// An item whose key vanishes from the requested collection is not dropped
/// immediately: it keeps its previous positional slot in the composed output, rendered
/// with `shown = false`, until its exit completion arrives. A key that reappears while
/// exiting cancels the exit and resumes as a normal present item.
///
/// For a render-loop workflow with timed exits, see the `presence-adapter` crate.
#[derive(Clone, Debug)]
pub struct Reconciler<T, K = ItemKey> {
    options: ReconcilerOptions<K>,
    mounted: bool,

    /// Key order of the previous cycle's composed output (exiting items included).
    present: Vec<K>,
    /// Keys currently mid-exit, awaiting `complete_exit`.
    exiting: KeySet<K>,
    /// Last-seen content per key, used to resurrect exiting items whose content is no
    /// longer in the requested collection.
    lookup: KeyMap<K, T>,
    /// Key order of the most recently requested collection.
    target: Vec<K>,

    render_requested: bool,
}

impl<T: Clone, K: PresenceKey> Reconciler<T, K> {
    /// Creates a new reconciler from options.
    pub fn new(options: ReconcilerOptions<K>) -> Self {
        pdebug!(
            exit_before_enter = options.exit_before_enter,
            "Reconciler::new"
        );
        Self {
            options,
            mounted: false,
            present: Vec::new(),
            exiting: KeySet::new(),
            lookup: KeyMap::new(),
            target: Vec::new(),
            render_requested: false,
        }
    }

    pub fn options(&self) -> &ReconcilerOptions<K> {
        &self.options
    }

    pub fn set_options(&mut self, options: ReconcilerOptions<K>) {
        self.options = options;
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ReconcilerOptions<K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn exit_before_enter(&self) -> bool {
        self.options.exit_before_enter
    }

    pub fn set_exit_before_enter(&mut self, exit_before_enter: bool) {
        self.options.exit_before_enter = exit_before_enter;
    }

    pub fn set_on_render_requested(
        &mut self,
        on_render_requested: Option<impl Fn() + Send + Sync + 'static>,
    ) {
        self.options.on_render_requested = on_render_requested.map(|f| Arc::new(f) as _);
    }

    pub fn set_on_diagnostic(
        &mut self,
        on_diagnostic: Option<impl Fn(&Diagnostic<K>) + Send + Sync + 'static>,
    ) {
        self.options.on_diagnostic = on_diagnostic.map(|f| Arc::new(f) as _);
    }

    /// Returns `true` once the first cycle has been reconciled.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Key order of the most recently composed output (exiting items included).
    pub fn present_keys(&self) -> &[K] {
        &self.present
    }

    /// Number of keys currently mid-exit.
    pub fn exiting_len(&self) -> usize {
        self.exiting.len()
    }

    pub fn is_exiting(&self, key: &K) -> bool {
        self.exiting.contains(key)
    }

    /// Iterates over the keys currently mid-exit, in no particular order.
    pub fn for_each_exiting(&self, mut f: impl FnMut(&K)) {
        for key in self.exiting.iter() {
            f(key);
        }
    }

    /// Number of keys with a recorded last-seen content.
    pub fn lookup_len(&self) -> usize {
        self.lookup.len()
    }

    /// Returns whether an out-of-band render cycle has been requested, without
    /// consuming the request. See [`Self::take_render_request`].
    pub fn render_requested(&self) -> bool {
        self.render_requested
    }

    /// Consumes a pending render request.
    ///
    /// Returns `true` when the host should run one additional render cycle with its
    /// latest node collection. The request is set only when the exiting set drains to
    /// empty, so honoring it cannot loop.
    pub fn take_render_request(&mut self) -> bool {
        core::mem::replace(&mut self.render_requested, false)
    }

    /// Discards all lifecycle state, returning the reconciler to its unmounted state.
    ///
    /// Pending exits are forgotten; no completion is expected for them afterwards.
    pub fn reset(&mut self) {
        pdebug!(
            present = self.present.len(),
            exiting = self.exiting.len(),
            "Reconciler::reset"
        );
        self.mounted = false;
        self.present.clear();
        self.exiting.clear();
        self.lookup.clear();
        self.target.clear();
        self.render_requested = false;
    }

    /// Reconciles one render cycle.
    ///
    /// Filters `nodes` down to keyed transition items, diffs their keys against the
    /// previous composed output, and returns the final ordered list to paint:
    /// - staying and entering items, rendered `shown = true`;
    /// - exiting items spliced back in at the slot they held in the previous composed
    ///   output, rendered `shown = false` with `exit_pending` set.
    ///
    /// The very first call mounts: every filtered item is rendered immediately and no
    /// exit logic runs.
    pub fn reconcile(
        &mut self,
        nodes: impl IntoIterator<Item = Node<T, K>>,
    ) -> Vec<RenderedItem<T, K>> {
        let items = filter_nodes(nodes);
        self.update_lookup(&items);

        let target_keys: Vec<K> = items.iter().map(|(key, _)| key.clone()).collect();
        ptrace!(
            targets = target_keys.len(),
            exiting = self.exiting.len(),
            "reconcile"
        );

        if !self.mounted {
            self.mounted = true;
            self.present = target_keys.clone();
            self.target = target_keys;
            return items
                .into_iter()
                .map(|(key, content)| RenderedItem {
                    key,
                    content,
                    flags: DisplayFlags::entering(),
                })
                .collect();
        }

        // Mark present keys that vanished from the target as exiting. A key that
        // reappears cancels its pending exit and resumes as a normal present item.
        for key in &self.present {
            if target_keys.contains(key) {
                self.exiting.remove(key);
            } else {
                self.exiting.insert(key.clone());
            }
        }

        // Exit-before-enter: suppress every target item while anything is still
        // exiting; the splice below re-populates the list with only the exiting items.
        let suppress = self.options.exit_before_enter && !self.exiting.is_empty();
        let mut to_render: Vec<RenderedItem<T, K>> = if suppress {
            Vec::new()
        } else {
            items
                .into_iter()
                .map(|(key, content)| RenderedItem {
                    key,
                    content,
                    flags: DisplayFlags::entering(),
                })
                .collect()
        };

        // Splice exiting items back in at the index they held in the previous composed
        // output, ascending so each splice lands after the ones before it.
        let mut exit_splices: Vec<(usize, K)> = self
            .exiting
            .iter()
            .filter(|&key| !target_keys.contains(key))
            .filter_map(|key| {
                self.present
                    .iter()
                    .position(|present| present == key)
                    .map(|index| (index, key.clone()))
            })
            .collect();
        exit_splices.sort_unstable_by_key(|entry| entry.0);

        for (index, key) in exit_splices {
            let Some(content) = self.lookup.get(&key) else {
                // Cannot resurrect content that was never recorded; the item is left
                // out of the composed result.
                pdebug!("skipping exiting key with no lookup entry");
                continue;
            };
            let at = index.min(to_render.len());
            to_render.insert(
                at,
                RenderedItem {
                    key,
                    content: content.clone(),
                    flags: DisplayFlags::exiting(),
                },
            );
        }

        if self.options.exit_before_enter && to_render.len() > 1 {
            pwarn!(
                rendered = to_render.len(),
                "exit_before_enter is enabled but multiple items would animate at once"
            );
            self.emit(Diagnostic::ExclusiveOverflow {
                rendered: to_render.len(),
            });
        }

        // This becomes the baseline for the next cycle's diff.
        self.present = to_render.iter().map(|item| item.key.clone()).collect();
        self.target = target_keys;
        to_render
    }

    /// Reports that an exiting item's hide animation has fully finished.
    ///
    /// The host's transition primitive must call this exactly once per exit it was
    /// handed (via [`DisplayFlags::exit_pending`]). Stale calls are ignored: a
    /// completion for a key that re-entered or was already removed does nothing.
    ///
    /// When the last exiting item completes, the previous composed order is reset to
    /// the most recently requested key order and one additional render cycle is
    /// requested (see [`Self::take_render_request`] and
    /// [`ReconcilerOptions::on_render_requested`]).
    pub fn complete_exit(&mut self, key: &K) -> ExitCompletion {
        if !self.exiting.remove(key) {
            // Stale completion: the key re-entered or was already removed.
            ptrace!("ignoring stale exit completion");
            return ExitCompletion::Ignored;
        }

        self.lookup.remove(key);
        if let Some(index) = self.present.iter().position(|present| present == key) {
            self.present.remove(index);
        }

        if self.exiting.is_empty() {
            // All pending exits have finished: realign with the latest requested
            // order and let the host pick up any deferred entrants.
            self.present = self.target.clone();
            self.request_render();
            ExitCompletion::Drained
        } else {
            ExitCompletion::Removed
        }
    }

    fn update_lookup(&mut self, items: &[(K, T)]) {
        let mut seen: KeySet<K> = KeySet::new();
        for (key, content) in items {
            if !seen.insert(key.clone()) {
                pwarn!("transition items require unique keys; a key is duplicated within one cycle");
                self.emit(Diagnostic::DuplicateKey { key: key.clone() });
            }
            // Last write wins for duplicate keys.
            self.lookup.insert(key.clone(), content.clone());
        }
    }

    fn request_render(&mut self) {
        pdebug!("exiting set drained; requesting render");
        self.render_requested = true;
        if let Some(cb) = &self.options.on_render_requested {
            cb();
        }
    }

    fn emit(&self, diagnostic: Diagnostic<K>) {
        if let Some(cb) = &self.options.on_diagnostic {
            cb(&diagnostic);
        }
    }
}
