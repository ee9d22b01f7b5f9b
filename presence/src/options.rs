use alloc::sync::Arc;

use crate::Diagnostic;
use crate::types::ItemKey;

/// A callback fired when the reconciler requests an out-of-band render cycle.
///
/// This fires only when the exiting set drains to empty, so it cannot recurse into an
/// infinite render loop.
pub type RenderRequestCallback = Arc<dyn Fn() + Send + Sync>;

/// A callback fired for each advisory diagnostic.
///
/// Diagnostics are observational only; this callback never alters reconciliation.
pub type DiagnosticCallback<K> = Arc<dyn Fn(&Diagnostic<K>) + Send + Sync>;

/// Configuration for [`crate::Reconciler`].
///
/// This type is designed to be cheap to clone: callbacks are stored in `Arc`s so hosts
/// can tweak a field and call `Reconciler::set_options` without reallocating closures.
pub struct ReconcilerOptions<K = ItemKey> {
    /// Defers entrance of newly-requested items while any item is still exiting
    /// ("exit before enter").
    ///
    /// Intended for single-item swaps (e.g. replacing one value with another). With more
    /// than one item composed in this mode, a [`Diagnostic::ExclusiveOverflow`] is
    /// emitted and rendering proceeds unsuppressed.
    pub exit_before_enter: bool,

    /// Optional callback fired when the exiting set drains and the reconciler requests
    /// one additional render cycle.
    ///
    /// Hosts that prefer polling can ignore this and call
    /// `Reconciler::take_render_request` instead.
    pub on_render_requested: Option<RenderRequestCallback>,

    /// Optional callback fired for advisory diagnostics (duplicate keys, exclusive-mode
    /// overflow).
    pub on_diagnostic: Option<DiagnosticCallback<K>>,
}

impl<K> ReconcilerOptions<K> {
    pub fn new() -> Self {
        Self {
            exit_before_enter: false,
            on_render_requested: None,
            on_diagnostic: None,
        }
    }

    pub fn with_exit_before_enter(mut self, exit_before_enter: bool) -> Self {
        self.exit_before_enter = exit_before_enter;
        self
    }

    pub fn with_on_render_requested(
        mut self,
        on_render_requested: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.on_render_requested = on_render_requested.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_diagnostic(
        mut self,
        on_diagnostic: Option<impl Fn(&Diagnostic<K>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_diagnostic = on_diagnostic.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K> Default for ReconcilerOptions<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for ReconcilerOptions<K> {
    fn clone(&self) -> Self {
        Self {
            exit_before_enter: self.exit_before_enter,
            on_render_requested: self.on_render_requested.clone(),
            on_diagnostic: self.on_diagnostic.clone(),
        }
    }
}

impl<K> core::fmt::Debug for ReconcilerOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReconcilerOptions")
            .field("exit_before_enter", &self.exit_before_enter)
            .finish_non_exhaustive()
    }
}
