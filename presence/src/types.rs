use alloc::string::String;

/// A concrete string-or-integer key, for hosts that do not want their own key type.
///
/// The reconciler itself is generic over the key type; `ItemKey` is simply the default.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKey {
    Int(i64),
    Str(String),
}

impl From<i64> for ItemKey {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ItemKey {
    fn from(value: i32) -> Self {
        Self::Int(value as i64)
    }
}

impl From<&str> for ItemKey {
    fn from(value: &str) -> Self {
        Self::Str(String::from(value))
    }
}

impl From<String> for ItemKey {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl core::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// A renderable node handed to the reconciler, one of a closed set of kinds.
///
/// Only [`Node::Transition`] nodes that carry a key participate in the enter/exit
/// lifecycle. Unkeyed transition nodes and [`Node::Other`] content are dropped by
/// [`crate::filter_nodes`] with no signal; they are not lifecycle participants.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node<T, K = ItemKey> {
    /// A lifecycle-managed transition item.
    Transition { key: Option<K>, content: T },
    /// Any other renderable content, opaque to the reconciler.
    Other(T),
}

impl<T, K> Node<T, K> {
    /// Creates a keyed transition node.
    pub fn item(key: impl Into<K>, content: T) -> Self {
        Self::Transition {
            key: Some(key.into()),
            content,
        }
    }

    /// Creates a transition node without a key (it will be ignored by the reconciler).
    pub fn unkeyed(content: T) -> Self {
        Self::Transition { key: None, content }
    }

    /// Creates a non-transition node (it will be ignored by the reconciler).
    pub fn other(content: T) -> Self {
        Self::Other(content)
    }
}

/// Per-item display instructions for the host's transition primitive.
///
/// Contract the primitive must honor: when `exit_pending` is set, play the hide
/// animation and call [`crate::Reconciler::complete_exit`] exactly once when it has
/// fully finished; never call it otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayFlags {
    /// Whether the item should be visible. `false` means "play the hide animation".
    pub shown: bool,
    /// Whether the transition primitive may play an entrance animation.
    ///
    /// Always `true` in this design: the primitive decides whether to animate on mount.
    pub appear: bool,
    /// Set when the item is mid-exit and the reconciler is waiting for
    /// [`crate::Reconciler::complete_exit`].
    pub exit_pending: bool,
}

impl DisplayFlags {
    pub(crate) fn entering() -> Self {
        Self {
            shown: true,
            appear: true,
            exit_pending: false,
        }
    }

    pub(crate) fn exiting() -> Self {
        Self {
            shown: false,
            appear: true,
            exit_pending: true,
        }
    }
}

/// One element of the composed render result.
///
/// Derived fresh each cycle; the host paints it and must not store it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderedItem<T, K = ItemKey> {
    pub key: K,
    pub content: T,
    pub flags: DisplayFlags,
}

/// Outcome of a [`crate::Reconciler::complete_exit`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitCompletion {
    /// The key was not mid-exit (already removed, never exiting, or re-entered).
    Ignored,
    /// The key was removed; other items are still exiting.
    Removed,
    /// The key was removed and it was the last exiting item. The reconciler has
    /// requested one additional render cycle.
    Drained,
}

impl ExitCompletion {
    /// Returns `true` when the call removed the key from the exiting set.
    pub fn removed(self) -> bool {
        matches!(self, Self::Removed | Self::Drained)
    }

    /// Returns `true` when the call drained the exiting set to empty.
    pub fn drained(self) -> bool {
        matches!(self, Self::Drained)
    }
}

/// An advisory condition observed during reconciliation.
///
/// Diagnostics never alter control flow; they are reported through
/// [`crate::ReconcilerOptions::on_diagnostic`] (and as `tracing` warnings with the
/// `tracing` feature).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic<K> {
    /// A key occurred more than once in a single cycle's input. The last-registered
    /// content wins.
    DuplicateKey { key: K },
    /// Exit-before-enter mode is active but more than one item was composed, so more
    /// than one item would animate at once.
    ExclusiveOverflow { rendered: usize },
}
