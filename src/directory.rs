//! The window-system contract the core depends on.
//!
//! Each platform provides one implementation (`platform::windows::directory`
//! on Windows); tests drive the core with an in-memory fake.

use crate::model::{HitTest, ScreenPoint, WindowId};

/// Queries and the single mutation this application performs on windows it
/// does not own.
///
/// Methods take `&self` because the mutation happens on the OS side via the
/// window handle. Stale handles are never errors: they yield `None`, `false`
/// or [`HitTest::Nowhere`].
pub trait WindowDirectory {
    /// Walk up the ownership chain from `handle` (possibly a child control)
    /// to its top-level ancestor. `None` if either end is gone.
    fn resolve_root(&self, handle: WindowId) -> Option<WindowId>;

    /// Whether `handle` still refers to a live window.
    fn is_alive(&self, handle: WindowId) -> bool;

    /// Live always-on-top attribute, read from the OS rather than the registry.
    fn is_pinned(&self, handle: WindowId) -> bool;

    /// Set or clear always-on-top without moving, resizing or activating the
    /// window, restacking it immediately.
    ///
    /// Returns `true` if a live window received the change.
    fn set_pinned(&self, handle: WindowId, pinned: bool) -> bool;

    /// Classify the region of `handle` under `point`.
    fn hit_test(&self, handle: WindowId, point: ScreenPoint) -> HitTest;

    /// The window (possibly a child) under a screen point.
    fn window_at(&self, point: ScreenPoint) -> Option<WindowId>;

    /// The window the user is working in.
    fn foreground(&self) -> Option<WindowId>;

    /// Caption text, if any.
    fn title(&self, handle: WindowId) -> Option<String>;
}

impl<D: WindowDirectory + ?Sized> WindowDirectory for &D {
    fn resolve_root(&self, handle: WindowId) -> Option<WindowId> {
        (**self).resolve_root(handle)
    }

    fn is_alive(&self, handle: WindowId) -> bool {
        (**self).is_alive(handle)
    }

    fn is_pinned(&self, handle: WindowId) -> bool {
        (**self).is_pinned(handle)
    }

    fn set_pinned(&self, handle: WindowId, pinned: bool) -> bool {
        (**self).set_pinned(handle, pinned)
    }

    fn hit_test(&self, handle: WindowId, point: ScreenPoint) -> HitTest {
        (**self).hit_test(handle, point)
    }

    fn window_at(&self, point: ScreenPoint) -> Option<WindowId> {
        (**self).window_at(point)
    }

    fn foreground(&self) -> Option<WindowId> {
        (**self).foreground()
    }

    fn title(&self, handle: WindowId) -> Option<String> {
        (**self).title(handle)
    }
}
