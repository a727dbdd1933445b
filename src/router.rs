//! Turns input events into pin actions and shell requests.
//!
//! The router holds only the remembered title-bar target. Pin state lives in
//! the [`PinRegistry`] and every OS query goes through the
//! [`WindowDirectory`], so `handle` is a function of (state, event) that
//! returns the presentation work to do.

use tracing::{debug, info};

use crate::directory::WindowDirectory;
use crate::events::{AppEvent, ShellRequest};
use crate::model::{LayerLabel, ScreenPoint, WindowId};
use crate::registry::PinRegistry;

/// Result of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Pinned,
    Unpinned,
    /// The window closed, or refused the change, before the action reached it.
    Stale,
}

/// The single toggle algorithm shared by the hotkey, the tray and the popup.
pub fn toggle<D: WindowDirectory>(registry: &mut PinRegistry, dir: &D, root: WindowId) -> Toggled {
    if registry.is_tracked(root) {
        if registry.unpin(dir, root) {
            Toggled::Unpinned
        } else {
            Toggled::Stale
        }
    } else if registry.pin(dir, root) {
        Toggled::Pinned
    } else {
        Toggled::Stale
    }
}

/// Toggle the root of the foreground window. `None` when there is no
/// resolvable foreground window.
pub fn toggle_current<D: WindowDirectory>(
    registry: &mut PinRegistry,
    dir: &D,
) -> Option<Toggled> {
    let root = dir.foreground().and_then(|w| dir.resolve_root(w))?;
    let outcome = toggle(registry, dir, root);
    info!(window = %root, title = ?dir.title(root), ?outcome, "toggled current window");
    Some(outcome)
}

#[derive(Debug, Default)]
pub struct GestureRouter {
    context_target: Option<WindowId>,
}

impl GestureRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The window whose title bar was right-clicked last, until the popup
    /// is used or dismissed.
    pub fn context_target(&self) -> Option<WindowId> {
        self.context_target
    }

    /// Apply one event and return the presentation work it produces.
    pub fn handle<D: WindowDirectory>(
        &mut self,
        event: &AppEvent,
        registry: &mut PinRegistry,
        dir: &D,
    ) -> Vec<ShellRequest> {
        debug!(event = event.description(), "routing");
        let mut requests = Vec::new();

        match event {
            AppEvent::HotkeyPressed | AppEvent::ToggleCurrent => {
                if toggle_current(registry, dir).is_none() {
                    info!("no foreground window to toggle");
                }
            }
            AppEvent::RightButtonReleased(point) => {
                if let Some(request) = self.title_bar_click(*point, dir) {
                    requests.push(request);
                }
            }
            AppEvent::ToggleContextTarget => {
                if let Some(target) = self.context_target.take() {
                    let outcome = toggle(registry, dir, target);
                    info!(window = %target, ?outcome, "toggled from title bar");
                }
            }
            AppEvent::ContextMenuDismissed => {
                self.context_target = None;
            }
            AppEvent::UnlockAll => {
                self.context_target = None;
                let released = registry.unlock_all(dir);
                info!(released, "unlocked all windows");
            }
            AppEvent::UnpinWindow(id) => {
                let released = registry.unpin(dir, *id);
                info!(window = %id, released, "unpinned from tray list");
            }
            AppEvent::RequestQuit => {
                requests.push(ShellRequest::Quit);
            }
        }

        if event.mutates_pins() {
            requests.push(ShellRequest::RefreshTray {
                pinned: registry.len(),
            });
        }
        requests
    }

    /// Decide whether a right-button release opens the popup.
    fn title_bar_click<D: WindowDirectory>(
        &mut self,
        point: ScreenPoint,
        dir: &D,
    ) -> Option<ShellRequest> {
        let root = dir.window_at(point).and_then(|w| dir.resolve_root(w))?;
        let region = dir.hit_test(root, point);
        if !region.is_title_bar() {
            return None;
        }

        let label = LayerLabel::for_state(dir.is_pinned(root));
        debug!(window = %root, %point, ?label, "title bar right-click");
        self.context_target = Some(root);
        Some(ShellRequest::ShowContextMenu {
            at: point,
            target: root,
            label,
        })
    }
}
