//! The single owned instance that ties the directory, registry and router
//! together. Constructed at startup, dropped at shutdown.

use crate::directory::WindowDirectory;
use crate::events::{AppEvent, ShellRequest};
use crate::model::window::menu_title;
use crate::model::WindowId;
use crate::registry::PinRegistry;
use crate::router::{self, GestureRouter, Toggled};

pub struct LayerService<D: WindowDirectory> {
    directory: D,
    registry: PinRegistry,
    router: GestureRouter,
}

impl<D: WindowDirectory> LayerService<D> {
    /// A service with an empty registry. Nothing is carried across runs.
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            registry: PinRegistry::new(),
            router: GestureRouter::new(),
        }
    }

    /// Route one event.
    pub fn handle(&mut self, event: &AppEvent) -> Vec<ShellRequest> {
        self.router
            .handle(event, &mut self.registry, &self.directory)
    }

    /// Toggle the window the user is working in.
    pub fn toggle_current(&mut self) -> Option<Toggled> {
        router::toggle_current(&mut self.registry, &self.directory)
    }

    /// Release every window we pinned. Returns how many were live.
    pub fn unlock_all(&mut self) -> usize {
        self.registry.unlock_all(&self.directory)
    }

    /// Live topmost attribute, for menu labels.
    pub fn is_pinned(&self, id: WindowId) -> bool {
        self.directory.is_pinned(id)
    }

    pub fn is_tracked(&self, id: WindowId) -> bool {
        self.registry.is_tracked(id)
    }

    pub fn pinned_count(&self) -> usize {
        self.registry.len()
    }

    /// Tracked windows with display titles, after dropping closed ones.
    pub fn pinned_windows(&mut self) -> Vec<(WindowId, String)> {
        self.registry.prune(&self.directory);
        self.registry
            .tracked()
            .into_iter()
            .map(|id| {
                let title = self.directory.title(id).unwrap_or_default();
                (id, menu_title(&title))
            })
            .collect()
    }

    pub fn context_target(&self) -> Option<WindowId> {
        self.router.context_target()
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }
}
