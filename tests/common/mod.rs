//! In-memory window system for driving the core without Win32.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use layerpin::{HitTest, ScreenPoint, WindowDirectory, WindowId};

/// Height of the fake title bar.
pub const CAPTION_HEIGHT: i32 = 30;
/// Width of the system-menu icon at the left of the title bar.
pub const SYSMENU_WIDTH: i32 = 20;

#[derive(Debug, Clone)]
pub struct FakeWindow {
    pub parent: Option<WindowId>,
    pub alive: bool,
    pub topmost: bool,
    pub title: String,
    /// left, top, right, bottom (exclusive)
    pub rect: (i32, i32, i32, i32),
    /// Ignores style changes, like an elevated window seen from a normal process.
    pub elevated: bool,
}

#[derive(Default)]
pub struct FakeDirectory {
    windows: RefCell<HashMap<WindowId, FakeWindow>>,
    foreground: Cell<Option<WindowId>>,
    set_calls: Cell<usize>,
}

pub fn id(raw: isize) -> WindowId {
    WindowId::from_raw(raw).expect("non-null test handle")
}

impl FakeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level window covering `rect`.
    pub fn add_window(&self, raw: isize, title: &str, rect: (i32, i32, i32, i32)) -> WindowId {
        let window = id(raw);
        self.windows.borrow_mut().insert(
            window,
            FakeWindow {
                parent: None,
                alive: true,
                topmost: false,
                title: title.to_string(),
                rect,
                elevated: false,
            },
        );
        window
    }

    /// Add a child control of `parent` covering `rect`.
    pub fn add_child(&self, raw: isize, parent: WindowId, rect: (i32, i32, i32, i32)) -> WindowId {
        let window = id(raw);
        self.windows.borrow_mut().insert(
            window,
            FakeWindow {
                parent: Some(parent),
                alive: true,
                topmost: false,
                title: String::new(),
                rect,
                elevated: false,
            },
        );
        window
    }

    pub fn close(&self, window: WindowId) {
        if let Some(w) = self.windows.borrow_mut().get_mut(&window) {
            w.alive = false;
        }
    }

    pub fn set_foreground(&self, window: Option<WindowId>) {
        self.foreground.set(window);
    }

    pub fn set_elevated(&self, window: WindowId) {
        if let Some(w) = self.windows.borrow_mut().get_mut(&window) {
            w.elevated = true;
        }
    }

    /// Change the attribute behind our back (another tool, the user).
    pub fn set_topmost_externally(&self, window: WindowId, topmost: bool) {
        if let Some(w) = self.windows.borrow_mut().get_mut(&window) {
            w.topmost = topmost;
        }
    }

    /// Raw attribute, regardless of liveness.
    pub fn topmost(&self, window: WindowId) -> bool {
        self.windows
            .borrow()
            .get(&window)
            .map(|w| w.topmost)
            .unwrap_or(false)
    }

    /// Number of `set_pinned` calls that reached a live window.
    pub fn set_calls(&self) -> usize {
        self.set_calls.get()
    }

    /// A point inside the caption of `window`, clear of the system menu.
    pub fn caption_point(&self, window: WindowId) -> ScreenPoint {
        let (left, top, _, _) = self.windows.borrow()[&window].rect;
        ScreenPoint::new(left + SYSMENU_WIDTH + 10, top + CAPTION_HEIGHT / 2)
    }

    /// A point on the system-menu icon of `window`.
    pub fn sysmenu_point(&self, window: WindowId) -> ScreenPoint {
        let (left, top, _, _) = self.windows.borrow()[&window].rect;
        ScreenPoint::new(left + SYSMENU_WIDTH / 2, top + CAPTION_HEIGHT / 2)
    }

    /// A point inside the client area of `window`.
    pub fn client_point(&self, window: WindowId) -> ScreenPoint {
        let (left, top, _, _) = self.windows.borrow()[&window].rect;
        ScreenPoint::new(left + 50, top + CAPTION_HEIGHT + 50)
    }

    fn contains(rect: (i32, i32, i32, i32), p: ScreenPoint) -> bool {
        p.x >= rect.0 && p.x < rect.2 && p.y >= rect.1 && p.y < rect.3
    }
}

impl WindowDirectory for FakeDirectory {
    fn resolve_root(&self, handle: WindowId) -> Option<WindowId> {
        let windows = self.windows.borrow();
        let mut current = handle;
        loop {
            let w = windows.get(&current).filter(|w| w.alive)?;
            match w.parent {
                Some(parent) => current = parent,
                None => return Some(current),
            }
        }
    }

    fn is_alive(&self, handle: WindowId) -> bool {
        self.windows
            .borrow()
            .get(&handle)
            .map(|w| w.alive)
            .unwrap_or(false)
    }

    fn is_pinned(&self, handle: WindowId) -> bool {
        self.windows
            .borrow()
            .get(&handle)
            .map(|w| w.alive && w.topmost)
            .unwrap_or(false)
    }

    fn set_pinned(&self, handle: WindowId, pinned: bool) -> bool {
        let mut windows = self.windows.borrow_mut();
        match windows.get_mut(&handle) {
            Some(w) if w.alive => {
                self.set_calls.set(self.set_calls.get() + 1);
                if w.elevated {
                    return w.topmost == pinned;
                }
                w.topmost = pinned;
                true
            }
            _ => false,
        }
    }

    fn hit_test(&self, handle: WindowId, point: ScreenPoint) -> HitTest {
        let windows = self.windows.borrow();
        let Some(w) = windows.get(&handle).filter(|w| w.alive) else {
            return HitTest::Nowhere;
        };
        if !Self::contains(w.rect, point) {
            return HitTest::Nowhere;
        }
        let (left, top, _, _) = w.rect;
        if point.y < top + CAPTION_HEIGHT {
            if point.x < left + SYSMENU_WIDTH {
                HitTest::SysMenu
            } else {
                HitTest::Caption
            }
        } else {
            HitTest::Client
        }
    }

    fn window_at(&self, point: ScreenPoint) -> Option<WindowId> {
        let windows = self.windows.borrow();
        let mut hits: Vec<(&WindowId, &FakeWindow)> = windows
            .iter()
            .filter(|(_, w)| w.alive && Self::contains(w.rect, point))
            .collect();
        // Children sit above their parents.
        hits.sort_by_key(|(_, w)| w.parent.is_none());
        hits.first().map(|(id, _)| **id)
    }

    fn foreground(&self) -> Option<WindowId> {
        self.foreground.get().filter(|&w| self.is_alive(w))
    }

    fn title(&self, handle: WindowId) -> Option<String> {
        self.windows
            .borrow()
            .get(&handle)
            .filter(|w| w.alive && !w.title.is_empty())
            .map(|w| w.title.clone())
    }
}
