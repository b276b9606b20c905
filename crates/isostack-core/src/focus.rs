//! Shared `activeLayer` cell linking label hover to layer emphasis.
//!
//! [`FocusBridge`] is the writer role: the label controls hold clones of it and
//! call its hover entry points. The compositor only ever receives a
//! [`FocusReader`]. Everything runs on one thread, so plain `Rc<Cell>` is
//! enough.

use std::cell::Cell;
use std::rc::Rc;

use crate::layer::{ActiveLayer, LayerId};

#[derive(Debug, Default)]
struct FocusCell {
    active: Cell<ActiveLayer>,
    generation: Cell<u64>,
}

#[derive(Clone, Debug, Default)]
pub struct FocusBridge {
    cell: Rc<FocusCell>,
}

impl FocusBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reader(&self) -> FocusReader {
        FocusReader {
            cell: self.cell.clone(),
        }
    }

    /// Returns true if the active layer changed.
    pub fn set_active(&self, layer: ActiveLayer) -> bool {
        if self.cell.active.get() == layer {
            return false;
        }
        self.cell.active.set(layer);
        self.cell.generation.set(self.cell.generation.get().wrapping_add(1));
        log::debug!("[focus] active = {:?}", layer);
        true
    }

    pub fn on_hover_enter(&self, layer: LayerId) -> bool {
        self.set_active(Some(layer))
    }

    /// Leaving any label clears focus; the previous one is not restored.
    pub fn on_hover_leave(&self, _layer: LayerId) -> bool {
        self.set_active(None)
    }

    pub fn active(&self) -> ActiveLayer {
        self.cell.active.get()
    }
}

/// Read-only view of the focus cell.
#[derive(Clone, Debug)]
pub struct FocusReader {
    cell: Rc<FocusCell>,
}

impl FocusReader {
    #[inline]
    pub fn get(&self) -> ActiveLayer {
        self.cell.active.get()
    }

    /// Bumped on every effective change; lets renderers skip unchanged frames.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.cell.generation.get()
    }

    /// Whether the label bound to `layer` should render highlighted.
    pub fn is_active(&self, layer: LayerId) -> bool {
        self.get() == Some(layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_sees_latest_hover() {
        let bridge = FocusBridge::new();
        let reader = bridge.reader();
        assert_eq!(reader.get(), None);

        bridge.on_hover_enter(LayerId::Ui);
        assert_eq!(reader.get(), Some(LayerId::Ui));
        assert!(reader.is_active(LayerId::Ui));
        assert!(!reader.is_active(LayerId::Code));

        bridge.on_hover_leave(LayerId::Ui);
        assert_eq!(reader.get(), None);
    }

    #[test]
    fn leave_clears_even_for_a_different_label() {
        let bridge = FocusBridge::new();
        bridge.on_hover_enter(LayerId::Code);
        bridge.on_hover_leave(LayerId::Blueprint);
        assert_eq!(bridge.active(), None);
    }

    #[test]
    fn generation_only_moves_on_change() {
        let bridge = FocusBridge::new();
        let reader = bridge.reader();
        assert!(bridge.set_active(Some(LayerId::Blueprint)));
        let g = reader.generation();
        assert!(!bridge.set_active(Some(LayerId::Blueprint)));
        assert_eq!(reader.generation(), g);
        assert!(bridge.clone().set_active(None));
        assert_eq!(reader.generation(), g + 1);
    }
}
