//! Explode/collapse state machine and per-layer derived visuals.

use crate::config::StackConfig;
use crate::constants::{
    CONNECTOR_COUNT, CONNECTOR_LENGTH, CONNECTOR_OFFSET, CONNECTOR_OPACITY, STACK_HEIGHT,
    STACK_WIDTH,
};
use crate::layer::{ActiveLayer, LayerId, LayerVisualState};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExplodeState {
    #[default]
    Collapsed,
    Exploded,
}

impl ExplodeState {
    pub fn is_exploded(self) -> bool {
        self == ExplodeState::Exploded
    }
}

/// Pure derivation of one layer's target visuals.
pub fn derive_visual(
    layer: LayerId,
    explode: ExplodeState,
    active: ActiveLayer,
    config: &StackConfig,
) -> LayerVisualState {
    let i = layer.index();
    let depth_offset = match explode {
        ExplodeState::Collapsed => config.collapsed_depths[i],
        ExplodeState::Exploded => config.exploded_depths[i],
    };
    let (opacity, scale) = match active {
        None => (1.0, 1.0),
        Some(focused) if focused == layer => (1.0, config.focus_scale),
        Some(_) => (config.dim_opacities[i], 1.0),
    };
    LayerVisualState {
        depth_offset,
        opacity,
        scale,
    }
}

/// Placement of one connector line inside the stack group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connector {
    /// Corner anchor in px from the group's top-left.
    pub left: f32,
    pub top: f32,
    pub length: f32,
    pub offset_y: f32,
    pub offset_z: f32,
    pub opacity: f32,
}

/// The four corner connectors, in left/right then top/bottom order.
pub fn connectors() -> [Connector; CONNECTOR_COUNT] {
    std::array::from_fn(|i| Connector {
        left: if i % 2 == 0 { 0.0 } else { STACK_WIDTH },
        top: if i < 2 { 0.0 } else { STACK_HEIGHT },
        length: CONNECTOR_LENGTH,
        offset_y: CONNECTOR_OFFSET,
        offset_z: CONNECTOR_OFFSET,
        opacity: CONNECTOR_OPACITY,
    })
}

/// Owns the explode state; everything else is derived on demand.
#[derive(Clone, Debug)]
pub struct Compositor {
    state: ExplodeState,
    config: StackConfig,
}

impl Compositor {
    pub fn new(config: StackConfig) -> Self {
        Self {
            state: ExplodeState::Collapsed,
            config,
        }
    }

    #[inline]
    pub fn state(&self) -> ExplodeState {
        self.state
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Returns true if the state changed.
    pub fn pointer_enter(&mut self) -> bool {
        self.transition(ExplodeState::Exploded)
    }

    /// Returns true if the state changed.
    pub fn pointer_leave(&mut self) -> bool {
        self.transition(ExplodeState::Collapsed)
    }

    pub fn connectors_visible(&self) -> bool {
        self.state.is_exploded()
    }

    pub fn visual(&self, layer: LayerId, active: ActiveLayer) -> LayerVisualState {
        derive_visual(layer, self.state, active, &self.config)
    }

    /// Target visuals for all layers, bottom to top.
    pub fn visuals(&self, active: ActiveLayer) -> [LayerVisualState; 3] {
        LayerId::ALL.map(|layer| self.visual(layer, active))
    }

    fn transition(&mut self, next: ExplodeState) -> bool {
        if self.state == next {
            return false;
        }
        log::debug!("[stack] {:?} -> {:?}", self.state, next);
        self.state = next;
        true
    }
}
