use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The three stacked planes, bottom to top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerId {
    Code,
    Blueprint,
    Ui,
}

/// `None` means no layer is focused.
pub type ActiveLayer = Option<LayerId>;

impl LayerId {
    /// Bottom-to-top order.
    pub const ALL: [LayerId; 3] = [LayerId::Code, LayerId::Blueprint, LayerId::Ui];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            LayerId::Code => 0,
            LayerId::Blueprint => 1,
            LayerId::Ui => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayerId::Code => "code",
            LayerId::Blueprint => "blueprint",
            LayerId::Ui => "ui",
        }
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown layer `{0}` (expected code, blueprint or ui)")]
pub struct UnknownLayer(pub String);

impl FromStr for LayerId {
    type Err = UnknownLayer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "code" => Ok(LayerId::Code),
            "blueprint" => Ok(LayerId::Blueprint),
            "ui" => Ok(LayerId::Ui),
            other => Err(UnknownLayer(other.to_string())),
        }
    }
}

/// Depth, opacity and scale of one layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerVisualState {
    pub depth_offset: f32,
    pub opacity: f32,
    pub scale: f32,
}

/// Cosmetic descriptor for a label control bound to a layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelSpec {
    pub layer: LayerId,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const DEFAULT_LABELS: [LabelSpec; 3] = [
    LabelSpec {
        layer: LayerId::Code,
        icon: "terminal",
        title: "Source Mapping",
        description: "Prop-Level Sync",
    },
    LabelSpec {
        layer: LayerId::Blueprint,
        icon: "box-select",
        title: "Blueprint",
        description: "Precision Layout",
    },
    LabelSpec {
        layer: LayerId::Ui,
        icon: "sparkles",
        title: "Glass UI",
        description: "Final Fidelity",
    },
];
