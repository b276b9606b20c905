// DOM hooks the front-end attaches to. The page markup itself is owned by
// the host; only these attributes and ids are relied upon.

pub const CONTAINER_ID: &str = "iso-stack";
pub const LABEL_HOST_ID: &str = "stack-labels";

pub const GROUP_SELECTOR: &str = "[data-stack-group]";
pub const CONNECTOR_SELECTOR: &str = "[data-stack-connector]";
pub const BADGE_SELECTOR: &str = "[data-stack-badge]";
pub const LABEL_SELECTOR: &str = "[data-focus-layer]";

pub const LAYER_ATTR: &str = "data-layer";
pub const FOCUS_LAYER_ATTR: &str = "data-focus-layer";
pub const ACTIVE_ATTR: &str = "data-active";
pub const EXPLODED_ATTR: &str = "data-exploded";
pub const ICON_ATTR: &str = "data-icon";

// Container attributes `data-stack-<key>` feed `StackConfig::apply`.
pub const CONFIG_ATTR_PREFIX: &str = "data-stack-";

pub const ACTIVE_CLASS: &str = "is-active";
pub const LABEL_CLASS: &str = "focus-pill";
