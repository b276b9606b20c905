// Default tuning for the layer stack. Everything here can be overridden
// through `StackConfig`.

// Spring motion (shared by the tilt springs and the layer animator)
pub const SPRING_STIFFNESS: f32 = 100.0;
pub const SPRING_DAMPING: f32 = 20.0; // 2*sqrt(k): critically damped
pub const SPRING_MAX_STEP_SEC: f32 = 0.004; // larger frame deltas are subdivided
pub const SPRING_STEP_RATE: f32 = 0.5; // max h * (sqrt(k) + d) per sub-step
pub const SPRING_MAX_RATE: f32 = 2000.0; // upper bound on sqrt(k) + d accepted by config
pub const SPRING_MAX_SUBSTEPS: u32 = 1024;
pub const FRAME_DT_MAX_SEC: f32 = 0.1; // clamp after a stalled/backgrounded tab

// Tilt ranges in degrees, indexed by normalized pointer -0.5 .. 0.5
pub const ROTATE_X_FROM: f32 = 25.0; // driven by pointer Y
pub const ROTATE_X_TO: f32 = 15.0;
pub const ROTATE_Y_FROM: f32 = -25.0; // driven by pointer X
pub const ROTATE_Y_TO: f32 = -15.0;

// Depth offsets along Z, order: code, blueprint, ui
pub const COLLAPSED_DEPTHS: [f32; 3] = [0.0, 0.0, 20.0];
pub const EXPLODED_DEPTHS: [f32; 3] = [-140.0, 0.0, 140.0];

// Focus emphasis
pub const DIM_OPACITIES: [f32; 3] = [0.3, 0.2, 0.4];
pub const FOCUS_SCALE: f32 = 1.05;

// Layout (logical CSS px)
pub const STACK_WIDTH: f32 = 400.0;
pub const STACK_HEIGHT: f32 = 250.0;
pub const CONTAINER_HEIGHT: f32 = 600.0;
pub const PERSPECTIVE: f32 = 1200.0;

// Connector indicators shown while exploded
pub const CONNECTOR_COUNT: usize = 4;
pub const CONNECTOR_LENGTH: f32 = 240.0;
pub const CONNECTOR_OFFSET: f32 = -120.0; // applied on both Z and Y
pub const CONNECTOR_OPACITY: f32 = 0.2;
pub const CONNECTOR_FADE_MS: u32 = 300; // opacity transition on explode/collapse

// Status badge
pub const BADGE_TRAVEL: f32 = 100.0; // px per unit of normalized pointer
pub const BADGE_LABEL_COLLAPSED: &str = "Inspect Stack";
pub const BADGE_LABEL_EXPLODED: &str = "Exploded View";
