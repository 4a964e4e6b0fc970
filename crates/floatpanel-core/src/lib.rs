//! FloatPanel Core Library
//!
//! Platform-agnostic logic behind draggable floating panels: pointer input,
//! the drag controller, the window lifecycle and the panel registry.

pub mod config;
pub mod drag;
pub mod input;
pub mod panel;
pub mod style;
pub mod surface;
pub mod theme;
pub mod window;

pub use config::{ConfigError, PanelConfig};
pub use drag::{DragController, DragSession, DragStart, DragSurface};
pub use input::{PointerEvent, PointerKind};
pub use panel::{Panel, PanelId, PanelRegistry, PanelVariant};
pub use style::{debug_inline_styles, px, window_stylesheet, DebugStyles};
pub use surface::MemorySurface;
pub use theme::Palette;
pub use window::{WindowClasses, WindowControl, WindowLifecycle, WindowState};
