//! CSS produced for the browser renditions of the panels.

use std::fmt::Write;

use crate::config::PanelConfig;
use crate::theme::css;
use crate::window::{WindowClasses, WindowControl};

/// Format a length in CSS pixels, dropping a zero fraction (`130px`, `12.5px`).
pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// Room kept between the window title and the control buttons, on top of
/// the buttons themselves. With the default sizes the title gives up 111px.
pub const TITLE_CLEARANCE: f64 = 33.0;

/// Header width taken by the control buttons, their borders and gaps.
fn controls_width(config: &PanelConfig) -> f64 {
    let buttons = WindowControl::ALL.len() as f64;
    buttons * (config.button_size + 2.0 * config.border_width + config.button_gap)
}

/// Inline style declarations for one element.
pub type Declarations = Vec<(&'static str, String)>;

/// Inline styles of the lightweight debug panel.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugStyles {
    pub handle: Declarations,
    pub body: Declarations,
    pub content: Declarations,
}

pub fn debug_inline_styles(config: &PanelConfig) -> DebugStyles {
    let palette = &config.palette;
    DebugStyles {
        handle: vec![
            ("width", "100%".to_string()),
            ("height", px(config.handle_height)),
            ("background-color", css(palette.header)),
            ("cursor", "move".to_string()),
        ],
        body: vec![
            ("border-radius", px(config.corner_radius)),
            (
                "border",
                format!("solid {} {}", px(config.border_width), css(palette.border)),
            ),
            ("width", "fit-content".to_string()),
            ("background-color", css(palette.background)),
            ("overflow", "hidden".to_string()),
            ("z-index", config.z_index.to_string()),
        ],
        content: vec![
            ("padding", "2px 5px".to_string()),
            ("color", css(palette.accent_text)),
        ],
    }
}

/// Stylesheet placed in the floating window's shadow root.
pub fn window_stylesheet(config: &PanelConfig) -> String {
    let palette = &config.palette;
    let border = format!("{} solid {}", px(config.border_width), css(palette.border));
    let maximized = format!("{}%", config.maximized_fraction * 100.0);
    let title_reserve = controls_width(config) + TITLE_CLEARANCE;

    let mut sheet = String::new();
    let _ = write!(
        sheet,
        "\
.dragBody {{
  border-radius: {radius};
  border: {border};
  width: fit-content;
  background-color: {background};
  overflow: hidden;
  position: absolute;
  z-index: {z_index};
  font-family: {font};
  resize: both;
}}
.dragHeader {{
  display: flex;
  align-items: center;
  justify-content: end;
  gap: {gap};
  width: 100%;
  height: {header_height};
  background-color: {header};
  cursor: move;
}}
.windowCounterSpan {{
  width: calc(100% - {title_reserve});
  min-width: fit-content;
  text-align: center;
  color: {title};
}}
.dragHeader button {{
  width: {button};
  height: {button};
  border: solid {border_width} {border_color};
  border-radius: 50%;
}}
",
        radius = px(config.corner_radius),
        border = border,
        background = css(palette.background),
        z_index = config.z_index,
        font = config.font_family,
        gap = px(config.button_gap),
        header_height = px(config.header_height),
        header = css(palette.header),
        title_reserve = px(title_reserve),
        title = css(palette.title_text),
        button = px(config.button_size),
        border_width = px(config.border_width),
        border_color = css(palette.border),
    );

    for control in WindowControl::ALL {
        let color = match control {
            WindowControl::Minimize => palette.minimize,
            WindowControl::Maximize => palette.maximize,
            WindowControl::Close => palette.close,
        };
        let _ = writeln!(sheet, ".{} {{\n  background: {};\n}}", control.class_name(), css(color));
    }

    let _ = write!(
        sheet,
        "\
.dragContent {{
  margin: 0;
  padding: 5px;
  font-size: {font_size};
  color: {accent};
}}
.dragContent slot {{
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
}}
.dragContent > img {{
  border-radius: 15px;
}}
.{closed} {{
  opacity: 0;
  visibility: hidden;
  pointer-events: none;
}}
.{maximized_class} {{
  width: {maximized};
  min-height: {maximized};
}}
.{minimized} {{
  height: 0px;
  padding: 0;
  overflow: hidden;
}}
",
        font_size = px(config.font_size),
        accent = css(palette.accent_text),
        closed = WindowClasses::CLOSED,
        maximized_class = WindowClasses::MAXIMIZED,
        maximized = maximized,
        minimized = WindowClasses::MINIMIZED,
    );

    sheet
}
