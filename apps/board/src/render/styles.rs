// Stylesheets for the dashboard page. Layout-specific sheets are appended to
// BASE_CSS; the background layer is only emitted when an image is configured.

use std::time::Duration;

use crate::render::slots::{DisplaySlot, Region};

pub const BASE_CSS: &str = r#"
body {
    margin: 0;
    padding: 2rem;
    font-family: Calibri, sans-serif;
    background-color: #ffffff;
}
.board {
    position: relative;
}
.board-footer {
    margin-top: 24px;
    font-size: 12px;
    color: #888;
    text-align: center;
}
@keyframes fadeInUp {
    0% { opacity: 0; transform: translateY(10px); }
    100% { opacity: 1; transform: translateY(0); }
}
@keyframes fadeIn {
    to { opacity: 1; }
}
"#;

pub const GRID_CSS: &str = r#"
.grid-container {
    display: grid;
    grid-template-columns: 1fr 1fr;
    grid-template-rows: auto auto;
    gap: 0;
    width: 100%;
    max-width: 1600px;
    margin: 40px auto;
}
.grid-cell {
    padding: 40px 60px;
    border: 1px solid #ccc;
    background-color: white;
}
.grid-cell.row-0 { border-top: none; }
.grid-cell.row-1 { border-bottom: none; }
.grid-cell.col-0 { border-left: none; }
.grid-cell.col-1 { border-right: none; }
.grid-cell h3 {
    color: #003366;
    font-size: 28px;
    font-weight: bold;
    margin-bottom: 0px;
}
.grid-cell ul {
    font-size: 23px;
    margin: 0;
    padding-left: 20px;
}
"#;

pub const TABS_CSS: &str = r#"
.tabs > input[type=radio] {
    display: none;
}
.tab-bar {
    display: flex;
    gap: 4px;
    border-bottom: 1px solid #ccc;
}
.tab-bar label {
    padding: 10px 18px;
    cursor: pointer;
    color: #555;
    border-bottom: 3px solid transparent;
}
.tab-panel {
    display: none;
}
.tab-panel h3 {
    margin-top: 10px;
}
.tab-panel li {
    font-size: 20px;
    margin-left: 15px;
}
.fade-title {
    opacity: 0;
    animation: fadeIn 1s forwards;
    animation-delay: 0.1s;
}
"#;

/// Per-item fade-in: each `<li>` carries `--order` and waits `order * step`.
pub fn grid_animation_css(step: Duration) -> String {
    format!(
        ".grid-cell li {{\n    opacity: 0;\n    animation: fadeInUp 0.6s ease forwards;\n    animation-delay: calc(var(--order) * {}ms);\n}}\n",
        step.as_millis()
    )
}

/// Shows the panel and highlights the label of whichever tab radio is checked.
pub fn tab_selection_css(slots: &[DisplaySlot]) -> String {
    let mut css = String::new();
    for slot in slots {
        if let Region::Tab { index } = slot.region {
            css.push_str(&format!(
                "#tab-{index}:checked ~ .tab-panels .panel-{index} {{ display: block; }}\n\
                 #tab-{index}:checked ~ .tab-bar label[for=tab-{index}] {{ color: #003366; border-bottom-color: #003366; }}\n"
            ));
        }
    }
    css
}

pub fn background_css(data_url: &str) -> String {
    format!(
        r#"
.bg-container {{
    position: fixed;
    top: 0;
    left: 0;
    width: 100vw;
    height: 100vh;
    z-index: -1;
    background-image: url('{data_url}');
    background-repeat: no-repeat;
    background-size: contain;
    background-position: bottom center;
    opacity: 0.15;
}}
body {{
    background-color: rgba(255, 255, 255, 0.0);
}}
"#
    )
}
