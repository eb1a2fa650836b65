//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `Header`: Title, backend URL and health, status message
//!
//! ### Stateful Components (Persistent State + Transient Wrapper)
//!
//! - `InputPanel`: Code editor, language selector and submit button.
//!   `InputPanelState` keeps the cursor; code and language are props.
//! - `ResultPanel`: Loading / error / tabbed explanation view.
//!   `ResultPanelState` keeps the active tab and scroll offset.
//!
//! The persistent state lives in `TuiState`. The wrapper is built each frame
//! (or per event) with borrowed state plus props from `App`, so domain data
//! only ever flows down and edits only ever flow up as events.
//!
//! ```rust,ignore
//! InputPanel::new(&mut tui.input_panel, &app.code, app.language, app.is_loading, tui.focus)
//!     .render(frame, input_area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── header.rs        (Top status line)
//! ├── input_panel/     (Editor, selector, button + cursor math)
//! └── result_panel.rs  (Result state machine and tabs)
//! ```

pub mod header;
pub mod input_panel;
pub mod result_panel;

pub use header::Header;
pub use input_panel::{InputEvent, InputPanel, InputPanelState};
pub use result_panel::{ResultEvent, ResultPanel, ResultPanelState};
