//! # Presentation Layer
//!
//! User-facing output of the `dodona` CLI and dashboard, organized as an
//! adaptation of **MVVM (Model-View-ViewModel)**.
//!
//! ## 🏗️ Data Flow
//!
//! ### Console (JSON/Text)
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> Output
//!   (Controller)    (Converter)        (Data)          (Driver)    ==(Text)==> [ View ] --> Output
//!                                                                               (Layout)
//! ```
//!
//! ### Interactive dashboard
//!
//! ```text
//! [ Dashboard ] --> [ present_screen ] --> [ DashboardScreenViewModel ] --> [ Widgets ]
//!      ^                                                                        |
//!      +------------------------ key / mouse events ----------------------------+
//! ```
//!
//! The `Dashboard` (selection state) is owned by the TUI renderer and is the
//! only thing mutated by input. Every draw rebuilds the screen ViewModel.
//!
//! ---
//!
//! ## 🌟 Golden Rules
//!
//! ### 1. The JSON Test 🧪
//! **ViewModels carry raw data, not formatted strings.**
//! * ❌ Bad: `struct Vm { share: "14.8%" }`
//! * ✅ Good: `struct Vm { percent_share: f64 }`
//!
//! ### 2. The Density Rule 🔍
//! `ViewMode` defines **information density**, not shape.
//! * **Minimal:** ids and counts only (for pipes/scripts)
//! * **Compact:** one line per item
//! * **Standard:** grouped sections (default)
//! * **Verbose:** adds citations, notes and commentary
//!
//! ### 3. The Schema Stability Rule 📦
//! `--format json` ignores `ViewMode` and always dumps the full ViewModel.
//!
//! ---
//!
//! ## 📂 Directory Guide
//!
//! | Directory | Contents |
//! |-----------|----------|
//! | `view_models/` | Serializable data contracts and the `CreateView` bridge |
//! | `presenters/` | Pure functions: dataset + derived views + state → ViewModel |
//! | `views/` | `fmt::Display` text layouts and `views/tui/` ratatui widgets |
//! | `renderers/` | Console (JSON/text) driver and the TUI event loop |
//! | `formatters/` | Small string helpers used by views |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, DisplayOptions, Guidance, StatusBadge, StatusLevel,
    ViewMode,
};
