#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod history;
pub mod mode;
pub mod panels;
pub mod shortcuts;
pub mod snapshot;
pub mod store;
pub mod toolbar;
pub mod viewport;

pub use app::ToolbarApp;
pub use config::ToolbarConfig;
pub use controller::ToolbarController;
pub use history::{EditHistory, HistoryAvailability};
pub use panels::{FocusAnchor, FocusSink, Panel, PanelToggleController};
pub use snapshot::{SnapshotAggregator, StoreSet, ToolbarSnapshot, read_snapshot};
pub use toolbar::{ToolbarCommand, ToolbarLayout, compose};
pub use viewport::{Breakpoint, Viewport, ViewportClass};
