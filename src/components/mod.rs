pub mod heatmap;
pub mod palette;
pub mod post_match_view;
pub mod realtime_view;
pub mod settings;

pub use post_match_view::{
    PostMatchConfig, PostMatchView, Report, CONTROLLED_SUMMARY, HIGH_PRESSURE_SUMMARY,
};
pub use realtime_view::{RealTimeConfig, RealTimeView};
pub use settings::{show_settings_window, Settings};
