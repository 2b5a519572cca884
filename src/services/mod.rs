// Service exports
pub mod charts;
pub mod export;
pub mod store;

pub use charts::{
    cooccurrence_heatmap_svg, png_data_uri, render_cooccurrence_heatmap, render_skill_bar_chart, skill_bar_chart_svg,
    ChartError,
};
pub use export::{analytics_csv, ExportError};
pub use store::{SqliteStore, StoreError};
