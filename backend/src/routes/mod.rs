//! View-model types returned to the dashboard frontend.
//!
//! Each module holds the serializable shapes behind one visualization.

pub mod category;
pub mod dashboard;
pub mod discrepancy;
pub mod flow;
pub mod heatmap;
pub mod landing;
pub mod pareto;
pub mod timeline;
pub mod timezone;
