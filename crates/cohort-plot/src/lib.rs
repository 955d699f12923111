//! Cohort plots.
//!
//! Builders ([`distribution_figure`], [`age_bmi_scatter`], [`bmi_by_gender`])
//! turn a normalized projection into a [`Figure`]; [`render_svg`] draws it.

pub mod distribution;
pub mod error;
pub mod figure;
pub mod relationship;
pub mod render;

pub use distribution::{DISTRIBUTION_COLUMNS, category_counts, distribution_figure};
pub use error::{PlotError, Result};
pub use figure::{BoxGroup, Figure, Palette, Panel, PanelKind};
pub use relationship::{age_bmi_scatter, bmi_by_gender};
pub use render::{draw_figure, figure_size, render_svg};
