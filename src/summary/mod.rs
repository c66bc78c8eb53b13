//! Summary compiler.
//!
//! Two projections of the same selection: [`live_summary`] for the
//! at-a-glance panel and [`text_summary`] for the order report. Junction-box
//! figures come from [`jb::calculate`] in both.

pub mod jb;
mod live;
mod report;

pub use jb::{JbQuantity, JbSizing};
pub use live::{Derived, LiveSummary, live_summary};
pub use report::text_summary;
