//! Report data structures for commands.
//!
//! Commands build reports, then render them to an [`Output`] target.

mod check;
mod output;
mod render;

pub use check::CheckReport;
pub use output::{Report, TerminalOutput};
pub use render::RenderReport;
