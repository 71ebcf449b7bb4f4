//! On-demand entry point for the archival sweep.
//!
//! The same sweep the watch daemon runs daily, invokable directly. Safe to
//! re-run; a pass with nothing newly qualifying archives zero rows.

use crate::libs::lifecycle::Lifecycle;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    Lifecycle::new()?.archive_overdue()?;
    Ok(())
}
