//! # Dashboard Command
//!
//! KPI cards on the admin dashboard, computed fresh on every call.

use tracing::debug;

use crate::state::{AdminState, ConfigState};
use qrpos_core::dashboard::DashboardSummary;

/// "Today" is taken in the store's configured UTC offset.
pub fn get_dashboard(admin: &AdminState, config: &ConfigState) -> DashboardSummary {
    debug!("get_dashboard command");
    let today = config.today();
    let offset = config.utc_offset();
    admin.with_stores(|s| {
        DashboardSummary::compute(s.catalog.products(), s.orders.orders(), today, offset)
    })
}
