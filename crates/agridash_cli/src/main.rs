//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `agridash_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use agridash_core::DashboardSession;

fn main() {
    let session = DashboardSession::new();
    let overview = session.esg_view();

    println!("agridash_core ping={}", agridash_core::ping());
    println!("agridash_core version={}", agridash_core::core_version());
    println!("esg_segments={}", overview.segments.len());
    for insight in session.quick_insights() {
        println!("category={} total={}", insight.category, insight.total);
    }
}
