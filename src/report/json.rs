use serde::Serialize;

use crate::engine::DrillDown;
use crate::model::config::EngineConfig;

#[derive(Debug, Serialize)]
struct DrillDownReport<'r, 'a> {
    tool: &'static str,
    version: &'static str,
    config: &'r EngineConfig,
    drilldown: &'r DrillDown<'a>,
}

pub fn render_drilldown_json(
    drill: &DrillDown<'_>,
    config: &EngineConfig,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&DrillDownReport {
        tool: "kira-chemprot",
        version: env!("CARGO_PKG_VERSION"),
        config,
        drilldown: drill,
    })
}
