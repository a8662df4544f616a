//! Model-identifier formatting for OpenClaw.

use crate::constants::{ROUTING_PREFIX, SMART_ROUTER_ID};

/// Translates a catalog identifier into OpenClaw's namespaced form.
///
/// OpenClaw requires the full provider path for every model:
/// `openrouter/<author>/<model>` for regular models, and
/// `openrouter/openrouter/free` for the smart router, where "openrouter" is
/// both the routing prefix and the provider name inside the catalog id.
/// Formatting an already-formatted identifier is a no-op.
pub fn format_model_id(model_id: &str) -> String {
    if model_id == SMART_ROUTER_ID || model_id == "openrouter/free:free" {
        return format!("{ROUTING_PREFIX}{SMART_ROUTER_ID}");
    }

    if model_id.starts_with(ROUTING_PREFIX) {
        return model_id.to_string();
    }

    format!("{ROUTING_PREFIX}{model_id}")
}
