//! Glue to the browser libraries the page loads: Chart.js and the Netlify
//! Identity widget. Both are driven through `document::eval`.

mod chart;
mod identity;

pub use chart::{CHART_CANVAS_ID, ChartJsSurface, chart_config};
pub use identity::NetlifyIdentity;

pub(crate) const CHART_JS_SRC: &str = "https://cdn.jsdelivr.net/npm/chart.js";
pub(crate) const IDENTITY_WIDGET_SRC: &str =
    "https://identity.netlify.com/v1/netlify-identity-widget.js";

/// How long a bridge waits for a CDN library before treating it as missing.
const LIBRARY_WAIT_MS: u32 = 10_000;
const LIBRARY_POLL_MS: u32 = 100;

/// Defines `waitForGlobal(name)`. The page injects its `<script>` tags after
/// mount, so libraries show up on `window` some time later; the helper polls
/// until the global appears and resolves to `null` after `LIBRARY_WAIT_MS`.
pub(crate) fn wait_for_global_js() -> String {
    format!(
        r#"const waitForGlobal = async (name) => {{
    for (let waited = 0; !window[name] && waited < {LIBRARY_WAIT_MS}; waited += {LIBRARY_POLL_MS}) {{
        await new Promise((resolve) => setTimeout(resolve, {LIBRARY_POLL_MS}));
    }}
    return window[name] || null;
}};"#
    )
}

/// Smooth-scroll an element into view if it exists.
pub(crate) fn scroll_into_view_script(element_id: &str) -> String {
    format!(
        r#"const el = document.getElementById({element_id:?});
if (el) {{ el.scrollIntoView({{ behavior: "smooth" }}); }}"#
    )
}
