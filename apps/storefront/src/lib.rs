//! Ministore storefront.
//!
//! Client-side rendered Leptos app:
//! - Catalog fetched once on mount from `/products.json`
//! - Paginated grid/list of products
//! - In-memory cart in a header dropdown, with toast notifications

mod app;
mod telemetry;

pub use app::App;

/// Install panic and log hooks, then mount the app on `<body>`.
pub fn start() {
    console_error_panic_hook::set_once();
    telemetry::init();
    leptos::mount::mount_to_body(App);
}
