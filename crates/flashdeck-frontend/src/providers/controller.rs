use flashdeck::api::HttpApiClient;
use flashdeck::config::ClientConfig;
use flashdeck::controller::SessionFormController;
use flashdeck::session::SessionStore;

use crate::browser::{BrowserStorage, GlooTimer};
use crate::providers::api;
use crate::view::YewView;

pub type PageController = SessionFormController<HttpApiClient, BrowserStorage, YewView, GlooTimer>;

/// Wires the controller to the browser and to the page's view state.
pub fn create(view: YewView) -> PageController {
    let config = ClientConfig::from_build_env();
    flashdeck::debug!(api = %config.api_base_url, "Creating page controller");

    SessionFormController::new(
        api::create(&config),
        SessionStore::new(BrowserStorage::detect()),
        view,
        GlooTimer,
    )
    .with_clear_delay(config.status_clear_delay)
}
