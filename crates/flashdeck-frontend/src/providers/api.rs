use flashdeck::api::{FlashcardApi, HttpApiClient};
use flashdeck::config::ClientConfig;

/// API client pointed at the configured flashcard server.
pub fn create(config: &ClientConfig) -> FlashcardApi<HttpApiClient> {
    let mut client = HttpApiClient::new(config.api_base_url.as_str());
    client.set_header("Accept".to_string(), "application/json".to_string());
    FlashcardApi::new(client)
}
