use shared::ClientConfig;
use shared::config::BACKEND_URL_KEY;

/// Reads the backend origin baked in at build time (`BACKEND_URL=... trunk build`).
pub fn load() -> ClientConfig {
    let config = ClientConfig::from_lookup(|key| {
        (key == BACKEND_URL_KEY)
            .then(|| option_env!("BACKEND_URL"))
            .flatten()
            .map(str::to_string)
    });
    log::info!("Analysis backend: {}", config.backend_url);
    config
}
