//! PersonaForge - terminal composition root binary.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use personaforge_player::application::services::{
    CharacterService, SessionController, UniverseService,
};
use personaforge_player::application::Api;
use personaforge_player::infrastructure::{HttpApiAdapter, SystemClock};
use personaforge_player::ports::outbound::PersonaApiPort;
use personaforge_player::runner::{self, RunnerDeps};
use personaforge_player::PlayerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Before the subscriber, so RUST_LOG from .env applies
    let dotenv_failures = load_dotenv([".env.local", ".env"]);

    // Logs go to stderr so they never interleave with the chat on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "personaforge_player=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    for (path, error) in &dotenv_failures {
        tracing::warn!(path = %path.display(), error = %error, "Ignoring unreadable env file");
    }

    let config = PlayerConfig::from_env()?;
    tracing::info!(
        api_url = %config.api_url,
        timeout_secs = config.request_timeout.as_secs(),
        debug = config.debug,
        "Starting PersonaForge"
    );

    // HTTP
    let raw_api = Arc::new(HttpApiAdapter::new(
        config.api_url.as_str(),
        config.request_timeout,
    ));
    let api: Arc<dyn PersonaApiPort> = Arc::new(Api::new(raw_api));

    let controller = Arc::new(SessionController::new(
        api.clone(),
        Arc::new(SystemClock),
        config.debug,
    ));

    runner::run(RunnerDeps {
        characters: CharacterService::new(api.clone()),
        universes: UniverseService::new(api.clone()),
        api,
        controller,
        config,
    })
    .await
}

/// Load existing env files in order (earlier files win) and return the ones
/// that failed to parse
fn load_dotenv<P: AsRef<Path>>(
    files: impl IntoIterator<Item = P>,
) -> Vec<(PathBuf, dotenvy::Error)> {
    let mut failures = Vec::new();
    for file in files {
        let path = file.as_ref();
        if !path.exists() {
            continue;
        }
        if let Err(e) = dotenvy::from_path(path) {
            failures.push((path.to_path_buf(), e));
        }
    }
    failures
}
