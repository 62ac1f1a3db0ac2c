use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use personaforge_domain::UniverseName;
use personaforge_shared::{CharacterData, CreateUniverseRequest};

use crate::application::services::{
    CharacterDraft, CharacterService, SessionController, SubmitOutcome, UniverseDraft,
    UniverseService,
};
use crate::config::PlayerConfig;
use crate::ports::outbound::PersonaApiPort;
use crate::session_types::SessionState;
use crate::ui::{render, Command, HELP};

pub struct RunnerDeps {
    pub api: Arc<dyn PersonaApiPort>,
    pub controller: Arc<SessionController>,
    pub characters: CharacterService,
    pub universes: UniverseService,
    pub config: PlayerConfig,
}

/// Run the line-oriented client until `/quit` or end of input
pub async fn run(deps: RunnerDeps) -> anyhow::Result<()> {
    let RunnerDeps {
        api,
        controller,
        characters,
        universes,
        config,
    } = deps;

    println!("PersonaForge - connected to {}", config.api_url);
    match api.health().await {
        Ok(health) => info!(status = %health.status, "API health check"),
        Err(e) => {
            warn!(error = %e, "API health check failed");
            println!("! API not reachable: {}", e.detail());
        }
    }
    if config.debug {
        println!("Debug mode is on.");
    }
    println!("Type /help for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = Command::parse(&line);
        if command == Command::Quit {
            break;
        }
        if let Err(e) = handle(command, &controller, &characters, &universes).await {
            println!("! {e:#}");
        }
    }

    info!("Leaving PersonaForge");
    Ok(())
}

async fn handle(
    command: Command,
    controller: &Arc<SessionController>,
    characters: &CharacterService,
    universes: &UniverseService,
) -> anyhow::Result<()> {
    match command {
        Command::Empty | Command::Quit => {}
        Command::Help => println!("{HELP}"),
        Command::Usage(usage) => println!("Usage: {usage}"),
        Command::Unknown(name) => println!("Unknown command '/{name}'. Type /help."),

        Command::Universes => {
            let names = controller.list_universes().await?;
            if names.is_empty() {
                println!("No universes yet. Create one with /import-universe <file.json>.");
            }
            for name in names {
                println!("  {name}");
            }
        }
        Command::Universe(name) => {
            let universe = UniverseName::new(name)?;
            let count = controller.select_universe(universe.clone()).await?;
            println!("Universe '{universe}': {count} character(s). Pick one with /character <name>.");
        }
        Command::Characters => {
            let names = controller.catalog_names().await;
            if names.is_empty() {
                println!("No characters loaded. Select a universe with /universe <name>.");
            }
            for name in names {
                println!("  {name}");
            }
        }
        Command::Character(name) => {
            controller.select_character(&name).await?;
            print_log(controller).await;
        }
        Command::Info => match controller.character_info().await {
            Some(info) => println!("{}", render::character_info(&info)),
            None => println!("No character selected."),
        },
        Command::Debug => {
            let enabled = controller.toggle_debug().await;
            println!("Debug mode {}.", if enabled { "on" } else { "off" });
        }
        Command::Trace => match controller.snapshot().await.trace {
            Some(trace) => println!("{}", render::trace(&trace)),
            None => println!("No debug trace. Enable /debug and send a message."),
        },
        Command::Clear => {
            controller.clear().await;
            print_log(controller).await;
        }
        Command::Roles => {
            let universe = current_universe(controller).await?;
            for role in characters.roles(&universe).await? {
                println!("  {} - {}", role.name, role.description);
            }
        }
        Command::BuildIndex => {
            let universe = current_universe(controller).await?;
            println!("Building index for '{universe}'...");
            println!("{}", universes.build_index(&universe).await?);
        }
        Command::ImportCharacter(path) => {
            let universe = current_universe(controller).await?;
            let data: CharacterData = read_json(&path).await?;
            let draft = CharacterDraft::from_data(data)?;
            println!("{}", characters.create(&universe, &draft).await?);
            controller.refresh_catalog().await?;
        }
        Command::ImportUniverse(path) => {
            let request: CreateUniverseRequest = read_json(&path).await?;
            println!("{}", universes.create(&UniverseDraft::from(request)).await?);
        }
        Command::Say(text) => say(controller, text).await,
    }
    Ok(())
}

/// Submit in the background so input keeps flowing while the reply is pending
async fn say(controller: &Arc<SessionController>, text: String) {
    match controller.state().await {
        SessionState::Idle => {
            println!("Select a character first with /character <name>.");
            return;
        }
        SessionState::Pending => {
            println!("Still waiting for the previous reply.");
            return;
        }
        SessionState::Ready => {}
    }

    let controller = Arc::clone(controller);
    tokio::spawn(async move {
        match controller.submit(&text).await {
            SubmitOutcome::Resolved(message) => println!("{}", render::message(&message)),
            SubmitOutcome::Ignored | SubmitOutcome::Discarded => {}
        }
    });
}

async fn print_log(controller: &SessionController) {
    for message in controller.snapshot().await.messages {
        println!("{}", render::message(&message));
    }
}

async fn current_universe(controller: &SessionController) -> anyhow::Result<UniverseName> {
    controller
        .current_universe()
        .await
        .context("Select a universe first with /universe <name>")
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
