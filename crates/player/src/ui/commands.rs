//! Line commands of the terminal client

use std::path::PathBuf;

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Universes,
    Universe(String),
    Characters,
    Character(String),
    Info,
    Debug,
    Trace,
    Clear,
    Roles,
    BuildIndex,
    ImportCharacter(PathBuf),
    ImportUniverse(PathBuf),
    Help,
    Quit,
    /// Anything that is not a command is a chat message
    Say(String),
    /// A known command missing its argument; carries the usage line
    Usage(&'static str),
    Unknown(String),
    Empty,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Command::Empty;
        }
        if matches!(trimmed, "exit" | "quit") {
            return Command::Quit;
        }
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Command::Say(line.trim_end_matches(['\r', '\n']).to_string());
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match name {
            "universes" => Command::Universes,
            "universe" => with_arg(arg, "/universe <name>", |a| Command::Universe(a.into())),
            "characters" => Command::Characters,
            "character" => with_arg(arg, "/character <name>", |a| Command::Character(a.into())),
            "info" => Command::Info,
            "debug" => Command::Debug,
            "trace" => Command::Trace,
            "clear" => Command::Clear,
            "roles" => Command::Roles,
            "build-index" => Command::BuildIndex,
            "import-character" => with_arg(arg, "/import-character <file.json>", |a| {
                Command::ImportCharacter(PathBuf::from(a))
            }),
            "import-universe" => with_arg(arg, "/import-universe <file.json>", |a| {
                Command::ImportUniverse(PathBuf::from(a))
            }),
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

fn with_arg(arg: &str, usage: &'static str, build: impl FnOnce(&str) -> Command) -> Command {
    if arg.is_empty() {
        Command::Usage(usage)
    } else {
        build(arg)
    }
}

pub const HELP: &str = "\
Commands:
  /universes                     list universes
  /universe <name>               select a universe and load its characters
  /characters                    list characters of the current universe
  /character <name>              start a conversation with a character
  /info                          show the current character
  /debug                         toggle debug mode (retrieval + prompt trace)
  /trace                         show the latest debug trace
  /clear                         restart the conversation
  /roles                         list roles of the current universe
  /build-index                   rebuild the retrieval index of the current universe
  /import-character <file.json>  create a character in the current universe
  /import-universe <file.json>   create a universe
  /help                          show this help
  /quit                          leave
Anything else is sent to the current character.";
