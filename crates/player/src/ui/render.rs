//! Plain-text rendering of session state for the terminal

use chrono::Local;

use crate::application::services::{CharacterInfo, TraceCapture};
use crate::session_types::{ChatMessage, MessageKind};

/// One log line, timestamped in local time
pub fn message(message: &ChatMessage) -> String {
    let time = message.timestamp.with_timezone(&Local).format("%H:%M:%S");
    match message.kind {
        MessageKind::System => format!("[{time}] * {}", message.content),
        MessageKind::User => format!("[{time}] You: {}", message.content),
        MessageKind::Assistant => format!(
            "[{time}] {}: {}",
            message.character_label.as_deref().unwrap_or("Character"),
            message.content
        ),
        MessageKind::Error => format!("[{time}] ! {}", message.content),
    }
}

pub fn character_info(info: &CharacterInfo) -> String {
    let mut lines = vec![
        format!("Name:      {}", info.name),
        format!("Role:      {}", info.role),
        format!("Location:  {}", or_dash(&info.location)),
        format!("Mood:      {}", info.mood),
        format!("Axis:      {}", or_dash(&info.axis)),
        format!("Inventory: {}", or_dash(&info.inventory)),
    ];
    if !info.backstory.is_empty() {
        lines.push(format!("Backstory: {}", info.backstory));
    }
    lines.join("\n")
}

pub fn trace(trace: &TraceCapture) -> String {
    let info = &trace.character_info;
    let mut out = format!(
        "-- Character --\n{} ({}) at {}\nMood: {}\n",
        info.name,
        info.role,
        or_dash(&info.location),
        info.mood
    );
    out.push_str(&format!(
        "-- Retrieved context ({}) --\n",
        trace.retrieved_context.len()
    ));
    for (i, chunk) in trace.retrieved_context.iter().enumerate() {
        out.push_str(&format!("[{}] {}\n", i + 1, chunk));
    }
    out.push_str("-- Full prompt --\n");
    out.push_str(&trace.full_prompt);
    out
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::TraceCharacterInfo;
    use crate::infrastructure::testing::fixtures::{aria, at};

    #[test]
    fn test_message_prefixes() {
        assert!(message(&ChatMessage::user("Hello", at(0))).ends_with("] You: Hello"));
        assert!(
            message(&ChatMessage::assistant("Greetings!", "Aria", at(0)))
                .ends_with("] Aria: Greetings!")
        );
        assert!(message(&ChatMessage::error("boom", at(0))).ends_with("] ! boom"));
    }

    #[test]
    fn test_character_info_lines() {
        let text = character_info(&CharacterInfo::from(&aria()));
        assert!(text.contains("Mood:      joy (moderate)"));
        assert!(text.contains("Inventory: herbal pouch, silver amulet"));
        assert!(text.contains("Backstory: Raised by the river temple."));
    }

    #[test]
    fn test_trace_numbers_chunks() {
        let text = trace(&TraceCapture {
            character_info: TraceCharacterInfo {
                name: "Aria".into(),
                role: "Healer".into(),
                mood: "calm".into(),
                location: String::new(),
            },
            retrieved_context: vec!["first".into(), "second".into()],
            full_prompt: "You are Aria".into(),
        });
        assert!(text.contains("Aria (Healer) at -"));
        assert!(text.contains("[2] second"));
        assert!(text.ends_with("You are Aria"));
    }
}
