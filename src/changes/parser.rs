use super::tokenizer::tokenize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The kind of output block a command appeared under, taken from the last
/// recognized `#` marker line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    CommandBlock,
    Chat,
    Setup,
    Manual,
}

impl Section {
    /// Recognizes a marker comment, case-insensitively.
    pub fn from_marker(line: &str) -> Option<Self> {
        let marker = line.to_lowercase();
        if marker.contains("command block") || marker.contains("controller") {
            Some(Section::CommandBlock)
        } else if marker.contains("in chat") {
            Some(Section::Chat)
        } else if marker.contains("setup") {
            Some(Section::Setup)
        } else if marker.contains("manual") {
            Some(Section::Manual)
        } else {
            None
        }
    }
}

/// One command line split into its shape and its values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedCommand {
    pub raw: String,
    /// Keyword and structural sub-tokens joined by `|`.
    pub structure: String,
    pub values: BTreeMap<String, String>,
    pub command_type: String,
    /// Leading bracket groups such as `[RUA]`.
    pub settings: Option<String>,
    pub section: Option<Section>,
}

/// Parses a multi-line command dump, skipping blank lines and comments.
pub fn parse_commands(text: &str) -> Vec<ParsedCommand> {
    let mut section = None;
    let mut commands = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with('#') {
            if let Some(marker) = Section::from_marker(line) {
                section = Some(marker);
            }
            continue;
        }
        let mut parsed = parse_command(line);
        parsed.section = section;
        commands.push(parsed);
    }
    commands
}

/// Parses a single command line.
pub fn parse_command(line: &str) -> ParsedCommand {
    let (settings, rest) = split_settings(line);
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    let parts = tokenize(rest);

    let command_type = parts.first().cloned().unwrap_or_default();
    let (mut structure, values) = classify(&command_type, &parts);
    if let Some(settings) = &settings {
        structure.insert(0, settings.clone());
    }

    ParsedCommand {
        raw: line.to_string(),
        structure: structure.join("|"),
        values,
        command_type,
        settings,
        section: None,
    }
}

/// Strips one or more adjacent leading `[...]` groups.
fn split_settings(line: &str) -> (Option<String>, &str) {
    let mut end = 0;
    while line[end..].starts_with('[') {
        match line[end..].find(']') {
            Some(close) => end += close + 1,
            None => break,
        }
    }
    if end == 0 {
        return (None, line);
    }
    (Some(line[..end].to_string()), line[end..].trim_start())
}

type Fields = BTreeMap<String, String>;

/// Splits tokens into structural parts and named value fields by keyword.
fn classify(keyword: &str, parts: &[String]) -> (Vec<String>, Fields) {
    let part = |i: usize| parts.get(i).cloned().unwrap_or_default();
    let span = |from: usize, to: usize| {
        let to = to.min(parts.len());
        if from >= to {
            String::new()
        } else {
            parts[from..to].join(" ")
        }
    };
    let tail = |from: usize| span(from, parts.len());

    let mut structure = vec![keyword.to_string()];
    let fields: Vec<(&str, String)> = match keyword {
        "give" => vec![("target", part(1)), ("item", part(2)), ("count", part(3))],
        "summon" => vec![("entity", part(1)), ("position", span(2, 5)), ("nbt", tail(5))],
        "say" => vec![("message", tail(1))],
        "tellraw" => vec![("target", part(1)), ("json", tail(2))],
        "tp" | "teleport" => {
            structure[0] = "tp".to_string();
            vec![("target", part(1)), ("destination", tail(2))]
        }
        "effect" => {
            structure.push(part(1));
            vec![
                ("target", part(2)),
                ("effect", part(3)),
                ("duration", part(4)),
                ("amplifier", part(5)),
            ]
        }
        "gamemode" => {
            structure.push(part(1));
            vec![("target", part(2))]
        }
        "setblock" => vec![("position", span(1, 4)), ("block", part(4)), ("mode", part(5))],
        "fill" => vec![
            ("from", span(1, 4)),
            ("to", span(4, 7)),
            ("block", part(7)),
            ("mode", part(8)),
        ],
        "execute" => match parts.iter().position(|p| p == "run") {
            Some(run) => {
                structure.extend(parts[1..=run].iter().cloned());
                vec![("command", tail(run + 1))]
            }
            None => {
                structure.extend(parts.iter().skip(1).cloned());
                Vec::new()
            }
        },
        "kill" => vec![("target", part(1))],
        "time" => {
            structure.push(part(1));
            vec![("value", part(2))]
        }
        "weather" => {
            structure.push(part(1));
            vec![("duration", part(2))]
        }
        _ => vec![("args", tail(1))],
    };

    let values = fields
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();
    (structure, values)
}
