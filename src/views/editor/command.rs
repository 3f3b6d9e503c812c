//! 平台编辑命令 → 后端命令名

/// Commands the host handles itself; nothing is sent to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeCommand {
    Copy,
    Cut,
    Paste,
    CancelOperation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Native(NativeCommand),
    /// Sent to the backend under this name.
    Forwarded(String),
    /// Alert the user; nothing was sent.
    Beep,
}

const NATIVE_COMMANDS: &[(&str, NativeCommand)] = &[
    ("copy:", NativeCommand::Copy),
    ("cut:", NativeCommand::Cut),
    ("paste:", NativeCommand::Paste),
    ("cancelOperation:", NativeCommand::CancelOperation),
];

const NOOP: &str = "noop:";

impl NativeCommand {
    pub fn from_selector(selector: &str) -> Option<Self> {
        NATIVE_COMMANDS
            .iter()
            .find(|(name, _)| *name == selector)
            .map(|(_, cmd)| *cmd)
    }

    pub fn selector(&self) -> &'static str {
        match self {
            NativeCommand::Copy => "copy:",
            NativeCommand::Cut => "cut:",
            NativeCommand::Paste => "paste:",
            NativeCommand::CancelOperation => "cancelOperation:",
        }
    }
}

/// `insertNewline:` → `insert_newline`.
pub fn command_name(selector: &str) -> String {
    let symbol = selector.trim_end_matches(':');
    let mut name = String::with_capacity(symbol.len() + 4);
    for (i, ch) in symbol.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                name.push('_');
            }
            name.extend(ch.to_lowercase());
        } else {
            name.push(ch);
        }
    }
    name
}

/// Decides what a platform command does without performing it.
pub fn translate(selector: &str) -> CommandOutcome {
    if selector == NOOP {
        return CommandOutcome::Beep;
    }
    if let Some(cmd) = NativeCommand::from_selector(selector) {
        return CommandOutcome::Native(cmd);
    }
    let name = command_name(selector);
    if name.is_empty() {
        return CommandOutcome::Beep;
    }
    CommandOutcome::Forwarded(name)
}

#[cfg(test)]
#[path = "../../../tests/unit/views/editor/command.rs"]
mod tests;
