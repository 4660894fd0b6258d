//! Parsing of interactive stdin lines.
//!
//! ```text
//! Deposit received | 250 USDT credited to your balance
//! !Withdrawal failed | Insufficient balance => Retry:retry-withdrawal
//! Rate changed | 1 USDT => 0.98 EUR
//! /dismiss 3
//! /undo 4
//! /clear
//! /quit
//! ```

use herald_bridge::ToastCommand;
use herald_bridge::notification::{Action, NotificationRequest, ToastId};

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Raise a notification through the facade.
    Notify(NotificationRequest),
    /// Control the toast stack directly.
    Control(ToastCommand),
    Quit,
    /// Blank line.
    Nothing,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command `/{0}`")]
    UnknownCommand(String),
    #[error("`/{0}` expects a toast number")]
    MissingId(String),
    #[error("invalid toast number `{0}`")]
    InvalidId(String),
}

pub fn parse_line(line: &str) -> Result<Input, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Input::Nothing);
    }

    match line.strip_prefix('/') {
        Some(command) => parse_command(command),
        None => Ok(Input::Notify(parse_notification(line))),
    }
}

fn parse_command(command: &str) -> Result<Input, InputError> {
    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();

    match name {
        "quit" | "exit" => Ok(Input::Quit),
        "clear" => Ok(Input::Control(ToastCommand::Clear)),
        "dismiss" => parse_id(name, parts.next()).map(|id| Input::Control(ToastCommand::Dismiss(id))),
        "undo" | "action" => {
            parse_id(name, parts.next()).map(|id| Input::Control(ToastCommand::InvokeAction(id)))
        }
        _ => Err(InputError::UnknownCommand(name.to_string())),
    }
}

fn parse_id(command: &str, raw: Option<&str>) -> Result<ToastId, InputError> {
    let raw = raw.ok_or_else(|| InputError::MissingId(command.to_string()))?;
    raw.trim_start_matches('#')
        .parse::<u64>()
        .map(ToastId::from_raw)
        .map_err(|_| InputError::InvalidId(raw.to_string()))
}

fn parse_notification(line: &str) -> NotificationRequest {
    let mut request = NotificationRequest::new();

    let line = match line.strip_prefix('!') {
        Some(rest) => {
            request = request.destructive();
            rest
        }
        None => line,
    };

    // only a trailing `=> Label:key` is an action, any other `=>` is text
    let (text, action) = match line
        .rsplit_once("=>")
        .and_then(|(text, action)| Some((text, parse_action(action.trim())?)))
    {
        Some((text, action)) => (text, Some(action)),
        None => (line, None),
    };

    let (title, description) = match text.split_once('|') {
        Some((title, description)) => (title.trim(), description.trim()),
        None => (text.trim(), ""),
    };

    if !title.is_empty() {
        request = request.title(title);
    }
    if !description.is_empty() {
        request = request.description(description);
    }
    if let Some(action) = action {
        request = request.action(action);
    }

    request
}

fn parse_action(raw: &str) -> Option<Action> {
    match raw.split_once(':') {
        Some((label, key)) if !label.trim().is_empty() && !key.trim().is_empty() => {
            Some(Action::new(label.trim(), key.trim()))
        }
        _ => None,
    }
}
