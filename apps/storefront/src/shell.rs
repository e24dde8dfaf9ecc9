//! # Shell Protocol
//!
//! Line-oriented commands for driving a session from stdin.
//!
//! ```text
//! products                 cart                  session
//! add <id>                 update <id> <qty>     remove <id>
//! login <name>             logout                seller on|off
//! login-modal on|off       resize <width>        carousel
//! next                     prev                  goto <index>
//! help                     quit
//! ```
//!
//! Each line yields one JSON object: `{"ok": ...}` or `{"error": ...}`,
//! plus the toast raised by the command, if any.

use std::str::FromStr;

use serde::Serialize;

use crate::error::ApiError;
use crate::notify::Toast;

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Products,
    Session,
    Cart,
    Add(String),
    Update(String, i64),
    Remove(String),
    Login(String),
    Logout,
    Seller(bool),
    LoginModal(bool),
    Resize(u32),
    Carousel,
    Next,
    Prev,
    GoTo(usize),
    Help,
    Quit,
}

pub const USAGE: &str = "commands: products | session | cart | add <id> | update <id> <qty> | \
remove <id> | login <name> | logout | seller on|off | login-modal on|off | resize <width> | \
carousel | next | prev | goto <index> | help | quit";

impl FromStr for ShellCommand {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(ApiError::unknown_command("empty command"));
        };
        let args: Vec<&str> = words.collect();

        let command = match (head.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("products", []) => ShellCommand::Products,
            ("session", []) => ShellCommand::Session,
            ("cart", []) => ShellCommand::Cart,
            ("add", [id]) => ShellCommand::Add(id.to_string()),
            ("update", [id, qty]) => ShellCommand::Update(id.to_string(), parse_number(qty, "quantity")?),
            ("remove", [id]) => ShellCommand::Remove(id.to_string()),
            ("login", name) if !name.is_empty() => ShellCommand::Login(name.join(" ")),
            ("logout", []) => ShellCommand::Logout,
            ("seller", [flag]) => ShellCommand::Seller(parse_flag(flag)?),
            ("login-modal", [flag]) => ShellCommand::LoginModal(parse_flag(flag)?),
            ("resize", [width]) => ShellCommand::Resize(parse_number(width, "width")?),
            ("carousel", []) => ShellCommand::Carousel,
            ("next", []) => ShellCommand::Next,
            ("prev", []) => ShellCommand::Prev,
            ("goto", [index]) => ShellCommand::GoTo(parse_number(index, "slide index")?),
            ("help", _) => ShellCommand::Help,
            ("quit" | "exit", []) => ShellCommand::Quit,
            _ => return Err(ApiError::unknown_command(format!("cannot parse '{}'. {}", line.trim(), USAGE))),
        };
        Ok(command)
    }
}

fn parse_number<T: FromStr>(raw: &str, field: &str) -> Result<T, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::validation(format!("{} must be a number, got '{}'", field, raw)))
}

fn parse_flag(raw: &str) -> Result<bool, ApiError> {
    match raw {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        _ => Err(ApiError::validation(format!("expected on|off, got '{}'", raw))),
    }
}

/// JSON line written for every command.
#[derive(Debug, Serialize)]
pub struct ShellOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toast: Option<Toast>,
}

impl ShellOutput {
    pub fn from_result(result: Result<serde_json::Value, ApiError>, toast: Option<Toast>) -> Self {
        match result {
            Ok(value) => ShellOutput {
                ok: Some(value),
                error: None,
                toast,
            },
            Err(err) => ShellOutput {
                ok: None,
                error: Some(err),
                toast,
            },
        }
    }
}
