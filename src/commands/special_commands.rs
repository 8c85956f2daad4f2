//! Special commands parser for the interactive session
//!
//! This module parses special commands entered during interactive
//! sessions. Special commands allow users to:
//! - Switch between content modes
//! - Browse and reload history entries
//! - Inspect text insights for the current output
//! - Save, copy, or share the current output
//! - Change the display theme
//! - Display help information and exit the session
//!
//! Commands are prefixed with `/` and are case-insensitive.

use crate::mode::ContentMode;
use crate::storage::Theme;
use thiserror::Error;

/// Errors that can occur when parsing special commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command was entered
    #[error("Unknown command: {0}\n\nType '/help' to see available commands")]
    UnknownCommand(String),

    /// Command was given an unsupported argument
    #[error("Unsupported argument for {command}: {arg}\n\nType '/help' to see valid usage")]
    UnsupportedArgument { command: String, arg: String },

    /// Command requires an argument but none was provided
    #[error("Command {command} requires an argument\n\nUsage: {usage}")]
    MissingArgument { command: String, usage: String },
}

/// Special commands that can be executed during an interactive session
///
/// These commands modify session state or display information rather
/// than being submitted to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialCommand {
    /// Switch to a different content mode
    SwitchMode(ContentMode),

    /// Display the stored history grouped by day
    ShowHistory,

    /// Load a stored interaction's output into the session
    Load(u64),

    /// Delete a stored interaction
    Delete(u64),

    /// Display text insights for the current output
    Stats,

    /// Save the current output to a text file
    Save,

    /// Copy the current output to the clipboard
    Copy,

    /// Share the current output (copies to clipboard in a terminal)
    Share,

    /// Show the current display theme
    ShowTheme,

    /// Switch the display theme
    SwitchTheme(Theme),

    /// Display help information
    Help,

    /// Exit the interactive session
    Exit,

    /// Not a special command
    ///
    /// The input should be submitted as a generation prompt.
    None,
}

/// Parse a user input string into a special command
///
/// Checks if the input matches any special command pattern.
/// Commands are case-insensitive and may have shorthand aliases.
///
/// # Arguments
///
/// * `input` - The user input string to parse
///
/// # Returns
///
/// Returns Ok(SpecialCommand) for valid commands or SpecialCommand::None
/// for non-commands. Returns Err(CommandError) for invalid commands or
/// invalid arguments.
///
/// # Examples
///
/// ```
/// use draftgen::commands::special_commands::{parse_special_command, SpecialCommand};
/// use draftgen::mode::ContentMode;
///
/// let cmd = parse_special_command("/mode summary").unwrap();
/// assert_eq!(cmd, SpecialCommand::SwitchMode(ContentMode::Summary));
///
/// let cmd = parse_special_command("a post about rust").unwrap();
/// assert_eq!(cmd, SpecialCommand::None);
///
/// assert!(parse_special_command("/foo").is_err());
/// ```
pub fn parse_special_command(input: &str) -> Result<SpecialCommand, CommandError> {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();

    // If input doesn't start with "/", it's not a command (except exit/quit)
    if !trimmed.starts_with('/') && lower != "exit" && lower != "quit" {
        return Ok(SpecialCommand::None);
    }

    match lower.as_str() {
        // Content mode switching with shorthands
        "/blog" => Ok(SpecialCommand::SwitchMode(ContentMode::Blog)),
        "/instagram" | "/insta" => Ok(SpecialCommand::SwitchMode(ContentMode::Instagram)),
        "/youtube" | "/yt" => Ok(SpecialCommand::SwitchMode(ContentMode::YouTube)),
        "/summary" => Ok(SpecialCommand::SwitchMode(ContentMode::Summary)),

        "/mode" => Err(CommandError::MissingArgument {
            command: "/mode".to_string(),
            usage: "/mode <blog|instagram|youtube|summary>".to_string(),
        }),
        input if input.starts_with("/mode ") => {
            let arg = input[6..].trim();
            match ContentMode::parse_str(arg) {
                Ok(mode) => Ok(SpecialCommand::SwitchMode(mode)),
                Err(_) => Err(CommandError::UnsupportedArgument {
                    command: "/mode".to_string(),
                    arg: arg.to_string(),
                }),
            }
        }

        // History browsing
        "/history" => Ok(SpecialCommand::ShowHistory),

        "/load" => Err(CommandError::MissingArgument {
            command: "/load".to_string(),
            usage: "/load <id>".to_string(),
        }),
        input if input.starts_with("/load ") => {
            let arg = input[6..].trim();
            match arg.parse::<u64>() {
                Ok(id) => Ok(SpecialCommand::Load(id)),
                Err(_) => Err(CommandError::UnsupportedArgument {
                    command: "/load".to_string(),
                    arg: arg.to_string(),
                }),
            }
        }

        "/delete" => Err(CommandError::MissingArgument {
            command: "/delete".to_string(),
            usage: "/delete <id>".to_string(),
        }),
        input if input.starts_with("/delete ") => {
            let arg = input[8..].trim();
            match arg.parse::<u64>() {
                Ok(id) => Ok(SpecialCommand::Delete(id)),
                Err(_) => Err(CommandError::UnsupportedArgument {
                    command: "/delete".to_string(),
                    arg: arg.to_string(),
                }),
            }
        }

        // Output actions
        "/stats" => Ok(SpecialCommand::Stats),
        "/save" => Ok(SpecialCommand::Save),
        "/copy" => Ok(SpecialCommand::Copy),
        "/share" => Ok(SpecialCommand::Share),

        // Theme handling
        "/theme" => Ok(SpecialCommand::ShowTheme),
        input if input.starts_with("/theme ") => {
            let arg = input[7..].trim();
            match Theme::parse_str(arg) {
                Some(theme) => Ok(SpecialCommand::SwitchTheme(theme)),
                None => Err(CommandError::UnsupportedArgument {
                    command: "/theme".to_string(),
                    arg: arg.to_string(),
                }),
            }
        }

        // Help and session control
        "/help" | "/?" => Ok(SpecialCommand::Help),
        "exit" | "quit" | "/exit" | "/quit" => Ok(SpecialCommand::Exit),

        // Unknown command starting with "/"
        input if input.starts_with('/') => {
            let cmd = input.split_whitespace().next().unwrap_or(input);
            Err(CommandError::UnknownCommand(cmd.to_string()))
        }

        // Not a special command
        _ => Ok(SpecialCommand::None),
    }
}

/// Display help text for special commands
///
/// Shows all available special commands with their descriptions
/// and usage examples.
///
/// # Examples
///
/// ```
/// use draftgen::commands::special_commands::print_help;
///
/// print_help();
/// ```
pub fn print_help() {
    println!(
        r#"
Special Commands for Interactive Sessions
=========================================

CONTENT MODE SWITCHING:
  /mode <name>    - Switch content mode (blog, instagram, youtube, summary)
  /blog           - Shorthand for /mode blog
  /instagram      - Shorthand for /mode instagram (also /insta)
  /youtube        - Shorthand for /mode youtube (also /yt)
  /summary        - Shorthand for /mode summary

HISTORY:
  /history        - List stored interactions grouped by day
  /load <id>      - Load a stored interaction's output into the session
  /delete <id>    - Delete a stored interaction

OUTPUT ACTIONS:
  /stats          - Show text insights for the current output
  /save           - Save the current output to a text file
  /copy           - Copy the current output to the clipboard
  /share          - Share the current output (copies to clipboard)

DISPLAY:
  /theme          - Show the current display theme
  /theme <value>  - Set the display theme (light, dark)

SESSION INFORMATION:
  /help           - Show this help message
  /?              - Same as /help

SESSION CONTROL:
  exit            - Exit the session
  quit            - Same as exit

NOTES:
  - Commands are case-insensitive
  - Regular text (not starting with /) is submitted for generation
  - Input longer than 2000 characters is truncated before submission
  - Only successful generations are recorded in history
"#
    );
}
