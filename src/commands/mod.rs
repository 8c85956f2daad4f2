/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes the top-level command modules:

- `chat`     — Interactive generation session
- `generate` — One-shot generation for a single prompt
- `history`  — History listing and management
- `export`   — Saving, copying, and sharing output

These handlers are intentionally small and use the library components:
providers, storage, and the session controller.
*/

// Special commands parser for the interactive session
pub mod special_commands;

// History command handlers and display helpers
pub mod history;

// Output export helpers
pub mod export;

// Chat command handler
pub mod chat {
    //! Interactive session handler.
    //!
    //! Instantiates the provider and history store, creates a
    //! `SessionController`, and runs a readline-based loop that submits
    //! user input for generation. Lines starting with `/` are handled
    //! as special commands.

    use crate::commands::special_commands::{parse_special_command, print_help, SpecialCommand};
    use crate::commands::{export, history};
    use crate::config::Config;
    use crate::error::{DraftgenError, Result};
    use crate::insights::TextInsights;
    use crate::mode::ContentMode;
    use crate::providers::create_provider;
    use crate::session::{clip_input, SessionController, SubmitOutcome, MAX_INPUT_CHARS};
    use crate::storage::{HistoryStore, Theme};

    use colored::Colorize;
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;

    /// Start an interactive generation session
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    /// * `provider_name` - Optional override for the configured provider
    /// * `mode` - Optional override for the starting content mode
    ///
    /// # Examples
    ///
    /// ```
    /// use draftgen::commands::chat;
    /// use draftgen::config::Config;
    ///
    /// // In application code:
    /// // chat::run_chat(Config::default(), None, None).await?;
    /// ```
    pub async fn run_chat(
        config: Config,
        provider_name: Option<String>,
        mode: Option<String>,
    ) -> Result<()> {
        tracing::info!("Starting interactive session");

        let provider_type = provider_name
            .as_deref()
            .unwrap_or(&config.provider.provider_type);
        let provider = create_provider(provider_type, &config.provider)?;

        let initial_mode = match mode.as_deref() {
            Some(m) => ContentMode::parse_str(m).map_err(DraftgenError::Config)?,
            None => config.default_mode(),
        };

        let store = HistoryStore::open(&config.history)?;
        let mut session = SessionController::new(store, initial_mode);

        let mut rl = DefaultEditor::new()?;

        print_welcome_banner(initial_mode, provider.name(), session.history().theme());

        loop {
            let prompt = format!("{} draftgen> ", session.mode().colored_tag());
            match rl.readline(&prompt) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }

                    // Check for special commands first
                    match parse_special_command(trimmed) {
                        Ok(SpecialCommand::SwitchMode(new_mode)) => {
                            session.set_mode(new_mode);
                            println!(
                                "Switched to {} mode: {}\n",
                                new_mode,
                                new_mode.description()
                            );
                            continue;
                        }
                        Ok(SpecialCommand::ShowHistory) => {
                            history::print_history_table(session.history());
                            continue;
                        }
                        Ok(SpecialCommand::Load(id)) => {
                            if session.select_history_item(id) {
                                println!("\n{}\n", session.output());
                            } else {
                                println!(
                                    "{}",
                                    format!("No interaction with id {}", id).yellow()
                                );
                            }
                            continue;
                        }
                        Ok(SpecialCommand::Delete(id)) => {
                            if session.history_mut().delete_by_id(id)? {
                                println!("{}", format!("Deleted interaction {}", id).green());
                            } else {
                                println!(
                                    "{}",
                                    format!("No interaction with id {}", id).yellow()
                                );
                            }
                            continue;
                        }
                        Ok(SpecialCommand::Stats) => {
                            if session.output().is_empty() {
                                println!("{}", "No output to analyze yet.".yellow());
                            } else {
                                history::print_insights_table(&TextInsights::from_text(
                                    session.output(),
                                ));
                            }
                            continue;
                        }
                        Ok(SpecialCommand::Save) => {
                            if session.output().is_empty() {
                                println!("{}", "No output to save yet.".yellow());
                            } else {
                                match export::save_output(
                                    session.output(),
                                    &std::env::current_dir()?,
                                ) {
                                    Ok(path) => println!(
                                        "{}",
                                        format!("Saved to {}", path.display()).green()
                                    ),
                                    Err(e) => eprintln!("{}", format!("Error: {}", e).red()),
                                }
                            }
                            continue;
                        }
                        Ok(SpecialCommand::Copy) => {
                            if session.output().is_empty() {
                                println!("{}", "No output to copy yet.".yellow());
                            } else {
                                match export::copy_to_clipboard(session.output()) {
                                    Ok(()) => {
                                        println!("{}", "Copied to clipboard.".green())
                                    }
                                    Err(e) => eprintln!("{}", format!("Error: {}", e).red()),
                                }
                            }
                            continue;
                        }
                        Ok(SpecialCommand::Share) => {
                            if session.output().is_empty() {
                                println!("{}", "No output to share yet.".yellow());
                            } else if let Err(e) = export::share_output(session.output()) {
                                eprintln!("{}", format!("Error: {}", e).red());
                            }
                            continue;
                        }
                        Ok(SpecialCommand::ShowTheme) => {
                            println!("Current theme: {}", session.history().theme());
                            continue;
                        }
                        Ok(SpecialCommand::SwitchTheme(theme)) => {
                            session.history().set_theme(theme)?;
                            println!("Theme set to {}\n", theme);
                            continue;
                        }
                        Ok(SpecialCommand::Help) => {
                            print_help();
                            continue;
                        }
                        Ok(SpecialCommand::Exit) => break,
                        Ok(SpecialCommand::None) => {
                            // Regular generation prompt
                        }
                        Err(e) => {
                            eprintln!("{}", e.to_string().red());
                            continue;
                        }
                    }

                    rl.add_history_entry(trimmed)?;

                    let input = clip_input(trimmed);
                    if input.len() < trimmed.len() {
                        println!(
                            "{}",
                            format!("Input truncated to {} characters", MAX_INPUT_CHARS).yellow()
                        );
                    }
                    session.set_input(input);

                    println!("{}", "Generating...".cyan());

                    match session.submit(provider.as_ref()).await? {
                        SubmitOutcome::Generated => {
                            println!("\n{}\n", session.output());
                        }
                        SubmitOutcome::Failed => {
                            eprintln!("{}\n", session.output().red());
                        }
                        SubmitOutcome::RejectedEmptyInput | SubmitOutcome::RejectedBusy => {}
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {:?}", err);
                    break;
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Display welcome banner at the start of an interactive session
    fn print_welcome_banner(mode: ContentMode, provider_name: &str, theme: Theme) {
        println!();
        println!("{}", "draftgen - AI content generation".bold());
        println!("Provider: {}  Mode: {}  Theme: {}", provider_name.cyan(), mode, theme);
        println!("Type a topic to generate content, or '/help' for commands.");
        println!();
    }
}

// One-shot generation handler
pub mod generate {
    //! One-shot generation handler.
    //!
    //! Generates content for a single prompt, records it in history,
    //! and optionally prints insights or saves the output to a file.

    use crate::commands::{export, history};
    use crate::config::Config;
    use crate::error::{DraftgenError, Result};
    use crate::insights::TextInsights;
    use crate::mode::ContentMode;
    use crate::providers::create_provider;
    use crate::session::{clip_input, SessionController, SubmitOutcome};
    use crate::storage::HistoryStore;

    use colored::Colorize;

    /// Generate content for a single prompt and exit
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    /// * `prompt` - The topic or description to generate content for
    /// * `mode` - Optional override for the content mode
    /// * `provider_name` - Optional override for the configured provider
    /// * `stats` - Print text insights for the generated output
    /// * `save` - Save the generated output to a text file
    ///
    /// # Errors
    ///
    /// Returns error if the prompt is blank or generation fails.
    pub async fn run_generate(
        config: Config,
        prompt: String,
        mode: Option<String>,
        provider_name: Option<String>,
        stats: bool,
        save: bool,
    ) -> Result<()> {
        let provider_type = provider_name
            .as_deref()
            .unwrap_or(&config.provider.provider_type);
        let provider = create_provider(provider_type, &config.provider)?;

        let mode = match mode.as_deref() {
            Some(m) => ContentMode::parse_str(m).map_err(DraftgenError::Config)?,
            None => config.default_mode(),
        };

        let store = HistoryStore::open(&config.history)?;
        let mut session = SessionController::new(store, mode);
        session.set_input(clip_input(&prompt));

        match session.submit(provider.as_ref()).await? {
            SubmitOutcome::Generated => {
                println!("{}", session.output());

                if stats {
                    println!();
                    history::print_insights_table(&TextInsights::from_text(session.output()));
                }

                if save {
                    let path = export::save_output(session.output(), &std::env::current_dir()?)?;
                    eprintln!("{}", format!("Saved to {}", path.display()).green());
                }

                Ok(())
            }
            SubmitOutcome::Failed => {
                eprintln!("{}", session.output().red());
                Err(DraftgenError::Provider("generation failed".to_string()).into())
            }
            SubmitOutcome::RejectedEmptyInput | SubmitOutcome::RejectedBusy => {
                Err(DraftgenError::Config("prompt cannot be empty".to_string()).into())
            }
        }
    }
}
