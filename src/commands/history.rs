//! History command handlers and display helpers

use crate::cli::HistoryCommand;
use crate::error::Result;
use crate::insights::TextInsights;
use crate::storage::{group_by_day, HistoryStore};
use colored::Colorize;
use prettytable::{format, Table};

/// Handle history subcommands
pub fn handle_history(store: &mut HistoryStore, command: HistoryCommand) -> Result<()> {
    match command {
        HistoryCommand::List => {
            print_history_table(store);
        }
        HistoryCommand::Show { id } => match store.find(id) {
            Some(interaction) => {
                println!();
                println!(
                    "{} {}  {}  {}",
                    "Interaction".bold(),
                    interaction.id.to_string().cyan(),
                    interaction.mode.colored_tag(),
                    interaction
                        .created_at
                        .with_timezone(&chrono::Local)
                        .format("%Y-%m-%d %H:%M")
                );
                println!();
                println!("{}", "Prompt:".bold());
                println!("{}", interaction.prompt);
                println!();
                println!("{}", "Output:".bold());
                println!("{}", interaction.output);
                println!();
                print_insights_table(&TextInsights::from_text(&interaction.output));
            }
            None => {
                println!("{}", format!("No interaction with id {}", id).yellow());
            }
        },
        HistoryCommand::Delete { id } => {
            if store.delete_by_id(id)? {
                println!("{}", format!("Deleted interaction {}", id).green());
            } else {
                println!("{}", format!("No interaction with id {}", id).yellow());
            }
        }
        HistoryCommand::Clear => {
            store.clear()?;
            println!("{}", "History cleared.".green());
        }
    }

    Ok(())
}

/// Print the stored history grouped by local calendar day
///
/// Newest entries come first within each group; groups appear in the
/// order their first entry appears in the list.
pub fn print_history_table(store: &HistoryStore) {
    if store.is_empty() {
        println!("{}", "No history found.".yellow());
        return;
    }

    for (day, entries) in group_by_day(store.entries()) {
        println!("\n{}", day.format("%A, %B %-d, %Y").to_string().bold());

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BORDERS_ONLY);

        table.add_row(prettytable::row![
            "ID".bold(),
            "Mode".bold(),
            "Prompt".bold(),
            "Words".bold(),
            "Time".bold()
        ]);

        for entry in entries {
            let words = TextInsights::from_text(&entry.output).word_count;
            let time = entry
                .created_at
                .with_timezone(&chrono::Local)
                .format("%H:%M")
                .to_string();

            table.add_row(prettytable::row![
                entry.id.to_string().cyan(),
                entry.mode.to_string(),
                truncate(&entry.prompt, 40),
                words,
                time
            ]);
        }

        table.printstd();
    }

    println!();
    println!(
        "Use {} to reload an entry's output.",
        "/load <ID>".cyan()
    );
    println!();
}

/// Print text insights as a table
pub fn print_insights_table(insights: &TextInsights) {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BORDERS_ONLY);

    table.add_row(prettytable::row!["Words", insights.word_count]);
    table.add_row(prettytable::row!["Characters", insights.char_count]);
    table.add_row(prettytable::row!["Paragraphs", insights.paragraph_count]);
    table.add_row(prettytable::row!["Sentences", insights.sentence_count]);
    table.add_row(prettytable::row![
        "Read time",
        format!("{} min", insights.read_time_minutes)
    ]);
    table.add_row(prettytable::row![
        "Words per sentence",
        insights.words_per_sentence
    ]);
    table.add_row(prettytable::row![
        "Density",
        format!("{}%", insights.density_percent)
    ]);

    table.printstd();
}

/// Truncate a string to `max` characters, appending an ellipsis
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        s.to_string()
    }
}
