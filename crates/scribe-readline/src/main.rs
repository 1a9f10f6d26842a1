mod cli;
mod command;
mod helper;
mod logging;
mod render;
mod repl;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;

use scribe_application::BlogApp;
use scribe_core::BlogApi;
use scribe_interaction::HttpBlogApi;

use crate::cli::Cli;
use crate::command::Command;
use crate::helper::CliHelper;
use crate::repl::Reply;

/// Entry point of the scribe REPL.
///
/// Resolves the configuration, loads posts and comments once, then reads
/// commands until `quit` or end of input. Every command that may change
/// state reprints the current view.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let config = cli.resolve_config()?;
    tracing::info!("[Scribe] Using blog API at {}", config.base_url);

    let api: Arc<dyn BlogApi> = Arc::new(HttpBlogApi::from_config(&config));
    let mut app = BlogApp::new(api);
    app.load().await;

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "=== Scribe ===".bright_magenta().bold());
    println!(
        "{}",
        format!("Connected to {}. Type '/help' for commands or 'quit' to exit.", config.base_url)
            .bright_black()
    );
    println!();
    println!("{}", render::render_view(&app.view()));

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if command::is_history_safe(trimmed) {
                    let _ = rl.add_history_entry(&line);
                }

                let command = match Command::parse(trimmed) {
                    Ok(command) => command,
                    Err(e) => {
                        println!("{}", e.to_string().red());
                        continue;
                    }
                };

                match repl::dispatch(&mut app, command).await {
                    Reply::View => {
                        println!();
                        println!("{}", render::render_view(&app.view()));
                    }
                    Reply::Text(text) => println!("{}", text),
                    Reply::Refused(reason) => println!("{}", reason.yellow()),
                    Reply::Quit => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
