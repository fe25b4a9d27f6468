use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use simpledb::config::Config;
use simpledb::engine::Engine;
use simpledb::printer;
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to prepare data directory: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut engine = match Engine::open(&config.data_dir) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("Failed to initialize catalog: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("Failed to initialize line editor: {err}");
            return ExitCode::FAILURE;
        }
    };
    match &config.history_file {
        Some(history_file) => {
            if history_file.exists() {
                if let Err(err) = editor.load_history(history_file) {
                    warn!("failed to load history from {}: {err}", history_file.display());
                }
            }
        }
        None => warn!("home directory not found; command history will not be persisted"),
    }

    println!("Welcome to simple-db!");
    println!("Enter exit or quit to exit.");

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                if input == "exit" || input == "quit" {
                    println!("Exiting.");
                    break;
                }
                let _ = editor.add_history_entry(input);

                // \dt is shorthand for SHOW TABLES, as in psql
                let query = if input == "\\dt" { "SHOW TABLES" } else { input };
                let result = engine.run_query(query);
                printer::print_result(&result);
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Exiting.");
                break;
            }
            Err(err) => {
                eprintln!("Failed to read line: {err}");
                break;
            }
        }
    }

    if let Some(history_file) = &config.history_file {
        if let Err(err) = editor.save_history(history_file) {
            warn!("failed to save history to {}: {err}", history_file.display());
        }
    }

    ExitCode::SUCCESS
}
