mod config;
mod data;
mod interactive;
mod projector;
mod types;
mod ui;

use std::io;
use std::process::exit;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event};

use config::{Cli, reset_config};
use data::load_records;
use interactive::run_interactive_mode;
use projector::project;
use types::App;

fn display_startup_info(source: &str, record_count: usize, is_json: bool) {
    eprintln!("🚀 Starting utilboard...");
    eprintln!("📄 Data source: {}", source);
    eprintln!("👥 Records: {}", record_count);
    eprintln!("📊 Mode: {}", if is_json { "JSON output" } else { "Interactive TUI" });
    if !is_json {
        eprintln!("⏱️  Preparing table... (Press 'q' to quit)");
        eprintln!();
        eprintln!("🎯 Tip: Press '1'-'7' to sort by column, 'd' to flip the direction");
        eprintln!();
    }
}

fn main() -> Result<(), io::Error> {
    let cli = Cli::parse();

    // Handle reset flag first
    if cli.reset {
        match reset_config() {
            Ok(true) => {
                println!("✅ Saved configuration has been reset.");
                println!("   Next time you run the program, you'll see the full setup again.");
            }
            Ok(false) => {
                println!("ℹ️  No saved configuration found to reset.");
            }
            Err(e) => {
                eprintln!("❌ Error resetting configuration: {}", e);
                exit(1);
            }
        }
        return Ok(());
    }

    // Check if no arguments were provided - run interactive mode
    let (data_path, json_mode, show_earnings_column) =
        if cli.file.is_none() && !cli.json && !cli.hide_earnings {
            match run_interactive_mode()? {
                Some(config) => (config.data_path, config.json_mode, config.show_earnings_column),
                None => {
                    // User cancelled or quit
                    return Ok(());
                }
            }
        } else {
            // Arguments provided, use them (no file flag means the bundled payload)
            (cli.file, cli.json, !cli.hide_earnings)
        };

    let records = match load_records(data_path.as_deref()) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("   Expected a JSON array of objects with an 'employees' wrapper.");
            exit(1);
        }
    };

    // The projection runs once per data load; everything after this point
    // only reads the finished rows
    let rows = project(&records);

    let source_label = source_label(data_path.as_deref());

    if json_mode {
        display_startup_info(&source_label, records.len(), true);
        if let Ok(json_output) = serde_json::to_string_pretty(&rows) {
            println!("{}", json_output);
        }
        return Ok(());
    }

    display_startup_info(&source_label, records.len(), false);

    // Small delay to let user read the information
    std::thread::sleep(Duration::from_millis(1500));

    // Start TUI
    let mut app = App::new(records, rows, show_earnings_column, data_path);
    let mut terminal = ui::setup_terminal()?;

    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        // --- Draw UI ---
        ui::render_ui(&app, &mut terminal)?;

        // --- Input Handling ---
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(event) = event::read()? {
                if event.kind == crossterm::event::KeyEventKind::Press {
                    if ui::input::handle_key_event(&mut app, event.code) {
                        break; // Exit condition
                    }
                }
            }
        }

        // --- Tick-based updates ---
        if last_tick.elapsed() >= tick_rate {
            // Cleanup notifications that have been displayed for more than 5 seconds
            if let Some(time) = app.settings_notification_time {
                if time.elapsed() > Duration::from_secs(5) {
                    app.settings_notification = None;
                    app.settings_notification_time = None;
                }
            }

            last_tick = Instant::now();
        }
    }

    ui::restore_terminal(&mut terminal)?;
    Ok(())
}

fn source_label(data_path: Option<&std::path::Path>) -> String {
    match data_path {
        Some(path) => path.display().to_string(),
        None => "bundled sample".to_string(),
    }
}
