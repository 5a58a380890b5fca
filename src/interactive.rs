use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::config::{SavedConfig, load_config, save_config};

pub struct InteractiveConfig {
    pub data_path: Option<PathBuf>,
    pub json_mode: bool,
    pub show_earnings_column: bool,
}

/// Helper struct for managing user input operations
struct InputHandler;

impl InputHandler {
    /// Gets user input with automatic trimming
    fn get_input() -> Result<String, io::Error> {
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input.trim().to_string())
    }

    /// Prompts user with a question and handles yes/no responses
    fn confirm_prompt(message: &str, default_yes: bool) -> Result<bool, io::Error> {
        let default_text = if default_yes { "[Y/n]" } else { "[y/N]" };

        loop {
            print!("{} {}: ", message, default_text);
            io::stdout().flush()?;

            let input = Self::get_input()?.to_lowercase();

            match input.as_str() {
                "" => return Ok(default_yes),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => {
                    println!("❌ Please enter Y for yes or N for no.");
                    println!();
                }
            }
        }
    }

    /// Prompts user for a numeric choice within a range
    fn numeric_choice_prompt(prompt: &str, min: usize, max: usize) -> Result<Option<usize>, io::Error> {
        loop {
            print!("{}: ", prompt);
            io::stdout().flush()?;

            let input = Self::get_input()?;

            match input.parse::<usize>() {
                Ok(0) if min == 0 => return Ok(None), // Quit option
                Ok(n) if n >= min && n <= max => return Ok(Some(n)),
                _ => {
                    if min == 0 {
                        println!("❌ Invalid selection. Please enter a number between {} and {} (or 0 to quit).", min, max);
                    } else {
                        println!("❌ Invalid selection. Please enter a number between {} and {}.", min, max);
                    }
                    println!();
                }
            }
        }
    }
}

/// Helper struct for display formatting
struct DisplayHelper;

impl DisplayHelper {
    fn print_header(title: &str, width: usize) {
        println!("{}", title);
        println!("{}", "=".repeat(width));
        println!();
    }

    fn print_config_summary(data_path: Option<&Path>, json_mode: bool, show_earnings_column: bool) {
        println!("📋 Configuration Summary:");
        println!("   📄 Data source: {}", source_label(data_path));
        println!("   📊 Mode: {}", if json_mode { "JSON output" } else { "Interactive TUI" });
        println!("   💶 Net earnings column: {}", if show_earnings_column { "Shown" } else { "Hidden" });
        println!();
    }
}

fn source_label(data_path: Option<&Path>) -> String {
    match data_path {
        Some(path) => path.display().to_string(),
        None => "bundled sample".to_string(),
    }
}

pub fn run_interactive_mode() -> Result<Option<InteractiveConfig>, io::Error> {
    // Check if we have a saved configuration
    if let Some(saved) = load_config() {
        return handle_existing_config(saved);
    }

    // No saved config, run full interactive setup
    run_full_interactive_setup()
}

fn handle_existing_config(saved: SavedConfig) -> Result<Option<InteractiveConfig>, io::Error> {
    // Auto-use saved configuration for faster startup
    let data_path = saved.data_path.map(PathBuf::from);
    println!("🎯 Using Saved Configuration");
    println!("   📄 Data source: {}", source_label(data_path.as_deref()));
    println!("   📊 Mode: {}", if saved.json_mode { "JSON output" } else { "Interactive TUI" });
    println!("   💶 Net earnings column: {}", if saved.show_earnings_column { "Shown" } else { "Hidden" });
    println!("🚀 Loading table...");
    println!();

    Ok(Some(InteractiveConfig {
        data_path,
        json_mode: saved.json_mode,
        show_earnings_column: saved.show_earnings_column,
    }))
}

fn run_full_interactive_setup() -> Result<Option<InteractiveConfig>, io::Error> {
    DisplayHelper::print_header("🚀 Welcome to Utilboard - Interactive Setup", 50);

    // Step 1: Choose data source
    let data_path = match choose_data_source()? {
        Some(choice) => choice,
        None => return Ok(None), // User chose to quit
    };

    // Step 2: Choose output mode
    let json_mode = choose_mode()?;

    // Step 3: Choose display options
    let show_earnings_column = choose_display_options()?;

    // Step 4: Show summary and confirm
    println!();
    DisplayHelper::print_config_summary(data_path.as_deref(), json_mode, show_earnings_column);

    // Step 5: Ask if user wants to save these settings
    let save_settings = ask_save_settings()?;

    // Step 6: Final confirmation
    if !InputHandler::confirm_prompt("🔥 Open the table with these settings?", true)? {
        println!("❌ Cancelled.");
        return Ok(None);
    }

    // Save configuration if user requested it
    if save_settings {
        save_user_config(data_path.as_deref(), json_mode, show_earnings_column)?;
    }

    Ok(Some(InteractiveConfig {
        data_path,
        json_mode,
        show_earnings_column,
    }))
}

fn save_user_config(
    data_path: Option<&Path>,
    json_mode: bool,
    show_earnings_column: bool,
) -> Result<(), io::Error> {
    let config = SavedConfig {
        data_path: data_path.map(|p| p.display().to_string()),
        json_mode,
        show_earnings_column,
        saved_at: Utc::now(),
    };

    match save_config(&config) {
        Ok(_) => {
            println!("💾 Configuration saved! Next time you can start quickly.");
            println!();
        }
        Err(e) => {
            eprintln!("⚠️  Warning: Could not save configuration: {}", e);
            eprintln!("    (This won't affect the table view, continuing...)");
            println!();
        }
    }

    Ok(())
}

fn ask_save_settings() -> Result<bool, io::Error> {
    println!("💾 Save these settings for future use?");
    println!("   (Next time you run the program, you can use these settings quickly)");
    println!();

    InputHandler::confirm_prompt("💾 Save settings?", true)
}

/// Returns Ok(None) when the user quits; Ok(Some(None)) selects the bundled
/// sample payload.
fn choose_data_source() -> Result<Option<Option<PathBuf>>, io::Error> {
    loop {
        println!("📄 Choose Data Source:");
        println!("   1. Bundled sample data - the employee payload shipped with the binary");
        println!("   2. Custom JSON file - a payload with the same employees wrapper shape");
        println!("   0. Quit");
        println!();

        match InputHandler::numeric_choice_prompt("📄 Select source (number)", 0, 2)? {
            None => return Ok(None), // Quit
            Some(1) => return Ok(Some(None)),
            Some(2) => {
                print!("📄 Path to JSON file: ");
                io::stdout().flush()?;
                let input = InputHandler::get_input()?;

                if input.is_empty() {
                    println!("❌ No path entered.");
                    println!();
                    continue;
                }

                let path = PathBuf::from(input);
                if !path.exists() {
                    println!("⚠️  Warning: '{}' does not exist yet.", path.display());
                    if !InputHandler::confirm_prompt("   Use it anyway?", false)? {
                        println!();
                        continue; // Go back to source selection
                    }
                }

                return Ok(Some(Some(path)));
            }
            _ => unreachable!("choice is bounded by the prompt"),
        }
    }
}

fn choose_mode() -> Result<bool, io::Error> {
    println!();
    println!("📊 Choose Output Mode:");
    println!("   1. Interactive TUI (recommended) - Sortable table with detail view");
    println!("   2. JSON output - Print the projected rows and exit, for automation");
    println!();

    let json_mode = matches!(
        InputHandler::numeric_choice_prompt("📊 Select mode (1-2)", 1, 2)?,
        Some(2)
    );
    Ok(json_mode)
}

fn choose_display_options() -> Result<bool, io::Error> {
    println!();
    println!("💶 Display Options:");
    println!("   Show the Net Earnings Prev Month column?");
    println!("   Its value is the monthly cost difference, a stand-in for real net earnings.");
    println!();

    InputHandler::confirm_prompt("💶 Show net earnings column?", true)
}
