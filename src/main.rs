// Skink: arithmetic expression front-end with a syntax tree explorer

use std::fs;
use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use skink::config::{self, ParserConfig};
use skink::parser::parse_source_with;
use skink::ui::App;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [--print] <file>", program_name);
    eprintln!();
    eprintln!("  {} expr.sk            # Explore tokens and syntax tree", program_name);
    eprintln!("  {} --print expr.sk    # Print the syntax tree and exit", program_name);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_max_level(config::log_level())
        .init();

    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("skink");

    let (print_only, path) = match args.get(1..).unwrap_or_default() {
        [flag, path] if flag == "--print" => (true, path),
        [path] if !path.starts_with("--") => (false, path),
        _ => {
            eprintln!("Error: No input file provided");
            eprintln!();
            print_usage(program_name);
            std::process::exit(1);
        }
    };

    if !Path::new(path).exists() {
        eprintln!("Error: File '{}' not found", path);
        print_usage(program_name);
        std::process::exit(1);
    }

    let source = fs::read_to_string(path)?;
    let parser_config = ParserConfig::from_env();
    info!(file = %path, max_depth = parser_config.max_depth, "loaded source");

    if print_only {
        match parse_source_with(path, &source, parser_config) {
            Ok(tree) => {
                println!("tree:");
                println!("{}", tree);
                return Ok(());
            }
            Err(diag) => {
                eprintln!("{}", diag);
                std::process::exit(1);
            }
        }
    }

    let mut app = App::new(path, source, parser_config);
    if let Err(diag) = &app.outcome {
        warn!(error = %diag, "opening explorer on a source that failed to parse");
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
