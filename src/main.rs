// Monkey: lexer, parser and token explorer

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use monkey::repl::{line, App};

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [--plain]", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --plain    Line mode: print the tokens of each input line");
    eprintln!("  -h, --help Show this message");
    eprintln!();
    eprintln!("Without --plain the interactive explorer starts when stdin and");
    eprintln!("stdout are terminals; otherwise line mode is used.");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("monkey");

    let mut plain = false;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--plain" => plain = true,
            "-h" | "--help" => {
                print_usage(program_name);
                return Ok(());
            }
            other => {
                eprintln!("Error: Unknown argument '{}'", other);
                eprintln!();
                print_usage(program_name);
                std::process::exit(1);
            }
        }
    }

    let interactive = io::stdin().is_tty() && io::stdout().is_tty();

    if plain || !interactive {
        if interactive {
            eprintln!("Monkey token REPL. Each line is scanned on its own; Ctrl-D exits.");
        }
        line::start(io::stdin().lock(), io::stdout().lock())?;
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new();
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
