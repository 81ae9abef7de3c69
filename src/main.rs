use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;

use autocomp::cli::{self, Args};
use autocomp::config;
use autocomp::demo::{self, DemoApp};

fn main() -> Result<ExitCode> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    autocomp::logging::init();

    let args = Args::parse();
    let config = config::load_config_or_default(args.config.as_deref());
    let session_config = args.session_config(&config.autocomplete)?;
    let candidates = args.candidates(&session_config);

    if args.print_sorted {
        for item in cli::sorted_items(&candidates, session_config) {
            println!("{}", item);
        }
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(prefix) = &args.select {
        return Ok(match cli::select_item(&candidates, session_config, prefix) {
            Some(item) => {
                println!("{}", item);
                ExitCode::SUCCESS
            }
            None => ExitCode::FAILURE,
        });
    }

    let mut app = DemoApp::new(candidates, session_config, config.list.list_options());

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let mut terminal = ratatui::init();
    let result = demo::run(&mut terminal, &mut app);
    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result?;
    Ok(ExitCode::SUCCESS)
}
