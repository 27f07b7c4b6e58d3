use clap::Parser;
use color_eyre::Result;
use tracing::{debug, info};
use urbanpulse::app::App;
use urbanpulse::cli::CliArgs;
use urbanpulse::config::init_app_config;
use urbanpulse::logging::LogTarget;
use urbanpulse::{event, logging, terminal};

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = init_app_config()?;

    // Fall back to the report when stdout is not a terminal
    let headless = args.headless || args.json || !is_terminal();
    let target = LogTarget::select(!headless, config.log_file.as_deref());
    logging::init_logging(args.debug, target)?;
    debug!(?config, "configuration loaded");

    let mut app = App::from_config(&config);

    if headless {
        return event::run_headless(&app, args.json);
    }

    let mut terminal = terminal::setup()?;
    info!("starting dashboard");

    let result = event::run(&mut terminal, &mut app);

    // Restore terminal
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
