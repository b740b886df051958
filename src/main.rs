#![windows_subsystem = "windows"]

mod app;
mod log_view;
mod ui;

use app::App;
use clap::Parser;
use log::{error, info, LevelFilter};
use syb::config::Config;
use syb::session::Session;

fn main() -> iced::Result {
    let config = Config::parse();
    init_logging(config.verbose);

    let session = match Session::resolve(&config) {
        Ok(session) => session,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Starting SYB on {} (send {})",
        session.port,
        if session.send_enabled() { "enabled" } else { "disabled" }
    );

    let show_log = config.show_log;
    iced::daemon(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .run_with(move || App::new(session, show_log))
}

// Warnings only by default; RUST_LOG refines that and --verbose opens up our own modules.
fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn).parse_default_env();
    if verbose {
        builder.filter_module("syb", LevelFilter::Debug);
    }
    builder.init();
}
