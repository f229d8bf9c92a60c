use clap::Parser;

mod cli;
mod exits;
mod terminal;
mod tui;

fn main() {
    exits::install_handlers();
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0)
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let code = match std::env::args().len() {
        1 if cli::quiet::is_interactive() => tui::run(),
        _ => cli::run(cli::Args::parse()),
    };

    std::process::exit(code);
}
