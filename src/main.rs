use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use notepad::cli::CliArgs;
use notepad::EditorConfig;

mod runtime;
mod view;

use runtime::App;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    notepad::tracing::init();

    let startup = match args.into_startup_messages() {
        Ok(msgs) => msgs,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let config = EditorConfig::load();

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, startup);

    event_loop.run_app(&mut app)?;

    Ok(())
}
