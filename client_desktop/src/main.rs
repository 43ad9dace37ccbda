//! Native client: a textured quad sliding and spinning between two paddles

mod app;
mod config;
mod error;
mod input;
mod mesh;
mod renderer;
mod shader;
mod simulation;
mod texture;

use anyhow::Result;
use game_core::Config;
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

use app::App;
use config::ClientConfig;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("client_desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(ClientConfig::default(), Config::new());
    event_loop.run_app(&mut app)?;

    if let Some(e) = app.take_error() {
        return Err(e.into());
    }

    tracing::info!("client_desktop exiting");
    Ok(())
}
