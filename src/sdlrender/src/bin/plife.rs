use anyhow::Context;
use log::info;

use plife::config::Config;
use plife::world::World;
use sdlrender::error::logged;
use sdlrender::renderer::SdlFrontend;

const TITLE: &str = "Life Rule";

fn main() -> anyhow::Result<()> {
	env_logger::Builder::from_env(
		env_logger::Env::default().default_filter_or("info"),
	)
	.init();
	let config = Config::default();
	let mut frontend = logged(
		SdlFrontend::new(config.canvas_width, config.canvas_height, TITLE)
			.context("failed to open the simulation window"),
	)?;
	let mut world = World::new(config);
	world.run(&mut frontend);
	info!("exit");
	Ok(())
}
