use std::time::SystemTime;

use plife::config::Config;
use plife::world::World;

fn main() {
	let mut world = World::with_seed(Config::default(), 0);
	let ticks = 100;
	let start = SystemTime::now();
	for _ in 0..ticks {
		world.tick();
	}
	let duration = SystemTime::now()
		.duration_since(start)
		.map(|d| d.as_micros())
		.unwrap_or_default();
	eprintln!("{:.3} ms/tick", duration as f32 / ticks as f32 / 1e3);
}
