use protocol::color::Rgb;

use crate::POPULATIONS;

pub const CANVAS_WIDTH: u32 = 900;
pub const CANVAS_HEIGHT: u32 = 600;
pub const POPULATION_SIZE: usize = 1000;
pub const RADIUS: f64 = 2.3;
pub const CUTOFF_DIST2: f64 = 500.0;
pub const DAMPING: f64 = 0.2;
pub const EPOCH_LENGTH: u32 = 600;

pub const COLOUR_LIGHT: Rgb = Rgb::from_hex(0xc7f0d8);
pub const COLOUR_DARK1: Rgb = Rgb::from_hex(0x43523d);
pub const COLOUR_DARK2: Rgb = Rgb::from_hex(0xf15131);
pub const COLOUR_DARK3: Rgb = Rgb::from_hex(0x41f131);

/// Compiled-in simulation constants.
///
/// `colors[0]` is the background, `colors[1..]` are the populations in
/// matrix order.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
	pub canvas_width: u32,
	pub canvas_height: u32,
	pub population_size: usize,
	pub radius: f64,
	pub cutoff_dist2: f64,
	pub damping: f64,
	pub epoch_length: u32,
	pub colors: [Rgb; POPULATIONS + 1],
}

impl Default for Config {
	fn default() -> Self {
		Self {
			canvas_width: CANVAS_WIDTH,
			canvas_height: CANVAS_HEIGHT,
			population_size: POPULATION_SIZE,
			radius: RADIUS,
			cutoff_dist2: CUTOFF_DIST2,
			damping: DAMPING,
			epoch_length: EPOCH_LENGTH,
			colors: [COLOUR_LIGHT, COLOUR_DARK1, COLOUR_DARK2, COLOUR_DARK3],
		}
	}
}

impl Config {
	pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
		self.canvas_width = width;
		self.canvas_height = height;
		self
	}

	pub fn with_population_size(mut self, population_size: usize) -> Self {
		self.population_size = population_size;
		self
	}

	pub fn with_epoch_length(mut self, epoch_length: u32) -> Self {
		self.epoch_length = epoch_length;
		self
	}

	pub fn background(&self) -> Rgb {
		self.colors[0]
	}

	pub fn population_color(&self, population: usize) -> Rgb {
		self.colors[population + 1]
	}

	pub fn canvas_size(&self) -> [f64; 2] {
		[self.canvas_width as f64, self.canvas_height as f64]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let config = Config::default();
		assert_eq!(config.canvas_size(), [900.0, 600.0]);
		assert_eq!(config.population_size, 1000);
		assert_eq!(config.epoch_length, 600);
		assert_eq!(config.background(), Rgb(0xc7f0d8));
		assert_eq!(config.population_color(2), Rgb(0x41f131));
	}
}
