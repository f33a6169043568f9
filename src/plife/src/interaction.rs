use rand::Rng;

use crate::POPULATIONS;

// marks an off-diagonal cell that has not been resampled yet
pub const UNSAMPLED: f64 = -1.0;

/// Coupling coefficients, `cells[target][source]`.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionMatrix {
	cells: [[f64; POPULATIONS]; POPULATIONS],
}

impl InteractionMatrix {
	/// Diagonal drawn from [-2, 2), everything else [`UNSAMPLED`].
	pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
		let mut cells = [[UNSAMPLED; POPULATIONS]; POPULATIONS];
		for (idx, row) in cells.iter_mut().enumerate() {
			row[idx] = rng.gen_range(-2.0..2.0);
		}
		Self { cells }
	}

	pub fn from_cells(cells: [[f64; POPULATIONS]; POPULATIONS]) -> Self {
		Self { cells }
	}

	pub fn get(&self, row: usize, col: usize) -> f64 {
		self.cells[row][col]
	}

	pub fn cells(&self) -> &[[f64; POPULATIONS]; POPULATIONS] {
		&self.cells
	}

	/// Coefficient for `(row, col)` at counter value `tick`.
	///
	/// While `tick < period` the stored value is returned unchanged.
	/// Otherwise a new value is drawn from [-3, 3), written back into the
	/// cell, and returned.
	pub fn sample<R: Rng + ?Sized>(
		&mut self,
		tick: u32,
		period: u32,
		row: usize,
		col: usize,
		rng: &mut R,
	) -> f64 {
		if tick >= period {
			self.cells[row][col] = rng.gen_range(-3.0..3.0);
		}
		self.cells[row][col]
	}
}

/// Frame counter driving the resampling cadence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickCounter {
	tick: u32,
	period: u32,
}

impl TickCounter {
	pub fn new(period: u32) -> Self {
		Self { tick: 0, period }
	}

	pub fn get(&self) -> u32 {
		self.tick
	}

	pub fn period(&self) -> u32 {
		self.period
	}

	pub fn advance(&mut self) -> u32 {
		self.tick += 1;
		self.tick
	}

	/// Resets to 0 once the period has been reached. Returns whether it did.
	pub fn wrap(&mut self) -> bool {
		if self.tick >= self.period {
			self.tick = 0;
			true
		} else {
			false
		}
	}
}
