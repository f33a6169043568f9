use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::force_field::ForceField;
use crate::interaction::{InteractionMatrix, TickCounter};
use crate::particle_set::ParticleSet;
use crate::POPULATIONS;
use protocol::controller_message::ControllerMessage;
use protocol::frontend::Frontend;
use protocol::pr_model::PrModel;

pub struct World {
	config: Config,
	sets: [ParticleSet; POPULATIONS],
	matrix: InteractionMatrix,
	counter: TickCounter,
	field: ForceField,
	rng: StdRng,

	// -1: always play
	// 0: pause
	// n: play n frames
	forward_frames: i32,
}

impl World {
	/// Random populations and matrix, seeded from the wall clock.
	pub fn new(config: Config) -> Self {
		let seed = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.map(|d| d.as_nanos() as u64)
			.unwrap_or_default();
		Self::with_seed(config, seed)
	}

	pub fn with_seed(config: Config, seed: u64) -> Self {
		let mut rng = StdRng::seed_from_u64(seed);
		let [width, height] = config.canvas_size();
		let sets = std::array::from_fn(|idx| {
			ParticleSet::initialize(
				config.population_size,
				width,
				height,
				config.radius,
				config.population_color(idx),
				&mut rng,
			)
		});
		let matrix = InteractionMatrix::new(&mut rng);
		info!(
			"world created: {} populations of {}, seed {}",
			POPULATIONS, config.population_size, seed
		);
		debug!("initial matrix: {:?}", matrix.cells());
		Self::from_rng(config, sets, matrix, rng)
	}

	/// Explicit state, for replaying a known setup.
	pub fn from_parts(
		config: Config,
		sets: [ParticleSet; POPULATIONS],
		matrix: InteractionMatrix,
		seed: u64,
	) -> Self {
		Self::from_rng(config, sets, matrix, StdRng::seed_from_u64(seed))
	}

	fn from_rng(
		config: Config,
		sets: [ParticleSet; POPULATIONS],
		matrix: InteractionMatrix,
		rng: StdRng,
	) -> Self {
		let field = ForceField::from_config(&config);
		let counter = TickCounter::new(config.epoch_length);
		Self {
			config,
			sets,
			matrix,
			counter,
			field,
			rng,
			forward_frames: -1,
		}
	}

	pub fn with_paused(mut self) -> Self {
		self.forward_frames = 0;
		self
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn sets(&self) -> &[ParticleSet; POPULATIONS] {
		&self.sets
	}

	pub fn matrix(&self) -> &InteractionMatrix {
		&self.matrix
	}

	pub fn counter(&self) -> TickCounter {
		self.counter
	}

	pub fn is_paused(&self) -> bool {
		self.forward_frames == 0
	}

	/// One physics step: all nine (target, source) passes in row-major order.
	pub fn tick(&mut self) {
		let tick = self.counter.advance();
		let period = self.counter.period();
		trace!("tick {}", tick);
		for target in 0..POPULATIONS {
			for source in 0..POPULATIONS {
				let g = self
					.matrix
					.sample(tick, period, target, source, &mut self.rng);
				if target == source {
					self.field.apply_within(&mut self.sets[target], g);
				} else {
					let (t, s) = pair_mut(&mut self.sets, target, source);
					self.field.apply(t, s, g);
				}
			}
		}
		if self.counter.wrap() {
			debug!("epoch boundary, matrix: {:?}", self.matrix.cells());
		}
	}

	pub fn pr_model(&self) -> PrModel {
		let len = self.sets.iter().map(|s| s.len()).max().unwrap_or(0);
		let total = self.sets.iter().map(|s| s.len()).sum();
		let mut particles = Vec::with_capacity(total);
		// interleaved so no population is always painted on top
		for idx in 0..len {
			for set in self.sets.iter() {
				if let Some(p) = set.get(idx) {
					particles.push(p.render());
				}
			}
		}
		PrModel {
			background: self.config.background(),
			particles,
		}
	}

	/// Polls input, draws the current state, steps unless paused, presents.
	/// Returns false once a quit was requested; nothing is drawn then.
	pub fn frame<F: Frontend + ?Sized>(&mut self, frontend: &mut F) -> bool {
		for msg in frontend.poll_events() {
			match msg {
				ControllerMessage::Quit => {
					info!("quit requested");
					return false;
				}
				ControllerMessage::TogglePause => {
					if self.forward_frames == 0 {
						self.forward_frames = -1;
					} else {
						self.forward_frames = 0;
					}
					debug!("paused: {}", self.is_paused());
				}
				ControllerMessage::FrameForward => {
					if self.forward_frames == 0 {
						self.forward_frames += 1;
					}
				}
			}
		}
		self.pr_model().draw(frontend);
		if self.forward_frames != 0 {
			if self.forward_frames > 0 {
				self.forward_frames -= 1;
			}
			self.tick();
		}
		frontend.present();
		true
	}

	pub fn run<F: Frontend + ?Sized>(&mut self, frontend: &mut F) {
		while self.frame(frontend) {}
	}
}

fn pair_mut(
	sets: &mut [ParticleSet],
	target: usize,
	source: usize,
) -> (&mut ParticleSet, &ParticleSet) {
	debug_assert_ne!(target, source);
	if target < source {
		let (lo, hi) = sets.split_at_mut(source);
		(&mut lo[target], &hi[0])
	} else {
		let (lo, hi) = sets.split_at_mut(target);
		(&mut hi[0], &lo[source])
	}
}
