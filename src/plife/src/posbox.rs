use crate::particle::Particle;

/// Reflecting walls around the canvas.
pub struct Posbox {
	pub xmin: f64,
	pub xmax: f64,
	pub ymin: f64,
	pub ymax: f64,
}

impl Posbox {
	pub fn from_canvas([width, height]: [f64; 2]) -> Self {
		Self {
			xmin: 0.0,
			xmax: width,
			ymin: 0.0,
			ymax: height,
		}
	}

	/// Clamps the disc back inside and flips the velocity component of each
	/// wall it crossed. Returns whether anything was reflected.
	pub fn apply(&self, p: &mut Particle) -> bool {
		let r = p.radius;
		let mut flag = false;
		// x upper, y upper, y lower, x lower
		if p.pos[0] + r > self.xmax {
			p.pos[0] = self.xmax - r;
			p.vel[0] = -p.vel[0];
			flag = true;
		}
		if p.pos[1] + r > self.ymax {
			p.pos[1] = self.ymax - r;
			p.vel[1] = -p.vel[1];
			flag = true;
		}
		if p.pos[1] - r < self.ymin {
			p.pos[1] = self.ymin + r;
			p.vel[1] = -p.vel[1];
			flag = true;
		}
		if p.pos[0] - r < self.xmin {
			p.pos[0] = self.xmin + r;
			p.vel[0] = -p.vel[0];
			flag = true;
		}
		flag
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::V2;
	use protocol::color::Rgb;

	fn posbox() -> Posbox {
		Posbox::from_canvas([900.0, 600.0])
	}

	fn particle(pos: [f64; 2], vel: [f64; 2]) -> Particle {
		Particle::new(V2::new(pos[0], pos[1]), 2.3, Rgb(0))
			.with_vel(V2::new(vel[0], vel[1]))
	}

	#[test]
	fn inside_is_untouched() {
		let mut p = particle([450.0, 300.0], [3.0, -4.0]);
		assert!(!posbox().apply(&mut p));
		assert_eq!(p, particle([450.0, 300.0], [3.0, -4.0]));
	}

	#[test]
	fn right_wall() {
		let mut p = particle([899.0, 300.0], [5.0, 1.0]);
		assert!(posbox().apply(&mut p));
		assert_eq!(p.pos, V2::new(900.0 - 2.3, 300.0));
		assert_eq!(p.vel, V2::new(-5.0, 1.0));
	}

	#[test]
	fn negative_overshoot_is_clamped() {
		let mut p = particle([-40.0, -7.5], [-8.0, -0.5]);
		assert!(posbox().apply(&mut p));
		assert_eq!(p.pos, V2::new(2.3, 2.3));
		assert_eq!(p.vel, V2::new(8.0, 0.5));
	}

	#[test]
	fn corner_reflects_both_axes() {
		let mut p = particle([1000.0, 650.0], [6.0, 7.0]);
		assert!(posbox().apply(&mut p));
		assert_eq!(p.pos, V2::new(900.0 - 2.3, 600.0 - 2.3));
		assert_eq!(p.vel, V2::new(-6.0, -7.0));
	}

	#[test]
	fn position_in_range_and_speed_kept() {
		let b = posbox();
		let starts = [
			[-3.0, 10.0],
			[0.0, 0.0],
			[2.2, 597.8],
			[905.0, 612.0],
			[450.0, -0.1],
			[898.0, 1.0],
		];
		for pos in starts {
			let vel = [1.5, -2.5];
			let mut p = particle(pos, vel);
			b.apply(&mut p);
			assert!(p.pos[0] >= 2.3 && p.pos[0] <= 900.0 - 2.3);
			assert!(p.pos[1] >= 2.3 && p.pos[1] <= 600.0 - 2.3);
			assert_eq!(p.vel[0].abs(), vel[0].abs());
			assert_eq!(p.vel[1].abs(), vel[1].abs());
		}
	}
}
