// packed 0xRRGGBB, same layout the surface fill takes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb(pub u32);

impl Rgb {
	pub const fn from_hex(hex: u32) -> Self {
		Self(hex & 0x00ff_ffff)
	}

	pub fn r(&self) -> u8 {
		(self.0 >> 16) as u8
	}

	pub fn g(&self) -> u8 {
		(self.0 >> 8) as u8
	}

	pub fn b(&self) -> u8 {
		self.0 as u8
	}

	pub fn rgb(&self) -> [u8; 3] {
		[self.r(), self.g(), self.b()]
	}
}
