/// Visits the pixels covered by a filled disc.
///
/// The bounding box is scanned in whole-pixel steps starting from its float
/// lower corner, and a sample is kept when it lies strictly inside the
/// radius. Kept samples are truncated to pixel coordinates.
pub fn disc_pixels<F: FnMut(i32, i32)>(center: [f64; 2], radius: f64, mut visit: F) {
	let [cx, cy] = center;
	let radsq = radius * radius;
	let mut x = cx - radius;
	while x < cx + radius {
		let mut y = cy - radius;
		while y < cy + radius {
			let dx = x - cx;
			let dy = y - cy;
			if dx * dx + dy * dy < radsq {
				visit(x as i32, y as i32);
			}
			y += 1.0;
		}
		x += 1.0;
	}
}
