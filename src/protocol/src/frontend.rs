use crate::color::Rgb;
use crate::controller_message::ControllerMessage;

/// Window side of the simulation loop.
///
/// Every method is called once per tick or once per particle. None of them
/// can fail: a frontend that exists is assumed to stay usable until it is
/// dropped.
pub trait Frontend {
	/// Non-blocking; drains whatever input arrived since the last call.
	fn poll_events(&mut self) -> Vec<ControllerMessage>;

	fn clear(&mut self, color: Rgb);

	fn draw_disc(&mut self, pos: [f64; 2], radius: f64, color: Rgb);

	fn present(&mut self);

	/// Drains pending input exactly like [`Frontend::poll_events`] and
	/// reports whether a quit was among it. Any other message in the batch
	/// is consumed and lost, so a loop that honours pause or step has to
	/// call `poll_events` instead.
	fn poll_quit(&mut self) -> bool {
		self.poll_events().contains(&ControllerMessage::Quit)
	}
}
