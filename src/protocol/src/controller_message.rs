#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerMessage {
	Quit,
	TogglePause,
	FrameForward,
}
