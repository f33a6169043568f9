use log::error;
use thiserror::Error;

/// Anything that can go wrong while bringing the window up.
#[derive(Debug, Error)]
pub enum InitError {
	#[error("SDL init: {0}")]
	Sdl(String),
	#[error("video subsystem: {0}")]
	Video(String),
	#[error("window: {0}")]
	Window(#[from] sdl2::video::WindowBuildError),
	#[error("canvas: {0}")]
	Canvas(#[from] sdl2::IntegerOrSdlError),
	#[error("event pump: {0}")]
	EventPump(String),
}

/// Passes a startup result through, logging the full error chain on failure.
pub fn logged<T>(result: anyhow::Result<T>) -> anyhow::Result<T> {
	result.map_err(|e| {
		error!("{:#}", e);
		e
	})
}
