use log::{info, warn};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Point;
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::{EventPump, Sdl};

use crate::error::InitError;
use protocol::color::Rgb;
use protocol::controller_message::ControllerMessage;
use protocol::disc::disc_pixels;
use protocol::frontend::Frontend;

pub struct SdlFrontend {
	canvas: Canvas<Window>,
	event_pump: EventPump,
	points: Vec<Point>,
	// dropped last, after the window it owns
	_sdl_context: Sdl,
}

impl SdlFrontend {
	pub fn new(width: u32, height: u32, title: &str) -> Result<Self, InitError> {
		let sdl_context = sdl2::init().map_err(InitError::Sdl)?;
		let video_subsystem = sdl_context.video().map_err(InitError::Video)?;
		let window = video_subsystem
			.window(title, width, height)
			.position_centered()
			.build()?;
		let canvas = window.into_canvas().build()?;
		let event_pump = sdl_context.event_pump().map_err(InitError::EventPump)?;
		info!("window created: {} {}x{}", title, width, height);
		Ok(Self {
			canvas,
			event_pump,
			points: Vec::new(),
			_sdl_context: sdl_context,
		})
	}
}

pub fn sdl_color(color: Rgb) -> Color {
	let [r, g, b] = color.rgb();
	Color::RGB(r, g, b)
}

pub fn controller_message(event: &Event) -> Option<ControllerMessage> {
	match event {
		Event::Quit { .. }
		| Event::KeyDown {
			keycode: Some(Keycode::Q),
			..
		} => Some(ControllerMessage::Quit),
		Event::KeyDown {
			keycode: Some(Keycode::Space),
			repeat: false,
			..
		} => Some(ControllerMessage::TogglePause),
		Event::KeyDown {
			keycode: Some(Keycode::S),
			..
		} => Some(ControllerMessage::FrameForward),
		_ => None,
	}
}

impl Frontend for SdlFrontend {
	fn poll_events(&mut self) -> Vec<ControllerMessage> {
		self.event_pump
			.poll_iter()
			.filter_map(|event| controller_message(&event))
			.collect()
	}

	fn clear(&mut self, color: Rgb) {
		self.canvas.set_draw_color(sdl_color(color));
		self.canvas.clear();
	}

	fn draw_disc(&mut self, pos: [f64; 2], radius: f64, color: Rgb) {
		let points = &mut self.points;
		points.clear();
		disc_pixels(pos, radius, |x, y| points.push(Point::new(x, y)));
		self.canvas.set_draw_color(sdl_color(color));
		// off-canvas points are clipped by SDL
		if let Err(e) = self.canvas.draw_points(&self.points[..]) {
			warn!("draw_points: {}", e);
		}
	}

	fn present(&mut self) {
		self.canvas.present();
	}
}
