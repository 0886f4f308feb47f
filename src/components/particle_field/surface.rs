//! Minimal immediate-mode drawing surface used by the particle renderer.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

/// The subset of a 2D canvas context the renderer needs.
pub trait DrawSurface {
	fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64);
	fn set_fill_color(&self, css: &str);
	fn set_stroke_color(&self, css: &str);
	fn set_global_alpha(&self, alpha: f64);
	fn set_line_width(&self, width: f64);
	fn begin_path(&self);
	fn arc(&self, x: f64, y: f64, radius: f64, start: f64, end: f64);
	fn move_to(&self, x: f64, y: f64);
	fn line_to(&self, x: f64, y: f64);
	fn stroke(&self);
	fn fill(&self);

	/// Fills a full circle in the current fill colour.
	fn fill_circle(&self, x: f64, y: f64, radius: f64) {
		self.begin_path();
		self.arc(x, y, radius, 0.0, TAU);
		self.fill();
	}

	/// Strokes a single segment in the current stroke colour.
	fn stroke_line(&self, x1: f64, y1: f64, x2: f64, y2: f64) {
		self.begin_path();
		self.move_to(x1, y1);
		self.line_to(x2, y2);
		self.stroke();
	}
}

impl DrawSurface for CanvasRenderingContext2d {
	fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64) {
		CanvasRenderingContext2d::clear_rect(self, x, y, width, height);
	}

	fn set_fill_color(&self, css: &str) {
		self.set_fill_style_str(css);
	}

	fn set_stroke_color(&self, css: &str) {
		self.set_stroke_style_str(css);
	}

	fn set_global_alpha(&self, alpha: f64) {
		CanvasRenderingContext2d::set_global_alpha(self, alpha);
	}

	fn set_line_width(&self, width: f64) {
		CanvasRenderingContext2d::set_line_width(self, width);
	}

	fn begin_path(&self) {
		CanvasRenderingContext2d::begin_path(self);
	}

	fn arc(&self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
		// Only fails for a negative radius, which particles never have.
		let _ = CanvasRenderingContext2d::arc(self, x, y, radius, start, end);
	}

	fn move_to(&self, x: f64, y: f64) {
		CanvasRenderingContext2d::move_to(self, x, y);
	}

	fn line_to(&self, x: f64, y: f64) {
		CanvasRenderingContext2d::line_to(self, x, y);
	}

	fn stroke(&self) {
		CanvasRenderingContext2d::stroke(self);
	}

	fn fill(&self) {
		CanvasRenderingContext2d::fill(self);
	}
}
