//! Particle field rendering.
//!
//! Two passes over a cleared surface:
//! 1. Every particle as a filled circle at its own opacity
//! 2. A faint line between every pair closer than the link distance

use super::particles::Particle;
use super::surface::DrawSurface;
use super::theme::FieldStyle;

/// Alpha of the link between two particles `distance` apart, if they are linked at all.
pub fn link_alpha(distance: f64, link_distance: f64, max_alpha: f64) -> Option<f64> {
	(distance < link_distance).then(|| (link_distance - distance) / link_distance * max_alpha)
}

/// Clears the surface and draws particles and their proximity links.
pub fn render<S: DrawSurface + ?Sized>(
	surface: &S,
	width: f64,
	height: f64,
	particles: &[Particle],
	link_distance: f64,
	style: &FieldStyle,
) {
	let color = style.color.to_css();

	surface.clear_rect(0.0, 0.0, width, height);

	surface.set_fill_color(&color);
	for p in particles {
		surface.set_global_alpha(p.opacity);
		surface.fill_circle(p.x, p.y, p.radius);
	}

	draw_links(surface, particles, link_distance, style, &color);

	surface.set_global_alpha(1.0);
}

/// O(n²) over all unordered pairs; fine for the tens of particles the field holds.
fn draw_links<S: DrawSurface + ?Sized>(
	surface: &S,
	particles: &[Particle],
	link_distance: f64,
	style: &FieldStyle,
	color: &str,
) {
	surface.set_stroke_color(color);
	surface.set_line_width(style.link_width);

	for (i, a) in particles.iter().enumerate() {
		for b in &particles[i + 1..] {
			let (dx, dy) = (a.x - b.x, a.y - b.y);
			let distance = (dx * dx + dy * dy).sqrt();
			if let Some(alpha) = link_alpha(distance, link_distance, style.link_alpha) {
				surface.set_global_alpha(alpha);
				surface.stroke_line(a.x, a.y, b.x, b.y);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::super::surface::testing::{Op, RecordingSurface};
	use super::*;

	fn at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 2.0,
			opacity: 0.5,
		}
	}

	fn draw(particles: &[Particle]) -> RecordingSurface {
		let surface = RecordingSurface::default();
		render(&surface, 800.0, 600.0, particles, 100.0, &FieldStyle::default());
		surface
	}

	#[test]
	fn clears_then_draws_each_particle() {
		let surface = draw(&[at(10.0, 10.0), at(500.0, 500.0)]);
		assert_eq!(surface.ops.borrow()[0], Op::Clear(800.0, 600.0));
		assert!(surface
			.ops
			.borrow()
			.contains(&Op::Fill("#00bfff".to_string())));
		assert_eq!(
			surface.circles(),
			vec![(0.5, 10.0, 10.0, 2.0), (0.5, 500.0, 500.0, 2.0)]
		);
		assert!(surface.lines().is_empty());
	}

	#[test]
	fn links_only_pairs_inside_link_distance() {
		let surface = draw(&[at(0.0, 0.0), at(60.0, 80.0), at(0.0, 99.0)]);
		let lines = surface.lines();
		// (0,0)-(60,80) is exactly 100 apart and stays unlinked.
		assert_eq!(lines.len(), 2);
		assert!(lines.iter().all(|(_, from, to)| from != to));
		assert!(!lines.contains(&(0.0, (0.0, 0.0), (60.0, 80.0))));

		let (alpha, from, to) = lines[0];
		assert_eq!((from, to), ((0.0, 0.0), (0.0, 99.0)));
		assert!((alpha - 0.002).abs() < 1e-12);
	}

	#[test]
	fn link_alpha_fades_with_distance() {
		assert_eq!(link_alpha(100.0, 100.0, 0.2), None);
		assert_eq!(link_alpha(150.0, 100.0, 0.2), None);
		assert_eq!(link_alpha(0.0, 100.0, 0.2), Some(0.2));

		let samples: Vec<f64> = [0.0, 10.0, 50.0, 90.0, 99.9]
			.iter()
			.map(|&d| link_alpha(d, 100.0, 0.2).unwrap())
			.collect();
		assert!(samples.windows(2).all(|w| w[0] > w[1]));
	}

	#[test]
	fn restores_full_alpha() {
		let surface = draw(&[at(0.0, 0.0), at(5.0, 5.0)]);
		assert_eq!(surface.ops.borrow().last(), Some(&Op::Alpha(1.0)));
	}
}
