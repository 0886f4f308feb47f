//! Ambient particle field: drifting points repelled by the pointer.
//!
//! The field is a plain step simulation. The host calls [`ParticleField::tick`]
//! once per animation frame with the current [`Pointer`], then hands the
//! particles to the renderer. Nothing here touches the DOM, so the whole
//! update can be driven synchronously from tests with a seeded RNG.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use super::theme::FieldStyle;

/// A single drifting particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub opacity: f64,
}

/// Most recent pointer sample in surface coordinates.
///
/// Absent until the first pointer move; never cleared afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
	position: Option<(f64, f64)>,
}

impl Pointer {
	pub fn at(x: f64, y: f64) -> Self {
		Self {
			position: Some((x, y)),
		}
	}

	pub fn set(&mut self, x: f64, y: f64) {
		self.position = Some((x, y));
	}

	pub fn position(&self) -> Option<(f64, f64)> {
		self.position
	}
}

/// Tunables for population, motion and pointer interaction.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Particles created at startup and after every resize.
	pub count: usize,
	/// Particles appended per spawn burst.
	pub burst: usize,
	/// Ceiling on the collection size; oldest spawned particles are evicted past it.
	/// Never enforced below the current base fill plus the burst being added.
	pub max_particles: usize,
	/// Pointer repulsion reaches this far.
	pub repel_radius: f64,
	/// Displacement applied to a particle sitting right under the pointer.
	pub repel_strength: f64,
	/// Velocity components are drawn from `[-max_speed, max_speed)`.
	pub max_speed: f64,
	/// Particles closer than this are linked.
	pub link_distance: f64,
	pub radius_range: (f64, f64),
	pub opacity_range: (f64, f64),
	pub style: FieldStyle,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			count: 80,
			burst: 5,
			max_particles: 400,
			repel_radius: 150.0,
			repel_strength: 1.5,
			max_speed: 0.25,
			link_distance: 100.0,
			radius_range: (1.0, 3.0),
			opacity_range: (0.2, 0.7),
			style: FieldStyle::default(),
		}
	}
}

/// Largest speed or range span accepted; random draws need a finite span.
const MAX_MAGNITUDE: f64 = 1e6;

impl FieldConfig {
	/// Replaces unusable numeric tunables with their defaults.
	///
	/// Page JSON can carry negative, non-finite or huge values; those would
	/// either poison positions with NaN or make range sampling overflow.
	pub fn sanitized(mut self) -> Self {
		let defaults = Self::default();
		for (value, default) in [
			(&mut self.max_speed, defaults.max_speed),
			(&mut self.repel_radius, defaults.repel_radius),
			(&mut self.repel_strength, defaults.repel_strength),
			(&mut self.link_distance, defaults.link_distance),
		] {
			if !(0.0..=MAX_MAGNITUDE).contains(&*value) {
				*value = default;
			}
		}
		if !usable_range(self.radius_range) {
			self.radius_range = defaults.radius_range;
		}
		if !usable_range(self.opacity_range) {
			self.opacity_range = defaults.opacity_range;
		}
		self
	}
}

fn usable_range((min, max): (f64, f64)) -> bool {
	min.is_finite() && max.is_finite() && min <= max && max - min <= MAX_MAGNITUDE
}

/// Owns the particle collection, surface bounds and random source.
pub struct ParticleField {
	particles: Vec<Particle>,
	config: FieldConfig,
	width: f64,
	height: f64,
	/// Length of the last `create_particles` fill; bursts sit after it.
	base_len: usize,
	rng: SmallRng,
}

impl ParticleField {
	/// Creates a field filled with `config.count` particles over `width`×`height`.
	///
	/// Unusable tunables in `config` fall back to their defaults.
	pub fn new(config: FieldConfig, width: f64, height: f64, seed: u64) -> Self {
		let mut field = Self {
			particles: Vec::with_capacity(config.count),
			config: config.sanitized(),
			width: 1.0,
			height: 1.0,
			base_len: 0,
			rng: SmallRng::seed_from_u64(seed),
		};
		field.resize(width, height);
		field
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	/// Sets the surface bounds and regenerates the whole collection.
	///
	/// Dimensions below 1 (or NaN) are clamped to 1.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = clamp_dimension(width);
		self.height = clamp_dimension(height);
		self.create_particles(self.config.count);
	}

	/// Replaces the collection with `count` freshly randomized particles.
	pub fn create_particles(&mut self, count: usize) {
		self.particles.clear();
		for _ in 0..count {
			let x = self.rng.gen_range(0.0..self.width);
			let y = self.rng.gen_range(0.0..self.height);
			let particle = self.random_particle(x, y);
			self.particles.push(particle);
		}
		self.base_len = count;
	}

	/// Appends `n` particles anchored at `(x, y)`.
	///
	/// Anchors outside the surface are wrapped in. Once the collection exceeds
	/// the ceiling, the oldest spawned particles are dropped; the base fill from
	/// the last [`create_particles`](Self::create_particles) is always kept, even
	/// when it alone reaches the ceiling.
	pub fn spawn_burst(&mut self, x: f64, y: f64, n: usize) {
		let (x, y) = (wrap(x, self.width), wrap(y, self.height));
		for _ in 0..n {
			let particle = self.random_particle(x, y);
			self.particles.push(particle);
		}

		let ceiling = self.config.max_particles.max(self.base_len + n);
		if self.particles.len() > ceiling {
			let excess = self.particles.len() - ceiling;
			self.particles.drain(self.base_len..self.base_len + excess);
		}
	}

	/// Advances one frame: pointer repulsion, linear drift, edge wrap.
	pub fn tick(&mut self, pointer: &Pointer) -> &[Particle] {
		let (width, height) = (self.width, self.height);
		let (radius, strength) = (self.config.repel_radius, self.config.repel_strength);

		for p in &mut self.particles {
			if let Some((px, py)) = pointer.position() {
				let (dx, dy) = repulsion(p.x - px, p.y - py, radius, strength);
				p.x += dx;
				p.y += dy;
			}

			p.x = wrap(p.x + p.vx, width);
			p.y = wrap(p.y + p.vy, height);
		}

		&self.particles
	}

	fn random_particle(&mut self, x: f64, y: f64) -> Particle {
		let speed = self.config.max_speed;
		let (r_min, r_max) = self.config.radius_range;
		let (o_min, o_max) = self.config.opacity_range;
		Particle {
			x,
			y,
			vx: sample(&mut self.rng, -speed, speed),
			vy: sample(&mut self.rng, -speed, speed),
			radius: sample(&mut self.rng, r_min, r_max),
			opacity: sample(&mut self.rng, o_min, o_max),
		}
	}
}

/// Displacement pushing a particle at offset `(dx, dy)` from the pointer away from it.
///
/// Zero outside `radius` and at exact coincidence, where the direction is undefined.
pub fn repulsion(dx: f64, dy: f64, radius: f64, strength: f64) -> (f64, f64) {
	let distance = (dx * dx + dy * dy).sqrt();
	if distance >= radius || distance == 0.0 {
		return (0.0, 0.0);
	}
	let force = (radius - distance) / radius * strength;
	(dx / distance * force, dy / distance * force)
}

/// Wraps one coordinate into `[0, bound)`, re-entering at the opposite edge.
///
/// Not a modulo: anything past an edge lands exactly on the other one.
pub fn wrap(v: f64, bound: f64) -> f64 {
	if v >= bound {
		0.0
	} else if v < 0.0 {
		just_below(bound)
	} else if v.is_nan() {
		0.0
	} else {
		v
	}
}

fn just_below(bound: f64) -> f64 {
	bound - bound * f64::EPSILON
}

fn clamp_dimension(v: f64) -> f64 {
	if v >= 1.0 { v } else { 1.0 }
}

fn sample(rng: &mut SmallRng, min: f64, max: f64) -> f64 {
	if max > min && (max - min).is_finite() {
		rng.gen_range(min..max)
	} else {
		min
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn field(width: f64, height: f64) -> ParticleField {
		ParticleField::new(FieldConfig::default(), width, height, 7)
	}

	fn in_bounds(field: &ParticleField) -> bool {
		field.particles().iter().all(|p| {
			p.x >= 0.0 && p.x < field.width() && p.y >= 0.0 && p.y < field.height()
		})
	}

	#[test]
	fn creation_fills_surface_with_randomized_particles() {
		let mut f = field(640.0, 480.0);
		assert_eq!(f.particles().len(), 80);
		assert!(in_bounds(&f));

		f.create_particles(200);
		assert_eq!(f.particles().len(), 200);
		assert!(in_bounds(&f));
		for p in f.particles() {
			assert!((-0.25..0.25).contains(&p.vx));
			assert!((-0.25..0.25).contains(&p.vy));
			assert!((1.0..3.0).contains(&p.radius));
			assert!((0.2..0.7).contains(&p.opacity));
		}
	}

	#[test]
	fn same_seed_gives_same_field() {
		let a = ParticleField::new(FieldConfig::default(), 300.0, 200.0, 42);
		let b = ParticleField::new(FieldConfig::default(), 300.0, 200.0, 42);
		assert_eq!(a.particles(), b.particles());
	}

	#[test]
	fn positions_stay_wrapped_every_frame() {
		let mut f = field(50.0, 40.0);
		let pointer = Pointer::at(25.0, 20.0);
		for frame in 0..2_000 {
			let p = if frame % 3 == 0 { Pointer::default() } else { pointer };
			f.tick(&p);
			assert!(in_bounds(&f), "out of bounds at frame {frame}");
		}
	}

	#[test]
	fn absent_pointer_is_pure_drift() {
		let mut f = field(1000.0, 1000.0);
		f.create_particles(0);
		f.spawn_burst(500.0, 500.0, 10);
		let before = f.particles().to_vec();

		let after = f.tick(&Pointer::default());
		for (b, a) in before.iter().zip(after) {
			assert_eq!(a.x, b.x + b.vx);
			assert_eq!(a.y, b.y + b.vy);
		}
	}

	#[test]
	fn repulsion_boundaries() {
		assert_eq!(repulsion(150.0, 0.0, 150.0, 1.5), (0.0, 0.0));
		assert_eq!(repulsion(0.0, 200.0, 150.0, 1.5), (0.0, 0.0));
		assert_eq!(repulsion(0.0, 0.0, 150.0, 1.5), (0.0, 0.0));

		let (dx, dy) = repulsion(75.0, 0.0, 150.0, 1.5);
		assert!((dx - 0.75).abs() < 1e-12);
		assert_eq!(dy, 0.0);

		let (dx, dy) = repulsion(-3.0, -4.0, 150.0, 1.5);
		assert!(dx < 0.0 && dy < 0.0);
		let force = (dx * dx + dy * dy).sqrt();
		assert!((force - (145.0 / 150.0 * 1.5)).abs() < 1e-12);
	}

	#[test]
	fn particle_under_pointer_only_drifts() {
		let mut f = field(400.0, 400.0);
		f.create_particles(0);
		f.spawn_burst(200.0, 200.0, 1);
		let before = f.particles()[0].clone();

		let after = &f.tick(&Pointer::at(200.0, 200.0))[0];
		assert!(after.x.is_finite() && after.y.is_finite());
		assert_eq!(after.x, before.x + before.vx);
		assert_eq!(after.y, before.y + before.vy);
	}

	#[test]
	fn nearby_particle_is_pushed_away() {
		let mut f = field(400.0, 400.0);
		f.create_particles(0);
		f.spawn_burst(210.0, 200.0, 1);
		let before = f.particles()[0].clone();

		let after = &f.tick(&Pointer::at(200.0, 200.0))[0];
		let push = (150.0 - 10.0) / 150.0 * 1.5;
		assert!((after.x - (before.x + push + before.vx)).abs() < 1e-9);
		assert!((after.y - (before.y + before.vy)).abs() < 1e-9);
	}

	#[test]
	fn wrap_reenters_at_opposite_edge() {
		assert_eq!(wrap(100.0, 100.0), 0.0);
		assert_eq!(wrap(100.2, 100.0), 0.0);
		assert_eq!(wrap(42.0, 100.0), 42.0);
		assert_eq!(wrap(0.0, 100.0), 0.0);
		let w = wrap(-0.1, 100.0);
		assert!(w < 100.0 && w > 99.999);
		assert_eq!(wrap(f64::NAN, 100.0), 0.0);
	}

	#[test]
	fn burst_appends_at_anchor() {
		let mut f = field(800.0, 600.0);
		f.spawn_burst(120.0, 340.0, 5);
		assert_eq!(f.particles().len(), 85);
		for p in &f.particles()[80..] {
			assert_eq!((p.x, p.y), (120.0, 340.0));
		}
	}

	#[test]
	fn bursts_past_ceiling_evict_oldest_spawned() {
		let config = FieldConfig {
			count: 10,
			burst: 5,
			max_particles: 20,
			..FieldConfig::default()
		};
		let mut f = ParticleField::new(config, 800.0, 600.0, 1);
		let base = f.particles().to_vec();

		f.spawn_burst(1.0, 1.0, 5);
		f.spawn_burst(2.0, 2.0, 5);
		assert_eq!(f.particles().len(), 20);
		f.spawn_burst(3.0, 3.0, 5);
		assert_eq!(f.particles().len(), 20);

		assert_eq!(&f.particles()[..10], &base[..]);
		assert!(f.particles()[10..15].iter().all(|p| p.x == 2.0));
		assert!(f.particles()[15..].iter().all(|p| p.x == 3.0));
	}

	#[test]
	fn ceiling_never_below_one_burst_over_base() {
		let config = FieldConfig {
			count: 80,
			burst: 5,
			max_particles: 10,
			..FieldConfig::default()
		};
		let mut f = ParticleField::new(config, 800.0, 600.0, 3);
		let base = f.particles().to_vec();
		f.spawn_burst(1.0, 1.0, 5);
		f.spawn_burst(2.0, 2.0, 5);
		assert_eq!(f.particles().len(), 85);
		assert_eq!(&f.particles()[..80], &base[..]);
		assert!(f.particles()[80..].iter().all(|p| p.x == 2.0));
	}

	#[test]
	fn refill_with_other_count_becomes_the_kept_base() {
		let mut f = field(800.0, 600.0);
		f.create_particles(200);
		let base = f.particles().to_vec();
		for i in 0..41 {
			f.spawn_burst(i as f64, 5.0, 5);
		}
		assert_eq!(f.particles().len(), 400);
		assert_eq!(&f.particles()[..200], &base[..]);
		assert!(f.particles()[395..].iter().all(|p| p.x == 40.0));
		assert!(in_bounds(&f));
	}

	#[test]
	fn base_fill_above_ceiling_is_never_trimmed() {
		let mut f = field(800.0, 600.0);
		f.create_particles(500);
		let base = f.particles().to_vec();

		f.spawn_burst(5.0, 5.0, 5);
		assert_eq!(f.particles().len(), 505);
		f.spawn_burst(6.0, 6.0, 5);
		assert_eq!(f.particles().len(), 505);
		assert_eq!(&f.particles()[..500], &base[..]);
		assert!(f.particles()[500..].iter().all(|p| p.x == 6.0));
	}

	#[test]
	fn burst_anchor_outside_surface_wraps_in() {
		let mut f = field(800.0, 600.0);
		f.spawn_burst(900.0, -3.0, 5);
		assert_eq!(f.particles().len(), 85);
		for p in &f.particles()[80..] {
			assert_eq!((p.x, p.y), (0.0, just_below(600.0)));
		}
		assert!(in_bounds(&f));
	}

	#[test]
	fn oversized_tunables_fall_back_to_defaults() {
		let config: FieldConfig = serde_json::from_str(
			r#"{
				"max_speed": 1e308,
				"radius_range": [-1e308, 1e308],
				"opacity_range": [0.9, 0.1],
				"repel_radius": -5.0
			}"#,
		)
		.unwrap();
		let mut f = ParticleField::new(config, 320.0, 240.0, 11);
		assert_eq!(f.config().max_speed, 0.25);
		assert_eq!(f.config().radius_range, (1.0, 3.0));
		assert_eq!(f.config().opacity_range, (0.2, 0.7));
		assert_eq!(f.config().repel_radius, 150.0);

		f.spawn_burst(10.0, 10.0, 5);
		for _ in 0..100 {
			f.tick(&Pointer::at(12.0, 10.0));
		}
		assert!(in_bounds(&f));
		assert!(f.particles().iter().all(|p| p.vx.abs() <= 0.25 && p.radius >= 1.0));
	}

	#[test]
	fn sampling_degenerate_spans_returns_lower_bound() {
		let mut rng = SmallRng::seed_from_u64(0);
		assert_eq!(sample(&mut rng, 2.0, 2.0), 2.0);
		assert_eq!(sample(&mut rng, 3.0, 1.0), 3.0);
		assert_eq!(sample(&mut rng, -f64::MAX, f64::MAX), -f64::MAX);
		assert!((0.0..1.0).contains(&sample(&mut rng, 0.0, 1.0)));
	}

	#[test]
	fn resize_replaces_collection_within_new_bounds() {
		let mut f = field(1920.0, 1080.0);
		f.spawn_burst(10.0, 10.0, 5);
		f.resize(320.0, 240.0);
		assert_eq!(f.particles().len(), 80);
		assert_eq!((f.width(), f.height()), (320.0, 240.0));
		assert!(in_bounds(&f));
	}

	#[test]
	fn degenerate_dimensions_clamp_to_one() {
		let mut f = field(0.0, -5.0);
		assert_eq!((f.width(), f.height()), (1.0, 1.0));
		assert!(in_bounds(&f));
		f.tick(&Pointer::at(0.5, 0.5));
		assert!(in_bounds(&f));
	}
}
