//! Particle field simulation.
//!
//! Pure 2D kinematics over a wrapped (toroidal) surface: a fixed batch of
//! particles drifts, gets nudged toward the pointer, and is kept from settling
//! by damping plus jitter. Nothing here touches the browser, so a harness can
//! single-step frames with a deterministic random source.

use super::config::FieldConfig;
use super::rng::RandomSource;

/// Velocity damping applied every frame.
const DAMPING: f64 = 0.99;
/// Per-axis jitter band used to wake particles that slowed below threshold.
const JITTER: f64 = 0.1;

/// A single drifting particle.
#[derive(Clone, Debug)]
pub struct Particle {
	/// Horizontal position in surface space.
	pub x: f64,
	/// Vertical position in surface space.
	pub y: f64,
	/// Horizontal velocity, surface units per frame.
	pub vx: f64,
	/// Vertical velocity, surface units per frame.
	pub vy: f64,
	/// Draw radius, fixed at spawn.
	pub size: f64,
}

impl Particle {
	fn spawn(config: &FieldConfig, width: f64, height: f64, rng: &mut dyn RandomSource) -> Self {
		Self {
			x: rng.next_f64() * width,
			y: rng.next_f64() * height,
			vx: rng.symmetric(config.base_speed),
			vy: rng.symmetric(config.base_speed),
			size: rng.in_range(config.size_min, config.size_max),
		}
	}

	fn step(
		&mut self,
		pointer: Option<Pointer>,
		config: &FieldConfig,
		width: f64,
		height: f64,
		rng: &mut dyn RandomSource,
	) {
		if let Some(p) = pointer {
			let (dx, dy) = (p.x - self.x, p.y - self.y);
			let dist = (dx * dx + dy * dy).sqrt();
			if dist > 0.0 && dist < config.pointer_radius {
				let force = (config.pointer_radius - dist) / config.pointer_radius;
				self.vx += dx / dist * force * config.pointer_force;
				self.vy += dy / dist * force * config.pointer_force;
			}
		}

		self.x += self.vx;
		self.y += self.vy;

		// Torus wrap: exit one edge, re-enter the opposite one.
		self.x = self.x.rem_euclid(width);
		self.y = self.y.rem_euclid(height);

		self.vx *= DAMPING;
		self.vy *= DAMPING;

		// Re-inject energy once damping has nearly stalled the particle.
		let speed = (self.vx * self.vx + self.vy * self.vy).sqrt();
		if speed < config.base_speed * 0.5 {
			self.vx += rng.symmetric(JITTER);
			self.vy += rng.symmetric(JITTER);
		}
	}
}

/// Pointer position in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
	/// Horizontal surface coordinate.
	pub x: f64,
	/// Vertical surface coordinate.
	pub y: f64,
}

/// Input snapshot consumed by one simulation step.
///
/// Event callbacks write into the component's copy; each frame hands a fresh
/// snapshot to [`ParticleField::step`] rather than letting the update read
/// ambient state.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
	/// Pointer position, if the pointer is over the page.
	pub pointer: Option<Pointer>,
}

/// Lifecycle of the simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
	/// Built but not started; steps are ignored.
	#[default]
	Idle,
	/// Advancing one step per frame.
	Running,
	/// Halted; steps are ignored again.
	Stopped,
}

/// A proximity link between two particles, valid for one frame.
#[derive(Clone, Copy, Debug)]
pub struct Link {
	/// Index of the first particle.
	pub a: usize,
	/// Index of the second particle.
	pub b: usize,
	/// Stroke alpha: linear falloff with distance, capped by the configured
	/// maximum fraction.
	pub alpha: f64,
}

/// The particle batch plus surface bounds and run state.
pub struct ParticleField {
	config: FieldConfig,
	particles: Vec<Particle>,
	width: f64,
	height: f64,
	state: RunState,
}

impl ParticleField {
	/// Spawn a fresh field over a `width` by `height` surface.
	pub fn new(
		config: FieldConfig,
		width: f64,
		height: f64,
		rng: &mut dyn RandomSource,
	) -> Self {
		let particles = Self::spawn_batch(&config, width, height, rng);
		Self {
			config,
			particles,
			width,
			height,
			state: RunState::Idle,
		}
	}

	/// Build a field from an explicit batch, for harnesses that need exact
	/// starting state.
	pub fn from_particles(
		config: FieldConfig,
		width: f64,
		height: f64,
		particles: Vec<Particle>,
	) -> Self {
		Self {
			config,
			particles,
			width,
			height,
			state: RunState::Idle,
		}
	}

	fn spawn_batch(
		config: &FieldConfig,
		width: f64,
		height: f64,
		rng: &mut dyn RandomSource,
	) -> Vec<Particle> {
		(0..config.particle_count)
			.map(|_| Particle::spawn(config, width, height, rng))
			.collect()
	}

	/// Begin advancing on [`ParticleField::step`] calls.
	pub fn start(&mut self) {
		if self.state == RunState::Idle {
			self.state = RunState::Running;
		}
	}

	/// Halt; subsequent steps are ignored.
	pub fn stop(&mut self) {
		if self.state == RunState::Running {
			self.state = RunState::Stopped;
		}
	}

	/// Current run state.
	pub fn run_state(&self) -> RunState {
		self.state
	}

	/// The current batch.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Surface dimensions.
	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// Advance one frame. A no-op unless the field is running.
	pub fn step(&mut self, input: FrameInput, rng: &mut dyn RandomSource) {
		if self.state != RunState::Running {
			return;
		}
		for particle in &mut self.particles {
			particle.step(input.pointer, &self.config, self.width, self.height, rng);
		}
	}

	/// Proximity links for the current frame.
	///
	/// The O(n²) pairwise pass; acceptable because the batch is small and its
	/// size fixed at startup.
	pub fn links(&self) -> Vec<Link> {
		let threshold = self.config.link_distance;
		let mut links = Vec::new();
		for a in 0..self.particles.len() {
			for b in (a + 1)..self.particles.len() {
				let (pa, pb) = (&self.particles[a], &self.particles[b]);
				let (dx, dy) = (pa.x - pb.x, pa.y - pb.y);
				let dist = (dx * dx + dy * dy).sqrt();
				if dist < threshold {
					links.push(Link {
						a,
						b,
						alpha: (1.0 - dist / threshold) * self.config.link_max_alpha,
					});
				}
			}
		}
		links
	}

	/// Resize the surface and respawn the whole batch. Run state is kept.
	pub fn resize(&mut self, width: f64, height: f64, rng: &mut dyn RandomSource) {
		self.width = width;
		self.height = height;
		self.particles = Self::spawn_batch(&self.config, width, height, rng);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::rng::HashRandom;

	fn small_config() -> FieldConfig {
		FieldConfig {
			particle_count: 8,
			..FieldConfig::default()
		}
	}

	fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle {
			x,
			y,
			vx,
			vy,
			size: 2.0,
		}
	}

	#[test]
	fn test_spawn_places_batch_inside_bounds() {
		let mut rng = HashRandom::new(1.0);
		let field = ParticleField::new(FieldConfig::default(), 800.0, 600.0, &mut rng);
		assert_eq!(field.particles().len(), 100);
		for p in field.particles() {
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!(p.size >= 1.0 && p.size < 3.5);
			assert!(p.vx.abs() <= 0.2 && p.vy.abs() <= 0.2);
		}
	}

	#[test]
	fn test_step_is_ignored_until_started() {
		let mut rng = HashRandom::new(2.0);
		let mut field = ParticleField::new(small_config(), 800.0, 600.0, &mut rng);
		let before: Vec<(f64, f64)> = field.particles().iter().map(|p| (p.x, p.y)).collect();
		field.step(FrameInput::default(), &mut rng);
		let after: Vec<(f64, f64)> = field.particles().iter().map(|p| (p.x, p.y)).collect();
		assert_eq!(before, after);
		assert_eq!(field.run_state(), RunState::Idle);
	}

	#[test]
	fn test_stop_freezes_the_field() {
		let mut rng = HashRandom::new(2.5);
		let mut field = ParticleField::new(small_config(), 800.0, 600.0, &mut rng);
		field.start();
		field.step(FrameInput::default(), &mut rng);
		field.stop();
		let before: Vec<(f64, f64)> = field.particles().iter().map(|p| (p.x, p.y)).collect();
		field.step(FrameInput::default(), &mut rng);
		let after: Vec<(f64, f64)> = field.particles().iter().map(|p| (p.x, p.y)).collect();
		assert_eq!(before, after);
		assert_eq!(field.run_state(), RunState::Stopped);
	}

	#[test]
	fn test_step_integrates_wraps_then_damps() {
		// Speeds stay above the stall threshold, so the step is fully
		// deterministic and the rng is never consulted.
		let batch = vec![
			particle(10.0, 20.0, 1.0, -0.5),
			particle(799.5, 5.0, 1.0, 0.25),
		];
		let mut field = ParticleField::from_particles(small_config(), 800.0, 600.0, batch);
		field.start();
		let mut rng = HashRandom::new(3.0);
		field.step(FrameInput::default(), &mut rng);

		let p = &field.particles()[0];
		assert!((p.x - 11.0).abs() < 1e-12);
		assert!((p.y - 19.5).abs() < 1e-12);
		assert!((p.vx - 0.99).abs() < 1e-12);
		assert!((p.vy + 0.495).abs() < 1e-12);

		// Second particle crossed the right edge and re-entered at the left.
		let q = &field.particles()[1];
		assert!((q.x - 0.5).abs() < 1e-12);
	}

	#[test]
	fn test_no_pointer_means_no_impulse() {
		let batch = vec![particle(400.0, 300.0, 0.3, 0.4)];
		let mut field = ParticleField::from_particles(small_config(), 800.0, 600.0, batch);
		field.start();
		let mut rng = HashRandom::new(4.0);
		field.step(FrameInput { pointer: None }, &mut rng);

		let p = &field.particles()[0];
		assert!((p.vx - 0.3 * DAMPING).abs() < 1e-12);
		assert!((p.vy - 0.4 * DAMPING).abs() < 1e-12);
	}

	#[test]
	fn test_pointer_attracts_within_radius() {
		// Distance 50 of radius 200: force is (200 - 50) / 200 = 0.75.
		let batch = vec![particle(100.0, 100.0, 0.3, 0.0)];
		let mut field = ParticleField::from_particles(small_config(), 800.0, 600.0, batch);
		field.start();
		let mut rng = HashRandom::new(5.0);
		let input = FrameInput {
			pointer: Some(Pointer { x: 150.0, y: 100.0 }),
		};
		field.step(input, &mut rng);

		let impulse = 0.75 * 0.02;
		let p = &field.particles()[0];
		assert!((p.x - (100.0 + 0.3 + impulse)).abs() < 1e-12);
		assert!((p.vx - (0.3 + impulse) * DAMPING).abs() < 1e-12);
		assert!(p.vy.abs() < 1e-12);
	}

	#[test]
	fn test_pointer_outside_radius_is_inert() {
		let batch = vec![particle(100.0, 100.0, 0.3, 0.0)];
		let mut field = ParticleField::from_particles(small_config(), 800.0, 600.0, batch);
		field.start();
		let mut rng = HashRandom::new(6.0);
		let input = FrameInput {
			pointer: Some(Pointer { x: 350.0, y: 100.0 }),
		};
		field.step(input, &mut rng);

		let p = &field.particles()[0];
		assert!((p.vx - 0.3 * DAMPING).abs() < 1e-12);
	}

	#[test]
	fn test_wrap_invariant_holds_over_many_steps() {
		let mut rng = HashRandom::new(7.0);
		let mut field = ParticleField::new(small_config(), 640.0, 480.0, &mut rng);
		field.start();
		// A pointer parked near a corner keeps pumping energy in.
		let input = FrameInput {
			pointer: Some(Pointer { x: 10.0, y: 10.0 }),
		};
		for _ in 0..2000 {
			field.step(input, &mut rng);
			for p in field.particles() {
				assert!((0.0..640.0).contains(&p.x));
				assert!((0.0..480.0).contains(&p.y));
			}
		}
	}

	#[test]
	fn test_slow_particles_get_jitter() {
		// Speed 0.01 is far below the 0.2 threshold, so after damping the
		// jitter branch must perturb at least one axis.
		let batch = vec![particle(50.0, 50.0, 0.01, 0.0)];
		let mut field = ParticleField::from_particles(small_config(), 800.0, 600.0, batch);
		field.start();
		let mut rng = HashRandom::new(8.0);
		field.step(FrameInput::default(), &mut rng);

		let p = &field.particles()[0];
		let damped_only = 0.01 * DAMPING;
		assert!((p.vx - damped_only).abs() > 1e-9 || p.vy.abs() > 1e-9);
	}

	#[test]
	fn test_fast_particles_get_no_jitter() {
		let batch = vec![particle(50.0, 50.0, 0.5, 0.0)];
		let mut field = ParticleField::from_particles(small_config(), 800.0, 600.0, batch);
		field.start();
		let mut rng = HashRandom::new(8.5);
		field.step(FrameInput::default(), &mut rng);

		let p = &field.particles()[0];
		assert!((p.vx - 0.5 * DAMPING).abs() < 1e-12);
		assert_eq!(p.vy, 0.0);
	}

	#[test]
	fn test_links_fall_off_linearly() {
		// Two particles 90 apart link at half strength; the third is too far
		// from both to link at all.
		let batch = vec![
			particle(0.0, 0.0, 0.0, 0.0),
			particle(90.0, 0.0, 0.0, 0.0),
			particle(500.0, 500.0, 0.0, 0.0),
		];
		let field = ParticleField::from_particles(small_config(), 800.0, 600.0, batch);
		let links = field.links();
		assert_eq!(links.len(), 1);
		let link = links[0];
		assert_eq!((link.a, link.b), (0, 1));
		assert!((link.alpha - 0.5 * 0.25).abs() < 1e-12);
	}

	#[test]
	fn test_link_vanishes_at_threshold() {
		let at_threshold = vec![
			particle(0.0, 0.0, 0.0, 0.0),
			particle(180.0, 0.0, 0.0, 0.0),
		];
		let field = ParticleField::from_particles(small_config(), 800.0, 600.0, at_threshold);
		assert!(field.links().is_empty());

		let just_inside = vec![
			particle(0.0, 0.0, 0.0, 0.0),
			particle(179.0, 0.0, 0.0, 0.0),
		];
		let field = ParticleField::from_particles(small_config(), 800.0, 600.0, just_inside);
		let links = field.links();
		assert_eq!(links.len(), 1);
		assert!(links[0].alpha > 0.0);
	}

	#[test]
	fn test_resize_respawns_batch_in_new_bounds() {
		let mut rng = HashRandom::new(9.0);
		let mut field = ParticleField::new(small_config(), 800.0, 600.0, &mut rng);
		field.start();
		field.resize(320.0, 240.0, &mut rng);

		assert_eq!(field.size(), (320.0, 240.0));
		assert_eq!(field.particles().len(), 8);
		for p in field.particles() {
			assert!((0.0..320.0).contains(&p.x));
			assert!((0.0..240.0).contains(&p.y));
		}
		assert_eq!(field.run_state(), RunState::Running);
	}
}
