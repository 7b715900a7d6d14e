//! Canvas drawing for the particle field.
//!
//! One pass per frame: clear the surface, fill every particle, stroke every
//! link. Colors come from the theme; link alpha was already computed by the
//! simulation's pair pass.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::ParticleField;
use super::theme::Theme;

/// Draws the whole field for the current frame.
pub fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let (width, height) = field.size();
	ctx.clear_rect(0.0, 0.0, width, height);

	ctx.set_fill_style_str(&theme.particle.to_css());
	for p in field.particles() {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.size, 0.0, PI * 2.0);
		ctx.fill();
	}

	ctx.set_line_width(1.0);
	let particles = field.particles();
	for link in field.links() {
		let (a, b) = (&particles[link.a], &particles[link.b]);
		ctx.set_stroke_style_str(&theme.link.with_alpha(link.alpha).to_css());
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}
}
