//! image-particles: turns an uploaded picture into a field of colored particles.
//!
//! The picture is drawn on a canvas, sampled on a regular grid and replaced by
//! one dot per sample. Dots scatter away from the mouse and drift back to where
//! they came from.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{ParticleConfig, ParticleFieldCanvas};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("image-particles: logging initialized");
}

/// Load sampling options from a script element with id="particle-config".
/// Expected format: JSON with any of { size, gap, reserved_height }.
fn load_config() -> Option<ParticleConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<ParticleConfig>(&json_text) {
		Ok(config) => {
			info!(
				"image-particles: config size={} gap={}",
				config.size, config.gap
			);
			Some(config)
		}
		Err(e) => {
			warn!("image-particles: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Image Particles" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main class="particle-app">
			<ParticleFieldCanvas config=config />
		</main>
	}
}
