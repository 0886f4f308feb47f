//! Typewriter headline cycling through a list of roles.
//!
//! [`Typewriter`] is a plain state machine; each [`Typewriter::step`] yields the
//! text to show and how long to wait before the next step. The installer drives
//! it with `setTimeout`.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Deserialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::{by_id, document, window};
use crate::error::SiteError;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
	pub roles: Vec<String>,
	/// Delay after typing one character.
	pub type_ms: u32,
	/// Delay after deleting one character.
	pub delete_ms: u32,
	/// Pause once a role is fully typed.
	pub hold_ms: u32,
	/// Delay before the first character.
	pub start_delay_ms: u32,
}

impl Default for TypingConfig {
	fn default() -> Self {
		Self {
			roles: [
				"AI/ML Engineer",
				"Data Scientist",
				"Python Developer",
				"YouTube Educator",
			]
			.map(String::from)
			.to_vec(),
			type_ms: 100,
			delete_ms: 50,
			hold_ms: 2000,
			start_delay_ms: 1500,
		}
	}
}

/// One step of output.
#[derive(Clone, Debug, PartialEq)]
pub struct TypingFrame {
	pub text: String,
	pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
	roles: Vec<Vec<char>>,
	role: usize,
	shown: usize,
	deleting: bool,
}

impl Typewriter {
	/// Empty roles are dropped; with none left the typewriter never produces output.
	pub fn new(roles: &[String]) -> Self {
		Self {
			roles: roles
				.iter()
				.filter(|r| !r.is_empty())
				.map(|r| r.chars().collect())
				.collect(),
			role: 0,
			shown: 0,
			deleting: false,
		}
	}

	/// Types or deletes one character and reports the next delay.
	pub fn step(&mut self, config: &TypingConfig) -> Option<TypingFrame> {
		let role = self.roles.get(self.role)?;
		let mut delay_ms = if self.deleting {
			config.delete_ms
		} else {
			config.type_ms
		};

		if self.deleting {
			self.shown = self.shown.saturating_sub(1);
		} else {
			self.shown = (self.shown + 1).min(role.len());
		}
		let text = role[..self.shown].iter().collect();

		if !self.deleting && self.shown == role.len() {
			delay_ms = config.hold_ms;
			self.deleting = true;
		} else if self.deleting && self.shown == 0 {
			self.deleting = false;
			self.role = (self.role + 1) % self.roles.len();
		}

		Some(TypingFrame { text, delay_ms })
	}
}

/// `setTimeout` takes an `i32`; longer delays saturate instead of wrapping negative.
fn timeout_ms(ms: u32) -> i32 {
	i32::try_from(ms).unwrap_or(i32::MAX)
}

pub fn install(config: &TypingConfig) -> Result<(), SiteError> {
	let element: HtmlElement = by_id(&document()?, "role-text")?;
	let window = window()?;

	let config = config.clone();
	let start_delay = timeout_ms(config.start_delay_ms);
	let mut typewriter = Typewriter::new(&config.roles);

	let step: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let step_inner = step.clone();
	*step.borrow_mut() = Some(Closure::new(move || {
		let Some(frame) = typewriter.step(&config) else {
			return;
		};
		element.set_text_content(Some(&frame.text));
		if let (Some(win), Some(cb)) = (web_sys::window(), step_inner.borrow().as_ref()) {
			let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
				cb.as_ref().unchecked_ref(),
				timeout_ms(frame.delay_ms),
			);
		}
	}));
	if let Some(ref cb) = *step.borrow() {
		window.set_timeout_with_callback_and_timeout_and_arguments_0(
			cb.as_ref().unchecked_ref(),
			start_delay,
		)?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config() -> TypingConfig {
		TypingConfig {
			roles: vec!["ab".into(), "c".into()],
			..TypingConfig::default()
		}
	}

	fn run(typewriter: &mut Typewriter, steps: usize) -> Vec<(String, u32)> {
		let config = config();
		(0..steps)
			.map(|_| {
				let frame = typewriter.step(&config).unwrap();
				(frame.text, frame.delay_ms)
			})
			.collect()
	}

	#[test]
	fn types_holds_deletes_and_moves_on() {
		let mut t = Typewriter::new(&config().roles);
		let frames = run(&mut t, 8);
		let expected = [
			("a", 100),
			("ab", 2000),
			("a", 50),
			("", 50),
			("c", 2000),
			("", 50),
			("a", 100),
			("ab", 2000),
		];
		let expected: Vec<(String, u32)> =
			expected.iter().map(|(s, d)| (s.to_string(), *d)).collect();
		assert_eq!(frames, expected);
	}

	#[test]
	fn counts_characters_not_bytes() {
		let mut t = Typewriter::new(&["né".to_string()]);
		let frames = run(&mut t, 2);
		assert_eq!(frames[0].0, "n");
		assert_eq!(frames[1].0, "né");
	}

	#[test]
	fn no_roles_means_no_output() {
		let mut t = Typewriter::new(&["".to_string()]);
		assert_eq!(t.step(&config()), None);
		let mut t = Typewriter::new(&[]);
		assert_eq!(t.step(&config()), None);
	}

	#[test]
	fn huge_delays_saturate() {
		assert_eq!(timeout_ms(100), 100);
		assert_eq!(timeout_ms(i32::MAX as u32), i32::MAX);
		assert_eq!(timeout_ms(u32::MAX), i32::MAX);
	}
}
