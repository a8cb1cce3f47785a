//! Multi-step console prompts.
//!
//! A sequence asks an ordered list of single-field questions, one at a
//! time, validating and transforming each answer before advancing. Once
//! the last prompt is submitted the completion callback maps the collected
//! answers to an effect value the controller executes. Modeling this as a
//! queue of single-field prompts keeps the flow keystroke-driven, matching
//! the line-oriented interaction model of the rest of the UI.

use std::collections::VecDeque;
use std::fmt;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Rewrite an answer before validation (e.g. lowercase it).
pub type Transform = fn(String) -> String;

/// Accept or reject a transformed answer, with a message for display.
pub type Validate = fn(&str) -> Result<(), String>;

/// One question in a prompt sequence.
pub struct Prompt {
	label: String,
	response: String,
	transform: Option<Transform>,
	validate: Option<Validate>,
}

impl Prompt {
	/// A prompt with the given label and no transform or validator.
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			response: String::new(),
			transform: None,
			validate: None,
		}
	}

	/// Apply `transform` to the response on submit, before validation.
	pub fn with_transform(mut self, transform: Transform) -> Self {
		self.transform = Some(transform);
		self
	}

	/// Reject submissions that fail `validate`, keeping the prompt active.
	pub fn with_validator(mut self, validate: Validate) -> Self {
		self.validate = Some(validate);
		self
	}

	/// Question label shown in the console.
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Accumulated (and, once completed, transformed) answer.
	pub fn response(&self) -> &str {
		&self.response
	}

	/// Transform then validate the response. On failure the response is
	/// cleared so the user re-enters it from scratch.
	fn finalize(&mut self) -> Result<(), String> {
		if let Some(transform) = self.transform {
			self.response = transform(std::mem::take(&mut self.response));
		}
		if let Some(validate) = self.validate {
			validate(&self.response).map_err(|message| {
				self.response.clear();
				message
			})?;
		}
		Ok(())
	}
}

impl fmt::Display for Prompt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.label, self.response)
	}
}

/// Outcome of feeding one key event into an active sequence.
#[derive(Debug)]
pub enum PromptSignal<E> {
	/// Input consumed; the sequence is still collecting answers.
	Pending,
	/// The active prompt failed validation; message for display. The
	/// prompt stays active with an empty response.
	Invalid(String),
	/// Every prompt was answered; effect built by the completion callback.
	Completed(E),
}

/// Ordered queue of prompts plus the completion callback.
///
/// At most one prompt is active at a time. While a sequence is active it
/// owns the keyboard exclusively; the controller only intercepts escape to
/// cancel.
pub struct PromptSequence<E> {
	pending: VecDeque<Prompt>,
	active: Option<Prompt>,
	completed: Vec<Prompt>,
	on_complete: Option<Box<dyn FnOnce(Vec<Prompt>) -> E>>,
}

impl<E> Default for PromptSequence<E> {
	fn default() -> Self {
		Self {
			pending: VecDeque::new(),
			active: None,
			completed: Vec::new(),
			on_complete: None,
		}
	}
}

impl<E> PromptSequence<E> {
	/// An idle sequence with no prompts.
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether a prompt is currently open.
	pub fn is_active(&self) -> bool {
		self.active.is_some()
	}

	/// The currently open prompt, if any.
	pub fn active_prompt(&self) -> Option<&Prompt> {
		self.active.as_ref()
	}

	/// Open the first of `prompts` and queue the rest.
	///
	/// Starting with no prompts is refused: the sequence stays idle and the
	/// callback is dropped, so the caller never ends up waiting on input
	/// that can't arrive.
	pub fn start<F>(&mut self, prompts: Vec<Prompt>, on_complete: F)
	where
		F: FnOnce(Vec<Prompt>) -> E + 'static,
	{
		if prompts.is_empty() {
			return;
		}
		let mut pending: VecDeque<Prompt> = prompts.into();
		self.active = pending.pop_front();
		self.pending = pending;
		self.completed.clear();
		self.on_complete = Some(Box::new(on_complete));
	}

	/// Drop the whole sequence without running the callback.
	pub fn cancel(&mut self) {
		self.pending.clear();
		self.active = None;
		self.completed.clear();
		self.on_complete = None;
	}

	/// Feed one key event into the active prompt.
	///
	/// Enter submits; backspace removes the last character; any other
	/// character is appended to the response. Every key is consumed while
	/// a prompt is active.
	pub fn feed(&mut self, key: KeyEvent) -> PromptSignal<E> {
		if key.modifiers.contains(KeyModifiers::CONTROL) {
			return PromptSignal::Pending;
		}
		if key.code == KeyCode::Enter {
			return self.finalize_active();
		}
		let Some(active) = self.active.as_mut() else {
			return PromptSignal::Pending;
		};
		match key.code {
			KeyCode::Backspace => {
				active.response.pop();
			}
			KeyCode::Char(ch) => {
				active.response.push(ch);
			}
			_ => {}
		}
		PromptSignal::Pending
	}

	/// Submit the active prompt, advancing or completing the sequence.
	fn finalize_active(&mut self) -> PromptSignal<E> {
		let Some(mut active) = self.active.take() else {
			return PromptSignal::Pending;
		};
		if let Err(message) = active.finalize() {
			self.active = Some(active);
			return PromptSignal::Invalid(message);
		}
		self.completed.push(active);
		if let Some(next) = self.pending.pop_front() {
			self.active = Some(next);
			return PromptSignal::Pending;
		}
		let completed = std::mem::take(&mut self.completed);
		match self.on_complete.take() {
			Some(on_complete) => PromptSignal::Completed(on_complete(completed)),
			None => PromptSignal::Pending,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn plain(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	fn type_answer<E>(sequence: &mut PromptSequence<E>, answer: &str) -> PromptSignal<E> {
		for ch in answer.chars() {
			sequence.feed(plain(KeyCode::Char(ch)));
		}
		sequence.feed(plain(KeyCode::Enter))
	}

	fn lowercase(response: String) -> String {
		response.to_ascii_lowercase()
	}

	fn yes_or_no(response: &str) -> Result<(), String> {
		match response {
			"y" | "yes" | "n" | "no" => Ok(()),
			other => Err(format!("expected y or n, not {other:?}")),
		}
	}

	fn confirm(label: &str) -> Prompt {
		Prompt::new(label)
			.with_transform(lowercase)
			.with_validator(yes_or_no)
	}

	#[test]
	fn answers_are_collected_in_order() {
		let mut sequence: PromptSequence<Vec<String>> = PromptSequence::new();
		sequence.start(vec![Prompt::new("first"), Prompt::new("second")], |done| {
			done.into_iter().map(|p| p.response().to_string()).collect()
		});

		assert!(matches!(type_answer(&mut sequence, "one"), PromptSignal::Pending));
		assert!(sequence.is_active(), "second prompt should open");

		match type_answer(&mut sequence, "two") {
			PromptSignal::Completed(answers) => assert_eq!(answers, vec!["one", "two"]),
			other => panic!("expected completion, got {other:?}"),
		}
		assert!(!sequence.is_active());
	}

	#[test]
	fn validation_failure_clears_the_response_and_stays_active() {
		let mut sequence: PromptSequence<String> = PromptSequence::new();
		sequence.start(vec![confirm("sync? [y/n]")], |done| {
			done[0].response().to_string()
		});

		match type_answer(&mut sequence, "maybe") {
			PromptSignal::Invalid(message) => assert!(message.contains("expected y or n")),
			other => panic!("expected validation failure, got {other:?}"),
		}
		let active = sequence.active_prompt().expect("prompt stays active");
		assert_eq!(active.response(), "", "failed response must be cleared");

		match type_answer(&mut sequence, "YES") {
			PromptSignal::Completed(answer) => assert_eq!(answer, "yes"),
			other => panic!("expected completion after re-entry, got {other:?}"),
		}
	}

	#[test]
	fn backspace_edits_the_response() {
		let mut sequence: PromptSequence<String> = PromptSequence::new();
		sequence.start(vec![Prompt::new("name")], |done| {
			done[0].response().to_string()
		});
		for ch in "abx".chars() {
			sequence.feed(plain(KeyCode::Char(ch)));
		}
		sequence.feed(plain(KeyCode::Backspace));
		match sequence.feed(plain(KeyCode::Enter)) {
			PromptSignal::Completed(answer) => assert_eq!(answer, "ab"),
			other => panic!("expected completion, got {other:?}"),
		}
	}

	#[test]
	fn starting_with_no_prompts_is_refused() {
		let mut sequence: PromptSequence<()> = PromptSequence::new();
		sequence.start(Vec::new(), |_| ());
		assert!(!sequence.is_active());
		assert!(matches!(
			sequence.feed(plain(KeyCode::Enter)),
			PromptSignal::Pending
		));
	}

	#[test]
	fn cancel_drops_the_sequence_without_completing() {
		let mut sequence: PromptSequence<()> = PromptSequence::new();
		sequence.start(vec![Prompt::new("question")], |_| ());
		sequence.cancel();
		assert!(!sequence.is_active());
		assert!(matches!(
			sequence.feed(plain(KeyCode::Enter)),
			PromptSignal::Pending
		));
	}

	#[test]
	fn prompts_display_as_label_and_response() {
		let mut sequence: PromptSequence<()> = PromptSequence::new();
		sequence.start(vec![Prompt::new("push? [y/n]")], |_| ());
		sequence.feed(plain(KeyCode::Char('y')));
		let shown = sequence.active_prompt().unwrap().to_string();
		assert_eq!(shown, "push? [y/n]: y");
	}
}
