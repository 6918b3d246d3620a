//! Drag / hover-debounce / wheel-zoom state machine

use std::time::{Duration, Instant};

use crate::config::{HOVER_DELAY_MS, ZOOM_STEP_IN, ZOOM_STEP_OUT};
use crate::core::{Point2D, ReferenceDataset};

use super::picker::{self, HoveredPoint};
use super::view::ViewTransform;

/// Cursor affordance for the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
	Grab,
	Grabbing,
	Pointer,
}

/// One state at a time: entering any state cancels the previous one, which
/// is what makes the hover debounce cancellable without a timer handle.
#[derive(Debug)]
enum HoverState {
	Idle,
	Dragging { last: (f32, f32) },
	Pending { point: HoveredPoint, since: Instant },
	Shown { point: HoveredPoint },
}

/// Sequences mouse events into pan, zoom, and debounced hover.
///
/// Owns the view state; the dataset and user point are passed per call so
/// the session has a single owner.
pub struct InteractionController {
	view: ViewTransform,
	state: HoverState,
	cursor_pos: (f32, f32),
	canvas: (f32, f32),
}

impl InteractionController {
	pub fn new(canvas: (f32, f32)) -> Self {
		Self {
			view: ViewTransform::new(),
			state: HoverState::Idle,
			cursor_pos: (0.0, 0.0),
			canvas,
		}
	}

	pub fn set_canvas(&mut self, canvas: (f32, f32)) {
		self.canvas = canvas;
	}

	pub fn view(&self) -> &ViewTransform {
		&self.view
	}

	pub fn reset_view(&mut self) {
		self.view = ViewTransform::new();
	}

	/// The point whose popup is currently shown
	pub fn popup(&self) -> Option<&HoveredPoint> {
		match &self.state {
			HoverState::Shown { point } => Some(point),
			_ => None,
		}
	}

	pub fn cursor(&self) -> Cursor {
		match &self.state {
			HoverState::Dragging { .. } => Cursor::Grabbing,
			HoverState::Pending { .. } | HoverState::Shown { .. } => Cursor::Pointer,
			HoverState::Idle => Cursor::Grab,
		}
	}

	pub fn cursor_pos(&self) -> (f32, f32) {
		self.cursor_pos
	}

	/// Whether the last transition changed anything a frame shows: the
	/// popup or the cursor affordance
	fn visible_change(&self, popup_before: bool, cursor_before: Cursor) -> bool {
		self.popup().is_some() != popup_before || self.cursor() != cursor_before
	}

	/// Returns true when a redraw is needed
	pub fn mouse_down(&mut self, pos: (f32, f32)) -> bool {
		let (popup, cursor) = (self.popup().is_some(), self.cursor());
		self.cursor_pos = pos;
		self.state = HoverState::Dragging { last: pos };
		self.visible_change(popup, cursor)
	}

	pub fn mouse_up(&mut self) -> bool {
		let (popup, cursor) = (self.popup().is_some(), self.cursor());
		if matches!(self.state, HoverState::Dragging { .. }) {
			self.state = HoverState::Idle;
		}
		self.visible_change(popup, cursor)
	}

	pub fn mouse_move(
		&mut self,
		pos: (f32, f32),
		dataset: &ReferenceDataset,
		user_point: Option<Point2D>,
	) -> bool {
		self.cursor_pos = pos;

		if let HoverState::Dragging { last } = self.state {
			self.view.pan(pos.0 - last.0, pos.1 - last.1);
			self.state = HoverState::Dragging { last: pos };
			return true;
		}

		let (popup, cursor) = (self.popup().is_some(), self.cursor());

		match picker::pick(pos, dataset, user_point, &self.view, self.canvas) {
			Some(picked) => {
				let same = match &self.state {
					HoverState::Pending { point, .. } | HoverState::Shown { point } => {
						point.kind == picked.kind
					}
					_ => false,
				};

				if !same {
					self.state = HoverState::Pending {
						point: picked,
						since: Instant::now(),
					};
				}
			}
			None => {
				self.state = HoverState::Idle;
			}
		}

		self.visible_change(popup, cursor)
	}

	/// Wheel zoom anchored at the cursor; hover state is left alone and the
	/// next mouse move re-evaluates it against the shifted positions.
	pub fn wheel(&mut self, pos: (f32, f32), zoom_in: bool) -> bool {
		let factor = if zoom_in { ZOOM_STEP_IN } else { ZOOM_STEP_OUT };
		self.view.zoom_at(pos.0, pos.1, factor)
	}

	pub fn mouse_leave(&mut self) -> bool {
		let (popup, cursor) = (self.popup().is_some(), self.cursor());
		self.state = HoverState::Idle;
		self.visible_change(popup, cursor)
	}

	/// Drive the hover debounce. A pending hover older than the delay is
	/// revalidated by re-picking at the current cursor: the popup only shows
	/// if the same point is still there.
	pub fn tick(&mut self, dataset: &ReferenceDataset, user_point: Option<Point2D>) -> bool {
		let expired = match &self.state {
			HoverState::Pending { since, .. } => {
				since.elapsed() >= Duration::from_millis(HOVER_DELAY_MS)
			}
			_ => false,
		};

		if !expired {
			return false;
		}

		let pending_kind = match &self.state {
			HoverState::Pending { point, .. } => point.kind,
			_ => unreachable!(),
		};

		let (popup, cursor) = (self.popup().is_some(), self.cursor());

		match picker::pick(self.cursor_pos, dataset, user_point, &self.view, self.canvas) {
			Some(current) if current.kind == pending_kind => {
				self.state = HoverState::Shown { point: current };
			}
			Some(current) => {
				self.state = HoverState::Pending {
					point: current,
					since: Instant::now(),
				};
			}
			None => {
				self.state = HoverState::Idle;
			}
		}

		self.visible_change(popup, cursor)
	}
}
