//! Map command - interactive pan/zoom scatterplot in the terminal

use anyhow::Result;
use crossterm::{
	event::{
		self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
		Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind,
	},
	execute,
	terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
	layout::{Constraint, Direction, Layout, Rect},
	style::{Color, Modifier, Style},
	symbols::Marker,
	text::{Line, Span},
	widgets::{
		canvas::{Canvas, Line as CanvasLine},
		Block, Borders, Clear, Paragraph,
	},
	Terminal,
};
use std::{io, path::Path, time::Duration};

use crate::corpus;
use crate::error::VibemapError;
use crate::map::{scene, Cursor, HoveredPoint, InteractionController, PickKind, SessionState};
use crate::storage;

pub fn run(dir: &Path) -> Result<()> {
	let baseline = storage::load_baseline(dir)?.ok_or(VibemapError::NoBaseline)?;
	if baseline.dataset.is_empty() {
		return Err(VibemapError::NoBaseline.into());
	}

	let model = baseline.model();
	let user = storage::load_analysis(dir);
	let session = SessionState::new(baseline.dataset, model, user);

	enable_raw_mode()?;
	let mut stdout = io::stdout();
	execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
	let backend = ratatui::backend::CrosstermBackend::new(stdout);
	let mut terminal = Terminal::new(backend)?;

	let result = event_loop(&mut terminal, &session);

	cleanup_terminal()?;
	result
}

fn event_loop(
	terminal: &mut Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>,
	session: &SessionState,
) -> Result<()> {
	let size = terminal.size()?;
	let mut controller = InteractionController::new(canvas_size(size.width, size.height));
	let mut redraw = true;

	loop {
		if redraw {
			terminal.draw(|f| draw(f, session, &controller))?;
			redraw = false;
		}

		// Poll at a 50ms tick so the hover debounce can fire between events
		if event::poll(Duration::from_millis(50))? {
			match event::read()? {
				Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
					KeyCode::Esc | KeyCode::Char('q') => break,
					KeyCode::Char('r') => {
						controller.reset_view();
						redraw = true;
					}
					_ => {}
				},
				Event::Mouse(mouse) => {
					let pos = (mouse.column as f32, mouse.row as f32);
					redraw |= match mouse.kind {
						MouseEventKind::Down(MouseButton::Left) => controller.mouse_down(pos),
						MouseEventKind::Up(MouseButton::Left) => controller.mouse_up(),
						MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
							controller.mouse_move(pos, &session.dataset, session.user_point())
						}
						MouseEventKind::ScrollUp => controller.wheel(pos, true),
						MouseEventKind::ScrollDown => controller.wheel(pos, false),
						_ => false,
					};
				}
				Event::FocusLost => {
					redraw |= controller.mouse_leave();
				}
				Event::Resize(w, h) => {
					controller.set_canvas(canvas_size(w, h));
					redraw = true;
				}
				_ => {}
			}
		}

		redraw |= controller.tick(&session.dataset, session.user_point());
	}

	Ok(())
}

/// Canvas cell dimensions: everything except the status bar
fn canvas_size(width: u16, height: u16) -> (f32, f32) {
	(width as f32, height.saturating_sub(1) as f32)
}

fn draw(f: &mut ratatui::Frame, session: &SessionState, controller: &InteractionController) {
	let chunks = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Min(1),    // Map
			Constraint::Length(1), // Status Bar
		])
		.split(f.area());

	draw_canvas(f, session, controller, chunks[0]);
	draw_status(f, controller, chunks[1]);

	if let Some(point) = controller.popup() {
		draw_popup(f, session, controller, point);
	}
}

fn draw_canvas(
	f: &mut ratatui::Frame,
	session: &SessionState,
	controller: &InteractionController,
	area: Rect,
) {
	let canvas = (area.width as f32, area.height as f32);
	let scene = scene::build(
		&session.dataset,
		&session.registry,
		session.user_point(),
		controller.view(),
		canvas,
	);

	let h = area.height as f64;
	let widget = Canvas::default()
		.x_bounds([0.0, area.width as f64])
		.y_bounds([0.0, h])
		.marker(Marker::Braille)
		.paint(move |ctx| {
			// Terminal canvas y grows upward; the view space is y-down
			for line in &scene.grid {
				ctx.draw(&CanvasLine {
					x1: line.from.0 as f64,
					y1: h - line.from.1 as f64,
					x2: line.to.0 as f64,
					y2: h - line.to.1 as f64,
					color: Color::DarkGray,
				});
			}

			ctx.layer();

			for point in &scene.points {
				let (r, g, b) = point.color;
				let color = Color::Rgb(r, g, b);
				let x = point.screen.0 as f64;
				let y = h - point.screen.1 as f64;
				ctx.print(x, y, Line::styled("●".to_string(), Style::default().fg(color)));
				ctx.print(
					x + 2.0,
					y,
					Line::styled(
						point.label.clone(),
						Style::default().fg(color).add_modifier(Modifier::DIM),
					),
				);
			}

			if let Some(user) = &scene.user {
				let x = user.screen.0 as f64;
				let y = h - user.screen.1 as f64;
				ctx.print(
					x,
					y,
					Line::styled(
						"◉".to_string(),
						Style::default()
							.fg(Color::Magenta)
							.add_modifier(Modifier::BOLD),
					),
				);
				ctx.print(
					x - 1.0,
					y + 1.0,
					Line::styled(
						"YOU".to_string(),
						Style::default()
							.fg(Color::White)
							.add_modifier(Modifier::BOLD),
					),
				);
			}
		});

	f.render_widget(widget, area);
}

fn draw_status(f: &mut ratatui::Frame, controller: &InteractionController, area: Rect) {
	let hint = match controller.cursor() {
		Cursor::Grabbing => "✊ panning",
		Cursor::Pointer => "➤ point under cursor",
		Cursor::Grab => "✥ drag to pan · wheel to zoom · hover to inspect · r reset · q quit",
	};

	let status = Line::from(vec![
		Span::styled(format!(" zoom {:.1}x ", controller.view().zoom), Style::default().fg(Color::Blue)),
		Span::styled(hint, Style::default().fg(Color::DarkGray)),
	]);

	f.render_widget(Paragraph::new(status), area);
}

fn draw_popup(
	f: &mut ratatui::Frame,
	session: &SessionState,
	controller: &InteractionController,
	point: &HoveredPoint,
) {
	let (title, lines, accent) = popup_content(session, point);

	let width: u16 = 46;
	let height = (lines.len() as u16 + 2).min(14);
	let frame = f.area();

	// Next to the cursor, nudged inside the frame
	let (cx, cy) = controller.cursor_pos();
	let x = (cx as u16 + 2).min(frame.width.saturating_sub(width));
	let y = (cy as u16 + 1).min(frame.height.saturating_sub(height));
	let area = Rect::new(x, y, width.min(frame.width), height.min(frame.height));

	let block = Block::default()
		.borders(Borders::ALL)
		.title(format!(" {} ", title))
		.border_style(Style::default().fg(accent));

	f.render_widget(Clear, area);
	f.render_widget(
		Paragraph::new(lines)
			.block(block)
			.wrap(ratatui::widgets::Wrap { trim: false }),
		area,
	);
}

fn popup_content(
	session: &SessionState,
	point: &HoveredPoint,
) -> (String, Vec<Line<'static>>, Color) {
	match point.kind {
		PickKind::Reference(index) => {
			let behavior = &session.dataset.behaviors[index];
			let label = behavior.label.as_str();
			let (r, g, b) = session.registry.color(&behavior.label);

			let mut lines = vec![Line::styled(
				behavior.text.clone(),
				Style::default().add_modifier(Modifier::BOLD),
			)];

			let examples = corpus::social_examples(label);
			if !examples.is_empty() {
				lines.push(Line::raw(""));
				// Same point, same post
				let example = examples[index % examples.len()];
				for text_line in example.lines() {
					lines.push(Line::styled(
						text_line.to_string(),
						Style::default().add_modifier(Modifier::DIM),
					));
				}
			}

			if let Some(rating) = corpus::sociality_rating(label) {
				lines.push(Line::raw(""));
				lines.push(Line::styled(
					format!("Sociality {}/9: {}", rating.score, rating.description),
					Style::default().fg(Color::Cyan),
				));
			}

			(behavior.label.display_name(), lines, Color::Rgb(r, g, b))
		}
		PickKind::User => {
			let mut lines = Vec::new();
			if let Some(user) = &session.user {
				lines.push(Line::styled(
					user.text.clone(),
					Style::default().add_modifier(Modifier::BOLD),
				));
				lines.push(Line::raw(""));
			}
			lines.push(Line::styled(
				"Sociality ?: run 'vibemap analyze' for your assessment".to_string(),
				Style::default().fg(Color::Cyan),
			));

			("Your Profile".to_string(), lines, Color::Magenta)
		}
	}
}

fn cleanup_terminal() -> Result<()> {
	disable_raw_mode()?;
	execute!(
		io::stdout(),
		LeaveAlternateScreen,
		DisableMouseCapture,
		DisableFocusChange
	)?;
	Ok(())
}
