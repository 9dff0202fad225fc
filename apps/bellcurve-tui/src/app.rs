//! Application state and main render loop

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use rand::rngs::StdRng;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tracing::debug;

use bellcurve_core::render::{Primitive, Scene};
use bellcurve_core::{
    comparison_scene, DatasetCatalog, Explorer, InputEvent, Key, Margins, MisleadingScenario,
    Presentation, SampleSize, SimulationKind, Viewport,
};

use crate::chart::{cell_to_surface, scene_canvas, surface_size, CELL_WIDTH};
use crate::keybindings::{explorer_action, gallery_action, Action, HELP};

/// Multiplier applied to σ per keypress
const STD_DEV_FACTOR: f64 = 1.1;

/// Mean shift per keypress, in units of σ
const MEAN_STEP: f64 = 0.5;

/// Margins for the gallery charts, in virtual pixels
const GALLERY_MARGINS: Margins = Margins {
    top: 16.0,
    right: 16.0,
    bottom: 32.0,
    left: 48.0,
};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Explorer,
    Gallery,
}

/// Both sides of a gallery comparison, built for one surface size
struct GalleryFrames {
    scenario: MisleadingScenario,
    size: (f64, f64),
    correct: Scene,
    misleading: Scene,
}

/// Main application state
pub struct App {
    /// Chart session
    explorer: Explorer,
    /// Datasets available with `d`
    catalog: DatasetCatalog,
    /// Index of the loaded catalog dataset
    dataset_index: Option<usize>,
    /// Description of the current sample overlay
    sample_label: Option<String>,
    /// Size of the next simulated dataset
    sample_size: SampleSize,
    /// Random source for simulations and the gallery
    rng: StdRng,
    /// Current screen
    screen: Screen,
    /// Current gallery entry
    scenario: MisleadingScenario,
    gallery: Option<GalleryFrames>,
    /// Canvas area of the chart, excluding borders
    chart_area: Rect,
    /// Column of the last drag event
    drag_column: Option<u16>,
    /// Status message
    status_message: Option<String>,
    /// Whether to show the help overlay
    show_help: bool,
}

impl App {
    /// Create a new application instance
    pub fn new(mut explorer: Explorer, catalog: DatasetCatalog, rng: StdRng) -> Self {
        // The terminal always has keyboard focus
        explorer.handle(&InputEvent::Focus);
        Self {
            explorer,
            catalog,
            dataset_index: None,
            sample_label: None,
            sample_size: SampleSize::default(),
            rng,
            screen: Screen::Explorer,
            scenario: MisleadingScenario::default(),
            gallery: None,
            chart_area: Rect::default(),
            drag_column: None,
            status_message: None,
            show_help: false,
        }
    }

    /// Render the application
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Status bar
                Constraint::Min(0),    // Chart
                Constraint::Length(1), // σ legend
                Constraint::Length(1), // Message line
            ])
            .split(size);

        self.render_status_bar(frame, chunks[0]);
        match self.screen {
            Screen::Explorer => self.render_explorer(frame, chunks[1], chunks[2]),
            Screen::Gallery => self.render_gallery(frame, chunks[1], chunks[2]),
        }
        self.render_message_line(frame, chunks[3]);

        if self.show_help {
            self.render_help_overlay(frame, size);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let params = self.explorer.params();
        let transform = self.explorer.interaction().transform();
        let sample = match (&self.sample_label, self.explorer.sample()) {
            (Some(label), Some(values)) => format!("{} (n={})", label, values.len()),
            _ => "none".to_string(),
        };

        let line = Line::from(vec![
            Span::styled(
                format!(" μ = {:.2}  σ = {:.2} ", params.mean(), params.std_dev()),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("| sample: {} ", sample)),
            Span::raw(format!("| next n = {} ", self.sample_size.get())),
            Span::styled(
                format!("| zoom ×{:.2} ", transform.scale),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(format!("| {:?} ", self.explorer.interaction().mode())),
        ]);

        let status_bar = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(status_bar, area);
    }

    fn render_explorer(&mut self, frame: &mut Frame, area: Rect, legend_area: Rect) {
        let block = Block::default()
            .title(" Normal distribution ")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        self.sync_chart_area(inner);

        let scene = self.explorer.scene();
        frame.render_widget(scene_canvas(&scene, block), area);

        let legend: Vec<Span> = scene
            .markers()
            .filter_map(|m| match m {
                Primitive::Marker {
                    multiple, label, ..
                } if *multiple > 0 => Some(Span::styled(
                    format!(" {} ", label),
                    Style::default().fg(Color::Red),
                )),
                _ => None,
            })
            .collect();
        frame.render_widget(Paragraph::new(Line::from(legend)), legend_area);
    }

    fn render_gallery(&mut self, frame: &mut Frame, area: Rect, caption_area: Rect) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let correct_block = Block::default()
            .title(" Correct visualization ")
            .borders(Borders::ALL);
        let misleading_block = Block::default()
            .title(" Misleading visualization ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));
        self.sync_gallery(surface_size(correct_block.inner(halves[0])));

        if let Some(frames) = &self.gallery {
            frame.render_widget(scene_canvas(&frames.correct, correct_block), halves[0]);
            frame.render_widget(
                scene_canvas(&frames.misleading, misleading_block),
                halves[1],
            );
        }

        let caption = Line::from(vec![
            Span::styled(
                format!(" {} ", self.scenario.title()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(self.scenario.explanation()),
        ]);
        frame.render_widget(Paragraph::new(caption), caption_area);
    }

    fn render_message_line(&self, frame: &mut Frame, area: Rect) {
        let text = if let Some(msg) = &self.status_message {
            msg.clone()
        } else if self.screen == Screen::Gallery {
            format!(
                "{} | {} | space: next, g: back",
                self.scenario.correct(),
                self.scenario.misleading()
            )
        } else if let Some(tooltip) = self.explorer.tooltip() {
            tooltip.text
        } else {
            "Press ? for help".to_string()
        };
        frame.render_widget(Paragraph::new(text), area);
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = HELP
            .iter()
            .map(|(keys, what)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>12}  ", keys),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(*what),
                ])
            })
            .collect();

        let block = Block::default()
            .title(" Help (press ? to close) ")
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));

        let help_area = centered_rect(60, 70, area);
        frame.render_widget(Clear, help_area);
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            help_area,
        );
    }

    /// Keep the explorer's surface in step with the terminal
    fn sync_chart_area(&mut self, inner: Rect) {
        if inner == self.chart_area {
            return;
        }
        self.chart_area = inner;
        let (width, height) = surface_size(inner);
        self.explorer.resize(width, height);
    }

    /// Rebuild the gallery scenes when the entry or the size changed
    fn sync_gallery(&mut self, size: (f64, f64)) {
        let fresh = self
            .gallery
            .as_ref()
            .is_some_and(|g| g.scenario == self.scenario && g.size == size);
        if fresh {
            return;
        }
        let viewport = Viewport::new(size.0, size.1, GALLERY_MARGINS);
        self.gallery = Some(GalleryFrames {
            scenario: self.scenario,
            size,
            correct: comparison_scene(
                self.scenario,
                Presentation::Correct,
                &viewport,
                &mut self.rng,
            ),
            misleading: comparison_scene(
                self.scenario,
                Presentation::Misleading,
                &viewport,
                &mut self.rng,
            ),
        });
    }

    /// Handle a key press. Returns true if the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> bool {
        let action = match self.screen {
            Screen::Explorer => explorer_action(code),
            Screen::Gallery => gallery_action(code),
        };
        let Some(action) = action else {
            return false;
        };
        debug!(?action, "key action");
        self.status_message = None;

        match action {
            Action::Quit => return true,
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::CursorLeft => self.send(InputEvent::Key(Key::Left)),
            Action::CursorRight => self.send(InputEvent::Key(Key::Right)),
            Action::CursorHome => self.send(InputEvent::Key(Key::Home)),
            Action::CursorClear => self.send(InputEvent::Key(Key::Escape)),
            Action::ResetView => self.send(InputEvent::ResetView),
            Action::IncreaseStdDev => {
                let std_dev = self.explorer.params().std_dev() * STD_DEV_FACTOR;
                let result = self.explorer.set_std_dev(std_dev);
                self.report(result);
            }
            Action::DecreaseStdDev => {
                let std_dev = self.explorer.params().std_dev() / STD_DEV_FACTOR;
                let result = self.explorer.set_std_dev(std_dev);
                self.report(result);
            }
            Action::IncreaseMean | Action::DecreaseMean => {
                let params = self.explorer.params();
                let step = MEAN_STEP * params.std_dev();
                let mean = if action == Action::IncreaseMean {
                    params.mean() + step
                } else {
                    params.mean() - step
                };
                let result = self.explorer.set_mean(mean);
                self.report(result);
            }
            Action::SimulateNormal => self.simulate(SimulationKind::Normal),
            Action::SimulateOutliers => self.simulate(SimulationKind::Outliers),
            Action::SimulateBimodal => self.simulate(SimulationKind::Bimodal),
            Action::LargerSample => self.sample_size = self.sample_size.increased(),
            Action::SmallerSample => self.sample_size = self.sample_size.decreased(),
            Action::NextDataset => self.next_dataset(),
            Action::FitSample => {
                let result = self.explorer.apply_sample_params();
                if result.is_ok() {
                    self.status_message = Some("Curve fitted to sample".to_string());
                }
                self.report(result);
            }
            Action::ClearSample => {
                self.explorer.clear_sample();
                self.sample_label = None;
                self.dataset_index = None;
            }
            Action::ToggleGallery => {
                self.screen = match self.screen {
                    Screen::Explorer => Screen::Gallery,
                    Screen::Gallery => Screen::Explorer,
                };
            }
            Action::NextScenario => self.scenario = self.scenario.next(),
        }
        false
    }

    /// Handle a mouse event over the chart
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.screen != Screen::Explorer {
            return;
        }
        let position = cell_to_surface(self.chart_area, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Moved => match position {
                Some((x, y)) => self.send(InputEvent::PointerMove { x, y }),
                None => self.send(InputEvent::PointerLeave),
            },
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(previous) = self.drag_column {
                    let dx = (f64::from(mouse.column) - f64::from(previous)) * CELL_WIDTH;
                    self.send(InputEvent::Pan { dx });
                }
                self.drag_column = Some(mouse.column);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.drag_column.take().is_some() {
                    self.send(InputEvent::GestureEnd);
                }
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let Some((anchor_x, _)) = position else {
                    return;
                };
                let step = self.explorer.config().zoom.wheel_step;
                let factor = if mouse.kind == MouseEventKind::ScrollUp {
                    step
                } else {
                    1.0 / step
                };
                self.send(InputEvent::Zoom { factor, anchor_x });
                self.send(InputEvent::GestureEnd);
            }
            _ => {}
        }
    }

    fn send(&mut self, event: InputEvent) {
        self.explorer.handle(&event);
    }

    fn simulate(&mut self, kind: SimulationKind) {
        let result = self
            .explorer
            .simulate(kind, self.sample_size, &mut self.rng);
        if result.is_ok() {
            self.sample_label = Some(kind.label().to_string());
            self.dataset_index = None;
        }
        self.report(result);
    }

    fn next_dataset(&mut self) {
        if self.catalog.is_empty() {
            self.status_message = Some("No dataset catalog loaded (use --catalog)".to_string());
            return;
        }
        let index = self
            .dataset_index
            .map(|i| (i + 1) % self.catalog.len())
            .unwrap_or(0);
        let Some(dataset) = self.catalog.iter().nth(index) else {
            return;
        };
        let name = dataset.display_name();
        let summary = dataset
            .stats()
            .map(|s| format!("mean {:.2}, sd {:.2}, n={}", s.mean, s.std_dev, s.count))
            .unwrap_or_default();
        let result = self.explorer.load_dataset(dataset);

        if result.is_ok() {
            self.dataset_index = Some(index);
            self.status_message = Some(format!("{}: {} (f to fit)", name, summary));
            self.sample_label = Some(name);
        }
        self.report(result);
    }

    /// Show an error in the message line
    fn report<E: std::fmt::Display>(&mut self, result: Result<(), E>) {
        if let Err(err) = result {
            self.status_message = Some(err.to_string());
        }
    }
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
