//! Keybinding definitions

use crossterm::event::KeyCode;

/// Keybinding action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Step the cursor left
    CursorLeft,
    /// Step the cursor right
    CursorRight,
    /// Jump the cursor to the mean
    CursorHome,
    /// Clear the cursor
    CursorClear,
    /// Widen the curve
    IncreaseStdDev,
    /// Narrow the curve
    DecreaseStdDev,
    /// Shift the mean left
    DecreaseMean,
    /// Shift the mean right
    IncreaseMean,
    /// Simulate a normal dataset
    SimulateNormal,
    /// Simulate a dataset with outliers
    SimulateOutliers,
    /// Simulate a bimodal dataset
    SimulateBimodal,
    /// Grow the simulated sample size
    LargerSample,
    /// Shrink the simulated sample size
    SmallerSample,
    /// Load the next catalog dataset
    NextDataset,
    /// Fit the curve to the loaded sample
    FitSample,
    /// Remove the sample overlay
    ClearSample,
    /// Restore the unzoomed view
    ResetView,
    /// Toggle the misleading chart gallery
    ToggleGallery,
    /// Next gallery entry
    NextScenario,
    /// Toggle help
    ToggleHelp,
}

/// Get the action for a key on the explorer screen
pub fn explorer_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::CursorRight),
        KeyCode::Home => Some(Action::CursorHome),
        KeyCode::Esc => Some(Action::CursorClear),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::IncreaseStdDev),
        KeyCode::Char('-') => Some(Action::DecreaseStdDev),
        KeyCode::Char('[') => Some(Action::DecreaseMean),
        KeyCode::Char(']') => Some(Action::IncreaseMean),
        KeyCode::Char('n') => Some(Action::SimulateNormal),
        KeyCode::Char('o') => Some(Action::SimulateOutliers),
        KeyCode::Char('b') => Some(Action::SimulateBimodal),
        KeyCode::Char('>') => Some(Action::LargerSample),
        KeyCode::Char('<') => Some(Action::SmallerSample),
        KeyCode::Char('d') => Some(Action::NextDataset),
        KeyCode::Char('f') => Some(Action::FitSample),
        KeyCode::Char('c') => Some(Action::ClearSample),
        KeyCode::Char('r') | KeyCode::End => Some(Action::ResetView),
        KeyCode::Char('g') => Some(Action::ToggleGallery),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        _ => None,
    }
}

/// Get the action for a key on the gallery screen
pub fn gallery_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('g') | KeyCode::Esc => Some(Action::ToggleGallery),
        KeyCode::Char(' ') | KeyCode::Tab | KeyCode::Right => Some(Action::NextScenario),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        _ => None,
    }
}

/// Help lines shown in the overlay
pub const HELP: &[(&str, &str)] = &[
    ("mouse", "hover to read value and percentile"),
    ("scroll", "zoom around the pointer"),
    ("drag", "pan"),
    ("←/→ h/l", "step the cursor by σ/10"),
    ("Home / Esc", "cursor to mean / clear cursor"),
    ("+ / -", "adjust standard deviation"),
    ("[ / ]", "adjust mean"),
    ("n / o / b", "simulate normal / outliers / bimodal"),
    ("< / >", "sample size"),
    ("d", "next catalog dataset"),
    ("f", "fit curve to sample"),
    ("c", "clear sample"),
    ("r / End", "reset zoom"),
    ("g", "misleading chart gallery"),
    ("q", "quit"),
];
