//! View state machine.
//!
//! [`transition`] is a pure function from the current [`ViewState`] and one
//! [`Input`] to the next state plus an [`Action`] for the event loop. Sampling
//! happens outside; its result comes back through [`ViewState::apply_tick`].

use crate::sampler::SampleError;
use crate::view::{Document, Projections, Screen, Tab};

/// One event after key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Refresh timer fired.
    Tick,
    Resize(u16, u16),
    PrevTab,
    NextTab,
    ToggleHelp,
    Quit,
    /// Unbound key.
    Ignore,
}

/// What the event loop must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    /// Run the sampler and feed the result to [`ViewState::apply_tick`].
    Sample,
    Quit,
}

/// Dashboard view state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub active: Tab,
    pub help_expanded: bool,
    /// `None` until the first resize event.
    pub dimensions: Option<(u16, u16)>,
    pub last_error: Option<String>,
    pub projections: Projections,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        self.dimensions.is_some()
    }

    /// Replaces all projected rows and the error banner.
    ///
    /// An error-free tick clears the banner; otherwise the last category error
    /// of this tick is shown.
    pub fn apply_tick(mut self, projections: Projections, errors: &[SampleError]) -> Self {
        self.projections = projections;
        self.last_error = errors.last().map(|e| e.to_string());
        self
    }

    /// Builds the document for the active tab.
    pub fn document(&self) -> Document {
        match self.dimensions {
            None => Document::Loading,
            Some(dims) => Document::Ready(Screen::new(
                self.active,
                self.projections.get(self.active).clone(),
                self.help_expanded,
                self.last_error.clone(),
                dims,
            )),
        }
    }
}

/// Applies one input.
pub fn transition(mut state: ViewState, input: Input) -> (ViewState, Action) {
    let action = match input {
        Input::Tick => Action::Sample,
        Input::Resize(width, height) => {
            state.dimensions = Some((width, height));
            Action::None
        }
        Input::PrevTab => {
            state.active = Tab::from_index(state.active.index().saturating_sub(1));
            Action::None
        }
        Input::NextTab => {
            state.active = Tab::from_index(state.active.index() + 1);
            Action::None
        }
        Input::ToggleHelp => {
            state.help_expanded = !state.help_expanded;
            Action::None
        }
        Input::Quit => Action::Quit,
        Input::Ignore => Action::None,
    };
    (state, action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::ProviderError;

    fn run(state: ViewState, inputs: &[Input]) -> ViewState {
        inputs
            .iter()
            .fold(state, |s, input| transition(s, *input).0)
    }

    #[test]
    fn test_starts_uninitialized_on_first_tab() {
        let state = ViewState::new();
        assert_eq!(state.active, Tab::Cpu);
        assert!(!state.help_expanded);
        assert!(!state.is_ready());
        assert_eq!(state.document(), Document::Loading);
    }

    #[test]
    fn test_resize_makes_ready_without_sampling() {
        let (state, action) = transition(ViewState::new(), Input::Resize(120, 40));
        assert_eq!(action, Action::None);
        assert_eq!(state.dimensions, Some((120, 40)));
        assert!(matches!(state.document(), Document::Ready(_)));
    }

    #[test]
    fn test_tab_index_is_clamped() {
        let state = run(ViewState::new(), &[Input::PrevTab, Input::PrevTab]);
        assert_eq!(state.active, Tab::Cpu);

        let state = run(state, &[Input::NextTab; 10]);
        assert_eq!(state.active, Tab::Disk);

        let state = run(state, &[Input::PrevTab]);
        assert_eq!(state.active, Tab::Processes);
    }

    #[test]
    fn test_tab_index_stays_in_range_for_any_sequence() {
        let mut state = ViewState::new();
        // Pseudo-random walk.
        let mut seed: u32 = 7;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12345);
            let input = if seed & 0x100 == 0 {
                Input::PrevTab
            } else {
                Input::NextTab
            };
            state = transition(state, input).0;
            assert!(state.active.index() < Tab::ALL.len());
        }
    }

    #[test]
    fn test_help_toggles() {
        let state = run(ViewState::new(), &[Input::ToggleHelp]);
        assert!(state.help_expanded);
        let state = run(state, &[Input::ToggleHelp]);
        assert!(!state.help_expanded);
    }

    #[test]
    fn test_tick_and_quit_actions() {
        let (state, action) = transition(ViewState::new(), Input::Tick);
        assert_eq!(action, Action::Sample);
        let (_, action) = transition(state, Input::Quit);
        assert_eq!(action, Action::Quit);
        let (_, action) = transition(ViewState::new(), Input::Ignore);
        assert_eq!(action, Action::None);
    }

    #[test]
    fn test_keys_before_resize_are_kept() {
        let state = run(ViewState::new(), &[Input::NextTab, Input::ToggleHelp]);
        assert_eq!(state.document(), Document::Loading);

        let state = run(state, &[Input::Resize(80, 24)]);
        match state.document() {
            Document::Ready(screen) => {
                assert_eq!(screen.active_label(), Some("MEMORY"));
                assert!(screen.help.len() > 1);
            }
            Document::Loading => panic!("expected ready document"),
        }
    }

    #[test]
    fn test_apply_tick_sets_and_clears_error() {
        let state = ViewState::new();
        let errors = vec![
            SampleError::Memory(ProviderError::Unavailable("meminfo".to_string())),
            SampleError::NoDisks,
        ];
        let state = state.apply_tick(Projections::default(), &errors);
        assert_eq!(state.last_error.as_deref(), Some("disks: no disks found"));

        let state = state.apply_tick(Projections::default(), &[]);
        assert!(state.last_error.is_none());
    }
}
