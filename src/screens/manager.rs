// src/screens/manager.rs
//! Screen registry, navigation and history

use alloc::collections::{BTreeMap, VecDeque};
use alloc::string::{String, ToString};
use log::{debug, warn};

use crate::config::{DEFAULT_MAX_HISTORY, UiConfig};
use crate::error::ScreenError;
use crate::screens::{ClearTransition, Screen, Transition};
use crate::surface::Surface;

/// Owns every registered screen and switches between them.
///
/// Navigating away from a screen runs its exit hook and records its name in
/// a bounded history; once `max_history` names are stored the oldest is
/// dropped. [`go_back`](Self::go_back) walks that history without adding
/// to it.
///
/// # Examples
/// ```ignore
/// let mut screens = ScreenManager::new().with_transition(WipeTransition::new(6));
/// screens.register(home);
/// screens.register(settings);
///
/// screens.goto("home", &mut fb)?;
/// screens.goto("settings", &mut fb)?;
/// assert!(screens.go_back(&mut fb)?);
/// ```
pub struct ScreenManager<T: Transition = ClearTransition> {
    screens: BTreeMap<String, Screen>,
    current: Option<String>,
    history: VecDeque<String>,
    max_history: usize,
    transition: T,
}

impl ScreenManager<ClearTransition> {
    pub fn new() -> Self {
        Self {
            screens: BTreeMap::new(),
            current: None,
            history: VecDeque::new(),
            max_history: DEFAULT_MAX_HISTORY,
            transition: ClearTransition,
        }
    }

    pub fn with_config(config: &UiConfig) -> Self {
        Self::new().with_max_history(config.max_history)
    }
}

impl Default for ScreenManager<ClearTransition> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transition> ScreenManager<T> {
    pub fn with_transition<U: Transition>(self, transition: U) -> ScreenManager<U> {
        ScreenManager {
            screens: self.screens,
            current: self.current,
            history: self.history,
            max_history: self.max_history,
            transition,
        }
    }

    /// History depth; values below 1 are raised to 1.
    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history.max(1);
        self.trim_history();
        self
    }

    pub fn max_history(&self) -> usize {
        self.max_history
    }

    /// Add a screen under its own name. A screen already registered under
    /// that name is replaced and handed back.
    pub fn register(&mut self, screen: Screen) -> Option<Screen> {
        let name = screen.name().to_string();
        let replaced = self.screens.insert(name, screen);
        if let Some(old) = &replaced {
            warn!("screen '{}' registered twice, replacing", old.name());
        }
        replaced
    }

    pub fn contains(&self, name: &str) -> bool {
        self.screens.contains_key(name)
    }

    pub fn screen(&self, name: &str) -> Option<&Screen> {
        self.screens.get(name)
    }

    pub fn screen_mut(&mut self, name: &str) -> Option<&mut Screen> {
        self.screens.get_mut(name)
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current_screen(&self) -> Option<&Screen> {
        self.current.as_deref().and_then(|name| self.screens.get(name))
    }

    pub fn current_screen_mut(&mut self) -> Option<&mut Screen> {
        let name = self.current.as_deref()?;
        self.screens.get_mut(name)
    }

    /// Visited screen names, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &str> + '_ {
        self.history.iter().map(String::as_str)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Switch to `name`, recording the current screen in history.
    pub fn goto<S: Surface>(
        &mut self,
        name: &str,
        surface: &mut S,
    ) -> Result<(), ScreenError<S::Error>> {
        self.goto_with(name, surface, true)
    }

    /// Switch to `name`. The outgoing screen's exit hook runs first; the
    /// incoming screen is drawn, the whole frame is flushed and then its
    /// enter hook runs.
    pub fn goto_with<S: Surface>(
        &mut self,
        name: &str,
        surface: &mut S,
        record_history: bool,
    ) -> Result<(), ScreenError<S::Error>> {
        if !self.screens.contains_key(name) {
            return Err(ScreenError::UnknownScreen(name.to_string()));
        }

        if let Some(previous) = self.current.take() {
            if let Some(screen) = self.screens.get_mut(&previous) {
                screen.exit();
            }
            if record_history {
                self.history.push_back(previous);
                self.trim_history();
            }
        }

        debug!(
            "goto '{}' (history {}/{})",
            name,
            self.history.len(),
            self.max_history
        );

        self.current = Some(name.to_string());
        let Some(screen) = self.screens.get_mut(name) else {
            return Err(ScreenError::UnknownScreen(name.to_string()));
        };
        self.transition
            .run(surface, screen)
            .map_err(ScreenError::Surface)?;
        screen.draw(surface).map_err(ScreenError::Surface)?;
        surface.show().map_err(ScreenError::Surface)?;
        screen.enter();
        Ok(())
    }

    /// Return to the most recently left screen. `Ok(false)` when there is
    /// no history.
    pub fn go_back<S: Surface>(&mut self, surface: &mut S) -> Result<bool, ScreenError<S::Error>> {
        let Some(previous) = self.history.pop_back() else {
            debug!("go_back with empty history");
            return Ok(false);
        };
        debug!("go_back to '{}'", previous);
        self.goto_with(&previous, surface, false)?;
        Ok(true)
    }

    /// Repaint the current screen without running hooks. `Ok(false)` before
    /// the first navigation.
    pub fn redraw<S: Surface>(&mut self, surface: &mut S) -> Result<bool, S::Error> {
        let Some(name) = self.current.as_deref() else {
            return Ok(false);
        };
        let Some(screen) = self.screens.get_mut(name) else {
            return Ok(false);
        };
        surface.fill(screen.background())?;
        screen.draw(surface)?;
        surface.show()?;
        Ok(true)
    }

    fn trim_history(&mut self) {
        while self.history.len() > self.max_history {
            self.history.pop_front();
        }
    }
}
