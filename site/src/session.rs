//! Event loop driving the page shell.
//!
//! A [`Session`] owns the current route, the [`ShellState`] and the
//! viewport offset. Events are applied one at a time through
//! [`Session::dispatch`], which returns the side effects a browser would
//! perform (scroll reset, location replacement). Rendering stays a pure
//! function of the session state.
//!
//! Event scripts are plain text, one event per line:
//!
//! ```text
//! # open the menu, then follow a platform link
//! scroll 120
//! toggle-menu
//! navigate /carlink
//! ```

use crate::config::SiteConfig;
use crate::model::Route;
use crate::router::{Resolution, resolve};
use crate::shell::ShellState;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Input to the shell.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum Event {
    /// Viewport scrolled to vertical offset `y`
    Scroll {
        /// Vertical offset in pixels
        y: f64,
    },
    /// Menu button pressed
    ToggleMenu,
    /// Location changed to `path`
    Navigate {
        /// Raw location as typed or linked
        path: String,
    },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Scroll { y } => write!(f, "scroll {y}"),
            Event::ToggleMenu => f.write_str("toggle-menu"),
            Event::Navigate { path } => write!(f, "navigate {path}"),
        }
    }
}

/// Errors from parsing an event script.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventParseError {
    /// First word is not an event name
    #[error("line {line}: unknown event `{name}`")]
    Unknown {
        /// 1-based script line
        line: usize,
        /// Word that was read
        name: String,
    },
    /// `scroll` or `navigate` without its argument
    #[error("line {line}: `{event}` needs an argument")]
    MissingArgument {
        /// 1-based script line
        line: usize,
        /// Event name
        event: &'static str,
    },
    /// `toggle-menu` followed by text
    #[error("line {line}: `{event}` takes no argument, got `{argument}`")]
    UnexpectedArgument {
        /// 1-based script line
        line: usize,
        /// Event name
        event: &'static str,
        /// Extra text
        argument: String,
    },
    /// `scroll` offset is not a finite number
    #[error("line {line}: invalid scroll offset `{value}`")]
    InvalidOffset {
        /// 1-based script line
        line: usize,
        /// Text that failed to parse
        value: String,
    },
}

impl Event {
    /// Parse one script line. `line` is only used for error messages.
    pub fn parse_line(text: &str, line: usize) -> Result<Event, EventParseError> {
        let text = text.trim();
        let (name, argument) = match text.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, Some(rest.trim())),
            None => (text, None),
        };

        match (name, argument) {
            ("scroll", None) => Err(EventParseError::MissingArgument {
                line,
                event: "scroll",
            }),
            ("scroll", Some(value)) => match value.parse::<f64>() {
                Ok(y) if y.is_finite() => Ok(Event::Scroll { y }),
                _ => Err(EventParseError::InvalidOffset {
                    line,
                    value: value.to_string(),
                }),
            },
            ("toggle-menu", None) => Ok(Event::ToggleMenu),
            ("toggle-menu", Some(argument)) => Err(EventParseError::UnexpectedArgument {
                line,
                event: "toggle-menu",
                argument: argument.to_string(),
            }),
            ("navigate", None) => Err(EventParseError::MissingArgument {
                line,
                event: "navigate",
            }),
            ("navigate", Some(path)) => Ok(Event::Navigate {
                path: path.to_string(),
            }),
            (other, _) => Err(EventParseError::Unknown {
                line,
                name: other.to_string(),
            }),
        }
    }
}

impl FromStr for Event {
    type Err = EventParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Event::parse_line(s, 1)
    }
}

/// Parse a whole event script. Blank lines and `#` comments are skipped;
/// line numbers in errors are 1-based.
pub fn parse_script(script: &str) -> Result<Vec<Event>, EventParseError> {
    script
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(number, line)| Event::parse_line(line, number))
        .collect()
}

/// Side effect requested by a transition.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "effect", rename_all = "kebab-case")]
pub enum Effect {
    /// Move the viewport
    ScrollTo {
        /// Horizontal offset
        x: f64,
        /// Vertical offset
        y: f64,
    },
    /// Replace the current history entry (no new entry is pushed)
    ReplaceLocation {
        /// Location that did not match
        from: String,
        /// Where it was replaced with
        to: Route,
    },
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::ScrollTo { x, y } => write!(f, "scroll-to({x}, {y})"),
            Effect::ReplaceLocation { from, to } => write!(f, "replace({from} -> {to})"),
        }
    }
}

/// Snapshot after one step of [`Session::run`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    /// 0 for the initial frame, then 1-based event index
    pub step: usize,
    /// Event applied in this step
    pub event: Option<Event>,
    /// Route after the event
    pub route: Route,
    /// Shell flags after the event
    pub shell: ShellState,
    /// Viewport offset after the event
    pub scroll: (f64, f64),
    /// Effects requested by the event
    pub effects: Vec<Effect>,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let event = self
            .event
            .as_ref()
            .map_or_else(|| "start".to_string(), Event::to_string);
        let menu = if self.shell.menu_open() { "open" } else { "closed" };
        write!(
            f,
            "#{:<3} {:<24} route={:<10} header={:<11} menu={:<6} scroll=({}, {})",
            self.step,
            event,
            self.route.path(),
            self.shell.header_style().as_str(),
            menu,
            self.scroll.0,
            self.scroll.1,
        )?;
        for effect in &self.effects {
            write!(f, " {effect}")?;
        }
        Ok(())
    }
}

/// Running shell: current route, flags and viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    route: Route,
    shell: ShellState,
    scroll: (f64, f64),
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Fresh session on the home route at the top of the page.
    pub fn new() -> Self {
        Self {
            route: Route::Home,
            shell: ShellState::new(),
            scroll: (0.0, 0.0),
        }
    }

    /// Start a session at `location`. Unmatched locations land on home and
    /// report the replacement.
    pub fn open(location: &str) -> (Self, Vec<Effect>) {
        let mut session = Self::new();
        let mut effects = Vec::new();
        match resolve(location) {
            Resolution::Matched { route } => session.route = route,
            Resolution::Redirect { from, to } => {
                session.route = to;
                effects.push(Effect::ReplaceLocation { from, to });
            }
        }
        (session, effects)
    }

    /// Current route.
    pub fn route(&self) -> Route {
        self.route
    }

    /// Current shell flags.
    pub fn shell(&self) -> ShellState {
        self.shell
    }

    /// Current viewport offset `(x, y)`.
    pub fn scroll_position(&self) -> (f64, f64) {
        self.scroll
    }

    /// Apply one event and return the effects it requests.
    pub fn dispatch(&mut self, event: &Event) -> Vec<Effect> {
        match event {
            Event::Scroll { y } => {
                self.scroll.1 = *y;
                if self.shell.on_scroll(*y) {
                    debug!(y, header = self.shell.header_style().as_str(), "header style changed");
                }
                Vec::new()
            }
            Event::ToggleMenu => {
                self.shell.toggle_menu();
                debug!(menu_open = self.shell.menu_open(), "menu toggled");
                Vec::new()
            }
            Event::Navigate { path } => self.navigate(path),
        }
    }

    fn navigate(&mut self, location: &str) -> Vec<Effect> {
        let mut effects = Vec::new();
        let target = match resolve(location) {
            Resolution::Matched { route } => {
                if route == self.route {
                    return effects;
                }
                route
            }
            Resolution::Redirect { from, to } => {
                effects.push(Effect::ReplaceLocation { from, to });
                to
            }
        };

        debug!(from = %self.route, to = %target, "route changed");
        self.route = target;
        self.shell.on_route_change();
        self.scroll = (0.0, 0.0);
        self.shell.on_scroll(0.0);
        effects.push(Effect::ScrollTo { x: 0.0, y: 0.0 });
        effects
    }

    /// Snapshot of the current state.
    pub fn frame(&self, step: usize, event: Option<Event>, effects: Vec<Effect>) -> Frame {
        Frame {
            step,
            event,
            route: self.route,
            shell: self.shell,
            scroll: self.scroll,
            effects,
        }
    }

    /// Apply `events` in order, reporting the initial frame and one frame
    /// per event to `on_frame`.
    pub fn run<I, F>(&mut self, events: I, mut on_frame: F)
    where
        I: IntoIterator<Item = Event>,
        F: FnMut(&Frame),
    {
        on_frame(&self.frame(0, None, Vec::new()));
        for (idx, event) in events.into_iter().enumerate() {
            let effects = self.dispatch(&event);
            on_frame(&self.frame(idx + 1, Some(event), effects));
        }
    }

    /// Render the full document for the current state.
    pub fn render(&self, config: &SiteConfig) -> String {
        crate::render_page(self.route, &self.shell, config)
    }
}
