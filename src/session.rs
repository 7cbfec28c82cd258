//! Interactive session: one event loop owning the view and the input controls.
//!
//! DESIGN
//! ======
//! All state lives on the loop. User commands are applied to completion
//! before the next one is read. Route fetches are the only suspending work:
//! each runs as a spawned task and posts its outcome back over a channel, so
//! the loop applies outcomes in resolution order. Overlapping requests are
//! not cancelled; whichever resolves last is what stays on screen.
//!
//! ERROR HANDLING
//! ==============
//! Unknown commands and unknown building codes raise an alert and change
//! nothing. A failed fetch becomes `ViewEvent::RouteFailed` (previous state
//! kept, error visible).

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::input::{CenterInput, EdgeEditor, RouteSelector};
use crate::model::SegmentSet;
use crate::parse::ParseError;
use crate::routing::{BuildingDirectory, RouteError, RouteSource};
use crate::view::{OverlayRenderer, ViewCoordinator, ViewEvent};

pub const HELP: &str = "\
commands:
  edge <x1 y1 x2 y2 color>  append a line to the edge list
  draw                      draw the edge list
  clear                     clear the edge list
  center [<lat> <lng>]      recenter the map (bad input resets to default)
  buildings                 list building codes
  start <CODE>              choose the route start building
  end <CODE>                choose the route end building
  route                     fetch and draw the shortest route
  unroute                   clear the route selection
  show                      redraw the current view
  help                      show this text
  quit                      leave";

// =============================================================================
// COMMANDS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Edge(String),
    Draw,
    Clear,
    Center(String),
    Buildings,
    Start(String),
    End(String),
    Route,
    Unroute,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command `{0}`; try `help`")]
    Unknown(String),
    #[error("`{command}` needs {what}")]
    MissingArgument { command: &'static str, what: &'static str },
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    ///
    /// # Errors
    ///
    /// Returns a `CommandError` for unknown verbs or missing arguments.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

        let command = match verb.to_ascii_lowercase().as_str() {
            "edge" => Self::Edge(required(rest, "edge", "a line like `0 0 10 10 red`")?),
            "draw" => Self::Draw,
            "clear" => Self::Clear,
            "center" | "recenter" => Self::Center(rest.to_owned()),
            "buildings" => Self::Buildings,
            "start" => Self::Start(required(rest, "start", "a building code")?),
            "end" => Self::End(required(rest, "end", "a building code")?),
            "route" => Self::Route,
            "unroute" => Self::Unroute,
            "show" => Self::Show,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => return Err(CommandError::Unknown(verb.to_owned())),
        };
        Ok(Some(command))
    }
}

fn required(rest: &str, command: &'static str, what: &'static str) -> Result<String, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument { command, what });
    }
    Ok(rest.to_owned())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

// =============================================================================
// ROUTE OUTCOMES
// =============================================================================

#[derive(Debug)]
pub struct RouteOutcome {
    pub request_id: u64,
    pub start: String,
    pub end: String,
    pub result: Result<SegmentSet, RouteError>,
}

enum Step {
    Line(std::io::Result<Option<String>>),
    Outcome(RouteOutcome),
    Idle,
}

// =============================================================================
// SESSION
// =============================================================================

pub struct Session<R> {
    view: ViewCoordinator<R>,
    edges: EdgeEditor,
    center: CenterInput,
    selector: RouteSelector,
    directory: BuildingDirectory,
    source: Arc<dyn RouteSource>,
    outcome_tx: mpsc::UnboundedSender<RouteOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<RouteOutcome>,
    next_request_id: u64,
    pending: usize,
}

impl<R: OverlayRenderer> Session<R> {
    pub fn new(config: &AppConfig, renderer: R, source: Arc<dyn RouteSource>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            view: ViewCoordinator::new(config.view, renderer),
            edges: EdgeEditor::new(config.bounds),
            center: CenterInput::default(),
            selector: RouteSelector::new(config.default_building.clone()),
            directory: BuildingDirectory::default(),
            source,
            outcome_tx,
            outcome_rx,
            next_request_id: 1,
            pending: 0,
        }
    }

    /// Fetch the building directory. Until this succeeds, building codes are
    /// not checked locally.
    ///
    /// # Errors
    ///
    /// Returns the routing error; the session stays usable for typed edges.
    pub async fn load_directory(&mut self) -> Result<usize, RouteError> {
        let directory = self.source.buildings().await?;
        info!(count = directory.len(), "building directory loaded");
        self.directory = directory;
        Ok(self.directory.len())
    }

    #[must_use]
    pub fn view(&self) -> &ViewCoordinator<R> {
        &self.view
    }

    #[must_use]
    pub fn directory(&self) -> &BuildingDirectory {
        &self.directory
    }

    #[must_use]
    pub fn edges(&self) -> &EdgeEditor {
        &self.edges
    }

    #[must_use]
    pub fn selector(&self) -> &RouteSelector {
        &self.selector
    }

    #[must_use]
    pub fn pending_routes(&self) -> usize {
        self.pending
    }

    /// Apply one command to completion.
    pub fn handle(&mut self, command: Command) -> Flow {
        debug!(?command, "command");
        match command {
            Command::Edge(line) => self.edges.push_line(&line),
            Command::Draw => {
                let event = self.edges.draw();
                self.view.dispatch(event);
            }
            Command::Clear => {
                let event = self.edges.clear();
                self.view.dispatch(event);
            }
            Command::Center(text) => {
                self.center.set_text(text);
                let event = self.center.recenter();
                self.view.dispatch(event);
            }
            Command::Buildings => {
                if self.directory.is_empty() {
                    self.view.renderer_mut().notice("building directory not loaded");
                } else {
                    self.view.renderer_mut().directory(&self.directory);
                }
            }
            Command::Start(code) => self.selector.select_start(code),
            Command::End(code) => self.selector.select_end(code),
            Command::Route => {
                if let Err(e) = self.request_route() {
                    self.view.renderer_mut().alert(&e.to_string());
                }
            }
            Command::Unroute => {
                let event = self.selector.clear();
                self.view.dispatch(event);
            }
            Command::Show => self.view.publish(),
            Command::Help => self.view.renderer_mut().notice(HELP),
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Replace the edge editor's buffer with `text`, untouched.
    pub fn set_edge_text(&mut self, text: impl Into<String>) {
        self.edges.set_text(text);
    }

    /// Draw the edge editor's buffer and return how many segments are shown.
    ///
    /// # Errors
    ///
    /// Returns the `ParseError` that rejected the buffer; the view has already
    /// been reset and alerted by then.
    pub fn draw_edges(&mut self) -> Result<usize, ParseError> {
        let event = self.edges.draw();
        let result = match &event {
            ViewEvent::EdgesRejected(err) => Err(err.clone()),
            ViewEvent::EdgesParsed(set) => Ok(set.len()),
            _ => Ok(0),
        };
        self.view.dispatch(event);
        result
    }

    /// Spawn a fetch for the selected start/end pair and return its request id.
    ///
    /// # Errors
    ///
    /// Returns `RouteError::UnknownBuilding` without touching the network when
    /// a directory is loaded and does not contain one of the codes.
    pub fn request_route(&mut self) -> Result<u64, RouteError> {
        let start = self.selector.start().to_owned();
        let end = self.selector.end().to_owned();
        if !self.directory.is_empty() {
            for code in [&start, &end] {
                if !self.directory.contains(code) {
                    warn!(%code, "route requested for unknown building");
                    return Err(RouteError::UnknownBuilding(code.clone()));
                }
            }
        }

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.pending += 1;
        info!(request_id, %start, %end, "route requested");

        let source = Arc::clone(&self.source);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = source.shortest_path(&start, &end).await;
            // The receiver lives as long as the session; a send error means it is gone.
            let _ = tx.send(RouteOutcome { request_id, start, end, result });
        });
        Ok(request_id)
    }

    /// Wait for the next route fetch to resolve.
    pub async fn next_outcome(&mut self) -> Option<RouteOutcome> {
        self.outcome_rx.recv().await
    }

    pub fn apply_outcome(&mut self, outcome: RouteOutcome) {
        self.pending = self.pending.saturating_sub(1);
        let RouteOutcome { request_id, start, end, result } = outcome;
        match result {
            Ok(set) => {
                info!(request_id, %start, %end, segments = set.len(), "route resolved");
                self.view.dispatch(ViewEvent::RouteFetched(set));
            }
            Err(e) => {
                warn!(request_id, %start, %end, error = %e, "route failed");
                self.view.dispatch(ViewEvent::RouteFailed(e.to_string()));
            }
        }
    }

    /// Read commands until `quit` or end of input. After end of input, routes
    /// still in flight are awaited and applied.
    pub async fn run<I>(&mut self, input: I)
    where
        I: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut input_open = true;

        loop {
            if !input_open && self.pending == 0 {
                break;
            }
            let step = tokio::select! {
                line = lines.next_line(), if input_open => Step::Line(line),
                Some(outcome) = self.outcome_rx.recv() => Step::Outcome(outcome),
                else => Step::Idle,
            };

            match step {
                Step::Line(Ok(Some(line))) => match Command::parse(&line) {
                    Ok(Some(command)) => {
                        if self.handle(command) == Flow::Quit {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => self.view.renderer_mut().alert(&e.to_string()),
                },
                Step::Line(Ok(None)) => {
                    debug!(pending = self.pending, "input closed");
                    input_open = false;
                }
                Step::Line(Err(e)) => {
                    warn!(error = %e, "failed to read input");
                    input_open = false;
                }
                Step::Outcome(outcome) => self.apply_outcome(outcome),
                Step::Idle => break,
            }
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
