//! # Play Loop
//!
//! Line-oriented commands driving an `Engine`.
//!
//! Each input line is one discrete event. Start selection (`select`) and
//! edge picks (`pick`) are separate commands, and a new edge can be entered
//! either at once (`edge a b w`) or as a draft (`link a`, `link b`,
//! `weight w`).

use crate::TrainerError;
use crate::report;
use prim_core::primitives::DEFAULT_EDGE_WEIGHT;
use prim_core::{Engine, NodeId, Position};
use std::io::{BufRead, Write};

/// Help text for the play loop.
pub const HELP: &str = "\
Commands:
  start [node]      start a run (default: the selected start node)
  select <node>     choose the start node for the next run
  pick <a> <b>      pick the edge you think Prim adds next
  hint              reveal and apply the next edge
  reset             abandon the run
  node <x> <y>      add a node at a position
  edge <a> <b> <w>  add an edge with weight w
  link <node>       choose an endpoint for a new edge
  weight [w]        give the pending edge its weight (default 5)
  cancel            abandon the pending edge
  status            show the current state
  solve             show the full Prim run from the selected start
  help              show this text
  quit              leave";

/// A parsed play-loop command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start(Option<NodeId>),
    Select(NodeId),
    Pick(NodeId, NodeId),
    Hint,
    Reset,
    AddNode(Position),
    AddEdge(NodeId, NodeId, String),
    Link(NodeId),
    Weight(String),
    Cancel,
    Status,
    Solve,
    Help,
    Quit,
}

fn parse_node(word: Option<&str>, what: &str) -> Result<NodeId, TrainerError> {
    let word = word.ok_or_else(|| TrainerError::Command(format!("missing {}", what)))?;
    word.parse::<u64>()
        .map(NodeId)
        .map_err(|_| TrainerError::Command(format!("{} must be a node id, got {:?}", what, word)))
}

fn parse_coord(word: Option<&str>, what: &str) -> Result<i64, TrainerError> {
    let word = word.ok_or_else(|| TrainerError::Command(format!("missing {}", what)))?;
    word.parse::<i64>()
        .map_err(|_| TrainerError::Command(format!("{} must be an integer, got {:?}", what, word)))
}

fn parse_weight(word: Option<&str>) -> Result<String, TrainerError> {
    // Kept raw: the engine reports non-numeric input as InvalidWeight.
    word.map(str::to_string)
        .ok_or_else(|| TrainerError::Command("missing weight".to_string()))
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, TrainerError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "start" | "run" => match words.next() {
                Some(word) => Self::Start(Some(parse_node(Some(word), "start node")?)),
                None => Self::Start(None),
            },
            "select" => Self::Select(parse_node(words.next(), "start node")?),
            "pick" => Self::Pick(
                parse_node(words.next(), "first endpoint")?,
                parse_node(words.next(), "second endpoint")?,
            ),
            "hint" => Self::Hint,
            "reset" => Self::Reset,
            "node" => Self::AddNode(Position::new(
                parse_coord(words.next(), "x")?,
                parse_coord(words.next(), "y")?,
            )),
            "edge" => Self::AddEdge(
                parse_node(words.next(), "first endpoint")?,
                parse_node(words.next(), "second endpoint")?,
                parse_weight(words.next())?,
            ),
            "link" => Self::Link(parse_node(words.next(), "endpoint")?),
            "weight" => Self::Weight(
                words
                    .next()
                    .map_or_else(|| DEFAULT_EDGE_WEIGHT.to_string(), str::to_string),
            ),
            "cancel" => Self::Cancel,
            "status" => Self::Status,
            "solve" => Self::Solve,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(TrainerError::Command(format!("unknown command {:?}", other))),
        };

        if let Some(extra) = words.next() {
            return Err(TrainerError::Command(format!(
                "unexpected argument {:?}",
                extra
            )));
        }
        Ok(Some(command))
    }
}

/// Whether the loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// An engine plus output settings.
#[derive(Debug)]
pub struct Repl {
    engine: Engine,
    json_mode: bool,
}

impl Repl {
    /// Create a play loop over `engine`.
    #[must_use]
    pub fn new(engine: Engine, json_mode: bool) -> Self {
        Self { engine, json_mode }
    }

    /// The engine (read-only).
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Execute one command and write its report.
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<Flow, TrainerError> {
        let json = self.json_mode;
        tracing::debug!(?command, "executing");

        match command {
            Command::Start(node) => {
                let started = match node {
                    Some(node) => self.engine.start_session(node)?,
                    None => self.engine.start_selected()?,
                };
                if started {
                    report::write_snapshot(out, &self.engine.snapshot(), json)?;
                } else {
                    report::write_message(
                        out,
                        "start",
                        "A run is already in progress. Reset it first.",
                        json,
                    )?;
                }
            }
            Command::Select(node) => {
                self.engine.select_start(node)?;
                report::write_message(out, "select", &format!("Start node: {}", node), json)?;
            }
            Command::Pick(a, b) => {
                let verdict = self.engine.pick_edge((a, b));
                report::write_verdict(out, &verdict, &self.engine.snapshot(), json)?;
            }
            Command::Hint => {
                let hint = self.engine.request_hint();
                report::write_hint(out, hint, &self.engine.snapshot(), json)?;
            }
            Command::Reset => {
                self.engine.reset();
                report::write_message(out, "reset", "Session reset.", json)?;
            }
            Command::AddNode(position) => {
                let id = self.engine.add_node(position);
                report::write_message(
                    out,
                    "node",
                    &format!("Node {} added at ({}, {})", id, position.x, position.y),
                    json,
                )?;
            }
            Command::AddEdge(a, b, weight) => {
                let edge = self.engine.add_edge_input(a, b, &weight)?;
                report::write_message(out, "edge", &format!("Edge {} added", edge), json)?;
            }
            Command::Link(node) => {
                let draft = self.engine.select_endpoint(node)?;
                let message = match draft.endpoints() {
                    Some((a, b)) => format!("Edge {} - {} pending; enter a weight", a, b),
                    None if draft.is_pending() => format!("Endpoint {} selected", node),
                    None => "Edge draft abandoned".to_string(),
                };
                report::write_message(out, "link", &message, json)?;
            }
            Command::Weight(raw) => {
                let edge = self.engine.commit_edge(&raw)?;
                report::write_message(out, "edge", &format!("Edge {} added", edge), json)?;
            }
            Command::Cancel => {
                self.engine.cancel_edge();
                report::write_message(out, "cancel", "Edge draft abandoned", json)?;
            }
            Command::Status => report::write_snapshot(out, &self.engine.snapshot(), json)?,
            Command::Solve => {
                let run = self.engine.solve(self.engine.selected_start())?;
                report::write_run(out, &run, json)?;
            }
            Command::Help => report::write_message(out, "help", HELP, json)?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Read commands until end of input or `quit`.
    ///
    /// Recoverable errors are reported and the loop continues; I/O errors
    /// end it.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<(), TrainerError> {
        for line in input.lines() {
            let line = line?;
            let outcome = Command::parse(&line).and_then(|command| match command {
                Some(command) => self.execute(command, out),
                None => Ok(Flow::Continue),
            });

            match outcome {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) if e.is_recoverable() => {
                    tracing::debug!(error = %e, "command rejected");
                    report::write_error(out, &e, self.json_mode)?;
                }
                Err(e) => return Err(e),
            }
            out.flush()?;
        }
        Ok(())
    }
}
