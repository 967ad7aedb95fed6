//! Line oriented edit session on top of `GridEditState` and `PaintTool`.
//!
//! Each input line is one command; invalid input is reported and the
//! session goes on with its previous state.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{anyhow, bail};
use tupper_engine_edit::grid::{GridEditState, GridUndoState, PaintTool};

use crate::{CliResult, Options, render::render};

const HELP: &str = "\
commands:
  k <decimal>           replace the grid from k
  bin <bits>            replace the grid from the binary quotient
  set <x> <y> <0|1>     set a single cell
  toggle <x> <y>        flip a single cell
  paint <x,y> ...       paint stroke (blend mode toggles cells)
  erase <x,y> ...       erase stroke
  clear                 clear the grid
  undo | redo
  blend                 toggle blend mode
  show                  print the grid
  decimal | binary      print k or its binary quotient
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Decimal(String),
    Binary(String),
    Set { x: i32, y: i32, value: bool },
    Toggle { x: i32, y: i32 },
    Stroke { cells: Vec<(i32, i32)>, erase: bool },
    Clear,
    Undo,
    Redo,
    Blend,
    Show,
    PrintDecimal,
    PrintBinary,
    Help,
    Quit,
}

fn parse_coord(word: Option<&str>, name: &str) -> CliResult<i32> {
    let word = word.ok_or_else(|| anyhow!("missing {name}"))?;
    word.parse().map_err(|_| anyhow!("'{word}' is not a valid {name}"))
}

fn parse_cell(word: &str) -> CliResult<(i32, i32)> {
    let (x, y) = word.split_once(',').ok_or_else(|| anyhow!("'{word}' is not a cell, expected x,y"))?;
    Ok((parse_coord(Some(x.trim()), "x")?, parse_coord(Some(y.trim()), "y")?))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> CliResult<Self> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            bail!("empty command");
        };
        let command = match name {
            "k" => Command::Decimal(words.next().unwrap_or_default().to_string()),
            "bin" => Command::Binary(words.next().unwrap_or_default().to_string()),
            "set" => {
                let x = parse_coord(words.next(), "x")?;
                let y = parse_coord(words.next(), "y")?;
                let value = match words.next() {
                    Some("1") => true,
                    Some("0") => false,
                    other => bail!("cell value must be 0 or 1, got {:?}", other.unwrap_or_default()),
                };
                Command::Set { x, y, value }
            }
            "toggle" => Command::Toggle {
                x: parse_coord(words.next(), "x")?,
                y: parse_coord(words.next(), "y")?,
            },
            "paint" | "erase" => {
                let cells = words.by_ref().map(parse_cell).collect::<CliResult<Vec<_>>>()?;
                if cells.is_empty() {
                    bail!("{name} needs at least one x,y cell");
                }
                Command::Stroke { cells, erase: name == "erase" }
            }
            "clear" => Command::Clear,
            "undo" => Command::Undo,
            "redo" => Command::Redo,
            "blend" => Command::Blend,
            "show" => Command::Show,
            "decimal" => Command::PrintDecimal,
            "binary" => Command::PrintBinary,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => bail!("unknown command '{other}', try 'help'"),
        };
        if let Some(extra) = words.next() {
            bail!("unexpected argument '{extra}'");
        }
        Ok(command)
    }
}

pub struct EditSession {
    state: GridEditState,
    tool: PaintTool,
    options: Options,
    json: bool,
}

impl EditSession {
    pub fn new(state: GridEditState, options: Options, json: bool) -> Self {
        let mut tool = PaintTool::new();
        tool.set_blend(options.blend);
        Self { state, tool, options, json }
    }

    pub fn state(&self) -> &GridEditState {
        &self.state
    }

    /// Run one command, writing its output. Returns `false` once the session should end.
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> CliResult<bool> {
        match command {
            Command::Decimal(k) => self.state.set_from_decimal(&k)?,
            Command::Binary(bits) => self.state.set_from_binary(&bits)?,
            Command::Set { x, y, value } => self.state.set_cell(x, y, value)?,
            Command::Toggle { x, y } => self.state.toggle_cell(x, y)?,
            Command::Stroke { cells, erase } => {
                let mut written = 0;
                let mut cells = cells.into_iter();
                if let Some((x, y)) = cells.next() {
                    let result = self.tool.press(&mut self.state, x, y, erase).and_then(|first| {
                        let mut count = usize::from(first);
                        for (x, y) in cells {
                            count += usize::from(self.tool.drag(&mut self.state, x, y, erase)?);
                        }
                        Ok(count)
                    });
                    self.tool.release(&mut self.state);
                    written = result?;
                }
                writeln!(out, "{written} cell(s) changed")?;
            }
            Command::Clear => self.state.clear()?,
            Command::Undo => self.state.undo()?,
            Command::Redo => self.state.redo()?,
            Command::Blend => {
                self.tool.toggle_blend();
                writeln!(out, "blend mode {}", if self.tool.blend() { "on" } else { "off" })?;
            }
            Command::Show => self.show(out)?,
            Command::PrintDecimal => writeln!(out, "{}", self.state.display_decimal())?,
            Command::PrintBinary => writeln!(out, "{}", self.state.display_binary())?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn show(&self, out: &mut impl Write) -> CliResult<()> {
        let text = render(self.state.k(), &self.state.display_binary(), self.state.pixels(), &self.options, self.json)?;
        out.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Read commands line by line until `quit` or end of input
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> CliResult<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let keep_going = match line.parse::<Command>().and_then(|command| self.execute(command, out)) {
                Ok(keep_going) => keep_going,
                Err(err) => {
                    log::debug!("command '{line}' failed: {err}");
                    writeln!(out, "error: {err}")?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }
        Ok(())
    }
}
