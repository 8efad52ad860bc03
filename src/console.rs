//! # Diagnostic Console
//!
//! Line-oriented driver for an [`EditorPlatform`] over a [`MemoryHost`].
//! Each input line is one command; each result is printed as one JSON line.
//! A failing command reports its error and the session continues.

use crate::platform::{EditorMode, EditorPlatform, MemoryHost, Space, SpaceOffset, TextWidget};
use anyhow::{anyhow, bail, Context, Result};
use serde_json::{json, Value};
use std::io::{BufRead, Write};

/// Parsed console command
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Space(Option<Space>),
    Text { index: usize, length: usize },
    Replace { index: usize, length: usize, mark_undo: bool, text: String },
    Position,
    Goto(usize),
    Line(Option<usize>),
    Offset(usize),
    Lines,
    Mark,
    Undo,
    Redo,
    Mode(EditorMode),
    CommandLine(String),
    ActionLine(String),
    Shift { line: usize, count: usize, delta: isize },
    Save,
    Fold { start: usize, end: usize },
    Unfold(usize),
    Dump,
    Quit,
}

impl ConsoleCommand {
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let (name, rest) = input.split_once(' ').unwrap_or((input, ""));
        let args: Vec<&str> = rest.split_whitespace().collect();

        let command = match name {
            "space" => match args.first() {
                Some(space) => {
                    let space = space.parse::<Space>().map_err(|e| anyhow!(e))?;
                    ConsoleCommand::Space(Some(space))
                }
                None => ConsoleCommand::Space(None),
            },
            "text" => ConsoleCommand::Text {
                index: number(&args, 0, "index")?,
                length: number(&args, 1, "length")?,
            },
            "replace" => {
                // replace INDEX LENGTH MARK TEXT...; TEXT keeps inner spaces
                let mut parts = rest.splitn(4, ' ');
                let index = parse_arg(parts.next(), "index")?;
                let length = parse_arg(parts.next(), "length")?;
                let mark_undo = match parts.next() {
                    Some("1") | Some("true") => true,
                    Some("0") | Some("false") => false,
                    other => bail!("mark must be 0 or 1, got {:?}", other),
                };
                let text = unescape(parts.next().unwrap_or(""));
                ConsoleCommand::Replace {
                    index,
                    length,
                    mark_undo,
                    text,
                }
            }
            "pos" => ConsoleCommand::Position,
            "goto" => ConsoleCommand::Goto(number(&args, 0, "offset")?),
            "line" => ConsoleCommand::Line(match args.first() {
                Some(_) => Some(number(&args, 0, "line")?),
                None => None,
            }),
            "offset" => ConsoleCommand::Offset(number(&args, 0, "offset")?),
            "lines" => ConsoleCommand::Lines,
            "mark" => ConsoleCommand::Mark,
            "undo" => ConsoleCommand::Undo,
            "redo" => ConsoleCommand::Redo,
            "mode" => ConsoleCommand::Mode(match args.first().copied() {
                Some("normal") => EditorMode::Normal,
                Some("insert") => EditorMode::Insert,
                Some("command") | Some("cmdline") => EditorMode::CommandLine,
                other => bail!("unknown mode {:?}", other),
            }),
            "cmdline" => ConsoleCommand::CommandLine(rest.to_string()),
            "action" => ConsoleCommand::ActionLine(rest.to_string()),
            "shift" => ConsoleCommand::Shift {
                line: number(&args, 0, "line")?,
                count: number(&args, 1, "count")?,
                delta: args
                    .get(2)
                    .ok_or_else(|| anyhow!("missing delta"))?
                    .parse::<isize>()
                    .context("bad delta")?,
            },
            "save" | "w" => ConsoleCommand::Save,
            "fold" => ConsoleCommand::Fold {
                start: number(&args, 0, "start")?,
                end: number(&args, 1, "end")?,
            },
            "unfold" => ConsoleCommand::Unfold(number(&args, 0, "start")?),
            "dump" => ConsoleCommand::Dump,
            "quit" | "q" => ConsoleCommand::Quit,
            other => bail!("unknown command '{other}'"),
        };
        Ok(command)
    }
}

fn number(args: &[&str], index: usize, name: &str) -> Result<usize> {
    parse_arg(args.get(index).copied(), name)
}

fn parse_arg(arg: Option<&str>, name: &str) -> Result<usize> {
    arg.ok_or_else(|| anyhow!("missing {name}"))?
        .parse::<usize>()
        .with_context(|| format!("bad {name}"))
}

fn unescape(text: &str) -> String {
    text.replace("\\n", "\n").replace("\\t", "\t")
}

pub struct Console {
    host: MemoryHost,
    platform: EditorPlatform,
}

impl Console {
    pub fn new(host: MemoryHost, platform: EditorPlatform) -> Self {
        Self { host, platform }
    }

    pub fn platform(&self) -> &EditorPlatform {
        &self.platform
    }

    /// Run one command; `None` means the session should end
    pub fn execute(&mut self, command: ConsoleCommand) -> Result<Option<Value>> {
        let platform = &mut self.platform;
        let value = match command {
            ConsoleCommand::Space(Some(space)) => {
                platform.set_space(space);
                json!(space)
            }
            ConsoleCommand::Space(None) => json!(platform.space()),
            ConsoleCommand::Text { index, length } => json!(platform.text(index, length)?),
            ConsoleCommand::Replace {
                index,
                length,
                mark_undo,
                text,
            } => {
                platform.replace(index, length, &text, mark_undo)?;
                json!(self.host.text())
            }
            ConsoleCommand::Position => json!(platform.position()),
            ConsoleCommand::Goto(offset) => {
                platform.set_position_index(offset);
                json!(platform.position())
            }
            ConsoleCommand::Line(None) => json!(platform.line_information()?),
            ConsoleCommand::Line(Some(line)) => json!(platform.line_information_at(line)?),
            ConsoleCommand::Offset(offset) => {
                let offset = SpaceOffset::tagged(platform.space(), offset);
                json!(platform.line_information_of_offset(offset)?)
            }
            ConsoleCommand::Lines => json!(platform.number_of_lines()),
            ConsoleCommand::Mark => {
                platform.set_undo_mark();
                Value::Null
            }
            ConsoleCommand::Undo => {
                platform.undo();
                json!(self.host.text())
            }
            ConsoleCommand::Redo => {
                platform.redo();
                json!(self.host.text())
            }
            ConsoleCommand::Mode(mode) => {
                match mode {
                    EditorMode::Normal => platform.to_normal_mode()?,
                    EditorMode::Insert => platform.to_insert_mode(),
                    EditorMode::CommandLine => platform.to_command_line_mode(),
                }
                json!({
                    "mode": platform.mode(),
                    "caret": self.host.editor().caret_size(),
                    "command_line": platform.command_line(),
                })
            }
            ConsoleCommand::CommandLine(text) => {
                platform.set_command_line(text);
                json!(platform.command_line())
            }
            ConsoleCommand::ActionLine(text) => {
                platform.set_action_line(text);
                json!(platform.command_line())
            }
            ConsoleCommand::Shift { line, count, delta } => {
                platform.shift(line, count, delta);
                Value::Null
            }
            ConsoleCommand::Save => json!({ "saved": platform.save()? }),
            ConsoleCommand::Fold { start, end } => json!(self.host.fold(start, end)),
            ConsoleCommand::Unfold(start) => json!(self.host.unfold(start)),
            ConsoleCommand::Dump => self.dump(),
            ConsoleCommand::Quit => return Ok(None),
        };
        Ok(Some(value))
    }

    fn dump(&self) -> Value {
        json!({
            "space": self.platform.space(),
            "mode": self.platform.mode(),
            "position": self.platform.position(),
            "lines": self.platform.number_of_lines(),
            "command_line": self.platform.command_line(),
            "folds": self.host.editor().folds().folds(),
            "text": self.host.text(),
            "visible": self.host.visible_text(),
        })
    }

    /// Read commands until end of input or `quit`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read console input")?;
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let result = ConsoleCommand::parse(&line).and_then(|command| self.execute(command));
            let value = match result {
                Ok(Some(value)) => json!({ "ok": value }),
                Ok(None) => break,
                Err(e) => {
                    tracing::debug!("console command failed: {:#}", e);
                    json!({ "error": format!("{e:#}") })
                }
            };
            writeln!(output, "{value}").context("failed to write console output")?;
        }
        output.flush()?;
        Ok(())
    }
}
