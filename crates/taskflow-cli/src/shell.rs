//! Line-oriented command shell driving a [`TaskManager`].
//!
//! This is the presentation adapter: it parses a line, calls exactly one
//! manager operation and re-renders the board after anything that may have
//! changed it. Bad input is reported and the session goes on.
//!
//! In JSON mode stdout carries JSON documents only (plus `help`). Status
//! lines go to the `debug` log and rejected input to the `warn` log.

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::{debug, warn};

use taskflow_core::ports::Clock;
use taskflow_core::{Priority, TaskId, TaskManager};

use crate::errors::{CliError, Result};
use crate::render::{OutputFormat, render_board, render_cycle, render_priority};

pub const HELP: &str = "\
commands:
  add <priority> <description>   create a pending task
  dep <task> <depends-on>        <task> waits for <depends-on>
  start                          start the first eligible pending task
  finish                         complete the oldest in-progress task
  delete                         delete the oldest completed task
  list                           show the board
  priority                       list every task by priority
  cycle                          look for a dependency cycle
  help                           this text
  quit                           leave";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        priority: Priority,
        description: String,
    },
    Depend {
        task: TaskId,
        depends_on: TaskId,
    },
    Start,
    Finish,
    Delete,
    List,
    Priority,
    Cycle,
    Help,
    Quit,
}

impl Command {
    /// Whether the board may look different afterwards.
    fn mutates(&self) -> bool {
        matches!(
            self,
            Command::Add { .. }
                | Command::Depend { .. }
                | Command::Start
                | Command::Finish
                | Command::Delete
        )
    }
}

impl FromStr for Command {
    type Err = CliError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "add" => {
                let (priority, description) = match rest.split_once(char::is_whitespace) {
                    Some((priority, description)) => (priority, description.trim()),
                    None => (rest, ""),
                };
                if priority.is_empty() || description.is_empty() {
                    return Err(CliError::MissingArgument {
                        command: "add",
                        what: "a priority and a description",
                    });
                }
                Ok(Command::Add {
                    priority: priority.parse()?,
                    description: description.to_string(),
                })
            }
            "dep" => {
                let mut args = rest.split_whitespace();
                let (Some(task), Some(depends_on), None) = (args.next(), args.next(), args.next())
                else {
                    return Err(CliError::MissingArgument {
                        command: "dep",
                        what: "exactly two task ids",
                    });
                };
                Ok(Command::Depend {
                    task: task.parse()?,
                    depends_on: depends_on.parse()?,
                })
            }
            "start" => Ok(Command::Start),
            "finish" => Ok(Command::Finish),
            "delete" => Ok(Command::Delete),
            "list" | "ls" => Ok(Command::List),
            "priority" => Ok(Command::Priority),
            "cycle" => Ok(Command::Cycle),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CliError::UnknownCommand(word.to_string())),
        }
    }
}

/// Feed every line of `input` to `manager` until `quit` or end of input.
pub fn run<C: Clock>(
    manager: &mut TaskManager<C>,
    mut input: impl BufRead,
    mut output: impl Write,
    format: OutputFormat,
) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                reject(&mut output, format, &CliError::from(e))?;
                continue;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let command = match trimmed.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                debug!(line = trimmed, "rejected input");
                reject(&mut output, format, &e)?;
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }
        execute(manager, &command, &mut output, format)?;
    }
    output.flush()?;
    Ok(())
}

/// Run one command and print its outcome.
pub fn execute<C: Clock>(
    manager: &mut TaskManager<C>,
    command: &Command,
    output: &mut impl Write,
    format: OutputFormat,
) -> Result<()> {
    match command {
        Command::Add {
            priority,
            description,
        } => {
            let id = manager.create_task(description.clone(), *priority);
            status(output, format, format_args!("created {id}"))?;
        }
        Command::Depend { task, depends_on } => {
            if manager.add_dependency(*task, *depends_on) {
                status(output, format, format_args!("{task} now waits for {depends_on}"))?;
            } else {
                status(output, format, format_args!("ignored: unknown task"))?;
            }
        }
        Command::Start => match manager.start_next() {
            Some(id) => status(output, format, format_args!("started {id}"))?,
            None => status(output, format, format_args!("no eligible pending task"))?,
        },
        Command::Finish => match manager.finish_current() {
            Some(id) => status(output, format, format_args!("finished {id}"))?,
            None => status(output, format, format_args!("nothing in progress"))?,
        },
        Command::Delete => match manager.delete_completed() {
            Some(id) => status(output, format, format_args!("deleted {id}"))?,
            None => status(output, format, format_args!("nothing completed"))?,
        },
        Command::List => {}
        Command::Priority => {
            write!(output, "{}", render_priority(&manager.by_priority(), format)?)?;
        }
        Command::Cycle => {
            write!(output, "{}", render_cycle(manager.find_cycle().as_deref(), format)?)?;
        }
        Command::Help => writeln!(output, "{HELP}")?,
        Command::Quit => {}
    }

    if command.mutates() || *command == Command::List {
        let rendered = render_board(&manager.snapshot(), format)?;
        write!(output, "{rendered}")?;
        if format == OutputFormat::Json {
            writeln!(output)?;
        }
    }
    Ok(())
}

fn status(
    output: &mut impl Write,
    format: OutputFormat,
    message: fmt::Arguments<'_>,
) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(output, "{message}")?,
        OutputFormat::Json => debug!("{message}"),
    }
    Ok(())
}

fn reject(output: &mut impl Write, format: OutputFormat, err: &CliError) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(output, "error: {err}")?,
        OutputFormat::Json => warn!(error = %err, "rejected input"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;
    use taskflow_core::TaskflowError;
    use taskflow_core::ports::FixedClock;

    fn manager() -> TaskManager<FixedClock> {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        TaskManager::with_clock(FixedClock::new(at))
    }

    fn session(script: &str) -> (TaskManager<FixedClock>, String) {
        let mut manager = manager();
        let mut out = Vec::new();
        run(&mut manager, script.as_bytes(), &mut out, OutputFormat::Text).unwrap();
        (manager, String::from_utf8(out).unwrap())
    }

    #[rstest]
    #[case::start("start", Command::Start)]
    #[case::upper("FINISH", Command::Finish)]
    #[case::delete("  delete ", Command::Delete)]
    #[case::ls("ls", Command::List)]
    #[case::exit("exit", Command::Quit)]
    fn parses_bare_commands(#[case] line: &str, #[case] expected: Command) {
        assert_eq!(line.parse::<Command>().unwrap(), expected);
    }

    #[test]
    fn parses_add_with_multi_word_description() {
        assert_eq!(
            "add -3  write the   report".parse::<Command>().unwrap(),
            Command::Add {
                priority: Priority::new(-3),
                description: "write the   report".to_string(),
            }
        );
    }

    #[test]
    fn parses_dep_with_either_id_form() {
        assert_eq!(
            "dep task-2 1".parse::<Command>().unwrap(),
            Command::Depend {
                task: TaskId::new(2),
                depends_on: TaskId::new(1),
            }
        );
    }

    #[test]
    fn add_rejects_malformed_priority() {
        let err = "add high something".parse::<Command>().unwrap_err();
        assert!(matches!(
            err,
            CliError::Core(TaskflowError::InvalidPriority(p)) if p == "high"
        ));
    }

    #[rstest]
    #[case::add_without_description("add 3")]
    #[case::add_bare("add")]
    #[case::dep_one_id("dep 1")]
    #[case::dep_three_ids("dep 1 2 3")]
    fn reports_missing_arguments(#[case] line: &str) {
        assert!(matches!(
            line.parse::<Command>(),
            Err(CliError::MissingArgument { .. })
        ));
    }

    #[test]
    fn unknown_command_is_an_error() {
        assert!(matches!(
            "frobnicate".parse::<Command>(),
            Err(CliError::UnknownCommand(word)) if word == "frobnicate"
        ));
    }

    #[test]
    fn session_renders_after_each_change() {
        let (manager, out) = session("add 2 write docs\nstart\n");

        let id = manager.in_progress()[0].id();
        assert!(out.contains(&format!("created {id}")));
        assert!(out.contains(&format!("started {id}")));
        assert!(out.contains(&format!("In progress:\n  [{id}] write docs - priority: 2\n")));
    }

    #[test]
    fn session_survives_bad_input() {
        let (manager, out) = session("add nope task\nbogus\n# comment\n\nadd 1 real task\n");

        assert!(out.contains("error: invalid priority"));
        assert!(out.contains("error: unknown command"));
        assert_eq!(manager.pending().len(), 1);
    }

    #[test]
    fn session_survives_non_utf8_line() {
        let mut manager = manager();
        let mut out = Vec::new();
        let script: &[u8] = b"add 1 first\nadd 2 caf\xe9\nadd 3 third\nstart\n";
        run(&mut manager, script, &mut out, OutputFormat::Text).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("error: input line is not valid UTF-8"));
        assert_eq!(manager.pending().len(), 1);
        assert_eq!(manager.in_progress().len(), 1);
        assert_eq!(manager.in_progress()[0].description(), "first");
    }

    #[test]
    fn json_session_prints_only_json_documents() {
        let mut manager = manager();
        let mut out = Vec::new();
        let script = "add 2 A\nadd 1 B\nbogus\nstart\npriority\ncycle\n";
        run(&mut manager, script.as_bytes(), &mut out, OutputFormat::Json).unwrap();

        let documents: Vec<serde_json::Value> = serde_json::Deserializer::from_slice(&out)
            .into_iter()
            .collect::<std::result::Result<_, _>>()
            .unwrap();
        // three board snapshots, the priority listing, the cycle report
        assert_eq!(documents.len(), 5);
        assert_eq!(documents[2]["in_progress"].as_array().map(Vec::len), Some(1));
        assert_eq!(documents[3].as_array().map(Vec::len), Some(2));
        assert!(documents[4].is_null());
    }

    #[test]
    fn quit_stops_reading() {
        let (manager, _) = session("add 1 a\nquit\nadd 1 b\n");
        assert_eq!(manager.pending().len(), 1);
    }

    #[test]
    fn read_only_commands_do_not_render_board() {
        let (_, out) = session("priority\ncycle\nhelp\n");
        assert!(!out.contains("Pending:"));
        assert!(out.contains("By priority:\n  (empty)\n"));
        assert!(out.contains("no dependency cycle"));
        assert!(out.contains("commands:"));
    }

    #[test]
    fn full_workflow_through_the_shell() {
        let mut manager = manager();
        let mut out = Vec::new();
        run(&mut manager, "add 2 A\nadd 1 B\n".as_bytes(), &mut out, OutputFormat::Text).unwrap();
        let a = manager.pending()[0].id();
        let b = manager.pending()[1].id();

        let script = format!("dep {b} {a}\nstart\nfinish\nstart\nfinish\ndelete\n");
        let mut out = Vec::new();
        run(&mut manager, script.as_bytes(), &mut out, OutputFormat::Text).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains(&format!("{b} now waits for {a}")));
        assert!(out.contains(&format!("deleted {a}")));
        let completed: Vec<TaskId> = manager.completed().iter().map(|t| t.id()).collect();
        assert_eq!(completed, vec![b]);
    }
}
