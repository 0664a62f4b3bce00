//! Interactive session.
//!
//! Reads one command per line, runs it through the same API as the one-shot
//! subcommands and re-renders the list after every change. The session keeps
//! an error slot: a failed command leaves its message on screen until a
//! later command actually changes a counter.

use super::commands::add_counter;
use super::render::{render_counters, render_messages, render_total};
use colored::Colorize;
use std::io::{BufRead, Write};
use tally::api::{CmdResult, TallyApi};
use tally::config::TallyConfig;
use tally::error::Result;
use tally::store::StorageBackend;

const PROMPT: &str = "tally> ";

const HELP: &str = "\
Commands:
  add <name...> [--by N]   create a counter (alias: n)
  up <counter...>          step up (aliases: inc, +)
  down <counter...>        step down (aliases: dec, -)
  reset <counter...>       set to zero
  rm <counter...>          delete for good (alias: delete)
  list                     show all counters (alias: ls)
  total                    show the total
  help                     this text
  quit                     leave (alias: exit, q)

Counters are picked by position (1), name (apples) or id (#3fa9c2).
";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    Add { name: String, by: Option<i64> },
    Up(Vec<String>),
    Down(Vec<String>),
    Reset(Vec<String>),
    Delete(Vec<String>),
    List,
    Total,
    Help,
    Quit,
}

fn parse_line(line: &str) -> std::result::Result<Option<ShellCommand>, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&verb, args)) = tokens.split_first() else {
        return Ok(None);
    };
    let owned = || args.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    let need_args = |cmd: ShellCommand| {
        if args.is_empty() {
            Err(format!("{} needs at least one counter", verb))
        } else {
            Ok(Some(cmd))
        }
    };

    match verb.to_lowercase().as_str() {
        "add" | "n" => parse_add(args).map(Some),
        "up" | "inc" | "+" => need_args(ShellCommand::Up(owned())),
        "down" | "dec" | "-" => need_args(ShellCommand::Down(owned())),
        "reset" => need_args(ShellCommand::Reset(owned())),
        "rm" | "delete" => need_args(ShellCommand::Delete(owned())),
        "list" | "ls" => Ok(Some(ShellCommand::List)),
        "total" => Ok(Some(ShellCommand::Total)),
        "help" | "?" => Ok(Some(ShellCommand::Help)),
        "quit" | "exit" | "q" => Ok(Some(ShellCommand::Quit)),
        other => Err(format!("Unknown command: {} (try help)", other)),
    }
}

fn parse_add(args: &[&str]) -> std::result::Result<ShellCommand, String> {
    let mut name = Vec::new();
    let mut by = None;
    let mut iter = args.iter();
    while let Some(&arg) = iter.next() {
        if arg == "--by" || arg == "-b" {
            let value = iter
                .next()
                .ok_or_else(|| format!("{} needs a number", arg))?;
            by = Some(
                value
                    .parse::<i64>()
                    .map_err(|_| format!("Not a number: {}", value))?,
            );
        } else {
            name.push(arg);
        }
    }
    Ok(ShellCommand::Add {
        name: name.join(" "),
        by,
    })
}

fn execute<B: StorageBackend>(
    api: &mut TallyApi<B>,
    config: &TallyConfig,
    command: &ShellCommand,
) -> Result<CmdResult> {
    match command {
        ShellCommand::Add { name, by } => add_counter(api, config, name, *by),
        ShellCommand::Up(sel) => api.increment(sel),
        ShellCommand::Down(sel) => api.decrement(sel),
        ShellCommand::Reset(sel) => api.reset(sel),
        ShellCommand::Delete(sel) => api.delete(sel),
        ShellCommand::List | ShellCommand::Total | ShellCommand::Help | ShellCommand::Quit => {
            api.list()
        }
    }
}

fn render_view<B: StorageBackend>(
    api: &TallyApi<B>,
    config: &TallyConfig,
    error: Option<&str>,
) -> String {
    let mut out = String::new();
    if let Some(err) = error {
        out.push_str(&format!("{}\n", format!("! {}", err).red()));
    }
    let state = api.state();
    out.push_str(&render_counters(&state.counters, state.total, config.show_ids));
    out
}

pub(super) fn run<B, R, W>(
    api: &mut TallyApi<B>,
    config: &TallyConfig,
    mut input: R,
    out: &mut W,
) -> Result<()>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    let mut error: Option<String> = None;
    write!(out, "{}", render_view(api, config, None))?;

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(msg) => {
                error = Some(msg);
                write!(out, "{}", render_view(api, config, error.as_deref()))?;
                continue;
            }
        };

        match command {
            ShellCommand::Quit => return Ok(()),
            ShellCommand::Help => {
                write!(out, "{}", HELP)?;
                continue;
            }
            _ => {}
        }

        match execute(api, config, &command) {
            Ok(result) => {
                if !result.affected.is_empty() {
                    error = None;
                }
                write!(out, "{}", render_messages(&result.messages))?;
                if command == ShellCommand::Total {
                    write!(out, "{}", render_total(api.state().total))?;
                } else {
                    write!(out, "{}", render_view(api, config, error.as_deref()))?;
                }
            }
            Err(e) => {
                error = Some(e.to_string());
                write!(out, "{}", render_view(api, config, error.as_deref()))?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally::store::memory::MemBackend;

    fn session(script: &str) -> (TallyApi<MemBackend>, String) {
        colored::control::set_override(false);
        let mut api = TallyApi::new(MemBackend::new());
        let mut out = Vec::new();
        run(&mut api, &TallyConfig::default(), script.as_bytes(), &mut out).unwrap();
        (api, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parses_add_with_step() {
        assert_eq!(
            parse_line("add Green Apples --by 5\n"),
            Ok(Some(ShellCommand::Add {
                name: "Green Apples".into(),
                by: Some(5)
            }))
        );
        assert!(parse_line("add Apples --by").is_err());
        assert!(parse_line("add Apples --by five").is_err());
    }

    #[test]
    fn parses_verbs_and_aliases() {
        assert_eq!(
            parse_line("+ 1 2"),
            Ok(Some(ShellCommand::Up(vec!["1".into(), "2".into()])))
        );
        assert_eq!(parse_line("LS"), Ok(Some(ShellCommand::List)));
        assert_eq!(parse_line("   "), Ok(None));
        assert!(parse_line("down").is_err());
        assert!(parse_line("frobnicate").is_err());
    }

    #[test]
    fn scenario_through_the_shell() {
        let (api, out) = session(
            "add Apples --by 5\nadd Bananas\nup apples\nup 2\nrm apples\nquit\n",
        );
        let state = api.state();
        assert_eq!(state.counters.len(), 1);
        assert_eq!(state.counters[0].name, "Bananas");
        assert_eq!(state.total, 1);
        assert!(out.contains("Counter added: Apples (+5)"));
        assert!(out.contains("Total: 6"));
        assert!(out.ends_with(PROMPT));
    }

    #[test]
    fn error_slot_clears_after_success() {
        let (_, out) = session("add Apples\nadd apples\nlist\nadd Pears\n");
        let first_err = out.find("! name not unique").unwrap();
        let after_list = &out[first_err + 1..];
        assert!(after_list.contains("! name not unique"));

        let added = out.find("Counter added: Pears").unwrap();
        assert!(!out[added..].contains("! name not unique"));
    }

    #[test]
    fn refused_decrement_keeps_error_slot() {
        let (_, out) = session("add Apples\nadd apples\ndown 1\n");
        let warned = out.find("cannot go below zero").unwrap();
        assert!(out[warned..].contains("! name not unique"));
    }

    #[test]
    fn blocked_decrement_warns() {
        let (api, out) = session("add Apples --by 5\ndown 1\n");
        assert!(out.contains("cannot go below zero"));
        assert_eq!(api.state().total, 0);
    }

    #[test]
    fn eof_ends_session() {
        let (_, out) = session("add Apples");
        assert!(out.contains("Counter added: Apples"));
        assert!(out.ends_with('\n'));
    }
}
