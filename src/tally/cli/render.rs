use colored::Colorize;
use tally::api::{CmdMessage, MessageLevel};
use tally::model::Counter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 28;
const VALUE_WIDTH: usize = 8;
const EMPTY_LIST: &str = "Nothing counted yet. Start with: tally add <name>";

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

pub(super) fn render_total(total: i64) -> String {
    format!("{} {}\n", "Total:".bold(), total.to_string().bold().green())
}

/// One line per counter, in list order, followed by the total.
///
/// ```text
///   1. Apples                          15   +5 / -5   #3fa9c2
///   2. Bananas                          0   +1 / -1   #a01bc4
///
/// Total: 15
/// ```
///
/// The `-N` control is dimmed when a decrement would go below zero.
pub(super) fn render_counters(counters: &[Counter], total: i64, show_ids: bool) -> String {
    if counters.is_empty() {
        return format!("{}\n", EMPTY_LIST.dimmed());
    }

    let idx_width = counters.len().to_string().len();
    let mut out = String::new();

    for (i, counter) in counters.iter().enumerate() {
        let idx = format!("{:>width$}.", i + 1, width = idx_width);
        let name = pad_to_width(&truncate_to_width(&counter.name, NAME_WIDTH), NAME_WIDTH);
        let value = format!("{:>width$}", counter.value, width = VALUE_WIDTH);

        let up = format!("+{}", counter.increment).green();
        let down = format!("-{}", counter.increment);
        let down = if counter.can_decrement() {
            down.yellow()
        } else {
            down.dimmed()
        };

        out.push_str(&format!(
            "  {} {} {}   {} / {}",
            idx.yellow(),
            name.bold(),
            value,
            up,
            down
        ));
        if show_ids {
            out.push_str(&format!("   {}", format!("#{}", counter.badge()).dimmed()));
        }
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&render_total(total));
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
