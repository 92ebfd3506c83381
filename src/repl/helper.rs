use anyhow::Result;
use rustyline::{
    highlight::Highlighter, hint::HistoryHinter, history::FileHistory, Completer, Config, Editor,
    Helper, Hinter, Validator,
};
use std::borrow::Cow::{self, Borrowed, Owned};

use super::completer::CommandCompleter;

const PROMPT_COLOR: &str = "\x1b[1;32m";
const HINT_COLOR: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

fn paint(text: &str, color: &str) -> String {
    format!("{}{}{}", color, text, RESET)
}

#[derive(Helper, Completer, Hinter, Validator)]
pub(crate) struct DashboardHelper {
    #[rustyline(Completer)]
    completer: CommandCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl DashboardHelper {
    pub fn new() -> Self {
        DashboardHelper {
            completer: CommandCompleter::new(),
            hinter: HistoryHinter::new(),
        }
    }
}

impl Highlighter for DashboardHelper {
    // `default` is false while rustyline renders its own search prompts
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Owned(paint(prompt, PROMPT_COLOR))
        } else {
            Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(paint(hint, HINT_COLOR))
    }
}

pub(crate) fn create_editor() -> Result<Editor<DashboardHelper, FileHistory>> {
    let config = Config::builder()
        .completion_type(rustyline::CompletionType::List)
        .auto_add_history(true)
        .build();
    let mut rl: Editor<DashboardHelper, _> = Editor::with_config(config)?;
    rl.set_helper(Some(DashboardHelper::new()));
    Ok(rl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_coloured() {
        let helper = DashboardHelper::new();
        assert_eq!(helper.highlight_prompt(">> ", true), "\x1b[1;32m>> \x1b[0m");
        assert_eq!(helper.highlight_prompt("(reverse-i-search)", false), "(reverse-i-search)");
        assert_eq!(helper.highlight_hint("save"), "\x1b[2msave\x1b[0m");
    }
}
