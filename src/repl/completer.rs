use rustyline::{completion::Pair, Context};

use super::command::Command;
use crate::store::Network;

pub(crate) struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        CommandCompleter
    }
}

fn get_current_word(line: &str, pos: usize) -> &str {
    let start = line[..pos].rfind(' ').map_or(0, |i| i + 1);
    &line[start..pos]
}

fn candidates(line: &str, pos: usize) -> Vec<&'static str> {
    let previous = line[..pos].split_whitespace().collect::<Vec<_>>();
    let completing_first =
        previous.is_empty() || (previous.len() == 1 && !line[..pos].ends_with(' '));
    if completing_first {
        return Command::names();
    }
    if previous[0] == "network" {
        return Network::all().iter().map(|n| n.tag()).collect();
    }
    vec![]
}

impl rustyline::completion::Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let current_word = get_current_word(line, pos);
        let matches = candidates(line, pos)
            .into_iter()
            .filter(|candidate| candidate.starts_with(current_word))
            .map(|candidate| Pair {
                display: candidate.to_owned(),
                replacement: candidate.to_owned(),
            })
            .collect();
        Ok((pos - current_word.len(), matches))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates() {
        assert!(candidates("re", 2).contains(&"remove"));
        assert_eq!(candidates("network p", 9), vec!["ethereum", "polygon", "arbitrum"]);
        assert!(candidates("name ", 5).is_empty());
    }
}
