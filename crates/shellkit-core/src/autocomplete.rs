//! Prefix autocomplete over the registry
//!
//! The completer caches the names of the commands visible in the active
//! scope. It must be reloaded whenever the registry or the scope changes.
//! Completion never writes to the terminal; it answers with
//! [`BufferEdit`]s for the prompter to apply.

use crate::prompt::BufferEdit;
use crate::registry::Registry;
use crate::scope::Scope;

/// Spaces added after the longest name in the candidate listing
pub const COLUMN_MARGIN: usize = 3;

/// Cached completion candidates
#[derive(Debug, Clone, Default)]
pub struct Completer {
    names: Vec<String>,
    longest: usize,
}

impl Completer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the candidate cache from `registry` filtered by `scope`
    pub fn reload(&mut self, registry: &Registry, scope: &Scope) {
        self.names = registry
            .command_names(scope)
            .into_iter()
            .map(str::to_string)
            .collect();
        self.longest = self
            .names
            .iter()
            .map(|n| n.chars().count())
            .max()
            .unwrap_or(0);
        tracing::debug!(candidates = self.names.len(), "autocomplete reloaded");
    }

    /// Cached command names, sorted
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Names starting with `line`, compared literally
    pub fn matches(&self, line: &str) -> Vec<&str> {
        if line.is_empty() {
            return Vec::new();
        }
        self.names
            .iter()
            .filter(|name| name.starts_with(line))
            .map(String::as_str)
            .collect()
    }

    /// Complete `line`, the in-progress input buffer
    pub fn begin(&self, line: &str, width: Option<usize>) -> Vec<BufferEdit> {
        if line.ends_with(char::is_whitespace) {
            return Vec::new();
        }

        let matches = self.matches(line);
        if let [only] = matches.as_slice() {
            return vec![BufferEdit::Clear, BufferEdit::Insert(format!("{only} "))];
        }

        // With no match the whole cache becomes the candidate set
        let candidates = if matches.is_empty() {
            self.names.iter().map(String::as_str).collect()
        } else {
            matches
        };
        let prefix = common_prefix(&candidates);
        let prefill = if prefix.is_empty() { line.to_string() } else { prefix };

        if candidates.is_empty() {
            return Vec::new();
        }

        let mut edits = vec![
            BufferEdit::Clear,
            BufferEdit::PrintAbove(self.render_columns(&candidates, width)),
            BufferEdit::Redraw,
        ];
        if !prefill.is_empty() {
            edits.push(BufferEdit::Insert(prefill));
        }
        edits
    }

    /// Lay candidates out in aligned columns that fit `width`
    ///
    /// Without a known width every candidate goes on one row.
    pub fn render_columns(&self, candidates: &[&str], width: Option<usize>) -> String {
        let column = self.longest + COLUMN_MARGIN;
        let per_row = match width {
            Some(width) => (width / column).max(1),
            None => candidates.len().max(1),
        };

        candidates
            .chunks(per_row)
            .map(|row| {
                row.iter()
                    .map(|name| format!("{name:<column$}"))
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Longest literal prefix shared by every candidate
fn common_prefix(candidates: &[&str]) -> String {
    let Some((first, rest)) = candidates.split_first() else {
        return String::new();
    };

    let mut prefix: &str = first;
    for candidate in rest {
        while !candidate.starts_with(prefix) {
            let mut chars = prefix.chars();
            chars.next_back();
            prefix = chars.as_str();
        }
    }
    prefix.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::{Argument, ArgumentOptions, handler_fn};
    use crate::wizard::Completion;

    fn registry_with(names: &[(&str, &str)]) -> Registry {
        let mut registry = Registry::new();
        for (name, scope) in names {
            registry.add(
                name,
                Argument::command(
                    "",
                    ArgumentOptions::default().scope(*scope),
                    handler_fn(|_| async { Ok(Completion::Done) }),
                ),
            );
        }
        registry
    }

    fn completer(names: &[&str]) -> Completer {
        let entries: Vec<(&str, &str)> = names.iter().map(|n| (*n, "global")).collect();
        let mut completer = Completer::new();
        completer.reload(&registry_with(&entries), &Scope::new());
        completer
    }

    fn prefill(edits: &[BufferEdit]) -> Option<&str> {
        edits.iter().find_map(|e| match e {
            BufferEdit::Insert(text) => Some(text.as_str()),
            _ => None,
        })
    }

    fn listing(edits: &[BufferEdit]) -> Option<&str> {
        edits.iter().find_map(|e| match e {
            BufferEdit::PrintAbove(text) => Some(text.as_str()),
            _ => None,
        })
    }

    #[test]
    fn test_ambiguous_prefix_lists_all_and_keeps_common_prefix() {
        let completer = completer(&["status", "stop", "start"]);
        let edits = completer.begin("st", None);

        let block = listing(&edits).unwrap();
        for name in ["status", "stop", "start"] {
            assert!(block.contains(name));
        }
        assert_eq!(prefill(&edits), Some("st"));
    }

    #[test]
    fn test_common_prefix_of_two() {
        let completer = completer(&["stop", "start"]);
        let edits = completer.begin("s", None);
        assert_eq!(prefill(&edits), Some("st"));
    }

    #[test]
    fn test_unique_prefix_completes_with_space() {
        let completer = completer(&["status", "stop", "start"]);
        let edits = completer.begin("sto", None);
        assert_eq!(
            edits,
            vec![BufferEdit::Clear, BufferEdit::Insert("stop ".to_string())]
        );

        let edits = completer.begin("star", None);
        assert_eq!(prefill(&edits), Some("start "));
        assert!(listing(&edits).is_none());

        // "sta" still matches both start and status
        let edits = completer.begin("sta", None);
        assert_eq!(prefill(&edits), Some("sta"));
        assert!(listing(&edits).is_some());
    }

    #[test]
    fn test_trailing_whitespace_is_noop() {
        let completer = completer(&["status"]);
        assert!(completer.begin("status ", None).is_empty());
    }

    #[test]
    fn test_no_match_lists_everything_and_restores_text() {
        let completer = completer(&["help", "exit"]);
        let edits = completer.begin("xyz", None);

        let block = listing(&edits).unwrap();
        assert!(block.contains("help") && block.contains("exit"));
        assert_eq!(prefill(&edits), Some("xyz"));
    }

    #[test]
    fn test_no_match_prefills_prefix_shared_by_all() {
        let completer = completer(&["start", "stop"]);
        let edits = completer.begin("x", None);

        let block = listing(&edits).unwrap();
        assert!(block.contains("start") && block.contains("stop"));
        assert_eq!(prefill(&edits), Some("st"));
    }

    #[test]
    fn test_empty_line_lists_everything() {
        let completer = completer(&["help", "exit"]);
        let edits = completer.begin("", None);
        assert!(listing(&edits).is_some());
        assert_eq!(prefill(&edits), None);
    }

    #[test]
    fn test_metacharacters_match_literally() {
        let completer = completer(&["a.b", "axb", "a+"]);
        assert_eq!(completer.matches("a."), vec!["a.b"]);
        assert_eq!(completer.matches(".*"), Vec::<&str>::new());
        assert_eq!(completer.matches("a+"), vec!["a+"]);
    }

    #[test]
    fn test_scope_filters_candidates() {
        let registry = registry_with(&[("deploy", "ops"), ("help", "*"), ("status", "global")]);
        let mut scope = Scope::new();
        let mut completer = Completer::new();

        completer.reload(&registry, &scope);
        assert_eq!(completer.names(), ["help", "status"]);

        scope.set(Some("ops"));
        completer.reload(&registry, &scope);
        assert_eq!(completer.names(), ["deploy", "help"]);
    }

    #[test]
    fn test_render_columns_wraps_to_width() {
        let completer = completer(&["alpha", "beta", "gamma", "delta"]);
        let names = ["alpha", "beta", "delta", "gamma"];

        // column width = 5 + 3
        let block = completer.render_columns(&names, Some(17));
        assert_eq!(block, "alpha   beta\ndelta   gamma");

        let one_row = completer.render_columns(&names, None);
        assert_eq!(one_row, "alpha   beta    delta   gamma");

        let narrow = completer.render_columns(&names, Some(3));
        assert_eq!(narrow.lines().count(), 4);
    }

    #[test]
    fn test_common_prefix_helper() {
        assert_eq!(common_prefix(&["status", "stop", "start"]), "st");
        assert_eq!(common_prefix(&["help", "exit"]), "");
        assert_eq!(common_prefix(&["only"]), "only");
        assert_eq!(common_prefix(&[]), "");
    }
}
