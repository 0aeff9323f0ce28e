use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::corrector::{DecisionContext, DecisionProvider, Verdict};
use crate::SpellingError;

/// Interactive terminal decision provider: presents one misspelled word at
/// a time and maps the user's choice onto a [`Verdict`].
pub struct TerminalDecisionProvider {
    pub max_suggestions: usize,
}

impl TerminalDecisionProvider {
    pub fn new(max_suggestions: usize) -> Self {
        Self { max_suggestions }
    }
}

const EDIT_REPLACEMENT: &str = "Replace with…";
const EDIT_REPLACE_ALL: &str = "Replace all occurrences with…";
const IGNORE_ONCE: &str = "Ignore";
const IGNORE_ALL: &str = "Ignore all";
const ADD_TO_DICTIONARY: &str = "Add to dictionary";
const ALWAYS_IGNORE: &str = "Always ignore";
const QUIT: &str = "Quit";

impl DecisionProvider for TerminalDecisionProvider {
    fn decide(
        &mut self,
        ctx: &mut DecisionContext<'_>,
        error: &SpellingError,
        suggestions: &[String],
        position: usize,
        total: usize,
    ) -> Verdict {
        println!(
            "\n{} {} ({}/{})",
            style("Misspelled:").yellow().bold(),
            style(&error.word).red().bold(),
            position,
            total
        );

        let shown: Vec<&String> = suggestions.iter().take(self.max_suggestions).collect();

        let mut items: Vec<String> = shown
            .iter()
            .map(|s| format!("Replace with \"{}\"", s))
            .collect();
        let actions_base = items.len();
        items.push(EDIT_REPLACEMENT.to_string());
        items.push(EDIT_REPLACE_ALL.to_string());
        items.push(IGNORE_ONCE.to_string());
        items.push(IGNORE_ALL.to_string());
        if ctx.can_add_to_user_dictionary(&error.word) {
            items.push(ADD_TO_DICTIONARY.to_string());
        }
        if ctx.can_add_to_ignore_list(&error.word) {
            items.push(ALWAYS_IGNORE.to_string());
        }
        items.push(QUIT.to_string());

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Choose an action")
            .items(&items)
            .default(0)
            .interact();

        let selection = match selection {
            Ok(selection) => selection,
            // A closed terminal ends the run the same way Quit does.
            Err(_) => return Verdict::Abort,
        };

        if selection < actions_base {
            return Verdict::Replace {
                replacement: shown[selection].clone(),
                all: false,
            };
        }

        match items[selection].as_str() {
            EDIT_REPLACEMENT | EDIT_REPLACE_ALL => {
                let all = items[selection] == EDIT_REPLACE_ALL;
                match Input::<String>::with_theme(&ColorfulTheme::default())
                    .with_prompt("Replacement")
                    .with_initial_text(error.word.as_str())
                    .interact_text()
                {
                    Ok(replacement) => Verdict::Replace { replacement, all },
                    Err(_) => Verdict::Abort,
                }
            }
            IGNORE_ONCE => Verdict::Ignore,
            IGNORE_ALL => Verdict::IgnoreAll,
            ADD_TO_DICTIONARY => {
                ctx.add_user_dictionary_word(&error.word);
                Verdict::Ignore
            }
            ALWAYS_IGNORE => {
                ctx.add_ignore_word(&error.word);
                Verdict::Ignore
            }
            _ => Verdict::Abort,
        }
    }
}
