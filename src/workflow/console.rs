// nct: Operator questions
//
// Line-based questions asked on the terminal during the edit workflow: the
// three-way "edit again / use as-is / cancel" choice and the yes/no JSON
// confirmation. Closing the input (Ctrl-D) always means cancel.

use std::io::{self, BufRead, Write};

/// Abstraction over the interactive terminal, enabling a scripted mock
/// in tests.
pub trait Console {
    /// Ask `question`; `None` once input is closed.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>>;
}

/// stdin/stdout console.
pub struct Terminal;

impl Console for Terminal {
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{} ", question)?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Recovery options after an unchanged or invalid edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReEdit {
    Edit,
    Use,
    Cancel,
}

const REEDIT_OPTIONS: [(&str, ReEdit); 3] = [
    ("edit", ReEdit::Edit),
    ("use", ReEdit::Use),
    ("cancel", ReEdit::Cancel),
];

/// Match an answer against the option names, case-insensitively. The
/// answer may abbreviate an option (`e`, `us`) or extend it (`cancel it`);
/// the first declared option that matches wins.
pub fn parse_reedit(answer: &str) -> Option<ReEdit> {
    let answer = answer.trim().to_lowercase();
    if answer.is_empty() {
        return None;
    }
    REEDIT_OPTIONS
        .iter()
        .find(|(name, _)| answer.starts_with(*name) || name.starts_with(answer.as_str()))
        .map(|(_, choice)| *choice)
}

/// Ask until the operator picks an option.
pub fn prompt_reedit(console: &mut dyn Console, reason: &str) -> io::Result<ReEdit> {
    let question = format!("{}. [E]dit again, [u]se as-is, or [c]ancel?", reason);
    loop {
        match console.ask(&question)? {
            None => return Ok(ReEdit::Cancel),
            Some(answer) => {
                if let Some(choice) = parse_reedit(&answer) {
                    return Ok(choice);
                }
            }
        }
    }
}

/// Yes/no question defaulting to yes. `None` when input is closed.
pub fn prompt_yes_no(console: &mut dyn Console, question: &str) -> io::Result<Option<bool>> {
    let question = format!("{} [Y/n]", question);
    loop {
        let Some(answer) = console.ask(&question)? else {
            return Ok(None);
        };
        match answer.trim().to_lowercase().as_str() {
            "" => return Ok(Some(true)),
            "n" | "no" => return Ok(Some(false)),
            a if a.starts_with('y') => return Ok(Some(true)),
            _ => continue,
        }
    }
}

// ─── Scripted Mock for Testing ───────────────────────────────────────────────

/// Replays answers in order and records every question. An exhausted
/// script behaves like closed input.
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::VecDeque;

    pub struct ScriptedConsole {
        answers: VecDeque<String>,
        pub asked: Vec<String>,
    }

    impl ScriptedConsole {
        pub fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                asked: Vec::new(),
            }
        }
    }

    impl Console for ScriptedConsole {
        fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
            self.asked.push(question.to_string());
            Ok(self.answers.pop_front())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::ScriptedConsole;
    use super::*;

    #[test]
    fn test_parse_reedit_prefixes() {
        assert_eq!(parse_reedit("e"), Some(ReEdit::Edit));
        assert_eq!(parse_reedit("Ed"), Some(ReEdit::Edit));
        assert_eq!(parse_reedit("u"), Some(ReEdit::Use));
        assert_eq!(parse_reedit("USE"), Some(ReEdit::Use));
        assert_eq!(parse_reedit("c"), Some(ReEdit::Cancel));
        assert_eq!(parse_reedit("cancel"), Some(ReEdit::Cancel));
    }

    #[test]
    fn test_parse_reedit_accepts_extended_answers() {
        assert_eq!(parse_reedit("editing"), Some(ReEdit::Edit));
        assert_eq!(parse_reedit("use it"), Some(ReEdit::Use));
    }

    #[test]
    fn test_parse_reedit_rejects_unknown_and_empty() {
        assert_eq!(parse_reedit(""), None);
        assert_eq!(parse_reedit("   "), None);
        assert_eq!(parse_reedit("x"), None);
        assert_eq!(parse_reedit("eu"), None);
    }

    #[test]
    fn test_prompt_reedit_reprompts_until_valid() {
        let mut console = ScriptedConsole::new(&["", "what", "U"]);
        let choice = prompt_reedit(&mut console, "Data is unchanged").unwrap();
        assert_eq!(choice, ReEdit::Use);
        assert_eq!(console.asked.len(), 3);
        assert_eq!(
            console.asked[0],
            "Data is unchanged. [E]dit again, [u]se as-is, or [c]ancel?"
        );
    }

    #[test]
    fn test_prompt_reedit_closed_input_cancels() {
        let mut console = ScriptedConsole::new(&[]);
        assert_eq!(prompt_reedit(&mut console, "Invalid JSON").unwrap(), ReEdit::Cancel);
    }

    #[test]
    fn test_yes_no_defaults_to_yes() {
        let mut console = ScriptedConsole::new(&[""]);
        assert_eq!(prompt_yes_no(&mut console, "Is this JSON?").unwrap(), Some(true));
        assert_eq!(console.asked[0], "Is this JSON? [Y/n]");
    }

    #[test]
    fn test_yes_no_answers() {
        let mut console = ScriptedConsole::new(&["maybe", "N"]);
        assert_eq!(prompt_yes_no(&mut console, "Is this JSON?").unwrap(), Some(false));
        assert_eq!(console.asked.len(), 2);

        let mut console = ScriptedConsole::new(&["yes"]);
        assert_eq!(prompt_yes_no(&mut console, "Is this JSON?").unwrap(), Some(true));
    }

    #[test]
    fn test_yes_no_closed_input() {
        let mut console = ScriptedConsole::new(&[]);
        assert_eq!(prompt_yes_no(&mut console, "Is this JSON?").unwrap(), None);
    }
}
