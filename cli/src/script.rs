// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Line-oriented scripts of list events, replayed by the `batch` command.
//!
//! One event per line, words separated by whitespace, double quotes group words:
//!
//! ```text
//! # comment
//! add "Buy milk" 5.50 2024-01-10
//! edit 1 "Buy oat milk" 6 2024-01-11
//! up 2
//! drag 3 1
//! delete 1
//! confirm
//! list
//! ```

use std::str::FromStr;

use tally_core::{Cost, CostError, Direction, TaskId};

/// A single list event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Submit a create form. `None` cost leaves the cost field empty.
    Add(Fields),

    /// Submit an edit form for a task.
    Edit(TaskId, Fields),

    /// Ask to delete a task.
    Delete(TaskId),

    /// Confirm the pending deletion.
    Confirm,

    /// Cancel the pending deletion.
    Cancel,

    /// Move a task one step.
    Move(TaskId, Direction),

    /// Drag the row at the first 1-based position to the second one.
    Drag(usize, usize),

    /// Print the list as it is now.
    List,
}

/// Raw values of the form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields {
    pub name: String,
    pub cost: Option<Cost>,
    pub due: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("Unterminated quote")]
    UnterminatedQuote,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("`{command}` expects {expected} argument(s), found {found}")]
    Arity {
        command: String,
        expected: usize,
        found: usize,
    },

    #[error("Invalid task id: {0}")]
    InvalidId(String),

    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error("Invalid cost '{value}': {source}")]
    InvalidCost { value: String, source: CostError },
}

/// Parses one line. Blank lines and comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Step>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let words = split_words(line)?;
    let Some((command, args)) = words.split_first() else {
        return Ok(None);
    };

    let step = match command.as_str() {
        "add" => {
            expect_args(command, args, 3)?;
            Step::Add(parse_fields(&args[0], &args[1], &args[2])?)
        }
        "edit" => {
            expect_args(command, args, 4)?;
            let id = parse_id(&args[0])?;
            Step::Edit(id, parse_fields(&args[1], &args[2], &args[3])?)
        }
        "delete" => {
            expect_args(command, args, 1)?;
            Step::Delete(parse_id(&args[0])?)
        }
        "confirm" => {
            expect_args(command, args, 0)?;
            Step::Confirm
        }
        "cancel" => {
            expect_args(command, args, 0)?;
            Step::Cancel
        }
        "up" | "down" => {
            expect_args(command, args, 1)?;
            let direction = Direction::from_str(command)
                .map_err(|_| ScriptError::UnknownCommand(command.clone()))?;
            Step::Move(parse_id(&args[0])?, direction)
        }
        "drag" => {
            expect_args(command, args, 2)?;
            Step::Drag(parse_position(&args[0])?, parse_position(&args[1])?)
        }
        "list" => {
            expect_args(command, args, 0)?;
            Step::List
        }
        _ => return Err(ScriptError::UnknownCommand(command.clone())),
    };
    Ok(Some(step))
}

fn expect_args(command: &str, args: &[String], expected: usize) -> Result<(), ScriptError> {
    match args.len() == expected {
        true => Ok(()),
        false => Err(ScriptError::Arity {
            command: command.to_string(),
            expected,
            found: args.len(),
        }),
    }
}

fn parse_fields(name: &str, cost: &str, due: &str) -> Result<Fields, ScriptError> {
    let cost = match cost.trim() {
        "" => None,
        v => Some(v.parse().map_err(|source| ScriptError::InvalidCost {
            value: v.to_string(),
            source,
        })?),
    };
    Ok(Fields {
        name: name.to_string(),
        cost,
        due: due.to_string(),
    })
}

fn parse_id(s: &str) -> Result<TaskId, ScriptError> {
    s.parse()
        .map_err(|_| ScriptError::InvalidId(s.to_string()))
}

/// Parses a 1-based position into a 0-based index.
fn parse_position(s: &str) -> Result<usize, ScriptError> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(ScriptError::InvalidPosition(s.to_string())),
    }
}

/// Splits a line into words; double quotes group words and may be empty.
fn split_words(line: &str) -> Result<Vec<String>, ScriptError> {
    let mut words = Vec::new();
    let mut current: Option<String> = None;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                current.get_or_insert_with(String::new);
            }
            c if c.is_whitespace() && !quoted => {
                if let Some(word) = current.take() {
                    words.push(word);
                }
            }
            c => current.get_or_insert_with(String::new).push(c),
        }
    }

    if quoted {
        return Err(ScriptError::UnterminatedQuote);
    }
    words.extend(current);
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> TaskId {
        TaskId::new(n).unwrap()
    }

    #[test]
    fn test_split_words() {
        assert_eq!(
            split_words(r#"add "Buy milk" 5.50  2024-01-10"#).unwrap(),
            vec!["add", "Buy milk", "5.50", "2024-01-10"]
        );
        assert_eq!(split_words(r#"add "" 1 x"#).unwrap(), vec!["add", "", "1", "x"]);
        assert_eq!(split_words(r#"a"b c"d"#).unwrap(), vec!["ab cd"]);
        assert_eq!(
            split_words(r#"add "Buy milk 5"#),
            Err(ScriptError::UnterminatedQuote)
        );
    }

    #[test]
    fn test_parse_skips_blank_and_comments() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("# add A 1 2024-01-10"), Ok(None));
    }

    #[test]
    fn test_parse_add() {
        let step = parse_line(r#"add "Buy milk" 5.50 2024-01-10"#).unwrap();
        assert_eq!(
            step,
            Some(Step::Add(Fields {
                name: "Buy milk".to_string(),
                cost: Some(Cost::from_cents(550)),
                due: "2024-01-10".to_string(),
            }))
        );
    }

    #[test]
    fn test_parse_add_empty_cost() {
        let step = parse_line(r#"add A "" 2024-01-10"#).unwrap();
        assert!(matches!(step, Some(Step::Add(Fields { cost: None, .. }))));
    }

    #[test]
    fn test_parse_edit() {
        let step = parse_line("edit 2 B 7,25 2024-02-01").unwrap();
        assert_eq!(
            step,
            Some(Step::Edit(
                id(2),
                Fields {
                    name: "B".to_string(),
                    cost: Some(Cost::from_cents(725)),
                    due: "2024-02-01".to_string(),
                }
            ))
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_line("delete 3"), Ok(Some(Step::Delete(id(3)))));
        assert_eq!(parse_line("confirm"), Ok(Some(Step::Confirm)));
        assert_eq!(parse_line("cancel"), Ok(Some(Step::Cancel)));
        assert_eq!(parse_line("up 1"), Ok(Some(Step::Move(id(1), Direction::Up))));
        assert_eq!(
            parse_line("down 4"),
            Ok(Some(Step::Move(id(4), Direction::Down)))
        );
        assert_eq!(parse_line("drag 3 1"), Ok(Some(Step::Drag(2, 0))));
        assert_eq!(parse_line("  list  "), Ok(Some(Step::List)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_line("launch"),
            Err(ScriptError::UnknownCommand("launch".to_string()))
        );
        assert_eq!(
            parse_line("add A 1"),
            Err(ScriptError::Arity {
                command: "add".to_string(),
                expected: 3,
                found: 2,
            })
        );
        assert_eq!(
            parse_line("delete x"),
            Err(ScriptError::InvalidId("x".to_string()))
        );
        assert_eq!(
            parse_line("delete 0"),
            Err(ScriptError::InvalidId("0".to_string()))
        );
        assert_eq!(
            parse_line("drag 0 1"),
            Err(ScriptError::InvalidPosition("0".to_string()))
        );
        assert!(matches!(
            parse_line("add A -1 2024-01-10"),
            Err(ScriptError::InvalidCost { .. })
        ));
    }
}
