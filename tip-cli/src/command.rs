//! Line commands understood by the interactive session.
//!
//! Each command stands in for one user action on the form: a keystroke in a
//! field (the argument is the field's full text after the keystroke), a
//! click on a preset, a focus change or the reset button.

use thiserror::Error;
use tip_core::{CalculatorForm, FieldGroup, PresetTip, Recompute};

/// Help text listing every command.
pub const HELP: &str = "\
commands:
  bill <text>       set the bill field text (empty clears it)
  tip <5|10|15|25|50>
                    choose a preset tip
  custom <text>     set the custom tip field text (empty clears it)
  people <text>     set the number-of-people field text (empty clears it)
  focus <group>     activate bill, tip or people
  blur <group>      leave bill, tip or people
  reset             clear bill, tip and people
  show              print the form
  help              print this list
  quit              leave";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("'{0}' is not a preset tip; choose 5, 10, 15, 25 or 50")]
    InvalidPreset(String),

    #[error("'{0}' is not a field group; choose bill, tip or people")]
    InvalidGroup(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Bill(String),
    Tip(PresetTip),
    Custom(String),
    People(String),
    Focus(FieldGroup),
    Blur(FieldGroup),
    Reset,
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (name, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(name, rest)| (name, rest.trim()));

        let command = match name.to_ascii_lowercase().as_str() {
            "bill" => Self::Bill(rest.to_string()),
            "custom" => Self::Custom(rest.to_string()),
            "people" => Self::People(rest.to_string()),
            "tip" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("tip"));
                }
                let preset = PresetTip::parse(rest)
                    .ok_or_else(|| CommandError::InvalidPreset(rest.to_string()))?;
                Self::Tip(preset)
            }
            "focus" => Self::Focus(parse_group("focus", rest)?),
            "blur" => Self::Blur(parse_group("blur", rest)?),
            "reset" => Self::Reset,
            "show" => Self::Show,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }

    /// Applies a form action. Returns `None` for commands that do not touch
    /// the form (`show`, `help`, `quit`) or only change focus.
    pub fn apply(
        &self,
        form: &mut CalculatorForm,
    ) -> Option<Recompute> {
        match self {
            Self::Bill(text) => Some(form.on_bill_input(text)),
            Self::Tip(preset) => Some(form.on_preset_tip(*preset)),
            Self::Custom(text) => Some(form.on_custom_tip_input(text)),
            Self::People(text) => Some(form.on_people_input(text)),
            Self::Reset => Some(form.reset()),
            Self::Focus(group) => {
                form.focus(*group);
                None
            }
            Self::Blur(group) => {
                form.blur(*group);
                None
            }
            Self::Show | Self::Help | Self::Quit => None,
        }
    }
}

fn parse_group(
    command: &'static str,
    arg: &str,
) -> Result<FieldGroup, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument(command));
    }
    FieldGroup::parse(arg).ok_or_else(|| CommandError::InvalidGroup(arg.to_string()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // parse tests
    // =========================================================================

    #[test]
    fn parse_blank_line_is_none() {
        assert_eq!(Command::parse("   "), Ok(None));
    }

    #[test]
    fn parse_field_commands_keep_raw_text() {
        assert_eq!(
            Command::parse("bill $12.50"),
            Ok(Some(Command::Bill("$12.50".to_string())))
        );
        assert_eq!(
            Command::parse("custom  18 % "),
            Ok(Some(Command::Custom("18 %".to_string())))
        );
        assert_eq!(
            Command::parse("people 4"),
            Ok(Some(Command::People("4".to_string())))
        );
    }

    #[test]
    fn parse_field_command_without_text_clears() {
        assert_eq!(
            Command::parse("bill"),
            Ok(Some(Command::Bill(String::new())))
        );
    }

    #[test]
    fn parse_is_case_insensitive_for_names() {
        assert_eq!(Command::parse("RESET"), Ok(Some(Command::Reset)));
        assert_eq!(
            Command::parse("Tip 15%"),
            Ok(Some(Command::Tip(PresetTip::Fifteen)))
        );
    }

    #[test]
    fn parse_tip_requires_a_preset() {
        assert_eq!(
            Command::parse("tip"),
            Err(CommandError::MissingArgument("tip"))
        );
        assert_eq!(
            Command::parse("tip 18"),
            Err(CommandError::InvalidPreset("18".to_string()))
        );
    }

    #[test]
    fn parse_focus_and_blur_groups() {
        assert_eq!(
            Command::parse("focus people"),
            Ok(Some(Command::Focus(FieldGroup::People)))
        );
        assert_eq!(
            Command::parse("blur tip"),
            Ok(Some(Command::Blur(FieldGroup::Tip)))
        );
        assert_eq!(
            Command::parse("focus"),
            Err(CommandError::MissingArgument("focus"))
        );
        assert_eq!(
            Command::parse("blur total"),
            Err(CommandError::InvalidGroup("total".to_string()))
        );
    }

    #[test]
    fn parse_unknown_command() {
        assert_eq!(
            Command::parse("split 3"),
            Err(CommandError::Unknown("split".to_string()))
        );
    }

    // =========================================================================
    // apply tests
    // =========================================================================

    #[test]
    fn apply_drives_the_form() {
        let mut form = CalculatorForm::new();

        Command::Bill("50.00".to_string()).apply(&mut form);
        Command::Tip(PresetTip::Ten).apply(&mut form);
        let outcome = Command::People("5".to_string()).apply(&mut form);

        assert_eq!(outcome, Some(Recompute::Updated));
        assert_eq!(form.total_per_person(), "11.00");
    }

    #[test]
    fn apply_focus_changes_only_focus() {
        let mut form = CalculatorForm::new();

        let outcome = Command::Focus(FieldGroup::Bill).apply(&mut form);

        assert_eq!(outcome, None);
        assert!(form.is_active(FieldGroup::Bill));
    }

    #[test]
    fn apply_show_leaves_form_untouched() {
        let mut form = CalculatorForm::new();
        let before = form.clone();

        Command::Show.apply(&mut form);

        assert_eq!(form, before);
    }
}
