//! Read-only snapshot of the form for rendering layers.
//!
//! A [`FormView`] carries labels, placeholders, displayed values and
//! highlight flags. It holds no behaviour; renderers turn it into pixels or
//! text and send user actions back to [`CalculatorForm`].

use serde::Serialize;

use crate::form::CalculatorForm;
use crate::models::{FieldGroup, PresetTip};

/// Caption under both output labels.
pub const PER_PERSON_CAPTION: &str = "/ person";
pub const RESET_LABEL: &str = "RESET";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub bill: InputView,
    pub tip: TipSelectorView,
    pub people: InputView,
    pub tip_per_person: OutputView,
    pub total_per_person: OutputView,
    pub reset_label: &'static str,
}

/// A labelled text input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputView {
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TipSelectorView {
    pub label: &'static str,
    pub presets: Vec<PresetButtonView>,
    pub custom: InputView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresetButtonView {
    pub preset: PresetTip,
    pub label: &'static str,
    pub active: bool,
}

/// A read-only amount with its caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputView {
    pub label: &'static str,
    pub caption: &'static str,
    pub amount: String,
}

impl FormView {
    pub fn from_form(form: &CalculatorForm) -> Self {
        let active_preset = form.active_preset();
        let presets = PresetTip::all()
            .iter()
            .map(|preset| PresetButtonView {
                preset: *preset,
                label: preset.label(),
                active: active_preset == Some(*preset),
            })
            .collect();

        Self {
            bill: input_view(form, FieldGroup::Bill, form.bill_amount()),
            tip: TipSelectorView {
                label: FieldGroup::Tip.label(),
                presets,
                custom: InputView {
                    id: FieldGroup::Tip.id(),
                    label: "Custom",
                    placeholder: FieldGroup::Tip.placeholder(),
                    value: form.custom_tip_display(),
                    active: form.is_active(FieldGroup::Tip),
                },
            },
            people: input_view(form, FieldGroup::People, form.number_of_people()),
            tip_per_person: OutputView {
                label: "Tip Amount",
                caption: PER_PERSON_CAPTION,
                amount: form.tip_per_person(),
            },
            total_per_person: OutputView {
                label: "Total",
                caption: PER_PERSON_CAPTION,
                amount: form.total_per_person(),
            },
            reset_label: RESET_LABEL,
        }
    }
}

fn input_view(
    form: &CalculatorForm,
    group: FieldGroup,
    value: String,
) -> InputView {
    InputView {
        id: group.id(),
        label: group.label(),
        placeholder: group.placeholder(),
        value,
        active: form.is_active(group),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_form_view_shows_placeholders_and_zero_outputs() {
        let view = CalculatorForm::new().view();

        assert_eq!(view.bill.label, "Bill");
        assert_eq!(view.bill.value, "");
        assert_eq!(view.bill.placeholder, "0.00");
        assert_eq!(view.people.id, "numOfPeople");
        assert_eq!(view.people.placeholder, "0");
        assert_eq!(view.tip.custom.placeholder, "Custom...");
        assert_eq!(view.tip_per_person.amount, "0.00");
        assert_eq!(view.total_per_person.amount, "0.00");
        assert_eq!(view.reset_label, "RESET");
        assert!(view.tip.presets.iter().all(|b| !b.active));
    }

    #[test]
    fn view_lists_presets_in_order() {
        let view = CalculatorForm::new().view();

        let labels: Vec<_> = view.tip.presets.iter().map(|b| b.label).collect();

        assert_eq!(labels, vec!["5%", "10%", "15%", "25%", "50%"]);
    }

    #[test]
    fn view_marks_only_the_active_preset() {
        let mut form = CalculatorForm::new();
        form.on_preset_tip(PresetTip::TwentyFive);

        let view = form.view();

        let active: Vec<_> = view
            .tip
            .presets
            .iter()
            .filter(|b| b.active)
            .map(|b| b.preset)
            .collect();
        assert_eq!(active, vec![PresetTip::TwentyFive]);
    }

    #[test]
    fn view_reflects_values_and_focus() {
        let mut form = CalculatorForm::new();
        form.focus(FieldGroup::Bill);
        form.on_bill_input("5000");
        form.focus(FieldGroup::Tip);
        form.on_custom_tip_input("20");
        form.on_people_input("4");

        let view = form.view();

        assert!(view.bill.active);
        assert_eq!(view.bill.value, "50.00");
        assert!(view.tip.custom.active);
        assert_eq!(view.tip.custom.value, "20");
        assert!(!view.people.active);
        assert_eq!(view.people.value, "4");
        assert_eq!(view.tip_per_person.amount, "2.50");
        assert_eq!(view.total_per_person.amount, "15.00");
    }
}
