//! The calculator form state machine.
//!
//! [`CalculatorForm`] owns every input, normalizes each keystroke through
//! [`crate::sanitize`], and recomputes the per-person split at the end of
//! each handler. Rendering layers read it through the display accessors or
//! a [`FormView`] snapshot and never mutate it directly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::calculations::common::format_amount;
use crate::calculations::{TipSplit, TipSplitInput, TipSplitResult};
use crate::models::{FieldGroup, PresetTip, TipChoice};
use crate::sanitize::{normalize_bill, normalize_custom_tip, normalize_people, percent_from_text};
use crate::view::FormView;

/// Outcome of the recompute step that ends every handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recompute {
    /// All three inputs were set and the outputs were refreshed.
    Updated,
    /// An input is unset; the outputs keep their previous values.
    Incomplete,
}

/// Visual focus state for each input group. Never affects computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusFlags {
    pub bill: bool,
    pub tip: bool,
    pub people: bool,
}

impl FocusFlags {
    pub fn get(
        &self,
        group: FieldGroup,
    ) -> bool {
        match group {
            FieldGroup::Bill => self.bill,
            FieldGroup::Tip => self.tip,
            FieldGroup::People => self.people,
        }
    }

    fn set(
        &mut self,
        group: FieldGroup,
        active: bool,
    ) {
        match group {
            FieldGroup::Bill => self.bill = active,
            FieldGroup::Tip => self.tip = active,
            FieldGroup::People => self.people = active,
        }
    }
}

/// All state behind the tip calculator form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorForm {
    bill: Option<Decimal>,
    tip_amount: Option<String>,
    tip_choice: TipChoice,
    people: Option<u32>,
    split: TipSplitResult,
    focus: FocusFlags,
}

impl Default for CalculatorForm {
    fn default() -> Self {
        Self {
            bill: None,
            tip_amount: None,
            tip_choice: TipChoice::None,
            people: None,
            split: TipSplitResult {
                tip_per_person: Decimal::ZERO,
                total_per_person: Decimal::ZERO,
            },
            focus: FocusFlags::default(),
        }
    }
}

impl CalculatorForm {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── input handlers ─────────────────────────────────────────────────────

    /// Handles a keystroke in the bill field.
    pub fn on_bill_input(
        &mut self,
        raw: &str,
    ) -> Recompute {
        self.bill = normalize_bill(raw);
        trace!(input = %raw, bill = ?self.bill, "bill input");
        self.recompute()
    }

    /// Handles a click on one of the preset tip buttons.
    pub fn on_preset_tip(
        &mut self,
        preset: PresetTip,
    ) -> Recompute {
        self.tip_choice = TipChoice::Preset(preset);
        self.tip_amount = Some(preset.percent().to_string());
        trace!(percent = preset.percent(), "preset tip selected");
        self.recompute()
    }

    /// Handles a keystroke in the custom tip field.
    ///
    /// Always clears the active preset, even when the text normalizes to
    /// nothing.
    pub fn on_custom_tip_input(
        &mut self,
        raw: &str,
    ) -> Recompute {
        let text = normalize_custom_tip(raw);
        trace!(input = %raw, tip = ?text, "custom tip input");
        self.tip_choice = text.clone().map_or(TipChoice::None, TipChoice::Custom);
        self.tip_amount = text;
        self.recompute()
    }

    /// Handles a keystroke in the number-of-people field.
    pub fn on_people_input(
        &mut self,
        raw: &str,
    ) -> Recompute {
        self.people = normalize_people(raw);
        trace!(input = %raw, people = ?self.people, "people input");
        self.recompute()
    }

    /// Clears the bill, tip and people inputs.
    ///
    /// The preset/custom marker, focus flags and the last computed outputs
    /// are left as they were.
    pub fn reset(&mut self) -> Recompute {
        self.bill = None;
        self.tip_amount = None;
        self.people = None;
        trace!("inputs reset");
        self.recompute()
    }

    // ─── focus ──────────────────────────────────────────────────────────────

    pub fn focus(
        &mut self,
        group: FieldGroup,
    ) {
        self.focus.set(group, true);
    }

    /// Leaves an input group. The tip group stays highlighted while it
    /// still holds custom text.
    pub fn blur(
        &mut self,
        group: FieldGroup,
    ) {
        if group == FieldGroup::Tip && !self.custom_tip_text().is_empty() {
            return;
        }
        self.focus.set(group, false);
    }

    // ─── derived values ─────────────────────────────────────────────────────

    /// Inputs for the split, or `None` while any of them is unset.
    pub fn split_input(&self) -> Option<TipSplitInput> {
        Some(TipSplitInput {
            bill: self.bill?,
            tip_percent: self.tip_percent()?,
            people: self.people?,
        })
    }

    fn recompute(&mut self) -> Recompute {
        let Some(input) = self.split_input() else {
            return Recompute::Incomplete;
        };

        match TipSplit::calculate(&input) {
            Ok(split) => {
                self.split = split;
                Recompute::Updated
            }
            Err(error) => {
                warn!(%error, ?input, "split skipped, keeping previous outputs");
                Recompute::Incomplete
            }
        }
    }

    // ─── typed accessors ────────────────────────────────────────────────────

    pub fn bill(&self) -> Option<Decimal> {
        self.bill
    }

    pub fn tip_percent(&self) -> Option<u32> {
        self.tip_amount.as_deref().and_then(percent_from_text)
    }

    pub fn tip_choice(&self) -> &TipChoice {
        &self.tip_choice
    }

    pub fn active_preset(&self) -> Option<PresetTip> {
        self.tip_choice.active_preset()
    }

    pub fn people(&self) -> Option<u32> {
        self.people
    }

    pub fn split(&self) -> TipSplitResult {
        self.split
    }

    pub fn focus_flags(&self) -> FocusFlags {
        self.focus
    }

    pub fn is_active(
        &self,
        group: FieldGroup,
    ) -> bool {
        self.focus.get(group)
    }

    // ─── display accessors ──────────────────────────────────────────────────

    /// Bill with two decimal places, or `""` when unset.
    pub fn bill_amount(&self) -> String {
        self.bill.map(format_amount).unwrap_or_default()
    }

    /// Tip percentage text, or `""` when unset. Custom entries keep the
    /// digits as typed.
    pub fn tip_amount(&self) -> String {
        self.tip_amount.clone().unwrap_or_default()
    }

    pub fn custom_tip_text(&self) -> String {
        self.tip_choice.custom_text().to_string()
    }

    /// What the custom tip field shows: its text while the tip group is
    /// active, nothing otherwise.
    pub fn custom_tip_display(&self) -> String {
        if self.focus.tip {
            self.custom_tip_text()
        } else {
            String::new()
        }
    }

    /// People count, or `""` when unset.
    pub fn number_of_people(&self) -> String {
        self.people.map(|p| p.to_string()).unwrap_or_default()
    }

    pub fn tip_per_person(&self) -> String {
        format_amount(self.split.tip_per_person)
    }

    pub fn total_per_person(&self) -> String {
        format_amount(self.split.total_per_person)
    }

    /// Snapshot of everything a rendering layer needs.
    pub fn view(&self) -> FormView {
        FormView::from_form(self)
    }
}
