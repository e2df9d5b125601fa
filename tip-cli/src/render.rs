//! Plain-text rendering of a [`FormView`].

use std::fmt::Write;

use tip_core::view::{FormView, InputView, OutputView};

const RULE_WIDTH: usize = 36;
const OUTPUT_LABEL_WIDTH: usize = 24;

/// Renders the form as text, one group per block.
///
/// Active groups are marked with `>`, the chosen preset is bracketed, and
/// empty fields show their placeholder in parentheses.
pub fn render_form(view: &FormView) -> String {
    let mut out = String::new();

    push_input(&mut out, &view.bill, "$ ");

    push_label(&mut out, view.tip.label, view.tip.custom.active);
    let mut buttons: Vec<String> = view
        .tip
        .presets
        .iter()
        .map(|button| {
            if button.active {
                format!("[{}]", button.label)
            } else {
                button.label.to_string()
            }
        })
        .collect();
    buttons.push(field_text(&view.tip.custom));
    let _ = writeln!(out, "    {}", buttons.join("  "));

    push_input(&mut out, &view.people, "# ");

    let _ = writeln!(out, "  {}", "-".repeat(RULE_WIDTH));
    push_output(&mut out, &view.tip_per_person);
    push_output(&mut out, &view.total_per_person);
    let _ = writeln!(out, "  [ {} ]", view.reset_label);

    out
}

fn push_label(
    out: &mut String,
    label: &str,
    active: bool,
) {
    let marker = if active { ">" } else { " " };
    let _ = writeln!(out, "{marker} {label}");
}

fn push_input(
    out: &mut String,
    input: &InputView,
    icon: &str,
) {
    push_label(out, input.label, input.active);
    let _ = writeln!(out, "    {icon}{}", field_text(input));
}

fn push_output(
    out: &mut String,
    output: &OutputView,
) {
    let label = format!("{} {}", output.label, output.caption);
    let _ = writeln!(
        out,
        "  {label:<width$}${}",
        output.amount,
        width = OUTPUT_LABEL_WIDTH
    );
}

fn field_text(input: &InputView) -> String {
    if input.value.is_empty() {
        format!("({})", input.placeholder)
    } else {
        input.value.clone()
    }
}
