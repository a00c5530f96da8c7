//! Plain-text and CSV formatting of fronts.

use crate::design::{Design, MetricRegistry};
use crate::optimize::OptimizeResult;

/// Comma-joined design ids, e.g. `"3,7,9"`.
///
/// ```
/// use u_mdr::design::{Design, Sense};
/// use u_mdr::report::front_ids;
///
/// let front = vec![
///     Design::from_values(3, &[1.0], Sense::Minimize),
///     Design::from_values(7, &[2.0], Sense::Minimize),
/// ];
/// assert_eq!(front_ids(&front), "3,7");
/// ```
pub fn front_ids(designs: &[Design]) -> String {
    designs
        .iter()
        .map(|d| d.id().to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// CSV table of a front: `design_id` followed by every registered metric.
///
/// Metrics a design does not carry are left empty.
pub fn front_csv(registry: &MetricRegistry, designs: &[Design]) -> String {
    let mut out = String::from("design_id");
    for metric in registry.metrics() {
        out.push(',');
        out.push_str(metric.name());
    }
    out.push('\n');

    for design in designs {
        out.push_str(&design.id().to_string());
        for metric in registry.metrics() {
            out.push(',');
            if let Some(m) = design.metric(metric.id()) {
                out.push_str(&m.value().to_string());
            }
        }
        out.push('\n');
    }
    out
}

/// One line per stage: position, rule, and how many designs survived.
pub fn stage_summary(result: &OptimizeResult) -> String {
    let mut out = format!("input: {} designs\n", result.input.len());
    for stage in &result.stages {
        out.push_str(&format!(
            "stage {}: {} kept {} of {}\n",
            stage.index + 1,
            stage.rule,
            stage.front.len(),
            stage.input_len
        ));
    }
    if !result.rejected.is_empty() {
        out.push_str(&format!("rejected: {}\n", rejected_ids(result)));
    }
    out.push_str(&format!("front: {}\n", front_ids(&result.front)));
    out
}

fn rejected_ids(result: &OptimizeResult) -> String {
    result
        .rejected
        .iter()
        .map(|r| r.design.id().to_string())
        .collect::<Vec<_>>()
        .join(",")
}
