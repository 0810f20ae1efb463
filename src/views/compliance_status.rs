//! Compliance Status: fixed breakdown of task states plus the overall
//! compliance figure. Holds no mutable state.

use serde::Serialize;

use super::html::{card, escape};
use super::{View, COMPLIANCE_STATUS};

/// One labelled share of the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSlice {
    pub label: String,
    pub value: u32,
    /// Chart color as a CSS hex string.
    pub color: String,
}

/// Data behind the view, as served by `/api/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub slices: Vec<StatusSlice>,
    pub overall_compliance: u8,
}

pub struct ComplianceStatus {
    report: StatusReport,
}

impl ComplianceStatus {
    pub fn new(report: StatusReport) -> Self {
        Self { report }
    }

    pub fn report(&self) -> &StatusReport {
        &self.report
    }

    /// Each slice's share of the total, in percent.
    pub fn shares(&self) -> Vec<(&StatusSlice, f64)> {
        let total: u32 = self.report.slices.iter().map(|s| s.value).sum();
        self.report
            .slices
            .iter()
            .map(|slice| {
                let share = if total == 0 {
                    0.0
                } else {
                    f64::from(slice.value) * 100.0 / f64::from(total)
                };
                (slice, share)
            })
            .collect()
    }
}

impl Default for ComplianceStatus {
    fn default() -> Self {
        let slice = |label: &str, value, color: &str| StatusSlice {
            label: label.to_string(),
            value,
            color: color.to_string(),
        };
        Self::new(StatusReport {
            slices: vec![
                slice("Completed", 400, "#10B981"),
                slice("In Progress", 300, "#3B82F6"),
                slice("Pending", 300, "#F59E0B"),
                slice("Overdue", 100, "#EF4444"),
            ],
            overall_compliance: 75,
        })
    }
}

impl View for ComplianceStatus {
    fn slot(&self) -> &'static str {
        COMPLIANCE_STATUS
    }

    fn title(&self) -> &'static str {
        "Compliance Status"
    }

    fn render(&self) -> String {
        let shares = self.shares();

        let bar: String = shares
            .iter()
            .map(|(slice, share)| {
                format!(
                    "<span class=\"chart-segment\" \
                     style=\"width:{share:.1}%;background:{}\" title=\"{}\"></span>",
                    escape(&slice.color),
                    escape(&slice.label),
                )
            })
            .collect();

        let legend: String = shares
            .iter()
            .map(|(slice, share)| {
                format!(
                    "<li><span class=\"legend-swatch\" style=\"background:{}\"></span>{} \
                     <span class=\"legend-value\">{} ({share:.1}%)</span></li>",
                    escape(&slice.color),
                    escape(&slice.label),
                    slice.value,
                )
            })
            .collect();

        let overall = self.report.overall_compliance;
        let body = format!(
            "<div class=\"chart\" role=\"img\" aria-label=\"Task status breakdown\">{bar}</div>\
             <ul class=\"chart-legend\">{legend}</ul>\
             <div class=\"summary\">\
             <span class=\"summary-label\">Overall Compliance</span>\
             <span class=\"summary-value\">{overall}%</span>\
             <div class=\"progress\">\
             <div class=\"progress-bar\" style=\"width:{overall}%\"></div></div>\
             </div>"
        );
        card(self.slot(), self.title(), &body)
    }
}
