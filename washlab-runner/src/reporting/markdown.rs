//! Markdown report generator.

use washlab_core::PARAM_SPECS;

use super::narrative::{format_size, render_narrative};
use crate::runner::SimulationRun;

pub struct MarkdownReportGenerator;

impl MarkdownReportGenerator {
    pub fn generate(&self, run: &SimulationRun) -> String {
        let s = &run.summary;
        let mut report = format!(
            "# WashLab Run Report\n\n\
Fingerprint: `{}`\n\n\
## Summary\n\
- Pump trades: {}\n\
- Sell threshold: {:.2}\n\
- Unrealized loss per contract: {:.2}\n\
- Total buyer loss: {:.2}\n\
- Events: {}\n",
            run.fingerprint,
            s.pump_trade_count,
            s.sell_to_normal_threshold,
            s.unrealized_loss,
            s.total_buyer_loss,
            s.event_count,
        );

        report.push_str("\n## Parameters\n\n");
        report.push_str("| Parameter | Value | Range |\n");
        report.push_str("|-----------|-------|-------|\n");
        for spec in PARAM_SPECS.iter() {
            report.push_str(&format!(
                "| {} | {:.2} | {:.1} to {:.1} |\n",
                spec.id.name(),
                run.params.get(spec.id),
                spec.min,
                spec.max
            ));
        }

        report.push_str("\n## Narrative\n\n");
        for line in render_narrative(run).lines() {
            report.push_str(&format!("- {line}\n"));
        }

        report.push_str("\n## Event Tape\n\n");
        report.push_str("| Time | Actor | Action | Price | Size | Note |\n");
        report.push_str("|------|-------|--------|-------|------|------|\n");
        for e in &run.events {
            report.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                e.time,
                e.actor,
                e.action,
                e.price,
                e.size.map(format_size).unwrap_or_else(|| "-".into()),
                e.note
            ));
        }

        report.push_str(
            "\n## Notes\n\
- Events and traded prices are exported alongside this report.\n",
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::run_simulation;
    use washlab_core::SimulationParameters;

    #[test]
    fn report_has_all_sections() {
        let run = run_simulation(&SimulationParameters::default()).unwrap();
        let report = MarkdownReportGenerator.generate(&run);

        assert!(report.starts_with("# WashLab Run Report"));
        assert!(report.contains(&run.fingerprint));
        assert!(report.contains("## Parameters"));
        assert!(report.contains("| pump_step | 1.00 | 0.5 to 5.0 |"));
        assert!(report.contains("- Sell threshold: 48.00"));
        assert!(report.contains("## Event Tape"));
        assert!(report.contains("| 0 | algo | quote | bid=20.00,ask=80.00 | - |"));
    }
}
