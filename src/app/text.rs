use std::fmt::Write;

use crate::report::{HoldingRow, ReportView};

const RULE_WIDTH: usize = 80;

/// Fixed-width console table with totals.
pub fn render(report: &ReportView) -> String {
    let summary = report.summary();
    let mut out = String::new();

    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out, "HOLDINGS AS OF {}", summary.report_date());
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(
        out,
        "{:<15} {:<8} {:<12} {:<10} {:<15} {:<10} {:<10}",
        "SYMBOL", "QTY", "AVG PRICE", "LTP", "CURRENT VALUE", "P&L", "P&L %"
    );
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));

    for row in report.rows() {
        let _ = writeln!(out, "{}", render_row(row));
    }

    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    let _ = writeln!(out, "TOTAL INVESTMENT: {}", summary.total_investment());
    let _ = writeln!(out, "TOTAL CURRENT VALUE: {}", summary.current_value());
    let _ = writeln!(
        out,
        "OVERALL P&L: {} ({})",
        summary.overall_pnl(),
        summary.overall_pnl_percent()
    );

    out
}

fn render_row(row: &HoldingRow) -> String {
    let cells = row.cells();
    format!(
        "{:<15} {:<8} {:<12} {:<10} {:<15} {:<10} {:<10}",
        cells[0], cells[2], cells[3], cells[4], cells[6], cells[7], cells[8]
    )
}
