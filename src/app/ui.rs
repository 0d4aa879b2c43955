use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState,
        Wrap,
    },
};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use rust_decimal_macros::dec;

use crate::report::{
    CurrencyFormat, ReportView, SignClass, TABLE_HEADERS,
    charts::{INVESTMENT_SERIES, PNL_SERIES},
    format::format_fixed,
};

const INVESTMENT_COLOR: Color = Color::Rgb(30, 136, 229);
const AXIS_STEPS: u32 = 4;

pub fn render(
    frame: &mut Frame,
    report: Option<&ReportView>,
    table_state: &mut TableState,
    alert: Option<&str>,
    format: &CurrencyFormat,
) {
    if let Some(message) = alert {
        render_alert(frame, message);
        return;
    }

    let Some(report) = report else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(14),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], report);
    render_summary(frame, chunks[1], report);
    render_table(frame, chunks[2], report, table_state);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[3]);

    render_allocation(frame, charts[0], report);
    render_performance(frame, charts[1], report, format);
}

fn sign_color(class: SignClass) -> Color {
    match class {
        SignClass::Positive => Color::Green,
        SignClass::Negative => Color::Red,
    }
}

fn render_header(frame: &mut Frame, area: Rect, report: &ReportView) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Portfolio Holdings Report",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   As of "),
        Span::styled(
            report.summary().report_date().clone(),
            Style::default().fg(Color::Yellow),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn render_summary(frame: &mut Frame, area: Rect, report: &ReportView) {
    let summary = report.summary();
    let pnl_style = Style::default()
        .fg(sign_color(*summary.pnl_class()))
        .add_modifier(Modifier::BOLD);
    let label = Style::default().fg(Color::Gray);

    let lines = vec![
        Line::from(vec![
            Span::styled("Total Investment: ", label),
            Span::raw(summary.total_investment().clone()),
            Span::styled("   Current Value: ", label),
            Span::raw(summary.current_value().clone()),
            Span::styled("   Holdings: ", label),
            Span::raw(summary.holdings_count().clone()),
        ]),
        Line::from(vec![
            Span::styled("Overall P&L: ", label),
            Span::styled(summary.overall_pnl().clone(), pnl_style),
            Span::styled("   P&L %: ", label),
            Span::styled(summary.overall_pnl_percent().clone(), pnl_style),
        ]),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().title("Summary").borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

fn render_table(frame: &mut Frame, area: Rect, report: &ReportView, table_state: &mut TableState) {
    let header_cells = TABLE_HEADERS
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).style(Style::default()).height(1);

    let rows = report.rows().iter().map(|row| {
        let pnl_style = Style::default().fg(sign_color(*row.pnl_class()));
        let pnl_percent_style = Style::default().fg(sign_color(*row.pnl_percent_class()));

        let cells = row.cells().iter().enumerate().map(|(i, value)| {
            let cell = Cell::from(value.clone());
            match i {
                7 => cell.style(pnl_style),
                8 => cell.style(pnl_percent_style),
                _ => cell,
            }
        });

        Row::new(cells).height(1)
    });

    let widths = [
        Constraint::Length(14),
        Constraint::Min(20),
        Constraint::Length(6),
        Constraint::Length(11),
        Constraint::Length(11),
        Constraint::Length(13),
        Constraint::Length(14),
        Constraint::Length(12),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title("Holdings").borders(Borders::ALL))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(table, area, table_state);
}

fn render_allocation(frame: &mut Frame, area: Rect, report: &ReportView) {
    let bars: Vec<Bar> = report
        .allocation()
        .slices()
        .iter()
        .map(|slice| {
            let (r, g, b) = slice.bucket().rgb();
            let color = Color::Rgb(r, g, b);
            Bar::default()
                .value(bar_value(*slice.value() * dec!(100)))
                .label(Line::from(slice.label().clone()))
                .text_value(slice.tooltip().clone())
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default().title("Allocation").borders(Borders::ALL))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

fn render_performance(
    frame: &mut Frame,
    area: Rect,
    report: &ReportView,
    format: &CurrencyFormat,
) {
    let performance = report.performance();

    let legend = Line::from(vec![
        Span::styled("■ ", Style::default().fg(INVESTMENT_COLOR)),
        Span::raw(INVESTMENT_SERIES),
        Span::raw("  "),
        Span::styled("■ ", Style::default().fg(Color::Green)),
        Span::styled("■ ", Style::default().fg(Color::Red)),
        Span::raw(PNL_SERIES),
    ]);
    let block = Block::default()
        .title("Performance")
        .title_bottom(legend)
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(12), Constraint::Min(0)])
        .split(inner);

    // Bars occupy every row but the label row.
    let plot_height = columns[0].height.saturating_sub(1) as usize;
    let ticks = performance.axis_ticks(AXIS_STEPS, format);
    let mut axis = vec![Line::raw(""); plot_height];
    if plot_height > 0 {
        let last = ticks.len().saturating_sub(1).max(1);
        for (i, tick) in ticks.into_iter().enumerate() {
            let row = i * (plot_height - 1) / last;
            axis[row] = Line::raw(tick).alignment(Alignment::Right);
        }
    }
    frame.render_widget(Paragraph::new(axis), columns[0]);

    let mut chart = BarChart::default()
        .bar_width(3)
        .bar_gap(0)
        .group_gap(2)
        .max(bar_value(performance.max_magnitude()).max(1));

    let series = performance
        .labels()
        .iter()
        .zip(performance.investment().data().iter())
        .zip(performance.pnl().data().iter());

    for ((label, investment), pnl) in series {
        let pnl_color = sign_color(SignClass::of(pnl));
        let bars = [
            Bar::default()
                .value(bar_value(*investment))
                .text_value(String::new())
                .style(Style::default().fg(INVESTMENT_COLOR)),
            Bar::default()
                .value(bar_value(*pnl))
                .text_value(format_fixed(*pnl))
                .style(Style::default().fg(pnl_color))
                .value_style(Style::default().fg(Color::Black).bg(pnl_color)),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(label.clone()))
                .bars(&bars),
        );
    }

    frame.render_widget(chart, columns[1]);
}

fn render_alert(frame: &mut Frame, message: &str) {
    let area = centered_rect(60, 7, frame.area());

    let text = vec![
        Line::from(message.to_string()),
        Line::raw(""),
        Line::styled("Press any key to exit", Style::default().fg(Color::Gray)),
    ];

    let popup = Paragraph::new(text)
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Alert").borders(Borders::ALL));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Bars are drawn by magnitude; the sign is carried by colour and caption.
fn bar_value(value: Decimal) -> u64 {
    value.abs().round().to_u64().unwrap_or(0)
}
