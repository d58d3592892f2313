//! Voting and results screens.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratzilla::ratatui::Frame;

use super::votes::VoteOption;
use super::{Campaign, Screen, CAST_VOTE, SELECT_OPTION_BASE};
use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::ClickableList;

const PINK: Color = Color::Rgb(255, 105, 180);

pub fn render(
    campaign: &Campaign,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(4), // Progress
            Constraint::Min(8),    // Voting / results
            Constraint::Length(3), // Help
        ])
        .split(area);

    render_title(campaign, f, chunks[0]);
    render_progress(campaign, f, chunks[1]);

    let mut cs = click_state.borrow_mut();
    match campaign.screen {
        Screen::Voting => render_voting(campaign, f, chunks[2], &mut cs),
        Screen::Results => render_results(campaign, f, chunks[2]),
    }
    render_help(campaign, f, chunks[3], &mut cs);
}

fn render_title(campaign: &Campaign, f: &mut Frame, area: Rect) {
    let title = match campaign.screen {
        Screen::Voting => "NEXT $TREAK MISSION",
        Screen::Results => "Live Vote Results",
    };
    let widget = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default().fg(PINK).add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

fn render_progress(campaign: &Campaign, f: &mut Frame, area: Rect) {
    let progress = campaign.progress.state();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PINK))
        .title(" Progress to next $TREAK Event ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(PINK).bg(Color::Black))
        .ratio((progress.percentage / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.1}%", progress.percentage));
    f.render_widget(gauge, rows[0]);

    let coins = Paragraph::new(Line::from(vec![
        Span::styled(
            format_count(progress.coins),
            Style::default().fg(PINK).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" $TREAK purchased", Style::default().fg(Color::Gray)),
    ]));
    f.render_widget(coins, rows[1]);
}

fn render_voting(campaign: &Campaign, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let narrow = is_narrow_layout(area.width);
    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(
        "Help decide the next legendary event!",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(""));

    for view in campaign.votes.options() {
        let selected = campaign.choice.selected == Some(view.option);
        let marker = if selected { "▶" } else { " " };
        let style = if selected {
            Style::default().fg(PINK).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let mut spans = vec![
            Span::styled(
                format!(" [{}] {marker} ", view.option.id()),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(view.display_name, style),
        ];
        if !narrow {
            spans.push(Span::styled(
                format!("  {} votes", format_count(view.votes)),
                Style::default().fg(Color::DarkGray),
            ));
        }
        cl.push_clickable(Line::from(spans), SELECT_OPTION_BASE + view.option.id() as u16);
    }

    cl.push(Line::from(""));
    let cast_style = if campaign.choice.selected.is_some() {
        Style::default().fg(Color::Black).bg(PINK).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    cl.push_clickable(
        Line::from(Span::styled(" [V] Cast your vote ", cast_style)),
        CAST_VOTE,
    );

    cl.register_targets(area, cs, 1, 1);
    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Vote (tap to select) "),
    );
    f.render_widget(widget, area);
}

fn render_results(campaign: &Campaign, f: &mut Frame, area: Rect) {
    let state = campaign.votes.state();
    let bar_width = (area.width.saturating_sub(20) as usize).clamp(10, 40);

    let mut lines = vec![
        Line::from(Span::styled(
            "THANK YOU for shaping the future of $TREAK!",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for &option in VoteOption::all() {
        let is_mine = campaign.choice.selected == Some(option);
        let color = if state.is_leader(option) {
            Color::Green
        } else if is_mine {
            PINK
        } else {
            Color::Gray
        };
        let share = state.share(option);

        let mut header = vec![Span::styled(
            option.name(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )];
        if is_mine {
            header.push(Span::styled(" (Your Vote)", Style::default().fg(PINK)));
        }
        header.push(Span::styled(
            format!("  {share:.1}%"),
            Style::default().fg(color),
        ));
        if let Some(recent) = campaign.recent[option.index()] {
            header.push(Span::styled(
                format!("  +{}", recent.amount),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(header));
        lines.push(Line::from(vec![
            Span::styled(share_bar(share, bar_width), Style::default().fg(color)),
            Span::styled(
                format!(" {} votes", format_count(state.votes(option))),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Total: {} votes", format_count(state.total())),
        Style::default().fg(Color::Gray),
    )));
    lines.push(countdown_line(campaign));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(" Results "),
    );
    f.render_widget(widget, area);
}

fn countdown_line(campaign: &Campaign) -> Line<'static> {
    if campaign.time_left.is_over() {
        return Line::from(Span::styled(
            "Voting has closed",
            Style::default().fg(Color::DarkGray),
        ));
    }
    let mut spans = vec![Span::styled(
        "Voting ends in ",
        Style::default().fg(Color::Gray),
    )];
    for (value, label) in campaign.time_left.units() {
        spans.push(Span::styled(
            format!("{value:02}"),
            Style::default().fg(PINK).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {label} "),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn render_help(campaign: &Campaign, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let text = match campaign.screen {
        Screen::Voting => "[1-3] Select  [V] Cast vote",
        Screen::Results => "Live results update every 15 seconds",
    };
    let help = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::DarkGray),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(help, area);

    if campaign.screen == Screen::Voting {
        for row in area.y..area.y + area.height {
            cs.add_row_target(area, row, CAST_VOTE);
        }
    }
}

/// Horizontal bar for a 0–100 share.
pub fn share_bar(share: f64, width: usize) -> String {
    let filled = ((share / 100.0).clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Thousands separators (1234567 → "1,234,567").
pub fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
