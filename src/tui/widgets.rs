//! TUI widget rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::domain::StepBadge;
use crate::schemas::StepId;
use crate::tui::state::WatchState;

/// Render the header section (4 lines): title, candidate line, progress bar
pub fn render_header(f: &mut Frame, area: Rect, state: &WatchState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let border_width = area.width as usize;
    let title = Line::from(vec![
        Span::styled("┌─ Assessa ", Style::default().fg(Color::Cyan)),
        Span::styled(
            "─".repeat(border_width.saturating_sub(12)),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("┐", Style::default().fg(Color::Cyan)),
    ]);
    f.render_widget(
        Paragraph::new(Text::from(title)).alignment(Alignment::Left),
        chunks[0],
    );

    let candidate_text = format!(
        "{} | {}",
        state.view.display_name(),
        state.view.title
    );
    let candidate_line = Line::from(vec![
        Span::styled("│ ", Style::default().fg(Color::Cyan)),
        Span::styled(
            pad_to_width(&candidate_text, border_width.saturating_sub(4)),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │", Style::default().fg(Color::Cyan)),
    ]);
    f.render_widget(Paragraph::new(Text::from(candidate_line)), chunks[1]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(u16::from(state.view.progress.min(100)))
        .label(format!("{}%", state.view.progress));
    f.render_widget(gauge, chunks[2]);

    let separator = Line::from(vec![
        Span::styled("├", Style::default().fg(Color::Cyan)),
        Span::styled(
            "─".repeat(border_width.saturating_sub(2)),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("┤", Style::default().fg(Color::Cyan)),
    ]);
    f.render_widget(Paragraph::new(Text::from(separator)), chunks[3]);
}

/// Render the step sidebar (left side)
pub fn render_steps_pane(f: &mut Frame, area: Rect, state: &WatchState) {
    let items: Vec<ListItem> = state
        .view
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let text = format!(
                "{} {}. {:<24} {}",
                badge_icon(step.badge),
                index + 1,
                step.title,
                step.badge
            );
            let mut style = Style::default().fg(badge_color(step.badge));
            if step.step == state.view.current_step {
                style = style.add_modifier(Modifier::BOLD);
            }
            ListItem::new(Line::from(vec![Span::styled(text, style)]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title("Steps"),
    );

    f.render_widget(list, area);
}

/// Body text of the active step
pub fn step_content(state: &WatchState) -> String {
    let view = &state.view;
    match view.current_step {
        StepId::Identity => {
            if view.candidate_name.is_empty() {
                "Waiting for candidate details".to_string()
            } else {
                format!("Name: {}", view.candidate_name)
            }
        }
        StepId::Upload => view
            .uploads
            .iter()
            .map(|upload| match (&upload.file_name, &upload.file_size) {
                (Some(name), Some(size)) => {
                    format!("Question {}: {} ({})", upload.question, name, size)
                }
                _ => format!("Question {}: no video yet", upload.question),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        StepId::Evaluation => match state.stage {
            Some(ref stage) => format!(
                "Stage {}/{}: {}",
                stage.index + 1,
                state.stage_count,
                stage.label
            ),
            None => "Waiting for evaluation".to_string(),
        },
        StepId::Result => match view.result {
            Some(ref result) => {
                let mut lines = vec![format!("Score: {}/100  {}", result.score, result.verdict())];
                if let Some(breakdown) = result.breakdown {
                    for (label, value) in breakdown.categories() {
                        lines.push(format!("  {:<18} {}/100", label, value));
                    }
                }
                lines.join("\n")
            }
            None => "No result yet".to_string(),
        },
    }
}

/// Render the active step pane (top right)
pub fn render_content_pane(f: &mut Frame, area: Rect, state: &WatchState) {
    let paragraph = Paragraph::new(step_content(state))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(state.view.title.as_str()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

/// Render the event log pane (bottom right), newest lines last
pub fn render_log_pane(f: &mut Frame, area: Rect, state: &WatchState) {
    let max_lines = area.height.saturating_sub(2) as usize;

    let logs: Vec<ListItem> = if state.logs.is_empty() {
        vec![ListItem::new("(no events yet)")]
    } else {
        let start = state.logs.len().saturating_sub(max_lines);
        state.logs[start..]
            .iter()
            .map(|log| {
                let color = if log.starts_with('✗') {
                    Color::Red
                } else {
                    Color::White
                };
                ListItem::new(Span::styled(log.as_str(), Style::default().fg(color)))
            })
            .collect()
    };

    let list = List::new(logs).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title("Events"),
    );

    f.render_widget(list, area);
}

/// Render the footer section (3 lines)
pub fn render_footer(f: &mut Frame, area: Rect, state: &WatchState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let border_width = area.width as usize;

    let separator = Line::from(vec![
        Span::styled("├", Style::default().fg(Color::Cyan)),
        Span::styled(
            "─".repeat(border_width.saturating_sub(2)),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("┤", Style::default().fg(Color::Cyan)),
    ]);
    f.render_widget(Paragraph::new(Text::from(separator)), chunks[0]);

    let status = if state.finished { "done" } else { "running" };
    let progress_text = format!(
        "Events: {}/{} ({} rejected) | {} | Runtime: {}",
        state.events_done,
        state.events_total,
        state.rejected_count,
        status,
        format_runtime(state.start_time)
    );
    let progress_line = Line::from(vec![
        Span::styled("│ ", Style::default().fg(Color::Cyan)),
        Span::styled(
            pad_to_width(&progress_text, border_width.saturating_sub(4)),
            Style::default(),
        ),
        Span::styled(" │", Style::default().fg(Color::Cyan)),
    ]);
    f.render_widget(Paragraph::new(Text::from(progress_line)), chunks[1]);

    let keys_line = Line::from(vec![
        Span::styled("│ ", Style::default().fg(Color::Cyan)),
        Span::styled(
            pad_to_width("[q] quit  [ctrl-c] interrupt", border_width.saturating_sub(4)),
            Style::default(),
        ),
        Span::styled(" │", Style::default().fg(Color::Cyan)),
    ]);
    f.render_widget(Paragraph::new(Text::from(keys_line)), chunks[2]);
}

/// Draw the whole screen
pub fn render_screen(f: &mut Frame, state: &WatchState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0], state);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    render_steps_pane(f, main_chunks[0], state);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(main_chunks[1]);

    render_content_pane(f, right_chunks[0], state);
    render_log_pane(f, right_chunks[1], state);

    render_footer(f, chunks[2], state);
}

// ===== HELPER FUNCTIONS =====

fn badge_icon(badge: StepBadge) -> &'static str {
    match badge {
        StepBadge::Completed => "✓",
        StepBadge::Active => "→",
        StepBadge::Locked => "■",
        StepBadge::Available => "○",
    }
}

fn badge_color(badge: StepBadge) -> Color {
    match badge {
        StepBadge::Completed => Color::Green,
        StepBadge::Active => Color::Yellow,
        StepBadge::Locked => Color::DarkGray,
        StepBadge::Available => Color::White,
    }
}

/// Pad string to width (truncate with ellipsis if too long)
fn pad_to_width(text: &str, width: usize) -> String {
    let chars = text.chars().count();
    if width == 0 {
        String::new()
    } else if chars > width {
        let kept: String = text.chars().take(width - 1).collect();
        format!("{}…", kept)
    } else {
        format!("{:<width$}", text, width = width)
    }
}

/// Format runtime duration
fn format_runtime(start_time: chrono::DateTime<chrono::Utc>) -> String {
    let duration = chrono::Utc::now().signed_duration_since(start_time);

    let total_seconds = duration.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
