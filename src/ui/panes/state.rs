//! Evaluator state rendering: toggle, both sums and the last effect

use crate::interpreter::session::ScanSession;
use crate::ui::panes::tape::describe_effect;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the state pane
pub fn render_state_pane(frame: &mut Frame, area: Rect, session: &ScanSession) {
    let block = Block::default()
        .title(" State ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let snapshot = session.current();
    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default()
        .fg(DEFAULT_THEME.sum)
        .add_modifier(Modifier::BOLD);

    let toggle_bg = if snapshot.toggle.is_enabled() {
        DEFAULT_THEME.success
    } else {
        DEFAULT_THEME.error
    };

    let instruction_text = match snapshot.instruction_index {
        Some(index) => format!("{} of {}", index + 1, session.instructions().len()),
        None => format!("none of {}", session.instructions().len()),
    };

    let last_text = match snapshot
        .instruction_index
        .and_then(|index| session.instructions().get(index))
    {
        Some(instruction) => instruction.to_string(),
        None => "-".to_string(),
    };

    let (effect_text, effect_style) = describe_effect(&snapshot.effect);

    let lines = vec![
        Line::from(vec![
            Span::styled(" Toggle       ", label),
            Span::styled(
                format!(" {} ", snapshot.toggle),
                Style::default()
                    .bg(toggle_bg)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" All sum      ", label),
            Span::styled(snapshot.total_sum.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled(" Enabled sum  ", label),
            Span::styled(snapshot.enabled_sum.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled(" Instruction  ", label),
            Span::styled(instruction_text, Style::default().fg(DEFAULT_THEME.fg)),
        ]),
        Line::from(vec![
            Span::styled(" Last         ", label),
            Span::styled(last_text, Style::default().fg(DEFAULT_THEME.instruction)),
        ]),
        Line::from(vec![
            Span::styled(" Effect       ", label),
            Span::styled(effect_text, effect_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
