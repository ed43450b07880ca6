//! Instruction tape rendering
//!
//! Lists every matched instruction in scan order. Instructions already
//! executed show what the conditional evaluator did with them; the rest are
//! dimmed.

use crate::interpreter::engine::Effect;
use crate::interpreter::session::ScanSession;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Short description of an effect, with its style
pub fn describe_effect(effect: &Effect) -> (String, Style) {
    match effect {
        Effect::Start => ("start".to_string(), Style::default().fg(DEFAULT_THEME.comment)),
        Effect::Accumulated(product) => (
            format!("+{}", product),
            Style::default().fg(DEFAULT_THEME.success),
        ),
        Effect::Skipped(product) => (
            format!("skip {}", product),
            Style::default()
                .fg(DEFAULT_THEME.comment)
                .add_modifier(Modifier::CROSSED_OUT),
        ),
        Effect::Toggled(state) => {
            let color = if state.is_enabled() {
                DEFAULT_THEME.success
            } else {
                DEFAULT_THEME.error
            };
            (format!("→ {}", state), Style::default().fg(color))
        }
    }
}

/// Render the instruction tape
pub fn render_tape_pane(
    frame: &mut Frame,
    area: Rect,
    session: &ScanSession,
    is_focused: bool,
    scroll: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let instructions = session.instructions();
    let block = Block::default()
        .title(format!(" Instructions ({}) ", instructions.len()))
        .borders(Borders::ALL)
        .border_style(border_style);

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let current_index = session.current().instruction_index;

    // Follow the current instruction unless it is already in view
    if let Some(index) = current_index {
        if index < *scroll || index >= *scroll + visible_height {
            *scroll = index.saturating_sub(visible_height / 2);
        }
    }
    *scroll = (*scroll).min(instructions.len().saturating_sub(visible_height));

    let items: Vec<ListItem> = instructions
        .iter()
        .enumerate()
        .skip(*scroll)
        .take(visible_height)
        .map(|(index, instruction)| {
            let executed = current_index.is_some_and(|current| index <= current);
            let is_current = current_index == Some(index);

            let marker = if is_current { "▶ " } else { "  " };
            let position = format!(
                "{:>4}:{:<5} ",
                instruction.location.line, instruction.location.column
            );

            let base = if executed {
                Style::default().fg(DEFAULT_THEME.fg)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut spans = vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.secondary)),
                Span::styled(position, Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(format!("{:<24}", instruction.kind.to_string()), base),
            ];

            if executed {
                if let Some(snapshot) = session.snapshot_after(index) {
                    let (text, style) = describe_effect(&snapshot.effect);
                    spans.push(Span::styled(text, style));
                }
            }

            let mut line = Line::from(spans);
            if is_current {
                line = line.style(Style::default().bg(DEFAULT_THEME.current_line_bg));
            }
            ListItem::new(line)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
