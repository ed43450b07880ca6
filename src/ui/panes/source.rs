//! Memory pane rendering with instruction highlighting
//!
//! This module renders the memory blob being scanned. Every matched
//! instruction is colored by kind, with `mul` operands in the number color.
//! Everything else is dimmed as noise, and the instruction at the current step
//! is highlighted.
//!
//! # Scrolling
//!
//! Vertical scrolling keeps the current line at a fixed row, as when stepping
//! through source code. Corrupted memory tends to come in very long lines, so
//! the pane also scrolls horizontally to keep the current match in view.

use crate::scanner::digits::is_decimal_digit;
use crate::scanner::instruction::{Instruction, InstructionKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashMap;

/// Width of the line number gutter, including the trailing space
const GUTTER_WIDTH: usize = 5;

/// Scroll state for the memory pane
#[derive(Debug, Default)]
pub struct SourceScrollState {
    pub offset: usize,
    pub column_offset: usize,
    pub target_line_row: Option<usize>,
}

/// Instructions grouped by the line they start on
pub fn index_by_line(instructions: &[Instruction]) -> FxHashMap<usize, Vec<Instruction>> {
    let mut index: FxHashMap<usize, Vec<Instruction>> = FxHashMap::default();
    for instruction in instructions {
        index
            .entry(instruction.location.line)
            .or_default()
            .push(instruction.clone());
    }
    index
}

fn instruction_style(kind: &InstructionKind) -> Style {
    match kind {
        InstructionKind::Multiply(..) => Style::default().fg(DEFAULT_THEME.instruction),
        InstructionKind::Enable => Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD),
        InstructionKind::Disable => Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD),
    }
}

/// Style each visible character of a memory line and merge runs into spans
fn highlight_memory_line(
    line: &str,
    instructions: &[Instruction],
    current: Option<&Instruction>,
    column_offset: usize,
    width: usize,
) -> Vec<Span<'static>> {
    let chars: Vec<char> = line.chars().collect();
    let noise = Style::default().fg(DEFAULT_THEME.comment);
    let mut styles = vec![noise; chars.len()];

    for instruction in instructions {
        let mut style = instruction_style(&instruction.kind);
        let mut operand = Style::default().fg(DEFAULT_THEME.number);
        if current == Some(instruction) {
            let marked = Modifier::BOLD | Modifier::UNDERLINED;
            style = style.bg(DEFAULT_THEME.current_line_bg).add_modifier(marked);
            operand = operand.bg(DEFAULT_THEME.current_line_bg).add_modifier(marked);
        }
        let has_operands = matches!(instruction.kind, InstructionKind::Multiply(..));

        let start = instruction.location.column - 1;
        let end = (start + instruction.location.len).min(chars.len());
        for (slot, ch) in styles.iter_mut().zip(&chars).take(end).skip(start) {
            *slot = if has_operands && is_decimal_digit(*ch) {
                operand
            } else {
                style
            };
        }
    }

    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();
    let mut run_style = noise;

    for (ch, style) in chars
        .iter()
        .zip(styles.iter())
        .skip(column_offset)
        .take(width)
    {
        if *style != run_style && !run.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut run), run_style));
        }
        run_style = *style;
        run.push(*ch);
    }

    if !run.is_empty() {
        spans.push(Span::styled(run, run_style));
    }

    spans
}

/// Render the memory pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    line_index: &FxHashMap<usize, Vec<Instruction>>,
    current: Option<&Instruction>,
    is_focused: bool,
    scroll_state: &mut SourceScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Memory ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines: Vec<&str> = source_code.lines().collect();
    let total_lines = lines.len();
    let current_line = current.map(|i| i.location.line).unwrap_or(1);

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1
    let visible_width = (area.width.saturating_sub(2) as usize)
        .saturating_sub(GUTTER_WIDTH)
        .max(1);

    // Initialize target_line_row to center if not set
    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    // Keep the current line at the target row
    if current_line > 0 && current_line <= total_lines {
        scroll_state.offset = (current_line - 1).saturating_sub(target_row);

        if total_lines > visible_height {
            scroll_state.offset = scroll_state.offset.min(total_lines - visible_height);
        } else {
            scroll_state.offset = 0;
        }
    }

    // Keep the current match inside the visible columns
    scroll_state.column_offset = match current {
        Some(instruction) => {
            let start = instruction.location.column - 1;
            let end = start + instruction.location.len;
            if start < scroll_state.column_offset || end > scroll_state.column_offset + visible_width
            {
                start.saturating_sub(visible_width / 3)
            } else {
                scroll_state.column_offset
            }
        }
        None => 0,
    };

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_current = current.is_some() && line_num == current_line;

            let num_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let on_line = line_index
                .get(&line_num)
                .map(|v| v.as_slice())
                .unwrap_or(&[]);

            let mut spans = vec![Span::styled(format!("{:4} ", line_num), num_style)];
            spans.extend(highlight_memory_line(
                line,
                on_line,
                current,
                scroll_state.column_offset,
                visible_width,
            ));

            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
