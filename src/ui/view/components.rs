//! 공용 UI 컴포넌트
//!
//! 다이얼로그 틀, 입력 필드, 카테고리 칩 줄

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::models::Category;

/// [컴포넌트] 다이얼로그 기본 틀. 내부 영역을 돌려준다
pub fn render_dialog_frame(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [컴포넌트] 제목 있는 입력 필드
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    is_focused: bool,
) {
    let style = if is_focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let input = Paragraph::new(value)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(input, area);
}

/// [컴포넌트] 카테고리 칩 한 줄
///
/// cursor_at은 이 줄 안에서 강조할 칩의 위치 (포커스가 없으면 None)
pub fn render_chip_row(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    chips: &[Category],
    selected: bool,
    cursor_at: Option<usize>,
) {
    let mut spans: Vec<Span> = Vec::new();
    for (i, cat) in chips.iter().enumerate() {
        let mut style = if selected {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        if cursor_at == Some(i) {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        spans.push(Span::styled(format!("[{}]", cat.as_str()), style));
        spans.push(Span::raw(" "));
    }
    if spans.is_empty() {
        spans.push(Span::styled(
            "카테고리를 아래에서 선택하세요.",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let row = Paragraph::new(Line::from(spans))
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(row, area);
}
