//! 뷰 레이어 모듈
//!
//! 메인 렌더링 진입점과 각 화면 조각

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Row, Table, TableState, Wrap},
};

use super::state::{App, AppMode, FormFocus};
use crate::models::Level;
use components::{render_chip_row, render_dialog_frame, render_input_widget};
use layouts::centered_rect;

/// UI 렌더링
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 제목
            Constraint::Min(10),   // 질문 목록
            Constraint::Length(6), // 상세
            Constraint::Length(3), // 도움말
        ])
        .split(frame.area());

    render_title(frame, app, chunks[0]);
    render_question_table(frame, app, chunks[1]);
    render_details(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);

    // 모달 렌더링
    match &app.mode {
        AppMode::Adding => render_form_dialog(frame, app, "새 질문 등록"),
        AppMode::Editing(_) => render_form_dialog(frame, app, "질문 수정"),
        AppMode::ConfirmDelete(_) => render_confirm_dialog(frame),
        AppMode::Normal => {}
    }
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(format!("질문 관리 ({}건)", app.store.len()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_question_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let header = Row::new(vec!["ID", "카테고리", "난이도", "질문", "작성자", "작성일"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .store
        .questions()
        .iter()
        .map(|q| {
            let categories = q
                .categories
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            Row::new(vec![
                q.id.to_string(),
                categories,
                q.level.as_str().to_string(),
                q.question.clone(),
                q.author.clone(),
                q.created_at.format("%Y-%m-%d").to_string(),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Length(22),
        Constraint::Length(8),
        Constraint::Min(20),
        Constraint::Length(8),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title("질문 목록").borders(Borders::ALL))
        .row_highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

    let mut state = TableState::default();
    if !app.store.is_empty() {
        state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_details(frame: &mut Frame, app: &App, area: Rect) {
    let content = if let Some(q) = app.selected_question() {
        let categories = q
            .categories
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "질문: {}\n난이도: {}  카테고리: {}\n작성자: {}  작성일: {}",
            q.question,
            q.level.as_str(),
            categories,
            q.author,
            q.created_at.format("%Y-%m-%d"),
        )
    } else {
        "등록된 질문이 없습니다. 'a'를 눌러 추가하세요".to_string()
    };

    let details = Paragraph::new(content)
        .block(Block::default().title("상세").borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    frame.render_widget(details, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match &app.mode {
        AppMode::Normal => "[a] 등록  [e/Enter] 수정  [d] 삭제  [j/k] 이동  [q] 종료",
        AppMode::Adding | AppMode::Editing(_) => match app.form.focus {
            FormFocus::Body => "[Tab] 다음 필드  [Enter] 제출  [Esc] 취소",
            FormFocus::Level => "[←/→] 난이도 변경  [Tab] 다음 필드  [Enter] 제출  [Esc] 취소",
            FormFocus::Categories => {
                "[←/→] 칩 이동  [Space] 선택/해제  [Tab] 다음 필드  [Enter] 제출  [Esc] 취소"
            }
        },
        AppMode::ConfirmDelete(_) => "[y] 삭제  [n] 취소",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

/// 등록/수정 공용 폼 다이얼로그
fn render_form_dialog(frame: &mut Frame, app: &App, title: &str) {
    let area = centered_rect(70, 70, frame.area());
    let inner = render_dialog_frame(frame, area, title);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 질문 내용
            Constraint::Length(3), // 난이도
            Constraint::Length(3), // 선택된 카테고리
            Constraint::Length(3), // 선택 가능한 카테고리
            Constraint::Min(1),    // 안내
        ])
        .split(inner);

    render_input_widget(
        frame,
        chunks[0],
        "질문 내용",
        &app.form.body,
        app.form.focus == FormFocus::Body,
    );

    render_level_selector(frame, app, chunks[1]);

    // 칩 커서: 선택된 칩 다음에 선택 가능한 칩이 이어진다
    let selected = app.form.picker.selected().to_vec();
    let available = app.form.picker.available();
    let cursor = (app.form.focus == FormFocus::Categories).then_some(app.form.chip_cursor);
    let (cursor_selected, cursor_available) = match cursor {
        Some(i) if i < selected.len() => (Some(i), None),
        Some(i) => (None, Some(i - selected.len())),
        None => (None, None),
    };

    render_chip_row(
        frame,
        chunks[2],
        "선택된 카테고리",
        &selected,
        true,
        cursor_selected,
    );
    render_chip_row(
        frame,
        chunks[3],
        "선택 가능",
        &available,
        false,
        cursor_available,
    );

    let hint = if matches!(app.mode, AppMode::Adding) && app.form.picker.selected().is_empty() {
        "카테고리를 1개 이상 선택해야 등록할 수 있습니다"
    } else {
        "Enter로 제출, Esc로 취소"
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::Gray)),
        chunks[4],
    );
}

fn render_level_selector(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.form.focus == FormFocus::Level;
    let mut spans: Vec<Span> = Vec::new();
    for level in Level::ALL {
        let mut style = if level == app.form.level {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if is_focused && level == app.form.level {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(level.as_str(), style));
        spans.push(Span::raw("  "));
    }

    let selector = Paragraph::new(Line::from(spans))
        .block(Block::default().title("난이도").borders(Borders::ALL));
    frame.render_widget(selector, area);
}

fn render_confirm_dialog(frame: &mut Frame) {
    let area = centered_rect(50, 20, frame.area());
    frame.render_widget(Clear, area);

    let dialog = Paragraph::new("정말 삭제하시겠습니까?\n\n[y] 삭제  [n] 취소")
        .style(Style::default().fg(Color::Red))
        .block(Block::default().title("삭제 확인").borders(Borders::ALL));

    frame.render_widget(dialog, area);
}
