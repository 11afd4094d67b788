mod models;
mod picker;
mod storage;
mod ui;

use std::fs;
use std::io;
use std::path::PathBuf;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::models::QuestionStore;
use crate::storage::load_questions;
use crate::ui::{App, render};

/// 데이터 디렉터리 경로 (~/.local/share/jilmun/)
fn get_data_dir() -> io::Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "사용자 데이터 디렉터리를 찾을 수 없음"))?
        .join("jilmun");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

fn main() -> io::Result<()> {
    // 시드 파일 경로 (~/.local/share/jilmun/questions.toml)
    // 있으면 초기 목록으로 쓰고, 없으면 내장 목데이터로 시작한다.
    // 세션 중의 변경은 메모리에만 머문다
    let seed_path = get_data_dir()?.join("questions.toml");
    let questions = load_questions(&seed_path)?;

    // 앱 상태 생성
    let mut app = App::new(QuestionStore::new(questions));

    // 터미널 설정
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 메인 루프
    let result = run_app(&mut terminal, &mut app);

    // 터미널 복원
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
            if key.kind == crossterm::event::KeyEventKind::Press {
                if ui::handle_key_event(app, key.code)? {
                    break;
                }
            }
        }
    }
    Ok(())
}
