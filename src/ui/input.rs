//! 키보드 이벤트 매핑 (Input -> Action)
//!
//! 현재 모드(그리고 폼 모드에서는 포커스된 필드)에 따라
//! 같은 키가 다른 Action이 된다

use std::io;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, AppMode, FormFocus};

/// 현재 모드/포커스와 키에 해당하는 Action을 얻는다
pub fn get_action(mode: &AppMode, focus: FormFocus, key: KeyCode) -> Option<Action> {
    match mode {
        AppMode::Normal => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Char('a') => Some(Action::StartAdd),
            KeyCode::Char('e') | KeyCode::Enter => Some(Action::StartEdit),
            // 삭제와 수정은 키부터 분리되어 있어 한 조작이 둘을 겸할 수 없다
            KeyCode::Char('d') => Some(Action::StartDelete),
            _ => None,
        },
        AppMode::Adding | AppMode::Editing(_) => match key {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Tab => Some(Action::NextField),
            KeyCode::BackTab => Some(Action::PrevField),
            _ => match focus {
                FormFocus::Body => match key {
                    KeyCode::Enter => Some(Action::Submit),
                    KeyCode::Backspace => Some(Action::DeleteChar),
                    KeyCode::Char(c) => Some(Action::Input(c)),
                    _ => None,
                },
                FormFocus::Level => match key {
                    KeyCode::Enter => Some(Action::Submit),
                    KeyCode::Left | KeyCode::Up | KeyCode::Char('k') => Some(Action::LevelPrev),
                    KeyCode::Right | KeyCode::Down | KeyCode::Char('j') => Some(Action::LevelNext),
                    _ => None,
                },
                FormFocus::Categories => match key {
                    KeyCode::Enter => Some(Action::Submit),
                    KeyCode::Left | KeyCode::Char('h') => Some(Action::ChipPrev),
                    KeyCode::Right | KeyCode::Char('l') => Some(Action::ChipNext),
                    KeyCode::Char(' ') => Some(Action::ToggleChip),
                    _ => None,
                },
            },
        },
        AppMode::ConfirmDelete(_) => match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::Submit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::Cancel),
            _ => None,
        },
    }
}

/// 키 이벤트 처리. true면 앱 종료
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(&app.mode, app.form.focus, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_key_never_maps_to_edit() {
        let action = get_action(&AppMode::Normal, FormFocus::Body, KeyCode::Char('d'));
        assert_eq!(action, Some(Action::StartDelete));
        assert_ne!(action, Some(Action::StartEdit));
    }

    #[test]
    fn test_space_toggles_only_in_category_focus() {
        let mode = AppMode::Adding;
        assert_eq!(
            get_action(&mode, FormFocus::Categories, KeyCode::Char(' ')),
            Some(Action::ToggleChip)
        );
        assert_eq!(
            get_action(&mode, FormFocus::Body, KeyCode::Char(' ')),
            Some(Action::Input(' '))
        );
    }

    #[test]
    fn test_confirm_mode_only_accepts_yes_no() {
        let mode = AppMode::ConfirmDelete(1);
        assert_eq!(
            get_action(&mode, FormFocus::Body, KeyCode::Char('y')),
            Some(Action::Submit)
        );
        assert_eq!(
            get_action(&mode, FormFocus::Body, KeyCode::Esc),
            Some(Action::Cancel)
        );
        assert_eq!(get_action(&mode, FormFocus::Body, KeyCode::Char('e')), None);
    }
}
