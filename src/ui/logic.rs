//! 비즈니스 로직 처리 (Update/Dispatch)
//!
//! 모든 상태 전이는 여기서, 키 입력 한 번에 하나씩 일어난다

use super::actions::Action;
use super::state::{App, AppMode, FormFocus, QuestionForm};

impl App {
    /// 핵심 로직 디스패치. true면 앱 종료
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),

            Action::StartAdd => self.start_add(),
            Action::StartEdit => self.start_edit(),
            Action::StartDelete => self.start_delete(),

            Action::Cancel => self.cancel(),

            Action::Submit => match &self.mode {
                AppMode::Adding => self.confirm_add(),
                AppMode::Editing(id) => {
                    let id = *id;
                    self.confirm_edit(id);
                }
                AppMode::ConfirmDelete(id) => {
                    let id = *id;
                    self.execute_delete(id);
                }
                AppMode::Normal => {}
            },

            Action::NextField => {
                if self.form_open() {
                    self.form.focus = self.form.focus.next();
                }
            }
            Action::PrevField => {
                if self.form_open() {
                    self.form.focus = self.form.focus.prev();
                }
            }

            Action::LevelNext => {
                if self.form_open() {
                    self.form.level = self.form.level.next();
                }
            }
            Action::LevelPrev => {
                if self.form_open() {
                    self.form.level = self.form.level.prev();
                }
            }

            Action::ChipNext => {
                let last = self.form.picker.chips().len().saturating_sub(1);
                if self.form_open() && self.form.chip_cursor < last {
                    self.form.chip_cursor += 1;
                }
            }
            Action::ChipPrev => {
                if self.form_open() && self.form.chip_cursor > 0 {
                    self.form.chip_cursor -= 1;
                }
            }
            Action::ToggleChip => self.toggle_chip(),

            Action::Input(c) => {
                if self.form_open() && self.form.focus == FormFocus::Body {
                    self.form.body.push(c);
                }
            }
            Action::DeleteChar => {
                if self.form_open() && self.form.focus == FormFocus::Body {
                    self.form.body.pop();
                }
            }
        }
        false
    }

    fn form_open(&self) -> bool {
        matches!(self.mode, AppMode::Adding | AppMode::Editing(_))
    }

    // ============ 목록 탐색 ============

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.store.len() {
            self.selected_index += 1;
        }
    }

    // ============ 등록 플로우 ============

    /// 등록 폼 열기 (항상 빈 폼에서 시작)
    pub fn start_add(&mut self) {
        self.mode = AppMode::Adding;
        self.form = QuestionForm::default();
        self.message = None;
    }

    /// 등록 확정. 조건이 안 되면 조용히 막는다
    pub fn confirm_add(&mut self) {
        if !self.form.can_submit_new() {
            return;
        }
        self.store.add(
            self.form.body.trim().to_string(),
            self.form.level,
            self.form.picker.selected().to_vec(),
        );
        // 새 질문이 맨 위로 들어가므로 커서도 맨 위로
        self.selected_index = 0;
        self.close_form(Some("질문이 등록되었습니다".to_string()));
    }

    // ============ 수정 플로우 ============

    /// 선택된 질문으로 수정 폼 열기. 질문이 없으면 아무 일도 하지 않는다
    pub fn start_edit(&mut self) {
        if let Some(question) = self.selected_question().cloned() {
            self.form = QuestionForm::from_question(&question);
            self.mode = AppMode::Editing(question.id);
            self.message = None;
        }
    }

    /// 수정 확정: 본문/난이도/카테고리만 바꾸고 나머지는 보존
    pub fn confirm_edit(&mut self, id: i64) {
        if !self.form.can_submit_edit() {
            return;
        }
        if let Some(mut updated) = self.store.get(id).cloned() {
            updated.question = self.form.body.trim().to_string();
            updated.level = self.form.level;
            updated.categories = self.form.picker.selected().to_vec();
            self.store.update(updated);
            self.close_form(Some("질문이 수정되었습니다".to_string()));
        } else {
            self.close_form(None);
        }
    }

    // ============ 삭제 플로우 ============

    /// 삭제 확인 모달 열기
    pub fn start_delete(&mut self) {
        if let Some(id) = self.selected_question().map(|q| q.id) {
            self.mode = AppMode::ConfirmDelete(id);
        }
    }

    /// 확인을 받은 뒤에만 실제로 지운다
    pub fn execute_delete(&mut self, id: i64) {
        if self.store.delete(id) {
            self.message = Some("질문이 삭제되었습니다".to_string());
        }
        self.clamp_selection();
        self.mode = AppMode::Normal;
    }

    // ============ 공통 ============

    /// 커서 위치의 칩을 선택/해제
    pub fn toggle_chip(&mut self) {
        if !self.form_open() {
            return;
        }
        let chips = self.form.picker.chips();
        if let Some(&(cat, _)) = chips.get(self.form.chip_cursor) {
            self.form.picker.toggle(cat);
        }
    }

    /// 현재 조작 취소. 폼 상태는 통째로 버린다
    pub fn cancel(&mut self) {
        self.mode = AppMode::Normal;
        self.form = QuestionForm::default();
        self.message = None;
    }

    fn close_form(&mut self, message: Option<String>) {
        self.mode = AppMode::Normal;
        self.form = QuestionForm::default();
        self.message = message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, DEFAULT_AUTHOR, Level, QuestionStore};
    use crate::storage::default_questions;
    use chrono::{Local, NaiveDate};

    fn app() -> App {
        App::new(QuestionStore::new(default_questions()))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.dispatch(Action::Input(c));
        }
    }

    #[test]
    fn test_create_flow_appends_new_question() {
        let mut app = app();
        app.dispatch(Action::StartAdd);
        type_text(&mut app, "테스트 질문");

        app.dispatch(Action::NextField); // 난이도
        app.dispatch(Action::LevelNext); // EASY -> MEDIUM

        app.dispatch(Action::NextField); // 카테고리
        app.dispatch(Action::ToggleChip); // LOVE 선택
        app.dispatch(Action::ChipNext);
        app.dispatch(Action::ChipNext);
        app.dispatch(Action::ChipNext); // DREAM 위치
        app.dispatch(Action::ToggleChip);

        app.dispatch(Action::Submit);

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.store.len(), 4);
        let q = &app.store.questions()[0];
        assert!(q.id > 3);
        assert_eq!(q.question, "테스트 질문");
        assert_eq!(q.level, Level::Medium);
        assert_eq!(q.categories, vec![Category::Love, Category::Dream]);
        assert_eq!(q.author, DEFAULT_AUTHOR);
        assert_eq!(q.created_at, Local::now().date_naive());
        // 새 질문이 맨 위에 있고 커서도 거기에 있다
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_create_submit_blocked_without_body() {
        let mut app = app();
        app.dispatch(Action::StartAdd);
        app.dispatch(Action::NextField);
        app.dispatch(Action::NextField);
        app.dispatch(Action::ToggleChip);
        app.dispatch(Action::Submit);

        assert_eq!(app.mode, AppMode::Adding);
        assert_eq!(app.store.len(), 3);
    }

    #[test]
    fn test_create_submit_blocked_without_category() {
        let mut app = app();
        app.dispatch(Action::StartAdd);
        type_text(&mut app, "카테고리 없는 질문");
        app.dispatch(Action::Submit);

        assert_eq!(app.mode, AppMode::Adding);
        assert_eq!(app.store.len(), 3);
    }

    #[test]
    fn test_cancelled_create_leaves_no_state_behind() {
        let mut app = app();
        app.dispatch(Action::StartAdd);
        type_text(&mut app, "버려질 입력");
        app.dispatch(Action::NextField);
        app.dispatch(Action::NextField);
        app.dispatch(Action::ToggleChip);
        app.dispatch(Action::Cancel);

        assert_eq!(app.store.len(), 3);

        // 다시 열면 빈 폼이어야 한다
        app.dispatch(Action::StartAdd);
        assert!(app.form.body.is_empty());
        assert!(app.form.picker.selected().is_empty());
        assert_eq!(app.form.level, Level::Easy);
    }

    #[test]
    fn test_edit_flow_replaces_fields_and_preserves_identity() {
        let mut app = app();
        app.selected_index = 1; // id=2
        app.dispatch(Action::StartEdit);

        assert_eq!(app.mode, AppMode::Editing(2));
        assert_eq!(app.form.body, "사회생활 잘하는 꿀팁이 있다면?");
        assert_eq!(
            app.form.picker.selected(),
            &[Category::Social, Category::Career]
        );

        app.dispatch(Action::NextField); // 난이도
        app.dispatch(Action::LevelNext); // MEDIUM -> HARD

        app.dispatch(Action::NextField); // 카테고리, 커서 0 = SOCIAL
        app.dispatch(Action::ToggleChip); // SOCIAL 해제

        app.dispatch(Action::Submit);

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.store.len(), 3);
        let q = app.store.get(2).unwrap();
        assert_eq!(q.level, Level::Hard);
        assert_eq!(q.categories, vec![Category::Career]);
        assert_eq!(q.author, DEFAULT_AUTHOR);
        assert_eq!(q.created_at, NaiveDate::from_ymd_opt(2026, 2, 10).unwrap());
    }

    #[test]
    fn test_edit_reopens_fresh_for_another_question() {
        let mut app = app();
        app.dispatch(Action::StartEdit); // id=1
        type_text(&mut app, " 수정하다 만 내용");
        app.dispatch(Action::Cancel);

        app.selected_index = 2; // id=3
        app.dispatch(Action::StartEdit);

        assert_eq!(app.mode, AppMode::Editing(3));
        assert_eq!(app.form.body, "성공이란 무엇이라고 생각하나요?");
        assert_eq!(
            app.form.picker.selected(),
            &[Category::Career, Category::Dream]
        );
    }

    #[test]
    fn test_edit_on_empty_store_is_noop() {
        let mut app = App::new(QuestionStore::new(Vec::new()));
        app.dispatch(Action::StartEdit);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut app = app();
        app.dispatch(Action::StartDelete); // id=1

        // 확인 전에는 지워지지 않는다
        assert_eq!(app.mode, AppMode::ConfirmDelete(1));
        assert_eq!(app.store.len(), 3);

        app.dispatch(Action::Submit);
        let ids: Vec<i64> = app.store.questions().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_declined_delete_changes_nothing() {
        let mut app = app();
        app.dispatch(Action::StartDelete);
        app.dispatch(Action::Cancel);

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.store.len(), 3);
    }

    #[test]
    fn test_delete_never_opens_edit_flow() {
        let mut app = app();
        app.dispatch(Action::StartDelete);
        assert!(!matches!(app.mode, AppMode::Editing(_)));
        app.dispatch(Action::Submit);
        assert!(!matches!(app.mode, AppMode::Editing(_)));
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_selection_clamped_after_deleting_last_row() {
        let mut app = app();
        app.selected_index = 2; // id=3
        app.dispatch(Action::StartDelete);
        app.dispatch(Action::Submit);

        assert_eq!(app.store.len(), 2);
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_chip_cursor_stays_in_bounds() {
        let mut app = app();
        app.dispatch(Action::StartAdd);
        app.dispatch(Action::NextField);
        app.dispatch(Action::NextField);

        for _ in 0..10 {
            app.dispatch(Action::ChipNext);
        }
        assert_eq!(app.form.chip_cursor, Category::ALL.len() - 1);

        for _ in 0..10 {
            app.dispatch(Action::ChipPrev);
        }
        assert_eq!(app.form.chip_cursor, 0);
    }
}
