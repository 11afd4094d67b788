//! App 상태 정의 (Model)
//!
//! 앱 상태 구조체와 모드/폼 정의

use crate::models::{Level, Question, QuestionStore};
use crate::picker::CategoryPicker;

/// 앱 상태
pub struct App {
    pub store: QuestionStore,
    pub selected_index: usize,
    pub mode: AppMode,
    pub form: QuestionForm,
    pub message: Option<String>,
}

/// 앱 모드
///
/// 모달이 열려 있는지, 무엇이 열려 있는지가 전부다
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    Adding,
    Editing(i64),       // 수정 중인 질문 id
    ConfirmDelete(i64), // 삭제 확인 대상 id
}

/// 폼에서 포커스된 입력 필드
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormFocus {
    Body,
    Level,
    Categories,
}

impl FormFocus {
    pub fn next(self) -> FormFocus {
        match self {
            FormFocus::Body => FormFocus::Level,
            FormFocus::Level => FormFocus::Categories,
            FormFocus::Categories => FormFocus::Body,
        }
    }

    pub fn prev(self) -> FormFocus {
        match self {
            FormFocus::Body => FormFocus::Categories,
            FormFocus::Level => FormFocus::Body,
            FormFocus::Categories => FormFocus::Level,
        }
    }
}

/// 등록/수정 폼 상태
///
/// 플로우가 열릴 때 새로 만들고 닫힐 때 버린다.
/// 이전 플로우의 상태가 새 플로우로 새어 들어가지 않는다
#[derive(Debug, Clone)]
pub struct QuestionForm {
    pub body: String,
    pub level: Level,
    pub picker: CategoryPicker,
    pub focus: FormFocus,
    pub chip_cursor: usize,
}

impl Default for QuestionForm {
    fn default() -> Self {
        Self {
            body: String::new(),
            level: Level::default(),
            picker: CategoryPicker::new(),
            focus: FormFocus::Body,
            chip_cursor: 0,
        }
    }
}

impl QuestionForm {
    /// 기존 질문에서 폼을 채운다 (수정 플로우)
    pub fn from_question(question: &Question) -> Self {
        Self {
            body: question.question.clone(),
            level: question.level,
            picker: CategoryPicker::seeded(&question.categories),
            focus: FormFocus::Body,
            chip_cursor: 0,
        }
    }

    /// 등록 폼의 제출 가능 조건: 본문 비어있지 않음 + 카테고리 1개 이상
    pub fn can_submit_new(&self) -> bool {
        !self.body.trim().is_empty() && !self.picker.selected().is_empty()
    }

    /// 수정 폼의 제출 가능 조건: 본문만 필수
    pub fn can_submit_edit(&self) -> bool {
        !self.body.trim().is_empty()
    }
}

impl App {
    /// 새 앱 인스턴스
    pub fn new(store: QuestionStore) -> Self {
        Self {
            store,
            selected_index: 0,
            mode: AppMode::Normal,
            form: QuestionForm::default(),
            message: None,
        }
    }

    /// 목록 변경 후 선택 인덱스를 유효 범위로 되돌린다
    pub fn clamp_selection(&mut self) {
        if self.store.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.store.len() {
            self.selected_index = self.store.len() - 1;
        }
    }

    /// 현재 선택된 질문
    pub fn selected_question(&self) -> Option<&Question> {
        self.store.questions().get(self.selected_index)
    }
}
