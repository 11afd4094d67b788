//! Action 열거형 (Intent)
//!
//! 키 입력을 의미가 드러나는 Action으로 바꿔서 처리한다

/// 사용자 조작 열거형
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,

    // 각 플로우 진입
    StartAdd,
    StartEdit,
    StartDelete,

    // 폼 내부 조작
    NextField,
    PrevField,
    LevelNext,
    LevelPrev,
    ChipNext,
    ChipPrev,
    ToggleChip,

    // 공통
    Cancel,         // Esc / n
    Submit,         // Enter / y
    Input(char),    // 본문 입력
    DeleteChar,     // Backspace
}
