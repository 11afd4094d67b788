//! UI 모듈
//!
//! MVI (Model-View-Intent) 구조:
//! - Model (state.rs): App 구조체와 상태 데이터
//! - View (view/): 상태를 화면으로 바꾸는 순수 함수
//! - Intent (actions.rs): 키 입력을 의미 단위의 Action으로 변환

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

// Re-export for convenience
pub use input::handle_key_event;
pub use state::App;
pub use view::render;
