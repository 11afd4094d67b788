use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// 기본 작성자 (관리자 페이지이므로 고정)
pub const DEFAULT_AUTHOR: &str = "관리자";

/// 카테고리 (고정 목록)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Love,
    Social,
    Career,
    Dream,
    Life,
}

impl Category {
    /// 전체 카테고리 (표시 순서 기준)
    pub const ALL: [Category; 5] = [
        Category::Love,
        Category::Social,
        Category::Career,
        Category::Dream,
        Category::Life,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Love => "LOVE",
            Category::Social => "SOCIAL",
            Category::Career => "CAREER",
            Category::Dream => "DREAM",
            Category::Life => "LIFE",
        }
    }
}

/// 난이도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Easy, Level::Medium, Level::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Easy => "EASY",
            Level::Medium => "MEDIUM",
            Level::Hard => "HARD",
        }
    }

    /// 다음 난이도 (끝에서는 그대로)
    pub fn next(&self) -> Level {
        match self {
            Level::Easy => Level::Medium,
            Level::Medium => Level::Hard,
            Level::Hard => Level::Hard,
        }
    }

    /// 이전 난이도 (처음에서는 그대로)
    pub fn prev(&self) -> Level {
        match self {
            Level::Easy => Level::Easy,
            Level::Medium => Level::Easy,
            Level::Hard => Level::Medium,
        }
    }
}

/// 질문 레코드
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub level: Level,
    pub question: String,
    pub author: String,
    pub created_at: NaiveDate,
}

impl Question {
    /// 새 질문 생성 (작성자/작성일은 여기서 고정)
    pub fn new(id: i64, question: String, level: Level, categories: Vec<Category>) -> Self {
        Self {
            id,
            categories,
            level,
            question,
            author: DEFAULT_AUTHOR.to_string(),
            created_at: Local::now().date_naive(),
        }
    }
}

/// 세션 동안 유지되는 질문 목록
///
/// id는 단조 증가 카운터로 발급한다. (타임스탬프 기반 id는
/// 연속 생성 시 중복될 수 있어 사용하지 않음)
#[derive(Debug, Clone)]
pub struct QuestionStore {
    questions: Vec<Question>,
    next_id: i64,
}

impl QuestionStore {
    pub fn new(seed: Vec<Question>) -> Self {
        let next_id = seed.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        Self {
            questions: seed,
            next_id,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// 새 질문을 목록 맨 앞에 추가하고 발급한 id를 돌려준다
    pub fn add(&mut self, question: String, level: Level, categories: Vec<Category>) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        self.questions
            .insert(0, Question::new(id, question, level, categories));
        id
    }

    /// 같은 id의 항목을 통째로 교체한다 (없으면 아무 일도 하지 않음)
    pub fn update(&mut self, updated: Question) {
        if let Some(slot) = self.questions.iter_mut().find(|q| q.id == updated.id) {
            *slot = updated;
        }
    }

    /// id로 삭제. 실제로 지워졌으면 true
    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.questions.len();
        self.questions.retain(|q| q.id != id);
        self.questions.len() != before
    }
}
