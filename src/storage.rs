use std::fs;
use std::io;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Category, DEFAULT_AUTHOR, Level, Question};

/// TOML 시드 파일 구조
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedFile {
    pub questions: Vec<Question>,
}

/// 시드 파일에서 초기 질문 목록을 읽는다. 파일이 없으면 내장 목데이터.
///
/// 읽기 전용이다. 세션 중의 변경 사항은 어디에도 저장하지 않는다.
pub fn load_questions(path: &Path) -> io::Result<Vec<Question>> {
    if !path.exists() {
        return Ok(default_questions());
    }

    let content = fs::read_to_string(path)?;
    let seed: SeedFile =
        toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(seed.questions)
}

/// 내장 목데이터 (시드 파일이 없을 때)
pub fn default_questions() -> Vec<Question> {
    let created_at = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap_or_default();
    vec![
        Question {
            id: 1,
            categories: vec![Category::Love],
            level: Level::Easy,
            question: "사랑이 뭐라고 생각하나요?".to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            created_at,
        },
        Question {
            id: 2,
            categories: vec![Category::Social, Category::Career],
            level: Level::Medium,
            question: "사회생활 잘하는 꿀팁이 있다면?".to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            created_at,
        },
        Question {
            id: 3,
            categories: vec![Category::Career, Category::Dream],
            level: Level::Hard,
            question: "성공이란 무엇이라고 생각하나요?".to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            created_at,
        },
    ]
}
