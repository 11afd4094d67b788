//! 카테고리 선택 상태
//!
//! 선택된 목록만 들고 있고, 선택 가능한 목록은 전체 카테고리에서
//! 빼서 읽을 때 계산한다. 두 목록을 따로 고치다가 어긋나는 일이
//! 구조적으로 불가능하다.

use crate::models::Category;

/// 등록/수정 폼이 하나씩 소유하는 선택 상태
#[derive(Debug, Clone, Default)]
pub struct CategoryPicker {
    selected: Vec<Category>,
}

impl CategoryPicker {
    /// 아무것도 선택되지 않은 상태 (등록 폼 기본값)
    pub fn new() -> Self {
        Self::default()
    }

    /// 기존 질문의 카테고리로 초기화 (수정 폼). 중복은 버린다
    pub fn seeded(categories: &[Category]) -> Self {
        let mut selected = Vec::new();
        for &cat in categories {
            if !selected.contains(&cat) {
                selected.push(cat);
            }
        }
        Self { selected }
    }

    /// 선택된 카테고리 (선택한 순서대로)
    pub fn selected(&self) -> &[Category] {
        &self.selected
    }

    /// 아직 선택되지 않은 카테고리 (전체 목록 순서대로)
    pub fn available(&self) -> Vec<Category> {
        Category::ALL
            .iter()
            .copied()
            .filter(|cat| !self.selected.contains(cat))
            .collect()
    }

    pub fn is_selected(&self, cat: Category) -> bool {
        self.selected.contains(&cat)
    }

    /// 선택 목록 끝에 추가. 이미 선택된 경우 아무 일도 하지 않음
    pub fn select(&mut self, cat: Category) {
        if !self.selected.contains(&cat) {
            self.selected.push(cat);
        }
    }

    /// 선택 해제. 해제된 카테고리는 선택 가능 목록의 제자리로 돌아간다
    pub fn deselect(&mut self, cat: Category) {
        self.selected.retain(|c| *c != cat);
    }

    pub fn toggle(&mut self, cat: Category) {
        if self.is_selected(cat) {
            self.deselect(cat);
        } else {
            self.select(cat);
        }
    }

    /// 칩 커서용 통합 뷰: 선택된 칩 다음에 선택 가능한 칩.
    /// 길이는 항상 전체 카테고리 수와 같다
    pub fn chips(&self) -> Vec<(Category, bool)> {
        self.selected
            .iter()
            .map(|&cat| (cat, true))
            .chain(self.available().into_iter().map(|cat| (cat, false)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_partition(picker: &CategoryPicker) {
        let available = picker.available();
        for cat in Category::ALL {
            let in_selected = picker.selected().contains(&cat);
            let in_available = available.contains(&cat);
            assert!(
                in_selected != in_available,
                "{:?}는 정확히 한 쪽에만 있어야 함",
                cat
            );
        }
        assert_eq!(picker.selected().len() + available.len(), Category::ALL.len());
    }

    #[test]
    fn test_empty_picker_offers_everything() {
        let picker = CategoryPicker::new();
        assert!(picker.selected().is_empty());
        assert_eq!(picker.available(), Category::ALL.to_vec());
        assert_partition(&picker);
    }

    #[test]
    fn test_seeded_keeps_order_and_derives_rest() {
        let picker = CategoryPicker::seeded(&[Category::Career, Category::Love]);
        assert_eq!(picker.selected(), &[Category::Career, Category::Love]);
        // 선택 가능 목록은 전체 목록 순서를 따른다
        assert_eq!(
            picker.available(),
            vec![Category::Social, Category::Dream, Category::Life]
        );
        assert_partition(&picker);
    }

    #[test]
    fn test_seeded_drops_duplicates() {
        let picker = CategoryPicker::seeded(&[Category::Love, Category::Love]);
        assert_eq!(picker.selected(), &[Category::Love]);
        assert_partition(&picker);
    }

    #[test]
    fn test_partition_holds_after_every_step() {
        let mut picker = CategoryPicker::new();
        let steps: [(bool, Category); 7] = [
            (true, Category::Dream),
            (true, Category::Love),
            (false, Category::Dream),
            (true, Category::Social),
            (true, Category::Love), // 중복 선택은 무시됨
            (false, Category::Social),
            (false, Category::Career), // 선택 안 된 것 해제도 무시됨
        ];

        for (select, cat) in steps {
            if select {
                picker.select(cat);
            } else {
                picker.deselect(cat);
            }
            assert_partition(&picker);
        }
        assert_eq!(picker.selected(), &[Category::Love]);
    }

    #[test]
    fn test_deselect_returns_label_to_universe_position() {
        let mut picker = CategoryPicker::seeded(&[Category::Life, Category::Social]);
        picker.deselect(Category::Social);
        assert_eq!(
            picker.available(),
            vec![Category::Love, Category::Social, Category::Career, Category::Dream]
        );
    }

    #[test]
    fn test_chips_view_is_always_full_universe() {
        let mut picker = CategoryPicker::new();
        picker.select(Category::Career);
        let chips = picker.chips();
        assert_eq!(chips.len(), Category::ALL.len());
        assert_eq!(chips[0], (Category::Career, true));
        assert!(chips[1..].iter().all(|(_, selected)| !selected));
    }
}
