use std::fmt;

/// Метка категории по умолчанию: используется, когда поле категории
/// отсутствует или пустое. Непустая, но нераспознанная строка отображается
/// как есть и к "Other" не приводится.
pub const FALLBACK_CATEGORY: &str = "Other";

/// Фиксированный набор меток категорий в порядке отображения.
pub const CATEGORY_LABELS: [&str; 6] = [
    "Housing",
    "Food",
    "Services",
    "Lost & Found",
    "Events",
    "Other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Категория из фиксированного набора.
///
/// Набор — display-метаданные: на записи членство не проверяется, пост может
/// нести произвольную строку категории.
pub enum Category {
    /// Жильё.
    Housing,
    /// Еда.
    Food,
    /// Услуги.
    Services,
    /// Потерянное и найденное.
    LostFound,
    /// События.
    Events,
    /// Всё остальное.
    Other,
}

impl Category {
    /// Все категории в порядке отображения.
    pub const ALL: [Category; 6] = [
        Category::Housing,
        Category::Food,
        Category::Services,
        Category::LostFound,
        Category::Events,
        Category::Other,
    ];

    /// Метка категории.
    pub fn label(self) -> &'static str {
        match self {
            Category::Housing => "Housing",
            Category::Food => "Food",
            Category::Services => "Services",
            Category::LostFound => "Lost & Found",
            Category::Events => "Events",
            Category::Other => "Other",
        }
    }

    /// Категория по точному совпадению метки, `None` для нераспознанной строки.
    pub fn parse(label: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_matches_every_known_label() {
        for label in CATEGORY_LABELS {
            let category = Category::parse(label).expect("label must parse");
            assert_eq!(category.label(), label);
        }
    }

    #[test]
    fn parse_is_exact_match_only() {
        assert!(Category::parse("housing").is_none());
        assert!(Category::parse("Garage Sale").is_none());
        assert!(Category::parse("").is_none());
    }

    #[test]
    fn all_and_labels_stay_in_sync() {
        let labels: Vec<&str> = Category::ALL.into_iter().map(Category::label).collect();
        assert_eq!(labels, CATEGORY_LABELS);
    }
}
