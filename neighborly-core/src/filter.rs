use crate::post::Post;

/// Клиентская фильтрация списка постов.
///
/// Отображаемый список — чистая функция трёх входов: исходного списка,
/// строки поиска и выбранной категории. Оба фильтра соединяются конъюнктивно:
/// - категория сравнивается на точное совпадение;
/// - непустая (после trim) строка поиска ищется как подстрока в склейке
///   заголовка, описания и категории, без учёта регистра.
///
/// Результат — подпоследовательность входа: порядок сохраняется, ничего не
/// добавляется.
pub fn filter_posts(posts: &[Post], query: &str, category: Option<&str>) -> Vec<Post> {
    let query = query.trim().to_lowercase();

    posts
        .iter()
        .filter(|post| match category {
            Some(category) => post.category == category,
            None => true,
        })
        .filter(|post| {
            if query.is_empty() {
                return true;
            }
            let haystack = format!("{} {} {}", post.title, post.description, post.category)
                .to_lowercase();
            haystack.contains(&query)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, title: &str, description: &str, category: &str) -> Post {
        Post {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            created_at: None,
            author_email: "a@example.com".to_string(),
            owner_id: None,
        }
    }

    fn sample_posts() -> Vec<Post> {
        vec![
            post("1", "Free couch", "Slightly used", "Housing"),
            post("2", "Bike for sale", "Red city bike", "Other"),
            post("3", "Community dinner", "Bring a dish", "Events"),
        ]
    }

    fn ids(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|post| post.id.as_str()).collect()
    }

    #[test]
    fn inactive_filters_return_the_list_unchanged() {
        let posts = sample_posts();
        let filtered = filter_posts(&posts, "", None);
        assert_eq!(ids(&filtered), ids(&posts));
    }

    #[test]
    fn result_is_a_subsequence_of_the_input() {
        let posts = sample_posts();
        let filtered = filter_posts(&posts, "i", None);

        let mut cursor = posts.iter();
        for kept in &filtered {
            assert!(
                cursor.any(|original| original.id == kept.id),
                "filtered output must preserve input order"
            );
        }
    }

    #[test]
    fn filtering_is_idempotent_for_fixed_inputs() {
        let posts = sample_posts();
        let once = filter_posts(&posts, "bike", Some("Other"));
        let twice = filter_posts(&posts, "bike", Some("Other"));
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn category_filter_is_exact_match() {
        let posts = sample_posts();
        let filtered = filter_posts(&posts, "", Some("Events"));
        assert_eq!(ids(&filtered), ["3"]);

        let none = filter_posts(&posts, "", Some("events"));
        assert!(none.is_empty());
    }

    #[test]
    fn query_matches_title_description_and_category_case_insensitively() {
        let posts = sample_posts();
        assert_eq!(ids(&filter_posts(&posts, "COUCH", None)), ["1"]);
        assert_eq!(ids(&filter_posts(&posts, "red city", None)), ["2"]);
        assert_eq!(ids(&filter_posts(&posts, "housing", None)), ["1"]);
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let posts = sample_posts();
        let filtered = filter_posts(&posts, "  bike  ", None);
        assert_eq!(ids(&filtered), ["2"]);

        let blank = filter_posts(&posts, "   ", None);
        assert_eq!(blank.len(), posts.len());
    }

    #[test]
    fn filters_combine_conjunctively() {
        let posts = sample_posts();
        let filtered = filter_posts(&posts, "bike", Some("Events"));
        assert!(filtered.is_empty());
    }

    #[test]
    fn empty_list_with_query_yields_empty_result() {
        let filtered = filter_posts(&[], "bike", None);
        assert!(filtered.is_empty());
    }
}
