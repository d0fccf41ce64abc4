//! Query string for `GET /expenses`.

/// filter and ordering taken from the list controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// exact category match; `None` lists every category
    pub category: Option<String>,
    /// ask the server for `sort=date_desc`
    pub newest_first: bool,
}

impl ListQuery {
    /// build from the raw control values; an empty category means "All"
    pub fn from_controls(category: &str, newest_first: bool) -> Self {
        let category = (!category.is_empty()).then(|| category.to_string());
        Self { category, newest_first }
    }

    /// `?category=...&sort=date_desc`, or an empty string when unfiltered
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(category) = &self.category {
            params.push(format!("category={}", urlencoding::encode(category)));
        }
        if self.newest_first {
            params.push("sort=date_desc".to_string());
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_params() {
        assert_eq!(ListQuery::from_controls("", false).to_query_string(), "");
    }

    #[test]
    fn test_category_is_encoded() {
        let q = ListQuery::from_controls("eating out & bars", false);
        assert_eq!(q.to_query_string(), "?category=eating%20out%20%26%20bars");
    }

    #[test]
    fn test_sort_only() {
        assert_eq!(
            ListQuery::from_controls("", true).to_query_string(),
            "?sort=date_desc"
        );
    }

    #[test]
    fn test_both_params() {
        assert_eq!(
            ListQuery::from_controls("food", true).to_query_string(),
            "?category=food&sort=date_desc"
        );
    }
}
