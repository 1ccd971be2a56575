/// Build the `metaTags` search aid from a page's description and keywords meta tags.
pub fn compose_meta_tags(description: &str, keywords: &str) -> String {
    format!("{} {}", description.trim(), keywords.trim())
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_description_and_keywords() {
        assert_eq!(
            compose_meta_tags("A guide to ownership", "rust,borrowing"),
            "A guide to ownership rust,borrowing"
        );
    }

    #[test]
    fn missing_parts_leave_no_stray_spaces() {
        assert_eq!(compose_meta_tags("", "rust"), "rust");
        assert_eq!(compose_meta_tags("only description ", ""), "only description");
        assert_eq!(compose_meta_tags("", ""), "");
    }
}
