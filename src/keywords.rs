//! Keyword presence checks against the submitted URL

/// One advisory line per keyword, saying whether its case-folded form
/// appears anywhere in the URL.
#[must_use]
pub fn url_keyword_findings(keywords: &[String], url: &str) -> Vec<String> {
    let url_folded = url.to_lowercase();
    keywords
        .iter()
        .map(|keyword| {
            if url_folded.contains(&keyword.to_lowercase()) {
                format!("The keyword '{keyword}' was found in your URL. That's good!")
            } else {
                format!(
                    "The keyword '{keyword}' was not found in your URL. \
                     Your URL may be improved by adding keywords if you lack enough of them."
                )
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_found_and_missing_keywords() {
        let keywords = vec!["SEO".to_string(), "bakery".to_string()];
        let findings = url_keyword_findings(&keywords, "https://example.com/seo-tools");
        assert_eq!(findings.len(), 2);
        assert!(findings[0].contains("was found"));
        assert!(findings[1].contains("was not found"));
    }

    #[test]
    fn matching_is_case_folded() {
        let keywords = vec!["Agency".to_string()];
        let findings = url_keyword_findings(&keywords, "https://example.com/AGENCY");
        assert!(findings[0].contains("was found"));
    }

    #[test]
    fn no_keywords_no_lines() {
        assert!(url_keyword_findings(&[], "https://example.com").is_empty());
    }
}
