// ABOUTME: Output format conversion for the job description block.
// ABOUTME: Converts rich-text HTML to markdown-flavored plain text and collapses blank runs.

use regex::Regex;

/// Preprocess HTML before conversion: replace <br> tags with newlines.
fn preprocess_br_tags(html: &str) -> String {
    // Replace <br>, <br/>, <br /> variants with newline
    let re = Regex::new(r"(?i)<br\s*/?\s*>").unwrap();
    re.replace_all(html, "\n").to_string()
}

/// Collapse multiple consecutive newlines to a single newline.
fn collapse_newlines_to_one(text: &str) -> String {
    let re = Regex::new(r"\n{2,}").unwrap();
    re.replace_all(text, "\n").to_string()
}

/// Convert a rich-text description block to plain text.
///
/// Interactive and icon sub-elements are dropped during conversion, along
/// with script/style noise. Runs of two or more newlines collapse to one.
/// On conversion error the preprocessed HTML is passed through unchanged.
pub fn description_text(html: &str) -> String {
    let preprocessed = preprocess_br_tags(html);

    let converter = htmd::HtmlToMarkdown::builder()
        .skip_tags(vec!["script", "style", "noscript", "button", "icon"])
        .build();

    let text = converter
        .convert(&preprocessed)
        .unwrap_or_else(|_| preprocessed.clone());

    collapse_newlines_to_one(&text).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn converts_simple_markup() {
        let text = description_text("<p>We are hiring.</p><p>Apply now.</p>");
        assert_eq!(text, "We are hiring.\nApply now.");
    }

    #[test]
    fn drops_buttons_and_icons() {
        let html = "<p>Role details</p><button>Show more</button><icon>decorative</icon>";
        let text = description_text(html);
        assert!(text.contains("Role details"));
        assert!(!text.contains("Show more"));
        assert!(!text.contains("decorative"));
    }

    #[test]
    fn collapses_blank_runs() {
        let text = description_text("<p>a</p>\n\n\n<p>b</p>");
        assert!(!text.contains("\n\n"), "got: {:?}", text);
    }

    #[test]
    fn br_tags_are_rewritten_before_conversion() {
        let text = description_text("<p>line one<br>line two</p>");
        assert!(text.contains("line one"));
        assert!(text.contains("line two"));
        assert!(!text.contains("<br>"));
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(description_text(""), "");
    }
}
