// ABOUTME: The ten field extraction rules for a job-posting page.
// ABOUTME: Each rule reads the shared parsed document and owns a disjoint subset of record fields.

//! Field extraction rules.
//!
//! Selectors are data: the class markers the upstream job page uses live
//! here as constants. Every rule is total — "element not found" and
//! "element found but empty" both yield the empty-string default, and a
//! multi-step traversal that dead-ends partway falls back the same way.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::extract::select::{element_attr, element_text, select_first, select_first_in};
use crate::formats::description_text;

const DESCRIPTION_BLOCK: &str = "body main#main-content div.description__text--rich";
const JOB_TITLE: &str = "h3.sub-nav-cta__header";
const LOCATION: &str = "span.sub-nav-cta__meta-text";
const COMPANY_URL: &str = "a.sub-nav-cta__optional-url";
const JOB_POSTED: &str = "span.posted-time-ago__text.topcard__flavor--metadata";
const CRITERIA_LIST: &str = "ul.description__job-criteria-list";
const APPLY_BUTTON: &str = "button.apply-button.apply-button--default.btn-md.btn-primary";
const RECRUITER_CARD: &str = "div.message-the-recruiter";
const RECRUITER_NAME: &str = "h3.base-main-card__title";
const RECRUITER_TITLE: &str = "h4.base-main-card__subtitle";
const RECRUITER_LINK: &str = "a.base-card__full-link";

/// Marker substring that flags the apply control as onsite-tracked.
const ONSITE_MARKER: &str = "data-tracking-control-name=\"public_jobs_apply-link-onsite\"";

const EMPLOYMENT_TYPE_LABEL: &str = "Employment type";

/// Extract the job description as plain text.
///
/// Locates the rich-text description block by its nested structural path,
/// then converts it with interactive/icon sub-elements stripped and blank
/// runs collapsed.
pub fn description(doc: &Html) -> String {
    match select_first(doc, DESCRIPTION_BLOCK) {
        Some(block) => description_text(&block.inner_html()),
        None => {
            debug!("description block not found");
            String::new()
        }
    }
}

/// Extract the job title heading text.
pub fn job_title(doc: &Html) -> String {
    element_text(select_first(doc, JOB_TITLE), "")
}

/// Extract the location span text.
pub fn location(doc: &Html) -> String {
    element_text(select_first(doc, LOCATION), "")
}

/// Extract the company name anchor text.
pub fn company_name(doc: &Html) -> String {
    element_text(select_first(doc, COMPANY_URL), "")
}

/// Extract the company link from the same anchor marker as the name.
pub fn company_link(doc: &Html) -> String {
    element_attr(select_first(doc, COMPANY_URL), "href", "")
}

/// Extract the relative posted-time label.
pub fn job_posted(doc: &Html) -> String {
    element_text(select_first(doc, JOB_POSTED), "")
}

fn job_type_inner(doc: &Html) -> Option<String> {
    let list = select_first(doc, CRITERIA_LIST)?;
    let h3 = Selector::parse("h3").ok()?;
    let heading = list
        .select(&h3)
        .find(|el| el.text().collect::<String>().contains(EMPLOYMENT_TYPE_LABEL))?;
    let sibling = heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "span")?;
    Some(element_text(Some(sibling), ""))
}

/// Extract the employment type from the criteria list.
///
/// Finds the criteria heading whose text contains "Employment type" and
/// reads its next-sibling span. Any absent step yields the empty default.
pub fn job_type(doc: &Html) -> String {
    job_type_inner(doc).unwrap_or_default()
}

/// Classify the job mode from the apply control.
///
/// Defaults to "Remote"; flips to "Onsite" only when the serialized apply
/// button carries the onsite-tracking marker. Binary by design of the
/// upstream markup — there is no Hybrid signal to read.
pub fn job_mode(doc: &Html) -> String {
    let mut mode = "Remote";
    if let Some(button) = select_first(doc, APPLY_BUTTON) {
        if button.html().contains(ONSITE_MARKER) {
            mode = "Onsite";
        }
    }
    mode.to_string()
}

/// Extract recruiter name, title, and link from the recruiter card.
///
/// All three values are produced unconditionally: an absent card reads as
/// three explicit empty strings, not omissions.
pub fn recruiter_info(doc: &Html) -> (String, String, String) {
    match select_first(doc, RECRUITER_CARD) {
        Some(card) => (
            element_text(select_first_in(card, RECRUITER_NAME), ""),
            element_text(select_first_in(card, RECRUITER_TITLE), ""),
            element_attr(select_first_in(card, RECRUITER_LINK), "href", ""),
        ),
        None => (String::new(), String::new(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const JOB_PAGE: &str = r#"
        <!DOCTYPE html>
        <html>
        <body>
            <h3 class="sub-nav-cta__header">Senior Engineer</h3>
            <span class="sub-nav-cta__meta-text">Berlin, Germany</span>
            <a class="sub-nav-cta__optional-url" href="https://example.com/acme">Acme Corp</a>
            <span class="posted-time-ago__text topcard__flavor--metadata">2 weeks ago</span>
            <main id="main-content">
                <div class="description__text--rich">
                    <p>Build things.</p>
                    <p>Ship things.</p>
                    <button>Show more</button>
                </div>
                <ul class="description__job-criteria-list">
                    <li>
                        <h3>Seniority level</h3>
                        <span>Mid-Senior</span>
                    </li>
                    <li>
                        <h3>Employment type</h3>
                        <span>Full-time</span>
                    </li>
                </ul>
            </main>
            <div class="message-the-recruiter">
                <h3 class="base-main-card__title">Dana Recruiter</h3>
                <h4 class="base-main-card__subtitle">Talent Partner</h4>
                <a class="base-card__full-link" href="https://example.com/dana">profile</a>
            </div>
        </body>
        </html>
    "#;

    fn parse() -> Html {
        Html::parse_document(JOB_PAGE)
    }

    #[test]
    fn extracts_title_location_company() {
        let doc = parse();
        assert_eq!(job_title(&doc), "Senior Engineer");
        assert_eq!(location(&doc), "Berlin, Germany");
        assert_eq!(company_name(&doc), "Acme Corp");
        assert_eq!(company_link(&doc), "https://example.com/acme");
    }

    #[test]
    fn extracts_posted_label() {
        let doc = parse();
        assert_eq!(job_posted(&doc), "2 weeks ago");
    }

    #[test]
    fn description_strips_buttons() {
        let doc = parse();
        let text = description(&doc);
        assert!(text.contains("Build things."));
        assert!(text.contains("Ship things."));
        assert!(!text.contains("Show more"));
        assert!(!text.contains("\n\n"));
    }

    #[test]
    fn description_missing_block_is_empty() {
        let doc = Html::parse_document("<html><body><p>no main</p></body></html>");
        assert_eq!(description(&doc), "");
    }

    #[test]
    fn description_requires_main_content_path() {
        // Block present but outside main#main-content: the structural path fails.
        let html = r#"<html><body>
            <div class="description__text--rich"><p>orphan</p></div>
        </body></html>"#;
        let doc = Html::parse_document(html);
        assert_eq!(description(&doc), "");
    }

    #[test]
    fn job_type_reads_sibling_span() {
        let doc = parse();
        assert_eq!(job_type(&doc), "Full-time");
    }

    #[test]
    fn job_type_missing_list_is_empty() {
        let doc = Html::parse_document("<html><body></body></html>");
        assert_eq!(job_type(&doc), "");
    }

    #[test]
    fn job_type_missing_heading_is_empty() {
        let html = r#"<html><body>
            <ul class="description__job-criteria-list">
                <li><h3>Seniority level</h3><span>Mid</span></li>
            </ul>
        </body></html>"#;
        let doc = Html::parse_document(html);
        assert_eq!(job_type(&doc), "");
    }

    #[test]
    fn job_type_heading_without_sibling_is_empty() {
        let html = r#"<html><body>
            <ul class="description__job-criteria-list">
                <li><h3>Employment type</h3></li>
            </ul>
        </body></html>"#;
        let doc = Html::parse_document(html);
        assert_eq!(job_type(&doc), "");
    }

    #[test]
    fn job_mode_defaults_to_remote() {
        let doc = parse();
        assert_eq!(job_mode(&doc), "Remote");
    }

    #[test]
    fn job_mode_onsite_when_marker_present() {
        let html = r#"<html><body>
            <button class="apply-button apply-button--default btn-md btn-primary"
                    data-tracking-control-name="public_jobs_apply-link-onsite">Apply</button>
        </body></html>"#;
        let doc = Html::parse_document(html);
        assert_eq!(job_mode(&doc), "Onsite");
    }

    #[test]
    fn job_mode_remote_when_button_lacks_marker() {
        let html = r#"<html><body>
            <button class="apply-button apply-button--default btn-md btn-primary"
                    data-tracking-control-name="public_jobs_apply-link-offsite">Apply</button>
        </body></html>"#;
        let doc = Html::parse_document(html);
        assert_eq!(job_mode(&doc), "Remote");
    }

    #[test]
    fn recruiter_card_fields() {
        let doc = parse();
        let (name, title, link) = recruiter_info(&doc);
        assert_eq!(name, "Dana Recruiter");
        assert_eq!(title, "Talent Partner");
        assert_eq!(link, "https://example.com/dana");
    }

    #[test]
    fn recruiter_absent_yields_explicit_empties() {
        let doc = Html::parse_document("<html><body></body></html>");
        let (name, title, link) = recruiter_info(&doc);
        assert_eq!(name, "");
        assert_eq!(title, "");
        assert_eq!(link, "");
    }
}
