//! Output surfaces for rendered state
//!
//! Two projections of the same state: an HTML fragment for a page host and
//! plain lines for a terminal host. Every service-supplied string reaches the
//! HTML surface through `escape_html`; there is no raw-markup path.

use crate::renderer::{ListEntry, RenderedAssessment};
use std::fmt::Write;

/// Escape text for insertion into HTML element content or attribute values
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `<ul>` with one escaped `<li>` per entry
#[must_use]
pub fn list_html(class: &str, entries: &[ListEntry]) -> String {
    let mut out = format!("<ul class=\"{}\">", escape_html(class));
    for entry in entries {
        let _ = write!(out, "<li>{}</li>", escape_html(&entry.display_text()));
    }
    out.push_str("</ul>");
    out
}

/// `<ul>` of plain strings, escaped
#[must_use]
pub fn text_list_html(class: &str, items: &[String]) -> String {
    let entries: Vec<ListEntry> = items.iter().map(|t| ListEntry::plain(t.as_str())).collect();
    list_html(class, &entries)
}

impl RenderedAssessment {
    /// HTML fragment for the results area content
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<div class=\"strength-score\">{}</div>",
            escape_html(&self.score.text)
        );
        match self.score.bar_percent {
            Some(percent) => {
                let _ = write!(
                    out,
                    "<div class=\"strength-bar\" style=\"width: {percent}%\"></div>"
                );
            }
            None => out.push_str("<div class=\"strength-bar indeterminate\"></div>"),
        }
        let _ = write!(
            out,
            "<span class=\"strength-value {}\">{}</span>",
            self.badge.category.css_class(),
            escape_html(&self.badge.label)
        );
        out.push_str(&list_html("feedback-list", &self.feedback));
        out.push_str(&list_html("issues-list", &self.issues));
        let _ = write!(
            out,
            "<p class=\"message-text\">{}</p>",
            escape_html(&self.message)
        );
        let _ = write!(
            out,
            "<div class=\"{}\">{}</div>",
            self.breach.css_class(),
            escape_html(&self.breach.text())
        );
        out
    }

    /// Terminal lines for the results area content
    #[must_use]
    pub fn to_text(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let bar = match self.score.bar_percent {
            Some(percent) => text_bar(percent),
            None => "[??????????]".to_string(),
        };
        lines.push(format!(
            "Strength: {} [{}] {} {}",
            self.badge.label, self.badge.category, self.score.text, bar
        ));
        lines.push("Feedback:".to_string());
        lines.extend(self.feedback.iter().map(|e| format!("  - {}", e.display_text())));
        lines.push("Issues:".to_string());
        lines.extend(self.issues.iter().map(|e| format!("  - {}", e.display_text())));
        lines.push(format!("Message: {}", self.message));
        lines.push(self.breach.text());
        lines
    }
}

fn text_bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) / 10;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(10 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Renderer;
    use meter_test_utils::{assessment, very_weak_assessment};
    use pretty_assertions::assert_eq;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn html_contains_expected_pieces() {
        let html = Renderer::default().render(&very_weak_assessment()).to_html();

        assert!(html.contains("<div class=\"strength-score\">5/100</div>"));
        assert!(html.contains("style=\"width: 5%\""));
        assert!(html.contains("<span class=\"strength-value strength-very-weak\">Very Weak</span>"));
        assert!(html.contains("<ul class=\"issues-list\"><li>❌ Too short</li></ul>"));
        assert!(html.contains("<ul class=\"feedback-list\"><li>No feedback yet</li></ul>"));
        assert!(html.contains("<div class=\"breach-check safe\">"));
    }

    #[test]
    fn html_never_carries_service_markup() {
        let mut input = assessment(30, 2);
        input.feedback = vec!["<script>alert(1)</script>".into()];
        input.issues = vec!["<b>bold</b>".into()];
        input.message = "<i>hi</i>".into();
        input.strength_label = "<em>Weak</em>".into();

        let html = Renderer::default().render(&input).to_html();

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(!html.contains("<i>"));
        assert!(!html.contains("<em>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn out_of_range_score_has_indeterminate_bar() {
        let html = Renderer::default().render(&assessment(-4, 1)).to_html();
        assert!(html.contains("strength-bar indeterminate"));
        assert!(!html.contains("width:"));
    }

    #[test]
    fn text_surface_lists_everything() {
        let lines = Renderer::default().render(&very_weak_assessment()).to_text();

        assert_eq!(lines[0], "Strength: Very Weak [very-weak] 5/100 [..........]");
        assert!(lines.contains(&"  - ❌ Too short".to_string()));
        assert!(lines.contains(&"Message: Too short".to_string()));
        assert!(lines.last().unwrap().starts_with("✓ Safe"));
    }

    #[test]
    fn text_bar_fills_by_tens() {
        assert_eq!(text_bar(0), "[..........]");
        assert_eq!(text_bar(55), "[#####.....]");
        assert_eq!(text_bar(100), "[##########]");
    }
}
