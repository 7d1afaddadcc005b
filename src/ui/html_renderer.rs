use crate::enums::report_view::ReportView;
use crate::helpers::text_helper::TextHelper;
use crate::structs::analysis_result::AnalysisResult;

/// Renders report panel fragments for the web page. Every value from the
/// analysis service is HTML-escaped.
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn render(view: ReportView<'_>) -> String {
        match view {
            ReportView::Idle => Self::render_idle(),
            ReportView::Loading => Self::render_loading(),
            ReportView::Result(result) => Self::render_result(result),
        }
    }

    fn render_idle() -> String {
        concat!(
            r#"<div class="report-idle">"#,
            r#"<div class="shield">🛡️</div>"#,
            "<h4>No Scan Active</h4>",
            "<p>Enter your source code and click the button to generate a report.</p>",
            "</div>",
        )
        .to_string()
    }

    fn render_loading() -> String {
        concat!(
            r#"<div class="report-loading">"#,
            r#"<div class="spinner"></div>"#,
            r#"<p class="loading-title">Scanning Deeply...</p>"#,
            r#"<p class="loading-hint">Identifying potential threats and CWE patterns</p>"#,
            "</div>",
        )
        .to_string()
    }

    fn stat_card(label: &str, value: &str) -> String {
        format!(
            r#"<div class="stat-card"><p class="stat-label">{}</p><p class="stat-value">{}</p></div>"#,
            label,
            TextHelper::escape_html(value),
        )
    }

    fn render_result(result: &AnalysisResult) -> String {
        let tone = result.banner_tone();
        let mut html = String::from(r#"<div class="report-result">"#);

        html.push_str(&format!(
            r#"<div class="banner {}"><span class="banner-icon">{}</span><div><h4>{}</h4><span class="badge">{}</span> <span class="badge-hint">Threat Level Detected</span></div></div>"#,
            tone.css_class(),
            tone.emoji(),
            TextHelper::escape_html(result.vulnerability_type()),
            TextHelper::escape_html(result.status()),
        ));

        html.push_str(r#"<div class="stat-grid">"#);
        html.push_str(&Self::stat_card("CWE Identification", result.cwe_id()));
        html.push_str(&Self::stat_card("OWASP Category", result.owasp_category()));
        html.push_str("</div>");

        html.push_str(&format!(
            r#"<div class="insights"><div class="section-title">ℹ️ Vulnerability Insights</div><p>"{}"</p></div>"#,
            TextHelper::escape_html(result.explanation()),
        ));

        html.push_str(&format!(
            r#"<div class="fix"><div class="fix-header"><div class="section-title">✅ {}</div><button type="button" class="copy-button" data-action="copy">📋 Copy Source</button></div><pre class="secure-code">{}</pre></div>"#,
            tone.fix_heading(),
            TextHelper::escape_html(&result.display_secure_code()),
        ));

        html.push_str("</div>");
        html
    }
}
