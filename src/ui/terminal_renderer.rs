use crate::config::constants::{DEFAULT_REPORT_WIDTH, MAX_REPORT_WIDTH};
use crate::enums::report_view::ReportView;
use crate::helpers::text_helper::TextHelper;
use crate::structs::analysis_result::AnalysisResult;

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const CODE_COLOR: &str = "\x1b[32m";
const ACCENT: &str = "\x1b[35m";

/// Renders a [`ReportView`] as terminal text. Output depends only on the
/// view and the renderer settings.
pub struct TerminalRenderer {
    color: bool,
    width: usize,
}

impl TerminalRenderer {
    pub fn new(color: bool) -> Self {
        let width = terminal_size::terminal_size()
            .map_or(DEFAULT_REPORT_WIDTH, |(terminal_size::Width(w), _)| usize::from(w))
            .min(MAX_REPORT_WIDTH);
        Self::with_width(color, width)
    }

    pub fn with_width(color: bool, width: usize) -> Self {
        Self { color, width: width.max(20) }
    }

    pub fn render(&self, view: ReportView<'_>) -> String {
        match view {
            ReportView::Idle => self.render_idle(),
            ReportView::Loading => self.render_loading(),
            ReportView::Result(result) => self.render_result(result),
        }
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", style, text, RESET)
        } else {
            text.to_string()
        }
    }

    fn rule(&self, c: char) -> String {
        c.to_string().repeat(self.width)
    }

    fn render_idle(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.paint(DIM, "🛡️  No Scan Active"));
        out.push('\n');
        out.push_str(&self.paint(DIM, "   Enter your source code and run analyze to generate a report."));
        out.push('\n');
        out
    }

    fn render_loading(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.paint(ACCENT, "🛡️  Scanning Deeply..."));
        out.push('\n');
        out.push_str(&self.paint(DIM, "   Identifying potential threats and CWE patterns"));
        out.push('\n');
        out
    }

    fn render_result(&self, result: &AnalysisResult) -> String {
        let tone = result.banner_tone();
        let mut lines = Vec::new();

        lines.push(self.rule('━'));
        lines.push(self.paint(BOLD, "🛡️  SECURITY REPORT"));
        lines.push(self.rule('━'));

        lines.push(self.paint(
            tone.ansi_color(),
            &format!("{}  {}", tone.emoji(), clean(result.vulnerability_type())),
        ));
        lines.push(format!(
            "   {}  {}",
            self.paint(tone.ansi_color(), &format!("[{}]", clean(result.status()).to_uppercase())),
            self.paint(DIM, "Threat Level Detected"),
        ));
        lines.push(String::new());

        lines.push(format!("  {} {}", self.paint(DIM, "CWE Identification :"), clean(result.cwe_id())));
        lines.push(format!("  {} {}", self.paint(DIM, "OWASP Category     :"), clean(result.owasp_category())));
        lines.push(String::new());

        lines.push(self.paint(BOLD, "ℹ️  VULNERABILITY INSIGHTS"));
        lines.push(format!("  \"{}\"", clean(result.explanation())));
        lines.push(String::new());

        lines.push(self.paint(BOLD, &format!("✅ {}", tone.fix_heading().to_uppercase())));
        lines.push(self.rule('─'));
        for line in clean(&result.display_secure_code()).lines() {
            lines.push(self.paint(CODE_COLOR, line));
        }
        lines.push(self.rule('─'));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

fn clean(text: &str) -> String {
    TextHelper::strip_control_chars(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(status: &str, secure_code: &str) -> AnalysisResult {
        AnalysisResult::new(status, "Code Injection", "CWE-94", "A03:2021", "eval is dangerous", secure_code)
    }

    #[test]
    fn idle_and_loading_views() {
        let renderer = TerminalRenderer::with_width(false, 40);
        assert!(renderer.render(ReportView::Idle).contains("No Scan Active"));
        assert!(renderer.render(ReportView::Loading).contains("Scanning Deeply..."));
    }

    #[test]
    fn warning_report_lists_metadata_and_fix() {
        let renderer = TerminalRenderer::with_width(false, 40);
        let result = report("vulnerable", "ast.literal_eval(x)");

        let out = renderer.render(ReportView::Result(&result));

        assert!(out.contains("⚠️  Code Injection"));
        assert!(out.contains("[VULNERABLE]"));
        assert!(out.contains("CWE Identification : CWE-94"));
        assert!(out.contains("OWASP Category     : A03:2021"));
        assert!(out.contains("\"eval is dangerous\""));
        assert!(out.contains("RECOMMENDED SECURE FIX"));
        assert!(out.contains("ast.literal_eval(x)"));
    }

    #[test]
    fn safe_report_uses_safe_styling() {
        let renderer = TerminalRenderer::with_width(true, 40);
        let result = report("safe", "x = 1");

        let out = renderer.render(ReportView::Result(&result));

        assert!(out.contains("\x1b[32m✅  Code Injection"));
        assert!(out.contains("STANDARD COMPLIANCE"));
    }

    #[test]
    fn escaped_newlines_become_separate_lines() {
        let renderer = TerminalRenderer::with_width(false, 40);
        let result = report("vulnerable", "a = 1\\nb = 2");

        let out = renderer.render(ReportView::Result(&result));

        assert!(out.contains("\na = 1\nb = 2\n"));
        assert!(!out.contains("\\n"));
    }

    #[test]
    fn service_text_cannot_inject_escape_sequences() {
        let renderer = TerminalRenderer::with_width(false, 40);
        let result = AnalysisResult::new(
            "vulnerable\x1b]0;pwned\x07",
            "Code \x1b[31mInjection",
            "CWE-94",
            "A03:2021",
            "clears\x1b[2J screen",
            "a = 1\\nb\x1b[8m = 2",
        );

        let out = renderer.render(ReportView::Result(&result));

        assert!(!out.contains('\x1b'));
        assert!(!out.contains('\x07'));
        assert!(out.contains("Code [31mInjection"));
        assert!(out.contains("\na = 1\nb[8m = 2\n"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let renderer = TerminalRenderer::with_width(true, 50);
        let result = report("vulnerable", "fix()");
        assert_eq!(
            renderer.render(ReportView::Result(&result)),
            renderer.render(ReportView::Result(&result))
        );
    }
}
