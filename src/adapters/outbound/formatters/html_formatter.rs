use crate::application::read_models::{
    AlternativeView, ApplicationVendorView, ArchitectureView, CardView, CertificationView,
    ComplianceView, CveView, DashboardReadModel, IncidentView, KeyTakeawaysView, SeverityView,
    TrustBreakdownView, TrustScoreView,
};
use crate::ports::outbound::DashboardFormatter;
use crate::presentation::geometry::{
    points_attribute, Donut, SpiderChart, DONUT_CENTER, DONUT_INNER_RADIUS, DONUT_OUTER_RADIUS,
    GAUGE_CIRCUMFERENCE, GAUGE_RADIUS,
};
use crate::presentation::labels::{Badge, Trend};
use crate::presentation::palette::EMPTY_RING_HEX;
use crate::presentation::Tone;
use crate::shared::Result;

const NO_DATA: &str = "No data available";
const UNKNOWN: &str = "Unknown";

const STYLE: &str = "body{font-family:system-ui,sans-serif;background:#f9fafb;color:#111827;margin:0;padding:24px}\
header{margin-bottom:24px}header p{color:#6b7280;margin:4px 0}\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(340px,1fr));gap:16px}\
.card{background:#fff;border:1px solid #e5e7eb;border-radius:12px;padding:16px}\
.card h2{font-size:1rem;margin:0 0 12px}\
.badge{display:inline-block;padding:2px 8px;border-radius:9999px;font-size:.8rem;font-weight:600}\
.muted{color:#6b7280}.empty{color:#9ca3af;font-style:italic}\
ul{padding-left:18px;margin:4px 0}dl{display:grid;grid-template-columns:max-content 1fr;gap:4px 12px;margin:0}dt{color:#6b7280}";

/// HtmlFormatter adapter rendering the dashboard as a standalone HTML page
///
/// Charts are inline SVG built from the shared chart geometry; no scripts
/// or external assets are referenced.
pub struct HtmlFormatter;

impl HtmlFormatter {
    pub fn new() -> Self {
        Self
    }

    fn badge(badge: &Badge) -> String {
        Self::pill(&badge.label, badge.tone)
    }

    fn pill(label: &str, tone: Tone) -> String {
        format!(
            r#"<span class="badge" style="color:{};background:{}">{}</span>"#,
            tone.hex(),
            tone.background_hex(),
            escape_html(label)
        )
    }

    fn trend(trend: &Trend) -> String {
        format!(
            r#"<span style="color:{}">{} {}</span>"#,
            trend.tone.hex(),
            trend.arrow,
            trend.label
        )
    }

    fn no_data(out: &mut String) {
        out.push_str(&format!(r#"<p class="empty">{}</p>"#, NO_DATA));
    }

    /// Anchors are only emitted for http(s) URLs; anything else renders as text.
    fn link(url: &str, text: &str) -> String {
        if !is_web_url(url) {
            return escape_html(text);
        }
        format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            escape_html(url),
            escape_html(text)
        )
    }

    fn vendor(out: &mut String, view: &ApplicationVendorView) {
        out.push_str(&format!("<p><strong>{}</strong>", escape_html(&view.name)));
        if let Some(version) = &view.version {
            out.push_str(&format!(" {}", Self::pill(&format!("v{}", version), Tone::Gray)));
        }
        out.push_str("</p>");
        if let Some(description) = &view.description {
            out.push_str(&format!(r#"<p class="muted">{}</p>"#, escape_html(description)));
        }
        out.push_str("<dl>");
        out.push_str(&format!("<dt>Vendor</dt><dd>{}</dd>", escape_html(&view.vendor_name)));
        if let Some(country) = &view.country {
            out.push_str(&format!("<dt>Country</dt><dd>{}</dd>", escape_html(country)));
        }
        out.push_str(&format!(
            "<dt>Category</dt><dd>{} / {}</dd>",
            escape_html(&view.category),
            escape_html(&view.subcategory)
        ));
        if let Some(url) = &view.url {
            out.push_str(&format!("<dt>Website</dt><dd>{}</dd>", Self::link(url, url)));
        }
        if let Some(assessed_at) = &view.assessed_at {
            out.push_str(&format!("<dt>Assessed</dt><dd>{}", escape_html(assessed_at)));
            if let Some(relative) = &view.assessed_relative {
                out.push_str(&format!(r#" <span class="muted">({})</span>"#, escape_html(relative)));
            }
            out.push_str("</dd>");
        }
        out.push_str("</dl>");
        if !view.sources.is_empty() {
            out.push_str(r#"<p class="muted">Sources</p><ol>"#);
            for source in &view.sources {
                out.push_str(&format!("<li>{}</li>", Self::link(&source.url, &source.host)));
            }
            out.push_str("</ol>");
        }
    }

    fn trust_score(out: &mut String, view: Option<&TrustScoreView>) {
        let Some(view) = view else {
            return Self::no_data(out);
        };
        let color = view.tone.hex();
        out.push_str(&format!(
            r#"<svg viewBox="0 0 200 200" width="200" height="200" role="img" aria-label="Trust score {:.0}">"#,
            view.score
        ));
        out.push_str(&format!(
            r#"<circle cx="100" cy="100" r="{}" fill="none" stroke="{}" stroke-width="16"/>"#,
            GAUGE_RADIUS, EMPTY_RING_HEX
        ));
        out.push_str(&format!(
            r#"<circle cx="100" cy="100" r="{}" fill="none" stroke="{}" stroke-width="16" stroke-linecap="round" stroke-dasharray="{:.2} {}" transform="rotate(-90 100 100)"/>"#,
            GAUGE_RADIUS, color, view.gauge_dash, GAUGE_CIRCUMFERENCE
        ));
        out.push_str(&format!(
            r#"<text x="100" y="108" text-anchor="middle" font-size="36" font-weight="700" fill="{}">{:.0}</text></svg>"#,
            color, view.score
        ));
        out.push_str(&format!("<p>{}</p>", Self::trend(&view.trend)));
    }

    fn spider(out: &mut String, chart: &SpiderChart) {
        if chart.axes.is_empty() {
            return;
        }
        out.push_str(r#"<svg viewBox="0 0 360 360" width="360" height="360" role="img" aria-label="Trust score breakdown">"#);
        for ring in &chart.grid {
            out.push_str(&format!(
                r#"<polygon points="{}" fill="none" stroke="{}"/>"#,
                points_attribute(ring),
                EMPTY_RING_HEX
            ));
        }
        for axis in &chart.axes {
            out.push_str(&format!(
                r#"<line x1="180" y1="180" x2="{:.2}" y2="{:.2}" stroke="{}"/>"#,
                axis.tip.x, axis.tip.y, EMPTY_RING_HEX
            ));
        }
        out.push_str(&format!(
            r#"<polygon points="{}" fill="{}" fill-opacity="0.25" stroke="{}" stroke-width="2"/>"#,
            points_attribute(&chart.polygon()),
            Tone::Blue.hex(),
            Tone::Blue.hex()
        ));
        for axis in &chart.axes {
            out.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" text-anchor="{}" font-size="11">{}</text>"#,
                axis.label_position.x,
                axis.label_position.y,
                axis.anchor.as_str(),
                escape_html(axis.label)
            ));
        }
        out.push_str("</svg>");
    }

    fn breakdown(out: &mut String, view: Option<&TrustBreakdownView>) {
        let Some(view) = view else {
            return Self::no_data(out);
        };
        Self::spider(out, &view.chart);
        out.push_str("<dl>");
        for dimension in &view.dimensions {
            let score = match dimension.score {
                Some(score) => format!("{:.0}", score),
                None => UNKNOWN.to_string(),
            };
            out.push_str(&format!(
                r#"<dt>{}</dt><dd style="color:{}">{}</dd>"#,
                escape_html(dimension.label),
                dimension.tone.hex(),
                score
            ));
        }
        out.push_str("</dl>");
    }

    fn takeaways(out: &mut String, view: &KeyTakeawaysView) {
        if view.strengths.is_empty() && view.risks.is_empty() {
            return Self::no_data(out);
        }
        for (heading, items, tone) in [
            ("Strengths", &view.strengths, Tone::Green),
            ("Risks", &view.risks, Tone::Red),
        ] {
            if items.is_empty() {
                continue;
            }
            out.push_str(&format!(r#"<p style="color:{}"><strong>{}</strong></p><ul>"#, tone.hex(), heading));
            for item in items {
                out.push_str(&format!("<li>{}</li>", escape_html(item)));
            }
            out.push_str("</ul>");
        }
    }

    fn donut(out: &mut String, donut: &Donut) {
        out.push_str(r#"<svg viewBox="0 0 300 300" width="220" height="220" role="img">"#);
        match donut {
            Donut::Placeholder => {
                out.push_str(&format!(
                    r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="none" stroke="{empty}" stroke-width="{w}"/>"#,
                    cx = DONUT_CENTER.x,
                    cy = DONUT_CENTER.y,
                    r = (DONUT_OUTER_RADIUS + DONUT_INNER_RADIUS) / 2.0,
                    empty = EMPTY_RING_HEX,
                    w = DONUT_OUTER_RADIUS - DONUT_INNER_RADIUS
                ));
            }
            Donut::Slices(slices) => {
                for slice in slices {
                    out.push_str(&format!(
                        r#"<path d="{}" fill="{}"/>"#,
                        slice.path(),
                        slice.tone.hex()
                    ));
                }
                out.push_str(&format!(
                    "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"#fff\"/>",
                    DONUT_CENTER.x, DONUT_CENTER.y, DONUT_INNER_RADIUS
                ));
                for slice in slices {
                    let position = slice.label_position();
                    out.push_str(&format!(
                        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" dominant-baseline=\"middle\" font-size=\"14\" fill=\"#fff\">{}</text>",
                        position.x, position.y, slice.value
                    ));
                }
            }
        }
        out.push_str("</svg>");
    }

    fn severity(out: &mut String, view: Option<&SeverityView>) {
        let Some(view) = view else {
            return Self::no_data(out);
        };
        out.push_str(&format!(
            "<p><strong>{}</strong> total · {}</p>",
            view.total,
            Self::trend(&view.trend)
        ));
        Self::donut(out, &view.donut);
        out.push_str("<dl>");
        for row in &view.legend {
            out.push_str(&format!(
                r#"<dt style="color:{}">● {}</dt><dd>{}</dd>"#,
                row.tone.hex(),
                row.label,
                row.count
            ));
        }
        out.push_str("</dl>");
    }

    fn cves(out: &mut String, cves: &[CveView]) {
        if cves.is_empty() {
            return Self::no_data(out);
        }
        out.push_str("<ul>");
        for cve in cves {
            out.push_str(&format!(
                "<li><strong>{}</strong> {}",
                escape_html(&cve.cve_id),
                Self::pill(&cve.severity, cve.tone)
            ));
            if let Some(year) = cve.year {
                out.push_str(&format!(r#" <span class="muted">{}</span>"#, year));
            }
            if let Some(description) = &cve.description {
                out.push_str(&format!("<br>{}", escape_html(description)));
            }
            out.push_str("</li>");
        }
        out.push_str("</ul>");
    }

    fn incidents(out: &mut String, incidents: &[IncidentView]) {
        if incidents.is_empty() {
            return Self::no_data(out);
        }
        out.push_str("<ul>");
        for incident in incidents {
            out.push_str(&format!(
                "<li><strong>{}</strong> {}",
                escape_html(&incident.title),
                Self::pill(&incident.severity, incident.tone)
            ));
            if let Some(date) = &incident.date {
                out.push_str(&format!(r#" <span class="muted">{}</span>"#, escape_html(date)));
            }
            if let Some(description) = &incident.description {
                out.push_str(&format!("<br>{}", escape_html(description)));
            }
            out.push_str("</li>");
        }
        out.push_str("</ul>");
    }

    fn compliance(out: &mut String, view: &ComplianceView) {
        if view.frameworks.is_empty() && view.data_residency.is_empty() {
            return Self::no_data(out);
        }
        out.push_str("<ul>");
        for framework in &view.frameworks {
            let name = match &framework.url {
                Some(url) => Self::link(url, &framework.name),
                None => escape_html(&framework.name),
            };
            out.push_str(&format!("<li>{} {}", name, Self::badge(&framework.level)));
            if let Some(audit) = &framework.last_audit {
                out.push_str(&format!(r#" <span class="muted">last audit {}</span>"#, escape_html(audit)));
            }
            out.push_str("</li>");
        }
        out.push_str("</ul>");
        if !view.data_residency.is_empty() {
            out.push_str(&format!(
                "<p>Data residency: {}</p>",
                escape_html(&view.data_residency.join(", "))
            ));
        }
    }

    fn certifications(out: &mut String, certs: &[CertificationView]) {
        if certs.is_empty() {
            return Self::no_data(out);
        }
        out.push_str("<ul>");
        for cert in certs {
            let name = match &cert.url {
                Some(url) => Self::link(url, &cert.name),
                None => escape_html(&cert.name),
            };
            out.push_str(&format!("<li>{} {}", name, Self::badge(&cert.status)));
            let details: Vec<String> = [
                cert.issued_by.as_ref().map(|v| format!("issued by {}", v)),
                cert.issue_date.as_ref().map(|v| format!("issued {}", v)),
                cert.expiry_date.as_ref().map(|v| format!("expires {}", v)),
            ]
            .into_iter()
            .flatten()
            .collect();
            if !details.is_empty() {
                out.push_str(&format!(r#"<br><span class="muted">{}</span>"#, escape_html(&details.join(" · "))));
            }
            out.push_str("</li>");
        }
        out.push_str("</ul>");
    }

    fn architecture(out: &mut String, view: Option<&ArchitectureView>) {
        let Some(view) = view else {
            return Self::no_data(out);
        };
        out.push_str("<dl>");
        for (label, value) in [
            ("Encryption", view.encryption.as_str()),
            ("Key derivation", view.key_derivation.as_str()),
            ("Zero knowledge", view.zero_knowledge),
            ("Open source", view.open_source),
            ("Authentication", view.authentication.as_str()),
            ("Deployment", view.deployment.as_str()),
        ] {
            out.push_str(&format!("<dt>{}</dt><dd>{}</dd>", label, escape_html(value)));
        }
        out.push_str("</dl>");
    }

    fn alternatives(out: &mut String, alternatives: &[AlternativeView]) {
        if alternatives.is_empty() {
            return Self::no_data(out);
        }
        out.push_str("<ol>");
        for alternative in alternatives {
            let name = match &alternative.url {
                Some(url) => Self::link(url, &alternative.name),
                None => escape_html(&alternative.name),
            };
            out.push_str(&format!("<li><strong>{}</strong>", name));
            if let Some((score, tone)) = alternative.score {
                out.push_str(&format!(" {}", Self::pill(&format!("{:.0}", score), tone)));
            }
            if let Some(reason) = &alternative.reason {
                out.push_str(&format!("<br>{}", escape_html(reason)));
            }
            out.push_str("</li>");
        }
        out.push_str("</ol>");
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardFormatter for HtmlFormatter {
    fn format(&self, model: &DashboardReadModel) -> Result<String> {
        let mut out = String::new();
        out.push_str(&format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{} · Sentinel</title>\n<style>{}</style>\n</head>\n<body>\n",
            escape_html(&model.title),
            STYLE
        ));
        out.push_str(&format!(
            "<header><h1>{}</h1><p>Viewing as: {}</p><p><code>{}</code></p></header>\n<main class=\"grid\">\n",
            escape_html(&model.title),
            escape_html(&model.role),
            escape_html(&model.location)
        ));

        for card in &model.cards {
            let id = card.id();
            out.push_str(&format!(
                r#"<section class="card" id="{}"><h2>{}</h2>"#,
                id.as_str(),
                id.title()
            ));
            match card {
                CardView::ApplicationVendor(view) => Self::vendor(&mut out, view),
                CardView::TrustScore(view) => Self::trust_score(&mut out, view.as_ref()),
                CardView::Confidence(view) => out.push_str(&Self::badge(&view.badge)),
                CardView::TrustBreakdown(view) => Self::breakdown(&mut out, view.as_ref()),
                CardView::KeyTakeaways(view) => Self::takeaways(&mut out, view),
                CardView::Vulnerabilities(view) | CardView::Incidents(view) => {
                    Self::severity(&mut out, view.as_ref())
                }
                CardView::RecentCves(cves) => Self::cves(&mut out, cves),
                CardView::RecentIncidents(incidents) => Self::incidents(&mut out, incidents),
                CardView::Compliance(view) => Self::compliance(&mut out, view),
                CardView::Certifications(certs) => Self::certifications(&mut out, certs),
                CardView::Architecture(view) => Self::architecture(&mut out, view.as_ref()),
                CardView::Alternatives(alternatives) => Self::alternatives(&mut out, alternatives),
            }
            out.push_str("</section>\n");
        }

        out.push_str("</main>\n</body>\n</html>\n");
        Ok(out)
    }
}

fn is_web_url(url: &str) -> bool {
    let url = url.trim_start().to_ascii_lowercase();
    url.starts_with("http://") || url.starts_with("https://")
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{DimensionView, SeverityCount};
    use crate::presentation::geometry::DonutCategory;
    use crate::presentation::labels;

    fn model(cards: Vec<CardView>) -> DashboardReadModel {
        DashboardReadModel {
            assessment_id: "abc123".to_string(),
            role: "global".to_string(),
            location: "/assessments/abc123".to_string(),
            title: "Acme <Suite>".to_string(),
            cards,
        }
    }

    fn severity(total: u32, counts: [u32; 2]) -> SeverityView {
        let categories = [
            DonutCategory {
                label: "Critical",
                value: counts[0],
                tone: Tone::Red,
            },
            DonutCategory {
                label: "High",
                value: counts[1],
                tone: Tone::Orange,
            },
        ];
        SeverityView {
            total,
            trend: labels::trend(Some("declining")),
            legend: categories
                .iter()
                .map(|c| SeverityCount {
                    label: c.label,
                    count: c.value,
                    tone: c.tone,
                })
                .collect(),
            donut: Donut::build(total, &categories),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_page_shell_escapes_title() {
        let html = HtmlFormatter::new().format(&model(vec![])).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Acme &lt;Suite&gt;</h1>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_one_section_per_card() {
        let html = HtmlFormatter::new()
            .format(&model(vec![
                CardView::Vulnerabilities(None),
                CardView::Incidents(None),
                CardView::RecentCves(vec![]),
            ]))
            .unwrap();
        assert_eq!(html.matches(r#"<section class="card""#).count(), 3);
        assert!(html.contains(r#"id="recentCVEs""#));
        assert_eq!(html.matches(NO_DATA).count(), 3);
    }

    #[test]
    fn test_gauge_uses_dash_and_tone() {
        let html = HtmlFormatter::new()
            .format(&model(vec![CardView::TrustScore(Some(TrustScoreView {
                score: 40.0,
                tone: Tone::Red,
                gauge_dash: 201.06,
                trend: labels::trend(None),
            }))]))
            .unwrap();
        assert!(html.contains(&format!(r#"stroke-dasharray="201.06 {}""#, GAUGE_CIRCUMFERENCE)));
        assert!(html.contains(Tone::Red.hex()));
    }

    #[test]
    fn test_zero_total_draws_placeholder_ring() {
        let html = HtmlFormatter::new()
            .format(&model(vec![CardView::Vulnerabilities(Some(severity(0, [0, 0])))]))
            .unwrap();
        assert!(html.contains(&format!(r#"stroke="{}""#, EMPTY_RING_HEX)));
        assert!(!html.contains("<path"));
        assert!(!html.contains("NaN"));
    }

    #[test]
    fn test_donut_slices_skip_empty_categories() {
        let html = HtmlFormatter::new()
            .format(&model(vec![CardView::Incidents(Some(severity(3, [0, 3])))]))
            .unwrap();
        assert_eq!(html.matches("<path").count(), 1);
        assert!(html.contains(&format!(r#"fill="{}""#, Tone::Orange.hex())));
    }

    #[test]
    fn test_spider_chart_rendered() {
        let values = [("Architecture", 80.0), ("Compliance", 95.0), ("DevSecOps", 70.0)];
        let mut dimensions: Vec<DimensionView> = values
            .iter()
            .map(|&(label, score)| DimensionView {
                label,
                score: Some(score),
                tone: crate::presentation::score_tone(score),
            })
            .collect();
        dimensions.push(DimensionView {
            label: "Risk Exposure",
            score: None,
            tone: Tone::Gray,
        });
        let html = HtmlFormatter::new()
            .format(&model(vec![CardView::TrustBreakdown(Some(TrustBreakdownView {
                dimensions,
                chart: SpiderChart::build(&values),
            }))]))
            .unwrap();
        assert_eq!(html.matches("<line ").count(), 3);
        assert!(html.contains(">DevSecOps</text>"));
        assert!(!html.contains(">Risk Exposure</text>"));
        assert!(html.contains(&format!(
            r#"<dt>Risk Exposure</dt><dd style="color:{}">Unknown</dd>"#,
            Tone::Gray.hex()
        )));
    }

    #[test]
    fn test_links_open_safely() {
        let html = HtmlFormatter::new()
            .format(&model(vec![CardView::Alternatives(vec![AlternativeView {
                number: 1,
                name: "Mattermost".to_string(),
                reason: None,
                url: Some("https://mattermost.com".to_string()),
                score: None,
            }])]))
            .unwrap();
        assert!(html.contains(r#"<a href="https://mattermost.com" target="_blank" rel="noopener noreferrer">Mattermost</a>"#));
    }

    #[test]
    fn test_non_web_links_render_as_text() {
        let alternative = |number: usize, url: &str| AlternativeView {
            number,
            name: format!("Option {}", number),
            reason: None,
            url: Some(url.to_string()),
            score: None,
        };
        let html = HtmlFormatter::new()
            .format(&model(vec![CardView::Alternatives(vec![
                alternative(1, "javascript:alert(1)"),
                alternative(2, " JavaScript:alert(2)"),
                alternative(3, "data:text/html,<b>x</b>"),
                alternative(4, "HTTPS://example.com"),
            ])]))
            .unwrap();
        assert!(!html.to_ascii_lowercase().contains("javascript:"));
        assert!(!html.contains("data:text"));
        assert!(html.contains("<li><strong>Option 1</strong></li>"));
        assert!(html.contains(r#"<a href="HTTPS://example.com""#));
        assert_eq!(html.matches("<a href").count(), 1);
    }

    #[test]
    fn test_is_web_url() {
        assert!(is_web_url("http://acme.io"));
        assert!(is_web_url("https://acme.io/security"));
        assert!(!is_web_url("javascript:alert(1)"));
        assert!(!is_web_url("//acme.io"));
        assert!(!is_web_url("ftp://acme.io"));
    }
}
