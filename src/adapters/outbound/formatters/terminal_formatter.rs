use crate::application::read_models::{
    AlternativeView, ApplicationVendorView, ArchitectureView, CardView, CertificationView,
    ComplianceView, CveView, DashboardReadModel, IncidentView, KeyTakeawaysView, SeverityView,
    TrustBreakdownView, TrustScoreView,
};
use crate::ports::outbound::DashboardFormatter;
use crate::presentation::labels::{Badge, Trend};
use crate::presentation::Tone;
use crate::shared::Result;
use owo_colors::OwoColorize;

const NO_DATA: &str = "No data available";
const UNKNOWN: &str = "Unknown";
const RULE_WIDTH: usize = 60;
const BAR_WIDTH: usize = 20;

/// TerminalFormatter adapter rendering the dashboard as plain terminal text
///
/// Cards are stacked vertically in visibility order. Tones become 24-bit
/// ANSI colors unless color is disabled.
pub struct TerminalFormatter {
    color: bool,
}

impl TerminalFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.color {
            return text.to_string();
        }
        let (r, g, b) = rgb(tone.hex());
        text.truecolor(r, g, b).to_string()
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn badge(&self, badge: &Badge) -> String {
        self.paint(&format!("[{}]", badge.label), badge.tone)
    }

    fn trend(&self, trend: &Trend) -> String {
        self.paint(&format!("{} {}", trend.arrow, trend.label), trend.tone)
    }

    fn bar(&self, value: f64, max: f64, tone: Tone) -> String {
        let filled = if max > 0.0 {
            ((value / max).clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        format!(
            "{}{}",
            self.paint(&"█".repeat(filled), tone),
            self.dim(&"░".repeat(BAR_WIDTH - filled))
        )
    }

    fn header(&self, out: &mut String, model: &DashboardReadModel) {
        out.push_str(&format!("{}\n", self.bold(&model.title)));
        out.push_str(&format!(
            "{}\n",
            self.dim(&format!("Viewing as: {}  ·  {}", model.role, model.location))
        ));
    }

    fn card_title(&self, out: &mut String, title: &str) {
        let prefix = format!("── {} ", title);
        let fill = RULE_WIDTH.saturating_sub(prefix.chars().count());
        out.push('\n');
        out.push_str(&format!(
            "{}{}\n",
            self.bold(&prefix),
            self.dim(&"─".repeat(fill))
        ));
    }

    fn no_data(&self, out: &mut String) {
        out.push_str(&format!("  {}\n", self.dim(NO_DATA)));
    }

    fn vendor(&self, out: &mut String, view: &ApplicationVendorView) {
        out.push_str(&format!("  {}", self.bold(&view.name)));
        if let Some(version) = &view.version {
            out.push_str(&format!(" {}", self.dim(&format!("v{}", version))));
        }
        out.push('\n');
        out.push_str(&format!("  Vendor:    {}\n", view.vendor_name));
        if let Some(country) = &view.country {
            out.push_str(&format!("  Country:   {}\n", country));
        }
        out.push_str(&format!(
            "  Category:  {} / {}\n",
            view.category, view.subcategory
        ));
        if let Some(url) = &view.url {
            out.push_str(&format!("  Website:   {}\n", url));
        }
        if let Some(description) = &view.description {
            out.push_str(&format!("  {}\n", description));
        }
        if let Some(assessed_at) = &view.assessed_at {
            let relative = view
                .assessed_relative
                .as_deref()
                .map(|r| format!(" ({})", r))
                .unwrap_or_default();
            out.push_str(&format!("  Assessed:  {}{}\n", assessed_at, relative));
        }
        if !view.sources.is_empty() {
            out.push_str("  Sources:\n");
            for source in &view.sources {
                out.push_str(&format!("    [{}] {}\n", source.number, source.host));
            }
        }
    }

    fn trust_score(&self, out: &mut String, view: Option<&TrustScoreView>) {
        let Some(view) = view else {
            return self.no_data(out);
        };
        out.push_str(&format!(
            "  {} / 100  {}\n",
            self.paint(&self.bold(&format!("{:.0}", view.score)), view.tone),
            self.trend(&view.trend)
        ));
        out.push_str(&format!("  {}\n", self.bar(view.score, 100.0, view.tone)));
    }

    fn breakdown(&self, out: &mut String, view: Option<&TrustBreakdownView>) {
        let Some(view) = view else {
            return self.no_data(out);
        };
        let width = view
            .dimensions
            .iter()
            .map(|d| d.label.chars().count())
            .max()
            .unwrap_or(0);
        for dimension in &view.dimensions {
            let score = match dimension.score {
                Some(score) => self.paint(&format!("{:>3.0}", score), dimension.tone),
                None => self.dim(UNKNOWN),
            };
            out.push_str(&format!(
                "  {:<width$}  {} {}\n",
                dimension.label,
                self.bar(dimension.score.unwrap_or(0.0), 100.0, dimension.tone),
                score,
                width = width
            ));
        }
    }

    fn takeaways(&self, out: &mut String, view: &KeyTakeawaysView) {
        if view.strengths.is_empty() && view.risks.is_empty() {
            return self.no_data(out);
        }
        if !view.strengths.is_empty() {
            out.push_str(&format!("  {}\n", self.paint("Strengths", Tone::Green)));
            for strength in &view.strengths {
                out.push_str(&format!("    + {}\n", strength));
            }
        }
        if !view.risks.is_empty() {
            out.push_str(&format!("  {}\n", self.paint("Risks", Tone::Red)));
            for risk in &view.risks {
                out.push_str(&format!("    - {}\n", risk));
            }
        }
    }

    fn severity(&self, out: &mut String, view: Option<&SeverityView>) {
        let Some(view) = view else {
            return self.no_data(out);
        };
        out.push_str(&format!(
            "  Total: {}  {}\n",
            self.bold(&view.total.to_string()),
            self.trend(&view.trend)
        ));
        let max = view.legend.iter().map(|row| row.count).max().unwrap_or(0) as f64;
        for row in &view.legend {
            out.push_str(&format!(
                "  {:<9} {} {}\n",
                row.label,
                self.bar(row.count as f64, max, row.tone),
                row.count
            ));
        }
    }

    fn cves(&self, out: &mut String, cves: &[CveView]) {
        if cves.is_empty() {
            return self.no_data(out);
        }
        for cve in cves {
            let year = cve.year.map(|y| format!(" ({})", y)).unwrap_or_default();
            out.push_str(&format!(
                "  {} {}{}\n",
                self.bold(&cve.cve_id),
                self.paint(&format!("[{}]", cve.severity), cve.tone),
                year
            ));
            if let Some(description) = &cve.description {
                out.push_str(&format!("    {}\n", description));
            }
        }
    }

    fn incidents(&self, out: &mut String, incidents: &[IncidentView]) {
        if incidents.is_empty() {
            return self.no_data(out);
        }
        for incident in incidents {
            let date = incident
                .date
                .as_deref()
                .map(|d| format!(" · {}", d))
                .unwrap_or_default();
            out.push_str(&format!(
                "  {} {}{}\n",
                self.bold(&incident.title),
                self.paint(&format!("[{}]", incident.severity), incident.tone),
                self.dim(&date)
            ));
            if let Some(description) = &incident.description {
                out.push_str(&format!("    {}\n", description));
            }
        }
    }

    fn compliance(&self, out: &mut String, view: &ComplianceView) {
        if view.frameworks.is_empty() && view.data_residency.is_empty() {
            return self.no_data(out);
        }
        for framework in &view.frameworks {
            let audit = framework
                .last_audit
                .as_deref()
                .map(|d| format!(" · last audit {}", d))
                .unwrap_or_default();
            out.push_str(&format!(
                "  {} {}{}\n",
                framework.name,
                self.badge(&framework.level),
                self.dim(&audit)
            ));
        }
        if !view.data_residency.is_empty() {
            out.push_str(&format!(
                "  Data residency: {}\n",
                view.data_residency.join(", ")
            ));
        }
    }

    fn certifications(&self, out: &mut String, certs: &[CertificationView]) {
        if certs.is_empty() {
            return self.no_data(out);
        }
        for cert in certs {
            out.push_str(&format!("  {} {}\n", cert.name, self.badge(&cert.status)));
            let mut details = Vec::new();
            if let Some(issuer) = &cert.issued_by {
                details.push(format!("issued by {}", issuer));
            }
            if let Some(issued) = &cert.issue_date {
                details.push(format!("issued {}", issued));
            }
            if let Some(expiry) = &cert.expiry_date {
                details.push(format!("expires {}", expiry));
            }
            if !details.is_empty() {
                out.push_str(&format!("    {}\n", self.dim(&details.join(" · "))));
            }
        }
    }

    fn architecture(&self, out: &mut String, view: Option<&ArchitectureView>) {
        let Some(view) = view else {
            return self.no_data(out);
        };
        let rows = [
            ("Encryption", view.encryption.as_str()),
            ("Key derivation", view.key_derivation.as_str()),
            ("Zero knowledge", view.zero_knowledge),
            ("Open source", view.open_source),
            ("Authentication", view.authentication.as_str()),
            ("Deployment", view.deployment.as_str()),
        ];
        for (label, value) in rows {
            out.push_str(&format!("  {:<15} {}\n", label, value));
        }
    }

    fn alternatives(&self, out: &mut String, alternatives: &[AlternativeView]) {
        if alternatives.is_empty() {
            return self.no_data(out);
        }
        for alternative in alternatives {
            let score = alternative
                .score
                .map(|(score, tone)| format!(" {}", self.paint(&format!("{:.0}", score), tone)))
                .unwrap_or_default();
            out.push_str(&format!(
                "  {}. {}{}\n",
                alternative.number,
                self.bold(&alternative.name),
                score
            ));
            if let Some(reason) = &alternative.reason {
                out.push_str(&format!("     {}\n", reason));
            }
        }
    }
}

impl DashboardFormatter for TerminalFormatter {
    fn format(&self, model: &DashboardReadModel) -> Result<String> {
        let mut out = String::new();
        self.header(&mut out, model);

        for card in &model.cards {
            self.card_title(&mut out, card.id().title());
            match card {
                CardView::ApplicationVendor(view) => self.vendor(&mut out, view),
                CardView::TrustScore(view) => self.trust_score(&mut out, view.as_ref()),
                CardView::Confidence(view) => {
                    out.push_str(&format!("  {}\n", self.badge(&view.badge)));
                }
                CardView::TrustBreakdown(view) => self.breakdown(&mut out, view.as_ref()),
                CardView::KeyTakeaways(view) => self.takeaways(&mut out, view),
                CardView::Vulnerabilities(view) | CardView::Incidents(view) => {
                    self.severity(&mut out, view.as_ref())
                }
                CardView::RecentCves(cves) => self.cves(&mut out, cves),
                CardView::RecentIncidents(incidents) => self.incidents(&mut out, incidents),
                CardView::Compliance(view) => self.compliance(&mut out, view),
                CardView::Certifications(certs) => self.certifications(&mut out, certs),
                CardView::Architecture(view) => self.architecture(&mut out, view.as_ref()),
                CardView::Alternatives(alternatives) => self.alternatives(&mut out, alternatives),
            }
        }

        Ok(out)
    }
}

/// Parses `#rrggbb`; anything else becomes mid gray.
fn rgb(hex: &str) -> (u8, u8, u8) {
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
    };
    match (channel(1..3), channel(3..5), channel(5..7)) {
        (Some(r), Some(g), Some(b)) if hex.len() == 7 && hex.starts_with('#') => (r, g, b),
        _ => (128, 128, 128),
    }
}
