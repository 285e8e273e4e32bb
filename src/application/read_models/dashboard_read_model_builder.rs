//! Builds the dashboard read model from a fetched assessment.

use super::card_views::*;
use super::dashboard_read_model::{CardView, DashboardReadModel};
use crate::navigation::Route;
use crate::presentation::country::{country_name, source_host};
use crate::presentation::geometry::{gauge_dash, Donut, DonutCategory, SpiderChart};
use crate::presentation::{labels, score_tone, time, Tone};
use crate::results::domain::{Assessment, CardId, SeverityCounts};
use crate::results::policies::visible_cards_for;
use chrono::{DateTime, Utc};

pub struct DashboardReadModelBuilder;

impl DashboardReadModelBuilder {
    /// Builds the cards visible for `role`, in dashboard order.
    ///
    /// # Arguments
    /// * `assessment` - The fetched assessment
    /// * `role` - Role id from the location, if any
    /// * `now` - Reference time for relative dates
    pub fn build(assessment: &Assessment, role: Option<&str>, now: DateTime<Utc>) -> DashboardReadModel {
        let cards = visible_cards_for(role)
            .iter()
            .map(|card| Self::build_card(*card, assessment, now))
            .collect();

        let name = &assessment.application.application_intel.name;
        let title = if name.is_empty() {
            assessment.id.clone()
        } else {
            name.clone()
        };

        DashboardReadModel {
            assessment_id: assessment.id.clone(),
            role: role.unwrap_or("global").to_string(),
            location: Route::assessment_location(&assessment.id, role).to_string(),
            title,
            cards,
        }
    }

    fn build_card(card: CardId, assessment: &Assessment, now: DateTime<Utc>) -> CardView {
        match card {
            CardId::ApplicationVendor => {
                CardView::ApplicationVendor(Self::build_application_vendor(assessment, now))
            }
            CardId::TrustScore => CardView::TrustScore(Self::build_trust_score(assessment)),
            CardId::Confidence => CardView::Confidence(ConfidenceView {
                badge: labels::confidence(
                    assessment
                        .summary
                        .trust_score
                        .as_ref()
                        .and_then(|t| t.confidence.as_deref()),
                ),
            }),
            CardId::TrustBreakdown => {
                CardView::TrustBreakdown(Self::build_trust_breakdown(assessment))
            }
            CardId::KeyTakeaways => CardView::KeyTakeaways(KeyTakeawaysView {
                strengths: assessment.summary.key_strengths.clone(),
                risks: assessment.summary.key_risks.clone(),
            }),
            CardId::Vulnerabilities => CardView::Vulnerabilities(
                assessment
                    .cves
                    .as_ref()
                    .map(|counts| Self::build_severity(counts, true)),
            ),
            CardId::Incidents => CardView::Incidents(
                assessment
                    .incidents
                    .as_ref()
                    .map(|counts| Self::build_severity(counts, false)),
            ),
            CardId::RecentCves => CardView::RecentCves(
                assessment
                    .recent_cves
                    .iter()
                    .map(|cve| CveView {
                        cve_id: labels::or_unknown(Some(cve.cve_id.as_str())).to_string(),
                        severity: labels::or_unknown(cve.severity.as_deref()).to_string(),
                        tone: labels::cve_severity_tone(cve.severity.as_deref()),
                        year: cve.year,
                        description: non_blank(cve.description.as_deref()),
                    })
                    .collect(),
            ),
            CardId::RecentIncidents => CardView::RecentIncidents(
                assessment
                    .recent_incidents
                    .iter()
                    .map(|incident| IncidentView {
                        title: labels::or_unknown(Some(incident.title.as_str())).to_string(),
                        severity: incident
                            .severity
                            .as_deref()
                            .filter(|s| !s.trim().is_empty())
                            .unwrap_or("Unknown severity")
                            .to_string(),
                        tone: labels::incident_severity_tone(incident.severity.as_deref()),
                        date: incident.date.as_deref().map(time::format_short_date),
                        description: non_blank(incident.description.as_deref()),
                    })
                    .collect(),
            ),
            CardId::Compliance => CardView::Compliance(ComplianceView {
                frameworks: assessment
                    .compliance
                    .frameworks
                    .iter()
                    .map(|framework| FrameworkView {
                        name: labels::or_unknown(Some(framework.name.as_str())).to_string(),
                        level: labels::compliance_level(framework.compliance_level.as_deref()),
                        last_audit: framework
                            .last_audit_date
                            .as_deref()
                            .map(time::format_short_date),
                        url: framework.url.clone(),
                    })
                    .collect(),
                data_residency: assessment.compliance.data_residency.clone(),
            }),
            CardId::Certifications => CardView::Certifications(
                assessment
                    .compliance
                    .certs
                    .iter()
                    .map(|cert| CertificationView {
                        name: labels::or_unknown(Some(cert.name.as_str())).to_string(),
                        status: labels::cert_status(cert.status.as_deref()),
                        issued_by: non_blank(cert.issued_by.as_deref()),
                        issue_date: cert.issue_date.as_deref().map(time::format_short_date),
                        expiry_date: cert.expiry_date.as_deref().map(time::format_short_date),
                        url: cert.url.clone(),
                    })
                    .collect(),
            ),
            CardId::Architecture => {
                CardView::Architecture(assessment.architecture.as_ref().map(|arch| {
                    ArchitectureView {
                        encryption: labels::or_unknown(arch.encryption.as_deref()).to_string(),
                        key_derivation: labels::or_unknown(arch.key_derivation.as_deref())
                            .to_string(),
                        zero_knowledge: labels::yes_no(arch.zero_knowledge),
                        open_source: labels::yes_no(arch.open_source),
                        authentication: labels::or_unknown(arch.authentication.as_deref())
                            .to_string(),
                        deployment: labels::deployment(arch.deployment.as_deref()),
                    }
                }))
            }
            CardId::Alternatives => CardView::Alternatives(
                assessment
                    .alternatives
                    .iter()
                    .enumerate()
                    .map(|(index, alternative)| AlternativeView {
                        number: index + 1,
                        name: labels::or_unknown(Some(alternative.name.as_str())).to_string(),
                        reason: non_blank(alternative.reason.as_deref()),
                        url: alternative.url.clone(),
                        score: alternative.trust_score.map(|s| (s, score_tone(s))),
                    })
                    .collect(),
            ),
        }
    }

    fn build_application_vendor(assessment: &Assessment, now: DateTime<Utc>) -> ApplicationVendorView {
        let intel = &assessment.application.application_intel;
        let vendor_name = intel
            .vendor_name
            .clone()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| labels::or_unknown(Some(assessment.vendor.name.as_str())).to_string());
        let assessed_at = assessment.metadata.assessed_at.as_deref();

        ApplicationVendorView {
            name: labels::or_unknown(Some(intel.name.as_str())).to_string(),
            version: non_blank(intel.version.as_deref()),
            vendor_name,
            country: assessment
                .vendor
                .country
                .as_deref()
                .filter(|c| !c.trim().is_empty())
                .map(country_name),
            description: non_blank(assessment.application.description.as_deref()),
            category: labels::or_unknown(assessment.application.category.as_deref()).to_string(),
            subcategory: labels::or_unknown(assessment.application.subcategory.as_deref())
                .to_string(),
            url: assessment.vendor.url.clone(),
            assessed_at: assessed_at.map(time::format_absolute),
            assessed_relative: assessed_at.and_then(|at| time::relative_time(at, now)),
            sources: assessment
                .vendor
                .sources
                .iter()
                .enumerate()
                .map(|(index, url)| SourceView {
                    number: index + 1,
                    host: source_host(url),
                    url: url.clone(),
                })
                .collect(),
        }
    }

    /// A trust score without a composite value renders as the placeholder.
    fn build_trust_score(assessment: &Assessment) -> Option<TrustScoreView> {
        let trust = assessment.summary.trust_score.as_ref()?;
        let score = trust.score?;
        Some(TrustScoreView {
            score,
            tone: score_tone(score),
            gauge_dash: gauge_dash(score),
            trend: labels::trend(trust.trend.as_deref()),
        })
    }

    /// Missing dimensions stay listed as unknown but are left off the chart.
    fn build_trust_breakdown(assessment: &Assessment) -> Option<TrustBreakdownView> {
        let trust = assessment.summary.trust_score.as_ref()?;
        let values = trust.dimensions();
        let charted: Vec<(&'static str, f64)> = values
            .iter()
            .filter_map(|&(label, score)| score.map(|s| (label, s)))
            .collect();
        if charted.is_empty() {
            return None;
        }

        Some(TrustBreakdownView {
            dimensions: values
                .iter()
                .map(|&(label, score)| DimensionView {
                    label,
                    score,
                    tone: score.map(score_tone).unwrap_or(Tone::Gray),
                })
                .collect(),
            chart: SpiderChart::build(&charted),
        })
    }

    /// CVEs carry an extra `Unknown` bucket; incidents top out at `High`.
    fn build_severity(counts: &SeverityCounts, with_unknown: bool) -> SeverityView {
        let mut legend = vec![
            SeverityCount {
                label: "Critical",
                count: counts.critical,
                tone: Tone::Red,
            },
            SeverityCount {
                label: "High",
                count: counts.high,
                tone: Tone::Orange,
            },
            SeverityCount {
                label: "Medium",
                count: counts.medium,
                tone: Tone::Yellow,
            },
            SeverityCount {
                label: "Low",
                count: counts.low,
                tone: Tone::Green,
            },
        ];
        if with_unknown {
            legend.push(SeverityCount {
                label: "Unknown",
                count: counts.unknown,
                tone: Tone::Gray,
            });
        }

        let categories: Vec<DonutCategory> = legend
            .iter()
            .map(|row| DonutCategory {
                label: row.label,
                value: row.count,
                tone: row.tone,
            })
            .collect();

        SeverityView {
            total: counts.total,
            trend: labels::trend(counts.trend.as_deref()),
            donut: Donut::build(counts.total, &categories),
            legend,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}
