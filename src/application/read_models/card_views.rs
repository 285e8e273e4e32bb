//! View structs for individual dashboard cards.
//!
//! Each view is already formatted for display: labels resolved, dates
//! rendered and tones chosen. Absent data shows up as `None` or an empty
//! list; formatters render the matching placeholder.

use crate::presentation::geometry::{Donut, SpiderChart};
use crate::presentation::labels::{Badge, Trend};
use crate::presentation::Tone;

/// A numbered vendor source.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceView {
    pub number: usize,
    pub host: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationVendorView {
    pub name: String,
    pub version: Option<String>,
    pub vendor_name: String,
    pub country: Option<String>,
    pub description: Option<String>,
    pub category: String,
    pub subcategory: String,
    pub url: Option<String>,
    pub assessed_at: Option<String>,
    pub assessed_relative: Option<String>,
    pub sources: Vec<SourceView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrustScoreView {
    pub score: f64,
    pub tone: Tone,
    /// Stroke length of the gauge arc.
    pub gauge_dash: f64,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceView {
    pub badge: Badge,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DimensionView {
    pub label: &'static str,
    pub score: Option<f64>,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrustBreakdownView {
    pub dimensions: Vec<DimensionView>,
    pub chart: SpiderChart,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyTakeawaysView {
    pub strengths: Vec<String>,
    pub risks: Vec<String>,
}

/// One legend row of a severity donut.
#[derive(Debug, Clone, PartialEq)]
pub struct SeverityCount {
    pub label: &'static str,
    pub count: u32,
    pub tone: Tone,
}

/// CVE or incident aggregate with its donut.
#[derive(Debug, Clone, PartialEq)]
pub struct SeverityView {
    pub total: u32,
    pub trend: Trend,
    pub legend: Vec<SeverityCount>,
    pub donut: Donut,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CveView {
    pub cve_id: String,
    pub severity: String,
    pub tone: Tone,
    pub year: Option<i32>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IncidentView {
    pub title: String,
    pub severity: String,
    pub tone: Tone,
    pub date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameworkView {
    pub name: String,
    pub level: Badge,
    pub last_audit: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComplianceView {
    pub frameworks: Vec<FrameworkView>,
    pub data_residency: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CertificationView {
    pub name: String,
    pub status: Badge,
    pub issued_by: Option<String>,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArchitectureView {
    pub encryption: String,
    pub key_derivation: String,
    pub zero_knowledge: &'static str,
    pub open_source: &'static str,
    pub authentication: String,
    pub deployment: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlternativeView {
    pub number: usize,
    pub name: String,
    pub reason: Option<String>,
    pub url: Option<String>,
    pub score: Option<(f64, Tone)>,
}
