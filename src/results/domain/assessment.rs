use serde::{Deserialize, Deserializer, Serialize};

/// Reads an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Assessment record returned by `GET /api/assessments/{id}`.
///
/// Everything except the id may be missing; cards render placeholders for
/// absent data instead of failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: AssessmentMetadata,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vendor: Vendor,
    #[serde(default, deserialize_with = "null_as_default")]
    pub application: ApplicationInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: Summary,
    #[serde(default)]
    pub architecture: Option<Architecture>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub compliance: Compliance,
    #[serde(default)]
    pub cves: Option<SeverityCounts>,
    #[serde(default)]
    pub incidents: Option<SeverityCounts>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recent_cves: Vec<CveItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recent_incidents: Vec<IncidentItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub alternatives: Vec<Alternative>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentMetadata {
    #[serde(default)]
    pub assessed_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub legal_name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub application_intel: ApplicationIntel,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationIntel {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, alias = "vendorName")]
    pub vendor_name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub trust_score: Option<TrustScore>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_strengths: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_risks: Vec<String>,
}

/// Composite trust score and its eight sub-dimensions, each 0-100.
///
/// Scores the backend left out stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrustScore {
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub confidence: Option<String>,
    #[serde(default)]
    pub trend: Option<String>,
    #[serde(default)]
    pub architecture: Option<f64>,
    #[serde(default)]
    pub data_protection: Option<f64>,
    #[serde(default)]
    pub identity_access: Option<f64>,
    #[serde(default)]
    pub devsecops: Option<f64>,
    #[serde(default)]
    pub historical_security: Option<f64>,
    #[serde(default)]
    pub compliance: Option<f64>,
    #[serde(default)]
    pub platform_security: Option<f64>,
    #[serde(default)]
    pub risks_exposure: Option<f64>,
}

impl TrustScore {
    /// Sub-dimension scores with their display labels, in chart order.
    pub fn dimensions(&self) -> [(&'static str, Option<f64>); 8] {
        [
            ("Architecture", self.architecture),
            ("Data Protection", self.data_protection),
            ("Identity & Access", self.identity_access),
            ("DevSecOps", self.devsecops),
            ("Historical Security", self.historical_security),
            ("Compliance", self.compliance),
            ("Platform Security", self.platform_security),
            ("Risk Exposure", self.risks_exposure),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Architecture {
    #[serde(default)]
    pub encryption: Option<String>,
    #[serde(default)]
    pub key_derivation: Option<String>,
    #[serde(default)]
    pub zero_knowledge: Option<bool>,
    #[serde(default)]
    pub open_source: Option<bool>,
    #[serde(default)]
    pub authentication: Option<String>,
    #[serde(default)]
    pub deployment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Compliance {
    #[serde(default, deserialize_with = "null_as_default")]
    pub certs: Vec<Certification>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub frameworks: Vec<Framework>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data_residency: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub issued_by: Option<String>,
    #[serde(default)]
    pub issue_date: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Framework {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub compliance_level: Option<String>,
    #[serde(default)]
    pub last_audit_date: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Per-severity counts for CVEs or incidents.
///
/// Incidents carry no `unknown` bucket; it stays zero for them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeverityCounts {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub critical: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub high: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub medium: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub low: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unknown: u32,
    #[serde(default)]
    pub trend: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CveItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub cve_id: String,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub trust_score: Option<f64>,
}
