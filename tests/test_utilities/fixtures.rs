use sentinel_assess::prelude::*;

/// A complete assessment as the backend returns it.
pub fn assessment_json(id: &str, name: &str) -> String {
    format!(
        r#"{{
    "id": "{id}",
    "metadata": {{"assessed_at": "2025-01-10T12:00:00+00:00"}},
    "vendor": {{"name": "Acme Corp", "legal_name": "Acme Corporation", "country": "US",
               "url": "https://acme.example.com", "sources": ["https://www.acme.example.com/trust"]}},
    "application": {{
        "application_intel": {{"name": "{name}", "vendorName": "Acme Corp", "version": "4.2"}},
        "description": "Collaboration suite", "url": "https://acme.example.com/suite",
        "category": "Productivity", "subcategory": "Collaboration"
    }},
    "summary": {{
        "trust_score": {{"score": 72, "confidence": "medium", "trend": "stable",
            "architecture": 70, "data_protection": 80, "identity_access": 75, "devsecops": 60,
            "historical_security": 65, "compliance": 85, "platform_security": 70, "risks_exposure": 55}},
        "key_strengths": ["SOC 2 Type II"], "key_risks": ["Two critical CVEs in 2024"]
    }},
    "architecture": {{"encryption": "AES-256", "zero_knowledge": false, "open_source": false,
                     "authentication": "SSO, MFA", "deployment": "saas"}},
    "compliance": {{
        "certs": [{{"name": "ISO 27001", "status": "active", "issued_by": "BSI"}}],
        "frameworks": [{{"name": "GDPR", "compliance_level": "compliant"}}],
        "data_residency": ["US", "EU"]
    }},
    "cves": {{"total": 4, "critical": 2, "high": 1, "medium": 1, "low": 0, "unknown": 0, "trend": "declining"}},
    "incidents": {{"total": 1, "critical": 0, "high": 1, "medium": 0, "low": 0, "trend": "stable"}},
    "recent_cves": [{{"cve_id": "CVE-2024-1111", "severity": "Critical", "description": "Remote code execution", "year": 2024, "sources": []}}],
    "recent_incidents": [{{"title": "Token leak", "date": "2023-06-01", "severity": "High", "description": "Exposed API tokens", "sources": []}}],
    "alternatives": [{{"name": "Mattermost", "reason": "Self-hosted option", "trust_score": 81}}]
}}"#,
        id = id,
        name = name
    )
}

pub fn assessment(id: &str, name: &str) -> Assessment {
    serde_json::from_str(&assessment_json(id, name)).unwrap()
}
