use super::*;

fn resto_config() -> SiteConfig {
    SiteConfig::from_parts(Some("Yuca Resto".to_owned()), None, None, None, None)
}

// =============================================================
// Lead::from_fields
// =============================================================

#[test]
fn lead_carries_fields_and_derived_source() {
    let lead = Lead::from_fields(
        &resto_config(),
        "Jeanne",
        "jeanne@example.com",
        "0601020304",
        "Réserver une salle",
    );
    assert_eq!(lead.name, "Jeanne");
    assert_eq!(lead.email, "jeanne@example.com");
    assert_eq!(lead.phone, "0601020304");
    assert_eq!(lead.business, "Yuca Resto");
    assert_eq!(lead.project, "Réserver une salle");
    assert_eq!(lead.source, "site-yuca-resto");
}

#[test]
fn missing_fields_stay_empty_strings() {
    let lead = Lead::from_fields(&resto_config(), "Jeanne", "jeanne@example.com", "", "");
    assert_eq!(lead.phone, "");
    assert_eq!(lead.project, "");
    assert_eq!(lead.source, "site-yuca-resto");
}

#[test]
fn lead_serializes_with_wire_field_names() {
    let lead = Lead::from_fields(&resto_config(), "Jeanne", "jeanne@example.com", "", "");
    let value = serde_json::to_value(&lead).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "name": "Jeanne",
            "email": "jeanne@example.com",
            "phone": "",
            "business": "Yuca Resto",
            "project": "",
            "source": "site-yuca-resto",
        })
    );
}

// =============================================================
// Messages
// =============================================================

#[test]
fn lead_request_failed_message_formats_status() {
    assert_eq!(lead_request_failed_message(500), "lead request failed: 500");
}
