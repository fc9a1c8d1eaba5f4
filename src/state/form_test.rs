use super::*;

// =============================================================
// SubmitStatus
// =============================================================

#[test]
fn default_status_is_idle() {
    assert_eq!(SubmitStatus::default(), SubmitStatus::Idle);
}

#[test]
fn idle_uses_the_original_label() {
    assert_eq!(SubmitStatus::Idle.label("Envoyer"), "Envoyer");
    assert_eq!(SubmitStatus::Idle.label("Demander un devis"), "Demander un devis");
}

#[test]
fn lifecycle_labels_match_feedback_tokens() {
    assert_eq!(SubmitStatus::Sending.label(SUBMIT_IDLE_LABEL), "Envoi...");
    assert_eq!(SubmitStatus::Sent.label(SUBMIT_IDLE_LABEL), "Envoyé");
    assert_eq!(SubmitStatus::Failed.label(SUBMIT_IDLE_LABEL), "Erreur");
}

#[test]
fn only_terminal_statuses_recolor_the_button() {
    assert_eq!(SubmitStatus::Idle.background(), "");
    assert_eq!(SubmitStatus::Sending.background(), "");
    assert_eq!(SubmitStatus::Sent.background(), "#4ade80");
    assert_eq!(SubmitStatus::Failed.background(), "#ef4444");
}

#[test]
fn every_status_but_idle_is_busy() {
    assert!(!SubmitStatus::Idle.is_busy());
    assert!(SubmitStatus::Sending.is_busy());
    assert!(SubmitStatus::Sent.is_busy());
    assert!(SubmitStatus::Failed.is_busy());
}

// =============================================================
// lead_source
// =============================================================

#[test]
fn lead_source_lowercases_and_hyphenates() {
    assert_eq!(lead_source("Yuca Resto"), "site-yuca-resto");
}

#[test]
fn lead_source_collapses_whitespace_runs() {
    assert_eq!(lead_source("Le  Petit\tCafé"), "site-le-petit-café");
}

#[test]
fn lead_source_passes_single_words_through() {
    assert_eq!(lead_source("Yuca"), "site-yuca");
}

#[test]
fn lead_source_of_empty_name_is_bare_prefix() {
    assert_eq!(lead_source(""), "site-");
}
