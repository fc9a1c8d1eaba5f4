use super::*;

fn config_with_suggestions() -> SiteConfig {
    SiteConfig::from_parts(
        Some("Yuca Resto".to_owned()),
        Some("Tu es le serveur.".to_owned()),
        Some("Bienvenue chez Yuca !".to_owned()),
        Some(vec!["Menu".to_owned(), "Horaires".to_owned()]),
        None,
    )
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn chat_state_default_is_closed_and_empty() {
    let state = ChatState::default();
    assert!(!state.is_open);
    assert!(!state.in_flight);
    assert!(state.turns.is_empty());
}

// =============================================================
// toggle_open / seeding
// =============================================================

#[test]
fn first_open_seeds_exactly_one_welcome_turn() {
    let mut state = ChatState::default();
    state.toggle_open(&config_with_suggestions());

    assert!(state.is_open);
    assert_eq!(state.turns.len(), 1);
    let welcome = &state.turns[0];
    assert_eq!(welcome.role, ChatRole::Assistant);
    assert_eq!(welcome.content, "Bienvenue chez Yuca !");
    assert_eq!(welcome.suggestions, Some(vec!["Menu".to_owned(), "Horaires".to_owned()]));
}

#[test]
fn reopening_never_reseeds() {
    let config = config_with_suggestions();
    let mut state = ChatState::default();
    state.toggle_open(&config);
    state.toggle_open(&config);
    state.toggle_open(&config);

    assert!(state.is_open);
    assert_eq!(state.turns.len(), 1);
}

#[test]
fn opening_with_existing_turns_seeds_nothing() {
    let config = config_with_suggestions();
    let mut state = ChatState::default();
    state.push_user("Bonjour".to_owned());
    state.toggle_open(&config);

    assert_eq!(state.turns.len(), 1);
    assert_eq!(state.turns[0].role, ChatRole::User);
}

#[test]
fn welcome_without_configured_suggestions_renders_no_quick_replies() {
    let config = SiteConfig::from_parts(None, None, None, Some(Vec::new()), None);
    let mut state = ChatState::default();
    state.toggle_open(&config);

    assert_eq!(state.turns[0].suggestions, None);
}

// =============================================================
// Turns
// =============================================================

#[test]
fn turns_append_in_call_order() {
    let mut state = ChatState::default();
    state.push_user("Bonjour".to_owned());
    state.push_assistant("Bonjour !".to_owned(), None);
    state.push_user("Le menu ?".to_owned());

    let roles: Vec<ChatRole> = state.turns.iter().map(|t| t.role).collect();
    assert_eq!(roles, vec![ChatRole::User, ChatRole::Assistant, ChatRole::User]);
}

#[test]
fn turn_ids_are_unique() {
    let mut state = ChatState::default();
    state.push_user("a".to_owned());
    state.push_user("b".to_owned());
    assert_ne!(state.turns[0].id, state.turns[1].id);
}

#[test]
fn assistant_turn_normalizes_empty_suggestions() {
    let turn = ChatTurn::assistant("Ok".to_owned(), Some(Vec::new()));
    assert_eq!(turn.suggestions, None);
}

#[test]
fn fallback_turn_offers_fixed_contact_methods() {
    let turn = ChatTurn::fallback();
    assert_eq!(turn.role, ChatRole::Assistant);
    assert_eq!(turn.content, FALLBACK_TEXT);
    assert_eq!(turn.suggestions, Some(vec!["Appeler".to_owned(), "Email".to_owned()]));
}

// =============================================================
// begin_exchange / finish_exchange
// =============================================================

#[test]
fn begin_exchange_appends_user_turn_and_sets_in_flight() {
    let mut state = ChatState::default();
    let outgoing = state.begin_exchange("Bonjour".to_owned(), "prompt").unwrap();

    assert!(state.in_flight);
    assert_eq!(state.turns.len(), 1);
    assert_eq!(state.turns[0].role, ChatRole::User);
    assert_eq!(outgoing.len(), 2);
    assert_eq!(outgoing[0].role, "system");
    assert_eq!(outgoing[1].content, "Bonjour");
}

#[test]
fn begin_exchange_while_in_flight_is_dropped() {
    let mut state = ChatState::default();
    state.begin_exchange("première".to_owned(), "prompt").unwrap();
    let second = state.begin_exchange("seconde".to_owned(), "prompt");

    assert!(second.is_none());
    assert_eq!(state.turns.len(), 1);
}

#[test]
fn finish_exchange_appends_cleaned_reply_and_clears_flag() {
    let mut state = ChatState::default();
    state.begin_exchange("Bonjour".to_owned(), "prompt").unwrap();
    state.finish_exchange(Ok(BotReply {
        text: "Bonjour  merci".to_owned(),
        suggestions: Some(vec!["Appeler".to_owned(), "Email".to_owned()]),
    }));

    assert!(!state.in_flight);
    let reply = state.turns.last().unwrap();
    assert_eq!(reply.role, ChatRole::Assistant);
    assert_eq!(reply.content, "Bonjour  merci");
    assert_eq!(reply.suggestions, Some(vec!["Appeler".to_owned(), "Email".to_owned()]));
}

#[test]
fn finish_exchange_maps_any_error_to_the_fallback_turn() {
    let mut state = ChatState::default();
    state.begin_exchange("Bonjour".to_owned(), "prompt").unwrap();
    state.finish_exchange(Err("chat request failed: 500".to_owned()));

    assert!(!state.in_flight);
    let reply = state.turns.last().unwrap();
    assert_eq!(reply.content, FALLBACK_TEXT);
    assert_eq!(reply.suggestions, Some(vec!["Appeler".to_owned(), "Email".to_owned()]));
}

#[test]
fn exchange_can_restart_after_completion() {
    let mut state = ChatState::default();
    state.begin_exchange("une".to_owned(), "prompt").unwrap();
    state.finish_exchange(Ok(BotReply { text: "ok".to_owned(), suggestions: None }));
    let outgoing = state.begin_exchange("deux".to_owned(), "prompt").unwrap();

    // system + user + assistant + user
    assert_eq!(outgoing.len(), 4);
    let system_count = outgoing.iter().filter(|m| m.role == "system").count();
    assert_eq!(system_count, 1);
}

// =============================================================
// outgoing_messages
// =============================================================

#[test]
fn outgoing_starts_with_exactly_one_system_message() {
    let config = config_with_suggestions();
    let mut state = ChatState::default();
    state.toggle_open(&config);
    state.push_user("Bonjour".to_owned());
    state.push_assistant("Bonjour !".to_owned(), None);
    state.push_user("Le menu ?".to_owned());

    let messages = state.outgoing_messages(&config.chatbot_prompt);
    assert_eq!(messages[0].role, "system");
    assert_eq!(messages[0].content, "Tu es le serveur.");
    let system_count = messages.iter().filter(|m| m.role == "system").count();
    assert_eq!(system_count, 1);
}

#[test]
fn outgoing_maps_every_turn_in_order() {
    let mut state = ChatState::default();
    state.push_user("question".to_owned());
    state.push_assistant("réponse".to_owned(), Some(vec!["Appeler".to_owned()]));

    let messages = state.outgoing_messages("prompt");
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].role, "user");
    assert_eq!(messages[1].content, "question");
    assert_eq!(messages[2].role, "assistant");
    assert_eq!(messages[2].content, "réponse");
}

#[test]
fn outgoing_reads_the_prompt_fresh_each_call() {
    let state = ChatState::default();
    assert_eq!(state.outgoing_messages("premier")[0].content, "premier");
    assert_eq!(state.outgoing_messages("second")[0].content, "second");
}

#[test]
fn outgoing_with_empty_transcript_is_just_the_system_message() {
    let state = ChatState::default();
    assert_eq!(state.outgoing_messages("prompt").len(), 1);
}
