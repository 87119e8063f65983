use std::sync::Once;

use sitechat_core::{
    update, AppState, ChatAnswer, Effect, MessageId, Msg, RequestFailure, Role, Source,
    PENDING_PLACEHOLDER,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

/// Submits a query and returns the placeholder id taken from the
/// emitted effect.
fn submit_query(state: AppState, query: &str) -> (AppState, MessageId) {
    let (state, effects) = update(state, Msg::QuerySubmitted(query.to_string()));
    let id = match effects.as_slice() {
        [Effect::PostChat { message_id, .. }] => *message_id,
        other => panic!("expected one PostChat effect, got {other:?}"),
    };
    (state, id)
}

#[test]
fn empty_query_is_ignored() {
    init_logging();
    let mut state = AppState::new();
    assert!(!state.consume_dirty());
    let before = state.clone();

    let (mut next, effects) = update(state, Msg::QuerySubmitted("   \t ".to_string()));

    assert!(effects.is_empty());
    assert!(next.view().transcript.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(next, before);
}

#[test]
fn query_appends_user_message_and_placeholder() {
    init_logging();
    let (next, placeholder_id) = submit_query(AppState::new(), " What is X? ");
    let view = next.view();

    assert_eq!(view.transcript.len(), 2);
    let user = &view.transcript[0];
    assert_eq!(user.role, Role::User);
    assert_eq!(user.text, "What is X?");
    assert!(!user.pending);

    let placeholder = &view.transcript[1];
    assert_eq!(placeholder.id, placeholder_id);
    assert_eq!(placeholder.role, Role::Assistant);
    assert_eq!(placeholder.text, PENDING_PLACEHOLDER);
    assert!(placeholder.pending);
}

#[test]
fn answer_replaces_placeholder_without_sources() {
    init_logging();
    let (state, placeholder_id) = submit_query(AppState::new(), "What is X?");

    let (next, effects) = update(
        state,
        Msg::AnswerArrived {
            message_id: placeholder_id,
            result: Ok(ChatAnswer {
                text: "X is Y".to_string(),
                sources: Vec::new(),
            }),
        },
    );
    let view = next.view();

    assert!(effects.is_empty());
    let answered = &view.transcript[1];
    assert_eq!(answered.text, "X is Y");
    assert!(!answered.pending);
    assert!(answered.sources.is_empty());
}

#[test]
fn answer_attaches_ranked_sources_with_fixed_score() {
    init_logging();
    let (state, placeholder_id) = submit_query(AppState::new(), "What is X?");

    let (next, _effects) = update(
        state,
        Msg::AnswerArrived {
            message_id: placeholder_id,
            result: Ok(ChatAnswer {
                text: "X is Y".to_string(),
                sources: vec![Source {
                    title: "Doc".to_string(),
                    score: 0.8345,
                    url: "http://a".to_string(),
                    content: "relevant excerpt".to_string(),
                }],
            }),
        },
    );
    let view = next.view();

    let sources = &view.transcript[1].sources;
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].rank, 1);
    assert_eq!(sources[0].title, "Doc");
    assert_eq!(sources[0].score_label, "0.83");
    assert_eq!(sources[0].url, "http://a");
    assert_eq!(sources[0].excerpt, "relevant excerpt");
}

#[test]
fn failure_replaces_placeholder_text() {
    init_logging();
    let (state, placeholder_id) = submit_query(AppState::new(), "What is X?");

    let (next, _effects) = update(
        state,
        Msg::AnswerArrived {
            message_id: placeholder_id,
            result: Err(RequestFailure {
                message: "Error getting response.".to_string(),
            }),
        },
    );
    let view = next.view();

    let failed = &view.transcript[1];
    assert_eq!(failed.text, "Error getting response.");
    assert!(!failed.pending);
    assert!(failed.sources.is_empty());
}

#[test]
fn concurrent_answers_resolve_their_own_placeholders() {
    init_logging();
    let (state, first_id) = submit_query(AppState::new(), "first?");
    let (state, second_id) = submit_query(state, "second?");
    assert_ne!(first_id, second_id);

    // Second answer arrives before the first.
    let (state, _) = update(
        state,
        Msg::AnswerArrived {
            message_id: second_id,
            result: Ok(ChatAnswer {
                text: "second answer".to_string(),
                sources: Vec::new(),
            }),
        },
    );
    let view = state.view();
    assert_eq!(view.transcript[1].text, PENDING_PLACEHOLDER);
    assert_eq!(view.transcript[3].text, "second answer");

    let (state, _) = update(
        state,
        Msg::AnswerArrived {
            message_id: first_id,
            result: Ok(ChatAnswer {
                text: "first answer".to_string(),
                sources: Vec::new(),
            }),
        },
    );
    let view = state.view();
    assert_eq!(view.transcript[1].text, "first answer");
    assert_eq!(view.transcript[3].text, "second answer");
}

#[test]
fn answer_for_unknown_id_is_ignored() {
    init_logging();
    let (mut state, placeholder_id) = submit_query(AppState::new(), "What is X?");
    assert!(state.consume_dirty());
    let before = state.clone();

    let (mut next, effects) = update(
        state,
        Msg::AnswerArrived {
            message_id: placeholder_id + 100,
            result: Ok(ChatAnswer {
                text: "orphan".to_string(),
                sources: Vec::new(),
            }),
        },
    );

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(next, before);
}

#[test]
fn resolved_placeholder_is_terminal() {
    init_logging();
    let (state, placeholder_id) = submit_query(AppState::new(), "What is X?");
    let (state, _) = update(
        state,
        Msg::AnswerArrived {
            message_id: placeholder_id,
            result: Ok(ChatAnswer {
                text: "X is Y".to_string(),
                sources: Vec::new(),
            }),
        },
    );

    // A late duplicate completion must not overwrite the answer.
    let (next, _) = update(
        state,
        Msg::AnswerArrived {
            message_id: placeholder_id,
            result: Err(RequestFailure {
                message: "late failure".to_string(),
            }),
        },
    );

    assert_eq!(next.view().transcript[1].text, "X is Y");
}
