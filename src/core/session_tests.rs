#[cfg(test)]
mod tests {
    use std::time::Duration;
    use std::time::Instant;

    use crate::core::{
        models::Flashcard,
        session::{
            CardFace,
            SessionAction,
            StudySession,
            FLIP_GUARD_DELAY,
        },
    };

    fn card(id: &str, bookmarked: bool) -> Flashcard {
        Flashcard {
            flashcard_id: id.to_string(),
            front_text: format!("front {}", id),
            back_text: format!("back {}", id),
            detail: String::new(),
            bookmarked,
        }
    }

    fn session_with(cards: Vec<Flashcard>) -> (StudySession, Instant) {
        let now = Instant::now();
        let mut session = StudySession::new();
        session.apply(SessionAction::LoadDeck(cards), now);
        (session, now)
    }

    #[test]
    fn next_then_previous_returns_to_start() {
        let (mut session, now) = session_with(vec![card("a", false), card("b", false)]);

        session.apply(SessionAction::Next, now);
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.face(), CardFace::Front);

        session.apply(SessionAction::Previous, now);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.face(), CardFace::Front);
    }

    #[test]
    fn next_then_previous_returns_to_start_through_flips() {
        let (mut session, start) = session_with(vec![card("a", false), card("b", false)]);
        let mut now = start;

        session.apply(SessionAction::Flip, now);
        session.apply(SessionAction::Next, now);
        assert_eq!(session.face(), CardFace::Front);
        now += FLIP_GUARD_DELAY;
        assert!(session.poll(now));
        assert_eq!(session.cursor(), 1);

        session.apply(SessionAction::Flip, now);
        session.apply(SessionAction::Previous, now);
        assert_eq!(session.face(), CardFace::Front);
        now += FLIP_GUARD_DELAY;
        assert!(session.poll(now));
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn bookmark_mode_round_trip_resets_cursor() {
        let (mut session, now) =
            session_with(vec![card("a", true), card("b", false), card("c", true)]);

        session.apply(SessionAction::Next, now);
        session.apply(SessionAction::Next, now);
        assert_eq!(session.cursor(), 2);

        session.apply(SessionAction::SetBookmarkedOnly(true), now);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.deck().len(), 2);

        session.apply(SessionAction::Next, now);
        session.apply(SessionAction::SetBookmarkedOnly(false), now);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.deck().len(), 3);
    }

    #[test]
    fn switching_mode_discards_flip_and_pending_move() {
        let (mut session, now) = session_with(vec![card("a", true), card("b", true)]);

        session.apply(SessionAction::Flip, now);
        session.apply(SessionAction::Next, now);
        session.apply(SessionAction::SetBookmarkedOnly(true), now);
        assert_eq!(session.face(), CardFace::Front);

        assert!(!session.poll(now + FLIP_GUARD_DELAY));
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn known_and_unknown_are_mutually_exclusive() {
        let (mut session, now) = session_with(vec![card("x", false)]);

        session.apply(SessionAction::MarkKnown("x".to_string()), now);
        session.apply(SessionAction::MarkUnknown("x".to_string()), now);
        assert!(session.is_unknown("x"));
        assert!(!session.is_known("x"));

        session.apply(SessionAction::MarkUnknown("x".to_string()), now);
        session.apply(SessionAction::MarkKnown("x".to_string()), now);
        assert!(session.is_known("x"));
        assert!(!session.is_unknown("x"));
    }

    #[test]
    fn mark_known_is_idempotent() {
        let (mut session, now) = session_with(vec![card("x", false)]);

        session.apply(SessionAction::MarkKnown("x".to_string()), now);
        session.apply(SessionAction::MarkKnown("x".to_string()), now);
        assert_eq!(session.known_count(), 1);
    }

    #[test]
    fn progress_on_empty_and_single_card_decks() {
        let (session, _) = session_with(Vec::new());
        assert_eq!(session.progress(), 0.0);

        let (session, _) = session_with(vec![card("only", false)]);
        assert_eq!(session.progress(), 100.0);
    }

    #[test]
    fn flip_guard_defers_cursor_only_when_flipped() {
        let (mut session, start) =
            session_with(vec![card("a", false), card("b", false), card("c", false)]);
        let mut now = start;

        session.apply(SessionAction::MarkKnown("a".to_string()), now);
        assert_eq!(session.known_count(), 1);

        session.apply(SessionAction::Next, now);
        assert_eq!(session.cursor(), 1);

        session.apply(SessionAction::Flip, now);
        session.apply(SessionAction::Next, now);
        assert_eq!(session.face(), CardFace::Front);
        assert_eq!(session.cursor(), 1);

        now += Duration::from_millis(599);
        assert!(!session.poll(now));
        assert_eq!(session.cursor(), 1);

        now += Duration::from_millis(1);
        assert!(session.poll(now));
        assert_eq!(session.cursor(), 2);
    }

    #[test]
    fn newer_navigation_replaces_pending_move() {
        let (mut session, start) =
            session_with(vec![card("a", false), card("b", false), card("c", false)]);
        let mut now = start;

        session.apply(SessionAction::Flip, now);
        session.apply(SessionAction::Next, now);

        // Change of mind before the guard elapses: go back instead.
        now += Duration::from_millis(100);
        session.apply(SessionAction::Previous, now);
        assert_eq!(session.cursor(), 0);

        now += FLIP_GUARD_DELAY;
        assert!(!session.poll(now));
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn toggle_bookmark_is_optimistic_and_immediate() {
        let (mut session, now) = session_with(vec![card("a", false), card("b", false)]);

        session.apply(SessionAction::ToggleBookmark("a".to_string()), now);
        assert!(session.deck()[0].bookmarked);

        session.apply(SessionAction::SetBookmarkedOnly(true), now);
        assert_eq!(session.deck().len(), 1);
        assert_eq!(session.deck()[0].flashcard_id, "a");
    }

    #[test]
    fn rollback_restores_the_previous_bookmark_state() {
        let (mut session, now) = session_with(vec![card("a", true)]);

        session.apply(SessionAction::ToggleBookmark("a".to_string()), now);
        assert!(!session.deck()[0].bookmarked);

        session.apply(SessionAction::RollbackBookmark("a".to_string()), now);
        assert!(session.deck()[0].bookmarked);
    }

    #[test]
    fn unbookmarking_current_card_clamps_cursor() {
        let (mut session, now) = session_with(vec![card("a", true), card("b", true)]);

        session.apply(SessionAction::SetBookmarkedOnly(true), now);
        session.apply(SessionAction::Next, now);
        assert_eq!(session.cursor(), 1);

        session.apply(SessionAction::ToggleBookmark("b".to_string()), now);
        assert_eq!(session.deck().len(), 1);
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn bookmarked_known_requires_membership_but_always_clears_unknown() {
        let (mut session, now) = session_with(vec![card("a", true), card("b", false)]);

        session.apply(SessionAction::MarkUnknown("b".to_string()), now);
        session.apply(SessionAction::MarkBookmarkedKnown("b".to_string()), now);
        assert!(!session.is_unknown("b"));

        session.apply(SessionAction::MarkBookmarkedKnown("a".to_string()), now);
        session.apply(SessionAction::SetBookmarkedOnly(true), now);
        assert_eq!(session.known_count(), 1);
    }

    #[test]
    fn unknown_does_not_clear_bookmarked_known() {
        let (mut session, now) = session_with(vec![card("a", true)]);

        session.apply(SessionAction::MarkBookmarkedKnown("a".to_string()), now);
        session.apply(SessionAction::MarkUnknown("a".to_string()), now);

        session.apply(SessionAction::SetBookmarkedOnly(true), now);
        assert_eq!(session.known_count(), 1);
        assert!(session.is_unknown("a"));
    }

    #[test]
    fn flip_is_suppressed_while_detail_panel_is_open() {
        let (mut session, now) = session_with(vec![card("a", false)]);

        session.apply(SessionAction::SetDetailOpen(true), now);
        session.apply(SessionAction::Flip, now);
        assert_eq!(session.face(), CardFace::Front);

        session.apply(SessionAction::SetDetailOpen(false), now);
        session.apply(SessionAction::Flip, now);
        assert_eq!(session.face(), CardFace::Back);
    }

    #[test]
    fn reloading_the_deck_keeps_classifications() {
        let (mut session, now) = session_with(vec![card("a", false)]);

        session.apply(SessionAction::MarkKnown("a".to_string()), now);
        session.apply(SessionAction::LoadDeck(vec![card("a", false), card("b", false)]), now);

        assert_eq!(session.cursor(), 0);
        assert!(session.is_known("a"));
    }
}
