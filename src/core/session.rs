use std::{
    collections::HashSet,
    time::{
        Duration,
        Instant,
    },
};

use super::models::Flashcard;

/// Delay between un-flipping and actually moving the cursor, so the
/// outgoing card's back face is never visible on the incoming card.
pub const FLIP_GUARD_DELAY: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    Front,
    Back,
}

/// A cursor move waiting out the flip guard. A newer navigation action
/// replaces it, so stale moves never fire out of order.
#[derive(Debug, Clone, Copy)]
struct PendingMove {
    target: usize,
    fire_at: Instant,
}

/// Everything the learn page can ask of the session, as plain data.
#[derive(Debug, Clone)]
pub enum SessionAction {
    LoadDeck(Vec<Flashcard>),
    SetBookmarkedOnly(bool),
    Next,
    Previous,
    Flip,
    SetDetailOpen(bool),
    MarkKnown(String),
    MarkBookmarkedKnown(String),
    MarkUnknown(String),
    ToggleBookmark(String),
    RollbackBookmark(String),
}

/// Sequential review over a deck of flashcards: cursor, flip state and the
/// per-card known/unknown/bookmarked classification. The session performs no
/// I/O and holds no timers; deferred moves carry a deadline that `poll`
/// applies, so the whole machine is drivable with a synthetic clock.
pub struct StudySession {
    cards: Vec<Flashcard>,
    bookmarked_cards: Vec<Flashcard>,
    bookmarked_only: bool,
    cursor: usize,
    face: CardFace,
    detail_open: bool,
    known: HashSet<String>,
    bookmarked_known: HashSet<String>,
    unknown: HashSet<String>,
    pending_move: Option<PendingMove>,
}

impl StudySession {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            bookmarked_cards: Vec::new(),
            bookmarked_only: false,
            cursor: 0,
            face: CardFace::Front,
            detail_open: false,
            known: HashSet::new(),
            bookmarked_known: HashSet::new(),
            unknown: HashSet::new(),
            pending_move: None,
        }
    }

    pub fn apply(&mut self, action: SessionAction, now: Instant) {
        match action {
            SessionAction::LoadDeck(cards) => self.load_deck(cards),
            SessionAction::SetBookmarkedOnly(flag) => self.set_bookmarked_only(flag),
            SessionAction::Next => self.move_cursor(self.cursor + 1, now),
            SessionAction::Previous => {
                self.move_cursor(self.cursor.saturating_sub(1), now)
            }
            SessionAction::Flip => self.flip(),
            SessionAction::SetDetailOpen(flag) => self.detail_open = flag,
            SessionAction::MarkKnown(id) => self.mark_known(id),
            SessionAction::MarkBookmarkedKnown(id) => self.mark_bookmarked_known(id),
            SessionAction::MarkUnknown(id) => self.mark_unknown(id),
            SessionAction::ToggleBookmark(id) | SessionAction::RollbackBookmark(id) => {
                self.flip_bookmark(&id)
            }
        }
    }

    /// Apply a due deferred move. Returns true when the cursor changed so the
    /// caller can repaint. Call once per frame.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(pending) = self.pending_move else {
            return false;
        };
        if now < pending.fire_at {
            return false;
        }

        self.pending_move = None;
        let len = self.deck().len();
        if len == 0 {
            self.cursor = 0;
        } else {
            self.cursor = pending.target.min(len - 1);
        }
        true
    }

    /// Time until the pending move fires, if one is scheduled.
    pub fn pending_delay(&self, now: Instant) -> Option<Duration> {
        self.pending_move.map(|p| p.fire_at.saturating_duration_since(now))
    }

    /// Replaces the full card list and re-derives the bookmarked subset.
    /// Cursor and flip reset; classification sets live for the lifetime of
    /// the session object and are left alone.
    fn load_deck(&mut self, cards: Vec<Flashcard>) {
        self.bookmarked_cards = cards.iter().filter(|c| c.bookmarked).cloned().collect();
        self.cards = cards;
        self.cursor = 0;
        self.face = CardFace::Front;
        self.pending_move = None;
    }

    fn set_bookmarked_only(&mut self, flag: bool) {
        self.bookmarked_only = flag;
        self.cursor = 0;
        self.face = CardFace::Front;
        self.pending_move = None;
    }

    /// Callers disable navigation at the deck bounds; a target past the end
    /// is a caller bug, not a session error.
    fn move_cursor(&mut self, target: usize, now: Instant) {
        self.pending_move = None;
        if self.face == CardFace::Back {
            self.face = CardFace::Front;
            self.pending_move =
                Some(PendingMove { target, fire_at: now + FLIP_GUARD_DELAY });
        } else {
            self.cursor = target;
        }
    }

    /// Flip is suppressed while the detail panel is open.
    fn flip(&mut self) {
        if self.detail_open {
            return;
        }
        self.face = match self.face {
            CardFace::Front => CardFace::Back,
            CardFace::Back => CardFace::Front,
        };
    }

    fn mark_known(&mut self, id: String) {
        self.unknown.remove(&id);
        self.known.insert(id);
    }

    /// Membership is only granted to cards in the bookmarked subset, but the
    /// unknown set is cleared either way.
    fn mark_bookmarked_known(&mut self, id: String) {
        self.unknown.remove(&id);
        if self.bookmarked_cards.iter().any(|c| c.flashcard_id == id) {
            self.bookmarked_known.insert(id);
        }
    }

    /// `bookmarked_known` is deliberately not cleared here; only `known` is.
    fn mark_unknown(&mut self, id: String) {
        self.known.remove(&id);
        self.unknown.insert(id);
    }

    /// Optimistic local half of a bookmark toggle: flips the flag on the
    /// card and adds it to / removes it from the bookmarked subset. The
    /// caller issues the PATCH separately and, under the rollback policy,
    /// applies the same flip again to undo.
    fn flip_bookmark(&mut self, id: &str) {
        let Some(card) = self.cards.iter_mut().find(|c| c.flashcard_id == id) else {
            return;
        };
        card.bookmarked = !card.bookmarked;

        if card.bookmarked {
            let card = card.clone();
            if !self.bookmarked_cards.iter().any(|c| c.flashcard_id == id) {
                self.bookmarked_cards.push(card);
            }
        } else {
            self.bookmarked_cards.retain(|c| c.flashcard_id != id);
        }

        self.clamp_cursor();
    }

    /// Un-bookmarking the current card in bookmarked-only mode shrinks the
    /// active deck under the cursor; pull cursor and any pending move back
    /// into bounds.
    fn clamp_cursor(&mut self) {
        let len = self.deck().len();
        if len == 0 {
            self.cursor = 0;
            self.pending_move = None;
            return;
        }
        self.cursor = self.cursor.min(len - 1);
        if let Some(pending) = &mut self.pending_move {
            pending.target = pending.target.min(len - 1);
        }
    }

    pub fn deck(&self) -> &[Flashcard] {
        if self.bookmarked_only {
            &self.bookmarked_cards
        } else {
            &self.cards
        }
    }

    pub fn current(&self) -> Option<&Flashcard> {
        self.deck().get(self.cursor)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn face(&self) -> CardFace {
        self.face
    }

    pub fn bookmarked_only(&self) -> bool {
        self.bookmarked_only
    }

    pub fn detail_open(&self) -> bool {
        self.detail_open
    }

    pub fn is_known(&self, id: &str) -> bool {
        self.known.contains(id)
    }

    pub fn is_unknown(&self, id: &str) -> bool {
        self.unknown.contains(id)
    }

    /// Percentage through the active deck, 0 when it is empty.
    pub fn progress(&self) -> f32 {
        let len = self.deck().len();
        if len == 0 {
            return 0.0;
        }
        ((self.cursor + 1) as f32 / len as f32) * 100.0
    }

    /// The displayed known count depends on the active mode: the bookmarked
    /// tally in bookmarked-only study, the plain one otherwise.
    pub fn known_count(&self) -> usize {
        if self.bookmarked_only {
            self.bookmarked_known.len()
        } else {
            self.known.len()
        }
    }
}

impl Default for StudySession {
    fn default() -> Self {
        Self::new()
    }
}
