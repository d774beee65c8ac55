use crate::modules::chat::{ChatSession, KnowledgeCard, StateChange, StateObserver};

/// Highlighted knowledge card in the chat log, the target of bookmark toggles.
#[derive(Debug, Default, Clone)]
pub struct CardCursor {
    cards: Vec<KnowledgeCard>,
    current_index: Option<usize>,
}

impl CardCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn current(&self) -> Option<&KnowledgeCard> {
        self.current_index.and_then(|i| self.cards.get(i))
    }

    pub fn clear(&mut self) {
        self.current_index = None;
    }

    pub fn cycle(&mut self, direction: i32) {
        if self.cards.is_empty() {
            return;
        }

        match self.current_index {
            None => {
                // Start from the newest card
                self.current_index = Some(if direction > 0 { self.cards.len() - 1 } else { 0 })
            }
            Some(index) => {
                let len = self.cards.len() as i32;
                let new_index = if direction > 0 {
                    (index as i32 + 1) % len
                } else {
                    (index as i32 - 1 + len) % len
                };
                self.current_index = Some(new_index as usize);
            }
        }
    }
}

impl StateObserver for CardCursor {
    fn observe(&mut self, change: StateChange, session: &ChatSession) {
        if change == StateChange::Messages {
            self.cards = session.cards().into_iter().cloned().collect();
            if self.current_index.is_some_and(|i| i >= self.cards.len()) {
                self.current_index = None;
            }
        }
    }
}
