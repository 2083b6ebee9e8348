use tracing::debug;

use crate::model::{Card, CardId, Column, ColumnKind};

/// Titles seeded into "To Do" on a fresh demo board.
pub const DEMO_CARDS: [&str; 2] = ["Task 1", "Task 2"];

/// In-memory board. Owns exactly one column per `ColumnKind`.
#[derive(Clone, Debug)]
pub struct Board {
    columns: [Column; 3],
    next_id: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            columns: ColumnKind::ALL.map(Column::new),
            next_id: 1,
        }
    }

    pub fn demo() -> Self {
        let mut board = Self::new();
        for title in DEMO_CARDS {
            board.add_card(ColumnKind::Todo, title);
        }
        board
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, kind: ColumnKind) -> &Column {
        &self.columns[kind.index()]
    }

    fn column_mut(&mut self, kind: ColumnKind) -> &mut Column {
        &mut self.columns[kind.index()]
    }

    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }

    pub fn locate(&self, id: CardId) -> Option<(ColumnKind, usize)> {
        self.columns
            .iter()
            .find_map(|c| c.position(id).map(|row| (c.kind(), row)))
    }

    /// Appends a card to the end of `column`. Blank titles are rejected.
    pub fn add_card(&mut self, column: ColumnKind, title: &str) -> Option<CardId> {
        let title = title.trim();
        if title.is_empty() {
            debug!(%column, "add_card ignored: empty title");
            return None;
        }

        let id = CardId(self.next_id);
        self.next_id += 1;
        self.column_mut(column).cards.push(Card {
            id,
            title: title.to_string(),
        });
        debug!(%column, %id, title, "card added");
        Some(id)
    }

    pub fn edit_card(&mut self, column: ColumnKind, id: CardId, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            debug!(%column, %id, "edit_card ignored: empty title");
            return false;
        }

        let Some(card) = self
            .column_mut(column)
            .cards
            .iter_mut()
            .find(|c| c.id == id)
        else {
            debug!(%column, %id, "edit_card ignored: no such card");
            return false;
        };

        card.title = title.to_string();
        debug!(%column, %id, title, "card edited");
        true
    }

    pub fn delete_card(&mut self, column: ColumnKind, id: CardId) -> Option<Card> {
        let col = self.column_mut(column);
        let Some(pos) = col.position(id) else {
            debug!(%column, %id, "delete_card ignored: no such card");
            return None;
        };

        let card = col.cards.remove(pos);
        debug!(%column, %id, "card deleted");
        Some(card)
    }

    /// Moves a card to the end of `to`. Returns false when nothing moved.
    pub fn move_card(&mut self, id: CardId, from: ColumnKind, to: ColumnKind) -> bool {
        if from == to {
            return false;
        }
        let Some(card) = self.delete_card(from, id) else {
            return false;
        };

        self.column_mut(to).cards.push(card);
        debug!(%id, %from, %to, "card moved");
        true
    }
}
