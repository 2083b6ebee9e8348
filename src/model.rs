use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u64);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub title: String,
}

/// The three fixed columns, in board order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Todo,
    InProgress,
    Done,
}

impl ColumnKind {
    pub const ALL: [ColumnKind; 3] = [ColumnKind::Todo, ColumnKind::InProgress, ColumnKind::Done];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            ColumnKind::Todo => "To Do",
            ColumnKind::InProgress => "In Progress",
            ColumnKind::Done => "Done",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Clone, Debug)]
pub struct Column {
    kind: ColumnKind,
    pub(crate) cards: Vec<Card>,
}

impl Column {
    pub(crate) fn new(kind: ColumnKind) -> Self {
        Self {
            kind,
            cards: Vec::new(),
        }
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_kinds_are_in_board_order() {
        let titles: Vec<_> = ColumnKind::ALL.iter().map(|k| k.title()).collect();

        assert_eq!(titles, ["To Do", "In Progress", "Done"]);
        for (i, k) in ColumnKind::ALL.iter().enumerate() {
            assert_eq!(k.index(), i);
            assert_eq!(ColumnKind::from_index(i), Some(*k));
        }
        assert_eq!(ColumnKind::from_index(3), None);
    }

    #[test]
    fn card_id_displays_with_hash() {
        assert_eq!(CardId(7).to_string(), "#7");
    }
}
