use tracing::debug;

use crate::{
    board::Board,
    model::{Card, CardId, ColumnKind},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    CloseOrQuit,
    FocusLeft,
    FocusRight,
    SelectUp,
    SelectDown,
    MoveLeft,
    MoveRight,
    ToggleDetail,
    AddCard,
    EditCard,
    DeleteCard,
    Input(char),
    Backspace,
    Submit,
}

/// What a submitted prompt does with its buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptKind {
    Add { column: ColumnKind },
    Edit { column: ColumnKind, id: CardId },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub buffer: String,
}

pub struct App {
    pub board: Board,
    pub col: usize,
    pub row: usize,
    pub detail_open: bool,
    pub banner: Option<String>,
    pub prompt: Option<Prompt>,
}

impl App {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            col: 0,
            row: 0,
            detail_open: false,
            banner: None,
            prompt: None,
        }
    }

    fn clamp_index(idx: usize, delta: isize, max: usize) -> usize {
        if delta < 0 {
            idx.saturating_sub(delta.unsigned_abs())
        } else {
            (idx + delta as usize).min(max)
        }
    }

    pub fn column(&self) -> ColumnKind {
        ColumnKind::from_index(self.col).unwrap_or(ColumnKind::Todo)
    }

    fn col_len(&self) -> usize {
        self.board.column(self.column()).cards().len()
    }

    fn clamp_row(&mut self) {
        let len = self.col_len();
        self.row = if len == 0 { 0 } else { self.row.min(len - 1) };
    }

    fn dst_col(&self, dir: isize) -> Option<ColumnKind> {
        let dst = self.col.checked_add_signed(dir)?;
        ColumnKind::from_index(dst)
    }

    pub fn clamp(&mut self) {
        self.col = self.col.min(ColumnKind::ALL.len() - 1);
        self.clamp_row();
    }

    pub fn selected(&self) -> Option<&Card> {
        self.board.column(self.column()).cards().get(self.row)
    }

    pub fn focus(&mut self, delta: isize) {
        self.col = Self::clamp_index(self.col, delta, ColumnKind::ALL.len() - 1);
        self.clamp_row();
    }

    pub fn select(&mut self, delta: isize) {
        let len = self.col_len();
        if len == 0 {
            self.row = 0;
            return;
        }

        self.row = Self::clamp_index(self.row, delta, len - 1);
    }

    /// Applies one action. Returns true when the app should exit.
    pub fn apply(&mut self, a: Action) -> bool {
        if self.prompt.is_some() {
            self.apply_prompt(a);
            return false;
        }

        match a {
            Action::Quit => return true,
            Action::CloseOrQuit => {
                if self.detail_open {
                    self.detail_open = false;
                } else {
                    return true;
                }
            }
            Action::FocusLeft => self.focus(-1),
            Action::FocusRight => self.focus(1),
            Action::SelectUp => self.select(-1),
            Action::SelectDown => self.select(1),
            Action::MoveLeft => {
                self.move_selected(-1);
            }
            Action::MoveRight => {
                self.move_selected(1);
            }
            Action::ToggleDetail => self.detail_open = !self.detail_open,
            Action::AddCard => self.open_add(),
            Action::EditCard => self.open_edit(),
            Action::DeleteCard => {
                self.delete_selected();
            }
            Action::Input(_) | Action::Backspace | Action::Submit => {}
        }
        false
    }

    fn apply_prompt(&mut self, a: Action) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };

        match a {
            Action::Input(c) => prompt.buffer.push(c),
            Action::Backspace => {
                prompt.buffer.pop();
            }
            Action::Submit => self.submit(),
            Action::CloseOrQuit => {
                self.prompt = None;
                debug!("prompt cancelled");
            }
            _ => {}
        }
    }

    fn open_add(&mut self) {
        self.prompt = Some(Prompt {
            kind: PromptKind::Add {
                column: ColumnKind::Todo,
            },
            buffer: String::new(),
        });
    }

    fn open_edit(&mut self) {
        let column = self.column();
        let Some((id, title)) = self.selected().map(|c| (c.id, c.title.clone())) else {
            return;
        };

        self.prompt = Some(Prompt {
            kind: PromptKind::Edit { column, id },
            buffer: title,
        });
    }

    fn submit(&mut self) {
        let Some(Prompt { kind, buffer }) = self.prompt.take() else {
            return;
        };

        match kind {
            PromptKind::Add { column } => match self.board.add_card(column, &buffer) {
                Some(id) => {
                    self.focus_card(id);
                    self.banner = None;
                }
                None => self.banner = Some("Card title cannot be empty".to_string()),
            },
            PromptKind::Edit { column, id } => {
                if buffer.trim().is_empty() {
                    self.banner = Some("Card title cannot be empty".to_string());
                } else if self.board.edit_card(column, id, &buffer) {
                    self.banner = None;
                } else {
                    self.banner = Some(format!("Card {id} no longer exists"));
                }
            }
        }
    }

    pub fn delete_selected(&mut self) -> Option<Card> {
        let column = self.column();
        let id = self.selected()?.id;
        let card = self.board.delete_card(column, id);
        self.clamp_row();
        card
    }

    pub fn move_selected(&mut self, dir: isize) -> Option<(CardId, ColumnKind)> {
        self.clamp();

        let dst = self.dst_col(dir)?;
        let src = self.column();
        let id = self.selected()?.id;

        if !self.board.move_card(id, src, dst) {
            return None;
        }
        self.focus_card(id);

        Some((id, dst))
    }

    fn focus_card(&mut self, id: CardId) {
        if let Some((column, row)) = self.board.locate(id) {
            (self.col, self.row) = (column.index(), row);
        }
    }

    pub fn focus_first_non_empty(&mut self) {
        (self.col, self.row) = (first_non_empty_column(&self.board).unwrap_or(0), 0);
    }
}

fn first_non_empty_column(board: &Board) -> Option<usize> {
    board.columns().iter().position(|c| !c.cards().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.apply(Action::Input(c));
        }
    }

    fn todo_titles(app: &App) -> Vec<&str> {
        app.board
            .column(ColumnKind::Todo)
            .cards()
            .iter()
            .map(|c| c.title.as_str())
            .collect()
    }

    #[test]
    fn clamp_bounds_indices() {
        let mut app = App::new(Board::demo());
        (app.col, app.row) = (9, 9);
        app.clamp();

        assert_eq!((app.col, app.row), (2, 0));
    }

    #[test]
    fn focus_clamps_left_and_right() {
        let mut app = App::new(Board::demo());

        app.focus(-1);
        assert_eq!(app.col, 0);

        app.focus(10);
        assert_eq!(app.col, 2);
    }

    #[test]
    fn select_clamps_rows_and_handles_empty_column() {
        let mut app = App::new(Board::demo());

        app.select(10);
        assert_eq!(app.row, 1);

        app.select(-10);
        assert_eq!(app.row, 0);

        (app.col, app.row) = (1, 9);
        app.select(1);
        assert_eq!(app.row, 0);
    }

    #[test]
    fn add_prompt_appends_card_to_todo_and_focuses_it() {
        let mut app = App::new(Board::demo());
        app.focus(2);

        app.apply(Action::AddCard);
        type_str(&mut app, "New Taskx");
        app.apply(Action::Backspace);
        app.apply(Action::Submit);

        assert!(app.prompt.is_none());
        assert_eq!(todo_titles(&app), ["Task 1", "Task 2", "New Task"]);
        assert_eq!((app.col, app.row), (0, 2));
        assert_eq!(app.selected().unwrap().title, "New Task");
    }

    #[test]
    fn blank_add_is_rejected_with_banner() {
        let mut app = App::new(Board::demo());

        app.apply(Action::AddCard);
        type_str(&mut app, "   ");
        app.apply(Action::Submit);

        assert_eq!(app.board.card_count(), 2);
        assert!(app.banner.is_some());
        assert!(app.prompt.is_none());
    }

    #[test]
    fn prompt_swallows_normal_actions_and_escape_cancels() {
        let mut app = App::new(Board::demo());

        app.apply(Action::AddCard);
        assert!(!app.apply(Action::Quit));
        assert!(!app.apply(Action::DeleteCard));
        assert!(!app.apply(Action::CloseOrQuit));

        assert!(app.prompt.is_none());
        assert_eq!(app.board.card_count(), 2);
    }

    #[test]
    fn edit_prefills_title_and_replaces_in_place() {
        let mut app = App::new(Board::demo());
        let id = app.selected().unwrap().id;

        app.apply(Action::EditCard);
        assert_eq!(app.prompt.as_ref().unwrap().buffer, "Task 1");
        for _ in 0.."Task 1".len() {
            app.apply(Action::Backspace);
        }
        type_str(&mut app, "Write docs");
        app.apply(Action::Submit);

        assert_eq!(todo_titles(&app), ["Write docs", "Task 2"]);
        assert_eq!(app.selected().unwrap().id, id);
    }

    #[test]
    fn blank_edit_keeps_old_title() {
        let mut app = App::new(Board::demo());

        app.apply(Action::EditCard);
        app.prompt.as_mut().unwrap().buffer.clear();
        app.apply(Action::Submit);

        assert_eq!(todo_titles(&app), ["Task 1", "Task 2"]);
        assert!(app.banner.is_some());
    }

    #[test]
    fn edit_on_empty_column_opens_nothing() {
        let mut app = App::new(Board::demo());
        app.focus(1);

        app.apply(Action::EditCard);

        assert!(app.prompt.is_none());
    }

    #[test]
    fn delete_removes_selected_card_only() {
        let mut app = App::new(Board::demo());

        app.apply(Action::DeleteCard);

        assert_eq!(todo_titles(&app), ["Task 2"]);
        assert_eq!(app.board.card_count(), 1);
    }

    #[test]
    fn delete_last_row_clamps_selection() {
        let mut app = App::new(Board::demo());
        app.select(1);

        let card = app.delete_selected().unwrap();

        assert_eq!(card.title, "Task 2");
        assert_eq!(app.row, 0);
    }

    #[test]
    fn delete_in_empty_column_is_noop() {
        let mut app = App::new(Board::demo());
        app.focus(2);

        assert!(app.delete_selected().is_none());
        assert_eq!(app.board.card_count(), 2);
    }

    #[test]
    fn move_right_moves_card_and_updates_focus_to_new_card() {
        let mut app = App::new(Board::demo());
        let first = app.selected().unwrap().id;

        let (id, dst) = app.move_selected(1).unwrap();

        assert_eq!(id, first);
        assert_eq!(dst, ColumnKind::InProgress);
        assert_eq!((app.col, app.row), (1, 0));
        assert_eq!(app.board.column(ColumnKind::InProgress).cards()[0].id, first);
        assert_eq!(app.board.column(ColumnKind::Todo).cards().len(), 1);
    }

    #[test]
    fn move_out_of_bounds_is_none() {
        let mut app = App::new(Board::demo());

        assert!(app.move_selected(-1).is_none());
        app.focus(2);
        assert!(app.move_selected(1).is_none());
    }

    #[test]
    fn move_from_empty_column_is_none() {
        let mut app = App::new(Board::demo());
        (app.col, app.row) = (1, 0);

        assert!(app.move_selected(-1).is_none());
    }

    #[test]
    fn focus_first_non_empty_picks_first_column_with_cards() {
        let mut board = Board::new();
        board.add_card(ColumnKind::Done, "t2");
        let mut app = App::new(board);

        app.focus_first_non_empty();

        assert_eq!((app.col, app.row), (2, 0));
    }

    #[test]
    fn close_or_quit_closes_detail_first_then_quits() {
        let mut app = App::new(Board::demo());

        app.detail_open = true;
        assert!(!app.apply(Action::CloseOrQuit));
        assert!(!app.detail_open);

        assert!(app.apply(Action::CloseOrQuit));
    }
}
