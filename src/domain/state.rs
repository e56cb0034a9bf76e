use crate::domain::board::Board;
use crate::domain::drag::DragDescriptor;
use crate::domain::id::BoardId;
use crate::domain::require_text;
use crate::error::{EntityKind, Result, TaskFlowError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Root of the board tree for one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default)]
    pub boards: Vec<Board>,
    #[serde(default)]
    pub active_board_id: Option<BoardId>,
    /// In-progress drag; never persisted
    #[serde(skip)]
    pub dragged_element: Option<DragDescriptor>,
}

impl AppState {
    /// Creates a state holding a single empty board, which is active
    pub fn seeded(board_name: &str) -> Self {
        let board = Board::new(BoardId::generate(), board_name.to_string());
        Self {
            active_board_id: Some(board.id.clone()),
            boards: vec![board],
            dragged_element: None,
        }
    }

    pub fn find_board(&self, board_id: &BoardId) -> Option<&Board> {
        self.boards.iter().find(|board| &board.id == board_id)
    }

    fn find_board_mut(&mut self, board_id: &BoardId) -> Option<&mut Board> {
        self.boards.iter_mut().find(|board| &board.id == board_id)
    }

    /// The board whose id equals `active_board_id`
    pub fn active_board(&self) -> Option<&Board> {
        self.find_board(self.active_board_id.as_ref()?)
    }

    /// Mutable access to the active board, or `NoActiveBoard`
    pub fn active_board_mut(&mut self) -> Result<&mut Board> {
        let id = self
            .active_board_id
            .clone()
            .ok_or(TaskFlowError::NoActiveBoard)?;
        self.find_board_mut(&id).ok_or(TaskFlowError::NoActiveBoard)
    }

    /// Appends a board and makes it active
    pub fn add_board(&mut self, name: &str) -> Result<BoardId> {
        let name = require_text(name, "Board name")?;
        let board = Board::new(BoardId::generate(), name);
        let id = board.id.clone();
        self.boards.push(board);
        self.active_board_id = Some(id.clone());
        Ok(id)
    }

    pub fn rename_board(&mut self, board_id: &BoardId, name: &str) -> Result<()> {
        let board = self
            .find_board_mut(board_id)
            .ok_or_else(|| TaskFlowError::not_found(EntityKind::Board, board_id))?;
        board.name = require_text(name, "Board name")?;
        Ok(())
    }

    /// Removes a board with everything it owns.
    ///
    /// Deleting the active board activates the first remaining board, or
    /// nothing when none remain.
    pub fn delete_board(&mut self, board_id: &BoardId) -> Result<Board> {
        let index = self
            .boards
            .iter()
            .position(|board| &board.id == board_id)
            .ok_or_else(|| TaskFlowError::not_found(EntityKind::Board, board_id))?;
        let removed = self.boards.remove(index);
        if self.active_board_id.as_ref() == Some(board_id) {
            self.active_board_id = self.boards.first().map(|board| board.id.clone());
        }
        Ok(removed)
    }

    pub fn set_active_board(&mut self, board_id: &BoardId) -> Result<()> {
        if self.find_board(board_id).is_none() {
            return Err(TaskFlowError::not_found(EntityKind::Board, board_id));
        }
        self.active_board_id = Some(board_id.clone());
        Ok(())
    }

    /// Points `active_board_id` at an existing board, or clears it when there
    /// are no boards. Returns true when the field changed.
    pub fn repair_active_board(&mut self) -> bool {
        let valid = match &self.active_board_id {
            Some(id) => self.find_board(id).is_some(),
            None => self.boards.is_empty(),
        };
        if valid {
            return false;
        }
        self.active_board_id = self.boards.first().map(|board| board.id.clone());
        true
    }

    /// Verifies id uniqueness in every scope and that the active board exists
    pub fn check_integrity(&self) -> Result<()> {
        let mut board_ids = HashSet::new();
        for board in &self.boards {
            if !board_ids.insert(&board.id) {
                return Err(TaskFlowError::CorruptState(format!(
                    "duplicate board id {}",
                    board.id
                )));
            }
            let mut list_ids = HashSet::new();
            for list in &board.lists {
                if !list_ids.insert(&list.id) {
                    return Err(TaskFlowError::CorruptState(format!(
                        "duplicate list id {} in board {}",
                        list.id, board.id
                    )));
                }
                let mut card_ids = HashSet::new();
                for card in &list.cards {
                    if !card_ids.insert(&card.id) {
                        return Err(TaskFlowError::CorruptState(format!(
                            "duplicate card id {} in list {}",
                            card.id, list.id
                        )));
                    }
                }
            }
        }

        match &self.active_board_id {
            Some(id) if !board_ids.contains(id) => Err(TaskFlowError::CorruptState(format!(
                "active board {} does not exist",
                id
            ))),
            None if !self.boards.is_empty() => Err(TaskFlowError::CorruptState(
                "no active board while boards exist".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// Number of boards, lists and cards in the tree
    pub fn entity_count(&self) -> usize {
        self.boards
            .iter()
            .map(|board| 1 + board.lists.len() + board.card_count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::id::ListId;

    #[test]
    fn test_seeded_state() {
        let state = AppState::seeded("Welcome Board");
        assert_eq!(state.boards.len(), 1);
        assert_eq!(state.boards[0].name, "Welcome Board");
        assert!(state.boards[0].lists.is_empty());
        assert_eq!(state.active_board().unwrap().id, state.boards[0].id);
        assert!(state.check_integrity().is_ok());
    }

    #[test]
    fn test_add_board_becomes_active() {
        let mut state = AppState::seeded("Welcome Board");
        let id = state.add_board("  Project Phoenix ").unwrap();

        assert_eq!(state.boards.len(), 2);
        assert_eq!(state.active_board_id, Some(id.clone()));
        assert_eq!(state.find_board(&id).unwrap().name, "Project Phoenix");
    }

    #[test]
    fn test_add_board_rejects_blank_name() {
        let mut state = AppState::seeded("Welcome Board");
        let before = state.clone();

        assert!(matches!(
            state.add_board(""),
            Err(TaskFlowError::Validation { .. })
        ));
        assert!(state.add_board(" \t ").is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_rename_board() {
        let mut state = AppState::seeded("Welcome Board");
        let id = state.boards[0].id.clone();

        state.rename_board(&id, "Home").unwrap();
        assert_eq!(state.boards[0].name, "Home");

        assert!(state.rename_board(&id, "   ").is_err());
        assert_eq!(state.boards[0].name, "Home");

        assert!(matches!(
            state.rename_board(&BoardId::from("missing"), "X"),
            Err(TaskFlowError::NotFound {
                kind: EntityKind::Board,
                ..
            })
        ));
    }

    #[test]
    fn test_delete_active_board_activates_first_remaining() {
        let mut state = AppState::seeded("Welcome Board");
        let first = state.boards[0].id.clone();
        let second = state.add_board("Second").unwrap();
        let third = state.add_board("Third").unwrap();

        state.delete_board(&third).unwrap();
        assert_eq!(state.active_board_id, Some(first.clone()));

        state.set_active_board(&second).unwrap();
        state.delete_board(&first).unwrap();
        assert_eq!(state.active_board_id, Some(second));
    }

    #[test]
    fn test_delete_inactive_board_keeps_active() {
        let mut state = AppState::seeded("Welcome Board");
        let first = state.boards[0].id.clone();
        let second = state.add_board("Second").unwrap();

        state.delete_board(&first).unwrap();
        assert_eq!(state.active_board_id, Some(second));
    }

    #[test]
    fn test_delete_sole_board_clears_active() {
        let mut state = AppState::seeded("Welcome Board");
        let id = state.boards[0].id.clone();

        state.delete_board(&id).unwrap();
        assert!(state.boards.is_empty());
        assert!(state.active_board_id.is_none());
        assert!(state.active_board().is_none());
        assert!(matches!(
            state.active_board_mut(),
            Err(TaskFlowError::NoActiveBoard)
        ));
        assert!(state.check_integrity().is_ok());
    }

    #[test]
    fn test_delete_board_removes_owned_entities() {
        let mut state = AppState::seeded("Welcome Board");
        let keep_list = state.active_board_mut().unwrap().add_list("Keep").unwrap();
        state
            .active_board_mut()
            .unwrap()
            .add_card(&keep_list, "Stay")
            .unwrap();

        let doomed = state.add_board("Doomed").unwrap();
        let board = state.active_board_mut().unwrap();
        let l1 = board.add_list("L1").unwrap();
        let l2 = board.add_list("L2").unwrap();
        board.add_card(&l1, "A").unwrap();
        board.add_card(&l1, "B").unwrap();
        board.add_card(&l2, "C").unwrap();

        let before = state.entity_count();
        state.delete_board(&doomed).unwrap();

        // 1 board + 2 lists + 3 cards
        assert_eq!(before - state.entity_count(), 6);
        assert_eq!(state.entity_count(), 3);
    }

    #[test]
    fn test_set_active_board() {
        let mut state = AppState::seeded("Welcome Board");
        let first = state.boards[0].id.clone();
        state.add_board("Second").unwrap();

        state.set_active_board(&first).unwrap();
        assert_eq!(state.active_board_id, Some(first.clone()));

        assert!(state.set_active_board(&BoardId::from("missing")).is_err());
        assert_eq!(state.active_board_id, Some(first));
    }

    #[test]
    fn test_repair_active_board() {
        let mut state = AppState::seeded("Welcome Board");
        assert!(!state.repair_active_board());

        state.active_board_id = None;
        assert!(state.repair_active_board());
        assert_eq!(state.active_board_id, Some(state.boards[0].id.clone()));

        state.active_board_id = Some(BoardId::from("ghost"));
        assert!(state.repair_active_board());
        assert_eq!(state.active_board_id, Some(state.boards[0].id.clone()));

        let mut empty = AppState::default();
        empty.active_board_id = Some(BoardId::from("ghost"));
        assert!(empty.repair_active_board());
        assert!(empty.active_board_id.is_none());
    }

    #[test]
    fn test_check_integrity_detects_duplicates() {
        let mut state = AppState::seeded("Welcome Board");
        let board = state.active_board_mut().unwrap();
        let list = board.add_list("L").unwrap();
        let dup = board.lists[0].clone();
        board.lists.push(dup);
        assert!(matches!(
            state.check_integrity(),
            Err(TaskFlowError::CorruptState(_))
        ));

        let board = state.active_board_mut().unwrap();
        board.lists.pop();
        board.add_card(&list, "A").unwrap();
        let card = board.lists[0].cards[0].clone();
        board.lists[0].cards.push(card);
        assert!(state.check_integrity().is_err());
    }

    #[test]
    fn test_dragged_element_not_serialized() {
        let mut state = AppState::seeded("Welcome Board");
        state.dragged_element = Some(DragDescriptor::list(ListId::from("l1")));

        let json = serde_json::to_value(&state).unwrap();
        assert!(json.get("draggedElement").is_none());
        assert!(json.get("activeBoardId").is_some());

        let restored: AppState = serde_json::from_value(json).unwrap();
        assert!(restored.dragged_element.is_none());
        assert_eq!(restored.boards, state.boards);
    }

    mod properties {
        use super::*;
        use crate::domain::card::CardUpdate;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            AddBoard(String),
            DeleteBoard(usize),
            SetActive(usize),
            AddList(String),
            DeleteList(usize),
            AddCard(usize, String),
            UpdateCard(usize, String),
            DeleteCard(usize),
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            let name = "[ a-z]{0,4}";
            prop_oneof![
                name.prop_map(Op::AddBoard),
                (0usize..4).prop_map(Op::DeleteBoard),
                (0usize..4).prop_map(Op::SetActive),
                name.prop_map(Op::AddList),
                (0usize..4).prop_map(Op::DeleteList),
                ((0usize..4), name).prop_map(|(l, t)| Op::AddCard(l, t)),
                ((0usize..4), name).prop_map(|(l, t)| Op::UpdateCard(l, t)),
                (0usize..4).prop_map(Op::DeleteCard),
            ]
        }

        fn list_at(state: &AppState, index: usize) -> Option<ListId> {
            let board = state.active_board()?;
            board.lists.get(index).map(|list| list.id.clone())
        }

        // Ops address entities by position; out-of-range positions become
        // unknown ids so rejections are exercised too
        fn apply(state: &mut AppState, op: Op) -> Result<()> {
            let missing_list = || ListId::from("list-missing");
            match op {
                Op::AddBoard(name) => state.add_board(&name).map(drop),
                Op::DeleteBoard(i) => {
                    let id = state.boards.get(i).map(|b| b.id.clone());
                    state
                        .delete_board(&id.unwrap_or_else(|| "board-missing".into()))
                        .map(drop)
                }
                Op::SetActive(i) => {
                    let id = state.boards.get(i).map(|b| b.id.clone());
                    state.set_active_board(&id.unwrap_or_else(|| "board-missing".into()))
                }
                Op::AddList(name) => state.active_board_mut()?.add_list(&name).map(drop),
                Op::DeleteList(i) => {
                    let id = list_at(state, i).unwrap_or_else(missing_list);
                    state.active_board_mut()?.delete_list(&id).map(drop)
                }
                Op::AddCard(i, title) => {
                    let id = list_at(state, i).unwrap_or_else(missing_list);
                    state.active_board_mut()?.add_card(&id, &title).map(drop)
                }
                Op::UpdateCard(i, title) => {
                    let list = list_at(state, i).unwrap_or_else(missing_list);
                    let board = state.active_board_mut()?;
                    let card = board
                        .find_list(&list)
                        .and_then(|l| l.cards.first())
                        .map(|c| c.id.clone())
                        .unwrap_or_else(|| "card-missing".into());
                    board.update_card(&list, &card, CardUpdate::new().title(title))
                }
                Op::DeleteCard(i) => {
                    let list = list_at(state, i).unwrap_or_else(missing_list);
                    let board = state.active_board_mut()?;
                    let card = board
                        .find_list(&list)
                        .and_then(|l| l.cards.last())
                        .map(|c| c.id.clone())
                        .unwrap_or_else(|| "card-missing".into());
                    board.delete_card(&list, &card).map(drop)
                }
            }
        }

        proptest! {
            #[test]
            fn mutations_preserve_integrity(ops in proptest::collection::vec(op_strategy(), 0..40)) {
                let mut state = AppState::seeded("Welcome Board");
                for op in ops {
                    let before = state.clone();
                    if let Err(err) = apply(&mut state, op) {
                        prop_assert!(err.is_rejection());
                        prop_assert_eq!(&state, &before);
                    }
                    prop_assert!(state.check_integrity().is_ok());
                    for board in &state.boards {
                        prop_assert!(!board.name.trim().is_empty());
                        for list in &board.lists {
                            prop_assert!(!list.name.trim().is_empty());
                            for card in &list.cards {
                                prop_assert!(!card.title.trim().is_empty());
                            }
                        }
                    }
                }
            }
        }
    }
}
