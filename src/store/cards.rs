use super::StateStore;
use crate::domain::{CardId, CardUpdate, ListId};
use crate::error::Result;
use crate::render::RenderScope;
use crate::storage::Storage;
use tracing::info;

impl<S: Storage> StateStore<S> {
    /// Appends a card with the given title to a list of the active board
    pub async fn add_card(&mut self, list_id: &ListId, title: &str) -> Result<CardId> {
        let id = self
            .commit("add_card", RenderScope::Board, |state| {
                state.active_board_mut()?.add_card(list_id, title)
            })
            .await?;
        info!(card_id = %id, list_id = %list_id, "created card");
        Ok(id)
    }

    /// Applies a partial update to a card.
    ///
    /// A title that trims to empty keeps the previous title.
    pub async fn update_card(
        &mut self,
        card_id: &CardId,
        list_id: &ListId,
        update: CardUpdate,
    ) -> Result<()> {
        self.commit("update_card", RenderScope::Board, |state| {
            state
                .active_board_mut()?
                .update_card(list_id, card_id, update)
        })
        .await?;
        info!(card_id = %card_id, "updated card");
        Ok(())
    }

    pub async fn delete_card(&mut self, card_id: &CardId, list_id: &ListId) -> Result<()> {
        self.commit("delete_card", RenderScope::Board, |state| {
            state.active_board_mut()?.delete_card(list_id, card_id)
        })
        .await?;
        info!(card_id = %card_id, list_id = %list_id, "deleted card");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use crate::domain::{CardUpdate, Label, DEFAULT_LABEL_COLOR};
    use crate::error::{EntityKind, TaskFlowError};
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_add_card_defaults() {
        let (mut store, _) = memory_store().await;
        let list = store.add_list("To Do").await.unwrap();
        let card = store
            .add_card(&list, "  Design the homepage mockup ")
            .await
            .unwrap();

        let stored = store.find_card(&card, &list).unwrap();
        assert_eq!(stored.title, "Design the homepage mockup");
        assert!(stored.description.is_empty());
        assert!(stored.labels.is_empty());
        assert!(stored.due_date.is_none());
        assert_eq!(persisted(&store).await, *store.state());
    }

    #[tokio::test]
    async fn test_add_card_rejections() {
        let (mut store, renders) = memory_store().await;
        let list = store.add_list("To Do").await.unwrap();
        renders.lock().unwrap().clear();

        assert!(matches!(
            store.add_card(&list, "   ").await,
            Err(TaskFlowError::Validation { .. })
        ));
        assert!(matches!(
            store.add_card(&"list-missing".into(), "Title").await,
            Err(TaskFlowError::NotFound {
                kind: EntityKind::List,
                ..
            })
        ));
        assert_eq!(store.active_board().unwrap().card_count(), 0);
        assert!(renders.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_card_in_other_board_is_not_found() {
        let (mut store, _) = memory_store().await;
        let list = store.add_list("To Do").await.unwrap();
        let card = store.add_card(&list, "Hidden").await.unwrap();
        store.add_board("Elsewhere").await.unwrap();

        assert!(store.find_card(&card, &list).is_none());
        assert!(matches!(
            store.delete_card(&card, &list).await,
            Err(TaskFlowError::NotFound {
                kind: EntityKind::List,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_update_card_fields() {
        let (mut store, _) = memory_store().await;
        let list = store.add_list("To Do").await.unwrap();
        let card = store.add_card(&list, "Draft").await.unwrap();

        let due = NaiveDate::from_ymd_opt(2024, 12, 24);
        store
            .update_card(
                &card,
                &list,
                CardUpdate::new()
                    .title("Final")
                    .description("Ship before the holidays")
                    .due_date(due)
                    .label_text("Urgent, Work", DEFAULT_LABEL_COLOR),
            )
            .await
            .unwrap();

        let stored = store.find_card(&card, &list).unwrap();
        assert_eq!(stored.title, "Final");
        assert_eq!(stored.description, "Ship before the holidays");
        assert_eq!(stored.due_date, due);
        assert_eq!(
            stored.labels,
            vec![
                Label::new("Urgent", DEFAULT_LABEL_COLOR),
                Label::new("Work", DEFAULT_LABEL_COLOR)
            ]
        );
        assert_eq!(persisted(&store).await, *store.state());
    }

    #[tokio::test]
    async fn test_update_card_blank_title_keeps_previous() {
        let (mut store, _) = memory_store().await;
        let list = store.add_list("To Do").await.unwrap();
        let card = store.add_card(&list, "Keep me").await.unwrap();

        store
            .update_card(&card, &list, CardUpdate::new().title("  ").description("new"))
            .await
            .unwrap();

        let stored = store.find_card(&card, &list).unwrap();
        assert_eq!(stored.title, "Keep me");
        assert_eq!(stored.description, "new");
    }

    #[tokio::test]
    async fn test_update_missing_card() {
        let (mut store, _) = memory_store().await;
        let list = store.add_list("To Do").await.unwrap();
        let before = store.state().clone();

        let result = store
            .update_card(&"card-missing".into(), &list, CardUpdate::new().title("X"))
            .await;

        assert!(matches!(
            result,
            Err(TaskFlowError::NotFound {
                kind: EntityKind::Card,
                ..
            })
        ));
        assert_eq!(store.state(), &before);
    }

    #[tokio::test]
    async fn test_delete_card() {
        let (mut store, _) = memory_store().await;
        let list = store.add_list("To Do").await.unwrap();
        let a = store.add_card(&list, "A").await.unwrap();
        let b = store.add_card(&list, "B").await.unwrap();
        let c = store.add_card(&list, "C").await.unwrap();

        store.delete_card(&b, &list).await.unwrap();

        let ids: Vec<_> = store.active_board().unwrap().lists[0]
            .cards
            .iter()
            .map(|card| card.id.clone())
            .collect();
        assert_eq!(ids, vec![a, c]);
        assert!(store.delete_card(&b, &list).await.is_err());
    }
}
