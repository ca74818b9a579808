//! Packing operations for the Trip.

use jiff::Timestamp;
use tokio::task;

use super::Trip;
use crate::{
    access::Caller,
    db::Database,
    error::{Result, TripError},
    models::PackingState,
    params::{PackItem, TogglePackingItem},
};

impl Trip {
    pub async fn get_packing(&self, caller: &Caller) -> Result<PackingState> {
        caller.require_user()?;
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || Database::new(&db_path)?.get_packing_state())
            .await
            .map_err(TripError::join)?
    }

    /// Sets one checkbox.
    pub async fn put_packing_item(&self, caller: &Caller, params: &PackItem) -> Result<()> {
        let user = caller.require_user()?.to_string();
        params.validate()?;
        let list_key = params.list_key.trim().to_string();
        let (item_index, checked) = (params.item_index, params.checked);
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            Database::new(&db_path)?.set_packing_check(
                &list_key,
                item_index,
                checked,
                &user,
                Timestamp::now(),
            )
        })
        .await
        .map_err(TripError::join)?
    }

    /// Flips one checkbox of a compiled-in list. Returns the new state.
    pub async fn toggle_packing_item(
        &self,
        caller: &Caller,
        params: &TogglePackingItem,
    ) -> Result<bool> {
        let user = caller.require_user()?.to_string();
        params.validate()?;
        let list_key = params.list_key.trim().to_string();
        let item_index = params.item_index;
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            let checked = !db.get_packing_state()?.is_checked(&list_key, item_index);
            db.set_packing_check(&list_key, item_index, checked, &user, Timestamp::now())?;
            Ok::<_, TripError>(checked)
        })
        .await
        .map_err(TripError::join)?
    }
}
