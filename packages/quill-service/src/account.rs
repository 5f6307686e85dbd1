use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{QuillService, Result};
use quill_storage::account;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ClearAccountResponse {
	pub notebooks_deleted: u64,
	pub tags_deleted: u64,
	pub templates_deleted: u64,
}

impl QuillService {
	/// Erases every row the owner has, in one transaction. Idempotent: a
	/// second call succeeds with zero deletions.
	pub async fn clear_account(&self, owner: Uuid) -> Result<ClearAccountResponse> {
		let mut tx = self.db.pool.begin().await?;
		let counts = account::clear_user_data(&mut tx, owner).await?;

		tx.commit().await?;

		tracing::info!(
			%owner,
			notebooks = counts.notebooks,
			tags = counts.tags,
			templates = counts.templates,
			"Cleared account data."
		);

		Ok(ClearAccountResponse {
			notebooks_deleted: counts.notebooks,
			tags_deleted: counts.tags,
			templates_deleted: counts.templates,
		})
	}
}
