use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, QuillService, Result};
use quill_storage::search;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
	Note,
	Notebook,
	Tag,
	Template,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchItem {
	pub id: Uuid,
	pub name: String,
	pub kind: SearchKind,
	pub snippet: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResponse {
	pub results: Vec<SearchItem>,
}

impl QuillService {
	/// Substring search across the owner's notes, notebooks, tags, and
	/// templates, in that order. No relevance scoring. A blank term returns
	/// empty without touching the store.
	pub async fn search(&self, owner: Uuid, term: &str) -> Result<SearchResponse> {
		let term = term.trim();

		if term.is_empty() {
			return Ok(SearchResponse { results: Vec::new() });
		}

		let pattern = quill_domain::search::like_pattern(term);
		let hits = search::unified(&self.db.pool, owner, &pattern).await?;
		let mut results = Vec::with_capacity(hits.len());

		for hit in hits {
			let kind = match hit.kind.as_str() {
				"note" => SearchKind::Note,
				"notebook" => SearchKind::Notebook,
				"tag" => SearchKind::Tag,
				"template" => SearchKind::Template,
				other => {
					return Err(Error::Storage {
						message: format!("Unknown search result kind {other:?}."),
					});
				},
			};

			results.push(SearchItem { id: hit.id, name: hit.name, kind, snippet: hit.snippet });
		}

		Ok(SearchResponse { results })
	}
}
