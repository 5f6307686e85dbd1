pub mod account;
pub mod dashboard;
pub mod materialize;
pub mod notebooks;
pub mod notes;
pub mod patch;
pub mod quick_capture;
pub mod search;
pub mod tags;
pub mod templates;
pub mod time_serde;

mod error;

pub use error::{Error, Result};

pub use account::ClearAccountResponse;
pub use dashboard::{DashboardResponse, PopularTagResponse};
pub use materialize::{NoteFromTemplateRequest, TemplateFromNoteRequest};
pub use notebooks::{NotebookCreateRequest, NotebookResponse, NotebookUpdateRequest};
pub use notes::{NoteCreateRequest, NoteResponse, NoteTagResponse, NoteUpdateRequest};
pub use quick_capture::QuickNoteRequest;
pub use search::{SearchItem, SearchKind, SearchResponse};
pub use tags::{TagCreateRequest, TagResponse, TagUpdateRequest};
pub use templates::{TemplateCreateRequest, TemplateResponse, TemplateUpdateRequest};

use quill_storage::db::Db;

/// One service instance per process; every method takes the acting owner id
/// explicitly so tenant scoping is visible at each call site.
pub struct QuillService {
	pub db: Db,
}
impl QuillService {
	pub fn new(db: Db) -> Self {
		Self { db }
	}
}
