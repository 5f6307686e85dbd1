/// Notebook every quick-captured note is filed into, created lazily per user.
pub const QUICK_CAPTURE_NOTEBOOK_NAME: &str = "Quick Notes";

/// Titles derived from captured content are cut at this many characters.
pub const TITLE_LIMIT: usize = 30;

const TRUNCATION_MARKER: &str = "...";

/// Derives a note title from raw captured content. Content at or under the
/// limit is used verbatim; longer content is cut at the limit and marked.
pub fn derive_title(content: &str) -> String {
	let mut chars = content.char_indices();

	match chars.nth(TITLE_LIMIT) {
		Some((cut, _)) => {
			let mut title = content[..cut].to_string();

			title.push_str(TRUNCATION_MARKER);

			title
		},
		None => content.to_string(),
	}
}
