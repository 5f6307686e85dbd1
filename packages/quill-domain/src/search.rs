/// Builds the `%term%` pattern for a case-insensitive substring match.
/// LIKE metacharacters in the term are escaped so they match literally.
pub fn like_pattern(term: &str) -> String {
	let mut pattern = String::with_capacity(term.len() + 2);

	pattern.push('%');

	for ch in term.chars() {
		if matches!(ch, '%' | '_' | '\\') {
			pattern.push('\\');
		}

		pattern.push(ch);
	}

	pattern.push('%');

	pattern
}
