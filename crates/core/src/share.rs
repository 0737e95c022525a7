//! Shareable deep links to a single industry.

/// Turn an industry name into the slug used by share links.
///
/// The name is lowercased, every character outside `[a-z0-9]` becomes `-`,
/// and runs of `-` collapse into one.
#[must_use]
pub fn industry_slug(name: &str) -> String {
	let mut slug = String::with_capacity(name.len());
	for ch in name.chars().flat_map(char::to_lowercase) {
		if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
			slug.push(ch);
		} else if !slug.ends_with('-') {
			slug.push('-');
		}
	}
	slug
}

/// Build the share link for `name` relative to `base_url`.
#[must_use]
pub fn share_url(base_url: &str, name: &str) -> String {
	let slug = industry_slug(name);
	format!("{}/?industry={slug}#{slug}", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn slugs_replace_and_collapse_separators() {
		assert_eq!(industry_slug("FinTech"), "fintech");
		assert_eq!(industry_slug("Women's Health"), "women-s-health");
		assert_eq!(industry_slug("Food & Beverage"), "food-beverage");
		assert_eq!(industry_slug("3D Printing Labs"), "3d-printing-labs");
		assert_eq!(industry_slug("Café"), "caf-");
	}

	#[test]
	fn share_urls_carry_slug_in_query_and_fragment() {
		assert_eq!(
			share_url("https://example.org/", "Pet Care"),
			"https://example.org/?industry=pet-care#pet-care"
		);
	}
}
