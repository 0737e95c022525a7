use ratatui::layout::Constraint;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Row};
use sectora_core::{Directory, IndustryRecord};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: &str = "…";

/// Column headers of the results table.
pub const RESULT_HEADERS: [&str; 4] = ["Industry", "Category", "Growth", "Markets"];

/// Column widths of the results table.
#[must_use]
pub fn result_widths() -> Vec<Constraint> {
	vec![
		Constraint::Percentage(30),
		Constraint::Percentage(30),
		Constraint::Length(9),
		Constraint::Fill(1),
	]
}

/// Clip `text` to `width` display columns, marking the cut with an ellipsis.
#[must_use]
pub fn truncate_to_width(text: &str, width: usize) -> String {
	if text.width() <= width {
		return text.to_string();
	}
	if width == 0 {
		return String::new();
	}
	let (clipped, _) = text.unicode_truncate(width.saturating_sub(ELLIPSIS.width()));
	format!("{}{ELLIPSIS}", clipped.trim_end())
}

/// Lay out `text` in `width` columns with the query's first match styled.
fn highlighted_cell<'a>(text: &str, needle: &str, width: Option<u16>, style: Style) -> Cell<'a> {
	let text = match width {
		Some(width) => truncate_to_width(text, width as usize),
		None => text.to_string(),
	};
	if needle.is_empty() {
		return Cell::from(text);
	}
	let lowered = text.to_lowercase();
	// Lowercasing can change byte lengths outside ASCII; only split when offsets line up.
	let Some(start) = lowered.find(needle).filter(|_| lowered.len() == text.len()) else {
		return Cell::from(text);
	};
	let end = start + needle.len();
	if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
		return Cell::from(text);
	}
	Cell::from(Line::from(vec![
		Span::raw(text[..start].to_string()),
		Span::styled(text[start..end].to_string(), style),
		Span::raw(text[end..].to_string()),
	]))
}

fn record_row<'a>(
	directory: &Directory,
	record: &IndustryRecord,
	needle: &str,
	widths: Option<&[u16]>,
	highlight: Style,
) -> Row<'a> {
	let width = |column: usize| widths.and_then(|widths| widths.get(column).copied());
	let category = directory.category_of(record).unwrap_or_default();
	let growth = record
		.growth_potential
		.map(|level| level.as_str())
		.unwrap_or("-");
	let markets = record.target_locations.join(", ");
	Row::new([
		highlighted_cell(&record.industry, needle, width(0), highlight),
		Cell::from(truncate_to_width(&category, width(1).unwrap_or(u16::MAX) as usize)),
		Cell::from(growth),
		Cell::from(truncate_to_width(&markets, width(3).unwrap_or(u16::MAX) as usize)),
	])
}

/// Build table rows for the filtered records.
///
/// `column_widths`, resolved for the area being drawn, lets long values end
/// in an ellipsis instead of being clipped mid-word.
#[must_use]
pub fn build_result_rows<'a>(
	directory: &Directory,
	filtered: &[usize],
	query: &str,
	highlight: Style,
	column_widths: Option<&[u16]>,
) -> Vec<Row<'a>> {
	let needle = query.to_lowercase();
	filtered
		.iter()
		.filter_map(|&index| {
			let record = directory.records().get(index)?;
			Some(record_row(directory, record, &needle, column_widths, highlight))
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn short_text_is_untouched() {
		assert_eq!(truncate_to_width("urban", 10), "urban");
		assert_eq!(truncate_to_width("urban", 5), "urban");
	}

	#[test]
	fn long_text_ends_with_an_ellipsis() {
		let clipped = truncate_to_width("urban, suburban, rural", 10);
		assert_eq!(clipped, "urban, su…");
		assert!(clipped.width() <= 10);
		assert_eq!(truncate_to_width("anything", 0), "");
	}
}
