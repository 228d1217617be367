//! Category aggregation — turns the analyzer's category list into the four fixed
//! categories in display order.

use crate::feedback::error::ReportError;
use crate::feedback::models::{Category, CategoryKind, Report};

/// Returns exactly the four report categories in display order
/// (tone-style, content, structure, skills), whatever order they arrived in.
///
/// Fails with `MalformedReport` when a category is missing, appears twice, or has an
/// id outside the fixed set. Titles are normalised to the fixed display titles.
pub fn aggregate(report: &Report) -> Result<[Category; 4], ReportError> {
    let mut slots: [Option<Category>; 4] = Default::default();

    for category in &report.categories {
        let kind = CategoryKind::from_id(&category.id).ok_or_else(|| {
            ReportError::MalformedReport(format!("unrecognised category '{}'", category.id))
        })?;

        let slot = &mut slots[kind as usize];
        if slot.is_some() {
            return Err(ReportError::MalformedReport(format!(
                "category '{kind}' appears more than once"
            )));
        }
        *slot = Some(Category {
            title: kind.title().to_string(),
            ..category.clone()
        });
    }

    let missing: Vec<&str> = CategoryKind::ALL
        .iter()
        .zip(&slots)
        .filter(|(_, slot)| slot.is_none())
        .map(|(kind, _)| kind.id())
        .collect();

    match slots {
        [Some(tone), Some(content), Some(structure), Some(skills)] => {
            Ok([tone, content, structure, skills])
        }
        _ => Err(ReportError::MalformedReport(format!(
            "missing categories: {}",
            missing.join(", ")
        ))),
    }
}
