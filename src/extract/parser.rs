//! Tolerant line parser turning raw completion text into a typed record.

use indexmap::IndexMap;
use serde::Serialize;

use super::schema::{self, FIELDS, NULL_SENTINEL};

/// Value for every schema field, kept in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtractionRecord {
    fields: IndexMap<&'static str, String>,
}

impl ExtractionRecord {
    /// Record with every field set to the sentinel.
    pub fn all_null() -> Self {
        let fields = FIELDS
            .iter()
            .map(|field| (*field, NULL_SENTINEL.to_string()))
            .collect();
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Iterate `(field, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Values in schema order, ready for a table row.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.values().map(String::as_str)
    }

    pub fn is_all_null(&self) -> bool {
        self.fields.values().all(|v| v == NULL_SENTINEL)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn set(&mut self, field: &'static str, value: &str) {
        if let Some(slot) = self.fields.get_mut(field) {
            *slot = value.to_string();
        }
    }
}

impl Default for ExtractionRecord {
    fn default() -> Self {
        Self::all_null()
    }
}

/// Decode `Label: value` lines into a record.
///
/// `None` (a failed call) yields the all-NULL record. Each line is split on
/// its first colon only; unknown labels and colon-free lines are skipped and
/// a repeated label keeps its last value.
pub fn parse_response(raw: Option<&str>) -> ExtractionRecord {
    let mut record = ExtractionRecord::all_null();
    let Some(text) = raw else {
        return record;
    };

    for line in text.split(is_line_break) {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        if let Some(field) = schema::lookup(key.trim()) {
            record.set(field, value.trim());
        }
    }
    record
}

/// Line boundaries recognised in model replies: LF, CR, VT, FF, the
/// file/group/record separators, NEL and the Unicode line/paragraph
/// separators. A CRLF pair yields an extra empty segment, which is skipped.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = "Detailed Research Field: Catalytic Research
Specified Research Field: Research on OER
Article research on Ru-based materials: Yes
Article Type: Research
Elements: Ru, Ir
Overpotential: overpotential of 210 mV at 10 mA/cm²
ΔG*OH: ΔG*OH of 0.3 eV";

    #[test]
    fn missing_response_is_all_null() {
        let record = parse_response(None);
        assert_eq!(record.len(), FIELDS.len());
        assert!(record.is_all_null());
    }

    #[test]
    fn ru_ir_scenario() {
        let record = parse_response(Some(SCENARIO));
        assert_eq!(record.len(), 18);
        assert_eq!(record.get("Elements"), Some("Ru, Ir"));
        assert_eq!(
            record.get("Overpotential"),
            Some("overpotential of 210 mV at 10 mA/cm²")
        );
        assert_eq!(record.get("ΔG*OH"), Some("ΔG*OH of 0.3 eV"));
        assert_eq!(record.get("ΔG*O"), Some("NULL"));
        assert_eq!(record.get("Ru–O covalency"), Some("NULL"));
        assert_eq!(record.get("Work function"), Some("NULL"));
    }

    #[test]
    fn ignores_chatter_and_unknown_labels() {
        let raw = "Sure, here is the extraction.\n\
                   Elements: Ru, Co\n\
                   Confidence: high\n\
                   \n\
                   Work function: 4.8 eV\n\
                   Hope this helps!";
        let record = parse_response(Some(raw));
        assert_eq!(record.get("Elements"), Some("Ru, Co"));
        assert_eq!(record.get("Work function"), Some("4.8 eV"));
        assert_eq!(record.get("Confidence"), None);
        assert_eq!(record.iter().filter(|(_, v)| *v != "NULL").count(), 2);
    }

    #[test]
    fn last_duplicate_wins() {
        let raw = "Article Type: Review\nArticle Type: Research";
        let record = parse_response(Some(raw));
        assert_eq!(record.get("Article Type"), Some("Research"));
    }

    #[test]
    fn splits_on_first_colon_only() {
        let raw = "Overpotential: η10: 230 mV";
        let record = parse_response(Some(raw));
        assert_eq!(record.get("Overpotential"), Some("η10: 230 mV"));
    }

    #[test]
    fn carriage_return_only_breaks_separate_fields() {
        let record = parse_response(Some("Elements: Ru, Ir\rOverpotential: 210 mV"));
        assert_eq!(record.get("Elements"), Some("Ru, Ir"));
        assert_eq!(record.get("Overpotential"), Some("210 mV"));
    }

    #[test]
    fn crlf_and_unicode_separators_split_lines() {
        let raw = "Elements: Ru\r\nArticle Type: Review\u{2028}Work function: 4.6 eV\u{85}ΔG*O: 1.6 eV";
        let record = parse_response(Some(raw));
        assert_eq!(record.get("Elements"), Some("Ru"));
        assert_eq!(record.get("Article Type"), Some("Review"));
        assert_eq!(record.get("Work function"), Some("4.6 eV"));
        assert_eq!(record.get("ΔG*O"), Some("1.6 eV"));
    }

    #[test]
    fn empty_value_is_kept() {
        let record = parse_response(Some("Elements:   "));
        assert_eq!(record.get("Elements"), Some(""));
    }

    #[test]
    fn labels_are_case_sensitive() {
        let record = parse_response(Some("elements: Ru"));
        assert_eq!(record.get("Elements"), Some("NULL"));
    }

    #[test]
    fn iteration_follows_schema_order() {
        let record = parse_response(Some("Work function: 5 eV\nDetailed Research Field: Other Research"));
        let keys: Vec<&str> = record.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, FIELDS);
    }
}
