//! Closed field schema shared by the prompt, parser and output table.

/// Literal marker for a field the model did not confirm.
pub const NULL_SENTINEL: &str = "NULL";

/// Output column carrying the source article title.
pub const TITLE_COLUMN: &str = "Title";

/// Output column carrying the source abstract.
pub const ABSTRACT_COLUMN: &str = "Abstract";

/// Extraction fields in output order. Names must match the prompt's output
/// format byte for byte, including en-dashes and the Greek delta.
pub const FIELDS: [&str; 18] = [
    "Detailed Research Field",
    "Specified Research Field",
    "Article research on Ru-based materials",
    "Article Type",
    "Elements",
    "Ru–O covalency",
    "Metal dissolution free energy",
    "High-valence accessibility",
    "Oxygen vacancy formation energy",
    "Metal–oxygen bond strength",
    "Non-lattice oxygen participation tendency",
    "Pourbaix stability window",
    "Configurational entropy",
    "e_g orbital occupancy",
    "Overpotential",
    "ΔG*O",
    "ΔG*OH",
    "Work function",
];

/// Header row of every output table: title, abstract, then [`FIELDS`].
pub fn output_columns() -> Vec<&'static str> {
    let mut columns = Vec::with_capacity(FIELDS.len() + 2);
    columns.push(TITLE_COLUMN);
    columns.push(ABSTRACT_COLUMN);
    columns.extend(FIELDS);
    columns
}

/// Returns the canonical schema name when `candidate` is a known field.
pub fn lookup(candidate: &str) -> Option<&'static str> {
    FIELDS.iter().copied().find(|field| *field == candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_columns_prefix_title_and_abstract() {
        let columns = output_columns();
        assert_eq!(columns.len(), 20);
        assert_eq!(&columns[..2], &["Title", "Abstract"]);
        assert_eq!(&columns[2..], &FIELDS[..]);
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        assert_eq!(lookup("ΔG*OH"), Some("ΔG*OH"));
        assert_eq!(lookup("Overpotential"), Some("Overpotential"));
        assert_eq!(lookup("overpotential"), None);
        // hyphen-minus instead of en-dash
        assert_eq!(lookup("Ru-O covalency"), None);
    }
}
