use crate::model::{ExtractionAlert, NameParts, PersonType};

/// Derive the person type from RFC length (Mexican convention):
/// 13 characters means a physical person, 12 a moral one. Any other
/// non-empty length defaults to physical and flags the record; an empty
/// RFC stays physical without a second alert (the missing field already
/// produced one).
pub fn person_type_for_rfc(tax_id: &str, alerts: &mut Vec<ExtractionAlert>) -> PersonType {
    match tax_id.chars().count() {
        13 => PersonType::Physical,
        12 => PersonType::Moral,
        0 => PersonType::Physical,
        other => {
            alerts.push(ExtractionAlert::low_confidence(
                "insured.person_type",
                &format!("unexpected RFC length {other}"),
            ));
            PersonType::Physical
        }
    }
}

/// Split a printed name into parts. Policies print surnames first:
/// "GARCIA LOPEZ JUAN CARLOS" is paternal, maternal, then given names.
/// Fewer than three words populates what is present and flags the split.
pub fn split_name(printed: &str, alerts: &mut Vec<ExtractionAlert>) -> NameParts {
    let words: Vec<&str> = printed.split_whitespace().collect();
    match words.len() {
        0 => NameParts::default(),
        1 => {
            alerts.push(ExtractionAlert::low_confidence(
                "insured.name_parts",
                "single-word name",
            ));
            NameParts {
                given_names: words[0].to_string(),
                ..NameParts::default()
            }
        }
        2 => {
            alerts.push(ExtractionAlert::low_confidence(
                "insured.name_parts",
                "two-word name, maternal surname missing",
            ));
            NameParts {
                paternal_surname: words[0].to_string(),
                given_names: words[1].to_string(),
                ..NameParts::default()
            }
        }
        _ => NameParts {
            paternal_surname: words[0].to_string(),
            maternal_surname: words[1].to_string(),
            given_names: words[2..].join(" "),
        },
    }
}
