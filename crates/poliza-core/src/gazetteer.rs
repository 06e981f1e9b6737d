use serde::Deserialize;
use std::sync::LazyLock;

const ESTADOS_JSON: &str = include_str!("../../../data/estados.json");

/// A Mexican state and the municipalities addresses can be anchored to.
/// Names are stored uppercase without accents, matching how insurers print
/// them. Extending coverage is a data edit in `data/estados.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct StateEntry {
    pub name: String,
    #[serde(default)]
    pub municipalities: Vec<String>,
}

static STATES: LazyLock<Vec<StateEntry>> = LazyLock::new(|| {
    serde_json::from_str(ESTADOS_JSON).expect("embedded gazetteer is valid JSON")
});

/// Find a known state name inside a line (case-insensitive).
/// Longest match wins so "BAJA CALIFORNIA SUR" beats "BAJA CALIFORNIA".
pub fn find_state(line: &str) -> Option<&'static StateEntry> {
    let upper = fold(line);
    STATES
        .iter()
        .filter(|s| upper.contains(&s.name))
        .max_by_key(|s| s.name.len())
}

/// Find a known municipality inside a line, returning its state entry too.
/// Longer names are preferred so "SAN LUIS POTOSI" beats partial matches.
pub fn find_municipality(line: &str) -> Option<(&'static StateEntry, &'static str)> {
    let upper = fold(line);
    let mut best: Option<(&StateEntry, &str)> = None;
    for state in STATES.iter() {
        for muni in &state.municipalities {
            if upper.contains(muni.as_str())
                && best.map(|(_, m)| muni.len() > m.len()).unwrap_or(true)
            {
                best = Some((state, muni.as_str()));
            }
        }
    }
    best
}

/// Uppercase and strip the accents insurers sometimes keep.
fn fold(s: &str) -> String {
    s.to_uppercase()
        .chars()
        .map(|c| match c {
            'Á' => 'A',
            'É' => 'E',
            'Í' => 'I',
            'Ó' => 'O',
            'Ú' => 'U',
            'Ü' => 'U',
            _ => c,
        })
        .collect()
}
