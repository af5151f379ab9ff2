use crate::distance::{NearestPair, Occurrences};
use serde::Serialize;

#[derive(Debug)]
pub enum OutputRecord {
    Distance(DistanceReport),
    Occurrences(OccurrenceReport),
}

// JSON shape: {"word1", "word2", "tokens", "distance", "positions"}.
// distance is null and positions left out when no pair was found.
#[derive(Debug, Serialize)]
pub struct DistanceReport {
    pub word1: String,
    pub word2: String,
    pub tokens: usize,
    pub distance: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<[usize; 2]>,
}

impl DistanceReport {
    pub fn new(word1: &str, word2: &str, tokens: usize, nearest: Option<NearestPair>) -> DistanceReport {
        DistanceReport {
            word1: word1.to_string(),
            word2: word2.to_string(),
            tokens,
            distance: nearest.map(|pair| pair.distance),
            positions: nearest.map(|pair| [pair.first, pair.second]),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OccurrenceReport {
    pub tokens: usize,
    pub occurrences: Vec<WordOccurrences>,
}

#[derive(Debug, Serialize)]
pub struct WordOccurrences {
    pub word: String,
    pub positions: Vec<usize>,
}

impl From<Occurrences> for OccurrenceReport {
    fn from(found: Occurrences) -> Self {
        let occurrences = found.words.iter()
            .map(|word| WordOccurrences {
                word: word.clone(),
                positions: found.positions_of(word).to_vec(),
            })
            .collect();
        OccurrenceReport {
            tokens: found.tokens,
            occurrences,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance;

    #[test]
    fn absent_distance_serializes_as_null() {
        let report = DistanceReport::new("foo", "bar", 3, None);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json, serde_json::json!({"word1": "foo", "word2": "bar", "tokens": 3, "distance": null}));
    }

    #[test]
    fn zero_distance_is_not_null() {
        let nearest = distance::find_nearest_pair("Foo", "bar", "foo Bar", distance::Strategy::SinglePass);
        let report = DistanceReport::new("Foo", "bar", 2, nearest);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["distance"], 0);
        assert_eq!(json["positions"], serde_json::json!([0, 1]));
    }

    #[test]
    fn occurrence_report_keeps_argument_order() {
        let report = OccurrenceReport::from(distance::occurrences("bar", "foo", "foo bar foo"));
        assert_eq!(report.tokens, 3);
        assert_eq!(report.occurrences[0].word, "bar");
        assert_eq!(report.occurrences[0].positions, vec![1]);
        assert_eq!(report.occurrences[1].word, "foo");
        assert_eq!(report.occurrences[1].positions, vec![0, 2]);
    }
}
