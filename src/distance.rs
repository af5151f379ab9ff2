use crate::tokenizer;
use rustc_hash::FxHashMap;
use std::fmt::{self, Display, Formatter};

// Distance is the number of tokens strictly between two occurrences, so
// adjacent words have distance 0. Absence is always None, never 0.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    SinglePass,
    CrossProduct,
}

impl Strategy {
    pub fn parse(s: &str) -> Option<Strategy> {
        match s {
            "single-pass" => Some(Strategy::SinglePass),
            "cross-product" => Some(Strategy::CrossProduct),
            _ => None,
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Strategy::SinglePass => write!(f, "single-pass"),
            Strategy::CrossProduct => write!(f, "cross-product"),
        }
    }
}

/// The two token positions closest to each other, `first < second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NearestPair {
    pub distance: usize,
    pub first: usize,
    pub second: usize,
}

impl NearestPair {
    fn new(x: usize, y: usize) -> NearestPair {
        let (first, second) = if x < y { (x, y) } else { (y, x) };
        NearestPair {
            distance: second - first - 1,
            first,
            second,
        }
    }
}

#[derive(Debug)]
pub struct Occurrences {
    pub tokens: usize,
    // Folded query words in argument order, deduplicated
    pub words: Vec<String>,
    pub positions: FxHashMap<String, Vec<usize>>,
}

impl Occurrences {
    pub fn positions_of(&self, word: &str) -> &[usize] {
        self.positions.get(word).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Shortest distance in words between `a` and `b` in `text`, or `None` when
/// no pair of distinct occurrences exists.
pub fn find_shortest_distance(a: &str, b: &str, text: &str) -> Option<usize> {
    find_nearest_pair(a, b, text, Strategy::SinglePass).map(|pair| pair.distance)
}

pub fn find_nearest_pair(a: &str, b: &str, text: &str, strategy: Strategy) -> Option<NearestPair> {
    let tokens = tokenizer::tokenize(text);
    nearest_pair(&tokenizer::normalize(a), &tokenizer::normalize(b), &tokens, strategy)
}

pub fn occurrences(a: &str, b: &str, text: &str) -> Occurrences {
    let tokens = tokenizer::tokenize(text);
    let a = tokenizer::normalize(a);
    let b = tokenizer::normalize(b);
    let positions = occurrence_lists(&a, &b, &tokens);
    let mut words = vec![a];
    if b != words[0] {
        words.push(b);
    }
    Occurrences {
        tokens: tokens.len(),
        words,
        positions,
    }
}

/// Works on already normalized queries and tokens.
pub fn nearest_pair(a: &str, b: &str, tokens: &[String], strategy: Strategy) -> Option<NearestPair> {
    match strategy {
        Strategy::SinglePass => single_pass(a, b, tokens),
        Strategy::CrossProduct => cross_product(a, b, tokens),
    }
}

// Any nearest pair is made of two neighbouring matches, so remembering the
// latest match is enough.
fn single_pass(a: &str, b: &str, tokens: &[String]) -> Option<NearestPair> {
    let mut last: Option<(usize, &str)> = None;
    let mut nearest: Option<NearestPair> = None;
    for (index, token) in tokens.iter().enumerate() {
        let token = token.as_str();
        if token != a && token != b {
            continue;
        }
        if let Some((last_index, last_token)) = last {
            if token != last_token || a == b {
                let candidate = NearestPair::new(last_index, index);
                if nearest.map_or(true, |n| candidate.distance < n.distance) {
                    nearest = Some(candidate);
                }
            }
        }
        last = Some((index, token));
    }
    nearest
}

// Quadratic in the number of occurrences. Ties go to the pair ending first,
// the same pair single_pass settles on.
fn cross_product(a: &str, b: &str, tokens: &[String]) -> Option<NearestPair> {
    let lists = occurrence_lists(a, b, tokens);
    let xs = lists.get(a)?;
    let ys = lists.get(b)?;
    xs.iter()
        .flat_map(|&x| ys.iter().map(move |&y| (x, y)))
        .filter(|(x, y)| x != y)
        .map(|(x, y)| NearestPair::new(x, y))
        .min_by_key(|pair| (pair.distance, pair.second))
}

pub fn occurrence_lists(a: &str, b: &str, tokens: &[String]) -> FxHashMap<String, Vec<usize>> {
    let mut lists: FxHashMap<String, Vec<usize>> = FxHashMap::default();
    lists.insert(a.to_string(), vec![]);
    lists.insert(b.to_string(), vec![]);
    for (index, token) in tokens.iter().enumerate() {
        if let Some(list) = lists.get_mut(token.as_str()) {
            list.push(index);
        }
    }
    lists
}
