// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use tagval::Validate;

#[derive(Validate)]
pub struct Catalog<'a> {
    #[validate("min_items=1,item=[min_len=2]")]
    pub tags: Vec<String>,

    #[validate("max_items=3")]
    pub queue: VecDeque<u32>,

    #[validate("item=[min=1]")]
    pub ids: HashSet<u64>,

    #[validate("item=[max_len=8]")]
    pub codes: BTreeSet<String>,

    #[validate("item=[min=0.0,max=1.0]")]
    pub weights: [f64; 3],

    #[validate("min_items=1,item=[min=0]")]
    pub scores: &'a [i64],

    #[validate("min_len=1")]
    pub label: &'a str,

    #[validate("key=[min_len=1],value=[min=0]")]
    pub counts: HashMap<String, i32>,

    #[validate("max_items=2,value=[min_items=1,item=[min_len=1]]")]
    pub groups: BTreeMap<u32, Vec<String>>,
}

fn main() {
    let scores = [3, 5];
    let catalog = Catalog {
        tags: vec!["io".to_string()],
        queue: VecDeque::from([1, 2]),
        ids: HashSet::from([1, 2, 3]),
        codes: BTreeSet::from(["A1".to_string()]),
        weights: [0.2, 0.3, 0.5],
        scores: &scores,
        label: "tools",
        counts: HashMap::from([("hammer".to_string(), 2)]),
        groups: BTreeMap::from([(1, vec!["a".to_string()])]),
    };
    assert!(catalog.validate().is_ok());

    let negative = [-1];
    let catalog = Catalog {
        scores: &negative,
        ..catalog
    };
    assert_eq!(catalog.validate().unwrap_err().field(), "scores[]");
}
