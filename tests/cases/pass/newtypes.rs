// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use tagval::Validate;

#[derive(Validate)]
#[validate("func=.no_duplicates")]
pub struct Tags(#[validate("min_items=1,item=[min_len=2]")] pub Vec<String>);

impl Tags {
    fn no_duplicates(&self) -> Result<(), String> {
        let mut seen = std::collections::HashSet::new();
        match self.0.iter().find(|tag| !seen.insert(tag.as_str())) {
            Some(tag) => Err(format!("duplicate tag `{tag}`")),
            None => Ok(()),
        }
    }
}

#[derive(Validate)]
#[validate("min=1,max=10")]
pub struct Level(pub u16);

#[derive(Validate)]
pub struct Point(#[validate("min=0")] pub i32, #[validate("min=0")] pub i32);

#[derive(Validate)]
pub struct Marker;

fn main() {
    assert!(Tags(vec!["io".to_string(), "fs".to_string()]).validate().is_ok());
    assert!(Tags(Vec::new()).validate().is_err());
    assert!(Tags(vec!["io".to_string(), "io".to_string()]).validate().is_err());

    assert!(Level(5).validate().is_ok());
    assert!(Level(11).validate().is_err());

    assert_eq!(Point(1, -1).validate().unwrap_err().field(), "1");
    assert!(Marker.validate().is_ok());
}
