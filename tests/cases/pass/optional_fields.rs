// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use tagval::{Validate, Violation};

#[derive(Validate)]
pub struct Partner {
    #[validate("min_len=1")]
    pub name: String,
}

#[derive(Validate)]
pub struct Profile {
    #[validate("nullable,min_len=1,max_len=5")]
    pub nickname: Option<String>,

    #[validate("not_null,min=0,max=15")]
    pub children: Option<i32>,

    pub referrer: Option<u32>,

    #[validate("nullable,min_items=1,item=[min=4]")]
    pub lucky: Option<Vec<i32>>,

    #[validate("nullable")]
    pub partner: Option<Box<Partner>>,
}

fn main() {
    let profile = Profile {
        nickname: None,
        children: Some(2),
        referrer: Some(7),
        lucky: None,
        partner: Some(Box::new(Partner {
            name: "Ann".to_string(),
        })),
    };
    assert!(profile.validate().is_ok());

    let profile = Profile {
        children: None,
        ..profile
    };
    let err = profile.validate().unwrap_err();
    assert_eq!(err.field(), "children");
    assert_eq!(err.violation(), &Violation::Missing);
}
