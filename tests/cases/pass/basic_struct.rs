// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use tagval::{Validate, Violation};

#[derive(Validate)]
pub struct Product {
    #[validate("min_len=1,max_len=120")]
    pub title: String,

    #[validate("min=0,max=1000000")]
    pub price_cents: u64,

    #[validate("min=-90,max=90")]
    pub latitude: f32,

    #[validate("min=1e3")]
    pub stock: i64,

    pub available: bool,

    pub code: u8,
}

fn product(title: &str, stock: i64) -> Product {
    Product {
        title: title.to_string(),
        price_cents: 4999,
        latitude: 51.5,
        stock,
        available: true,
        code: 7,
    }
}

fn main() {
    assert!(product("Lamp", 1000).validate().is_ok());

    let err = product("", 1000).validate().unwrap_err();
    assert_eq!(err.field(), "title");
    assert_eq!(err.violation(), &Violation::TooShort { min: 1 });

    let err = product("Lamp", 999).validate().unwrap_err();
    assert_eq!(err.violation(), &Violation::BelowMinimum { min: "1e3" });
}
