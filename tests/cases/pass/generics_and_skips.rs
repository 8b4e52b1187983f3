// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::{marker::PhantomData, sync::mpsc};

use tagval::Validate;

/// Has no `Validate` implementation.
pub struct Connection;

#[derive(Validate)]
pub struct Item {
    #[validate("min_len=1")]
    pub name: String,
}

#[derive(Validate)]
pub struct Page<T: Validate> {
    #[validate("min_items=1,max_items=3")]
    pub items: Vec<T>,

    #[validate(skip)]
    pub connection: Connection,

    pub on_load: fn(usize),

    pub events: mpsc::Sender<usize>,

    pub separator: char,

    pub cursor: (u32, u32),

    pub marker: PhantomData<T>,
}

fn main() {
    let (events, _receiver) = mpsc::channel();
    let page = Page {
        items: vec![Item {
            name: "first".to_string(),
        }],
        connection: Connection,
        on_load: |_| {},
        events,
        separator: ',',
        cursor: (0, 0),
        marker: PhantomData,
    };
    assert!(page.validate().is_ok());
}
