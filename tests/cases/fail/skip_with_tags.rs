// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use tagval::Validate;

#[derive(Validate)]
pub struct Account {
    #[validate(skip)]
    #[validate("min=1")]
    pub age: u32,
}

fn main() {}
