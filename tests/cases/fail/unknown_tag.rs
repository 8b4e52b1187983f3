// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use tagval::Validate;

#[derive(Validate)]
pub struct User {
    #[validate("size=3")]
    pub name: String,
}

fn main() {}
