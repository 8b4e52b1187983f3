// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use tagval::Validate;

#[derive(Validate)]
pub struct Feed {
    #[validate("min_items=-1")]
    pub urls: Vec<String>,
}

fn main() {}
