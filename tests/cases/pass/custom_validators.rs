// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use tagval::{Validate, ValidationError};

mod checks {
    pub fn not_blank(value: &str) -> Result<(), &'static str> {
        if value.trim().is_empty() {
            Err("must not be blank")
        } else {
            Ok(())
        }
    }
}

pub trait Shape {
    fn area(&self) -> f64;
}

pub struct Square(pub f64);

impl Shape for Square {
    fn area(&self) -> f64 {
        self.0 * self.0
    }
}

pub fn positive_area(shape: &dyn Shape) -> Result<(), ValidationError> {
    if shape.area() > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::custom("area must be positive"))
    }
}

#[derive(Validate)]
pub struct Line {
    #[validate("min=1")]
    pub quantity: u32,
}

impl Line {
    fn check(&self) -> Result<(), ValidationError> {
        if self.quantity > 100 {
            return Err("bulk orders go through sales".into());
        }
        Ok(())
    }
}

#[derive(Validate)]
#[validate("func=.check_totals")]
pub struct Order {
    #[validate("min_len=1,func=checks::not_blank")]
    pub reference: String,

    #[validate("func=positive_area")]
    pub shape: Box<dyn Shape>,

    #[validate("item=[func=.check]")]
    pub lines: Vec<Line>,

    pub total: u32,
}

impl Order {
    fn check_totals(&self) -> Result<(), ValidationError> {
        let sum: u32 = self.lines.iter().map(|line| line.quantity).sum();
        if sum == self.total {
            Ok(())
        } else {
            Err(ValidationError::custom("total does not match lines"))
        }
    }
}

fn order(reference: &str, side: f64, total: u32) -> Order {
    Order {
        reference: reference.to_string(),
        shape: Box::new(Square(side)),
        lines: vec![Line { quantity: 2 }, Line { quantity: 3 }],
        total,
    }
}

fn main() {
    assert!(order("A-1", 2.0, 5).validate().is_ok());
    assert_eq!(
        order("  ", 2.0, 5).validate().unwrap_err().to_string(),
        "reference: must not be blank"
    );
    assert_eq!(order("A-1", 0.0, 5).validate().unwrap_err().field(), "shape");
    assert_eq!(order("A-1", 2.0, 4).validate().unwrap_err().field(), "");
}
