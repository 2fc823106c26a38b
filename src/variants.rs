//! Closed sets of variants handled with exhaustive `match`.
//!
//! Adding a variant to either enum is a compile error at every `match`
//! below until the new case is handled.

use std::f64::consts::PI;
use std::fmt::Display;

use serde::Serialize;

/// State of a computation that may still be in flight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Outcome<T> {
    Success(T),
    Failure(String),
    Loading,
}

impl<T> Outcome<T> {
    pub fn is_done(&self) -> bool {
        !matches!(self, Outcome::Loading)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(message) => Outcome::Failure(message),
            Outcome::Loading => Outcome::Loading,
        }
    }
}

impl<T: Display> Outcome<T> {
    pub fn describe(&self) -> String {
        match self {
            Outcome::Success(value) => format!("Success: {value}"),
            Outcome::Failure(message) => format!("Error: {message}"),
            Outcome::Loading => "Loading...".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Shape {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
}

impl Shape {
    pub fn area(&self) -> f64 {
        match *self {
            Shape::Circle { radius } => PI * radius * radius,
            Shape::Rectangle { width, height } => width * height,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Shape::Circle { radius } => {
                format!("Circle with radius {radius}, area {:.2}", self.area())
            }
            Shape::Rectangle { width, height } => {
                format!("Rectangle {width}x{height}, area {:.2}", self.area())
            }
        }
    }
}
