//! Console runner: prints every configured [`Section`] in order.
//!
//! Output goes to any [`Write`] so tests can capture it.

use std::fmt::{Debug, Display};
use std::io::{self, Write};
use std::mem::size_of;

use colored::Colorize;
use itertools::Itertools;
use thiserror::Error;
use tracing::{debug, info};

use crate::calculator::{Calculator, CalculatorError};
use crate::config::{DemoConfig, Section};
use crate::delegation::{BankAccount, Lazy, User};
use crate::describe::{inspect, Describe};
use crate::error::CollectionError;
use crate::generics::{is_of_type, swap_positions, type_name_of, Container, ListExt};
use crate::html::html;
use crate::ids::{process_product, process_user, ProductId, UserId};
use crate::person::{self, Person};
use crate::sequences;
use crate::showcase;
use crate::variants::{Outcome, Shape};

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("failed to write demo output: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Collection(#[from] CollectionError),

    #[error(transparent)]
    Calculator(#[from] CalculatorError),

    #[error("failed to serialize metadata: {0}")]
    Json(#[from] serde_json::Error),
}

/// Size of the source used to compare eager and lazy pipelines.
const PIPELINE_SOURCE_LEN: i64 = 100_000;

pub struct DemoRunner<W> {
    out: W,
    config: DemoConfig,
}

impl<W: Write> DemoRunner<W> {
    pub fn new(out: W, config: DemoConfig) -> Self {
        Self { out, config }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn run(&mut self) -> Result<(), DemoError> {
        let sections = self.config.sections.clone();
        for section in sections {
            self.run_section(section)?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn run_section(&mut self, section: Section) -> Result<(), DemoError> {
        info!(section = section.name(), "running section");
        self.heading(section.title())?;
        match section {
            Section::Collections => self.collections()?,
            Section::Pipelines => self.pipelines()?,
            Section::People => self.people()?,
            Section::Delegation => self.delegation()?,
            Section::Generics => self.generics()?,
            Section::Variants => self.variants()?,
            Section::ValueTypes => self.value_types()?,
            Section::Builders => self.builders()?,
            Section::Reflection => self.reflection()?,
            Section::Calculator => self.calculator()?,
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn heading(&mut self, title: &str) -> io::Result<()> {
        let text = format!("=== {title} ===");
        if self.config.color {
            writeln!(self.out, "{}", text.bold().cyan())
        } else {
            writeln!(self.out, "{text}")
        }
    }

    fn line(&mut self, label: &str, value: impl Debug) -> io::Result<()> {
        writeln!(self.out, "  {label}: {value:?}")
    }

    fn note(&mut self, label: &str, value: impl Display) -> io::Result<()> {
        writeln!(self.out, "  {label}: {value}")
    }

    // =========================================================================
    // Sections
    // =========================================================================

    fn collections(&mut self) -> Result<(), DemoError> {
        let sample = self.config.sample.clone();
        let take = self.config.take;
        let chunk_size = self.config.chunk_size;
        let spec = self.config.window_spec();

        self.line("Sample", &sample)?;
        self.line("Set from [a, b, a]", showcase::immutable_set())?;
        self.line("Map", showcase::immutable_map())?;
        self.line("Range 1..=5", showcase::int_range_inclusive().collect_vec())?;
        self.line("Range 0..=10 step 2", showcase::int_range_step().collect_vec())?;
        self.line("Chars a..=e", showcase::char_range().collect::<String>())?;

        self.line(
            "Evens x10",
            sequences::filter_then_map(&sample, |n| n % 2 == 0, |&n| i64::from(n) * 10),
        )?;
        match sequences::reduce(sample.iter().map(|&n| i64::from(n)), |a, b| a + b) {
            Ok(sum) => self.line("Reduce (sum)", sum)?,
            Err(err) => self.note("Reduce (sum)", err)?,
        }
        let product = sequences::fold(sample.iter().copied(), Some(1i64), |acc, n| {
            acc.and_then(|a| a.checked_mul(i64::from(n)))
        });
        match product {
            Some(product) => self.line("Fold (product)", product)?,
            None => self.note("Fold (product)", "overflow")?,
        }
        self.line("Group by parity", showcase::group_by_parity(&sample))?;
        self.line("Zip with letters", showcase::zip_lists(&sample, &["a", "b", "c"]))?;
        self.line("Distinct sorted", showcase::distinct_sorted(&sample))?;

        let (head, tail) = sequences::take_drop(&sample, take);
        self.line(&format!("Take {take}"), head)?;
        self.line(&format!("Drop {take}"), tail)?;
        self.line(
            &format!("Chunked ({chunk_size})"),
            sequences::chunk(&sample, chunk_size)?,
        )?;
        self.line(
            &format!(
                "Windowed (size {}, step {}{})",
                spec.size,
                spec.step,
                if spec.partial { ", partial" } else { "" }
            ),
            sequences::window(&sample, spec)?,
        )?;
        self.line(
            "Tokens",
            showcase::flat_map_tokens(&["hello world", "kotlin  collections"]),
        )?;

        let extended = sequences::with_appended(&sample, 9);
        self.line("Appended 9", extended)?;
        self.line("Original afterwards", &sample)?;
        Ok(())
    }

    fn pipelines(&mut self) -> Result<(), DemoError> {
        let chained: Vec<i32> = (1..=10)
            .filter(|n| n % 2 == 0)
            .map(|n| n * n)
            .filter(|n| *n > 10)
            .sorted()
            .take(3)
            .collect();
        self.line("Chained operations", chained)?;

        let source: Vec<i64> = (1..=PIPELINE_SOURCE_LEN).collect();
        let eager = sequences::eager_even_squares(&source, 1000, 10);
        let lazy: Vec<i64> = sequences::lazy_even_squares(source.iter().copied(), 1000, 10).collect();
        debug!(source_len = source.len(), "compared eager and lazy pipelines");

        self.line("Eager result", &eager)?;
        self.line("Lazy result", &lazy)?;
        self.line("Identical", eager == lazy)?;
        self.line("Squares up to 5", showcase::squares_sequence(5))?;
        Ok(())
    }

    fn people(&mut self) -> Result<(), DemoError> {
        let people = person::sample_people();
        for (department, members) in &person::group_by_department(&people) {
            self.line(department, person::names_in(members))?;
        }
        let (adults, minors) = person::partition_adults(&people);
        writeln!(self.out, "  Adults: {}, Minors: {}", adults.len(), minors.len())?;
        Ok(())
    }

    fn delegation(&mut self) -> Result<(), DemoError> {
        let mut user = User::new();
        user.name.set("Alice".to_string());
        user.age.set(25);
        for change in user.changes() {
            writeln!(self.out, "  {change}")?;
        }

        let mut account = BankAccount::new();
        for amount in [100, -50] {
            match account.set_balance(amount) {
                Ok(()) => writeln!(self.out, "  Balance changed to {amount}")?,
                Err(vetoed) => writeln!(self.out, "  Rejected: {vetoed}")?,
            }
        }
        self.line("Final balance", account.balance())?;

        let expensive = Lazy::new(|| "Expensive result".to_string());
        self.line("Initialised before access", expensive.is_initialized())?;
        self.note("Value", expensive.get())?;
        self.line("Initialised after access", expensive.is_initialized())?;
        Ok(())
    }

    fn generics(&mut self) -> Result<(), DemoError> {
        let string_box = Container::new("Hello");
        let int_box = Container::new(42);
        self.note("String container", string_box.get())?;
        self.note("Int container", int_box.get())?;

        let mut numbers = vec![1, 2, 3, 4, 5];
        swap_positions(&mut numbers, 0, 4)?;
        self.line("Swapped 0 and 4", &numbers)?;
        self.line("Second", numbers.second())?;
        self.line("Penultimate", numbers.penultimate())?;

        self.line("Is \"Hello\" a String", is_of_type::<String>(&"Hello".to_string()))?;
        self.line("Is 42 a String", is_of_type::<String>(&42))?;
        self.note("Type name of String", type_name_of::<String>())?;
        self.note("Type name of i32", type_name_of::<i32>())?;
        Ok(())
    }

    fn variants(&mut self) -> Result<(), DemoError> {
        let outcomes = [
            Outcome::Success("Hello World"),
            Outcome::Failure("Something went wrong".to_string()),
            Outcome::Loading,
        ];
        for outcome in &outcomes {
            writeln!(self.out, "  {}", outcome.describe())?;
        }
        for shape in [
            Shape::Circle { radius: 5.0 },
            Shape::Rectangle {
                width: 4.0,
                height: 6.0,
            },
        ] {
            writeln!(self.out, "  {}", shape.describe())?;
        }
        Ok(())
    }

    fn value_types(&mut self) -> Result<(), DemoError> {
        writeln!(self.out, "  {}", process_user(UserId(123)))?;
        writeln!(self.out, "  {}", process_product(ProductId(456)))?;
        writeln!(
            self.out,
            "  UserId is {} bytes, u64 is {} bytes",
            size_of::<UserId>(),
            size_of::<u64>()
        )?;
        Ok(())
    }

    fn builders(&mut self) -> Result<(), DemoError> {
        let page = html(|root| {
            root.head(|head| {
                head.title("My Page");
            });
            root.body(|body| {
                body.h1("Welcome").p("This is a paragraph");
            });
        });
        writeln!(self.out, "  {page}")?;
        Ok(())
    }

    fn reflection(&mut self) -> Result<(), DemoError> {
        let person = Person::new("Alice", 25, "Engineering");
        writeln!(self.out, "  {}", inspect(&person))?;
        writeln!(self.out, "  {}", inspect(&Shape::Circle { radius: 1.0 }))?;
        let metadata = serde_json::to_string(&person.type_info())?;
        self.note("Person metadata", metadata)?;
        Ok(())
    }

    fn calculator(&mut self) -> Result<(), DemoError> {
        let calc = Calculator::new();
        writeln!(self.out, "  5 + 3 = {}", calc.add(5, 3)?)?;
        writeln!(self.out, "  10 - 3 = {}", calc.subtract(10, 3)?)?;
        writeln!(self.out, "  4 * 5 = {}", calc.multiply(4, 5)?)?;
        writeln!(self.out, "  15 / 3 = {:.1}", calc.divide(15, 3)?)?;
        writeln!(self.out, "  2 ^ 3 = {}", calc.power(2, 3)?)?;
        writeln!(self.out, "  sqrt(16) = {:.1}", calc.square_root(16.0)?)?;
        match calc.divide(10, 0) {
            Ok(value) => writeln!(self.out, "  10 / 0 = {value}")?,
            Err(err) => writeln!(self.out, "  10 / 0 -> {err}")?,
        }
        Ok(())
    }
}
