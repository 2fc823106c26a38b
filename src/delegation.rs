//! # Delegated Properties
//!
//! Wrappers that run a callback when a value is read or written:
//!
//! - [`Observable`] notifies an observer with `(old, new)` after each write
//! - [`Vetoable`] asks a validator first and keeps the old value on rejection
//! - [`Lazy`] computes its value on first read and caches it
//!
//! There is no implicit interception: every access goes through `get`/`set`.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use once_cell::unsync::OnceCell;

// =============================================================================
// Observable
// =============================================================================

pub struct Observable<T> {
    value: T,
    observer: Box<dyn FnMut(&T, &T)>,
}

impl<T> Observable<T> {
    pub fn new(initial: T, observer: impl FnMut(&T, &T) + 'static) -> Self {
        Self {
            value: initial,
            observer: Box::new(observer),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Store `value` and notify the observer. Returns the previous value.
    pub fn set(&mut self, value: T) -> T {
        let old = std::mem::replace(&mut self.value, value);
        (self.observer)(&old, &self.value);
        old
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Vetoable
// =============================================================================

/// A write the validator refused. Carries the rejected value back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vetoed<T>(pub T);

impl<T: fmt::Debug> fmt::Display for Vetoed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "write of {:?} rejected by validator", self.0)
    }
}

impl<T: fmt::Debug> std::error::Error for Vetoed<T> {}

pub struct Vetoable<T> {
    value: T,
    validator: Box<dyn Fn(&T, &T) -> bool>,
}

impl<T> Vetoable<T> {
    pub fn new(initial: T, validator: impl Fn(&T, &T) -> bool + 'static) -> Self {
        Self {
            value: initial,
            validator: Box::new(validator),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) -> Result<(), Vetoed<T>> {
        if (self.validator)(&self.value, &value) {
            self.value = value;
            Ok(())
        } else {
            Err(Vetoed(value))
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Vetoable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vetoable")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Lazy
// =============================================================================

pub struct Lazy<T> {
    cell: OnceCell<T>,
    init: Box<dyn Fn() -> T>,
}

impl<T> Lazy<T> {
    pub fn new(init: impl Fn() -> T + 'static) -> Self {
        Self {
            cell: OnceCell::new(),
            init: Box::new(init),
        }
    }

    /// Runs the initialiser on the first call only.
    pub fn get(&self) -> &T {
        self.cell.get_or_init(|| (self.init)())
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

// =============================================================================
// Worked examples
// =============================================================================

/// Shared log of observed changes.
pub type ChangeLog = Rc<RefCell<Vec<String>>>;

/// A user whose name and age report every change to a shared log.
pub struct User {
    pub name: Observable<String>,
    pub age: Observable<u32>,
    log: ChangeLog,
}

impl User {
    pub fn new() -> Self {
        let log: ChangeLog = Rc::default();

        let name_log = Rc::clone(&log);
        let name = Observable::new("Unknown".to_string(), move |old: &String, new: &String| {
            name_log
                .borrow_mut()
                .push(format!("Name changed from '{old}' to '{new}'"));
        });

        let age_log = Rc::clone(&log);
        let age = Observable::new(0, move |old: &u32, new: &u32| {
            age_log
                .borrow_mut()
                .push(format!("Age changed from {old} to {new}"));
        });

        Self { name, age, log }
    }

    pub fn changes(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl Default for User {
    fn default() -> Self {
        Self::new()
    }
}

/// An account whose balance can never go negative.
#[derive(Debug)]
pub struct BankAccount {
    balance: Vetoable<i64>,
}

impl BankAccount {
    pub fn new() -> Self {
        Self {
            balance: Vetoable::new(0, |_, new| *new >= 0),
        }
    }

    pub fn balance(&self) -> i64 {
        *self.balance.get()
    }

    pub fn set_balance(&mut self, balance: i64) -> Result<(), Vetoed<i64>> {
        self.balance.set(balance)
    }
}

impl Default for BankAccount {
    fn default() -> Self {
        Self::new()
    }
}
