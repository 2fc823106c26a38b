//! Runtime shape description through explicit metadata.
//!
//! Rust has no reflection, so each type states its own shape by
//! implementing [`Describe`].

use std::any;

use serde::Serialize;

use crate::ids::{ProductId, UserId};
use crate::person::Person;
use crate::variants::{Outcome, Shape};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Record,
    Sum,
    Newtype,
    Primitive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeInfo {
    pub simple_name: &'static str,
    pub qualified_name: &'static str,
    pub kind: TypeKind,
    /// Field names for records, variant names for sum types.
    pub members: Vec<&'static str>,
}

impl TypeInfo {
    pub fn of<T: ?Sized>(kind: TypeKind, members: &[&'static str]) -> Self {
        Self {
            simple_name: crate::generics::type_name_of::<T>(),
            qualified_name: any::type_name::<T>(),
            kind,
            members: members.to_vec(),
        }
    }

    pub fn is_record(&self) -> bool {
        self.kind == TypeKind::Record
    }

    pub fn is_sealed(&self) -> bool {
        self.kind == TypeKind::Sum
    }
}

pub trait Describe {
    fn type_info(&self) -> TypeInfo;
}

impl Describe for Person {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<Self>(TypeKind::Record, &["name", "age", "department"])
    }
}

impl Describe for Shape {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<Self>(TypeKind::Sum, &["Circle", "Rectangle"])
    }
}

impl<T> Describe for Outcome<T> {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<Self>(TypeKind::Sum, &["Success", "Failure", "Loading"])
    }
}

impl Describe for UserId {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<Self>(TypeKind::Newtype, &["0"])
    }
}

impl Describe for ProductId {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<Self>(TypeKind::Newtype, &["0"])
    }
}

impl Describe for String {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<Self>(TypeKind::Primitive, &[])
    }
}

/// One-line summary of a value's type.
pub fn inspect<T: Describe + ?Sized>(value: &T) -> String {
    let info = value.type_info();
    format!(
        "Type: {}, Is record: {}, Is sealed: {}",
        info.simple_name,
        info.is_record(),
        info.is_sealed()
    )
}
