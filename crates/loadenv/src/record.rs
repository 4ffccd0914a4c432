//! Typed destinations for [`crate::unmarshal`].
//!
//! Responsibilities:
//! - Describe a record's fields as a table of [`Field`]s in declaration order.
//! - Coerce raw string values into each field's declared type.
//! - Generate the table for plain structs with [`impl_record!`](crate::impl_record).
//!
//! Does NOT handle:
//! - Reading or merging files (see `loader`).
//! - Deciding whether a missing key is an error (see `loader::bind`).
//!
//! Invariants:
//! - Integers are parsed as base-10 `i64` first, then narrowed with a checked
//!   conversion. A value that does not fit the declared width is a
//!   [`LoadError::Coercion`], never a silent truncation.
//! - Unsigned fields reject negative values before narrowing.
//! - Kind names follow the declared width (`int8`, `uint32`, `int` for `isize`, ...).

use crate::loader::LoadError;

/// A struct whose fields can be bound from parsed variables.
///
/// Usually implemented with [`impl_record!`](crate::impl_record). A manual
/// implementation returns one [`Field`] per bindable field, in the order the
/// fields should be bound.
pub trait Record {
    /// Mutable views of the record's fields in declaration order.
    fn fields(&mut self) -> Vec<Field<'_>>;
}

/// One field of a [`Record`].
#[derive(Debug)]
pub struct Field<'a> {
    /// Variable name looked up for this field. Matched exactly and case-sensitively.
    pub key: &'static str,
    /// Raw `required` annotation. `None` means required.
    pub required: Option<&'static str>,
    /// Where the coerced value is written.
    pub slot: Slot<'a>,
}

impl<'a> Field<'a> {
    /// Describe a required field bound to `key`.
    pub fn new(key: &'static str, slot: impl Into<Slot<'a>>) -> Self {
        Self {
            key,
            required: None,
            slot: slot.into(),
        }
    }

    /// Attach a `required` annotation, e.g. `"false"`.
    pub fn with_required(mut self, annotation: &'static str) -> Self {
        self.required = Some(annotation);
        self
    }

    /// Resolve the `required` annotation.
    ///
    /// An absent or empty annotation means required. Anything else must be a
    /// boolean string accepted by [`parse_bool`].
    pub fn is_required(&self) -> Result<bool, LoadError> {
        match self.required {
            None | Some("") => Ok(true),
            Some(annotation) => parse_bool(annotation).ok_or_else(|| LoadError::Tag {
                field: self.key.to_string(),
                value: annotation.to_string(),
            }),
        }
    }
}

/// Mutable view of a single field, tagged with its declared kind.
#[derive(Debug)]
pub enum Slot<'a> {
    Str(&'a mut String),
    Int(IntSlot<'a>),
    Uint(UintSlot<'a>),
    Bool(&'a mut bool),
    /// A field whose type cannot be bound. Binding a value into it fails.
    Unsupported { kind: &'static str },
}

/// Signed integer fields of any width.
#[derive(Debug)]
pub enum IntSlot<'a> {
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
}

/// Unsigned integer fields of any width.
#[derive(Debug)]
pub enum UintSlot<'a> {
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    Usize(&'a mut usize),
}

impl Slot<'_> {
    /// Name of the declared kind, as used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Slot::Str(_) => "string",
            Slot::Int(slot) => slot.kind(),
            Slot::Uint(slot) => slot.kind(),
            Slot::Bool(_) => "bool",
            Slot::Unsupported { kind } => *kind,
        }
    }

    /// Coerce `raw` into the field and write it.
    ///
    /// `field` only names the field in errors.
    pub fn assign(self, field: &str, raw: &str) -> Result<(), LoadError> {
        let kind = self.kind();
        let coercion = || LoadError::Coercion {
            field: field.to_string(),
            value: raw.to_string(),
            kind,
        };

        match self {
            Slot::Str(target) => {
                *target = raw.to_string();
                Ok(())
            }
            Slot::Int(slot) => {
                let value = parse_int(raw).ok_or_else(coercion)?;
                slot.set(value).ok_or_else(coercion)
            }
            Slot::Uint(slot) => {
                let value = parse_int(raw)
                    .filter(|v| *v >= 0)
                    .ok_or_else(coercion)?;
                slot.set(value).ok_or_else(coercion)
            }
            Slot::Bool(target) => {
                *target = parse_bool(raw).ok_or_else(coercion)?;
                Ok(())
            }
            Slot::Unsupported { kind } => Err(LoadError::UnsupportedType {
                field: field.to_string(),
                kind,
            }),
        }
    }
}

impl IntSlot<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            IntSlot::I8(_) => "int8",
            IntSlot::I16(_) => "int16",
            IntSlot::I32(_) => "int32",
            IntSlot::I64(_) => "int64",
            IntSlot::Isize(_) => "int",
        }
    }

    fn set(self, value: i64) -> Option<()> {
        match self {
            IntSlot::I8(target) => narrow(value, target),
            IntSlot::I16(target) => narrow(value, target),
            IntSlot::I32(target) => narrow(value, target),
            IntSlot::I64(target) => narrow(value, target),
            IntSlot::Isize(target) => narrow(value, target),
        }
    }
}

impl UintSlot<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            UintSlot::U8(_) => "uint8",
            UintSlot::U16(_) => "uint16",
            UintSlot::U32(_) => "uint32",
            UintSlot::U64(_) => "uint64",
            UintSlot::Usize(_) => "uint",
        }
    }

    fn set(self, value: i64) -> Option<()> {
        match self {
            UintSlot::U8(target) => narrow(value, target),
            UintSlot::U16(target) => narrow(value, target),
            UintSlot::U32(target) => narrow(value, target),
            UintSlot::U64(target) => narrow(value, target),
            UintSlot::Usize(target) => narrow(value, target),
        }
    }
}

fn narrow<T: TryFrom<i64>>(value: i64, target: &mut T) -> Option<()> {
    *target = T::try_from(value).ok()?;
    Some(())
}

fn parse_int(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok()
}

/// Recognize a boolean string.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false
/// counterparts `0`, `f`, `F`, `FALSE`, `false`, `False`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

impl<'a> From<&'a mut String> for Slot<'a> {
    fn from(target: &'a mut String) -> Self {
        Slot::Str(target)
    }
}

impl<'a> From<&'a mut bool> for Slot<'a> {
    fn from(target: &'a mut bool) -> Self {
        Slot::Bool(target)
    }
}

macro_rules! slot_from {
    ($($ty:ty => $outer:ident($inner:ident::$variant:ident)),* $(,)?) => {
        $(
            impl<'a> From<&'a mut $ty> for Slot<'a> {
                fn from(target: &'a mut $ty) -> Self {
                    Slot::$outer($inner::$variant(target))
                }
            }
        )*
    };
}

slot_from! {
    i8 => Int(IntSlot::I8),
    i16 => Int(IntSlot::I16),
    i32 => Int(IntSlot::I32),
    i64 => Int(IntSlot::I64),
    isize => Int(IntSlot::Isize),
    u8 => Uint(UintSlot::U8),
    u16 => Uint(UintSlot::U16),
    u32 => Uint(UintSlot::U32),
    u64 => Uint(UintSlot::U64),
    usize => Uint(UintSlot::Usize),
}

macro_rules! unsupported_slot_from {
    ($($ty:ty => $kind:literal),* $(,)?) => {
        $(
            impl<'a> From<&'a mut $ty> for Slot<'a> {
                fn from(_: &'a mut $ty) -> Self {
                    Slot::Unsupported { kind: $kind }
                }
            }
        )*
    };
}

unsupported_slot_from! {
    f32 => "float32",
    f64 => "float64",
    char => "char",
}

/// Implements [`Record`] for a struct by listing its fields.
///
/// Each entry names a struct field. The variable key defaults to the field
/// name and can be overridden with `=> "Key"`. A trailing
/// `[required = "false"]` makes the field optional.
///
/// # Example
///
/// ```rust
/// use loadenv::{Record, impl_record};
///
/// #[derive(Debug, Default)]
/// struct Database {
///     host: String,
///     port: u16,
///     password: String,
/// }
///
/// impl_record!(Database {
///     host,
///     port => "DB_PORT",
///     password => "DB_PASSWORD" [required = "false"],
/// });
///
/// let mut db = Database::default();
/// let keys: Vec<_> = db.fields().iter().map(|f| f.key).collect();
/// assert_eq!(keys, ["host", "DB_PORT", "DB_PASSWORD"]);
/// ```
#[macro_export]
macro_rules! impl_record {
    ($name:ident { $($field:ident $(=> $key:literal)? $([required = $required:literal])?),* $(,)? }) => {
        impl $crate::Record for $name {
            fn fields(&mut self) -> ::std::vec::Vec<$crate::Field<'_>> {
                ::std::vec![
                    $(
                        $crate::Field::new(
                            $crate::__record_key!($field $(, $key)?),
                            &mut self.$field,
                        )
                        $(.with_required($required))?
                    ),*
                ]
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __record_key {
    ($field:ident) => {
        ::core::stringify!($field)
    };
    ($field:ident, $key:literal) => {
        $key
    };
}
