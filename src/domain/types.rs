//! Strongly-typed value objects shared by the admin console entities.
//!
//! Identifiers are positive integers and every enumerated field travels over
//! the wire in the backend's upper-case spelling (`ACTIVE`, `CNAME`, `DESC`).
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest ban reason the backend accepts.
pub const MAX_BAN_REASON_LEN: usize = 500;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided string exceeded the allowed length.
    #[error("value cannot exceed {0} characters")]
    TooLong(usize),
    /// Provided value is not one of the known variants.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i64` backing this identifier.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(AdminId, "Identifier of an administrator account.");
id_newtype!(UserId, "Identifier of a registered platform user.");
id_newtype!(DomainId, "Identifier of a user-owned (sub)domain.");
id_newtype!(DnsRecordId, "Identifier of a DNS record.");

/// Generates a wire enum with `Display`/`FromStr` mirroring its serde spelling.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, ::serde::Serialize, ::serde::Deserialize, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Wire spelling of the variant.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::domain::types::TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($wire => Ok($name::$variant),)+
                    other => Err($crate::domain::types::TypeConstraintError::InvalidValue(
                        other.to_string(),
                    )),
                }
            }
        }
    };
}

pub(crate) use wire_enum;

wire_enum! {
    /// Account role of a platform user.
    UserRole { User => "USER", Admin => "ADMIN" }
}

wire_enum! {
    /// Lifecycle state of a user domain.
    DomainStatus { Active => "ACTIVE", Inactive => "INACTIVE", Deleted => "DELETED" }
}

wire_enum! {
    /// DNS resource record type.
    DnsRecordType {
        A => "A",
        Aaaa => "AAAA",
        Cname => "CNAME",
        Mx => "MX",
        Txt => "TXT",
        Ns => "NS",
        Srv => "SRV",
        Caa => "CAA",
    }
}

wire_enum! {
    /// Whether a DNS record is served.
    DnsRecordStatus { Enable => "ENABLE", Disable => "DISABLE" }
}

wire_enum! {
    /// Synchronisation state of a DNS record with the upstream provider.
    SyncStatus { Pending => "PENDING", Success => "SUCCESS", Failed => "FAILED" }
}

wire_enum! {
    /// Sort direction accepted by every list endpoint.
    SortDirection { Asc => "ASC", Desc => "DESC" }
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Desc
    }
}

impl SortDirection {
    /// Returns the opposite direction.
    pub const fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Trimmed, non-empty ban reason of at most [`MAX_BAN_REASON_LEN`] characters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct BanReason(String);

impl BanReason {
    pub fn new<S: Into<String>>(reason: S) -> Result<Self, TypeConstraintError> {
        let trimmed = reason.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if trimmed.chars().count() > MAX_BAN_REASON_LEN {
            return Err(TypeConstraintError::TooLong(MAX_BAN_REASON_LEN));
        }
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for BanReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for BanReason {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BanReason> for String {
    fn from(value: BanReason) -> Self {
        value.0
    }
}
