// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Scalar value types a function can take or return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarType {
    Int,
    Int64,
    Bool,
}

impl ScalarType {
    /// Descriptor keyword for this type.
    pub fn keyword(&self) -> &'static str {
        match self {
            ScalarType::Int => "int",
            ScalarType::Int64 => "int64",
            ScalarType::Bool => "bool",
        }
    }
}

impl FromStr for ScalarType {
    type Err = ValueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(ScalarType::Int),
            "int64" => Ok(ScalarType::Int64),
            "bool" => Ok(ScalarType::Bool),
            other => Err(ValueTypeError::UnknownScalar(other.to_string())),
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueTypeError {
    #[error("unknown scalar type '{0}' (expected int, int64 or bool)")]
    UnknownScalar(String),
    #[error("malformed array suffix in type '{0}'")]
    MalformedArray(String),
}

/// A scalar type with zero or more array dimensions.
///
/// Written as the scalar keyword followed by one `[]` per dimension,
/// e.g. `int`, `int64[]`, `int[][]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ValueType {
    pub scalar: ScalarType,
    pub dimensions: u8,
}

impl ValueType {
    pub fn scalar(scalar: ScalarType) -> Self {
        Self {
            scalar,
            dimensions: 0,
        }
    }

    pub fn array(scalar: ScalarType, dimensions: u8) -> Self {
        Self { scalar, dimensions }
    }

    pub fn is_array(&self) -> bool {
        self.dimensions > 0
    }
}

impl FromStr for ValueType {
    type Err = ValueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let base_end = trimmed.find('[').unwrap_or(trimmed.len());
        let (base, mut suffix) = trimmed.split_at(base_end);
        let scalar = base.trim_end().parse::<ScalarType>()?;

        let mut dimensions: u8 = 0;
        while !suffix.is_empty() {
            suffix = suffix
                .strip_prefix("[]")
                .ok_or_else(|| ValueTypeError::MalformedArray(s.to_string()))?;
            dimensions = dimensions
                .checked_add(1)
                .ok_or_else(|| ValueTypeError::MalformedArray(s.to_string()))?;
        }

        Ok(Self { scalar, dimensions })
    }
}

impl TryFrom<String> for ValueType {
    type Error = ValueTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ValueType> for String {
    fn from(value: ValueType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scalar)?;
        for _ in 0..self.dimensions {
            f.write_str("[]")?;
        }
        Ok(())
    }
}
