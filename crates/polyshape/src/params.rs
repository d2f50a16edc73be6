//! Parameter schemas declared by polytope builders, and validation of
//! user-supplied parameter values against them.
//!
//! Parameters arrive either as a JSON object ([`RawParams`]) or as the
//! positional arguments of a generated ID such as `orbit_polytope:1,2,2,3`.
//! Either way, every value is checked before a builder sees it; nothing falls
//! back to a default silently.

use std::str::FromStr;

use indexmap::IndexMap;
use polymath::Float;
use serde::{Deserialize, Serialize};

/// Unvalidated parameters, as a JSON object.
pub type RawParams = serde_json::Map<String, serde_json::Value>;

/// Error produced when parameters do not match a builder's schema.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum ParamError {
    #[error("unknown parameter {key:?}")]
    UnknownKey { key: String },
    #[error("missing parameter {key:?}")]
    Missing { key: String },
    #[error("value for parameter {key:?} must be {expected}")]
    WrongType { key: String, expected: &'static str },
    #[error("value for parameter {key:?} has {actual} components; expected {expected}")]
    WrongDimension {
        key: String,
        expected: usize,
        actual: usize,
    },
    #[error("component {index} of parameter {key:?} is not a finite number")]
    NonFinite { key: String, index: usize },
    #[error("value {value:?} for parameter {key:?} is not one of {options:?}")]
    UnsupportedOption {
        key: String,
        value: String,
        options: Vec<String>,
    },
    #[error("expected {expected} arguments; got {actual}")]
    WrongArgCount { expected: usize, actual: usize },
    #[error("argument {arg:?} for parameter {key:?} is not a number")]
    BadArg { key: String, arg: String },
}

/// Declaration of a single builder parameter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParamSpec {
    /// Fixed-length numeric tuple.
    Vector {
        /// Default value, of length `dimension`.
        default: Vec<Float>,
        /// Number of components.
        dimension: usize,
        /// Human-friendly name.
        name: String,
        /// Human-friendly description.
        description: String,
    },
    /// Choice from a fixed set of strings. Values are matched ignoring ASCII
    /// case and stored as the canonical option.
    Dropdown {
        /// Allowed values.
        options: Vec<String>,
        /// Alternative spellings, each mapped to one of `options`.
        #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
        aliases: IndexMap<String, String>,
        /// Default value, which is one of `options`.
        default: String,
        /// Human-friendly name.
        name: String,
        /// Human-friendly description.
        description: String,
    },
}

impl ParamSpec {
    /// Constructs a vector parameter whose dimension is the length of
    /// `default`.
    pub fn vector(
        name: impl Into<String>,
        description: impl Into<String>,
        default: impl Into<Vec<Float>>,
    ) -> Self {
        let default = default.into();
        Self::Vector {
            dimension: default.len(),
            default,
            name: name.into(),
            description: description.into(),
        }
    }
    /// Constructs a dropdown parameter.
    pub fn dropdown(
        name: impl Into<String>,
        description: impl Into<String>,
        options: impl IntoIterator<Item = impl ToString>,
        default: impl Into<String>,
    ) -> Self {
        Self::Dropdown {
            options: options.into_iter().map(|s| s.to_string()).collect(),
            aliases: IndexMap::new(),
            default: default.into(),
            name: name.into(),
            description: description.into(),
        }
    }
    /// Adds an alternative spelling for one of the options of a dropdown
    /// parameter. Has no effect on other parameters.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>, option: impl ToString) -> Self {
        if let Self::Dropdown { aliases, .. } = &mut self {
            aliases.insert(alias.into(), option.to_string());
        }
        self
    }

    /// Returns the human-friendly name of the parameter.
    pub fn name(&self) -> &str {
        match self {
            Self::Vector { name, .. } | Self::Dropdown { name, .. } => name,
        }
    }
    /// Returns the default value of the parameter.
    pub fn default_value(&self) -> ParamValue {
        match self {
            Self::Vector { default, .. } => ParamValue::Vector(default.clone()),
            Self::Dropdown { default, .. } => ParamValue::Choice(default.clone()),
        }
    }
    /// Returns the number of generated-ID arguments the parameter consumes.
    pub fn arg_count(&self) -> usize {
        match self {
            Self::Vector { dimension, .. } => *dimension,
            Self::Dropdown { .. } => 1,
        }
    }

    /// Validates a JSON value for this parameter.
    pub fn validate_json(
        &self,
        key: &str,
        value: &serde_json::Value,
    ) -> Result<ParamValue, ParamError> {
        let wrong_type = |expected| ParamError::WrongType {
            key: key.to_owned(),
            expected,
        };
        let value = match self {
            Self::Vector { .. } => ParamValue::Vector(
                value
                    .as_array()
                    .ok_or_else(|| wrong_type("an array of numbers"))?
                    .iter()
                    .map(|x| x.as_f64().ok_or_else(|| wrong_type("an array of numbers")))
                    .collect::<Result<_, _>>()?,
            ),
            Self::Dropdown { .. } => ParamValue::Choice(
                value
                    .as_str()
                    .ok_or_else(|| wrong_type("a string"))?
                    .to_owned(),
            ),
        };
        self.check(key, value)
    }

    /// Parses generated-ID arguments for this parameter. `args` must have
    /// length [`Self::arg_count()`].
    pub fn parse_args(&self, key: &str, args: &[&str]) -> Result<ParamValue, ParamError> {
        let value = match self {
            Self::Vector { .. } => ParamValue::Vector(
                args.iter()
                    .map(|arg| {
                        arg.trim().parse().map_err(|_| ParamError::BadArg {
                            key: key.to_owned(),
                            arg: (*arg).to_owned(),
                        })
                    })
                    .collect::<Result<_, _>>()?,
            ),
            Self::Dropdown { .. } => ParamValue::Choice(args.concat()),
        };
        self.check(key, value)
    }

    /// Checks that `value` has the right shape and range for this parameter.
    fn check(&self, key: &str, value: ParamValue) -> Result<ParamValue, ParamError> {
        match (self, &value) {
            (Self::Vector { dimension, .. }, ParamValue::Vector(v)) => {
                if v.len() != *dimension {
                    return Err(ParamError::WrongDimension {
                        key: key.to_owned(),
                        expected: *dimension,
                        actual: v.len(),
                    });
                }
                if let Some(index) = v.iter().position(|x| !x.is_finite()) {
                    return Err(ParamError::NonFinite {
                        key: key.to_owned(),
                        index,
                    });
                }
            }
            (Self::Dropdown { options, aliases, .. }, ParamValue::Choice(s)) => {
                let canonical = options.iter().find(|o| o.eq_ignore_ascii_case(s)).or_else(|| {
                    aliases
                        .iter()
                        .find(|(alias, _)| alias.eq_ignore_ascii_case(s))
                        .map(|(_, option)| option)
                });
                return match canonical {
                    Some(option) => Ok(ParamValue::Choice(option.clone())),
                    None => Err(ParamError::UnsupportedOption {
                        key: key.to_owned(),
                        value: s.clone(),
                        options: options.clone(),
                    }),
                };
            }
            (Self::Vector { .. }, _) => {
                return Err(ParamError::WrongType {
                    key: key.to_owned(),
                    expected: "an array of numbers",
                });
            }
            (Self::Dropdown { .. }, _) => {
                return Err(ParamError::WrongType {
                    key: key.to_owned(),
                    expected: "a string",
                });
            }
        }
        Ok(value)
    }
}

/// Validated value of a single parameter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ParamValue {
    /// Value of a vector parameter.
    Vector(Vec<Float>),
    /// Value of a dropdown parameter.
    Choice(String),
}

impl ParamValue {
    /// Returns the value as generated-ID arguments.
    pub fn to_args(&self) -> Vec<String> {
        match self {
            Self::Vector(v) => v.iter().map(|x| x.to_string()).collect(),
            Self::Choice(s) => vec![s.clone()],
        }
    }
}

/// Parameter declarations for a builder, in display order.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(transparent)]
pub struct ParamSchema(IndexMap<String, ParamSpec>);

impl ParamSchema {
    /// Constructs an empty schema.
    pub fn new() -> Self {
        Self::default()
    }
    /// Adds a parameter to the schema.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, spec: ParamSpec) -> Self {
        self.0.insert(key.into(), spec);
        self
    }

    /// Returns the declaration for a parameter.
    pub fn get(&self, key: &str) -> Option<&ParamSpec> {
        self.0.get(key)
    }
    /// Returns an iterator over parameter keys and declarations.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamSpec)> {
        self.0.iter()
    }
    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// Returns whether the schema has no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Returns the total number of arguments in a generated ID for this
    /// schema.
    pub fn arg_count(&self) -> usize {
        self.0.values().map(ParamSpec::arg_count).sum()
    }

    /// Returns the default value of every parameter.
    pub fn defaults(&self) -> Params {
        Params(
            self.iter()
                .map(|(key, spec)| (key.clone(), spec.default_value()))
                .collect(),
        )
    }

    /// Validates JSON parameters against the schema. Omitted parameters take
    /// their default values.
    pub fn validate(&self, raw: Option<&RawParams>) -> Result<Params, ParamError> {
        let Some(raw) = raw else {
            return Ok(self.defaults());
        };
        if let Some(key) = raw.keys().find(|key| !self.0.contains_key(*key)) {
            return Err(ParamError::UnknownKey { key: key.clone() });
        }
        self.iter()
            .map(|(key, spec)| {
                let value = match raw.get(key) {
                    Some(v) => spec.validate_json(key, v)?,
                    None => spec.default_value(),
                };
                Ok((key.clone(), value))
            })
            .collect::<Result<_, _>>()
            .map(Params)
    }

    /// Parses the positional arguments of a generated ID. Vector parameters
    /// consume one argument per component; dropdowns consume one argument.
    pub fn parse_args(&self, args: &[&str]) -> Result<Params, ParamError> {
        let expected = self.arg_count();
        if args.len() != expected {
            return Err(ParamError::WrongArgCount {
                expected,
                actual: args.len(),
            });
        }
        let mut remaining = args;
        self.iter()
            .map(|(key, spec)| {
                let (these, rest) = remaining.split_at(spec.arg_count());
                remaining = rest;
                Ok((key.clone(), spec.parse_args(key, these)?))
            })
            .collect::<Result<_, _>>()
            .map(Params)
    }
}

/// Validated parameter values, keyed by parameter key in schema order.
#[derive(Serialize, Debug, Default, Clone, PartialEq)]
#[serde(transparent)]
pub struct Params(IndexMap<String, ParamValue>);

impl Params {
    /// Returns the value of a parameter.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }
    /// Returns an iterator over parameter keys and values.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.0.iter()
    }
    /// Returns whether there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the value of a vector parameter.
    pub fn vector(&self, key: &str) -> Result<&[Float], ParamError> {
        match self.get(key) {
            Some(ParamValue::Vector(v)) => Ok(v),
            Some(ParamValue::Choice(_)) => Err(ParamError::WrongType {
                key: key.to_owned(),
                expected: "an array of numbers",
            }),
            None => Err(ParamError::Missing {
                key: key.to_owned(),
            }),
        }
    }
    /// Returns the value of a dropdown parameter.
    pub fn choice(&self, key: &str) -> Result<&str, ParamError> {
        match self.get(key) {
            Some(ParamValue::Choice(s)) => Ok(s),
            Some(ParamValue::Vector(_)) => Err(ParamError::WrongType {
                key: key.to_owned(),
                expected: "a string",
            }),
            None => Err(ParamError::Missing {
                key: key.to_owned(),
            }),
        }
    }
    /// Returns the value of a dropdown parameter parsed into an enum.
    pub fn parse_choice<T: FromStr>(&self, key: &str) -> Result<T, ParamError> {
        let s = self.choice(key)?;
        s.parse().map_err(|_| ParamError::UnsupportedOption {
            key: key.to_owned(),
            value: s.to_owned(),
            options: vec![],
        })
    }

    /// Returns the parameters as positional arguments for a generated ID.
    pub fn to_args(&self) -> Vec<String> {
        self.0.values().flat_map(ParamValue::to_args).collect()
    }
}
