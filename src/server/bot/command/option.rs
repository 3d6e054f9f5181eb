//! Typed access to slash command options.
//!
//! Serenity hands options over as borrowed `ResolvedOption`s. They are copied into a
//! `CommandInput` once per interaction so command handlers can look values up by name
//! and turn a missing or mistyped option into a normal error reply.

use serenity::all::{ResolvedOption, ResolvedValue};
use std::collections::HashMap;

use crate::server::error::AppError;

#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    String(String),
    Integer(i64),
    Boolean(bool),
    /// Discord user id of a user option.
    User(u64),
}

/// Options of one command invocation, flattened below its subcommand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandInput {
    subcommand: Option<String>,
    options: HashMap<String, OptionValue>,
}

impl CommandInput {
    pub fn from_resolved(options: &[ResolvedOption<'_>]) -> Self {
        let mut input = Self::default();
        input.collect(options);
        input
    }

    fn collect(&mut self, options: &[ResolvedOption<'_>]) {
        for option in options {
            let value = match &option.value {
                ResolvedValue::SubCommand(nested) => {
                    self.subcommand = Some(option.name.to_string());
                    self.collect(nested);
                    continue;
                }
                ResolvedValue::String(value) => OptionValue::String(value.to_string()),
                ResolvedValue::Integer(value) => OptionValue::Integer(*value),
                ResolvedValue::Boolean(value) => OptionValue::Boolean(*value),
                ResolvedValue::User(user, _) => OptionValue::User(user.id.get()),
                _ => continue,
            };
            self.options.insert(option.name.to_string(), value);
        }
    }

    /// Adds an option value; used to build inputs by hand.
    #[cfg(test)]
    pub fn with(mut self, name: &str, value: OptionValue) -> Self {
        self.options.insert(name.to_string(), value);
        self
    }

    #[cfg(test)]
    pub fn with_subcommand(mut self, name: &str) -> Self {
        self.subcommand = Some(name.to_string());
        self
    }

    pub fn subcommand(&self) -> Result<&str, AppError> {
        self.subcommand
            .as_deref()
            .ok_or_else(|| AppError::BadRequest("Missing subcommand".to_string()))
    }

    pub fn string(&self, name: &str) -> Result<&str, AppError> {
        match self.options.get(name) {
            Some(OptionValue::String(value)) => Ok(value),
            _ => Err(missing(name)),
        }
    }

    pub fn integer(&self, name: &str) -> Result<i64, AppError> {
        self.optional_integer(name)?.ok_or_else(|| missing(name))
    }

    pub fn boolean(&self, name: &str) -> Result<bool, AppError> {
        self.optional_boolean(name)?.ok_or_else(|| missing(name))
    }

    pub fn user(&self, name: &str) -> Result<u64, AppError> {
        match self.options.get(name) {
            Some(OptionValue::User(value)) => Ok(*value),
            _ => Err(missing(name)),
        }
    }

    pub fn optional_integer(&self, name: &str) -> Result<Option<i64>, AppError> {
        match self.options.get(name) {
            None => Ok(None),
            Some(OptionValue::Integer(value)) => Ok(Some(*value)),
            Some(_) => Err(mistyped(name)),
        }
    }

    pub fn optional_boolean(&self, name: &str) -> Result<Option<bool>, AppError> {
        match self.options.get(name) {
            None => Ok(None),
            Some(OptionValue::Boolean(value)) => Ok(Some(*value)),
            Some(_) => Err(mistyped(name)),
        }
    }

    /// Reads a non-negative count option, defaulting to zero.
    pub fn count(&self, name: &str) -> Result<u32, AppError> {
        let value = self.optional_integer(name)?.unwrap_or(0);

        u32::try_from(value)
            .map_err(|_| AppError::BadRequest(format!("Option '{}' must not be negative", name)))
    }
}

fn missing(name: &str) -> AppError {
    AppError::BadRequest(format!("Missing option '{}'", name))
}

fn mistyped(name: &str) -> AppError {
    AppError::BadRequest(format!("Option '{}' has the wrong type", name))
}
