use std::collections::BTreeMap;

use crate::interpreter::value::Value;

/// What kind of body an activation record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// The main program body.
    Program,
    /// A procedure body.
    Procedure,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Program => write!(f, "PROGRAM"),
            Self::Procedure => write!(f, "PROCEDURE"),
        }
    }
}

/// The runtime frame of one program or procedure execution.
///
/// Holds the variables bound while the body runs, plus a static link to the
/// record of the lexically enclosing body so that outer variables stay
/// reachable from nested procedures.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationRecord {
    name:          String,
    kind:          RecordKind,
    nesting_level: usize,
    static_link:   Option<usize>,
    members:       BTreeMap<String, Value>,
}

impl ActivationRecord {
    /// Creates an empty record.
    ///
    /// # Parameters
    /// - `name`: Name of the program or procedure.
    /// - `kind`: Program or procedure.
    /// - `nesting_level`: Equal to the level of the scope the body's own
    ///   declarations live in.
    /// - `static_link`: Call stack index of the lexically enclosing record,
    ///   `None` for the program record.
    #[must_use]
    pub fn new(name: impl Into<String>,
               kind: RecordKind,
               nesting_level: usize,
               static_link: Option<usize>)
               -> Self {
        Self { name: name.into(),
               kind,
               nesting_level,
               static_link,
               members: BTreeMap::new() }
    }

    /// The program or procedure name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is a program or procedure record.
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        self.kind
    }

    /// The nesting level.
    #[must_use]
    pub const fn nesting_level(&self) -> usize {
        self.nesting_level
    }

    /// Call stack index of the lexically enclosing record.
    #[must_use]
    pub const fn static_link(&self) -> Option<usize> {
        self.static_link
    }

    /// Returns the value bound to `name`, if any.
    ///
    /// # Example
    /// ```
    /// use pascalina::interpreter::{
    ///     call_stack::{ActivationRecord, RecordKind},
    ///     value::Value,
    /// };
    ///
    /// let mut record = ActivationRecord::new("Main", RecordKind::Program, 1, None);
    /// assert_eq!(record.get("x"), None);
    ///
    /// record.set("x", Value::Integer(3));
    /// assert_eq!(record.get("x"), Some(Value::Integer(3)));
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.members.get(name).copied()
    }

    /// Binds `name` to `value`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.members.insert(name.into(), value);
    }

    /// Iterates over the bindings in name order.
    pub fn members(&self) -> impl Iterator<Item = (&str, Value)> {
        self.members.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl std::fmt::Display for ActivationRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} {}", self.nesting_level, self.kind, self.name)?;
        for (name, value) in &self.members {
            write!(f, "\n   {name:<20}: {value}")?;
        }
        Ok(())
    }
}

/// The stack of active records; the last one is currently executing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallStack {
    records: Vec<ActivationRecord>,
}

impl CallStack {
    /// Creates an empty call stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Pushes a record, making it the current one.
    pub fn push(&mut self, record: ActivationRecord) {
        self.records.push(record);
    }

    /// Removes and returns the current record.
    pub fn pop(&mut self) -> Option<ActivationRecord> {
        self.records.pop()
    }

    /// Returns the current record.
    #[must_use]
    pub fn peek(&self) -> Option<&ActivationRecord> {
        self.records.last()
    }

    /// Number of active records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no record is active.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at `index`, counted from the bottom.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ActivationRecord> {
        self.records.get(index)
    }

    /// Mutable access to the record at `index`, counted from the bottom.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut ActivationRecord> {
        self.records.get_mut(index)
    }

    /// Follows the static chain from the current record to the record at
    /// nesting level `level`.
    ///
    /// # Returns
    /// The index of that record, or `None` if the chain has no record at
    /// that level.
    ///
    /// # Example
    /// ```
    /// use pascalina::interpreter::call_stack::{ActivationRecord, CallStack, RecordKind};
    ///
    /// let mut stack = CallStack::new();
    /// stack.push(ActivationRecord::new("Main", RecordKind::Program, 1, None));
    /// stack.push(ActivationRecord::new("Outer", RecordKind::Procedure, 2, Some(0)));
    /// stack.push(ActivationRecord::new("Inner", RecordKind::Procedure, 3, Some(1)));
    /// // A recursive call of Outer from Inner links back to Main.
    /// stack.push(ActivationRecord::new("Outer", RecordKind::Procedure, 2, Some(0)));
    ///
    /// assert_eq!(stack.resolve(2), Some(3));
    /// assert_eq!(stack.resolve(1), Some(0));
    /// assert_eq!(stack.resolve(3), None);
    /// ```
    #[must_use]
    pub fn resolve(&self, level: usize) -> Option<usize> {
        let mut index = self.records.len().checked_sub(1)?;
        loop {
            let record = self.records.get(index)?;
            if record.nesting_level == level {
                return Some(index);
            }
            index = record.static_link?;
        }
    }
}

impl std::fmt::Display for CallStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CALL STACK")?;
        for record in self.records.iter().rev() {
            write!(f, "\n{record}")?;
        }
        Ok(())
    }
}
