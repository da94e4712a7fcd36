//! The path accessor: a root value bound to read and write operations.
//!
//! An [`Accessor`] owns a JSON root and resolves delimiter-separated path
//! expressions against it. Reads never modify the root. Writes create
//! missing intermediate containers by default (upsert), choosing a sequence
//! when the following segment looks like an index and a mapping otherwise.
//!
//! Every operation has a plain `Result` form. `find` and `update` also have
//! callback forms (`find_then`, `update_then`) that hand the outcome to a
//! closure, either immediately or from a FIFO queue drained by
//! [`Accessor::run_pending`], depending on the configured [`Delivery`].
//!
//! # Examples
//!
//! ```
//! use dotpath::Accessor;
//! use serde_json::json;
//!
//! let mut accessor = Accessor::new(json!({"a": 5}));
//! accessor.update("b.c.0", json!(10))?.update("b.d", json!(true))?;
//!
//! assert_eq!(accessor.root(), &json!({"a": 5, "b": {"c": [10], "d": true}}));
//! assert_eq!(accessor.find("b.c.0")?, Some(&json!(10)));
//! assert_eq!(accessor.find("b.missing")?, None);
//! # Ok::<(), dotpath::Error>(())
//! ```

use std::collections::VecDeque;
use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::config::{AccessorConfig, ConfigValidator, Delivery};
use crate::error::{Error, Result};
use crate::path::{Delimiter, Depth, PathExpr, PathResolver};
use crate::value::{self, CompositeMut, ValueKind};

type Completion = Box<dyn FnOnce()>;

/// Per-call options for write operations.
///
/// # Examples
///
/// ```
/// use dotpath::UpdateOptions;
///
/// let strict = UpdateOptions::new().with_upsert(false);
/// assert_eq!(strict.upsert, Some(false));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOptions {
    /// Whether missing intermediate containers are created.
    ///
    /// `None` falls back to the accessor's default.
    pub upsert: Option<bool>,
}

impl UpdateOptions {
    /// Create options that defer to the accessor's defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the upsert policy for this call.
    #[must_use]
    pub fn with_upsert(mut self, upsert: bool) -> Self {
        self.upsert = Some(upsert);
        self
    }
}

/// Reads and writes values inside a bound JSON root by path.
pub struct Accessor {
    root: Value,
    delimiter: Delimiter,
    upsert: bool,
    delivery: Delivery,
    pending: VecDeque<Completion>,
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("root", &self.root)
            .field("delimiter", &self.delimiter)
            .field("upsert", &self.upsert)
            .field("delivery", &self.delivery)
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl Accessor {
    /// Bind a new accessor to `root` with default settings.
    ///
    /// The defaults are delimiter `.`, upsert enabled and immediate delivery.
    #[must_use]
    pub fn new(root: Value) -> Self {
        Self {
            root,
            delimiter: Delimiter::default(),
            upsert: true,
            delivery: Delivery::default(),
            pending: VecDeque::new(),
        }
    }

    /// Bind a new accessor to `root` using settings from a configuration.
    ///
    /// Unset fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the configuration is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotpath::{Accessor, AccessorConfig};
    /// use serde_json::json;
    ///
    /// let config = AccessorConfig {
    ///     delimiter: Some("/".to_string()),
    ///     ..Default::default()
    /// };
    /// let accessor = Accessor::from_config(json!({"a": {"b": 1}}), &config).unwrap();
    /// assert_eq!(accessor.find("a/b").unwrap(), Some(&json!(1)));
    /// ```
    pub fn from_config(root: Value, config: &AccessorConfig) -> Result<Self> {
        ConfigValidator::validate(config)?;

        let mut accessor = Self::new(root);
        if let Some(ref delimiter) = config.delimiter {
            accessor.delimiter = Delimiter::new(delimiter.as_str())?;
        }
        if let Some(upsert) = config.upsert {
            accessor.upsert = upsert;
        }
        if let Some(delivery) = config.delivery {
            accessor.delivery = delivery;
        }
        Ok(accessor)
    }

    /// Use a different segment delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the default upsert policy for writes.
    #[must_use]
    pub fn with_upsert(mut self, upsert: bool) -> Self {
        self.upsert = upsert;
        self
    }

    /// Set how callback outcomes are delivered.
    #[must_use]
    pub fn with_delivery(mut self, delivery: Delivery) -> Self {
        self.delivery = delivery;
        self
    }

    /// Replace the bound root.
    pub fn rebind(&mut self, root: Value) -> &mut Self {
        self.root = root;
        self
    }

    /// The bound root.
    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Consume the accessor and return the bound root.
    ///
    /// Pending deferred completions are dropped without running.
    #[must_use]
    pub fn into_root(self) -> Value {
        self.root
    }

    /// The configured segment delimiter.
    #[must_use]
    pub fn delimiter(&self) -> &Delimiter {
        &self.delimiter
    }

    /// The default upsert policy for writes.
    #[must_use]
    pub fn upsert(&self) -> bool {
        self.upsert
    }

    /// The configured delivery mode.
    #[must_use]
    pub fn delivery(&self) -> Delivery {
        self.delivery
    }

    /// Split a path string on this accessor's delimiter.
    #[must_use]
    pub fn parse_path(&self, path: &str) -> PathExpr {
        PathExpr::parse(path, &self.delimiter)
    }

    /// Look up the value at `path`.
    ///
    /// An empty path returns the root. A path that does not exist returns
    /// `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotIndexable`] if the path runs through a scalar.
    pub fn find(&self, path: &str) -> Result<Option<&Value>> {
        let expr = self.parse_path(path);
        PathResolver::new().resolve(&self.root, &expr, Depth::Full)
    }

    /// Look up the value at `path` and hand a copy of the outcome to `callback`.
    ///
    /// Errors are delivered to the callback, never returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotpath::{Accessor, Delivery};
    /// use serde_json::json;
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    ///
    /// let seen = Rc::new(RefCell::new(None));
    /// let sink = Rc::clone(&seen);
    ///
    /// let mut accessor = Accessor::new(json!({"a": 1})).with_delivery(Delivery::Deferred);
    /// accessor.find_then("a", move |outcome| *sink.borrow_mut() = outcome.ok().flatten());
    /// assert!(seen.borrow().is_none());
    ///
    /// accessor.run_pending();
    /// assert_eq!(*seen.borrow(), Some(json!(1)));
    /// ```
    pub fn find_then<F>(&mut self, path: &str, callback: F) -> &mut Self
    where
        F: FnOnce(Result<Option<Value>>) + 'static,
    {
        let outcome = self.find(path).map(|found| found.cloned());
        self.deliver(move || callback(outcome));
        self
    }

    /// Assign `value` at `path` using the default upsert policy.
    ///
    /// # Errors
    ///
    /// See [`Accessor::update_with`].
    pub fn update(&mut self, path: &str, value: Value) -> Result<&mut Self> {
        self.update_with(path, value, &UpdateOptions::default())
    }

    /// Assign `value` at `path`.
    ///
    /// With upsert enabled, missing intermediate containers are created.
    /// Containers created this way stay in place even when the final
    /// assignment then fails.
    ///
    /// # Errors
    ///
    /// - [`Error::NotAssignable`] if `path` is empty
    /// - [`Error::NotIndexable`] if the path runs through a scalar
    /// - [`Error::NotFound`] if upsert is disabled and an intermediate
    ///   container is missing
    /// - [`Error::InvalidIndex`] if a sequence is addressed with a segment
    ///   that is not an index
    /// - [`Error::IndexOutOfRange`] if a sequence index lies more than
    ///   [`MAX_INDEX_GAP`](crate::value::MAX_INDEX_GAP) slots past the end
    pub fn update_with(
        &mut self,
        path: &str,
        value: Value,
        options: &UpdateOptions,
    ) -> Result<&mut Self> {
        let upsert = options.upsert.unwrap_or(self.upsert);
        self.assign(path, value, upsert)?;
        Ok(self)
    }

    /// Assign `value` at `path` and hand the outcome to `callback`.
    ///
    /// On success the callback receives a copy of the whole root.
    pub fn update_then<F>(
        &mut self,
        path: &str,
        value: Value,
        options: &UpdateOptions,
        callback: F,
    ) -> &mut Self
    where
        F: FnOnce(Result<Value>) + 'static,
    {
        let upsert = options.upsert.unwrap_or(self.upsert);
        let outcome = self
            .assign(path, value, upsert)
            .map(|()| self.root.clone());
        self.deliver(move || callback(outcome));
        self
    }

    /// Resolve `path` and call `f` with the value found there as receiver.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotIndexable`] if the path runs through a scalar.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotpath::Accessor;
    /// use serde_json::json;
    ///
    /// let accessor = Accessor::new(json!({"nums": [1, 2, 3]}));
    /// let total = accessor
    ///     .apply("nums", |nums, args| {
    ///         let base: i64 = nums
    ///             .and_then(|v| v.as_array())
    ///             .map(|items| items.iter().filter_map(|v| v.as_i64()).sum::<i64>())
    ///             .unwrap_or(0);
    ///         base + args.iter().filter_map(|v| v.as_i64()).sum::<i64>()
    ///     }, &[json!(10)])
    ///     .unwrap();
    /// assert_eq!(total, 16);
    /// ```
    pub fn apply<F, R>(&self, path: &str, f: F, args: &[Value]) -> Result<R>
    where
        F: FnOnce(Option<&Value>, &[Value]) -> R,
    {
        let receiver = self.find(path)?;
        Ok(f(receiver, args))
    }

    /// Return an independent deep copy of the composite at `path`.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if nothing is at `path`
    /// - [`Error::Unsupported`] if the value there is a scalar
    /// - [`Error::NotIndexable`] if the path runs through a scalar
    pub fn copy(&self, path: &str) -> Result<Value> {
        Ok(self.composite_at("copy", path)?.clone())
    }

    /// Deserialize the composite at `path` into `T`.
    ///
    /// # Errors
    ///
    /// Same as [`Accessor::copy`], plus [`Error::Serialization`] if the value
    /// does not fit `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotpath::Accessor;
    /// use serde::Deserialize;
    /// use serde_json::json;
    ///
    /// #[derive(Deserialize)]
    /// struct Server {
    ///     host: String,
    ///     port: u16,
    /// }
    ///
    /// let accessor = Accessor::new(json!({"servers": [{"host": "db", "port": 5432}]}));
    /// let server: Server = accessor.copy_as("servers.0").unwrap();
    /// assert_eq!(server.host, "db");
    /// assert_eq!(server.port, 5432);
    /// ```
    pub fn copy_as<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let found = self.composite_at("copy", path)?;
        Ok(T::deserialize(found)?)
    }

    /// Merge `extras` and then the mapping at `path` into a new mapping.
    ///
    /// Later sources override earlier ones, and the mapping at `path` is
    /// applied last. None of the inputs are modified.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if nothing is at `path`
    /// - [`Error::Unsupported`] if the value there is not a mapping
    /// - [`Error::NotIndexable`] if the path runs through a scalar
    pub fn mixin<'a, I>(&self, path: &str, extras: I) -> Result<Value>
    where
        I: IntoIterator<Item = &'a Map<String, Value>>,
    {
        let found = self.existing_at(path)?;
        let Value::Object(source) = found else {
            return Err(Error::Unsupported {
                operation: "mixin",
                path: path.to_string(),
                kind: ValueKind::of(found),
            });
        };

        let mut merged = Map::new();
        for extra in extras {
            merged.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        merged.extend(source.iter().map(|(k, v)| (k.clone(), v.clone())));
        Ok(Value::Object(merged))
    }

    /// Number of deferred completions waiting to run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Run queued completions in the order they were queued.
    ///
    /// Returns how many ran.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while let Some(completion) = self.pending.pop_front() {
            completion();
            ran += 1;
        }
        ran
    }

    fn deliver(&mut self, completion: impl FnOnce() + 'static) {
        match self.delivery {
            Delivery::Immediate => completion(),
            Delivery::Deferred => self.pending.push_back(Box::new(completion)),
        }
    }

    fn assign(&mut self, path: &str, value: Value, upsert: bool) -> Result<()> {
        let expr = self.parse_path(path);
        let Some(key) = expr.last() else {
            return Err(Error::NotAssignable {
                path: path.to_string(),
            });
        };

        let resolver = PathResolver::new().with_upsert(upsert);
        let Some(parent) = resolver.resolve_mut(&mut self.root, &expr, Depth::Parent)? else {
            return Err(Error::NotFound {
                path: path.to_string(),
            });
        };

        let kind = ValueKind::of(parent);
        match value::as_composite_mut(parent) {
            Some(CompositeMut::Mapping(map)) => {
                map.insert(key.to_string(), value);
            }
            Some(CompositeMut::Sequence(items)) => {
                let idx = value::parse_index(key).ok_or_else(|| Error::InvalidIndex {
                    segment: key.to_string(),
                })?;
                value::set_index(items, idx, value)?;
            }
            None => {
                return Err(Error::NotIndexable {
                    segment: key.to_string(),
                    kind,
                });
            }
        }

        log::debug!("assigned value at '{path}'");
        Ok(())
    }

    fn existing_at(&self, path: &str) -> Result<&Value> {
        self.find(path)?.ok_or_else(|| Error::NotFound {
            path: path.to_string(),
        })
    }

    fn composite_at(&self, operation: &'static str, path: &str) -> Result<&Value> {
        let found = self.existing_at(path)?;
        if value::is_indexable(found) {
            Ok(found)
        } else {
            Err(Error::Unsupported {
                operation,
                path: path.to_string(),
                kind: ValueKind::of(found),
            })
        }
    }
}
