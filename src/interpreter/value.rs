use crate::util::num::parse_number;

/// Represents a runtime value in the interpreter.
///
/// Values are dynamically typed. Arithmetic never inspects the variant
/// directly; it goes through [`Value::to_number`], and conditions go through
/// [`Value::is_truthy`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// A double precision floating-point number.
    Number(f64),
    /// A string.
    Str(String),
    /// A boolean.
    Bool(bool),
    /// The absence of a value; what every function call evaluates to.
    #[default]
    Nil,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl Value {
    /// Coerces the value to a number. Never fails.
    ///
    /// - numbers are returned as-is,
    /// - strings are parsed as `f64`, falling back to `0.0`,
    /// - booleans become `1.0` or `0.0`,
    /// - `Nil` becomes `0.0`.
    ///
    /// # Example
    /// ```
    /// use nula::interpreter::value::Value;
    ///
    /// assert_eq!(Value::from("2.5").to_number(), 2.5);
    /// assert_eq!(Value::from("abc").to_number(), 0.0);
    /// assert_eq!(Value::Nil.to_number(), 0.0);
    /// ```
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Str(s) => parse_number(s),
            Self::Bool(b) => f64::from(u8::from(*b)),
            Self::Nil => 0.0,
        }
    }

    /// Returns the truthiness of the value.
    ///
    /// Numbers are truthy when nonzero (so `NaN` is truthy), strings when
    /// non-empty, booleans as themselves. `Nil` is truthy.
    ///
    /// # Example
    /// ```
    /// use nula::interpreter::value::Value;
    ///
    /// assert!(!Value::Number(0.0).is_truthy());
    /// assert!(Value::from("no").is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(Value::Nil.is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::Nil => true,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Nil => write!(f, "nil"),
        }
    }
}
