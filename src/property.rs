//! Statically declared configuration properties.
//!
//! A task exposes its configuration as a table of [`Property`] descriptors,
//! each pairing a name with a getter that renders the field to a string and a
//! setter that parses a string back into the field. The table is built at
//! compile time with the [`properties!`](crate::properties) macro, so there
//! is no runtime introspection: the descriptor order is the declaration order
//! and names are matched exactly.

use std::path::PathBuf;

/// One named, readable and writable configuration field of `T`.
pub struct Property<T> {
    name: &'static str,
    get: fn(&T) -> String,
    set: fn(&mut T, &str) -> std::result::Result<(), String>,
}

impl<T> Property<T> {
    pub const fn new(
        name: &'static str,
        get: fn(&T) -> String,
        set: fn(&mut T, &str) -> std::result::Result<(), String>,
    ) -> Self {
        Self { name, get, set }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Render the current value of this property.
    pub fn get(&self, target: &T) -> String {
        (self.get)(target)
    }

    /// Parse `value` and store it. On error the field is left untouched and
    /// the parser's message is returned.
    pub fn set(&self, target: &mut T, value: &str) -> std::result::Result<(), String> {
        (self.set)(target, value)
    }
}

impl<T> std::fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Property").field("name", &self.name).finish()
    }
}

/// A type whose configuration is described by a static property table.
pub trait Properties: Sized + 'static {
    /// All properties in declaration order.
    fn properties() -> &'static [Property<Self>];

    /// Look up a property by exact name.
    fn property(name: &str) -> Option<&'static Property<Self>> {
        Self::properties().iter().find(|p| p.name == name)
    }
}

/// Whether no two entries of `names` are equal. Usable in const context, which
/// is how [`properties!`](crate::properties) rejects duplicate names at
/// compile time.
#[doc(hidden)]
pub const fn names_are_unique(names: &[&str]) -> bool {
    let mut i = 0;
    while i < names.len() {
        let mut j = i + 1;
        while j < names.len() {
            if same_name(names[i], names[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn same_name(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut k = 0;
    while k < a.len() {
        if a[k] != b[k] {
            return false;
        }
        k += 1;
    }
    true
}

/// Conversion between a field type and its command-line string form.
pub trait PropertyValue: Sized {
    fn render(&self) -> String;
    fn parse(value: &str) -> std::result::Result<Self, String>;
}

macro_rules! impl_property_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PropertyValue for $ty {
                fn render(&self) -> String {
                    self.to_string()
                }

                fn parse(value: &str) -> std::result::Result<Self, String> {
                    value.parse::<$ty>().map_err(|e| e.to_string())
                }
            }
        )*
    };
}

impl_property_value!(
    String, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl PropertyValue for bool {
    fn render(&self) -> String {
        self.to_string()
    }

    // Hosts commonly render booleans as `True`/`False`.
    fn parse(value: &str) -> std::result::Result<Self, String> {
        if value.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if value.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(format!("expected 'true' or 'false', got '{}'", value))
        }
    }
}

impl PropertyValue for PathBuf {
    fn render(&self) -> String {
        self.to_string_lossy().into_owned()
    }

    fn parse(value: &str) -> std::result::Result<Self, String> {
        Ok(PathBuf::from(value))
    }
}

/// `None` renders as the empty string, and the empty string parses as `None`.
///
/// This makes `Some` of an empty value, such as `Some(String::new())`,
/// indistinguishable from `None` on the command line: it decodes as `None`.
impl<V: PropertyValue> PropertyValue for Option<V> {
    fn render(&self) -> String {
        self.as_ref().map(PropertyValue::render).unwrap_or_default()
    }

    fn parse(value: &str) -> std::result::Result<Self, String> {
        if value.is_empty() {
            Ok(None)
        } else {
            V::parse(value).map(Some)
        }
    }
}

/// Implement [`Properties`] for a struct by listing `"Name" => field` pairs.
///
/// Every field type must implement [`PropertyValue`]. Names must be unique
/// within one type; a repeated name fails to compile.
///
/// ```
/// #[derive(Default)]
/// struct Stamp {
///     count: u32,
///     label: String,
/// }
///
/// tasker::properties!(Stamp {
///     "Count" => count,
///     "Label" => label,
/// });
///
/// use tasker::Properties;
/// let names: Vec<_> = Stamp::properties().iter().map(|p| p.name()).collect();
/// assert_eq!(names, ["Count", "Label"]);
/// ```
///
/// ```compile_fail
/// #[derive(Default)]
/// struct Stamp {
///     count: u32,
///     total: u32,
/// }
///
/// tasker::properties!(Stamp {
///     "Count" => count,
///     "Count" => total,
/// });
/// ```
#[macro_export]
macro_rules! properties {
    ($ty:ty { $($name:literal => $field:ident),* $(,)? }) => {
        const _: () = assert!(
            $crate::property::names_are_unique(&[$($name),*]),
            "duplicate property name"
        );

        impl $crate::Properties for $ty {
            fn properties() -> &'static [$crate::Property<Self>] {
                const PROPERTIES: &[$crate::Property<$ty>] = &[
                    $(
                        $crate::Property::new(
                            $name,
                            |target: &$ty| $crate::PropertyValue::render(&target.$field),
                            |target: &mut $ty, value: &str| {
                                target.$field = $crate::PropertyValue::parse(value)?;
                                Ok(())
                            },
                        )
                    ),*
                ];
                PROPERTIES
            }
        }
    };
}
