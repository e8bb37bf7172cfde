use super::{
    BooleanParser, DecimalParser, DoubleParser, FloatParser, IntegerParser, RegistryError,
    TextParser, ValueParser,
};
use rust_decimal::Decimal;
use std::any::{Any, TypeId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Identifies a target type in the registry
///
/// Resolved per generic instantiation at compile time; equality and hashing
/// only look at the `TypeId`.
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: short_type_name(std::any::type_name::<T>()),
        }
    }

    /// Type name without its module path (e.g. "Decimal", "String")
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Each slot holds a `Box<dyn ValueParser<T>>` for the `T` named by its key
type ParserSlot = Box<dyn Any + Send + Sync>;

/// Dispatch table from target type to its text parser
pub struct ParserRegistry {
    map: HashMap<TypeKey, ParserSlot>,
}

impl ParserRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Create a registry with parsers for text, boolean, `i32`, `f32`, `f64`
    /// and `Decimal`
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.insert::<String>(Box::new(TextParser));
        registry.insert::<bool>(Box::new(BooleanParser));
        registry.insert::<i32>(Box::new(IntegerParser));
        registry.insert::<f32>(Box::new(FloatParser));
        registry.insert::<f64>(Box::new(DoubleParser));
        registry.insert::<Decimal>(Box::new(DecimalParser));
        registry
    }

    /// Register a parser for values of type `T`
    ///
    /// Fails with `RegistryError::DuplicateParser` when `T` already has one;
    /// the existing parser is kept.
    ///
    /// # Example
    /// ```ignore
    /// registry.register::<u8, _>(|raw: &str| {
    ///     raw.trim().parse().map_err(|e| ParseError::new(raw, "byte", format!("{}", e)))
    /// })?;
    /// ```
    pub fn register<T, P>(&mut self, parser: P) -> Result<(), RegistryError>
    where
        T: 'static,
        P: ValueParser<T> + 'static,
    {
        let key = TypeKey::of::<T>();
        match self.map.entry(key) {
            Entry::Occupied(_) => Err(RegistryError::DuplicateParser {
                type_name: key.name(),
            }),
            Entry::Vacant(slot) => {
                let parser: Box<dyn ValueParser<T>> = Box::new(parser);
                slot.insert(Box::new(parser));
                Ok(())
            }
        }
    }

    /// Look up the parser for `T`, if one is registered
    pub fn get<T: 'static>(&self) -> Option<&dyn ValueParser<T>> {
        self.map
            .get(&TypeKey::of::<T>())
            .and_then(|slot| (**slot).downcast_ref::<Box<dyn ValueParser<T>>>())
            .map(|parser| &**parser)
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.map.contains_key(&TypeKey::of::<T>())
    }

    /// Get the number of registered parsers
    pub fn parser_count(&self) -> usize {
        self.map.len()
    }

    /// List the names of all registered types, sorted
    pub fn registered_types(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.map.keys().map(|key| key.name()).collect();
        names.sort_unstable();
        names
    }

    fn insert<T: 'static>(&mut self, parser: Box<dyn ValueParser<T>>) {
        self.map.insert(TypeKey::of::<T>(), Box::new(parser));
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// Strip module paths from a plain type name; generic names are kept whole
fn short_type_name(full: &'static str) -> &'static str {
    if full.contains('<') {
        return full;
    }
    full.rsplit("::").next().unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseError;

    #[test]
    fn test_builtins_registered() {
        let registry = ParserRegistry::with_builtins();

        assert_eq!(registry.parser_count(), 6);
        assert_eq!(
            registry.registered_types(),
            vec!["Decimal", "String", "bool", "f32", "f64", "i32"]
        );
    }

    #[test]
    fn test_missing_type_has_no_parser() {
        let registry = ParserRegistry::with_builtins();

        assert!(registry.get::<u64>().is_none());
        assert!(!registry.contains::<u64>());
    }

    #[test]
    fn test_register_and_select() {
        let mut registry = ParserRegistry::new();
        registry
            .register::<u8, _>(|raw: &str| {
                raw.parse::<u8>()
                    .map_err(|e| ParseError::new(raw, "byte", e.to_string()))
            })
            .unwrap();

        let parser = registry.get::<u8>().unwrap();
        assert_eq!(parser.parse("200").unwrap(), 200);
        assert!(parser.parse("300").is_err());
    }

    #[test]
    fn test_duplicate_registration_keeps_original() {
        let mut registry = ParserRegistry::with_builtins();

        let result =
            registry.register::<bool, _>(|_: &str| -> Result<bool, ParseError> { Ok(true) });
        assert_eq!(
            result,
            Err(RegistryError::DuplicateParser { type_name: "bool" })
        );

        // Built-in parser still answers
        let parser = registry.get::<bool>().unwrap();
        assert!(!parser.parse("false").unwrap());
        assert_eq!(registry.parser_count(), 6);
    }

    #[test]
    fn test_type_key_names() {
        assert_eq!(TypeKey::of::<String>().name(), "String");
        assert_eq!(TypeKey::of::<Decimal>().name(), "Decimal");
        assert_eq!(TypeKey::of::<i32>().name(), "i32");
        assert_eq!(TypeKey::of::<u8>(), TypeKey::of::<u8>());
        assert_ne!(TypeKey::of::<u8>(), TypeKey::of::<i8>());
    }
}
