use levenshtein::levenshtein;
use once_cell::sync::Lazy;
use std::{collections::HashMap, io::{self, Stdout, Write}};
use tracing::debug;
use super::{builtin::{error::BuiltinError, Arity, Builtin}, value::Value};

/// The builtin functions and operators, keyed by name.
pub type Registry = HashMap<&'static str, Box<dyn Builtin>>;

/// The registry shared by every context. It is built on first use and never modified.
static REGISTRY: Lazy<Registry> = Lazy::new(crate::funcs::all);

/// Names that declare variables. They are handled by the context itself rather than the registry,
/// but are reserved all the same.
const DECLARATION_KEYWORDS: [&str; 2] = ["init", "let"];

/// A context to use when evaluating a script, containing the declared variables, the builtin
/// functions, and the sink that `print` writes to.
///
/// Scripts are evaluated against a `&mut Ctxt`; nothing about evaluation is global. By default,
/// output is written to [`Stdout`]. Use [`Ctxt::with_output`] to capture it instead.
pub struct Ctxt<W: Write = Stdout> {
    /// The variables in the context.
    vars: HashMap<String, Value>,

    /// The builtin functions and operators available to scripts.
    registry: &'static Registry,

    /// Where `print` writes to.
    out: W,
}

impl Default for Ctxt<Stdout> {
    fn default() -> Self {
        Self::with_output(io::stdout())
    }
}

impl<W: Write> std::fmt::Debug for Ctxt<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ctxt")
            .field("vars", &self.vars)
            .field("registry", &self.registry.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl<W: Write> Ctxt<W> {
    /// Creates an empty context that writes output to the given writer.
    pub fn with_output(out: W) -> Self {
        Self {
            vars: HashMap::new(),
            registry: &REGISTRY,
            out,
        }
    }

    /// Returns a reference to the output sink.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the context, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Returns the value of the variable with the given name.
    pub fn get_var(&self, name: &str) -> Option<Value> {
        self.vars.get(name).cloned()
    }

    /// Returns all declared variables.
    pub fn get_vars(&self) -> &HashMap<String, Value> {
        &self.vars
    }

    /// Returns the builtin with the given name.
    pub fn get_builtin(&self, name: &str) -> Option<&dyn Builtin> {
        self.registry.get(name).map(|builtin| &**builtin)
    }

    /// Returns true if the name belongs to a builtin function, operator, or declaration keyword.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.registry.contains_key(name) || DECLARATION_KEYWORDS.contains(&name)
    }

    /// Returns the names of the builtins whose names are within one edit of the given name.
    pub fn get_similar_funcs(&self, name: &str) -> Vec<&'static str> {
        let mut similar = self.registry
            .keys()
            .chain(DECLARATION_KEYWORDS.iter())
            .copied()
            .filter(|candidate| levenshtein(candidate, name) <= 1)
            .collect::<Vec<_>>();
        similar.sort_unstable();
        similar
    }

    /// Declares a variable, replacing any previous value. Fails if the name is reserved.
    pub fn declare(&mut self, name: &str, value: Value) -> Result<(), BuiltinError> {
        if self.is_reserved(name) {
            return Err(BuiltinError::ReservedName { name: name.to_string() });
        }

        debug!(name, %value, "declare");
        self.vars.insert(name.to_string(), value);
        Ok(())
    }

    /// Invokes the builtin with the given name.
    ///
    /// `init` is handled here: it takes the name to declare as a [`Value::Symbol`], followed by
    /// the value, and returns the stored value.
    pub fn invoke(&mut self, name: &str, args: Vec<Value>) -> Result<Value, BuiltinError> {
        if name == "init" {
            return self.init(args);
        }

        let registry = self.registry;
        let Some(builtin) = registry.get(name) else {
            return Err(BuiltinError::UndefinedFunction {
                name: name.to_string(),
                suggestions: self.get_similar_funcs(name)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            });
        };

        builtin.arity().check(name, args.len())?;
        debug!(name, args = args.len(), "invoke");
        builtin.eval(&mut self.out, args)
    }

    /// Declares a variable from the arguments of `init`.
    fn init(&mut self, args: Vec<Value>) -> Result<Value, BuiltinError> {
        Arity::Exact(2).check("init", args.len())?;
        let mut args = args.into_iter();
        match (args.next(), args.next()) {
            (Some(Value::Symbol(name)), Some(value)) => {
                self.declare(&name, value.clone())?;
                Ok(value)
            },
            (Some(other), _) => Err(BuiltinError::TypeMismatch {
                name: "init".to_string(),
                index: 0,
                expected: "Symbol",
                given: other.typename(),
            }),
            _ => unreachable!("arity was checked"),
        }
    }
}
