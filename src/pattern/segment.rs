use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RouteToken {
    Literal(String),
    Param { name: String },
}

impl RouteToken {
    pub fn is_param(&self) -> bool {
        matches!(self, RouteToken::Param { .. })
    }
}

/// A route split into one token per path segment.
///
/// The root path `/` has no tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RoutePattern {
    pub tokens: Vec<RouteToken>,
}

impl RoutePattern {
    pub fn new(tokens: Vec<RouteToken>) -> Self {
        Self { tokens }
    }

    pub fn depth(&self) -> usize {
        self.tokens.len()
    }

    pub fn literal_count(&self) -> usize {
        self.tokens.iter().filter(|t| !t.is_param()).count()
    }

    pub fn param_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_param()).count()
    }

    pub fn is_dynamic(&self) -> bool {
        self.tokens.iter().any(RouteToken::is_param)
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(|t| match t {
            RouteToken::Param { name } => Some(name.as_str()),
            RouteToken::Literal(_) => None,
        })
    }

    /// Two patterns share a shape when they accept exactly the same paths,
    /// whatever their parameter names are.
    pub fn same_shape(&self, other: &RoutePattern) -> bool {
        self.tokens.len() == other.tokens.len()
            && self
                .tokens
                .iter()
                .zip(other.tokens.iter())
                .all(|(a, b)| match (a, b) {
                    (RouteToken::Literal(la), RouteToken::Literal(lb)) => la == lb,
                    (RouteToken::Param { .. }, RouteToken::Param { .. }) => true,
                    _ => false,
                })
    }

    pub fn positional_path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tokens.is_empty() {
            return f.write_str("/");
        }
        for token in &self.tokens {
            match token {
                RouteToken::Literal(lit) => write!(f, "/{lit}")?,
                RouteToken::Param { name } => write!(f, "/:{name}")?,
            }
        }
        Ok(())
    }
}
