/// Default maximum nesting depth for arrays and objects.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// How the parser treats a key that appears more than once in one object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    /// Fail with [`ParseErrorKind::DuplicateKey`](crate::ParseErrorKind::DuplicateKey)
    #[default]
    Reject,
    /// Keep the value of the last occurrence
    LastWins,
    /// Keep the value of the first occurrence
    FirstWins,
}

/// Options for record parsing.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Maximum number of nested arrays/objects (default: 128)
    pub max_depth: usize,

    /// Duplicate key policy (default: [`DuplicateKeys::Reject`])
    pub duplicate_keys: DuplicateKeys,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            duplicate_keys: DuplicateKeys::Reject,
        }
    }
}

impl ParseOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth. A depth of zero only admits scalars.
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the duplicate key policy.
    pub const fn duplicate_keys(mut self, policy: DuplicateKeys) -> Self {
        self.duplicate_keys = policy;
        self
    }
}
