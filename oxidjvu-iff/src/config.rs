//! Parser configuration.

/// Options controlling how strictly a DjVu container is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject unexpected root subtypes and bytes after the root chunk.
    ///
    /// When off, anything after the declared end of the root `FORM` is
    /// ignored and any root subtype is accepted.
    pub strict: bool,
    /// Deepest container nesting accepted; the root is depth 0.
    ///
    /// Real documents nest at most a few levels (document, page, ...). The
    /// limit bounds recursion on malformed input.
    pub max_depth: usize,
}

impl ParseOptions {
    /// Default nesting limit.
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    /// Lenient parsing, the default.
    ///
    /// - Trailing bytes after the root are ignored
    /// - Any `FORM` subtype is accepted at the root
    pub const DEFAULT: Self = Self {
        strict: false,
        max_depth: Self::DEFAULT_MAX_DEPTH,
    };

    /// Strict parsing.
    ///
    /// - Only a single pad byte may follow an odd-sized root
    /// - The root must be `FORM:DJVU`, `FORM:DJVM` or `FORM:DJVI`
    pub const STRICT: Self = Self {
        strict: true,
        max_depth: Self::DEFAULT_MAX_DEPTH,
    };

    /// Create the default options.
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Set strict mode.
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set the nesting limit.
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
