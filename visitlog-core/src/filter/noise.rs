/// Path prefixes that never count as a visit: bundled assets, stylesheets and
/// the favicon the browser fetches on its own.
pub const DEFAULT_NOISE_PREFIXES: &[&str] = &["/assets", "/css", "/favicon"];

/// Decides whether a request target is worth recording.
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    prefixes: Vec<String>,
}

impl NoiseFilter {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `false` for noise.
    pub fn keep(&self, target: &str) -> bool {
        !self.prefixes.iter().any(|p| target.starts_with(p.as_str()))
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::new(DEFAULT_NOISE_PREFIXES.iter().copied())
    }
}
