/// Trait for loading configuration from environment variables.
///
/// Implementors derive `serde::Deserialize` and pick a `PREFIX`; field
/// `database_url` on a type with prefix `DIRECTORY_` reads
/// `DIRECTORY_DATABASE_URL`.
pub trait Config: Sized + serde::de::DeserializeOwned {
    const PREFIX: &'static str;

    /// Load from the process environment.
    ///
    /// # Panics
    ///
    /// Panics if any required env var is missing or cannot be deserialized.
    fn from_env() -> Self {
        Self::try_from_env().expect("failed to load config from environment")
    }

    fn try_from_env() -> Result<Self, envy::Error> {
        envy::prefixed(Self::PREFIX).from_env()
    }

    /// Load from an explicit set of `(KEY, value)` pairs. Keys include the prefix.
    fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(Self::PREFIX).from_iter(vars)
    }
}
