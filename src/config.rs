use isostack_core::{ConfigError, StackConfig};

/// Build a config from `(key, value)` overrides.
///
/// Bad overrides are skipped and reported; a result that fails validation
/// falls back to the defaults so a typo in the markup never breaks the stack.
pub fn from_overrides<'a, I>(pairs: I) -> (StackConfig, Vec<ConfigError>)
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut cfg = StackConfig::default();
    let mut errors = Vec::new();
    for (key, value) in pairs {
        if let Err(e) = cfg.apply(key, value) {
            errors.push(e);
        }
    }
    if let Err(e) = cfg.validate() {
        errors.push(e);
        cfg = StackConfig::default();
    }
    (cfg, errors)
}

/// Strip the attribute prefix; non-matching attribute names yield `None`.
#[inline]
pub fn config_key<'a>(attr_name: &'a str, prefix: &str) -> Option<&'a str> {
    attr_name.strip_prefix(prefix).filter(|k| !k.is_empty())
}
