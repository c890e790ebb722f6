/// Key namespace of one subsystem
///
/// Keys expand to `"{prefix}-{title}-{key}"`, or `"{title}-{key}"` when the
/// prefix is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace {
    prefix: String,
    title: String,
}

impl Namespace {
    pub fn new(prefix: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            title: title.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn expand(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            format!("{}-{}", self.title, key)
        } else {
            format!("{}-{}-{}", self.prefix, self.title, key)
        }
    }
}
