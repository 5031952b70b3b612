use indexmap::IndexMap;
use serde_json::Value;

/// Key under the manifest's `extra` block that holds the comments.
pub const COMMENTS_KEY: &str = "package-comments";

/// Package name → comment, in the order the manifest declares them.
///
/// Declared in `composer.json` like this:
///
/// ```json
/// "extra": {
///     "package-comments": {
///         "vendor/package1": "This is a comment for package 1",
///         "vendor/package2": "This is a comment for package 2"
///     }
/// }
/// ```
#[derive(Debug, Default, Clone)]
pub struct CommentStore {
    comments: IndexMap<String, String>,
}

impl CommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_extra(extra: Option<&Value>) -> Self {
        let mut store = Self::new();
        store.load(extra);
        store
    }

    /// Replace the store's contents with the comments found in `extra`.
    ///
    /// A missing `extra`, a missing `package-comments` key, or a value that is
    /// not an object all leave the store empty.
    pub fn load(&mut self, extra: Option<&Value>) {
        let mut comments = IndexMap::new();

        if let Some(map) = extra
            .and_then(|e| e.get(COMMENTS_KEY))
            .and_then(Value::as_object)
        {
            for (package, comment) in map {
                match comment.as_str() {
                    Some(text) => {
                        comments.insert(package.clone(), text.to_string());
                    }
                    None => {
                        tracing::warn!(
                            package = %package,
                            "ignoring package comment that is not a string"
                        );
                    }
                }
            }
        }

        tracing::debug!(count = comments.len(), "loaded package comments");
        self.comments = comments;
    }

    pub fn get(&self, package: &str) -> Option<&str> {
        self.comments.get(package).map(String::as_str)
    }

    pub fn has(&self, package: &str) -> bool {
        self.comments.contains_key(package)
    }

    pub fn all(&self) -> impl Iterator<Item = (&str, &str)> {
        self.comments.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn count(&self) -> usize {
        self.comments.len()
    }
}
