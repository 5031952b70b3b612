use super::error::CommentsError;
use super::store::CommentStore;

pub const NO_COMMENTS: &str = "There are no comments in the composer.json file to display";
pub const HEADER: &str = "Comments found in composer.json:";

/// Every declared comment: a header then one `- name: comment` line per
/// package, or a single line saying there are none.
pub fn report_all(store: &CommentStore) -> Vec<String> {
    if store.count() == 0 {
        return vec![NO_COMMENTS.to_string()];
    }

    let mut lines = Vec::with_capacity(store.count() + 1);
    lines.push(HEADER.to_string());
    lines.extend(
        store
            .all()
            .map(|(package, comment)| format!("- {package}: {comment}")),
    );
    lines
}

pub fn report_one(store: &CommentStore, package: &str) -> Result<String, CommentsError> {
    if !store.has(package) {
        return Err(CommentsError::not_found(package));
    }
    let comment = store.get(package).unwrap_or_default();
    Ok(format!("Comment for package {package}: {comment}"))
}
