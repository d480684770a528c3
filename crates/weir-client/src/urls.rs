//! Route templates for the management API.

/// Object collection: list on GET, create on POST.
pub const OBJECTS: &str = "/apis/v2/objects";

/// A single object: replace on PUT, remove on DELETE.
#[must_use]
pub fn object_item(name: &str) -> String {
    format!("{OBJECTS}/{name}")
}

/// Per-node status of a single object.
#[must_use]
pub fn object_status(name: &str) -> String {
    format!("/apis/v2/status/objects/{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes() {
        assert_eq!(OBJECTS, "/apis/v2/objects");
        assert_eq!(object_item("demo"), "/apis/v2/objects/demo");
        assert_eq!(object_status("demo"), "/apis/v2/status/objects/demo");
    }
}
