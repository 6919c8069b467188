use uuid::Uuid;

/// Generate a new record identifier.
///
/// UUID v7 keeps ids collision resistant while still sorting by creation time.
pub fn new_id() -> String {
    Uuid::now_v7().to_string()
}

#[cfg(test)]
mod primitives_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    fn it_should_generate_parseable_v7_ids() {
        let id = new_id();
        let parsed = Uuid::parse_str(&id).expect("id should be a uuid");
        assert_eq!(parsed.get_version_num(), 7);
    }

    #[rstest]
    fn it_should_not_repeat_ids() {
        let ids: HashSet<String> = (0..1_000).map(|_| new_id()).collect();
        assert_eq!(ids.len(), 1_000);
    }
}
