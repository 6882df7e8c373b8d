fn main() {
    println!("Run `cargo test -p wire-compat` to execute wire compatibility tests.");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use crdrive_explorer::{InitialModals, ModalKind};
    use crdrive_protocol::constants::{FIELD_ACCESS_LEVEL, FIELD_USERNAME, FIELD_VISIBILITY};
    use crdrive_protocol::messages::{AddUserForm, RemoveUserForm, VisibilityForm};
    use crdrive_protocol::{AccessLevel, ApiResponse, ShareInfoResponse, Visibility};

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Loads a fixture JSON file and returns it as a `serde_json::Value`.
    fn load_fixture(name: &str) -> serde_json::Value {
        let path = fixtures_dir().join(name);
        let data = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
        serde_json::from_str(&data)
            .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
    }

    /// Deserializes a fixture into a Rust type, re-serializes it, and compares
    /// the JSON values (order-independent).
    fn roundtrip_test<T>(name: &str) -> T
    where
        T: serde::de::DeserializeOwned + serde::Serialize,
    {
        let fixture = load_fixture(name);
        let parsed: T = serde_json::from_value(fixture.clone())
            .unwrap_or_else(|e| panic!("failed to deserialize {name}: {e}"));
        let reserialized = serde_json::to_value(&parsed)
            .unwrap_or_else(|e| panic!("failed to re-serialize {name}: {e}"));
        assert_eq!(
            fixture, reserialized,
            "roundtrip mismatch for {name}:\n  server: {fixture}\n  client: {reserialized}"
        );
        parsed
    }

    // --- Server responses ---

    #[test]
    fn fixture_share_info_owner() {
        let info: ShareInfoResponse = roundtrip_test("share_info_owner.json");
        assert!(info.is_owner);
        assert_eq!(info.visibility, Visibility::Private);
        assert_eq!(info.shared_users.len(), 2);
        assert_eq!(info.shared_users[0].username, "alice");
        assert_eq!(info.shared_users[0].access_level, AccessLevel::Write);
    }

    #[test]
    fn fixture_share_info_viewer_fills_defaults() {
        let info: ShareInfoResponse =
            serde_json::from_value(load_fixture("share_info_viewer.json")).unwrap();
        assert!(!info.is_owner);
        assert_eq!(info.visibility, Visibility::Public);
        assert!(info.share_link.is_empty());
        assert!(info.shared_users.is_empty());
    }

    #[test]
    fn fixture_api_response_success() {
        let resp: ApiResponse = roundtrip_test("api_response_success.json");
        assert!(resp.is_success());
        assert_eq!(resp.message, None);
    }

    #[test]
    fn fixture_api_response_error() {
        let resp: ApiResponse = roundtrip_test("api_response_error.json");
        assert!(!resp.is_success());
        assert_eq!(resp.message_or("fallback"), "User not found.");
    }

    #[test]
    fn fixture_page_flags() {
        let flags: InitialModals = serde_json::from_value(load_fixture("page_flags.json")).unwrap();
        assert_eq!(flags.modals(), vec![ModalKind::NewFolder]);
    }

    // --- Request forms ---

    /// Field names of every share form, as the server reads them.
    fn form_keys<T: serde::Serialize>(form: T) -> Vec<String> {
        let value = serde_json::to_value(form).unwrap();
        let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    #[test]
    fn form_field_names() {
        assert_eq!(
            form_keys(VisibilityForm {
                visibility: Visibility::Public
            }),
            vec![FIELD_VISIBILITY]
        );
        assert_eq!(
            form_keys(AddUserForm {
                username: "alice",
                access_level: AccessLevel::Read,
            }),
            vec![FIELD_ACCESS_LEVEL, FIELD_USERNAME]
        );
        assert_eq!(
            form_keys(RemoveUserForm { username: "bob" }),
            vec![FIELD_USERNAME]
        );
    }

    #[test]
    fn form_values() {
        assert_eq!(
            serde_json::to_value(AddUserForm {
                username: "alice",
                access_level: AccessLevel::Write,
            })
            .unwrap(),
            serde_json::json!({ FIELD_USERNAME: "alice", FIELD_ACCESS_LEVEL: "write" })
        );
    }
}
