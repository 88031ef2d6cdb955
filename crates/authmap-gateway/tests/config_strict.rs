#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use authmap_gateway::config;
use authmap_gateway::policy::RouteTable;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
routes:
  - method: GET
    path: /admin
    rol: admin # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
routes:
  - { method: get, path: /admin, role: admin }
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:3000");
    assert_eq!(cfg.server.role_header, "x-authmap-role");
    assert_eq!(cfg.routes[0].role, "admin");
}

#[test]
fn unsupported_version() {
    let bad = r#"
version: 2
routes:
  - { method: GET, path: /admin, role: admin }
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn no_routes_rejected() {
    let err = config::load_from_str("version: 1\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn bad_listen_and_header_rejected() {
    let bad_listen = r#"
version: 1
server: { listen: "not-an-addr" }
routes:
  - { method: GET, path: /admin, role: admin }
"#;
    assert!(config::load_from_str(bad_listen).is_err());

    let bad_header = r#"
version: 1
server: { role_header: "bad header" }
routes:
  - { method: GET, path: /admin, role: admin }
"#;
    assert!(config::load_from_str(bad_header).is_err());
}

#[test]
fn empty_role_is_invalid_policy_at_compile() {
    let cfg = config::load_from_str(
        r#"
version: 1
routes:
  - { method: GET, path: /admin, role: "" }
"#,
    )
    .expect("schema is valid");

    let err = RouteTable::compile(&cfg).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_POLICY");
}

#[test]
fn repo_sample_config_loads() {
    let cfg = config::load_from_file("../../authmap.yaml").expect("sample config");
    let table = RouteTable::compile(&cfg).expect("sample compiles");
    assert_eq!(table.len(), 6);
}
