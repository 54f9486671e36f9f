#![allow(clippy::unwrap_used)]
// Integration tests for the generation pipelines against temp directories.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;

use netdocs_core::render::strip_private_blocks;
use netdocs_core::{Audience, CoreError, NetworkConfig, OutputLayout, Page, Publisher};

// ── Helpers ─────────────────────────────────────────────────────────

const FIXTURE: &str = include_str!("fixtures/network.json");

/// Every sensitive value in the fixture, raw.
const SECRETS: [&str; 10] = [
    "X7y!9qZ",
    "Wald&Wiese<42>",
    "fritz3417",
    "Gletscher-Eis-2024",
    "Onion&Route!13",
    "KFZ0-S89A-861I-ZK5H-7Q3Q-TD86-80DW",
    "owner@mailbox.example",
    "ABCD-EFGH-IJKL-MNOP",
    "94:c6:91:aa:9e:c3",
    "78:8a:20:12:34:56",
];

fn fixture() -> NetworkConfig {
    let cfg: NetworkConfig = serde_json::from_str(FIXTURE).unwrap();
    cfg.validate().unwrap();
    cfg
}

fn stamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 14)
        .unwrap()
        .and_hms_opt(9, 26, 0)
        .unwrap()
}

fn html_files(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".html"))
        .collect()
}

fn escaped(raw: &str) -> String {
    netdocs_core::html::escape(raw).into_owned()
}

// ── Scenario ────────────────────────────────────────────────────────

#[test]
fn test_ck_plus_scenario() {
    let cfg = fixture();
    let publisher = Publisher::new(&cfg, stamp()).unwrap();

    let public = publisher.render(Audience::Public).unwrap();
    let index = public.iter().find(|p| p.page == Page::Index).unwrap();
    assert!(index.content.contains(">12</span>"));
    assert!(index.content.contains("<code>10.10.10.0/24</code>"));
    assert!(index.content.contains("CK+"));
    for page in &public {
        assert!(!page.content.contains("X7y!9qZ"), "leak in {}", page.file_name());
    }

    let private = publisher.render(Audience::Private).unwrap();
    let quick = private
        .iter()
        .find(|p| p.page == Page::QuickReference)
        .unwrap();
    assert!(quick.content.contains("<code>X7y!9qZ</code>"));
}

// ── Redaction completeness ──────────────────────────────────────────

#[test]
fn test_public_tree_contains_no_secret() {
    let cfg = fixture();
    let publisher = Publisher::new(&cfg, stamp()).unwrap();

    for page in publisher.render(Audience::Public).unwrap() {
        for secret in SECRETS {
            assert!(
                !page.content.contains(secret) && !page.content.contains(&escaped(secret)),
                "{} leaks a fixture secret",
                page.file_name()
            );
        }
    }
}

#[test]
fn test_internal_addresses_are_masked_in_public() {
    let cfg = fixture();
    let publisher = Publisher::new(&cfg, stamp()).unwrap();
    let public = publisher.render(Audience::Public).unwrap();

    let admin = public.iter().find(|p| p.page == Page::AdminGuide).unwrap();
    assert!(admin.content.contains("<code>192.168.x.1</code>"));
    assert!(admin.content.contains("<code>192.168.x.108</code>"));
    for page in &public {
        assert!(!page.content.contains("192.168.178."), "{}", page.file_name());
    }
}

#[test]
fn test_mac_addresses_are_redacted_in_any_spelling() {
    let mut value: serde_json::Value = serde_json::from_str(FIXTURE).unwrap();
    value["redaction"]["entries"]
        .as_array_mut()
        .unwrap()
        .push(serde_json::json!({ "literal": "DC-8B-28-0D-E2-97", "kind": "mac" }));
    value["services"]["socat"]["description"] =
        serde_json::json!("Bridge DC-8B-28-0D-E2-97 zum Controller 78:8A:20:12:34:56");
    let cfg: NetworkConfig = serde_json::from_value(value).unwrap();
    cfg.validate().unwrap();

    let publisher = Publisher::new(&cfg, stamp()).unwrap();
    let public = publisher.render(Audience::Public).unwrap();

    let mut described = 0;
    for page in &public {
        for form in ["DC-8B-28-0D-E2-97", "dc:8b:28:0d:e2:97", "78:8A:20:12:34:56"] {
            assert!(!page.content.contains(form), "{} leaks {form}", page.file_name());
        }
        if page.content.contains("Bridge xx:xx:xx:xx:xx:xx zum Controller xx:xx:xx:xx:xx:xx") {
            described += 1;
        }
    }
    assert!(described > 0, "service description not rendered in public pages");
}

// ── Private fidelity ────────────────────────────────────────────────

#[test]
fn test_private_quick_reference_holds_every_secret() {
    let cfg = fixture();
    let publisher = Publisher::new(&cfg, stamp()).unwrap();
    let private = publisher.render(Audience::Private).unwrap();
    let quick = private
        .iter()
        .find(|p| p.page == Page::QuickReference)
        .unwrap();

    for secret in SECRETS {
        assert!(
            quick.content.contains(&escaped(secret)),
            "quick reference is missing a secret"
        );
    }
}

#[test]
fn test_private_runbooks_carry_credentials() {
    let cfg = fixture();
    let publisher = Publisher::new(&cfg, stamp()).unwrap();
    let private = publisher.render(Audience::Private).unwrap();

    let ssh = private.iter().find(|p| p.page == Page::SshCommands).unwrap();
    assert!(ssh.content.contains("ssh root@10.10.10.10"));
    assert!(ssh.content.contains("X7y!9qZ"));
    assert!(ssh.content.contains("Login per SSH-Key."));

    let db = private
        .iter()
        .find(|p| p.page == Page::DatabaseCommands)
        .unwrap();
    assert!(db.content.contains("mongo --port 27117 ace"));
    assert!(db.content.contains("send \"X7y!9qZ\\r\""));
}

// ── Audience-structural equivalence ─────────────────────────────────

#[test]
fn test_shared_pages_match_after_stripping_private_blocks() {
    let cfg = fixture();
    let publisher = Publisher::new(&cfg, stamp()).unwrap();
    let public = publisher.render(Audience::Public).unwrap();
    let private = publisher.render(Audience::Private).unwrap();

    for page in &public {
        let twin = private.iter().find(|p| p.page == page.page).unwrap();
        let stripped = strip_private_blocks(&twin.content);
        let redacted = publisher.sanitizer().table().apply(&stripped);
        assert_eq!(redacted, page.content, "{} diverges", page.file_name());
    }
}

#[test]
fn test_private_blocks_only_in_private_output() {
    let cfg = fixture();
    let publisher = Publisher::new(&cfg, stamp()).unwrap();

    for page in publisher.render(Audience::Public).unwrap() {
        assert!(!page.content.contains("private:begin"));
        assert!(!page.content.contains("PRIVATE VERSION"));
    }
    for page in publisher.render(Audience::Private).unwrap() {
        assert!(page.content.contains("PRIVATE VERSION"));
    }
}

// ── Idempotence ─────────────────────────────────────────────────────

#[test]
fn test_sanitizing_public_output_again_is_a_no_op() {
    let cfg = fixture();
    let publisher = Publisher::new(&cfg, stamp()).unwrap();

    for page in publisher.render(Audience::Public).unwrap() {
        let again = publisher
            .sanitizer()
            .sanitize(page.file_name(), &page.content)
            .unwrap();
        assert_eq!(again, page.content);
    }
}

#[test]
fn test_rerun_is_byte_identical() {
    let cfg = fixture();
    let first = Publisher::new(&cfg, stamp()).unwrap();
    let second = Publisher::new(&cfg, stamp()).unwrap();

    for audience in [Audience::Public, Audience::Private] {
        let a = first.render(audience).unwrap();
        let b = second.render(audience).unwrap();
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.content, y.content);
        }
    }
}

// ── Document-set exactness ──────────────────────────────────────────

#[test]
fn test_written_document_sets() {
    let cfg = fixture();
    let publisher = Publisher::new(&cfg, stamp()).unwrap();
    let out = tempfile::tempdir().unwrap();
    let layout = OutputLayout::new(out.path().join("public"), out.path().join("private")).unwrap();

    let report = publisher
        .publish(&[Audience::Public, Audience::Private], &layout)
        .unwrap();
    assert_eq!(report.written.len(), 15);

    let public = html_files(layout.dir(Audience::Public));
    let private = html_files(layout.dir(Audience::Private));
    assert_eq!(public.len(), 6);
    assert_eq!(private.len(), 9);
    assert!(public.is_subset(&private));
    assert!(!public.contains("quick-reference.html"));
    assert!(!public.contains("ssh-commands.html"));
    assert!(!public.contains("mongodb-commands.html"));
}

#[test]
fn test_private_tree_mirrors_assets_and_has_screenshots_dir() {
    let cfg = fixture();
    let publisher = Publisher::new(&cfg, stamp()).unwrap();
    let out = tempfile::tempdir().unwrap();
    let layout = OutputLayout::new(out.path().join("public"), out.path().join("private")).unwrap();

    let diagrams = layout.dir(Audience::Public).join("diagrams");
    fs::create_dir_all(&diagrams).unwrap();
    fs::write(diagrams.join("network-topology.svg"), "<svg/>").unwrap();

    let report = publisher
        .publish(&[Audience::Public, Audience::Private], &layout)
        .unwrap();

    let private = layout.dir(Audience::Private);
    assert_eq!(report.mirrored, 2);
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    assert!(private.join("css/style.css").is_file());
    assert!(private.join("diagrams/network-topology.svg").is_file());
    assert!(private.join("screenshots").is_dir());
}

#[test]
fn test_private_only_run_warns_about_missing_assets() {
    let cfg = fixture();
    let publisher = Publisher::new(&cfg, stamp()).unwrap();
    let out = tempfile::tempdir().unwrap();
    let layout = OutputLayout::new(out.path().join("public"), out.path().join("private")).unwrap();

    let report = publisher.publish(&[Audience::Private], &layout).unwrap();

    assert_eq!(report.written.len(), 9);
    assert_eq!(report.warnings.len(), 2);
    assert!(!layout.dir(Audience::Public).exists());
}

// ── Failure modes ───────────────────────────────────────────────────

#[test]
fn test_leak_aborts_public_tree_before_any_write() {
    let mut value: serde_json::Value = serde_json::from_str(FIXTURE).unwrap();
    // Masking "pw12" inside the device name assembles the longer note.
    value["devices"]["usg"]["name"] = serde_json::json!("kpw12");
    value["private_notes"] = serde_json::json!([
        { "label": "long", "value": "k••••••••" },
        { "label": "short", "value": "pw12" }
    ]);
    let cfg: NetworkConfig = serde_json::from_value(value).unwrap();
    cfg.validate().unwrap();

    let publisher = Publisher::new(&cfg, stamp()).unwrap();
    let out = tempfile::tempdir().unwrap();
    let layout = OutputLayout::new(out.path().join("public"), out.path().join("private")).unwrap();

    let err = publisher.publish_public(&layout).unwrap_err();
    match &err {
        CoreError::Leak { document, hint, .. } => {
            assert_eq!(document, "index.html");
            assert!(hint.starts_with("private_notes[0]"), "{hint}");
            assert!(!err.to_string().contains("k••••••••"));
        }
        other => panic!("expected leak, got {other:?}"),
    }
    assert!(!layout.dir(Audience::Public).exists());
}

#[test]
fn test_unwritable_public_dir_is_a_write_error() {
    let cfg = fixture();
    let publisher = Publisher::new(&cfg, stamp()).unwrap();
    let out = tempfile::tempdir().unwrap();
    let blocker = out.path().join("public");
    fs::write(&blocker, "not a directory").unwrap();
    let layout = OutputLayout::new(&blocker, out.path().join("private")).unwrap();

    let err = publisher.publish_public(&layout).unwrap_err();
    assert!(matches!(err, CoreError::Write { .. }), "{err:?}");
}

#[test]
fn test_private_tree_inside_public_tree_is_refused() {
    let out = tempfile::tempdir().unwrap();
    let public = out.path().join("public");
    let err = OutputLayout::new(&public, public.join("internal")).unwrap_err();
    assert!(matches!(err, CoreError::OverlappingOutput { .. }), "{err:?}");
    assert!(!err.to_string().is_empty());
    assert!(!public.exists());
}

#[test]
fn test_footer_carries_run_timestamp() {
    let cfg = fixture();
    let publisher = Publisher::new(&cfg, stamp()).unwrap();
    assert_eq!(publisher.generated_at(), "2026-03-14 09:26");
    for page in publisher.render(Audience::Public).unwrap() {
        assert!(page.content.contains("Generiert: 2026-03-14 09:26"));
    }
}
