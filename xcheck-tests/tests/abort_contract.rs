//! Abort contract tests.
//!
//! A violation ends the process, so each scenario runs in a child copy of
//! this test binary: the parent re-executes itself with the scenario name in
//! `XCHECK_ABORT_SCENARIO`, selecting only the ignored `scenario_child` test,
//! and then inspects the exit status and stderr.

#![allow(clippy::panic, clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use std::process::{Command, Output};

use xcheck_invariants::config::{ENV_DISABLE_KINDS, ENV_DISABLE_TESTS};
use xcheck_invariants::dispatch::{test_digest, test_kdf_pbkdf2, test_symmetric_encrypt};
use xcheck_invariants::{
    ConfigError, InvariantConfig, install_global_config, report_invariant_violation,
};
use xcheck_tests::fixtures::{KdfRequest, ciphertext, kdf_kinds, symmetric_encrypt};
use xcheck_types::operation::{Digest, KdfPbkdf2};
use xcheck_types::{Buffer, CipherType, DigestType, OperationKind};

const SCENARIO_ENV: &str = "XCHECK_ABORT_SCENARIO";
const KDF_MISMATCH_PREFIX: &str = "kdf_mismatch:";

fn pbkdf2(key_size: usize) -> KdfPbkdf2 {
    KdfPbkdf2 {
        digest_type: DigestType::Sha256,
        password: Buffer::from(&b"password"[..]),
        salt: Buffer::from(&b"salt"[..]),
        iterations: 4096,
        key_size,
    }
}

fn run_child(scenario: &str) {
    if let Some(kind) = scenario.strip_prefix(KDF_MISMATCH_PREFIX) {
        let kind: OperationKind = kind.parse().expect("kind name");
        let request = KdfRequest::new(kind, 32).expect("kdf kind");
        request.run_entry_point(Some(&Buffer::zeroed(31)));
        return;
    }

    match scenario {
        "pbkdf2_short_key" => test_kdf_pbkdf2(&pbkdf2(32), Some(&Buffer::zeroed(16))),
        "pbkdf2_exact_key" => test_kdf_pbkdf2(&pbkdf2(32), Some(&Buffer::zeroed(32))),
        "pbkdf2_declined" => test_kdf_pbkdf2(&pbkdf2(32), None),
        "chacha_iv_16" => {
            test_symmetric_encrypt(
                &symmetric_encrypt(CipherType::ChaCha20Poly1305, 16),
                Some(&ciphertext()),
            );
        }
        "chacha_iv_8" => {
            test_symmetric_encrypt(
                &symmetric_encrypt(CipherType::ChaCha20Poly1305, 8),
                Some(&ciphertext()),
            );
        }
        "aes_gcm_iv_16" => {
            test_symmetric_encrypt(&symmetric_encrypt(CipherType::Aes256Gcm, 16), Some(&ciphertext()));
        }
        "digest" => {
            let op = Digest { digest_type: DigestType::Sha256, cleartext: Buffer::from(&b"abc"[..]) };
            test_digest(&op, Some(&Buffer::zeroed(32)));
        }
        "installed_config_skips_pbkdf2" => {
            let config = InvariantConfig::default().without(OperationKind::KdfPbkdf2);
            install_global_config(config).expect("first install");
            test_kdf_pbkdf2(&pbkdf2(32), Some(&Buffer::zeroed(16)));
        }
        "install_after_first_check" => {
            test_kdf_pbkdf2(&pbkdf2(32), Some(&Buffer::zeroed(32)));
            assert_eq!(
                install_global_config(InvariantConfig::disabled()),
                Err(ConfigError::AlreadyInitialized)
            );
            test_kdf_pbkdf2(&pbkdf2(32), Some(&Buffer::zeroed(16)));
        }
        "report_direct" => report_invariant_violation(&["Digest", "custom", "detail"]),
        other => panic!("unknown scenario {other}"),
    }
}

#[test]
#[ignore = "executed in a child process by the abort contract tests"]
fn scenario_child() {
    let Ok(scenario) = std::env::var(SCENARIO_ENV) else {
        return;
    };
    run_child(&scenario);
}

fn spawn(scenario: &str, env: &[(&str, &str)]) -> Output {
    let exe = std::env::current_exe().expect("test binary path");
    let mut cmd = Command::new(exe);
    cmd.args(["scenario_child", "--exact", "--ignored", "--nocapture", "--test-threads=1"])
        .env(SCENARIO_ENV, scenario)
        .env_remove(ENV_DISABLE_TESTS)
        .env_remove(ENV_DISABLE_KINDS)
        .env_remove("RUST_LOG");
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().expect("spawn child test binary")
}

fn assert_aborted(output: &Output, expected_line: &str) {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        assert_eq!(output.status.signal(), Some(6), "expected SIGABRT, got {:?}", output.status);
    }
    #[cfg(not(unix))]
    assert!(!output.status.success(), "expected abnormal termination");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.lines().any(|line| line == expected_line),
        "stderr lacks {expected_line:?}:\n{stderr}"
    );
}

fn assert_survived(output: &Output) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "child failed with {:?}:\n{stderr}", output.status);
    assert!(!stderr.contains("Assertion failure"), "unexpected report:\n{stderr}");
}

#[test]
fn abort_pbkdf2_short_key() {
    let output = spawn("pbkdf2_short_key", &[]);
    assert_aborted(&output, "Assertion failure: KDF_PBKDF2-invalid keySize");
}

#[test]
fn survives_pbkdf2_exact_key() {
    assert_survived(&spawn("pbkdf2_exact_key", &[]));
}

#[test]
fn survives_pbkdf2_declined() {
    assert_survived(&spawn("pbkdf2_declined", &[]));
}

#[test]
fn abort_every_kdf_kind_on_mismatch() {
    for kind in kdf_kinds() {
        let output = spawn(&format!("{KDF_MISMATCH_PREFIX}{kind}"), &[]);
        assert_aborted(&output, &format!("Assertion failure: {}-invalid keySize", kind.name()));
    }
}

#[test]
fn abort_chacha20_poly1305_long_iv() {
    let output = spawn("chacha_iv_16", &[]);
    assert_aborted(
        &output,
        "Assertion failure: SymmetricEncrypt-CHACHA20_POLY1305 IV longer than 12 bytes (CVE-2019-1543)",
    );
}

#[test]
fn survives_chacha20_poly1305_short_iv() {
    assert_survived(&spawn("chacha_iv_8", &[]));
}

#[test]
fn survives_aes_gcm_long_iv() {
    assert_survived(&spawn("aes_gcm_iv_16", &[]));
}

#[test]
fn survives_digest() {
    assert_survived(&spawn("digest", &[]));
}

#[test]
fn abort_direct_report_joins_diagnostics() {
    let output = spawn("report_direct", &[]);
    assert_aborted(&output, "Assertion failure: Digest-custom-detail");
}

#[test]
fn survives_pbkdf2_short_key_when_kind_disabled() {
    assert_survived(&spawn("pbkdf2_short_key", &[(ENV_DISABLE_KINDS, "KDF_PBKDF2")]));
}

#[test]
fn survives_pbkdf2_short_key_when_all_disabled() {
    assert_survived(&spawn("pbkdf2_short_key", &[(ENV_DISABLE_TESTS, "1")]));
}

#[test]
fn abort_pbkdf2_short_key_when_other_kind_disabled() {
    let output = spawn("pbkdf2_short_key", &[(ENV_DISABLE_KINDS, "KDF_HKDF,CMAC")]);
    assert_aborted(&output, "Assertion failure: KDF_PBKDF2-invalid keySize");
}

#[test]
fn abort_pbkdf2_short_key_with_unparsable_config() {
    let output = spawn("pbkdf2_short_key", &[(ENV_DISABLE_KINDS, "KDF_PBKDF2,NOT_A_KIND")]);
    assert_aborted(&output, "Assertion failure: KDF_PBKDF2-invalid keySize");
}

#[test]
fn survives_pbkdf2_short_key_with_installed_config() {
    assert_survived(&spawn("installed_config_skips_pbkdf2", &[]));
}

#[test]
fn abort_pbkdf2_short_key_when_install_comes_too_late() {
    let output = spawn("install_after_first_check", &[]);
    assert_aborted(&output, "Assertion failure: KDF_PBKDF2-invalid keySize");
}
