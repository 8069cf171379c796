//! Thread Safety Tests
//!
//! Verifies that concurrent invariant checks need no coordination.

#[cfg(test)]
mod tests {
    use crate::fixtures::{KdfRequest, ciphertext, kdf_kinds, symmetric_encrypt};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use xcheck_invariants::dispatch::{evaluate, test_symmetric_encrypt};
    use xcheck_invariants::global_config;
    use xcheck_types::{Buffer, CipherType, OperationKind};

    const NUM_THREADS: usize = 8;
    const ITERATIONS: usize = 200;

    #[test]
    fn concurrent_kdf_checks_all_kinds() {
        let completed = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..NUM_THREADS)
            .map(|t| {
                let completed = Arc::clone(&completed);
                thread::spawn(move || {
                    for i in 0..ITERATIONS {
                        let key_size = (t * ITERATIONS + i) % 97;
                        let key = Buffer::zeroed(key_size);
                        for kind in kdf_kinds() {
                            let request =
                                KdfRequest::new(kind, key_size).expect("kdf kind has a fixture");
                            request.run_entry_point(Some(&key));
                            request.run_entry_point(None);
                        }
                    }
                    completed.fetch_add(1, Ordering::SeqCst);
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("thread should not panic");
        }

        assert_eq!(completed.load(Ordering::SeqCst), NUM_THREADS);
    }

    #[test]
    fn concurrent_symmetric_encrypt_shared_descriptor() {
        let op = Arc::new(symmetric_encrypt(CipherType::ChaCha20Poly1305, 12));
        let ct = Arc::new(ciphertext());

        let handles: Vec<_> = (0..NUM_THREADS)
            .map(|_| {
                let op = Arc::clone(&op);
                let ct = Arc::clone(&ct);
                thread::spawn(move || {
                    for _ in 0..ITERATIONS {
                        test_symmetric_encrypt(&op, Some(&ct));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("thread should not panic");
        }
    }

    #[test]
    fn concurrent_evaluate_agrees_across_threads() {
        let request = Arc::new(KdfRequest::new(OperationKind::KdfHkdf, 32).expect("hkdf fixture"));
        let short = Arc::new(Buffer::zeroed(16));

        let handles: Vec<_> = (0..NUM_THREADS)
            .map(|_| {
                let request = Arc::clone(&request);
                let short = Arc::clone(&short);
                thread::spawn(move || evaluate(request.outcome(Some(&short))))
            })
            .collect();

        let results: Vec<_> =
            handles.into_iter().map(|h| h.join().expect("thread should not panic")).collect();

        assert!(results.iter().all(Result::is_err));
        assert!(results.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn concurrent_config_reads() {
        let handles: Vec<_> = (0..NUM_THREADS)
            .map(|_| {
                thread::spawn(|| {
                    (0..ITERATIONS)
                        .filter(|_| global_config().is_active(OperationKind::Digest))
                        .count()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().expect("thread should not panic"), ITERATIONS);
        }
    }
}
