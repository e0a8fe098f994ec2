use gfshare::{ContextParams, Decoder, Encoder, ShareError, WeakRng};

#[test]
fn invalid_configurations_are_rejected() {
    assert!(matches!(
        ContextParams::new(3, 0, 16),
        Err(ShareError::InvalidThreshold { threshold: 0, sharecount: 3 })
    ));
    assert!(matches!(
        ContextParams::new(3, 4, 16),
        Err(ShareError::InvalidThreshold { threshold: 4, sharecount: 3 })
    ));
    assert!(matches!(
        ContextParams::new(3, 2, 0),
        Err(ShareError::InvalidSize { size: 0, .. })
    ));
    assert!(ContextParams::new(255, 255, 1).is_ok());

    let unchecked = ContextParams {
        sharecount: 2,
        threshold: 3,
        maxsize: 8,
    };
    assert!(matches!(
        Decoder::with_rng(unchecked, WeakRng::new(0)),
        Err(ShareError::InvalidThreshold { .. })
    ));
    assert!(matches!(
        Encoder::with_rng(unchecked, &[1, 2], WeakRng::new(0)),
        Err(ShareError::InvalidThreshold { .. })
    ));
}

#[test]
fn default_params_are_valid() {
    let params = ContextParams::default();
    assert!(params.validate().is_ok());
    assert_eq!((params.sharecount, params.threshold, params.maxsize), (5, 3, 4096));
}

#[test]
fn encoder_needs_a_secret_before_shares() {
    let params = ContextParams::new(2, 2, 4).unwrap();
    let mut encoder = Encoder::with_rng(params, &[1, 2], WeakRng::new(0)).unwrap();

    assert!(matches!(encoder.get_share(0), Err(ShareError::SecretNotSet)));

    encoder.set_secret(b"1234").unwrap();
    assert!(encoder.get_share(0).is_ok());

    // Shrinking the payload invalidates the loaded secret.
    encoder.set_size(2).unwrap();
    assert!(matches!(encoder.get_share(0), Err(ShareError::SecretNotSet)));
    assert!(matches!(
        encoder.set_secret(b"1234"),
        Err(ShareError::LengthMismatch { expected: 2, actual: 4 })
    ));
    encoder.set_secret(b"12").unwrap();
    assert_eq!(encoder.get_share(1).unwrap().len(), 2);
}

#[test]
fn size_changes_are_validated() {
    let params = ContextParams::new(2, 1, 4).unwrap();
    let mut decoder = Decoder::with_rng(params, WeakRng::new(0)).unwrap();

    assert!(matches!(
        decoder.set_size(5),
        Err(ShareError::InvalidSize { size: 5, maxsize: 4 })
    ));
    assert!(matches!(decoder.set_size(0), Err(ShareError::InvalidSize { .. })));
    assert_eq!(decoder.size(), 4);

    decoder.give_shares(&[1], &[b"abcd"]).unwrap();
    decoder.set_size(3).unwrap();
    assert_eq!(decoder.present(), 0);
    assert!(matches!(
        decoder.give_share(0, b"abcd"),
        Err(ShareError::LengthMismatch { expected: 3, actual: 4 })
    ));
    decoder.give_share(0, b"abc").unwrap();
    assert_eq!(decoder.extract().unwrap().as_slice(), b"abc");
}

#[test]
fn released_encoder_fails_fast() {
    let params = ContextParams::new(2, 2, 4).unwrap();
    let mut encoder = Encoder::with_rng(params, &[1, 2], WeakRng::new(0)).unwrap();
    encoder.set_secret(b"abcd").unwrap();

    encoder.release().unwrap();
    assert!(encoder.is_released());

    assert!(matches!(encoder.get_share(0), Err(ShareError::Released)));
    assert!(matches!(encoder.share_at(1), Err(ShareError::Released)));
    assert!(matches!(encoder.set_secret(b"abcd"), Err(ShareError::Released)));
    assert!(matches!(encoder.set_size(2), Err(ShareError::Released)));
    assert!(matches!(encoder.release(), Err(ShareError::Released)));
}

#[test]
fn released_decoder_fails_fast() {
    let params = ContextParams::new(2, 1, 4).unwrap();
    let mut decoder = Decoder::with_rng(params, WeakRng::new(0)).unwrap();
    decoder.give_shares(&[1], &[b"abcd"]).unwrap();

    decoder.release().unwrap();
    assert!(decoder.is_released());
    assert_eq!(decoder.present(), 0);

    assert!(matches!(decoder.extract(), Err(ShareError::Released)));
    assert!(matches!(decoder.give_share(0, b"abcd"), Err(ShareError::Released)));
    assert!(matches!(decoder.set_coordinates(&[1]), Err(ShareError::Released)));
    assert!(matches!(decoder.clear_share(0), Err(ShareError::Released)));
    assert!(matches!(decoder.release(), Err(ShareError::Released)));
}

#[test]
fn independent_contexts_run_concurrently() {
    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            std::thread::spawn(move || {
                let params = ContextParams::new(3, 2, 32).unwrap();
                let secret = [seed as u8; 32];

                let mut encoder = Encoder::with_rng(params, &[1, 2, 3], WeakRng::new(seed)).unwrap();
                encoder.set_secret(&secret).unwrap();
                let shares = encoder.get_shares(&[3, 1]).unwrap();

                let mut decoder = Decoder::with_rng(params, WeakRng::new(seed + 100)).unwrap();
                decoder.give_shares(&[3, 1], &shares).unwrap();
                decoder.extract().unwrap().to_vec() == secret
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
