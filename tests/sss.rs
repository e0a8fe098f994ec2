use gfshare::{ShareError, WeakRng, combine, combine_with_rng, refresh, refresh_with_rng, split, split_with_rng};

const IDS: [u8; 5] = [1, 2, 3, 4, 5];

#[test]
fn split_and_combine_roundtrip() {
    let secret = b"shamir works";

    let shares = split(secret, 3, &IDS).unwrap();
    let recovered = combine(&shares[..3]).unwrap();

    assert_eq!(recovered.as_slice(), secret);
}

#[test]
fn combine_order_independent() {
    let secret = b"order does not matter";

    let shares = split(secret, 3, &IDS).unwrap();
    let recovered = combine(&[shares[4].clone(), shares[1].clone(), shares[3].clone()]).unwrap();

    assert_eq!(recovered.as_slice(), secret);
}

#[test]
fn combine_checks_every_surplus_share() {
    let secret = b"all five";

    let mut shares = split(secret, 3, &IDS).unwrap();
    assert_eq!(combine(&shares).unwrap().as_slice(), secret);

    shares[4].data[2] ^= 0x10;
    assert!(matches!(combine(&shares), Err(ShareError::IntegrityViolation)));
    assert_eq!(combine(&shares[..4]).unwrap().as_slice(), secret);
}

#[test]
fn combine_fails_with_not_enough_shares() {
    let shares = split(b"threshold matters", 3, &IDS).unwrap();

    assert!(matches!(
        combine(&shares[..2]),
        Err(ShareError::InsufficientShares { required: 3, present: 2 })
    ));
    assert!(matches!(
        combine(&[]),
        Err(ShareError::InsufficientShares { .. })
    ));
}

#[test]
fn combine_fails_with_duplicate_ids() {
    let mut shares = split(b"duplicate ids", 3, &IDS).unwrap();
    shares[1].coordinate = shares[0].coordinate;

    assert!(matches!(
        combine(&shares[..3]),
        Err(ShareError::DuplicateCoordinate(1))
    ));
}

#[test]
fn combine_fails_with_zero_id() {
    let mut shares = split(b"zero id", 2, &IDS).unwrap();
    shares[0].coordinate = 0;

    assert!(matches!(combine(&shares[..2]), Err(ShareError::InvalidCoordinate)));
}

#[test]
fn combine_fails_with_inconsistent_threshold() {
    let mut shares = split(b"inconsistent threshold", 3, &IDS).unwrap();
    shares[0].threshold = 4;

    assert!(matches!(combine(&shares[..3]), Err(ShareError::InconsistentShares)));
}

#[test]
fn combine_fails_with_inconsistent_length() {
    let mut shares = split(b"inconsistent length", 3, &IDS).unwrap();
    shares[0].data.pop();

    assert!(matches!(combine(&shares[..3]), Err(ShareError::InconsistentShares)));
}

#[test]
fn split_rejects_bad_parameters() {
    assert!(matches!(split(b"", 2, &IDS), Err(ShareError::InvalidSize { size: 0, .. })));
    assert!(matches!(
        split(b"x", 0, &IDS),
        Err(ShareError::InvalidThreshold { threshold: 0, .. })
    ));
    assert!(matches!(
        split(b"x", 6, &IDS),
        Err(ShareError::InvalidThreshold { threshold: 6, sharecount: 5 })
    ));
    assert!(matches!(
        split(b"x", 1, &[]),
        Err(ShareError::InvalidThreshold { sharecount: 0, .. })
    ));
}

#[test]
fn refresh_preserves_secret() {
    let secret = b"refresh preserves secret";

    let shares = split(secret, 3, &IDS).unwrap();
    let refreshed = refresh(&shares).unwrap();

    assert!(refreshed.iter().zip(&shares).all(|(new, old)| new.coordinate == old.coordinate));
    assert!(refreshed.iter().zip(&shares).any(|(new, old)| new.data != old.data));

    assert_eq!(combine(&refreshed[..3]).unwrap().as_slice(), secret);
    assert_eq!(combine(&refreshed).unwrap().as_slice(), secret);
}

#[test]
fn old_and_new_shares_cannot_mix() {
    let secret = b"refresh isolation";

    let shares = split_with_rng(secret, 3, &IDS, WeakRng::new(1)).unwrap();
    let refreshed = refresh_with_rng(&shares, WeakRng::new(2)).unwrap();

    let mixed = vec![shares[0].clone(), refreshed[1].clone(), refreshed[2].clone()];
    let result = combine(&mixed);

    assert!(result.is_err() || result.unwrap().as_slice() != secret);

    let mixed = vec![refreshed[0].clone(), refreshed[1].clone(), refreshed[2].clone(), shares[3].clone()];
    assert!(matches!(combine(&mixed), Err(ShareError::IntegrityViolation)));
}

#[test]
fn refresh_needs_a_threshold_of_shares() {
    let shares = split(b"partial", 3, &IDS).unwrap();

    assert!(matches!(
        refresh(&shares[..2]),
        Err(ShareError::InsufficientShares { required: 3, present: 2 })
    ));
}

#[test]
fn various_secret_sizes() {
    for size in [1usize, 2, 7, 16, 32, 64, 128, 4096] {
        let secret = vec![0x42u8; size];

        let shares = split(&secret, 3, &IDS).unwrap();
        let recovered = combine(&shares[..3]).unwrap();

        assert_eq!(*recovered, secret);
    }
}

#[test]
fn threshold_one() {
    let secret = b"threshold one";

    let shares = split(secret, 1, &IDS).unwrap();
    let recovered = combine(&[shares[2].clone()]).unwrap();

    assert_eq!(recovered.as_slice(), secret);
}

#[test]
fn full_coordinate_range() {
    let ids: Vec<u8> = (1..=255).collect();
    let secret = b"two hundred fifty five";

    let shares = split_with_rng(secret, 200, &ids, WeakRng::new(3)).unwrap();
    assert_eq!(shares.len(), 255);

    assert_eq!(combine(&shares[55..]).unwrap().as_slice(), secret);
    assert_eq!(combine(&shares).unwrap().as_slice(), secret);
}

#[test]
fn combine_with_injected_rng() {
    let secret = b"no os entropy needed";

    let shares = split_with_rng(secret, 3, &IDS, WeakRng::new(4)).unwrap();

    let first = combine_with_rng(&shares[1..4], WeakRng::new(5)).unwrap();
    let second = combine_with_rng(&shares, WeakRng::new(6)).unwrap();
    assert_eq!(first.as_slice(), secret);
    assert_eq!(second.as_slice(), secret);

    let mut tampered = shares.clone();
    tampered[3].data[0] ^= 0x20;
    assert!(matches!(
        combine_with_rng(&tampered, WeakRng::new(7)),
        Err(ShareError::IntegrityViolation)
    ));
}
