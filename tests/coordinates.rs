use gfshare::polynomial::evaluate;
use gfshare::{ContextParams, Coordinate, Decoder, Encoder, ShareError, WeakRng, split_with_rng};

fn params() -> ContextParams {
    ContextParams::new(3, 2, 4).unwrap()
}

#[test]
fn coordinate_rejects_zero() {
    assert!(matches!(Coordinate::new(0), Err(ShareError::InvalidCoordinate)));
    assert_eq!(Coordinate::try_from(9u8).unwrap().get(), 9);
}

#[test]
fn encoder_rejects_zero_in_slot_table() {
    let result = Encoder::with_rng(params(), &[1, 0, 3], WeakRng::new(1));
    assert!(matches!(result, Err(ShareError::InvalidCoordinate)));
}

#[test]
fn encoder_rejects_duplicate_coordinates() {
    let result = Encoder::with_rng(params(), &[4, 5, 4], WeakRng::new(1));
    assert!(matches!(result, Err(ShareError::DuplicateCoordinate(4))));
}

#[test]
fn encoder_requires_one_coordinate_per_slot() {
    let result = Encoder::with_rng(params(), &[1, 2], WeakRng::new(1));
    assert!(matches!(
        result,
        Err(ShareError::LengthMismatch { expected: 3, actual: 2 })
    ));
}

#[test]
fn encoder_rejects_zero_when_evaluating() {
    let mut encoder = Encoder::with_rng(params(), &[1, 2, 3], WeakRng::new(1)).unwrap();
    encoder.set_secret(b"abcd").unwrap();

    assert!(matches!(encoder.share_at(0), Err(ShareError::InvalidCoordinate)));
    assert!(matches!(
        encoder.get_shares(&[1, 0, 2]),
        Err(ShareError::InvalidCoordinate)
    ));
    assert!(matches!(
        encoder.get_share(3),
        Err(ShareError::SlotOutOfRange { slot: 3, sharecount: 3 })
    ));
}

#[test]
fn decoder_rejects_zero_and_duplicates() {
    let mut decoder = Decoder::with_rng(params(), WeakRng::new(2)).unwrap();

    assert!(matches!(
        decoder.set_coordinates(&[0, 1]),
        Err(ShareError::InvalidCoordinate)
    ));
    assert!(matches!(
        decoder.set_coordinates(&[2, 2]),
        Err(ShareError::DuplicateCoordinate(2))
    ));
    assert!(matches!(
        decoder.give_shares(&[0], &[b"abcd"]),
        Err(ShareError::InvalidCoordinate)
    ));
    assert!(matches!(
        decoder.give_share_at(0, 0, b"abcd"),
        Err(ShareError::InvalidCoordinate)
    ));

    decoder.give_share_at(0, 8, b"abcd").unwrap();
    assert!(matches!(
        decoder.give_share_at(1, 8, b"abcd"),
        Err(ShareError::DuplicateCoordinate(8))
    ));
    // Rebinding the same slot is fine.
    decoder.give_share_at(0, 8, b"dcba").unwrap();
}

#[test]
fn decoder_rejects_more_coordinates_than_slots() {
    let mut decoder = Decoder::with_rng(params(), WeakRng::new(3)).unwrap();

    assert!(matches!(
        decoder.set_coordinates(&[1, 2, 3, 4]),
        Err(ShareError::SlotOutOfRange { slot: 3, sharecount: 3 })
    ));
    assert!(matches!(
        decoder.give_shares(&[1, 2], &[b"abcd"]),
        Err(ShareError::LengthMismatch { expected: 2, actual: 1 })
    ));
}

#[test]
fn evaluator_rejects_zero() {
    let mut out = [0u8; 2];
    assert!(matches!(
        evaluate(&[[1u8, 2], [3, 4]], 0, &mut out),
        Err(ShareError::InvalidCoordinate)
    ));
}

#[test]
fn stateless_split_rejects_zero() {
    let result = split_with_rng(b"secret", 2, &[1, 2, 0], WeakRng::new(4));
    assert!(matches!(result, Err(ShareError::InvalidCoordinate)));
}
