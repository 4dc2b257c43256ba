//! # Flag Register Tests

use std::cmp::Ordering;

use ls8_core::core::arch::Flags;
use rstest::rstest;

#[rstest]
#[case(Ordering::Equal, 0b001, true, false, false)]
#[case(Ordering::Greater, 0b010, false, true, false)]
#[case(Ordering::Less, 0b100, false, false, true)]
fn test_set_compare_sets_exactly_one_bit(
    #[case] ordering: Ordering,
    #[case] bits: u8,
    #[case] e: bool,
    #[case] g: bool,
    #[case] l: bool,
) {
    let mut fl = Flags::from_bits(0b111);
    fl.set_compare(ordering);
    assert_eq!(fl.bits(), bits);
    assert_eq!((fl.equal(), fl.greater(), fl.less()), (e, g, l));
}

#[test]
fn test_flags_default_clear() {
    let fl = Flags::default();
    assert_eq!(fl.bits(), 0);
    assert!(!fl.equal());
}

#[test]
fn test_flags_serialize_as_raw_byte() {
    let json = serde_json::to_string(&Flags::from_bits(0b010)).unwrap();
    assert_eq!(json, "2");
}
