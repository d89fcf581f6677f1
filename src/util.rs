use num::Integer;

pub(crate) fn mod_inverse(a: i64, modulus: i64) -> Option<i64> {
    let e = a.rem_euclid(modulus).extended_gcd(&modulus);
    if e.gcd == 1 {
        Some(e.x.rem_euclid(modulus))
    } else {
        None
    }
}

#[test]
fn test_mod_inverse() {
    assert_eq!(mod_inverse(3, 26), Some(9));
    assert_eq!(mod_inverse(9, 26), Some(3));
    assert_eq!(mod_inverse(25, 26), Some(25));
    assert_eq!(mod_inverse(2, 26), None);
    assert_eq!(mod_inverse(13, 26), None);
}

#[test]
fn test_mod_inverse_of_negative_representative() {
    // -3 = 23 mod 26, and 23 * 17 = 391 = 15*26 + 1
    assert_eq!(mod_inverse(-3, 26), Some(17));
}
