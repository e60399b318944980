use subtle::ConstantTimeEq;

/// Compares a stored key with a freshly derived one in constant time.
///
/// Lengths are compared first, then contents; neither step branches on
/// where the inputs differ.
pub fn keys_match(stored: &[u8], derived: &[u8]) -> bool {
    let stored_len = stored.len() as u64;
    let derived_len = derived.len() as u64;

    if !bool::from(stored_len.ct_eq(&derived_len)) {
        return false;
    }
    bool::from(stored.ct_eq(derived))
}
