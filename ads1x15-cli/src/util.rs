use std::ops::RangeInclusive;

/// Addresses selectable with the ADDR strap.
const ADDRESSES: RangeInclusive<u8> = ads1x15::DEFAULT_ADDRESS..=ads1x15::DEFAULT_ADDRESS + 3;

/// Parse a hexadecimal device address, with or without a `0x` prefix.
pub(crate) fn address_from_hex(value: &str) -> Result<u8, String> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    let address = u8::from_str_radix(digits, 16).map_err(|e| e.to_string())?;
    if ADDRESSES.contains(&address) {
        Ok(address)
    } else {
        Err(format!(
            "{address:#04x} is not an ADS1x15 address ({:#04x} to {:#04x})",
            ADDRESSES.start(),
            ADDRESSES.end()
        ))
    }
}

#[cfg(test)]
mod test {
    use super::address_from_hex;

    #[test]
    fn prefix_is_optional() {
        assert_eq!(address_from_hex("0x48"), Ok(0x48));
        assert_eq!(address_from_hex("0X4b"), Ok(0x4B));
        assert_eq!(address_from_hex("49"), Ok(0x49));
    }

    #[test]
    fn only_strap_addresses_are_accepted() {
        assert!(address_from_hex("0x47").is_err());
        assert!(address_from_hex("0x4C").is_err());
        assert!(address_from_hex("0x100").is_err());
        assert!(address_from_hex("zz").is_err());
    }
}
