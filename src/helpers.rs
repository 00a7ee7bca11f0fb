use itertools::Itertools;

/// Parse a `0x`-prefixed hexadecimal number, as used for ROM offsets and lengths.
pub fn parse_hex(s: &str) -> Result<usize, String> {
    let Some(digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) else {
        return Err(format!("'{}' is not a hex value (e.g. 0x3F)", s));
    };
    usize::from_str_radix(digits, 16).map_err(|e| format!("'{}': {}", s, e))
}

/// Space separated uppercase hex, e.g. `FF 00 3C`.
pub fn hex_bytes(data: &[u8]) -> String {
    data.iter().map(|b| format!("{:02X}", b)).join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_values() {
        assert_eq!(parse_hex("0x3f"), Ok(0x3F));
        assert_eq!(parse_hex("0X10"), Ok(0x10));
        assert!(parse_hex("16").is_err());
        assert!(parse_hex("0x").is_err());
        assert!(parse_hex("0xZZ").is_err());
    }

    #[test]
    fn hex_dump() {
        assert_eq!(hex_bytes(&[0xFF, 0x00, 0x3C]), "FF 00 3C");
        assert_eq!(hex_bytes(&[]), "");
    }
}
