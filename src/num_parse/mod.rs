/// Parses one decimal `i32` token: an optional `+` or `-` followed by at
/// least one ASCII digit. Returns `None` on any other character or on
/// overflow.
pub fn parse_i32(s: &str) -> Option<i32> {
    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    if digits.is_empty() {
        return None;
    }

    let mut res = 0_i32;
    let iter = digits
        .chars()
        .map(|d| (d as u32).checked_sub('0' as u32));
    for digit in iter {
        let digit = digit.filter(|d| *d <= 9)? as i32;
        // accumulate negatively so i32::MIN does not overflow
        res = res.checked_mul(10_i32)?;
        res = if negative {
            res.checked_sub(digit)?
        } else {
            res.checked_add(digit)?
        };
    }

    Some(res)
}
