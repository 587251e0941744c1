use std::net::IpAddr;

pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 253;

/// Checks a single label against hostname syntax (letters, digits, `-`, `_`;
/// no leading or trailing hyphen).
pub fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }
    label
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Accepts relative (`example.com`) and fully-qualified (`example.com.`) names.
/// The bare root (`.`) and the empty string are rejected.
pub fn is_valid_hostname(hostname: &str) -> bool {
    let name = hostname.strip_suffix('.').unwrap_or(hostname);
    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return false;
    }
    name.split('.').all(is_valid_label)
}

pub fn is_ip_literal(value: &str) -> bool {
    value.parse::<IpAddr>().is_ok()
}

pub fn is_valid_nameserver(nameserver: &str) -> bool {
    is_valid_hostname(nameserver) || is_ip_literal(nameserver)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_hostnames() {
        assert!(is_valid_hostname("example.com"));
        assert!(is_valid_hostname("example.com."));
        assert!(is_valid_hostname("www.google.com"));
        assert!(is_valid_hostname("_dmarc.example.org"));
        assert!(is_valid_hostname("localhost"));
        assert!(is_valid_hostname("xn--bcher-kva.example"));
    }

    #[test]
    fn test_invalid_hostnames() {
        assert!(!is_valid_hostname(""));
        assert!(!is_valid_hostname("."));
        assert!(!is_valid_hostname("bad..name"));
        assert!(!is_valid_hostname("-leading.example.com"));
        assert!(!is_valid_hostname("trailing-.example.com"));
        assert!(!is_valid_hostname("spa ce.example.com"));
        assert!(!is_valid_hostname("semi;colon.com"));
    }

    #[test]
    fn test_label_length_limit() {
        let ok = "a".repeat(63);
        let too_long = "a".repeat(64);
        assert!(is_valid_hostname(&format!("{ok}.com")));
        assert!(!is_valid_hostname(&format!("{too_long}.com")));
    }

    #[test]
    fn test_name_length_limit() {
        let label = "a".repeat(50);
        let long_name = vec![label.as_str(); 6].join(".");
        assert!(long_name.len() > MAX_NAME_LEN);
        assert!(!is_valid_hostname(&long_name));
    }

    #[test]
    fn test_nameserver_accepts_hostnames_and_ip_literals() {
        assert!(is_valid_nameserver("8.8.8.8"));
        assert!(is_valid_nameserver("2001:4860:4860::8888"));
        assert!(is_valid_nameserver("ns1.example.net"));
        assert!(!is_valid_nameserver("not a server"));
        assert!(!is_valid_nameserver(""));
    }
}
